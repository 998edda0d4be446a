use porter::config::Config;
use std::path::PathBuf;
use std::sync::Mutex;

// Config::load reads PORTER_CONFIG and LISTEN; tests that touch the
// environment take this lock so they do not trample each other.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn test_config_defaults() {
    let _env = ENV_LOCK.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();

    // Point at a file that does not exist so the crate's own porter.yaml
    // cannot leak into the test.
    unsafe {
        std::env::set_var("PORTER_CONFIG", dir.path().join("absent.yaml"));
        std::env::remove_var("LISTEN");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:3000");
    assert_eq!(cfg.files.base_dir, PathBuf::from("."));

    unsafe {
        std::env::remove_var("PORTER_CONFIG");
    }
}

#[test]
fn test_config_from_yaml_file() {
    let _env = ENV_LOCK.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("porter.yaml");
    std::fs::write(
        &path,
        "server:\n  listen_addr: \"0.0.0.0:8080\"\n\nfiles:\n  base_dir: \"/srv/files\"\n",
    )
    .unwrap();

    unsafe {
        std::env::set_var("PORTER_CONFIG", &path);
        std::env::remove_var("LISTEN");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "0.0.0.0:8080");
    assert_eq!(cfg.files.base_dir, PathBuf::from("/srv/files"));

    unsafe {
        std::env::remove_var("PORTER_CONFIG");
    }
}

#[test]
fn test_config_partial_yaml_falls_back_to_defaults() {
    let _env = ENV_LOCK.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("porter.yaml");
    std::fs::write(&path, "files:\n  base_dir: \"data\"\n").unwrap();

    unsafe {
        std::env::set_var("PORTER_CONFIG", &path);
        std::env::remove_var("LISTEN");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:3000");
    assert_eq!(cfg.files.base_dir, PathBuf::from("data"));

    unsafe {
        std::env::remove_var("PORTER_CONFIG");
    }
}

#[test]
fn test_listen_env_overrides_config_file() {
    let _env = ENV_LOCK.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("porter.yaml");
    std::fs::write(&path, "server:\n  listen_addr: \"0.0.0.0:8080\"\n").unwrap();

    unsafe {
        std::env::set_var("PORTER_CONFIG", &path);
        std::env::set_var("LISTEN", "127.0.0.1:4040");
    }

    let cfg = Config::load().unwrap();
    assert_eq!(cfg.server.listen_addr, "127.0.0.1:4040");

    unsafe {
        std::env::remove_var("PORTER_CONFIG");
        std::env::remove_var("LISTEN");
    }
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let _env = ENV_LOCK.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("porter.yaml");
    std::fs::write(&path, "server: [oops\n").unwrap();

    unsafe {
        std::env::set_var("PORTER_CONFIG", &path);
        std::env::remove_var("LISTEN");
    }

    assert!(Config::load().is_err());

    unsafe {
        std::env::remove_var("PORTER_CONFIG");
    }
}
