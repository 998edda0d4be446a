use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Where the served tree lives. The permitted `doc` directory and the
/// fallback page are resolved relative to `base_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
}

impl Config {
    /// Reads `porter.yaml` (or the file named by `PORTER_CONFIG`) when it
    /// exists, otherwise starts from defaults. The `LISTEN` environment
    /// variable overrides the listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var("PORTER_CONFIG").unwrap_or_else(|_| "porter.yaml".to_string());

        let mut cfg = if Path::new(&path).exists() {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file {path}"))?;
            serde_yaml::from_str(&text)
                .with_context(|| format!("failed to parse config file {path}"))?
        } else {
            Config::default()
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.server.listen_addr = addr;
        }

        Ok(cfg)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
        }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}
