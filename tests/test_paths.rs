use porter::store::paths::{self, Resolution};

#[test]
fn test_empty_path_resolves_to_index() {
    assert_eq!(paths::resolve(""), Resolution::Index);
}

#[test]
fn test_paths_under_doc_resolve_inside() {
    assert_eq!(
        paths::resolve("doc/index.html"),
        Resolution::Doc("doc/index.html".to_string())
    );
    assert_eq!(
        paths::resolve("doc/sub/dir/file.txt"),
        Resolution::Doc("doc/sub/dir/file.txt".to_string())
    );
}

#[test]
fn test_bare_doc_root_resolves_inside() {
    // The handlers will refuse it later because it is a directory; the
    // containment check itself lets it through.
    assert_eq!(paths::resolve("doc"), Resolution::Doc("doc".to_string()));
}

#[test]
fn test_paths_outside_doc_are_rejected() {
    assert_eq!(paths::resolve("etc/passwd"), Resolution::Outside);
    assert_eq!(paths::resolve("porter.yaml"), Resolution::Outside);
}

#[test]
fn test_prefix_cousins_are_outside() {
    // Segment comparison, not string prefix: docs/ is not doc/.
    assert_eq!(paths::resolve("docs/page.html"), Resolution::Outside);
    assert_eq!(paths::resolve("documents"), Resolution::Outside);
}

#[test]
fn test_double_slash_paths_are_outside() {
    // After one leading slash is stripped the next one leaves an empty
    // first segment.
    assert_eq!(paths::resolve("/doc/index.html"), Resolution::Outside);
}

#[test]
fn test_dot_dot_segments_are_rejected() {
    assert_eq!(paths::resolve("doc/../porter.yaml"), Resolution::Outside);
    assert_eq!(paths::resolve("doc/sub/../../secret"), Resolution::Outside);
    assert_eq!(paths::resolve("doc/.."), Resolution::Outside);
}

#[test]
fn test_single_dot_segments_are_contained() {
    assert_eq!(
        paths::resolve("doc/./page.html"),
        Resolution::Doc("doc/./page.html".to_string())
    );
}
