//! Request path resolution against the permitted directory tree.

/// First path segment every served or mutated file must live under.
pub const DOC_ROOT: &str = "doc";

/// Resource substituted for an empty request path.
pub const INDEX_PAGE: &str = "doc/index.html";

/// Page served in place of a missing target on GET and HEAD.
pub const NOT_FOUND_PAGE: &str = "doc/file_not_found.html";

/// Outcome of resolving a relative request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Empty path: serve the index page, as a GET, whatever the method was.
    Index,
    /// A path inside the permitted tree, kept relative.
    Doc(String),
    /// A path outside the permitted tree. Answered with 403 Bad Directory
    /// before any method dispatch happens.
    Outside,
}

/// Resolves a relative request path (leading `/` already stripped).
///
/// The containment rule is segment-wise: the first segment must equal
/// `doc` (so `docs/…` is outside), and no `..` segment may appear anywhere,
/// which keeps resolved paths from escaping the tree.
pub fn resolve(path: &str) -> Resolution {
    if path.is_empty() {
        return Resolution::Index;
    }

    if !within_doc_root(path) {
        return Resolution::Outside;
    }

    Resolution::Doc(path.to_string())
}

fn within_doc_root(path: &str) -> bool {
    let mut segments = path.split('/');
    segments.next() == Some(DOC_ROOT) && !path.split('/').any(|segment| segment == "..")
}
