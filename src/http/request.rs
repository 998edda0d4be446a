/// HTTP request methods.
///
/// The closed set of methods this server dispatches on. Anything else parses
/// to `Unsupported`, which the router answers with 501; an unknown token is
/// not a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Serve a file
    Get,
    /// HEAD - Like GET but without the response body
    Head,
    /// PUT - Replace a file's contents
    Put,
    /// POST - Append to a file
    Post,
    /// DELETE - Remove a file
    Delete,
    /// Any method token this server does not implement
    Unsupported,
}

/// Represents one parsed request.
///
/// Only the request line matters to this server; header lines after it are
/// read to find the end of the block and then ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// Resource path with exactly one leading `/` stripped (if present).
    /// Not decoded or normalized any further.
    pub path: String,
}

impl Method {
    /// Maps a method token onto the enum.
    ///
    /// Matching is case-sensitive, as on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// # use porter::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::Get);
    /// assert_eq!(Method::from_token("get"), Method::Unsupported);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "PUT" => Method::Put,
            "POST" => Method::Post,
            "DELETE" => Method::Delete,
            _ => Method::Unsupported,
        }
    }
}
