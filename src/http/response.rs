use crate::http::mime;
use std::path::{Path, PathBuf};

pub const HTTP_VERSION: &str = "HTTP/1.1";

/// Value of the fixed `Server` identification line on every response.
pub const SERVER_ID: &str = "porter";

/// HTTP status codes used by this server.
///
/// A closed set; the reason phrases are part of the wire protocol. 403 comes
/// in two flavors because the server answers out-of-tree paths with
/// `403 Bad Directory` and undeletable files with `403 Forbidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 204 No Content
    NoContent,
    /// 400 Bad Request
    BadRequest,
    /// 403 Bad Directory - path outside the permitted tree
    BadDirectory,
    /// 403 Forbidden - file exists but could not be deleted
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use porter::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::BadDirectory.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::BadDirectory => 403,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase this server puts on the status line.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::BadDirectory => "Bad Directory",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// Body source written after the header block.
#[derive(Debug)]
pub enum Body {
    /// Header-only response.
    Empty,
    /// File streamed after the header block. Opened by the writer only once
    /// the header is on the wire, which is what keeps late open/read
    /// failures out of the status code.
    File(PathBuf),
}

/// One HTTP response: a fixed-order header block plus an optional body.
///
/// Two header forms exist. The bare form is just the status line and the
/// `Server` line. The file form adds `Content-Type` (when the file name's
/// suffix is in the media-type table) and `Content-Length`. A response
/// built without a length never declares one, so header-only statuses can
/// not lie about a body.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    pub content_length: Option<u64>,
    pub body: Body,
}

impl Response {
    /// Status-only response: status line, `Server` line, blank line.
    pub fn bare(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            content_length: None,
            body: Body::Empty,
        }
    }

    /// Header form describing file content of `length` bytes. Used by GET
    /// (with a body attached) and HEAD (without).
    pub fn for_file(status: StatusCode, filename: &Path, length: u64) -> Self {
        Self {
            status,
            content_type: mime::content_type_for(&filename.to_string_lossy()),
            content_length: Some(length),
            body: Body::Empty,
        }
    }

    /// Attaches a file to stream after the header block.
    pub fn with_body(mut self, path: PathBuf) -> Self {
        self.body = Body::File(path);
        self
    }

    /// Serializes the header block: status line first, then `Content-Type`,
    /// `Content-Length` and `Server` in that order, each line CRLF
    /// terminated, ending with exactly one blank line.
    pub fn head_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();

        let status_line = format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        buf.extend_from_slice(status_line.as_bytes());

        if let Some(media_type) = self.content_type {
            buf.extend_from_slice(format!("Content-Type: {media_type}\r\n").as_bytes());
        }
        if let Some(length) = self.content_length {
            buf.extend_from_slice(format!("Content-Length: {length}\r\n").as_bytes());
        }

        buf.extend_from_slice(format!("Server: {SERVER_ID}\r\n").as_bytes());
        buf.extend_from_slice(b"\r\n");

        buf
    }
}
