use crate::http::request::{Method, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended before the blank line that terminates the header block.
    Truncated,
    /// A terminated header block with nothing in it.
    Empty,
    /// The request line did not carry both a method token and a path token.
    MalformedRequestLine,
    /// Header bytes were not valid UTF-8.
    InvalidEncoding,
    /// Header block grew past the size cap before terminating.
    TooLarge,
}

/// Incremental scanner for the end of an HTTP/1.x header block.
///
/// Feed it one octet at a time; it reports completion when an empty line
/// (CR LF immediately followed by CR LF) has been consumed. The state is a
/// sliding pair check: `newline` records whether the previous two bytes
/// formed CR LF. A reversed LF CR pair must not clear that flag: the
/// blank line's own CR arrives exactly as such a pair, and the contiguous
/// CR LF CR LF terminator is only recognizable while the flag survives it.
#[derive(Debug, Default)]
pub struct HeaderScanner {
    prev: u8,
    newline: bool,
}

impl HeaderScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one byte. Returns `true` on the final LF of the terminating
    /// blank line; that byte is not part of the header text.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.newline && self.prev == b'\r' && byte == b'\n' {
            return true;
        }

        if self.prev == b'\r' && byte == b'\n' {
            self.newline = true;
        } else if !(self.prev == b'\n' && byte == b'\r') {
            self.newline = false;
        }

        self.prev = byte;
        false
    }
}

/// Parses the request line out of a terminated header block.
///
/// The block is split into lines and only the first is interpreted: it is
/// split on single spaces, the first token is the method and the second the
/// resource path. Exactly one leading `/` is stripped from the path when
/// present; nothing else (percent sequences, dot segments, query strings)
/// is decoded or normalized here.
pub fn parse_request(header: &str) -> Result<Request, ParseError> {
    if header.is_empty() {
        return Err(ParseError::Empty);
    }

    let request_line = header.lines().next().unwrap_or("");
    let mut tokens = request_line.split(' ');

    let method = tokens.next().ok_or(ParseError::MalformedRequestLine)?;
    let target = tokens.next().ok_or(ParseError::MalformedRequestLine)?;

    let path = target.strip_prefix('/').unwrap_or(target);

    Ok(Request {
        method: Method::from_token(method),
        path: path.to_string(),
    })
}
