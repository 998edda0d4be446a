use bytes::{Buf, BytesMut};
use std::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::config::FilesConfig;
use crate::http::parser::{self, HeaderScanner, ParseError};
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::http::writer::ResponseWriter;
use crate::store::{PathLocks, Resolution, handlers, paths};

/// Cap on the buffered header block; anything larger is a bad request.
const MAX_HEADER_BYTES: usize = 64 * 1024;

/// Services exactly one request: read the header block, resolve and
/// dispatch, write one response, close. No keep-alive.
pub struct Connection {
    stream: TcpStream,
    buffer: BytesMut,
    files: FilesConfig,
    locks: PathLocks,
}

impl Connection {
    pub fn new(stream: TcpStream, files: FilesConfig, locks: PathLocks) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            files,
            locks,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        let response = match self.read_request().await? {
            Ok(request) => self.handle_request(request).await,
            Err(err) => {
                // Covers truncated input, empty header blocks and mangled
                // request lines alike.
                tracing::warn!(error = ?err, "bad request");
                Response::bare(StatusCode::BadRequest)
            }
        };

        ResponseWriter::new(response)
            .write_to_stream(&mut self.stream)
            .await?;
        self.stream.shutdown().await?;
        Ok(())
    }

    /// Reads up to the header terminator and parses the request line.
    ///
    /// The outer `Result` is socket failure; the inner one is protocol
    /// failure and maps to a 400 response. Bytes past the terminator stay
    /// in the buffer as the beginning of a request body.
    async fn read_request(&mut self) -> anyhow::Result<Result<Request, ParseError>> {
        let mut scanner = HeaderScanner::new();
        let mut head = Vec::with_capacity(512);

        loop {
            while let Some(&byte) = self.buffer.first() {
                self.buffer.advance(1);

                if scanner.push(byte) {
                    // The scanner fired on the blank line's LF; its CR is
                    // the last byte collected. Drop it so `head` is the
                    // header text without the terminating blank line.
                    head.pop();
                    let text = match String::from_utf8(head) {
                        Ok(text) => text,
                        Err(_) => return Ok(Err(ParseError::InvalidEncoding)),
                    };
                    return Ok(parser::parse_request(&text));
                }

                head.push(byte);
                if head.len() > MAX_HEADER_BYTES {
                    return Ok(Err(ParseError::TooLarge));
                }
            }

            let n = self.stream.read_buf(&mut self.buffer).await?;
            if n == 0 {
                // Stream ended before the blank line.
                return Ok(Err(ParseError::Truncated));
            }
        }
    }

    /// Two-level decision: directory containment first, then method
    /// dispatch. The empty path short-circuits both into a GET of the
    /// index page.
    async fn handle_request(&mut self, request: Request) -> Response {
        match paths::resolve(&request.path) {
            Resolution::Outside => Response::bare(StatusCode::BadDirectory),
            Resolution::Index => {
                let index = self.files.base_dir.join(paths::INDEX_PAGE);
                handlers::get(&index, &self.not_found_page()).await
            }
            Resolution::Doc(rel) => {
                let path = self.files.base_dir.join(rel);
                match request.method {
                    Method::Get => handlers::get(&path, &self.not_found_page()).await,
                    Method::Head => handlers::head(&path, &self.not_found_page()).await,
                    Method::Put => match self.read_available_body().await {
                        Ok(body) => handlers::put(&self.locks, &path, &body).await,
                        Err(e) => {
                            tracing::error!(error = %e, "failed reading request body");
                            Response::bare(StatusCode::InternalServerError)
                        }
                    },
                    Method::Post => match self.read_available_body().await {
                        Ok(body) => handlers::post(&self.locks, &path, &body).await,
                        Err(e) => {
                            tracing::error!(error = %e, "failed reading request body");
                            Response::bare(StatusCode::InternalServerError)
                        }
                    },
                    Method::Delete => handlers::delete(&self.locks, &path).await,
                    Method::Unsupported => Response::bare(StatusCode::NotImplemented),
                }
            }
        }
    }

    /// Collects the request body bytes that are available right now: what
    /// was already buffered past the header block, plus whatever
    /// non-blocking reads can drain from the socket at this moment.
    ///
    /// No Content-Length is awaited, so a body the client has not finished
    /// sending gets cut short. Known limitation, kept on purpose; the
    /// Limitations section of the README states the contract for clients.
    async fn read_available_body(&mut self) -> io::Result<Vec<u8>> {
        let mut body = self.buffer.split().to_vec();

        let mut chunk = [0u8; 8192];
        loop {
            match self.stream.try_read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => body.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => return Err(e),
            }
        }

        Ok(body)
    }

    fn not_found_page(&self) -> std::path::PathBuf {
        self.files.base_dir.join(paths::NOT_FOUND_PAGE)
    }
}
