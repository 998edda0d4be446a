use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::{Body, Response};

/// Chunk size for streaming file bodies.
const BUFFER_SIZE: usize = 8192;

pub struct ResponseWriter {
    response: Response,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    /// Writes the header block, then streams the body file if there is one.
    ///
    /// Socket errors propagate to the connection task. File errors do not:
    /// by the time the body file is opened the header (including its
    /// `Content-Length`) is already on the wire, so an open or read failure
    /// here is logged and the connection simply closes short.
    pub async fn write_to_stream(self, stream: &mut TcpStream) -> anyhow::Result<()> {
        tracing::debug!(
            status = self.response.status.as_u16(),
            "sending response header"
        );
        stream.write_all(&self.response.head_bytes()).await?;

        if let Body::File(path) = &self.response.body {
            match File::open(path).await {
                Ok(mut file) => {
                    let mut chunk = vec![0u8; BUFFER_SIZE];
                    loop {
                        match file.read(&mut chunk).await {
                            Ok(0) => break,
                            Ok(n) => stream.write_all(&chunk[..n]).await?,
                            Err(e) => {
                                tracing::error!(
                                    path = %path.display(),
                                    error = %e,
                                    "failed reading response body file"
                                );
                                break;
                            }
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(
                        path = %path.display(),
                        error = %e,
                        "failed opening response body file"
                    );
                }
            }
        }

        stream.flush().await?;
        Ok(())
    }
}
