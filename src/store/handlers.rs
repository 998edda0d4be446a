//! The five method handlers.
//!
//! Each handler owns its status-code policy and converts its own file I/O
//! failures into a status instead of returning an error; nothing here can
//! take down a connection task. GET is the exception on the failure side:
//! its body is streamed after the header has been written, so streaming
//! failures are the writer's to log (see `http::writer`).

use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::http::response::{Response, StatusCode};
use crate::store::locks::PathLocks;

/// GET: serve the file, or the fallback page under a 404 header.
///
/// The header advertises the length the file had when it was stat'ed; the
/// body is opened and streamed afterwards by the writer. A missing fallback
/// page shows up as a 404 with `Content-Length: 0`.
pub async fn get(path: &Path, not_found_page: &Path) -> Response {
    tracing::info!(path = %path.display(), "GET");

    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() => {
            Response::for_file(StatusCode::Ok, path, meta.len()).with_body(path.to_path_buf())
        }
        _ => {
            let length = fs::metadata(not_found_page)
                .await
                .map(|meta| meta.len())
                .unwrap_or(0);
            Response::for_file(StatusCode::NotFound, not_found_page, length)
                .with_body(not_found_page.to_path_buf())
        }
    }
}

/// HEAD: the GET header without the body.
pub async fn head(path: &Path, not_found_page: &Path) -> Response {
    tracing::info!(path = %path.display(), "HEAD");

    match fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Response::for_file(StatusCode::Ok, path, meta.len()),
        Ok(_) => not_found_head(not_found_page).await,
        Err(e) if e.kind() == ErrorKind::NotFound => not_found_head(not_found_page).await,
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "HEAD failed");
            Response::bare(StatusCode::InternalServerError)
        }
    }
}

async fn not_found_head(not_found_page: &Path) -> Response {
    let length = fs::metadata(not_found_page)
        .await
        .map(|meta| meta.len())
        .unwrap_or(0);
    Response::for_file(StatusCode::NotFound, not_found_page, length)
}

/// PUT: replace the file's contents with the request body.
///
/// 204 when the file existed beforehand, 201 when this request created it.
/// An empty body still truncates.
pub async fn put(locks: &PathLocks, path: &Path, body: &[u8]) -> Response {
    tracing::info!(path = %path.display(), bytes = body.len(), "PUT");
    let _guard = locks.acquire(path).await;

    let existed = fs::metadata(path).await.is_ok();

    match fs::write(path, body).await {
        Ok(()) => {
            if existed {
                Response::bare(StatusCode::NoContent)
            } else {
                Response::bare(StatusCode::Created)
            }
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "PUT failed");
            Response::bare(StatusCode::InternalServerError)
        }
    }
}

/// POST: append the request body to the file, creating it when absent.
///
/// 200 when the file existed beforehand, 201 when this request created it.
pub async fn post(locks: &PathLocks, path: &Path, body: &[u8]) -> Response {
    tracing::info!(path = %path.display(), bytes = body.len(), "POST");
    let _guard = locks.acquire(path).await;

    let existed = fs::metadata(path).await.is_ok();

    let written = if existed {
        append(path, body).await
    } else {
        fs::write(path, body).await
    };

    match written {
        Ok(()) => {
            if existed {
                Response::bare(StatusCode::Ok)
            } else {
                Response::bare(StatusCode::Created)
            }
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "POST failed");
            Response::bare(StatusCode::InternalServerError)
        }
    }
}

async fn append(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut file = fs::OpenOptions::new().append(true).open(path).await?;
    file.write_all(body).await?;
    file.flush().await?;
    Ok(())
}

/// DELETE: remove the file.
///
/// 204 on success, 404 when it never existed, 403 Forbidden when it exists
/// but is not a regular file or the delete itself fails.
pub async fn delete(locks: &PathLocks, path: &Path) -> Response {
    tracing::info!(path = %path.display(), "DELETE");
    let _guard = locks.acquire(path).await;

    match fs::metadata(path).await {
        Err(e) if e.kind() == ErrorKind::NotFound => Response::bare(StatusCode::NotFound),
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "DELETE failed");
            Response::bare(StatusCode::InternalServerError)
        }
        Ok(meta) if !meta.is_file() => Response::bare(StatusCode::Forbidden),
        Ok(_) => match fs::remove_file(path).await {
            Ok(()) => Response::bare(StatusCode::NoContent),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "file exists but was not deleted");
                Response::bare(StatusCode::Forbidden)
            }
        },
    }
}
