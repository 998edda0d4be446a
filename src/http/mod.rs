//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.x subset: one request per connection, no
//! keep-alive, no chunked transfer encoding. Header lines after the request
//! line are consumed but ignored.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: drives one connection through read, dispatch, write
//! - **`parser`**: finds the end of the header block byte by byte and
//!   extracts method and path from the request line
//! - **`request`**: the parsed request and the closed method enum
//! - **`response`**: status codes, the two response header forms, bodies
//! - **`mime`**: media type lookup by file name suffix
//! - **`writer`**: serializes the header block and streams file bodies
//!
//! # Request lifecycle
//!
//! ```text
//!   accept ─▶ read header block ─▶ parse request line
//!                                       │
//!                 400 ◀─ malformed ─────┤
//!                 403 ◀─ outside doc/ ──┤
//!                 501 ◀─ unknown method ┤
//!                                       ▼
//!                      GET / HEAD / PUT / POST / DELETE
//!                                       │
//!                                       ▼
//!                        write header (+ body for GET) ─▶ close
//! ```
//!
//! Every request resolves to exactly one response header; only GET carries
//! a body after it.
//!
//! # Example
//!
//! ```ignore
//! use porter::config::Config;
//! use porter::server::listener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let cfg = Config::load()?;
//!     listener::run(&cfg).await
//! }
//! ```

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
