//! Porter - Minimal HTTP/1.x File Server
//!
//! Core library for parsing, routing and the file store handlers.

pub mod config;
pub mod http;
pub mod server;
pub mod store;
