//! File store operations
//!
//! This module implements everything behind the router: resolution of
//! request paths into the permitted `doc` tree, the per-method file
//! handlers with their status-code policies, and the per-path write locks
//! that keep concurrent mutations from interleaving.

pub mod handlers;
pub mod locks;
pub mod paths;

pub use locks::PathLocks;
pub use paths::Resolution;
