//! Per-path mutual exclusion for mutating handlers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Serializes PUT/POST/DELETE per target path.
///
/// Connections are handled concurrently, so without this two writers to the
/// same file could interleave truncation and appends. Readers do not lock.
/// The table grows with the set of distinct mutated paths and is never
/// pruned; that stays small for a doc tree.
#[derive(Debug, Clone, Default)]
pub struct PathLocks {
    inner: Arc<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>>,
}

impl PathLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the lock for `path`, waiting for any writer already holding it.
    /// The guard releases on drop.
    pub async fn acquire(&self, path: &Path) -> OwnedMutexGuard<()> {
        let lock = {
            let mut table = self.inner.lock().await;
            table.entry(path.to_path_buf()).or_default().clone()
        };
        lock.lock_owned().await
    }
}
