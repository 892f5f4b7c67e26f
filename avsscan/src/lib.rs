//! Filesystem autoscan engine.
//!
//! Keeps the catalog in sync with one or more directory subtrees, either by
//! polling on a fixed interval ([`timed`]) or by reacting to filesystem
//! change notifications ([`inotify`]). Both strategies feed the same
//! [`model::ScanTask`] queue; callers drain it and apply tasks to
//! `avsstore::Storage`.

pub mod counters;
pub mod error;
pub mod inotify;
pub mod model;
pub mod timed;

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc::{self, Receiver, Sender};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::info;

pub use counters::ScanCounters;
pub use error::ScanError;
pub use model::{AutoscanDirectory, ScanMode, ScanTask};

struct Registered {
    dir: AutoscanDirectory,
    handle: JoinHandle<()>,
}

/// Owns every registered `AutoscanDirectory` and the task channel they feed.
pub struct AutoscanEngine {
    directories: RwLock<HashMap<PathBuf, Registered>>,
    counters: ScanCounters,
    tasks_tx: Sender<ScanTask>,
}

impl AutoscanEngine {
    /// Creates the engine and returns it alongside the receiving end of the
    /// task queue. `capacity` bounds how many unapplied tasks may queue up
    /// before scanners start backpressuring.
    pub fn new(capacity: usize) -> (Arc<Self>, Receiver<ScanTask>) {
        let (tasks_tx, tasks_rx) = mpsc::channel(capacity);
        let engine = Arc::new(Self {
            directories: RwLock::new(HashMap::new()),
            counters: ScanCounters::new(),
            tasks_tx,
        });
        (engine, tasks_rx)
    }

    pub fn counters(&self) -> &ScanCounters {
        &self.counters
    }

    /// Registers a directory and spawns its scanner task.
    ///
    /// Two autoscan directories with nested locations are allowed; the
    /// inner entry wins within its own subtree. Registering over an
    /// existing persistent entry with a non-persistent one is rejected.
    pub async fn register(self: &Arc<Self>, dir: AutoscanDirectory) -> Result<(), ScanError> {
        let mut guard = self.directories.write().await;
        if let Some(existing) = guard.get(&dir.location) {
            if existing.dir.persistent && !dir.persistent {
                return Err(ScanError::PersistentDirectory(dir.location.display().to_string()));
            }
            existing.handle.abort();
        }

        let handle = match dir.scan_mode {
            ScanMode::Timed => {
                let scanner = timed::TimedScanner::new(dir.clone(), self.tasks_tx.clone(), self.counters.clone());
                tokio::spawn(scanner.run())
            }
            ScanMode::Inotify => {
                let scanner = inotify::InotifyScanner::new(dir.clone(), self.tasks_tx.clone(), self.counters.clone());
                scanner.run().await?
            }
        };

        info!("autoscan registered {:?} ({:?})", dir.location, dir.scan_mode);
        guard.insert(dir.location.clone(), Registered { dir, handle });
        Ok(())
    }

    /// Removes a directory. Persistent entries can only be removed by
    /// passing `force`.
    pub async fn unregister(&self, location: &std::path::Path, force: bool) -> Result<(), ScanError> {
        let mut guard = self.directories.write().await;
        let existing = guard
            .get(location)
            .ok_or_else(|| ScanError::DirectoryNotFound(location.display().to_string()))?;
        if existing.dir.persistent && !force {
            return Err(ScanError::PersistentDirectory(location.display().to_string()));
        }
        if let Some(entry) = guard.remove(location) {
            entry.handle.abort();
        }
        Ok(())
    }

    pub async fn list(&self) -> Vec<AutoscanDirectory> {
        self.directories.read().await.values().map(|r| r.dir.clone()).collect()
    }
}
