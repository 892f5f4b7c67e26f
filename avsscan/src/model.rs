//! Types shared by the timed and inotify scan strategies.

use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};
use std::sync::Arc;

/// Which strategy keeps an autoscan directory's catalog entry up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Polled on a fixed interval.
    Timed,
    /// Driven by filesystem change notifications.
    Inotify,
}

/// A directory subtree the engine keeps synchronized with the catalog.
#[derive(Debug, Clone)]
pub struct AutoscanDirectory {
    pub location: PathBuf,
    pub scan_mode: ScanMode,
    /// Poll interval, quantized to whole seconds. Ignored for `Inotify`.
    pub interval_secs: u64,
    pub recursive: bool,
    pub hidden: bool,
    pub follow_symlinks: bool,
    /// Persistent entries survive process restart and cannot be removed by
    /// a non-persistent caller.
    pub persistent: bool,
    /// Number of consecutive transient failures observed on this subtree.
    pub retry_count: Arc<AtomicU32>,
    /// Unix millis of the end of the previous fully-drained scan.
    pub last_mod_previous_scan: Arc<AtomicI64>,
    /// Unix millis watermark of the scan currently in flight.
    pub last_mod_current_scan: Arc<AtomicI64>,
}

impl AutoscanDirectory {
    pub fn new(location: impl Into<PathBuf>, scan_mode: ScanMode, interval_secs: u64) -> Self {
        Self {
            location: location.into(),
            scan_mode,
            interval_secs: interval_secs.max(1),
            recursive: true,
            hidden: false,
            follow_symlinks: false,
            persistent: false,
            retry_count: Arc::new(AtomicU32::new(0)),
            last_mod_previous_scan: Arc::new(AtomicI64::new(0)),
            last_mod_current_scan: Arc::new(AtomicI64::new(0)),
        }
    }

    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn with_persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// True once a nested directory's `location` starts with this one's.
    pub fn contains(&self, other: &AutoscanDirectory) -> bool {
        other.location != self.location && other.location.starts_with(&self.location)
    }
}

/// A filesystem change, queued for the storage backend to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTask {
    AddOrUpdate { path: PathBuf },
    Remove { path: PathBuf },
    Rename { from: PathBuf, to: PathBuf },
}

impl ScanTask {
    pub fn path(&self) -> &PathBuf {
        match self {
            ScanTask::AddOrUpdate { path } => path,
            ScanTask::Remove { path } => path,
            ScanTask::Rename { to, .. } => to,
        }
    }
}
