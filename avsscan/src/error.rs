use thiserror::Error;

/// Errors surfaced by the autoscan engine.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("autoscan directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("cannot remove persistent autoscan directory {0}")]
    PersistentDirectory(String),

    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("filesystem watcher error: {0}")]
    Watcher(#[from] notify::Error),

    #[error("scan task channel closed")]
    ChannelClosed,
}
