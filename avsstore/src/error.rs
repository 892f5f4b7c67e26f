use thiserror::Error;

/// Errors surfaced by the storage backend and the search/sort compiler.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("object not found: {0}")]
    ObjectNotFound(i64),

    #[error("object {0} is not a container")]
    NotAContainer(i64),

    #[error("failed to parse search criteria: {0}")]
    SearchParse(String),

    #[error("unknown sort property '{0}'")]
    UnknownSortProperty(String),

    #[error("backend error: {0}")]
    Backend(#[from] anyhow::Error),
}
