//! Storage-backend trait and the UPnP search/sort compiler.
//!
//! This crate has no opinion on how objects are persisted; it defines the
//! [`storage::Storage`] boundary the rest of the media server core talks to,
//! the [`model`] catalog types that cross that boundary, and the
//! [`search`] module that turns `SearchCriteria`/`SortCriteria` strings into
//! backend-agnostic SQL fragments.

pub mod error;
pub mod model;
pub mod search;
pub mod storage;

pub use error::StorageError;
pub use model::{CdsContainer, CdsItem, CdsItemExternalUrl, CdsObject, CdsObjectBase, CdsResource, ObjectFlags};
pub use storage::{BrowsePage, Storage};
