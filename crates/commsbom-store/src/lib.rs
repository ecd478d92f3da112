//! Persistent store for named intercom configurations.

pub mod blob;
pub mod error;
mod legacy;
pub mod store;
pub mod types;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use error::StoreError;
pub use store::{ConfigStore, SaveReport, MAX_SAVED, STORE_KEY};
pub use types::{SavedConfiguration, SCHEMA_VERSION};
