//! Session Notes Storage Library
//!
//! This crate provides the `Storage` capability used by the upload endpoints and
//! its two implementations: `DiskStorage`, which persists bytes under a generated
//! name in a fixed directory, and `MemoryStorage`, which only holds them for the
//! duration of a request.
//!
//! # Generated filenames
//!
//! Disk artifacts are named `{unix_millis}-{random in [0, 1e9)}-{original_name}`.
//! Name generation lives in the `keys` module.

pub mod disk;
pub mod factory;
pub mod keys;
pub mod memory;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use disk::DiskStorage;
pub use factory::create_storage;
pub use memory::MemoryStorage;
pub use sessionnotes_core::StorageBackend;
pub use traits::{Storage, StorageError, StorageResult};
pub use types::{HeldUpload, StoredArtifact, StoredArtifactReference, UploadedFile};
