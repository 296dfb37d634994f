//! Session Notes Core Library
//!
//! This crate provides the domain models, error types, configuration, and upload
//! validation shared across all Session Notes components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::{BaseConfig, Config, LogFormat, UploadConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use storage_types::StorageBackend;
pub use validation::{is_allowed_audio_type, UploadValidator, ValidationError};
