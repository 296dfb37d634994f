//! Validation modules

pub mod upload;

pub use upload::{is_allowed_audio_type, UploadValidator, ValidationError};
