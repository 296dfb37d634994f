//! Upload validation.
//!
//! The declared MIME type of a multipart part is the only gate: bytes are never
//! sniffed, so a mislabelled file with an allowed type is accepted.

use crate::constants::{ALLOWED_AUDIO_MIME_TYPES, BYTES_PER_MB, DEFAULT_MAX_UPLOAD_SIZE_MB};

/// Validation errors for uploaded files
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Unsupported file type: {content_type}. Allowed types: {}", ALLOWED_AUDIO_MIME_TYPES.join(", "))]
    UnsupportedContentType { content_type: String },

    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },
}

/// Exact, case-sensitive membership test against the audio allow-list.
pub fn is_allowed_audio_type(content_type: &str) -> bool {
    ALLOWED_AUDIO_MIME_TYPES.contains(&content_type)
}

/// Upload validator
///
/// Holds the per-file size limit; the MIME allow-list is fixed.
#[derive(Debug, Clone, Copy)]
pub struct UploadValidator {
    max_file_size: usize,
}

impl Default for UploadValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_SIZE_MB * BYTES_PER_MB)
    }
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Validate the client-declared content type. `None` means the part carried no
    /// Content-Type header.
    pub fn validate_content_type(&self, content_type: Option<&str>) -> Result<(), ValidationError> {
        match content_type {
            Some(ct) if is_allowed_audio_type(ct) => Ok(()),
            Some(ct) => Err(ValidationError::UnsupportedContentType {
                content_type: if ct.is_empty() {
                    "<empty>".to_string()
                } else {
                    ct.to_string()
                },
            }),
            None => Err(ValidationError::UnsupportedContentType {
                content_type: "<none>".to_string(),
            }),
        }
    }

    /// Validate file size. A size equal to the limit is accepted.
    pub fn validate_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_allowed_type() {
        let validator = UploadValidator::default();
        for ct in ALLOWED_AUDIO_MIME_TYPES {
            assert!(validator.validate_content_type(Some(ct)).is_ok(), "{ct}");
        }
    }

    #[test]
    fn rejects_near_misses_and_case_variants() {
        let validator = UploadValidator::default();
        for ct in [
            "audio/mpeg3",
            "audio/wavv",
            "audio/x-m4",
            "Audio/mpeg",
            "AUDIO/WAV",
            "audio/mpeg ",
            "audio/mpeg; charset=binary",
            "video/mp4",
            "audio/flac",
            "image/png",
            "application/octet-stream",
        ] {
            assert!(validator.validate_content_type(Some(ct)).is_err(), "{ct}");
        }
    }

    #[test]
    fn rejects_empty_and_absent_type() {
        let validator = UploadValidator::default();
        assert!(matches!(
            validator.validate_content_type(Some("")),
            Err(ValidationError::UnsupportedContentType { .. })
        ));
        assert!(matches!(
            validator.validate_content_type(None),
            Err(ValidationError::UnsupportedContentType { .. })
        ));
    }

    #[test]
    fn rejection_names_the_declared_type() {
        let err = UploadValidator::default()
            .validate_content_type(Some("image/png"))
            .unwrap_err();
        assert!(err.to_string().contains("image/png"));
    }

    #[test]
    fn size_limit_is_inclusive() {
        let validator = UploadValidator::new(25 * BYTES_PER_MB);
        assert!(validator.validate_size(0).is_ok());
        assert!(validator.validate_size(25 * BYTES_PER_MB).is_ok());
        assert_eq!(
            validator.validate_size(25 * BYTES_PER_MB + 1),
            Err(ValidationError::FileTooLarge {
                size: 25 * BYTES_PER_MB + 1,
                max: 25 * BYTES_PER_MB,
            })
        );
    }

    #[test]
    fn free_function_matches_validator() {
        assert!(is_allowed_audio_type("audio/webm"));
        assert!(!is_allowed_audio_type("audio/WEBM"));
    }
}
