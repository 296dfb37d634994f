//! Upload constants shared by the validator, the storage backends and the API.

/// Declared MIME types accepted for audio uploads. Matched exactly, case-sensitive.
pub const ALLOWED_AUDIO_MIME_TYPES: [&str; 11] = [
    "audio/mpeg",
    "audio/mp3",
    "audio/wav",
    "audio/wave",
    "audio/x-wav",
    "audio/m4a",
    "audio/x-m4a",
    "audio/mp4",
    "audio/aac",
    "audio/ogg",
    "audio/webm",
];

/// Default per-file upload limit in MiB.
pub const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 25;

/// Bytes per MiB.
pub const BYTES_PER_MB: usize = 1024 * 1024;

/// Default disk upload directory, relative to the working directory.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Multipart field carrying the uploaded file.
pub const UPLOAD_FIELD_NAME: &str = "file";

/// Headroom added to the request body limit for multipart boundaries and part headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;
