//! Multipart fixtures.

use axum_test::multipart::{MultipartForm, Part};

pub const MIB: usize = 1024 * 1024;

/// A form with a single `file` part.
pub fn file_form(file_name: &str, mime_type: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(data).file_name(file_name).mime_type(mime_type),
    )
}

pub fn wav_form(file_name: &str, len: usize) -> MultipartForm {
    file_form(file_name, "audio/wav", vec![0x52; len])
}
