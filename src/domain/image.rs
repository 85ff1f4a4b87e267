// src/domain/image.rs
use crate::constants::MAX_IMAGE_BYTES;
use crate::domain::DomainError;
use std::path::Path;

/// Extension/MIME pairs accepted for upload. The server keeps the same
/// allow-list and silently ignores any other file type.
pub const ALLOWED_IMAGE_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
];

/// An image file that has already passed the client-side checks: allowed
/// type, size within the ceiling. Construction goes through
/// `infrastructure::media::load_attachment`.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Resolve the MIME type for a path from its extension, case-insensitively.
pub fn mime_for_path(path: &Path) -> Result<&'static str, DomainError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
        .ok_or(DomainError::UnsupportedImageType(extension))
}

/// Enforce the upload ceiling. Exactly 16 MiB still passes; one byte more
/// does not.
pub fn check_size(actual: u64) -> Result<(), DomainError> {
    if actual > MAX_IMAGE_BYTES {
        return Err(DomainError::ImageTooLarge {
            actual,
            limit: MAX_IMAGE_BYTES,
        });
    }
    Ok(())
}
