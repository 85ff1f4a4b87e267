use crate::domain::image::{check_size, mime_for_path, ImageAttachment};
use crate::domain::DomainError;
use std::fs;
use std::path::Path;
use tracing::{debug, instrument};

/// Load an image file for attachment, running the client-side checks in
/// order: type first, then size against the file metadata, and only then
/// the actual read.
#[instrument(level = "debug")]
pub fn load_attachment(path: &Path) -> Result<ImageAttachment, DomainError> {
    let mime = mime_for_path(path)?;

    let metadata = fs::metadata(path)
        .map_err(|e| DomainError::FileUnreadable(format!("{}: {e}", path.display())))?;
    check_size(metadata.len())?;

    let bytes = fs::read(path)
        .map_err(|e| DomainError::FileUnreadable(format!("{}: {e}", path.display())))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image")
        .to_string();

    debug!(file = %path.display(), mime, size = bytes.len(), "Loaded image attachment");
    Ok(ImageAttachment {
        file_name,
        mime,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn given_allowed_image_when_loading_then_returns_attachment() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("photo.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();

        let attachment = load_attachment(&path).expect("Load should succeed");

        assert_eq!(attachment.file_name, "photo.png");
        assert_eq!(attachment.mime, "image/png");
        assert_eq!(attachment.bytes.len(), 8);
    }

    #[test]
    fn given_disallowed_extension_when_loading_then_returns_error_without_reading() {
        let temp_dir = TempDir::new().unwrap();
        // The file does not even exist; the type check fires first.
        let path = temp_dir.path().join("notes.txt");

        let result = load_attachment(&path);

        assert!(matches!(result, Err(DomainError::UnsupportedImageType(_))));
    }

    #[test]
    fn given_missing_file_when_loading_then_returns_unreadable_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ghost.png");

        let result = load_attachment(&path);

        assert!(matches!(result, Err(DomainError::FileUnreadable(_))));
    }
}
