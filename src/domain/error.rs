// src/domain/error.rs
use thiserror::Error;

/// Everything that can go wrong between a user gesture and the rendered
/// outcome. Display strings double as the notification text, so they are
/// written for the user, not the developer.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Please enter a title for your note")]
    EmptyTitle,
    #[error("Please select a valid image file (JPG, PNG, GIF, BMP, WEBP)")]
    UnsupportedImageType(String),
    #[error("File size must be less than 16 MB ({actual} bytes given)")]
    ImageTooLarge { actual: u64, limit: u64 },
    #[error("Could not read file: {0}")]
    FileUnreadable(String),
    #[error("Note not found: {0}")]
    NoteNotFound(i64),
    #[error("{0}")]
    Rejected(String),
    #[error("Request failed: {0}")]
    Transport(String),
}

/// Alert level attached to a notification, mirroring the four alert styles
/// of the web UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl DomainError {
    /// A blank title is a soft warning the user fixes by typing; everything
    /// else surfaces as an error.
    pub fn severity(&self) -> Severity {
        match self {
            DomainError::EmptyTitle => Severity::Warning,
            _ => Severity::Danger,
        }
    }
}
