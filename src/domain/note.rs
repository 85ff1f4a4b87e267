// src/domain/note.rs
use crate::domain::image::ImageAttachment;
use crate::domain::DomainError;
use serde::{Deserialize, Serialize};

/// A note as the server reports it. The shape is imposed by the wire
/// format; the timestamps are opaque display strings and never parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_filename: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Client-side form state for an add or edit submission, threaded
/// explicitly through the controller instead of living in globals.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub image: Option<ImageAttachment>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            image: None,
        }
    }

    /// Prefill from the server copy, as the edit form does before the user
    /// overrides individual fields.
    pub fn prefilled_from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            image: None,
        }
    }

    /// The one local invariant: a draft must carry a non-blank title.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::EmptyTitle);
        }
        Ok(())
    }
}
