// src/application/note_editor.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteDraft};

pub struct NoteEditor<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteEditor<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Fetch the server copy and overlay the fields the user actually
    /// changed, as the prefill step of the edit form does. Fields left as `None`
    /// keep their current value.
    pub fn draft_for_edit(
        &mut self,
        note_id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<NoteDraft, DomainError> {
        let note = self.repository.get_note(note_id)?;
        let mut draft = NoteDraft::prefilled_from(&note);
        if let Some(title) = title {
            draft.title = title;
        }
        if let Some(content) = content {
            draft.content = content;
        }
        Ok(draft)
    }

    /// Validate the merged draft, then submit. Same local invariant as add:
    /// a blank title never produces a request.
    pub fn edit_note(&mut self, note_id: i64, draft: &NoteDraft) -> Result<String, DomainError> {
        draft.validate()?;
        self.repository.edit_note(note_id, draft)
    }
}
