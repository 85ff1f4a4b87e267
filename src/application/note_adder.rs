// src/application/note_adder.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, NoteDraft};

pub struct NoteAdder<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteAdder<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate locally, then submit. A draft with a blank title must never
    /// reach the network.
    pub fn add_note(&mut self, draft: &NoteDraft) -> Result<String, DomainError> {
        draft.validate()?;
        self.repository.add_note(draft)
    }
}
