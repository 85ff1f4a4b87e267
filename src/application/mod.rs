// src/application/mod.rs
pub mod note_adder;
pub mod note_deleter;
pub mod note_editor;
pub mod note_viewer;
pub mod submit_flow;

pub use note_adder::NoteAdder;
pub use note_deleter::NoteDeleter;
pub use note_editor::NoteEditor;
pub use note_viewer::{NoteRepository, NoteViewer};
pub use submit_flow::{Notifier, PageReloader, SubmitFlow};
