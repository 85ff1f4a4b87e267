// src/util/testing.rs

use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::env;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteRepository, Notifier, PageReloader};
use crate::domain::{DomainError, Note, NoteDraft, Severity};

/// A note with fixed timestamps, for tests that only care about title and
/// content.
pub fn sample_note(id: i64, title: &str, content: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        image_filename: None,
        created_at: "2024-01-01 10:00:00".to_string(),
        updated_at: "2024-01-02 11:00:00".to_string(),
    }
}

#[derive(Clone)]
enum SubmitBehavior {
    Success(String),
    Rejected(String),
}

impl SubmitBehavior {
    fn outcome(&self) -> Result<String, DomainError> {
        match self {
            SubmitBehavior::Success(message) => Ok(message.clone()),
            SubmitBehavior::Rejected(message) => Err(DomainError::Rejected(message.clone())),
        }
    }
}

/// Shared mock repository for testing use cases that depend on NoteRepository
///
/// This mock provides configurable behavior for all NoteRepository methods,
/// eliminating the need for each test file to define its own mock. Every
/// wire-bound call bumps a shared counter, so tests can assert that a flow
/// issued no request at all. Cloning shares the counter.
///
/// # Examples
///
/// ```
/// use notectl::util::testing::{sample_note, MockNoteRepository};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(123, sample_note(123, "Groceries", "milk"))
///     .with_delete_success(123, "Note deleted successfully")
///     .build();
/// ```
#[derive(Clone)]
pub struct MockNoteRepository {
    notes: HashMap<i64, Note>,
    add_behavior: Option<SubmitBehavior>,
    edit_behaviors: HashMap<i64, SubmitBehavior>,
    delete_behaviors: HashMap<i64, SubmitBehavior>,
    requests: Rc<Cell<usize>>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Number of wire-bound calls this mock (and its clones) received.
    pub fn request_count(&self) -> usize {
        self.requests.get()
    }

    fn record_request(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

impl NoteRepository for MockNoteRepository {
    fn get_note(&mut self, id: i64) -> Result<Note, DomainError> {
        self.record_request();
        self.notes
            .get(&id)
            .cloned()
            .ok_or(DomainError::NoteNotFound(id))
    }

    fn add_note(&mut self, _draft: &NoteDraft) -> Result<String, DomainError> {
        self.record_request();
        match &self.add_behavior {
            Some(behavior) => behavior.outcome(),
            None => Err(DomainError::Rejected("Failed to add note".to_string())),
        }
    }

    fn edit_note(&mut self, id: i64, _draft: &NoteDraft) -> Result<String, DomainError> {
        self.record_request();
        match self.edit_behaviors.get(&id) {
            Some(behavior) => behavior.outcome(),
            None => Err(DomainError::Rejected("Note not found".to_string())),
        }
    }

    fn delete_note(&mut self, id: i64) -> Result<String, DomainError> {
        self.record_request();
        match self.delete_behaviors.get(&id) {
            Some(behavior) => behavior.outcome(),
            None => Err(DomainError::Rejected("Note not found".to_string())),
        }
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: HashMap<i64, Note>,
    add_behavior: Option<SubmitBehavior>,
    edit_behaviors: HashMap<i64, SubmitBehavior>,
    delete_behaviors: HashMap<i64, SubmitBehavior>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: HashMap::new(),
            add_behavior: None,
            edit_behaviors: HashMap::new(),
            delete_behaviors: HashMap::new(),
        }
    }

    /// Add a note that can be retrieved by get_note
    pub fn with_note(mut self, id: i64, note: Note) -> Self {
        self.notes.insert(id, note);
        self
    }

    /// Configure add_note to succeed with the given server message
    pub fn with_add_success(mut self, message: &str) -> Self {
        self.add_behavior = Some(SubmitBehavior::Success(message.to_string()));
        self
    }

    /// Configure add_note to come back with `success: false`
    pub fn with_add_rejected(mut self, message: &str) -> Self {
        self.add_behavior = Some(SubmitBehavior::Rejected(message.to_string()));
        self
    }

    /// Configure edit_note to succeed for a specific ID
    pub fn with_edit_success(mut self, id: i64, message: &str) -> Self {
        self.edit_behaviors
            .insert(id, SubmitBehavior::Success(message.to_string()));
        self
    }

    /// Configure edit_note to come back with `success: false` for an ID
    pub fn with_edit_rejected(mut self, id: i64, message: &str) -> Self {
        self.edit_behaviors
            .insert(id, SubmitBehavior::Rejected(message.to_string()));
        self
    }

    /// Configure delete_note to succeed for a specific ID
    pub fn with_delete_success(mut self, id: i64, message: &str) -> Self {
        self.delete_behaviors
            .insert(id, SubmitBehavior::Success(message.to_string()));
        self
    }

    /// Configure delete_note to come back with `success: false` for an ID
    pub fn with_delete_rejected(mut self, id: i64, message: &str) -> Self {
        self.delete_behaviors
            .insert(id, SubmitBehavior::Rejected(message.to_string()));
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            notes: self.notes,
            add_behavior: self.add_behavior,
            edit_behaviors: self.edit_behaviors,
            delete_behaviors: self.delete_behaviors,
            requests: Rc::new(Cell::new(0)),
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifier that records every notification. Clones share the log, so a
/// clone kept outside the flow under test can inspect it afterwards.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Rc<RefCell<Vec<(Severity, String)>>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<(Severity, String)> {
        self.events.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.events
            .borrow_mut()
            .push((severity, message.to_string()));
    }
}

/// Reloader that counts attempts; clones share the counter.
#[derive(Clone, Default)]
pub struct CountingReloader {
    attempts: Rc<Cell<usize>>,
    fail: bool,
}

impl CountingReloader {
    /// A reloader whose every attempt fails with a transport error.
    pub fn failing() -> Self {
        Self {
            attempts: Rc::new(Cell::new(0)),
            fail: true,
        }
    }

    pub fn reload_count(&self) -> usize {
        self.attempts.get()
    }
}

impl PageReloader for CountingReloader {
    fn reload(&mut self) -> Result<(), DomainError> {
        self.attempts.set(self.attempts.get() + 1);
        if self.fail {
            return Err(DomainError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["reqwest", "hyper", "mio", "want"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
