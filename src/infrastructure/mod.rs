// src/infrastructure/mod.rs
pub mod config;
pub mod http;
pub mod media;
pub mod renderer;

pub use http::{HttpNoteRepository, HttpPageReloader};
