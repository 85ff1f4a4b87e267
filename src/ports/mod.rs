// src/ports/mod.rs
pub mod html;
pub mod notification;

pub use html::HtmlPresenter;
pub use notification::TerminalNotifier;
