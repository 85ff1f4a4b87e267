// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Upload ceiling for image attachments, in bytes.
///
/// Checked against the file's metadata before the bytes are read, so an
/// oversized file is rejected without touching its content. The server
/// enforces the same 16 MiB request-size limit and would refuse the upload
/// anyway; rejecting locally means no request is issued at all.
///
/// Used in: `domain/image.rs`
pub const MAX_IMAGE_BYTES: u64 = 16 * 1024 * 1024;

/// Delay in milliseconds between a successful mutation and the follow-up
/// reload of the notes page.
///
/// Gives the server a moment to finish the write before the listing is
/// re-requested. Overridable through `[refresh] delay_ms` in the config file.
///
/// Used in: `infrastructure/config.rs`
pub const RELOAD_DELAY_MS: u64 = 1000;

/// Base URL used when neither `--server` nor the config file provides one.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Delay in milliseconds after writing a rendered HTML file before the
/// browser is asked to open it.
///
/// The browser is spawned detached; without this delay the temp directory
/// can be dropped before the page is read.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 200;
