//! Desktop client that sends a bank statement to the statement API and
//! shows the transactions it returns.
//!
//! - `config` - API base URL from the environment
//! - `error` - `UploadError`, the single error channel shown to the user
//! - `upload` - file selection rules, the HTTP client, response handling
//! - `app` - eframe application: state machine, file input, rendering
//! - `utils` - amount formatting and colors

pub mod app;
pub mod config;
pub mod error;
pub mod upload;
pub mod utils;
