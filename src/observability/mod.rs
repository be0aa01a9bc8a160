//! File-based structured logging.
//!
//! The plugin runs inside Zellij's sandbox with no terminal to log to, so
//! `tracing` events are formatted by a `tracing-subscriber` fmt layer and
//! appended to a rotating file in the data directory.
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → RotatingFile → autoselect.log
//! ```
//!
//! # Configuration
//!
//! The level comes from the `trace_level` option of the plugin
//! configuration and accepts any `EnvFilter` directive (`debug`,
//! `autoselect=trace`, ...). Default: `info`.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`file_writer`]: rotating file writer

pub mod file_writer;
mod init;

pub use init::{init_tracing, LOG_FILE_NAME};
