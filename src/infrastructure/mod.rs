//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`. Paths
//! from the plugin configuration (options files, theme files) are written by
//! the user against their real home directory and need translating.
//!
//! [`pane`] adapts the plugin pane to the control's `Host` capability.

pub mod pane;
pub mod paths;

pub use pane::{PaneEvent, PaneHost};
pub use paths::{expand_tilde, get_data_dir, resolve_config_path};
