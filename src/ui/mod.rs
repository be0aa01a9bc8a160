//! Terminal rendering layer with component-based architecture.
//!
//! Turns the selector's view model into ANSI-styled output. The theme is
//! consumed one way: components read colors from it and never write back.
//!
//! # Architecture
//!
//! ```text
//! Selector → compute_viewmodel → SelectorViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: field, panel and empty-row renderers
//! - [`helpers`]: cursor positioning, truncation, match highlighting
//! - [`theme`]: color schemes and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::{EmptyState, OptionRow, PanelViewModel, SelectorViewModel};
