//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`field`]: the anchor text field
//! - [`panel`]: the floating option list
//! - [`empty`]: the "no results" row
//!
//! Each renderer writes ANSI output into a `fmt::Write` sink at absolute
//! cursor positions derived from the view model's rectangles.

mod empty;
mod field;
mod panel;

pub use field::render_field;
pub use panel::render_panel;
