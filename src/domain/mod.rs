//! Domain layer for the autocomplete selector.
//!
//! This module contains the core value types the control operates on,
//! independent of the Zellij host or the terminal renderer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`option`]: Selectable options and the validated option set
//! - [`geometry`]: Points, rectangles and panel placement
//!
//! # Examples
//!
//! ```
//! use autoselect::domain::{OptionSet, Result, SelectOption};
//!
//! fn fruit() -> Result<OptionSet> {
//!     OptionSet::new(vec![
//!         SelectOption::new("a", "Apple"),
//!         SelectOption::new("b", "Banana").disabled(),
//!     ])
//! }
//! # assert_eq!(fruit().unwrap().len(), 2);
//! ```

pub mod error;
pub mod geometry;
pub mod option;

pub use error::{AutoselectError, Result};
pub use geometry::{PanelPosition, Point, Rect};
pub use option::{OptionSet, SelectOption};
