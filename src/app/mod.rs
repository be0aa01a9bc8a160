//! Application layer: the selector's control logic.
//!
//! This layer sits between the host (the Zellij shim in `main.rs`, or any
//! other [`Host`] implementation) and the domain types. It is fully
//! deterministic and synchronous; the only side effects are listener
//! registrations made through the host.
//!
//! # Architecture
//!
//! ```text
//! Host input → Event → handle_event → controller transitions → Actions
//!                                   ↘ sync_listeners (positioner, monitor)
//! ```
//!
//! # Modules
//!
//! - [`filter`]: order-preserving option filtering
//! - [`controller`]: the selection state controller and its transitions
//! - [`keyboard`]: navigation keys mapped onto controller transitions
//! - [`positioner`]: panel placement under the anchor
//! - [`dismissal`]: outside pointer/focus detection
//! - [`host`]: the injected environment capability and scoped subscriptions
//! - [`selector`]: the composition root
//! - [`handler`]: event dispatch for the composition root
//! - [`actions`]: owner notifications
//! - [`modes`]: panel and presentation state enums

pub mod actions;
pub mod controller;
pub mod dismissal;
pub mod filter;
pub mod handler;
pub mod host;
pub mod keyboard;
pub mod modes;
pub mod positioner;
pub mod selector;

pub use actions::Action;
pub use controller::{SelectionController, SelectorState, ValueMode};
pub use dismissal::{DismissalMonitor, FocusTarget};
pub use filter::{filter, MatchMode};
pub use handler::{handle_event, Event};
pub use host::{Host, Interest, Subscription};
pub use keyboard::{KeyOutcome, NavKey};
pub use modes::{ControlState, PanelState};
pub use positioner::{compute_position, PanelPositioner};
pub use selector::{PanelLayout, Selector};
