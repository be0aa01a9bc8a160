//! Selection state controller.
//!
//! [`SelectionController`] is the single owner of [`SelectorState`]. Every
//! mutation of the panel state, the query buffer and the highlight cursor
//! goes through one of its transition methods, which makes the full
//! transition table enumerable and testable without any host.
//!
//! # Transitions
//!
//! | Transition | Effect |
//! |---|---|
//! | [`open`](SelectionController::open) | `Open`, empty query, no highlight |
//! | [`set_query`](SelectionController::set_query) | opens if closed, sets query, clears highlight |
//! | [`set_highlighted`](SelectionController::set_highlighted) | moves cursor to an enabled filtered row |
//! | [`select`](SelectionController::select) | commits (or reports) a value and closes |
//! | [`close`](SelectionController::close) | `Closed`, empty query, no highlight |
//!
//! Every transition is a no-op while the control is disabled. Invalid
//! requests (unknown values, disabled options, out-of-range indices) are
//! ignored and logged, never reported as errors.
//!
//! # Value Ownership
//!
//! The committed value is either owned by the controller (uncontrolled) or
//! by an external owner (controlled), fixed at construction by
//! [`ValueMode`]. All reads go through
//! [`committed_value`](SelectionController::committed_value).
//!
//! # Example
//!
//! ```
//! use autoselect::app::controller::{SelectionController, ValueMode};
//! use autoselect::domain::{OptionSet, SelectOption};
//!
//! let options = OptionSet::new(vec![
//!     SelectOption::new("a", "Apple"),
//!     SelectOption::new("c", "Cherry"),
//! ]).unwrap();
//! let mut controller = SelectionController::new(options, ValueMode::uncontrolled());
//!
//! controller.set_query("ch");
//! assert!(controller.is_open());
//! assert_eq!(controller.display_text(), "ch");
//!
//! assert_eq!(controller.select("c").as_deref(), Some("c"));
//! assert!(!controller.is_open());
//! assert_eq!(controller.display_text(), "Cherry");
//! ```

use super::filter::{filter_with, MatchMode};
use super::modes::PanelState;
use crate::domain::{OptionSet, SelectOption};

/// Transient state of a mounted control.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorState {
    pub panel: PanelState,

    /// Filter buffer. Empty whenever the panel is closed.
    pub query: String,

    /// Cursor into the currently filtered list. `None` means no highlight.
    pub highlighted: Option<usize>,
}

impl SelectorState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.panel, PanelState::Open)
    }
}

/// Who owns the committed value, decided once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueMode {
    /// An external owner supplies the value and feeds back selections.
    Controlled(Option<String>),

    /// The controller keeps the value itself, starting from `default`.
    Uncontrolled { default: Option<String> },
}

impl ValueMode {
    /// Uncontrolled with no initial value.
    #[must_use]
    pub const fn uncontrolled() -> Self {
        Self::Uncontrolled { default: None }
    }
}

/// Owner of the selector state and its transitions.
#[derive(Debug, Clone)]
pub struct SelectionController {
    options: OptionSet,
    state: SelectorState,
    mode: ValueMode,
    disabled: bool,
    match_mode: MatchMode,
}

impl SelectionController {
    #[must_use]
    pub fn new(options: OptionSet, mode: ValueMode) -> Self {
        let mode = match mode {
            ValueMode::Uncontrolled { default: Some(value) } if options.find(&value).is_none() => {
                tracing::debug!(value = %value, "default value not in option set, starting empty");
                ValueMode::Uncontrolled { default: None }
            }
            other => other,
        };

        Self {
            options,
            state: SelectorState::default(),
            mode,
            disabled: false,
            match_mode: MatchMode::default(),
        }
    }

    #[must_use]
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub const fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &SelectorState {
        &self.state
    }

    #[must_use]
    pub const fn options(&self) -> &OptionSet {
        &self.options
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.state.is_open()
    }

    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        matches!(self.mode, ValueMode::Controlled(_))
    }

    #[must_use]
    pub const fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.state.query
    }

    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.state.highlighted
    }

    /// The externally visible selection, whichever side owns it.
    #[must_use]
    pub fn committed_value(&self) -> Option<&str> {
        match &self.mode {
            ValueMode::Controlled(value) | ValueMode::Uncontrolled { default: value } => {
                value.as_deref()
            }
        }
    }

    /// The option whose value equals the committed value, if any.
    #[must_use]
    pub fn committed_option(&self) -> Option<&SelectOption> {
        self.committed_value().and_then(|value| self.options.find(value))
    }

    /// Text shown in the anchor field.
    ///
    /// While open this is the query verbatim, even if nothing matches. While
    /// closed it is the committed option's label, or empty.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.is_open() {
            &self.state.query
        } else {
            self.committed_option().map_or("", |option| option.label.as_str())
        }
    }

    /// Options matching the current query, in option-set order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&SelectOption> {
        filter_with(self.options.as_slice(), &self.state.query, self.match_mode)
    }

    /// The option under the highlight cursor, if any.
    #[must_use]
    pub fn highlighted_option(&self) -> Option<&SelectOption> {
        self.state
            .highlighted
            .and_then(|index| self.filtered().get(index).copied())
    }

    /// Opens the panel with an empty query and no highlight.
    ///
    /// Returns `true` if the panel went from closed to open. Idempotent while
    /// open; a no-op while disabled.
    pub fn open(&mut self) -> bool {
        if self.disabled {
            tracing::trace!("open ignored, control disabled");
            return false;
        }
        if self.is_open() {
            return false;
        }

        self.state = SelectorState {
            panel: PanelState::Open,
            query: String::new(),
            highlighted: None,
        };
        tracing::debug!("panel opened");
        true
    }

    /// Replaces the query text and clears the highlight.
    ///
    /// Typing while closed opens the panel first, so the typed text is already
    /// in the buffer when the panel appears. Returns `true` if the state
    /// changed.
    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        if self.disabled {
            tracing::trace!("query ignored, control disabled");
            return false;
        }

        let before = self.state.clone();
        self.open();
        self.state.query = text.into();
        self.state.highlighted = None;

        tracing::trace!(query = %self.state.query, "query updated");
        self.state != before
    }

    /// Moves the highlight cursor.
    ///
    /// `index` must point at an enabled entry of the filtered list, or be
    /// `None` to clear the highlight. Anything else is ignored. Returns `true`
    /// if the cursor moved.
    pub fn set_highlighted(&mut self, index: Option<usize>) -> bool {
        if self.disabled || !self.is_open() {
            return false;
        }

        if let Some(index) = index {
            let reachable = self
                .filtered()
                .get(index)
                .is_some_and(|option| option.is_enabled());
            if !reachable {
                tracing::trace!(index, "highlight ignored, entry missing or disabled");
                return false;
            }
        }

        if self.state.highlighted == index {
            return false;
        }
        self.state.highlighted = index;
        true
    }

    /// Selects the option with the given value and closes the panel.
    ///
    /// The value must name an enabled option of the full option set (it does
    /// not need to be in the filtered list). In uncontrolled mode the value is
    /// committed here; in controlled mode the owner is expected to feed it
    /// back through [`set_controlled_value`](Self::set_controlled_value).
    ///
    /// Returns the value to report as a change, once per accepted call, or
    /// `None` if the request was ignored.
    pub fn select(&mut self, value: &str) -> Option<String> {
        if self.disabled {
            tracing::trace!("select ignored, control disabled");
            return None;
        }

        let Some(option) = self.options.find(value) else {
            tracing::debug!(value = %value, "select ignored, unknown value");
            return None;
        };
        if option.disabled {
            tracing::debug!(value = %value, "select ignored, option disabled");
            return None;
        }
        let value = option.value.clone();

        match &mut self.mode {
            ValueMode::Uncontrolled { default } => {
                *default = Some(value.clone());
            }
            ValueMode::Controlled(_) => {
                tracing::trace!(value = %value, "controlled mode, deferring commit to owner");
            }
        }

        self.close();
        tracing::debug!(value = %value, "option selected");
        Some(value)
    }

    /// Closes the panel, clearing the query and the highlight.
    ///
    /// Leaves the committed value untouched. Returns `true` if the panel went
    /// from open to closed.
    pub fn close(&mut self) -> bool {
        if self.disabled || !self.is_open() {
            return false;
        }

        self.state = SelectorState::default();
        tracing::debug!("panel closed");
        true
    }

    /// Accepts a value from the external owner.
    ///
    /// Only meaningful in controlled mode; ignored otherwise. Returns `true`
    /// if the committed value changed.
    pub fn set_controlled_value(&mut self, value: Option<String>) -> bool {
        match &mut self.mode {
            ValueMode::Controlled(current) => {
                if *current == value {
                    return false;
                }
                tracing::debug!(value = ?value, "controlled value updated");
                *current = value;
                true
            }
            ValueMode::Uncontrolled { .. } => {
                tracing::debug!("controlled value ignored, control is uncontrolled");
                false
            }
        }
    }

    /// Enables or disables the control.
    ///
    /// Disabling an open control closes the panel first so it cannot stay
    /// stuck open with every transition blocked. Returns `true` if anything
    /// changed.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        if self.disabled == disabled {
            return false;
        }

        if disabled {
            self.close();
        }
        self.disabled = disabled;
        tracing::debug!(disabled, "disabled flag updated");
        true
    }

    /// Replaces the option set.
    ///
    /// The highlight is cleared because indices into the old filtered list
    /// mean nothing in the new one.
    pub fn set_options(&mut self, options: OptionSet) {
        tracing::debug!(count = options.len(), "option set replaced");
        self.options = options;
        self.state.highlighted = None;
    }
}
