//! Panel and presentation state types.
//!
//! This module defines the small state machine enums of the control.
//!
//! # State Machine
//!
//! The panel is either [`PanelState::Closed`] or [`PanelState::Open`]:
//!
//! ```text
//! Closed --(focus | open key | typing | anchor click)--> Open
//! Open   --(select | Escape | outside dismissal)-------> Closed
//! Open   --(typing | navigation key | hover)-----------> Open
//! ```
//!
//! There is no terminal state; the control alternates between the two for
//! its whole lifetime.
//!
//! [`ControlState`] is the presentation key handed to the style lookup. It is
//! derived from the panel state and the owner-supplied flags, never stored.

/// Visibility of the floating option panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Panel hidden. The field shows the committed option's label.
    #[default]
    Closed,

    /// Panel visible. The field shows the raw query text.
    Open,
}

/// Presentation state used to look up field colors.
///
/// Precedence when several apply: `Disabled`, then `Open`, then `Invalid`,
/// then `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Closed,
    Open,
    Disabled,
    /// Owner flagged the current value as invalid.
    Invalid,
}

impl ControlState {
    /// Resolves the presentation state from the control's flags.
    ///
    /// # Example
    ///
    /// ```
    /// use autoselect::app::modes::{ControlState, PanelState};
    ///
    /// assert_eq!(ControlState::resolve(PanelState::Open, false, true), ControlState::Open);
    /// assert_eq!(ControlState::resolve(PanelState::Open, true, true), ControlState::Disabled);
    /// assert_eq!(ControlState::resolve(PanelState::Closed, false, true), ControlState::Invalid);
    /// ```
    #[must_use]
    pub const fn resolve(panel: PanelState, disabled: bool, invalid: bool) -> Self {
        if disabled {
            Self::Disabled
        } else if matches!(panel, PanelState::Open) {
            Self::Open
        } else if invalid {
            Self::Invalid
        } else {
            Self::Closed
        }
    }
}
