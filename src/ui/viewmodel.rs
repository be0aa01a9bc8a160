//! View model types representing renderable control state.
//!
//! View models are computed by
//! [`Selector::compute_viewmodel`](crate::app::Selector::compute_viewmodel)
//! and consumed by the renderer. They carry no logic, only display-ready
//! data: the text to show, the presentation state, and, while the panel is
//! visible, its rectangle and the window of rows to draw.

use crate::app::modes::ControlState;
use crate::domain::Rect;

/// Complete view model for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorViewModel {
    /// Text in the anchor field: the raw query while open, the committed
    /// label while closed.
    pub display_text: String,

    /// Shown in place of an empty `display_text`.
    pub placeholder: String,

    pub control_state: ControlState,

    /// Present only while the panel is open and has a valid position.
    pub panel: Option<PanelViewModel>,
}

/// The floating panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelViewModel {
    pub rect: Rect,

    /// Visible window of the filtered list.
    pub rows: Vec<OptionRow>,

    /// Index into the filtered list of the first visible row.
    pub window_start: usize,

    /// Length of the whole filtered list.
    pub total: usize,

    /// Set when the filtered list is empty.
    pub empty_state: Option<EmptyState>,
}

/// Display information for one option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub value: String,
    pub label: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub is_highlighted: bool,
    pub is_disabled: bool,

    /// Row holds the committed value.
    pub is_selected: bool,

    /// Character ranges of the label matched by the query, exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Placeholder row shown when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}
