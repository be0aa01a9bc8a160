//! The autocomplete selector composition root.
//!
//! [`Selector`] wires the controller, the keyboard engine, the positioner
//! and the dismissal monitor into one control. It owns the host capability
//! and is the only place where the open/closed state of the controller is
//! translated into listener registrations: after every input the selector
//! calls [`sync_listeners`](Selector::sync_listeners), which acquires both
//! subscriptions when the panel is open and releases them when it is closed.
//!
//! # Panel Layout
//!
//! The panel shows at most `max_visible_rows` rows of the filtered list. The
//! window is centered on the highlighted row and clamped to the list ends,
//! and hit-testing uses the same window. An empty list still occupies one row
//! for the "no results" placeholder.

use super::controller::SelectionController;
use super::dismissal::DismissalMonitor;
use super::filter::match_ranges;
use super::host::Host;
use super::keyboard::{self, KeyOutcome, NavKey};
use super::modes::ControlState;
use super::positioner::PanelPositioner;
use crate::domain::{Point, Rect};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, OptionRow, PanelViewModel, SelectorViewModel};
use std::ops::Range;

pub const DEFAULT_MAX_VISIBLE_ROWS: usize = 8;
pub const DEFAULT_ROW_HEIGHT: f32 = 1.0;

const EMPTY_MESSAGE: &str = "No results";

/// Row geometry of the floating panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub row_height: f32,
    pub max_visible_rows: usize,
}

impl Default for PanelLayout {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
        }
    }
}

/// A mounted autocomplete selector.
///
/// Dropping the selector releases any listener it still holds.
#[derive(Debug)]
pub struct Selector<H: Host> {
    pub(crate) controller: SelectionController,
    pub(crate) positioner: PanelPositioner,
    pub(crate) monitor: DismissalMonitor,
    layout: PanelLayout,
    host: H,
    theme: Theme,
    placeholder: String,
    invalid: bool,
}

impl<H: Host> Selector<H> {
    #[must_use]
    pub fn new(controller: SelectionController, host: H) -> Self {
        Self {
            controller,
            positioner: PanelPositioner::default(),
            monitor: DismissalMonitor::new(),
            layout: PanelLayout::default(),
            host,
            theme: Theme::default(),
            placeholder: String::new(),
            invalid: false,
        }
    }

    #[must_use]
    pub fn with_positioner(mut self, positioner: PanelPositioner) -> Self {
        self.positioner = positioner;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: PanelLayout) -> Self {
        self.layout = PanelLayout {
            row_height: if layout.row_height > 0.0 {
                layout.row_height
            } else {
                DEFAULT_ROW_HEIGHT
            },
            max_visible_rows: layout.max_visible_rows.max(1),
        };
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Marks the current value as invalid for presentation purposes.
    #[must_use]
    pub const fn with_invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    #[must_use]
    pub const fn controller(&self) -> &SelectionController {
        &self.controller
    }

    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub const fn layout(&self) -> PanelLayout {
        self.layout
    }

    #[must_use]
    pub const fn positioner(&self) -> &PanelPositioner {
        &self.positioner
    }

    #[must_use]
    pub const fn monitor(&self) -> &DismissalMonitor {
        &self.monitor
    }

    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }

    #[must_use]
    pub const fn control_state(&self) -> ControlState {
        ControlState::resolve(
            self.controller.state().panel,
            self.controller.is_disabled(),
            self.invalid,
        )
    }

    /// Feeds a navigation key to the keyboard engine.
    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        let outcome = keyboard::handle_key(&mut self.controller, key);
        self.sync_listeners();
        outcome
    }

    /// Matches listener registrations to the panel state.
    ///
    /// Open: the positioner is attached and the monitor armed. Closed: both
    /// released. Safe to call any number of times.
    pub fn sync_listeners(&mut self) {
        if self.controller.is_open() {
            if !self.positioner.is_attached() {
                self.positioner.attach(&self.host);
            }
            if !self.monitor.is_armed() {
                self.monitor.arm(&self.host);
            }
        } else {
            self.positioner.detach();
            self.monitor.disarm();
        }
    }

    /// Recomputes the panel position after a scroll or resize.
    pub fn reposition(&mut self) -> bool {
        self.positioner.reposition(&self.host)
    }

    #[must_use]
    pub fn anchor_rect(&self) -> Option<Rect> {
        self.host.anchor_rect()
    }

    /// Number of rows the panel currently occupies, at least one.
    #[must_use]
    pub fn visible_row_count(&self) -> usize {
        self.controller
            .filtered()
            .len()
            .min(self.layout.max_visible_rows)
            .max(1)
    }

    /// Panel rectangle, if the panel is open and positioned.
    #[must_use]
    pub fn panel_rect(&self) -> Option<Rect> {
        if !self.controller.is_open() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let height = self.visible_row_count() as f32 * self.layout.row_height;
        self.positioner.position().map(|position| position.to_rect(height))
    }

    /// Filtered-list index of the row under `point`, if any.
    #[must_use]
    pub fn option_at(&self, point: Point) -> Option<usize> {
        let rect = self.panel_rect()?;
        if !rect.contains(point) {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = ((point.y - rect.top()) / self.layout.row_height).floor() as usize;
        let window = visible_window(
            self.controller.filtered().len(),
            self.controller.highlighted(),
            self.layout.max_visible_rows,
        );
        let index = window.start + row;
        window.contains(&index).then_some(index)
    }

    /// Builds the view model for the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> SelectorViewModel {
        SelectorViewModel {
            display_text: self.controller.display_text().to_string(),
            placeholder: self.placeholder.clone(),
            control_state: self.control_state(),
            panel: self.compute_panel(),
        }
    }

    fn compute_panel(&self) -> Option<PanelViewModel> {
        let rect = self.panel_rect()?;
        let filtered = self.controller.filtered();

        if filtered.is_empty() {
            return Some(PanelViewModel {
                rect,
                rows: vec![],
                window_start: 0,
                total: 0,
                empty_state: Some(EmptyState {
                    message: EMPTY_MESSAGE.to_string(),
                }),
            });
        }

        let highlighted = self.controller.highlighted();
        let committed = self.controller.committed_value();
        let query = self.controller.query();
        let mode = self.controller.match_mode();
        let window = visible_window(filtered.len(), highlighted, self.layout.max_visible_rows);

        let rows = filtered[window.clone()]
            .iter()
            .zip(window.clone())
            .map(|(option, index)| OptionRow {
                value: option.value.clone(),
                label: option.label.clone(),
                icon: option.icon.clone(),
                description: option.description.clone(),
                is_highlighted: highlighted == Some(index),
                is_disabled: option.disabled,
                is_selected: committed == Some(option.value.as_str()),
                highlight_ranges: match_ranges(&option.label, query, mode),
            })
            .collect();

        Some(PanelViewModel {
            rect,
            rows,
            window_start: window.start,
            total: filtered.len(),
            empty_state: None,
        })
    }
}

/// Range of list indices to show, keeping `highlighted` in view.
///
/// The window is centered on the highlighted index and clamped so that it
/// is full whenever the list is long enough.
///
/// # Example
///
/// ```
/// use autoselect::app::selector::visible_window;
///
/// assert_eq!(visible_window(3, None, 8), 0..3);
/// assert_eq!(visible_window(20, Some(10), 4), 8..12);
/// assert_eq!(visible_window(20, Some(19), 4), 16..20);
/// ```
#[must_use]
pub fn visible_window(len: usize, highlighted: Option<usize>, max_rows: usize) -> Range<usize> {
    let max_rows = max_rows.max(1);
    let mut start = highlighted.unwrap_or(0).saturating_sub(max_rows / 2);
    let end = (start + max_rows).min(len);

    if end - start.min(end) < max_rows && len >= max_rows {
        start = end - max_rows;
    }
    start.min(end)..end
}
