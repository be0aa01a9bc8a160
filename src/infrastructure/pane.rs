//! Zellij pane as the selector's host.
//!
//! The plugin pane is the whole world of the control: the anchor field sits
//! on the top three lines and the option panel hangs below it. [`PaneHost`]
//! tracks what the plugin learns about the pane (its width, whether it is
//! visible) and translates Zellij events into selector events.
//!
//! # Listener Model
//!
//! The plugin subscribes to `Key`, `Mouse` and `Visible` once at load and
//! keeps those subscriptions for its whole life, because visibility also
//! decides whether the anchor exists. The control's scoped subscriptions
//! only arm flags here:
//!
//! - `ScrollResize` arms resize tracking; the plugin turns width changes seen
//!   in `render` into `Resize` events
//! - `OutsideInteraction` arms focus-loss reporting; hiding the pane becomes
//!   `FocusLost(Nowhere)` only while armed
//!
//! # Event Mapping
//!
//! - `Key(Down)` / `Ctrl+n` → `Key(Down)`
//! - `Key(Up)` / `Ctrl+p` → `Key(Up)`
//! - `Key(Enter)` → `Key(Enter)`, `Key(Esc)` → `Key(Escape)`
//! - `Key(Tab)` → `FocusLost(Outside)`
//! - `Key(Backspace)` → `Backspace`, `Key(Char(c))` → `Char(c)`
//! - `Mouse(LeftClick)` → `PointerDown`, `Mouse(Hover)` → `PointerMove`
//! - `Mouse(ScrollUp | ScrollDown)` → `Scroll`
//! - `Visible(false)` → `FocusLost(Nowhere)` while armed
//!
//! Key and mouse input can only reach a visible pane, so both also mark the
//! pane visible again.

use crate::app::{Event, FocusTarget, Host, Interest, NavKey, Subscription};
use crate::domain::{Point, Rect};
use std::cell::Cell;
use std::rc::Rc;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier, Mouse};

/// Zellij's own event type.
pub use zellij_tile::prelude::Event as PaneEvent;

/// Height of the anchor field in pane lines.
pub const ANCHOR_HEIGHT: f32 = 3.0;

/// Host capability backed by the plugin pane.
///
/// Cheap to clone: every clone shares the same cells, so the plugin state
/// and the selector see the same geometry and flags.
#[derive(Debug, Clone, Default)]
pub struct PaneHost {
    cols: Rc<Cell<usize>>,
    hidden: Rc<Cell<bool>>,
    track_resize: Rc<Cell<bool>>,
    watch_outside: Rc<Cell<bool>>,
}

impl PaneHost {
    /// Records the pane width. Returns `true` if it changed.
    pub fn set_cols(&self, cols: usize) -> bool {
        self.cols.replace(cols) != cols
    }

    pub fn set_visible(&self, visible: bool) {
        self.hidden.set(!visible);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.hidden.get()
    }

    #[must_use]
    pub fn is_tracking_resize(&self) -> bool {
        self.track_resize.get()
    }

    #[must_use]
    pub fn is_watching_outside(&self) -> bool {
        self.watch_outside.get()
    }

    /// Translates a Zellij event, updating the pane's visibility on the way.
    pub fn map_event(&self, event: &PaneEvent) -> Option<Event> {
        match event {
            PaneEvent::Key(key) => {
                self.set_visible(true);
                map_key_event(key)
            }
            PaneEvent::Mouse(mouse) => {
                self.set_visible(true);
                map_mouse_event(mouse)
            }
            PaneEvent::Visible(visible) => {
                self.set_visible(*visible);
                (!visible && self.is_watching_outside())
                    .then_some(Event::FocusLost(FocusTarget::Nowhere))
            }
            _ => None,
        }
    }
}

impl Host for PaneHost {
    #[allow(clippy::cast_precision_loss)]
    fn anchor_rect(&self) -> Option<Rect> {
        let cols = self.cols.get();
        if cols == 0 || self.hidden.get() {
            return None;
        }
        Some(Rect::new(0.0, 0.0, cols as f32, ANCHOR_HEIGHT))
    }

    fn listen(&self, interest: Interest) -> Subscription {
        tracing::debug!(?interest, "pane listener armed");
        let flag = match interest {
            Interest::ScrollResize => &self.track_resize,
            Interest::OutsideInteraction => &self.watch_outside,
        };
        flag.set(true);
        let flag = Rc::clone(flag);
        Subscription::new(interest, move || flag.set(false))
    }
}

fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
    tracing::debug!(bare_key = ?key.bare_key, "key event");

    if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::Key(NavKey::Down));
    }
    if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::Key(NavKey::Up));
    }

    Some(match key.bare_key {
        BareKey::Down => Event::Key(NavKey::Down),
        BareKey::Up => Event::Key(NavKey::Up),
        BareKey::Enter => Event::Key(NavKey::Enter),
        BareKey::Esc => Event::Key(NavKey::Escape),
        BareKey::Tab => Event::FocusLost(FocusTarget::Outside),
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) if !key.has_modifiers(&[KeyModifier::Ctrl]) => Event::Char(c),
        _ => return None,
    })
}

#[allow(clippy::cast_precision_loss)]
fn map_mouse_event(mouse: &Mouse) -> Option<Event> {
    let point = |line: isize, col: usize| Point::new(col as f32, line as f32);
    match *mouse {
        Mouse::LeftClick(line, col) => Some(Event::PointerDown(point(line, col))),
        Mouse::Hover(line, col) => Some(Event::PointerMove(point(line, col))),
        Mouse::ScrollUp(_) | Mouse::ScrollDown(_) => Some(Event::Scroll),
        _ => None,
    }
}
