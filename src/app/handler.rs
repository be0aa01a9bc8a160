//! Event handling for the composition root.
//!
//! [`handle_event`] is the single entry point for everything the host
//! reports: key presses, text input, pointer and focus changes, scroll and
//! resize notifications, and owner-side updates (fed-back value, disabled
//! flag, option set). Each event is translated into controller transitions,
//! after which listener registrations are synced with the panel state.
//!
//! # Event Types
//!
//! - **Keyboard**: `Key`, `Char`, `Backspace`, `TextChanged`
//! - **Pointer/focus**: `Focus`, `PointerDown`, `PointerMove`, `FocusLost`
//! - **Environment**: `Scroll`, `Resize`
//! - **Owner**: `ValueFed`, `SetDisabled`, `SetOptions`
//!
//! The handler is total: malformed or stale input is ignored, never reported
//! as an error.
//!
//! # Example
//!
//! ```
//! use autoselect::app::controller::{SelectionController, ValueMode};
//! use autoselect::app::host::{Host, Interest, Subscription};
//! use autoselect::app::{handle_event, Action, Event, Selector};
//! use autoselect::domain::{OptionSet, Rect};
//!
//! struct Fixed;
//! impl Host for Fixed {
//!     fn anchor_rect(&self) -> Option<Rect> { Some(Rect::new(0.0, 0.0, 20.0, 3.0)) }
//!     fn listen(&self, interest: Interest) -> Subscription { Subscription::detached(interest) }
//! }
//!
//! let options = OptionSet::parse_inline("a=Apple, c=Cherry").unwrap();
//! let mut selector = Selector::new(SelectionController::new(options, ValueMode::uncontrolled()), Fixed);
//!
//! handle_event(&mut selector, &Event::Char('c'));
//! let (render, actions) = handle_event(&mut selector, &Event::Key(autoselect::app::NavKey::Down));
//! assert!(render);
//! assert!(actions.is_empty());
//!
//! let (_, actions) = handle_event(&mut selector, &Event::Key(autoselect::app::NavKey::Enter));
//! assert_eq!(actions, vec![Action::ValueChanged { value: "c".into() }]);
//! ```

use super::actions::Action;
use super::controller::SelectorState;
use super::dismissal::FocusTarget;
use super::host::Host;
use super::keyboard::{KeyOutcome, NavKey};
use super::selector::Selector;
use crate::domain::{OptionSet, PanelPosition, Point};

/// Input delivered to the selector.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The anchor field gained focus. Opens the panel.
    Focus,
    /// A navigation key.
    Key(NavKey),
    /// A typed character, appended to the query.
    Char(char),
    /// Removes the last query character while open.
    Backspace,
    /// The host's text field reports its full contents.
    TextChanged(String),
    /// Primary pointer-down anywhere in the host.
    PointerDown(Point),
    /// Pointer moved; used for hover highlighting.
    PointerMove(Point),
    /// Focus moved away from the anchor field.
    FocusLost(FocusTarget),
    /// An ancestor scrolled.
    Scroll,
    /// The viewport was resized.
    Resize,
    /// The owner feeds back the value in controlled mode.
    ValueFed(Option<String>),
    SetDisabled(bool),
    SetOptions(OptionSet),
}

/// Everything that influences a frame.
#[derive(Debug, PartialEq)]
struct RenderKey {
    state: SelectorState,
    committed: Option<String>,
    disabled: bool,
    position: Option<PanelPosition>,
}

impl RenderKey {
    fn capture<H: Host>(selector: &Selector<H>) -> Self {
        let controller = selector.controller();
        Self {
            state: controller.state().clone(),
            committed: controller.committed_value().map(str::to_string),
            disabled: controller.is_disabled(),
            position: selector.positioner().position(),
        }
    }
}

/// Processes an event and returns whether to re-render plus the owner
/// notifications it produced.
///
/// # Parameters
///
/// * `selector` - The mounted control
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `true` when anything that
/// feeds the view model changed.
pub fn handle_event<H: Host>(selector: &mut Selector<H>, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let before = RenderKey::capture(selector);
    let mut actions = Vec::new();
    let mut force_render = false;

    match event {
        Event::Focus => {
            selector.controller.open();
        }
        Event::Key(key) => {
            if let KeyOutcome::Selected(value) = selector.handle_key(*key) {
                actions.push(Action::ValueChanged { value });
            }
        }
        Event::Char(c) => {
            let mut query = if selector.controller.is_open() {
                selector.controller.query().to_string()
            } else {
                String::new()
            };
            query.push(*c);
            selector.controller.set_query(query);
        }
        Event::Backspace => {
            if selector.controller.is_open() {
                let mut query = selector.controller.query().to_string();
                if query.pop().is_some() {
                    selector.controller.set_query(query);
                }
            } else {
                tracing::trace!("backspace ignored, panel closed");
            }
        }
        Event::TextChanged(text) => {
            selector.controller.set_query(text.clone());
        }
        Event::PointerDown(point) => {
            if let Some(value) = handle_pointer_down(selector, *point) {
                actions.push(Action::ValueChanged { value });
            }
        }
        Event::PointerMove(point) => {
            if let Some(index) = selector.option_at(*point) {
                selector.controller.set_highlighted(Some(index));
            }
        }
        Event::FocusLost(target) => {
            if selector.monitor.should_dismiss_focus(*target) {
                selector.controller.close();
            }
        }
        Event::Scroll | Event::Resize => {
            selector.reposition();
        }
        Event::ValueFed(value) => {
            selector.controller.set_controlled_value(value.clone());
        }
        Event::SetDisabled(disabled) => {
            selector.controller.set_disabled(*disabled);
        }
        Event::SetOptions(options) => {
            selector.controller.set_options(options.clone());
            force_render = true;
        }
    }

    selector.sync_listeners();

    let after = RenderKey::capture(selector);
    if after.state.query != before.state.query && after.state.is_open() {
        actions.push(Action::QueryChanged {
            query: after.state.query.clone(),
        });
    }

    let should_render = force_render || after != before;
    tracing::trace!(should_render, actions = actions.len(), "event handled");
    (should_render, actions)
}

/// Pointer-down routing: option rows select, the anchor opens or keeps the
/// panel, anything else outside dismisses.
fn handle_pointer_down<H: Host>(selector: &mut Selector<H>, point: Point) -> Option<String> {
    let anchor = selector.anchor_rect();

    if !selector.controller.is_open() {
        if anchor.is_some_and(|rect| rect.contains(point)) {
            tracing::debug!("anchor clicked, opening");
            selector.controller.open();
        }
        return None;
    }

    if let Some(index) = selector.option_at(point) {
        let value = selector
            .controller
            .filtered()
            .get(index)
            .filter(|option| option.is_enabled())
            .map(|option| option.value.clone());
        return match value {
            Some(value) => selector.controller.select(&value),
            None => {
                tracing::trace!(index, "click on disabled row ignored");
                None
            }
        };
    }

    if selector
        .monitor
        .should_dismiss_pointer(point, anchor, selector.panel_rect())
    {
        selector.controller.close();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::{SelectionController, ValueMode};
    use crate::app::host::{Interest, Subscription};
    use crate::app::positioner::PanelPositioner;
    use crate::domain::Rect;

    struct Fixed;

    impl Host for Fixed {
        fn anchor_rect(&self) -> Option<Rect> {
            Some(Rect::new(0.0, 0.0, 20.0, 3.0))
        }

        fn listen(&self, interest: Interest) -> Subscription {
            Subscription::detached(interest)
        }
    }

    fn selector(mode: ValueMode) -> Selector<Fixed> {
        let options = OptionSet::parse_inline("a=Apple, !b=Banana, c=Cherry").unwrap();
        Selector::new(SelectionController::new(options, mode), Fixed)
            .with_positioner(PanelPositioner::new(1.0))
    }

    #[test]
    fn focus_opens_and_renders() {
        let mut s = selector(ValueMode::uncontrolled());
        let (render, actions) = handle_event(&mut s, &Event::Focus);
        assert!(render);
        assert!(actions.is_empty());
        assert!(s.controller().is_open());
    }

    #[test]
    fn typing_emits_query_changes() {
        let mut s = selector(ValueMode::uncontrolled());
        let (_, actions) = handle_event(&mut s, &Event::Char('c'));
        assert_eq!(actions, vec![Action::QueryChanged { query: "c".into() }]);
        let (_, actions) = handle_event(&mut s, &Event::Char('h'));
        assert_eq!(actions, vec![Action::QueryChanged { query: "ch".into() }]);
        let (_, actions) = handle_event(&mut s, &Event::Backspace);
        assert_eq!(actions, vec![Action::QueryChanged { query: "c".into() }]);
    }

    #[test]
    fn backspace_while_closed_is_ignored() {
        let mut s = selector(ValueMode::uncontrolled());
        let (render, actions) = handle_event(&mut s, &Event::Backspace);
        assert!(!render);
        assert!(actions.is_empty());
        assert!(!s.controller().is_open());
    }

    #[test]
    fn clicking_an_option_selects_it() {
        let mut s = selector(ValueMode::uncontrolled());
        handle_event(&mut s, &Event::Focus);
        // panel starts at y = 4; Cherry is the third row
        let (_, actions) = handle_event(&mut s, &Event::PointerDown(Point::new(2.0, 6.5)));
        assert_eq!(actions, vec![Action::ValueChanged { value: "c".into() }]);
        assert!(!s.controller().is_open());
        assert_eq!(s.controller().display_text(), "Cherry");
    }

    #[test]
    fn clicking_a_disabled_option_keeps_the_panel() {
        let mut s = selector(ValueMode::uncontrolled());
        handle_event(&mut s, &Event::Focus);
        let (_, actions) = handle_event(&mut s, &Event::PointerDown(Point::new(2.0, 5.5)));
        assert!(actions.is_empty());
        assert!(s.controller().is_open());
    }

    #[test]
    fn hover_highlights_enabled_rows_only() {
        let mut s = selector(ValueMode::uncontrolled());
        handle_event(&mut s, &Event::Focus);
        handle_event(&mut s, &Event::PointerMove(Point::new(2.0, 4.5)));
        assert_eq!(s.controller().highlighted(), Some(0));
        let (render, _) = handle_event(&mut s, &Event::PointerMove(Point::new(2.0, 5.5)));
        assert!(!render);
        assert_eq!(s.controller().highlighted(), Some(0));
    }

    #[test]
    fn anchor_click_opens_and_keeps_open() {
        let mut s = selector(ValueMode::uncontrolled());
        handle_event(&mut s, &Event::PointerDown(Point::new(5.0, 1.0)));
        assert!(s.controller().is_open());
        handle_event(&mut s, &Event::PointerDown(Point::new(5.0, 1.0)));
        assert!(s.controller().is_open());
    }

    #[test]
    fn focus_into_panel_is_not_dismissal() {
        let mut s = selector(ValueMode::uncontrolled());
        handle_event(&mut s, &Event::Focus);
        handle_event(&mut s, &Event::FocusLost(FocusTarget::Panel));
        assert!(s.controller().is_open());
        handle_event(&mut s, &Event::FocusLost(FocusTarget::Outside));
        assert!(!s.controller().is_open());
    }

    #[test]
    fn controlled_selection_waits_for_feedback() {
        let mut s = selector(ValueMode::Controlled(Some("a".into())));
        handle_event(&mut s, &Event::Focus);
        handle_event(&mut s, &Event::Key(NavKey::Down));
        handle_event(&mut s, &Event::Key(NavKey::Down));
        let (_, actions) = handle_event(&mut s, &Event::Key(NavKey::Enter));
        assert_eq!(actions, vec![Action::ValueChanged { value: "c".into() }]);
        assert_eq!(s.controller().display_text(), "Apple");

        let (render, _) = handle_event(&mut s, &Event::ValueFed(Some("c".into())));
        assert!(render);
        assert_eq!(s.controller().display_text(), "Cherry");
    }

    #[test]
    fn disabling_while_open_releases_listeners() {
        let mut s = selector(ValueMode::uncontrolled());
        handle_event(&mut s, &Event::Focus);
        assert!(s.monitor().is_armed());
        handle_event(&mut s, &Event::SetDisabled(true));
        assert!(!s.controller().is_open());
        assert!(!s.monitor().is_armed());
        assert!(!s.positioner().is_attached());
        let (render, _) = handle_event(&mut s, &Event::Focus);
        assert!(!render);
    }

    #[test]
    fn replacing_options_always_renders() {
        let mut s = selector(ValueMode::uncontrolled());
        let options = OptionSet::parse_inline("x=Xylophone").unwrap();
        let (render, _) = handle_event(&mut s, &Event::SetOptions(options));
        assert!(render);
        assert_eq!(s.controller().options().len(), 1);
    }
}
