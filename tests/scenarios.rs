//! End-to-end behavior of a mounted selector driven through `handle_event`.

use autoselect::app::{Host, Interest, Subscription};
use autoselect::{
    handle_event, Action, Event, FocusTarget, NavKey, OptionSet, Point, Rect, SelectionController,
    Selector, ValueMode,
};
use std::cell::Cell;
use std::rc::Rc;

/// Host that records listener traffic and lets tests move the anchor.
#[derive(Default)]
struct RecordingHost {
    anchor: Cell<Option<Rect>>,
    acquired: Rc<Cell<usize>>,
    released: Rc<Cell<usize>>,
}

impl RecordingHost {
    fn at(anchor: Rect) -> Rc<Self> {
        let host = Self::default();
        host.anchor.set(Some(anchor));
        Rc::new(host)
    }

    fn active(&self) -> usize {
        self.acquired.get() - self.released.get()
    }
}

impl Host for RecordingHost {
    fn anchor_rect(&self) -> Option<Rect> {
        self.anchor.get()
    }

    fn listen(&self, interest: Interest) -> Subscription {
        self.acquired.set(self.acquired.get() + 1);
        let released = Rc::clone(&self.released);
        Subscription::new(interest, move || released.set(released.get() + 1))
    }
}

fn fruit() -> OptionSet {
    OptionSet::parse_inline("a=Apple, !b=Banana, c=Cherry").unwrap()
}

fn mount(mode: ValueMode) -> (Selector<Rc<RecordingHost>>, Rc<RecordingHost>) {
    let host = RecordingHost::at(Rect::new(0.0, 0.0, 20.0, 3.0));
    let controller = SelectionController::new(fruit(), mode);
    (Selector::new(controller, Rc::clone(&host)), host)
}

fn send(selector: &mut Selector<Rc<RecordingHost>>, events: &[Event]) -> Vec<Action> {
    events
        .iter()
        .flat_map(|event| handle_event(selector, event).1)
        .collect()
}

#[test]
fn down_navigation_skips_disabled_options() {
    let (mut selector, _host) = mount(ValueMode::uncontrolled());

    send(&mut selector, &[Event::Key(NavKey::Down)]);
    assert!(selector.controller().is_open());
    assert_eq!(selector.controller().highlighted(), None);

    send(&mut selector, &[Event::Key(NavKey::Down)]);
    assert_eq!(selector.controller().highlighted(), Some(0));

    send(&mut selector, &[Event::Key(NavKey::Down)]);
    assert_eq!(selector.controller().highlighted(), Some(2));

    // end of list, no wraparound
    let (render, _) = handle_event(&mut selector, &Event::Key(NavKey::Down));
    assert!(!render);
    assert_eq!(selector.controller().highlighted(), Some(2));

    send(&mut selector, &[Event::Key(NavKey::Up)]);
    assert_eq!(selector.controller().highlighted(), Some(0));
}

#[test]
fn disabled_only_match_cannot_be_highlighted_or_selected() {
    let (mut selector, _host) = mount(ValueMode::uncontrolled());

    send(&mut selector, &[Event::Focus, Event::Char('a'), Event::Char('n')]);
    let labels: Vec<_> = selector
        .controller()
        .filtered()
        .iter()
        .map(|option| option.label.clone())
        .collect();
    assert_eq!(labels, vec!["Banana"]);

    let actions = send(
        &mut selector,
        &[Event::Key(NavKey::Down), Event::Key(NavKey::Enter)],
    );
    assert_eq!(selector.controller().highlighted(), None);
    assert!(actions.is_empty());
    assert!(selector.controller().is_open());
    assert_eq!(selector.controller().committed_value(), None);
}

#[test]
fn controlled_display_follows_query_while_open() {
    let (mut selector, _host) = mount(ValueMode::Controlled(Some("c".into())));
    assert_eq!(selector.controller().display_text(), "Cherry");

    send(
        &mut selector,
        &[Event::Focus, Event::Char('x'), Event::Char('y'), Event::Char('z')],
    );
    assert_eq!(selector.controller().display_text(), "xyz");
    assert!(selector.controller().filtered().is_empty());

    send(&mut selector, &[Event::Key(NavKey::Escape)]);
    assert_eq!(selector.controller().display_text(), "Cherry");
}

#[test]
fn outside_pointer_down_dismisses_once_without_notification() {
    let (mut selector, host) = mount(ValueMode::uncontrolled());
    send(
        &mut selector,
        &[Event::Focus, Event::Char('e'), Event::Key(NavKey::Down)],
    );
    assert_eq!(selector.controller().highlighted(), Some(0));
    assert_eq!(host.active(), 2);

    let (render, actions) = handle_event(&mut selector, &Event::PointerDown(Point::new(100.0, 100.0)));
    assert!(render);
    assert!(actions.is_empty());
    assert!(!selector.controller().is_open());
    assert_eq!(selector.controller().query(), "");
    assert_eq!(selector.controller().highlighted(), None);
    assert_eq!(host.released.get(), 2);

    let (render, actions) = handle_event(&mut selector, &Event::PointerDown(Point::new(100.0, 100.0)));
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(host.released.get(), 2);
}

#[test]
fn pointer_down_inside_the_anchor_keeps_the_panel_open() {
    let (mut selector, host) = mount(ValueMode::uncontrolled());
    send(&mut selector, &[Event::Focus]);

    send(&mut selector, &[Event::PointerDown(Point::new(10.0, 1.0))]);
    assert!(selector.controller().is_open());
    assert_eq!(host.active(), 2);
}

#[test]
fn close_is_idempotent() {
    let (mut selector, host) = mount(ValueMode::uncontrolled());
    send(&mut selector, &[Event::Focus]);

    let (render, _) = handle_event(&mut selector, &Event::Key(NavKey::Escape));
    assert!(render);
    let (render, _) = handle_event(&mut selector, &Event::Key(NavKey::Escape));
    assert!(!render);
    let (render, _) = handle_event(&mut selector, &Event::FocusLost(FocusTarget::Outside));
    assert!(!render);

    assert_eq!(host.acquired.get(), 2);
    assert_eq!(host.released.get(), 2);
}

#[test]
fn listeners_stay_balanced_across_open_close_cycles() {
    let (mut selector, host) = mount(ValueMode::uncontrolled());

    for _ in 0..5 {
        send(&mut selector, &[Event::Focus, Event::Char('p')]);
        assert_eq!(host.active(), 2);
        send(&mut selector, &[Event::FocusLost(FocusTarget::Nowhere)]);
        assert_eq!(host.active(), 0);
    }
    assert_eq!(host.acquired.get(), 10);

    send(&mut selector, &[Event::Focus]);
    assert_eq!(host.active(), 2);
    drop(selector);
    assert_eq!(host.active(), 0);
}

#[test]
fn selection_notifies_once_and_commits_in_uncontrolled_mode() {
    let (mut selector, host) = mount(ValueMode::Uncontrolled {
        default: Some("a".into()),
    });
    assert_eq!(selector.controller().display_text(), "Apple");

    let actions = send(
        &mut selector,
        &[
            Event::Focus,
            Event::Char('c'),
            Event::Key(NavKey::Down),
            Event::Key(NavKey::Enter),
        ],
    );
    let changes: Vec<_> = actions
        .iter()
        .filter(|action| matches!(action, Action::ValueChanged { .. }))
        .collect();
    assert_eq!(changes, vec![&Action::ValueChanged { value: "c".into() }]);
    assert_eq!(selector.controller().display_text(), "Cherry");
    assert_eq!(host.active(), 0);
}

#[test]
fn scroll_repositions_the_open_panel() {
    let (mut selector, host) = mount(ValueMode::uncontrolled());
    send(&mut selector, &[Event::Focus]);
    let before = selector.panel_rect().unwrap();

    host.anchor.set(Some(Rect::new(5.0, 10.0, 20.0, 3.0)));
    let (render, _) = handle_event(&mut selector, &Event::Scroll);
    assert!(render);

    let after = selector.panel_rect().unwrap();
    assert!((after.left() - 5.0).abs() < f32::EPSILON);
    assert!(after.top() > before.top());
}

#[test]
fn hidden_anchor_suppresses_the_panel() {
    let (mut selector, host) = mount(ValueMode::uncontrolled());
    send(&mut selector, &[Event::Focus]);
    assert!(selector.panel_rect().is_some());

    host.anchor.set(None);
    send(&mut selector, &[Event::Resize]);
    assert!(selector.controller().is_open());
    assert!(selector.panel_rect().is_none());
    assert!(selector.compute_viewmodel().panel.is_none());
}

#[test]
fn disabled_control_ignores_input() {
    let (mut selector, host) = mount(ValueMode::uncontrolled());
    send(&mut selector, &[Event::SetDisabled(true)]);

    for event in [
        Event::Focus,
        Event::Key(NavKey::Down),
        Event::Char('a'),
        Event::PointerDown(Point::new(10.0, 1.0)),
    ] {
        let (render, actions) = handle_event(&mut selector, &event);
        assert!(!render, "{event:?} should be ignored");
        assert!(actions.is_empty());
    }
    assert_eq!(host.acquired.get(), 0);
}
