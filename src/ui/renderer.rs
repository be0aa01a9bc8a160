//! Top-level rendering coordinator.
//!
//! Computes the view model from the selector and hands its parts to the
//! components:
//!
//! 1. **View Model Computation**: `Selector` → `SelectorViewModel`
//! 2. **Component Rendering**: field at the anchor, panel at its rectangle
//!
//! Nothing is drawn when the host cannot report the anchor rectangle.

use crate::app::{Host, Selector};
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectorViewModel;
use crate::domain::Rect;
use std::fmt::{self, Write};

/// Renders the control to stdout.
///
/// # Parameters
///
/// * `selector` - The mounted control
/// * `rows` - Terminal height in rows, used to clip the panel
/// * `cols` - Terminal width in columns (unused; the anchor decides width)
pub fn render<H: Host>(selector: &Selector<H>, rows: usize, cols: usize) {
    print!("{}", render_to_string(selector, rows, cols));
}

/// Renders the control into a string of ANSI output.
#[must_use]
pub fn render_to_string<H: Host>(selector: &Selector<H>, rows: usize, _cols: usize) -> String {
    let Some(anchor) = selector.anchor_rect() else {
        tracing::trace!("anchor unavailable, nothing rendered");
        return String::new();
    };

    let viewmodel = selector.compute_viewmodel();
    let mut out = String::new();
    if let Err(e) = render_viewmodel(&mut out, &viewmodel, anchor, selector.theme(), rows) {
        tracing::warn!(error = %e, "render failed");
    }
    out
}

fn render_viewmodel(
    out: &mut impl Write,
    vm: &SelectorViewModel,
    anchor: Rect,
    theme: &Theme,
    rows: usize,
) -> fmt::Result {
    components::render_field(out, anchor, vm, theme)?;

    if let Some(panel) = &vm.panel {
        components::render_panel(out, panel, theme, rows)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::{SelectionController, ValueMode};
    use crate::app::host::{Interest, Subscription};
    use crate::app::positioner::PanelPositioner;
    use crate::app::{handle_event, Event};
    use crate::domain::OptionSet;
    use std::cell::Cell;

    struct Pane {
        visible: Cell<bool>,
    }

    impl Host for Pane {
        fn anchor_rect(&self) -> Option<Rect> {
            self.visible.get().then(|| Rect::new(0.0, 0.0, 24.0, 3.0))
        }

        fn listen(&self, interest: Interest) -> Subscription {
            Subscription::detached(interest)
        }
    }

    fn selector() -> Selector<Pane> {
        let options = OptionSet::parse_inline("a=Apple, c=Cherry").unwrap();
        Selector::new(
            SelectionController::new(options, ValueMode::uncontrolled()),
            Pane {
                visible: Cell::new(true),
            },
        )
        .with_positioner(PanelPositioner::new(0.0))
        .with_placeholder("Pick a fruit")
    }

    #[test]
    fn closed_control_draws_the_placeholder_only() {
        let out = render_to_string(&selector(), 24, 80);
        assert!(out.contains("Pick a fruit"));
        assert!(!out.contains("Apple"));
    }

    #[test]
    fn open_control_draws_the_panel() {
        let mut s = selector();
        handle_event(&mut s, &Event::Focus);
        let out = render_to_string(&s, 24, 80);
        assert!(out.contains("Apple"));
        assert!(out.contains("Cherry"));
        assert!(out.contains("\u{1b}[4;1H"));
    }

    #[test]
    fn hidden_anchor_draws_nothing() {
        let mut s = selector();
        handle_event(&mut s, &Event::Focus);
        s.host().visible.set(false);
        assert!(render_to_string(&s, 24, 80).is_empty());
    }
}
