//! Dismissal monitor.
//!
//! Decides whether a pointer-down or a focus change happened outside the
//! control. The monitor is armed (holding an
//! [`Interest::OutsideInteraction`] subscription) only while the panel is
//! open; a disarmed monitor never asks for dismissal.
//!
//! The anchor and the panel together form the inside region. Interaction
//! with an option row is inside and never dismisses.

use super::host::{Host, Interest, Subscription};
use crate::domain::{Point, Rect};

/// Where focus went when the control lost it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The anchor field itself.
    Anchor,
    /// The floating panel or one of its rows.
    Panel,
    /// Some other element of the host.
    Outside,
    /// Focus left the host entirely (window blur, pane hidden).
    Nowhere,
}

impl FocusTarget {
    #[must_use]
    pub const fn is_inside(self) -> bool {
        matches!(self, Self::Anchor | Self::Panel)
    }
}

#[derive(Debug, Default)]
pub struct DismissalMonitor {
    subscription: Option<Subscription>,
}

impl DismissalMonitor {
    #[must_use]
    pub const fn new() -> Self {
        Self { subscription: None }
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Registers the outside-interaction listener. No-op if already armed.
    pub fn arm<H: Host + ?Sized>(&mut self, host: &H) {
        if self.subscription.is_none() {
            self.subscription = Some(host.listen(Interest::OutsideInteraction));
            tracing::debug!("dismissal monitor armed");
        }
    }

    /// Releases the listener. No-op if already disarmed.
    pub fn disarm(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
            tracing::debug!("dismissal monitor disarmed");
        }
    }

    /// Returns `true` if a pointer-down at `point` should close the panel.
    ///
    /// A missing anchor or panel rectangle counts as an empty region.
    ///
    /// # Example
    ///
    /// ```
    /// use autoselect::app::dismissal::DismissalMonitor;
    /// use autoselect::app::host::{Host, Interest, Subscription};
    /// use autoselect::domain::{Point, Rect};
    ///
    /// struct NoopHost;
    /// impl Host for NoopHost {
    ///     fn anchor_rect(&self) -> Option<Rect> { None }
    ///     fn listen(&self, interest: Interest) -> Subscription { Subscription::detached(interest) }
    /// }
    ///
    /// let anchor = Rect::new(0.0, 0.0, 20.0, 3.0);
    /// let panel = Rect::new(0.0, 4.0, 20.0, 5.0);
    /// let mut monitor = DismissalMonitor::new();
    /// monitor.arm(&NoopHost);
    ///
    /// assert!(!monitor.should_dismiss_pointer(Point::new(2.0, 5.0), Some(anchor), Some(panel)));
    /// assert!(monitor.should_dismiss_pointer(Point::new(30.0, 1.0), Some(anchor), Some(panel)));
    /// ```
    #[must_use]
    pub fn should_dismiss_pointer(
        &self,
        point: Point,
        anchor: Option<Rect>,
        panel: Option<Rect>,
    ) -> bool {
        if !self.is_armed() {
            return false;
        }
        let inside = anchor.is_some_and(|rect| rect.contains(point))
            || panel.is_some_and(|rect| rect.contains(point));
        if !inside {
            tracing::debug!(x = point.x, y = point.y, "pointer-down outside control");
        }
        !inside
    }

    /// Returns `true` if moving focus to `target` should close the panel.
    #[must_use]
    pub fn should_dismiss_focus(&self, target: FocusTarget) -> bool {
        if !self.is_armed() {
            return false;
        }
        if !target.is_inside() {
            tracing::debug!(?target, "focus left control");
        }
        !target.is_inside()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingHost {
        live: Rc<Cell<i32>>,
    }

    impl Host for CountingHost {
        fn anchor_rect(&self) -> Option<Rect> {
            None
        }

        fn listen(&self, interest: Interest) -> Subscription {
            assert_eq!(interest, Interest::OutsideInteraction);
            self.live.set(self.live.get() + 1);
            let live = Rc::clone(&self.live);
            Subscription::new(interest, move || live.set(live.get() - 1))
        }
    }

    fn armed() -> (DismissalMonitor, Rc<Cell<i32>>) {
        let live = Rc::new(Cell::new(0));
        let host = CountingHost {
            live: Rc::clone(&live),
        };
        let mut monitor = DismissalMonitor::new();
        monitor.arm(&host);
        (monitor, live)
    }

    const ANCHOR: Rect = Rect::new(0.0, 0.0, 10.0, 1.0);
    const PANEL: Rect = Rect::new(0.0, 2.0, 10.0, 4.0);

    #[test]
    fn pointer_inside_either_region_is_kept() {
        let (monitor, _) = armed();
        assert!(!monitor.should_dismiss_pointer(Point::new(3.0, 0.5), Some(ANCHOR), Some(PANEL)));
        assert!(!monitor.should_dismiss_pointer(Point::new(3.0, 3.0), Some(ANCHOR), Some(PANEL)));
    }

    #[test]
    fn pointer_in_the_gap_dismisses() {
        let (monitor, _) = armed();
        assert!(monitor.should_dismiss_pointer(Point::new(3.0, 1.5), Some(ANCHOR), Some(PANEL)));
    }

    #[test]
    fn missing_panel_counts_as_empty() {
        let (monitor, _) = armed();
        assert!(monitor.should_dismiss_pointer(Point::new(3.0, 3.0), Some(ANCHOR), None));
    }

    #[test]
    fn focus_moving_into_the_panel_is_kept() {
        let (monitor, _) = armed();
        assert!(!monitor.should_dismiss_focus(FocusTarget::Panel));
        assert!(!monitor.should_dismiss_focus(FocusTarget::Anchor));
        assert!(monitor.should_dismiss_focus(FocusTarget::Outside));
        assert!(monitor.should_dismiss_focus(FocusTarget::Nowhere));
    }

    #[test]
    fn disarmed_monitor_never_dismisses() {
        let (mut monitor, live) = armed();
        assert_eq!(live.get(), 1);
        monitor.disarm();
        monitor.disarm();
        assert_eq!(live.get(), 0);
        assert!(!monitor.should_dismiss_pointer(Point::new(99.0, 99.0), None, None));
        assert!(!monitor.should_dismiss_focus(FocusTarget::Outside));
    }
}
