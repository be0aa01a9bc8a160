//! Panel positioner.
//!
//! Places the floating panel directly under the anchor: same left edge, same
//! width, a fixed gap below the anchor's bottom edge. The placement depends
//! only on the anchor rectangle, so it is memoized per rectangle.
//!
//! While the panel is open the positioner holds a
//! [`Interest::ScrollResize`] subscription and is asked to
//! [`reposition`](PanelPositioner::reposition) on every scroll or resize
//! notification. While closed it holds nothing and computes nothing.

use super::host::{Host, Interest, Subscription};
use crate::domain::{PanelPosition, Rect};

/// Gap between the anchor's bottom edge and the panel, in host units.
pub const DEFAULT_PANEL_OFFSET: f32 = 4.0;

/// Computes the panel placement for an anchor rectangle.
///
/// # Example
///
/// ```
/// use autoselect::app::positioner::compute_position;
/// use autoselect::domain::Rect;
///
/// let position = compute_position(Rect::new(10.0, 20.0, 200.0, 30.0), 4.0);
/// assert_eq!(position.top, 54.0);
/// assert_eq!(position.left, 10.0);
/// assert_eq!(position.width, 200.0);
/// ```
#[must_use]
pub fn compute_position(anchor: Rect, offset: f32) -> PanelPosition {
    PanelPosition {
        top: anchor.bottom() + offset,
        left: anchor.left(),
        width: anchor.width,
    }
}

#[derive(Debug)]
pub struct PanelPositioner {
    offset: f32,
    cached: Option<(Rect, PanelPosition)>,
    current: Option<PanelPosition>,
    subscription: Option<Subscription>,
}

impl Default for PanelPositioner {
    fn default() -> Self {
        Self::new(DEFAULT_PANEL_OFFSET)
    }
}

impl PanelPositioner {
    #[must_use]
    pub const fn new(offset: f32) -> Self {
        Self {
            offset,
            cached: None,
            current: None,
            subscription: None,
        }
    }

    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Last computed placement. `None` while detached or while the anchor is
    /// unavailable.
    #[must_use]
    pub const fn position(&self) -> Option<PanelPosition> {
        self.current
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Starts tracking the anchor: subscribes to scroll/resize notifications
    /// and computes the initial placement.
    ///
    /// Calling it again while attached only repositions.
    pub fn attach<H: Host + ?Sized>(&mut self, host: &H) {
        if self.subscription.is_none() {
            self.subscription = Some(host.listen(Interest::ScrollResize));
            tracing::debug!("positioner attached");
        }
        self.reposition(host);
    }

    /// Recomputes the placement from the host's current anchor rectangle.
    ///
    /// Returns `true` if the placement changed. Does nothing while detached.
    pub fn reposition<H: Host + ?Sized>(&mut self, host: &H) -> bool {
        if !self.is_attached() {
            return false;
        }

        let next = match host.anchor_rect() {
            Some(anchor) => Some(self.position_for(anchor)),
            None => {
                tracing::debug!("anchor unavailable, suppressing panel");
                None
            }
        };

        let changed = next != self.current;
        self.current = next;
        changed
    }

    /// Stops tracking: releases the subscription and forgets the placement.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.release();
            tracing::debug!("positioner detached");
        }
        self.current = None;
    }

    fn position_for(&mut self, anchor: Rect) -> PanelPosition {
        if let Some((rect, position)) = self.cached {
            if rect == anchor {
                return position;
            }
        }

        let position = compute_position(anchor, self.offset);
        tracing::trace!(?anchor, ?position, "panel position computed");
        self.cached = Some((anchor, position));
        position
    }
}
