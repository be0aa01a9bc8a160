//! Host environment capability.
//!
//! The control never talks to a concrete platform. Everything it needs from
//! its surroundings comes through the [`Host`] trait: the anchor's on-screen
//! rectangle and the ability to register for environment notifications.
//!
//! # Listener Lifecycle
//!
//! [`Host::listen`] returns a [`Subscription`]. The subscription owns the
//! release callback and runs it exactly once, either when
//! [`Subscription::release`] is called or when the handle is dropped. The
//! positioner and the dismissal monitor keep their subscriptions only while
//! the panel is open, so dropping the whole control also releases anything
//! still held.
//!
//! # Example
//!
//! ```
//! use autoselect::app::host::{Host, Interest, Subscription};
//! use autoselect::domain::Rect;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! struct FixedHost {
//!     active: Rc<Cell<usize>>,
//! }
//!
//! impl Host for FixedHost {
//!     fn anchor_rect(&self) -> Option<Rect> {
//!         Some(Rect::new(10.0, 10.0, 200.0, 32.0))
//!     }
//!
//!     fn listen(&self, interest: Interest) -> Subscription {
//!         self.active.set(self.active.get() + 1);
//!         let active = Rc::clone(&self.active);
//!         Subscription::new(interest, move || active.set(active.get() - 1))
//!     }
//! }
//!
//! let host = FixedHost { active: Rc::new(Cell::new(0)) };
//! let subscription = host.listen(Interest::ScrollResize);
//! assert_eq!(host.active.get(), 1);
//! drop(subscription);
//! assert_eq!(host.active.get(), 0);
//! ```

use crate::domain::Rect;
use std::fmt;
use std::rc::Rc;

/// Classes of environment notifications the control subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    /// Scrolling of any ancestor and viewport resizing. Drives repositioning.
    ScrollResize,

    /// Pointer-down and focus changes anywhere. Drives outside dismissal.
    OutsideInteraction,
}

/// Capability supplied by the hosting environment.
pub trait Host {
    /// Current bounding rectangle of the anchor control.
    ///
    /// Returns `None` when the anchor is not mounted or not visible. The
    /// control then suppresses the panel instead of drawing it at a stale
    /// position.
    fn anchor_rect(&self) -> Option<Rect>;

    /// Registers interest in a class of notifications.
    ///
    /// The host delivers matching notifications as events until the returned
    /// subscription is released.
    fn listen(&self, interest: Interest) -> Subscription;
}

impl<H: Host + ?Sized> Host for Rc<H> {
    fn anchor_rect(&self) -> Option<Rect> {
        (**self).anchor_rect()
    }

    fn listen(&self, interest: Interest) -> Subscription {
        (**self).listen(interest)
    }
}

impl<H: Host + ?Sized> Host for &H {
    fn anchor_rect(&self) -> Option<Rect> {
        (**self).anchor_rect()
    }

    fn listen(&self, interest: Interest) -> Subscription {
        (**self).listen(interest)
    }
}

/// Scoped listener registration.
///
/// Releasing is idempotent from the caller's point of view: the release
/// callback runs at most once no matter how the handle goes away.
pub struct Subscription {
    interest: Interest,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription that runs `release` when it ends.
    pub fn new(interest: Interest, release: impl FnOnce() + 'static) -> Self {
        Self {
            interest,
            release: Some(Box::new(release)),
        }
    }

    /// Creates a subscription with nothing to release.
    ///
    /// Useful for hosts that deliver a notification class unconditionally.
    #[must_use]
    pub fn detached(interest: Interest) -> Self {
        Self {
            interest,
            release: None,
        }
    }

    #[must_use]
    pub const fn interest(&self) -> Interest {
        self.interest
    }

    /// Ends the subscription now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(interest = ?self.interest, "releasing listener");
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("interest", &self.interest)
            .field("pending_release", &self.release.is_some())
            .finish()
    }
}
