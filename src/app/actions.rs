//! Notifications emitted to the control's owner.
//!
//! The event handler returns a `Vec<Action>` after processing each event.
//! Actions never feed back into the selector by themselves: in controlled
//! mode it is the owner's job to answer a [`Action::ValueChanged`] with a
//! [`ValueFed`](crate::app::Event::ValueFed) event.

/// Owner-facing notifications produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// An option was selected. Emitted exactly once per accepted selection,
    /// in both controlled and uncontrolled mode.
    ValueChanged {
        /// Value of the selected option.
        value: String,
    },

    /// The typed query changed while the panel is open.
    ///
    /// Purely informational; nothing in the control depends on the owner
    /// observing it.
    QueryChanged { query: String },
}
