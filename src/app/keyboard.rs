//! Keyboard navigation engine.
//!
//! Maps the four navigation keys onto [`SelectionController`] transitions.
//! The cursor moves over the filtered list and skips whole runs of disabled
//! entries in one press. There is no wraparound: at either end of the list
//! the cursor stays where it is.
//!
//! | Key | Closed | Open |
//! |---|---|---|
//! | Down | open | next enabled entry |
//! | Up | open | previous enabled entry |
//! | Enter | ignored | select highlighted entry |
//! | Escape | ignored | close |

use super::controller::SelectionController;
use crate::domain::SelectOption;

/// Keys the engine understands. Everything else is text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Enter,
    Escape,
}

/// Result of feeding a key to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was handled; the host should not treat it as text.
    Consumed,

    /// The key had no meaning in the current state and may fall through.
    Ignored,

    /// Enter selected an option. Carries the value to report as a change.
    Selected(String),
}

impl KeyOutcome {
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// Applies `key` to the controller.
///
/// # Example
///
/// ```
/// use autoselect::app::controller::{SelectionController, ValueMode};
/// use autoselect::app::keyboard::{handle_key, KeyOutcome, NavKey};
/// use autoselect::domain::OptionSet;
///
/// let options = OptionSet::parse_inline("a=Apple, !b=Banana, c=Cherry").unwrap();
/// let mut controller = SelectionController::new(options, ValueMode::uncontrolled());
///
/// handle_key(&mut controller, NavKey::Down); // opens
/// handle_key(&mut controller, NavKey::Down);
/// assert_eq!(controller.highlighted(), Some(0));
/// handle_key(&mut controller, NavKey::Down); // skips the disabled Banana
/// assert_eq!(controller.highlighted(), Some(2));
///
/// assert_eq!(handle_key(&mut controller, NavKey::Enter), KeyOutcome::Selected("c".into()));
/// ```
pub fn handle_key(controller: &mut SelectionController, key: NavKey) -> KeyOutcome {
    if controller.is_disabled() {
        return KeyOutcome::Ignored;
    }

    if !controller.is_open() {
        return match key {
            NavKey::Down | NavKey::Up => {
                controller.open();
                KeyOutcome::Consumed
            }
            NavKey::Enter | NavKey::Escape => KeyOutcome::Ignored,
        };
    }

    match key {
        NavKey::Down => {
            let target = next_enabled(&controller.filtered(), controller.highlighted());
            if let Some(index) = target {
                controller.set_highlighted(Some(index));
            }
            KeyOutcome::Consumed
        }
        NavKey::Up => {
            let target = prev_enabled(&controller.filtered(), controller.highlighted());
            if let Some(index) = target {
                controller.set_highlighted(Some(index));
            }
            KeyOutcome::Consumed
        }
        NavKey::Enter => {
            let Some(value) = controller
                .highlighted_option()
                .filter(|option| option.is_enabled())
                .map(|option| option.value.clone())
            else {
                tracing::trace!("enter ignored, nothing highlighted");
                return KeyOutcome::Consumed;
            };
            controller
                .select(&value)
                .map_or(KeyOutcome::Consumed, KeyOutcome::Selected)
        }
        NavKey::Escape => {
            controller.close();
            KeyOutcome::Consumed
        }
    }
}

/// First enabled index strictly after `current`, or from the top when there
/// is no highlight.
#[must_use]
pub fn next_enabled(options: &[&SelectOption], current: Option<usize>) -> Option<usize> {
    let start = current.map_or(0, |index| index + 1);
    options
        .iter()
        .enumerate()
        .skip(start)
        .find(|(_, option)| option.is_enabled())
        .map(|(index, _)| index)
}

/// Last enabled index strictly before `current`. With no highlight there is
/// nothing above the cursor.
#[must_use]
pub fn prev_enabled(options: &[&SelectOption], current: Option<usize>) -> Option<usize> {
    let current = current?;
    options
        .iter()
        .enumerate()
        .take(current)
        .rev()
        .find(|(_, option)| option.is_enabled())
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::controller::ValueMode;
    use crate::domain::OptionSet;

    fn controller(spec: &str) -> SelectionController {
        SelectionController::new(
            OptionSet::parse_inline(spec).unwrap(),
            ValueMode::uncontrolled(),
        )
    }

    #[test]
    fn down_while_closed_only_opens() {
        let mut c = controller("a=Apple, c=Cherry");
        assert_eq!(handle_key(&mut c, NavKey::Down), KeyOutcome::Consumed);
        assert!(c.is_open());
        assert_eq!(c.highlighted(), None);
    }

    #[test]
    fn enter_and_escape_fall_through_while_closed() {
        let mut c = controller("a=Apple");
        assert_eq!(handle_key(&mut c, NavKey::Enter), KeyOutcome::Ignored);
        assert_eq!(handle_key(&mut c, NavKey::Escape), KeyOutcome::Ignored);
        assert!(!c.is_open());
    }

    #[test]
    fn down_skips_runs_of_disabled_entries() {
        let mut c = controller("a=A, !b=B, !x=X, !y=Y, c=C");
        c.open();
        handle_key(&mut c, NavKey::Down);
        assert_eq!(c.highlighted(), Some(0));
        handle_key(&mut c, NavKey::Down);
        assert_eq!(c.highlighted(), Some(4));
    }

    #[test]
    fn no_wraparound_at_either_end() {
        let mut c = controller("a=A, c=C, !z=Z");
        c.open();
        for _ in 0..5 {
            handle_key(&mut c, NavKey::Down);
        }
        assert_eq!(c.highlighted(), Some(1));
        for _ in 0..5 {
            handle_key(&mut c, NavKey::Up);
        }
        assert_eq!(c.highlighted(), Some(0));
    }

    #[test]
    fn down_sequence_never_decreases() {
        let mut c = controller("!a=A, b=B, !c=C, d=D, !e=E, !f=F, g=G, !h=H");
        c.open();
        let mut last = None;
        for _ in 0..10 {
            handle_key(&mut c, NavKey::Down);
            let now = c.highlighted();
            assert!(now >= last);
            if let Some(index) = now {
                assert!(c.filtered()[index].is_enabled());
            }
            last = now;
        }
        assert_eq!(last, Some(6));
    }

    #[test]
    fn only_disabled_entries_leave_no_highlight() {
        let mut c = controller("a=Apple, !b=Banana, c=Cherry");
        c.set_query("an");
        handle_key(&mut c, NavKey::Down);
        assert_eq!(c.highlighted(), None);
        assert_eq!(handle_key(&mut c, NavKey::Enter), KeyOutcome::Consumed);
        assert!(c.is_open());
    }

    #[test]
    fn escape_closes_without_selection() {
        let mut c = controller("a=Apple");
        c.set_query("ap");
        handle_key(&mut c, NavKey::Down);
        assert_eq!(handle_key(&mut c, NavKey::Escape), KeyOutcome::Consumed);
        assert!(!c.is_open());
        assert_eq!(c.committed_value(), None);
    }

    #[test]
    fn disabled_control_ignores_keys() {
        let mut c = controller("a=Apple").with_disabled(true);
        assert_eq!(handle_key(&mut c, NavKey::Down), KeyOutcome::Ignored);
        assert!(!c.is_open());
    }

    #[test]
    fn up_without_highlight_stays_unhighlighted() {
        let mut c = controller("!a=A, b=B, c=C");
        c.open();
        assert_eq!(handle_key(&mut c, NavKey::Up), KeyOutcome::Consumed);
        assert_eq!(c.highlighted(), None);
    }
}
