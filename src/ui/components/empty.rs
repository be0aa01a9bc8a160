//! Empty state row renderer.
//!
//! Shown as the only panel row when the query matches nothing. The message
//! is centered between the panel borders.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;
use std::fmt::{self, Write};

/// Renders the empty state message as one bordered line of `width` cells.
pub fn render_empty_row(
    out: &mut impl Write,
    line: usize,
    col: usize,
    width: usize,
    empty: &EmptyState,
    theme: &Theme,
) -> fmt::Result {
    let inner_width = width.saturating_sub(2);
    let message = truncate(&empty.message, inner_width);
    let msg_len = message.chars().count();
    let left = (inner_width - msg_len) / 2;
    let right = inner_width - msg_len - left;

    position_cursor(out, line, col)?;
    write!(out, "{}│", Theme::fg(&theme.colors.panel_border))?;
    write!(out, "{}{}", Theme::dim(), Theme::fg(&theme.colors.empty_state_fg))?;
    write!(out, "{}{message}{}", " ".repeat(left), " ".repeat(right))?;
    write!(out, "{}{}│{}", Theme::reset(), Theme::fg(&theme.colors.panel_border), Theme::reset())
}
