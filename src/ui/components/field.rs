//! Anchor field renderer.
//!
//! Draws the text field the panel hangs from: a bordered box when the anchor
//! is at least three cells tall, a single bare line otherwise. The border
//! color comes from the theme's state-keyed field colors.

use crate::domain::Rect;
use crate::ui::helpers::{cells, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectorViewModel;
use std::fmt::{self, Write};

/// Renders the field into `anchor`.
///
/// # Layout
///
/// ```text
/// ┌──────────────────┐
/// │ Cherry         ▾ │
/// └──────────────────┘
/// ```
pub fn render_field(
    out: &mut impl Write,
    anchor: Rect,
    vm: &SelectorViewModel,
    theme: &Theme,
) -> fmt::Result {
    let (row, col, height, width) = cells(anchor);
    if width < 2 || height == 0 {
        return Ok(());
    }

    let colors = theme.field_colors(vm.control_state);
    let indicator = if vm.panel.is_some() { '▴' } else { '▾' };
    let boxed = height >= 3 && width >= 6;
    let inner_width = if boxed { width - 4 } else { width };
    let text_width = inner_width.saturating_sub(2);

    let (text, text_style) = if vm.display_text.is_empty() {
        (
            truncate(&vm.placeholder, text_width),
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.placeholder)),
        )
    } else {
        (truncate(&vm.display_text, text_width), Theme::fg(colors.text))
    };
    let padding = text_width.saturating_sub(text.chars().count());
    let background = colors.background.map(Theme::bg).unwrap_or_default();

    let text_row = if boxed { row + 1 } else { row };

    if boxed {
        position_cursor(out, row, col)?;
        write!(out, "{}┌{}┐{}", Theme::fg(colors.border), "─".repeat(width - 2), Theme::reset())?;
    }

    position_cursor(out, text_row, col)?;
    if boxed {
        write!(out, "{}│{} ", Theme::fg(colors.border), background)?;
    } else {
        out.write_str(&background)?;
    }
    write!(out, "{text_style}{text}{}", Theme::reset())?;
    write!(out, "{background}{}", " ".repeat(padding))?;
    write!(out, " {}{indicator}", Theme::fg(colors.border))?;
    if boxed {
        write!(out, " │")?;
    }
    out.write_str(Theme::reset())?;

    if boxed {
        position_cursor(out, row + 2, col)?;
        write!(out, "{}└{}┘{}", Theme::fg(colors.border), "─".repeat(width - 2), Theme::reset())?;
    }

    Ok(())
}
