//! Option panel renderer.
//!
//! One terminal line per visible option row, framed by side borders in the
//! panel border color. The highlighted row gets the highlight colors across
//! its full width; disabled rows are dimmed and struck through.

use crate::ui::helpers::{cells, position_cursor, truncate, write_highlighted};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OptionRow, PanelViewModel};
use std::fmt::{self, Write};

use super::empty::render_empty_row;

/// Marker drawn before the committed option.
const SELECTED_MARKER: char = '✓';

/// Renders the panel, clipped to `max_row` (1-indexed, inclusive).
///
/// # Layout
///
/// ```text
/// │ ✓ Apple       │
/// │   Cherry  red │
/// ```
pub fn render_panel(
    out: &mut impl Write,
    panel: &PanelViewModel,
    theme: &Theme,
    max_row: usize,
) -> fmt::Result {
    let (top, col, _height, width) = cells(panel.rect);
    if width < 4 {
        return Ok(());
    }

    if let Some(empty) = &panel.empty_state {
        if top <= max_row {
            render_empty_row(out, top, col, width, empty, theme)?;
        }
        return Ok(());
    }

    for (offset, row) in panel.rows.iter().enumerate() {
        let line = top + offset;
        if line > max_row {
            break;
        }
        render_option_row(out, line, col, width, row, theme)?;
    }

    Ok(())
}

fn render_option_row(
    out: &mut impl Write,
    line: usize,
    col: usize,
    width: usize,
    row: &OptionRow,
    theme: &Theme,
) -> fmt::Result {
    let inner_width = width - 2;
    let border = Theme::fg(&theme.colors.panel_border);

    let style = if row.is_highlighted {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.highlight_fg),
            Theme::bg(&theme.colors.highlight_bg)
        )
    } else if row.is_disabled {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.option_disabled),
            Theme::strikethrough()
        )
    } else {
        Theme::fg(&theme.colors.text)
    };

    let marker = if row.is_selected { SELECTED_MARKER } else { ' ' };
    let mut prefix = format!(" {marker} ");
    if let Some(icon) = &row.icon {
        prefix.push_str(icon);
        prefix.push(' ');
    }
    let prefix = truncate(&prefix, inner_width);
    let label_width = inner_width.saturating_sub(prefix.chars().count());

    let label = truncate(&row.label, label_width);
    let mut used = prefix.chars().count() + label.chars().count();

    position_cursor(out, line, col)?;
    write!(out, "{border}│{}{style}{prefix}", Theme::reset())?;

    if row.is_disabled {
        out.write_str(&label)?;
    } else {
        write_highlighted(out, &label, &row.highlight_ranges, theme, &style)?;
    }

    if let Some(description) = &row.description {
        let room = inner_width.saturating_sub(used + 2);
        if room > 0 {
            let description = truncate(description, room);
            write!(out, "  {}{description}{}{style}", Theme::dim(), Theme::reset())?;
            used += 2 + description.chars().count();
        }
    }

    write!(out, "{}", " ".repeat(inner_width.saturating_sub(used)))?;
    write!(out, "{}{border}│{}", Theme::reset(), Theme::reset())
}
