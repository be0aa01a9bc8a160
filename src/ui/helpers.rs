//! Shared rendering utilities.
//!
//! Everything here writes into a `fmt::Write` sink instead of stdout so the
//! components can be exercised against a `String`. All text handling is by
//! `char`, never by byte.

use crate::domain::Rect;
use crate::ui::theme::Theme;
use std::fmt::{self, Write};

/// Moves the cursor to a 1-indexed terminal position.
pub fn position_cursor(out: &mut impl Write, row: usize, col: usize) -> fmt::Result {
    write!(out, "\u{1b}[{row};{col}H")
}

/// Terminal cell span of a rectangle: `(row, col, height, width)`, with a
/// 1-indexed origin. Negative coordinates are clamped to the first cell.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn cells(rect: Rect) -> (usize, usize, usize, usize) {
    let to_cell = |v: f32| v.max(0.0).round() as usize;
    (
        to_cell(rect.top()) + 1,
        to_cell(rect.left()) + 1,
        to_cell(rect.height),
        to_cell(rect.width),
    )
}

/// Cuts `text` to at most `width` characters, ending with `…` when cut.
///
/// # Example
///
/// ```
/// use autoselect::ui::helpers::truncate;
///
/// assert_eq!(truncate("Cherry", 10), "Cherry");
/// assert_eq!(truncate("Cherry", 4), "Che…");
/// assert_eq!(truncate("Cherry", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Writes `text` with the given character ranges in the match color.
///
/// `restore` is the escape sequence re-applied after each highlighted run,
/// so the surrounding row style (for example a highlight background)
/// continues after the match.
pub fn write_highlighted(
    out: &mut impl Write,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    restore: &str,
) -> fmt::Result {
    if ranges.is_empty() {
        return out.write_str(text);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let plain: String = chars[current..start].iter().collect();
        out.write_str(&plain)?;

        write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.match_fg))?;
        let matched: String = chars[start..end].iter().collect();
        out.write_str(&matched)?;
        write!(out, "{}{restore}", Theme::reset())?;

        current = end;
    }

    let rest: String = chars[current..].iter().collect();
    out.write_str(&rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_escape() {
        let mut out = String::new();
        position_cursor(&mut out, 3, 7).unwrap();
        assert_eq!(out, "\u{1b}[3;7H");
    }

    #[test]
    fn rect_to_cells_is_one_indexed() {
        assert_eq!(cells(Rect::new(0.0, 3.0, 20.0, 2.0)), (4, 1, 2, 20));
        assert_eq!(cells(Rect::new(-2.0, -1.0, 5.0, 1.0)), (1, 1, 1, 5));
    }

    #[test]
    fn truncation_counts_chars() {
        assert_eq!(truncate("Crème brûlée", 6), "Crème…");
    }

    #[test]
    fn highlighted_text_keeps_every_char() {
        let theme = Theme::default();
        let mut out = String::new();
        write_highlighted(&mut out, "Pineapple", &[(4, 7)], &theme, "").unwrap();
        assert!(out.starts_with("Pine"));
        assert!(out.ends_with("le"));
        assert!(out.contains("app"));
    }

    #[test]
    fn out_of_range_highlights_are_clamped() {
        let theme = Theme::default();
        let mut out = String::new();
        write_highlighted(&mut out, "abc", &[(2, 10), (7, 9)], &theme, "").unwrap();
        assert!(out.starts_with("ab"));
        assert!(out.contains('c'));
    }
}
