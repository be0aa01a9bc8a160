//! Theme management and ANSI escape sequence generation.
//!
//! The theme is the control's style service: the renderer asks it for colors
//! keyed by [`ControlState`] and never writes anything back.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: dark (default)
//! - `catppuccin-latte`: light
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! text = "#cdd6f4"
//! text_dim = "#6c7086"
//! placeholder = "#7f849c"
//! border = "#45475a"
//! border_open = "#89b4fa"
//! border_invalid = "#f38ba8"
//! border_disabled = "#313244"
//! panel_border = "#585b70"
//! option_disabled = "#585b70"
//! highlight_fg = "#1e1e2e"
//! highlight_bg = "#89b4fa"
//! match_fg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! ```

use crate::app::modes::ControlState;
use crate::domain::error::{AutoselectError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Named color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings (`#rrggbb`) for every part of the control.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Field and option text.
    pub text: String,
    /// Secondary text such as option descriptions.
    pub text_dim: String,
    pub placeholder: String,
    #[serde(default)]
    pub field_bg: Option<String>,

    /// Field border while closed.
    pub border: String,
    pub border_open: String,
    pub border_invalid: String,
    pub border_disabled: String,

    pub panel_border: String,
    pub option_disabled: String,

    /// Highlighted row.
    pub highlight_fg: String,
    pub highlight_bg: String,

    /// Query match inside a label.
    pub match_fg: String,

    pub empty_state_fg: String,
}

/// Colors for the anchor field in one presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldColors<'a> {
    pub border: &'a str,
    pub text: &'a str,
    pub background: Option<&'a str>,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    ///
    /// # Example
    ///
    /// ```
    /// use autoselect::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str)
            .map_err(|e| tracing::warn!(theme = name, error = %e, "built-in theme failed to parse"))
            .ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AutoselectError::Io`] if the file cannot be read and
    /// [`AutoselectError::Theme`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| AutoselectError::Theme(format!("{}: {e}", path.display())))
    }

    /// Field colors for a presentation state.
    #[must_use]
    pub fn field_colors(&self, state: ControlState) -> FieldColors<'_> {
        let c = &self.colors;
        let (border, text) = match state {
            ControlState::Closed => (&c.border, &c.text),
            ControlState::Open => (&c.border_open, &c.text),
            ControlState::Invalid => (&c.border_invalid, &c.text),
            ControlState::Disabled => (&c.border_disabled, &c.option_disabled),
        };
        FieldColors {
            border,
            text,
            background: c.field_bg.as_deref(),
        }
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    ///
    /// ```
    /// use autoselect::ui::theme::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn strikethrough() -> &'static str {
        "\u{001b}[9m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Palette used when the bundled theme files are unusable.
    fn fallback() -> Self {
        let s = str::to_string;
        Self {
            name: s(DEFAULT_THEME),
            colors: ThemeColors {
                text: s("#cdd6f4"),
                text_dim: s("#6c7086"),
                placeholder: s("#7f849c"),
                field_bg: None,
                border: s("#45475a"),
                border_open: s("#89b4fa"),
                border_invalid: s("#f38ba8"),
                border_disabled: s("#313244"),
                panel_border: s("#585b70"),
                option_disabled: s("#585b70"),
                highlight_fg: s("#1e1e2e"),
                highlight_bg: s("#89b4fa"),
                match_fg: s("#f9e2af"),
                empty_state_fg: s("#89b4fa"),
            },
        }
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}
