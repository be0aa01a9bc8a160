//! Autoselect: a headless autocomplete selector control.
//!
//! Autoselect implements the control logic of a combobox-style selector:
//! - Order-preserving, case-insensitive filtering of a finite option list
//! - A single state owner with open/select/close transitions, in controlled
//!   or uncontrolled value mode
//! - Keyboard navigation that skips disabled options without wraparound
//! - Panel placement under an anchor, kept in sync on scroll and resize
//! - Dismissal on pointer-down or focus loss outside the control
//!
//! The control is deterministic and synchronous. Everything it needs from its
//! environment comes through the [`Host`] trait, so the same logic drives the
//! bundled Zellij plugin and the in-memory hosts used by the tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Host
//! └─────────────────────────────────────────────────────┘
//!                        │ Event            ↑ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Selector (composition root) + handle_event       │
//! │  - Selection controller, keyboard engine            │
//! │  - Panel positioner, dismissal monitor              │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐        ┌─────────────────────────┐
//! │ UI Layer (ui/)        │        │ Domain (domain/)        │
//! │ - View model          │        │ - Options, option sets  │
//! │ - ANSI rendering      │        │ - Geometry              │
//! │ - Themes              │        │ - Errors                │
//! └───────────────────────┘        └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing-subscriber fmt layer → rotating file     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: control logic with the event/action model
//! - [`domain`]: options, geometry, errors
//! - [`infrastructure`]: sandbox paths
//! - [`ui`]: terminal rendering with theme support
//! - [`observability`]: file-based logging
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/autoselect.wasm" {
//!         options "a=Apple, !b=Banana, c=Cherry"
//!         placeholder "Pick a fruit"
//!         match_mode "fuzzy"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use autoselect::app::{Host, Interest, Subscription};
//! use autoselect::domain::Rect;
//! use autoselect::{handle_event, initialize, Action, Config, Event, NavKey};
//! use std::collections::BTreeMap;
//!
//! struct Fixed;
//! impl Host for Fixed {
//!     fn anchor_rect(&self) -> Option<Rect> { Some(Rect::new(0.0, 0.0, 30.0, 3.0)) }
//!     fn listen(&self, interest: Interest) -> Subscription { Subscription::detached(interest) }
//! }
//!
//! let mut map = BTreeMap::new();
//! map.insert("options".to_string(), "a=Apple, !b=Banana, c=Cherry".to_string());
//! let config = Config::from_zellij(&map);
//!
//! let mut selector = initialize(&config, Fixed)?;
//! for event in [Event::Focus, Event::Key(NavKey::Down), Event::Key(NavKey::Down)] {
//!     handle_event(&mut selector, &event);
//! }
//! let (_, actions) = handle_event(&mut selector, &Event::Key(NavKey::Enter));
//! assert_eq!(actions, vec![Action::ValueChanged { value: "c".to_string() }]);
//! # Ok::<(), autoselect::AutoselectError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Action, ControlState, Event, FocusTarget, Host, KeyOutcome, MatchMode, NavKey,
    PanelLayout, SelectionController, Selector, ValueMode,
};
pub use domain::{AutoselectError, OptionSet, Point, Rect, Result, SelectOption};
pub use ui::Theme;

use app::positioner::{PanelPositioner, DEFAULT_PANEL_OFFSET};
use app::selector::{DEFAULT_MAX_VISIBLE_ROWS, DEFAULT_ROW_HEIGHT};
use infrastructure::resolve_config_path;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/autoselect.wasm" {
///     options "a=Apple, c=Cherry"
///     options_file "~/fruit.toml"
///     value "c"
///     disabled "false"
///     panel_offset "0"
///     max_visible_rows "6"
///     theme_file "/path/to/theme.toml"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Inline option list: `value=Label` entries separated by `,`, a leading
    /// `!` marks an entry disabled.
    pub options: Option<String>,

    /// TOML (`[[options]]`) or JSON (`.json`) option file, appended after the
    /// inline options.
    pub options_file: Option<String>,

    /// Externally owned value. Its presence selects controlled mode; an empty
    /// string means "controlled, nothing selected".
    pub value: Option<String>,

    /// Initial value in uncontrolled mode.
    pub default_value: Option<String>,

    pub disabled: bool,
    pub invalid: bool,
    pub placeholder: String,
    pub match_mode: MatchMode,

    /// Gap between anchor and panel. `None` leaves the choice to the host.
    pub panel_offset: Option<f32>,

    pub row_height: f32,
    pub max_visible_rows: usize,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for the log file. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: None,
            options_file: None,
            value: None,
            default_value: None,
            disabled: false,
            invalid: false,
            placeholder: String::new(),
            match_mode: MatchMode::default(),
            panel_offset: None,
            row_height: DEFAULT_ROW_HEIGHT,
            max_visible_rows: DEFAULT_MAX_VISIBLE_ROWS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable values fall back to their defaults and are logged at
    /// `debug`.
    ///
    /// # Parsing Rules
    ///
    /// - `disabled`, `invalid`: `true`/`yes`/`1` (case-insensitive)
    /// - `match_mode`: `substring` or `fuzzy`
    /// - `panel_offset`, `row_height`: finite numbers (`row_height` > 0)
    /// - `max_visible_rows`: positive integer
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use autoselect::{Config, MatchMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("match_mode".to_string(), "fuzzy".to_string());
    /// map.insert("max_visible_rows".to_string(), "5".to_string());
    /// map.insert("disabled".to_string(), "yes".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.match_mode, MatchMode::Fuzzy);
    /// assert_eq!(config.max_visible_rows, 5);
    /// assert!(config.disabled);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let match_mode = config.get("match_mode").map_or(defaults.match_mode, |name| {
            MatchMode::from_name(name).unwrap_or_else(|| {
                tracing::debug!(match_mode = %name, "unknown match mode, using default");
                defaults.match_mode
            })
        });

        Self {
            options: text("options"),
            options_file: text("options_file"),
            value: config.get("value").map(|s| s.trim().to_string()),
            default_value: text("default_value"),
            disabled: config.get("disabled").is_some_and(|s| parse_flag(s)),
            invalid: config.get("invalid").is_some_and(|s| parse_flag(s)),
            placeholder: config.get("placeholder").cloned().unwrap_or_default(),
            match_mode,
            panel_offset: parse_number(config, "panel_offset", |v| v.is_finite()),
            row_height: parse_number(config, "row_height", |v| v.is_finite() && v > 0.0)
                .unwrap_or(defaults.row_height),
            max_visible_rows: config
                .get("max_visible_rows")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .filter(|rows| *rows > 0)
                .unwrap_or(defaults.max_visible_rows),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }

    /// Value ownership implied by `value` / `default_value`.
    #[must_use]
    pub fn value_mode(&self) -> ValueMode {
        match &self.value {
            Some(value) => ValueMode::Controlled(Some(value.clone()).filter(|v| !v.is_empty())),
            None => ValueMode::Uncontrolled {
                default: self.default_value.clone(),
            },
        }
    }

    /// Loads the option set from the inline list and the option file.
    ///
    /// # Errors
    ///
    /// Returns an error if the option file cannot be loaded or if two options
    /// share a value across both sources.
    pub fn load_options(&self) -> Result<OptionSet> {
        let mut options: Vec<SelectOption> = match &self.options {
            Some(inline) => OptionSet::parse_inline(inline)?.iter().cloned().collect(),
            None => Vec::new(),
        };

        if let Some(file) = &self.options_file {
            let loaded = OptionSet::from_file(resolve_config_path(file))?;
            options.extend(loaded.iter().cloned());
        }

        OptionSet::new(options)
    }

    /// Resolves the theme: file first, then built-in name, then the default.
    ///
    /// Theme problems never fail initialization; they are logged and the
    /// default theme is used.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(resolve_config_path(theme_file)).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "1" | "on"
    )
}

fn parse_number(
    config: &BTreeMap<String, String>,
    key: &str,
    valid: impl Fn(f32) -> bool,
) -> Option<f32> {
    let raw = config.get(key)?;
    let parsed = raw.trim().parse::<f32>().ok().filter(|v| valid(*v));
    if parsed.is_none() {
        tracing::debug!(key, value = %raw, "invalid number in configuration, using default");
    }
    parsed
}

/// Builds a mounted selector from configuration.
///
/// # Errors
///
/// Fails only when the option set cannot be built (unreadable or malformed
/// option file, duplicate values). Theme problems fall back to the default.
pub fn initialize<H: Host>(config: &Config, host: H) -> Result<Selector<H>> {
    tracing::debug!("initializing autoselect");

    let options = config.load_options()?;
    tracing::debug!(count = options.len(), "options loaded");

    let controller = SelectionController::new(options, config.value_mode())
        .with_disabled(config.disabled)
        .with_match_mode(config.match_mode);

    let positioner = PanelPositioner::new(config.panel_offset.unwrap_or(DEFAULT_PANEL_OFFSET));

    Ok(Selector::new(controller, host)
        .with_positioner(positioner)
        .with_layout(PanelLayout {
            row_height: config.row_height,
            max_visible_rows: config.max_visible_rows,
        })
        .with_theme(config.load_theme())
        .with_placeholder(config.placeholder.clone())
        .with_invalid(config.invalid))
}
