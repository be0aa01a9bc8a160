//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the autoselect library and Zellij. Pane
//! geometry and event translation live in
//! [`autoselect::infrastructure::pane`]; this file drives the plugin
//! lifecycle.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build the `Selector`
//! 2. **Subscribe**: `Key`, `Mouse` and `Visible` for the plugin's whole life
//! 3. **Update**: map Zellij events to library events, run `handle_event`,
//!    execute the resulting actions
//! 4. **Render**: track pane width changes, then call the library renderer

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use autoselect::infrastructure::{PaneEvent, PaneHost};
use autoselect::{
    handle_event, Action, Config, Event, OptionSet, SelectionController, Selector, ValueMode,
};

register_plugin!(State);

/// Panel gap in cells when the configuration leaves it open.
const TERMINAL_PANEL_OFFSET: f32 = 0.0;

/// Plugin state wrapper.
struct State {
    selector: Selector<PaneHost>,
    pane: PaneHost,
}

impl Default for State {
    fn default() -> Self {
        let pane = PaneHost::default();
        let controller = SelectionController::new(OptionSet::default(), ValueMode::uncontrolled());
        Self {
            selector: Selector::new(controller, pane.clone()),
            pane,
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, builds the selector and subscribes to input.
    ///
    /// If the option set cannot be loaded the plugin keeps running with an
    /// empty, disabled selector whose placeholder reports the problem.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let mut config = Config::from_zellij(&configuration);
        autoselect::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        config.panel_offset = config.panel_offset.or(Some(TERMINAL_PANEL_OFFSET));
        tracing::debug!(?config, "parsed configuration");

        match autoselect::initialize(&config, self.pane.clone()) {
            Ok(selector) => self.selector = selector,
            Err(e) => {
                tracing::warn!(error = %e, "failed to initialize selector");
                let controller = SelectionController::new(OptionSet::default(), ValueMode::uncontrolled())
                    .with_disabled(true);
                self.selector = Selector::new(controller, self.pane.clone())
                    .with_theme(config.load_theme())
                    .with_placeholder(format!("options unavailable: {e}"))
                    .with_invalid(true);
            }
        }

        subscribe(&[EventType::Key, EventType::Mouse, EventType::Visible]);
        tracing::debug!("plugin load complete");
    }

    /// Maps a Zellij event, runs the handler and executes its actions.
    ///
    /// Returns `true` if the pane should re-render.
    fn update(&mut self, event: PaneEvent) -> bool {
        let span = tracing::debug_span!("plugin_update", event = ?event);
        let _guard = span.entered();

        match self.pane.map_event(&event) {
            Some(our_event) => self.dispatch(&our_event),
            None => matches!(event, PaneEvent::Visible(true)),
        }
    }

    /// Tracks the pane width, then draws the control.
    fn render(&mut self, rows: usize, cols: usize) {
        if self.pane.set_cols(cols) && self.pane.is_tracking_resize() {
            self.dispatch(&Event::Resize);
        }
        autoselect::ui::render(&self.selector, rows, cols);
    }
}

impl State {
    fn dispatch(&mut self, event: &Event) -> bool {
        let (should_render, actions) = handle_event(&mut self.selector, event);
        tracing::debug!(
            action_count = actions.len(),
            should_render = should_render,
            "event handled"
        );

        let mut render = should_render;
        for action in actions {
            render |= self.execute_action(&action);
        }
        render
    }

    /// Acts as the value owner. In controlled mode the selected value is fed
    /// straight back, so the pane behaves like an owner that accepts every
    /// selection.
    fn execute_action(&mut self, action: &Action) -> bool {
        match action {
            Action::ValueChanged { value } => {
                tracing::info!(value = %value, "value changed");
                if self.selector.controller().is_controlled() {
                    let (render, _) =
                        handle_event(&mut self.selector, &Event::ValueFed(Some(value.clone())));
                    return render;
                }
                false
            }
            Action::QueryChanged { query } => {
                tracing::trace!(query = %query, "query changed");
                false
            }
        }
    }
}
