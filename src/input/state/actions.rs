use crate::config::Action;
use crate::input::{events::Key, tool::Tool};
use crate::view::ViewState;

use super::InputState;

impl InputState {
    /// Processes a key press event.
    ///
    /// Handles, in order:
    /// - Modifier key tracking
    /// - Entering draw mode when the configured draw-mode key goes down
    ///   (repeats while already drawing are ignored)
    /// - Escape while drawing, which cancels the session
    /// - Configurable keybinding actions
    pub fn on_key_press(&mut self, key: Key) {
        let is_modifier = self.modifiers.update(key, true);

        if self.settings.draw_mode_key.matches(key) {
            self.begin_session();
            return;
        }

        if is_modifier {
            return;
        }

        if key == Key::Escape && self.is_drawing() {
            self.cancel_session();
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Processes a key release event.
    ///
    /// Releasing the draw-mode key commits the active session.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.update(key, false);

        if self.settings.draw_mode_key.matches(key) {
            self.finish_session();
        }
    }

    /// Runs a keybinding action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Exit => {
                log::info!("Exit requested");
                self.should_exit = true;
            }
            Action::SelectLine => self.select_tool(Tool::Line),
            Action::SelectRect => self.select_tool(Tool::Rect),
            Action::SelectEllipse => self.select_tool(Tool::Ellipse),
            Action::SelectPolyline => self.select_tool(Tool::Polyline),
            Action::SelectPolygon => self.select_tool(Tool::Polygon),
            Action::IncreaseSides => self.set_polygon_sides(self.polygon_sides() as i64 + 1),
            Action::DecreaseSides => self.set_polygon_sides(self.polygon_sides() as i64 - 1),
            Action::ResetView => {
                if self.view != ViewState::reset() {
                    self.view = ViewState::reset();
                    self.needs_redraw = true;
                    log::debug!("View reset");
                }
            }
        }
    }
}
