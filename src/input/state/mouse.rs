use crate::draw::{Point, find_snap};
use crate::input::events::MouseButton;
use crate::ui;
use crate::view::{ScreenPoint, screen_to_world, zoom_at};

use super::core::{PanDrag, Placement};
use super::{DrawingState, InputState};

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate
    /// * `y` - Mouse Y coordinate
    ///
    /// # Behavior
    /// - Left click in the toolbar band: selects the tool under the cursor, never draws
    /// - Left click below the band while drawing: places a (possibly snapped) point
    /// - Right press: starts panning the view
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Left => {
                if y < self.top_margin() {
                    if let Some(tool) = ui::toolbar_hit(x, y) {
                        self.select_tool(tool);
                    }
                    return;
                }
                self.place_point(ScreenPoint::new(x, y));
            }
            MouseButton::Right => {
                self.pan_drag = Some(PanDrag {
                    start_mouse: ScreenPoint::new(x, y),
                    start_pan: (self.view.pan_x, self.view.pan_y),
                });
            }
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion events.
    ///
    /// # Behavior
    /// - While the right button is held: pans the view by the drag delta
    /// - While drawing: recomputes the snap indicator
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        let mouse = ScreenPoint::new(x, y);

        if let Some(drag) = self.pan_drag {
            let view = self
                .view
                .panned_from(drag.start_pan, drag.start_mouse, mouse);
            if view != self.view {
                self.view = view;
                self.needs_redraw = true;
            }
        }

        if self.is_drawing() {
            let indicator = self.snap_target(mouse);
            if indicator != self.snap_indicator {
                self.snap_indicator = indicator;
                self.needs_redraw = true;
            }
        }
    }

    /// Processes mouse button release events.
    ///
    /// Only the right button has release behavior: it ends a pan drag.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: i32, y: i32) {
        if button == MouseButton::Right && self.pan_drag.is_some() {
            self.on_mouse_motion(x, y);
            self.pan_drag = None;
            log::debug!(
                "Pan finished at ({:.1}, {:.1})",
                self.view.pan_x,
                self.view.pan_y
            );
        }
    }

    /// Processes a scroll wheel step at the given position.
    ///
    /// Positive deltas zoom in and negative deltas zoom out, keeping the world
    /// point under the cursor fixed. Scrolling over the toolbar band is ignored.
    pub fn on_scroll(&mut self, delta: i32, x: i32, y: i32) {
        if y < self.top_margin() || delta == 0 {
            return;
        }

        let view = zoom_at(ScreenPoint::new(x, y), &self.view, self.top_margin(), delta);
        if view != self.view {
            self.view = view;
            self.needs_redraw = true;
            log::debug!("Zoom {:.3} at ({}, {})", self.view.zoom(), x, y);
        }
    }

    /// Nearest vertex within the snap radius of `screen`, if snapping is on.
    pub(crate) fn snap_target(&self, screen: ScreenPoint) -> Option<Point> {
        if !self.settings.snap_enabled {
            return None;
        }
        let pending: &[Point] = match &self.state {
            DrawingState::Drawing(session) => session.points(),
            DrawingState::Idle => &[],
        };
        find_snap(
            screen,
            self.settings.snap_radius_px,
            &self.view,
            self.top_margin(),
            &self.store,
            pending,
        )
    }

    fn place_point(&mut self, screen: ScreenPoint) {
        if !self.is_drawing() {
            return;
        }

        let point = self
            .snap_target(screen)
            .unwrap_or_else(|| screen_to_world(screen, &self.view, self.top_margin()));

        let DrawingState::Drawing(session) = &mut self.state else {
            return;
        };

        match session.place(point) {
            Placement::Pending => {
                log::debug!("Point placed at ({:.2}, {:.2})", point.x, point.y);
            }
            Placement::Closed(polygon) => {
                self.state = DrawingState::Idle;
                self.snap_indicator = None;
                self.commit_polygon(polygon);
                log::debug!("Polyline closed on an existing vertex");
            }
        }
        self.needs_redraw = true;
    }
}
