//! Pan/zoom view state and screen <-> world coordinate conversion.
//!
//! Screen coordinates are surface pixels: the toolbar band occupies the first
//! `top_margin` rows, so world y = 0 sits just below it when the view is not
//! panned. World coordinates are real-valued and only truncated to integers
//! when projected back onto the screen.

use crate::draw::Point;

/// Smallest allowed zoom factor.
pub const MIN_ZOOM: f64 = 0.1;
/// Largest allowed zoom factor.
pub const MAX_ZOOM: f64 = 10.0;
/// Zoom multiplier applied per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Integer pixel position on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another screen point.
    pub fn distance_squared(self, other: ScreenPoint) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }
}

/// Current pan offset and zoom factor.
///
/// The zoom factor always lies within [`MIN_ZOOM`, `MAX_ZOOM`]. Pan is expressed
/// in screen pixels and is recomputed (never rescaled) when the zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub pan_x: f64,
    pub pan_y: f64,
    zoom: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
        }
    }
}

impl ViewState {
    /// Builds a view, clamping `zoom` into the allowed range.
    pub fn new(pan_x: f64, pan_y: f64, zoom: f64) -> Self {
        Self {
            pan_x,
            pan_y,
            zoom: clamp_zoom(zoom),
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the identity view (no pan, zoom 1.0).
    pub fn reset() -> Self {
        Self::default()
    }

    /// Computes the view during a right-button drag.
    ///
    /// `start_pan` is the pan offset captured when the drag began and
    /// `start_mouse` the pointer position at that moment.
    pub fn panned_from(
        &self,
        start_pan: (f64, f64),
        start_mouse: ScreenPoint,
        mouse: ScreenPoint,
    ) -> Self {
        let dx = mouse.x as f64 - start_mouse.x as f64;
        let dy = mouse.y as f64 - start_mouse.y as f64;
        Self {
            pan_x: start_pan.0 + dx,
            pan_y: start_pan.1 + dy,
            zoom: self.zoom,
        }
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return 1.0;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Converts a screen position into world coordinates.
pub fn screen_to_world(screen: ScreenPoint, view: &ViewState, top_margin: i32) -> Point {
    Point {
        x: (screen.x as f64 - view.pan_x) / view.zoom,
        y: (screen.y as f64 - top_margin as f64 - view.pan_y) / view.zoom,
    }
}

/// Projects a world point onto the screen, truncating to whole pixels.
pub fn world_to_screen(world: Point, view: &ViewState, top_margin: i32) -> ScreenPoint {
    let (x, y) = world_to_screen_f64(world, view, top_margin);
    ScreenPoint {
        x: x as i32,
        y: y as i32,
    }
}

/// Sub-pixel projection used where rounding would distort geometry (radii).
fn world_to_screen_f64(world: Point, view: &ViewState, top_margin: i32) -> (f64, f64) {
    (
        world.x * view.zoom + view.pan_x,
        world.y * view.zoom + view.pan_y + top_margin as f64,
    )
}

/// Applies one wheel step centered on `screen`.
///
/// The world point under the cursor before the zoom maps back to the same
/// screen position afterwards. A zero delta leaves the view untouched.
pub fn zoom_at(
    screen: ScreenPoint,
    view: &ViewState,
    top_margin: i32,
    wheel_delta: i32,
) -> ViewState {
    if wheel_delta == 0 {
        return *view;
    }

    let anchor = screen_to_world(screen, view, top_margin);
    let factor = if wheel_delta > 0 {
        ZOOM_STEP
    } else {
        1.0 / ZOOM_STEP
    };
    let zoom = clamp_zoom(view.zoom * factor);

    ViewState {
        pan_x: screen.x as f64 - anchor.x * zoom,
        pan_y: screen.y as f64 - top_margin as f64 - anchor.y * zoom,
        zoom,
    }
}
