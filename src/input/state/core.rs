//! Drawing state machine and input state management.

use crate::config::{Action, Config, DrawModeKey, KeyBinding};
use crate::draw::{
    Point, Polygon, PolygonOrientation, Shape, ShapeKind, ShapeStore, clamp_sides,
    regular_polygon,
};
use crate::input::{modifiers::Modifiers, tool::Tool};
use crate::view::{ScreenPoint, ViewState};
use std::collections::HashMap;

/// Points gathered while draw mode is held.
///
/// The variant is fixed when draw mode is entered, from the tool selected at
/// that moment, and decides both how clicks accumulate and what is committed.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    /// Line, rectangle or ellipse: keeps the two most recent clicks
    TwoPoint { kind: ShapeKind, points: Vec<Point> },
    /// Open polyline: keeps every click until it closes on itself
    Polyline { points: Vec<Point> },
    /// Regular polygon builder: center then rim, keeps the two most recent clicks
    RegularPolygon { points: Vec<Point> },
}

/// What happened to a point offered to a [`Session`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Placement {
    /// The point was added to the pending buffer
    Pending,
    /// The point closed the polyline; the ring is ready to commit
    Closed(Option<Polygon>),
}

impl Session {
    /// Starts an empty session for `tool`.
    pub fn new(tool: Tool) -> Self {
        match tool.shape_kind() {
            Some(kind) => Session::TwoPoint {
                kind,
                points: Vec::new(),
            },
            None if tool == Tool::Polyline => Session::Polyline { points: Vec::new() },
            None => Session::RegularPolygon { points: Vec::new() },
        }
    }

    /// Pending points in click order.
    pub fn points(&self) -> &[Point] {
        match self {
            Session::TwoPoint { points, .. }
            | Session::Polyline { points }
            | Session::RegularPolygon { points } => points,
        }
    }

    /// Adds a resolved world point.
    pub(crate) fn place(&mut self, point: Point) -> Placement {
        match self {
            Session::TwoPoint { points, .. } | Session::RegularPolygon { points } => {
                if points.len() == 2 {
                    points.remove(0);
                }
                points.push(point);
                Placement::Pending
            }
            Session::Polyline { points } => {
                if let Some(start) = points.iter().position(|p| *p == point) {
                    let ring = points.split_off(start);
                    points.clear();
                    Placement::Closed(Polygon::closed(ring))
                } else {
                    points.push(point);
                    Placement::Pending
                }
            }
        }
    }
}

/// Current drawing mode state machine.
///
/// `Idle` until the draw-mode key goes down; `Drawing` until it is released
/// (commit), Escape is pressed (cancel) or a polyline closes on itself.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not drawing - clicks only hit the toolbar
    Idle,
    /// Draw-mode key held; clicks place points into the session
    Drawing(Session),
}

/// Settings the input state reads on every event, resolved from [`Config`].
#[derive(Debug, Clone)]
pub struct InputSettings {
    /// Height of the toolbar band in pixels
    pub top_margin: i32,
    /// Key held to stay in draw mode
    pub draw_mode_key: DrawModeKey,
    /// Whether clicks snap onto existing vertices
    pub snap_enabled: bool,
    /// Snap radius in screen pixels
    pub snap_radius_px: f64,
    /// Radius of the snap marker in pixels
    pub indicator_radius_px: f64,
    /// Initial regular polygon side count (clamped on use)
    pub polygon_sides: i64,
    /// How the first polygon vertex is oriented
    pub orientation: PolygonOrientation,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl InputSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            top_margin: config.canvas.top_margin,
            draw_mode_key: config.drawing.draw_mode_key,
            snap_enabled: config.snap.enabled,
            snap_radius_px: config.snap.radius_px,
            indicator_radius_px: config.snap.indicator_radius_px,
            polygon_sides: config.polygon.sides,
            orientation: config.polygon.orientation,
        }
    }
}

/// Drag in progress with the right button held.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanDrag {
    pub(crate) start_mouse: ScreenPoint,
    pub(crate) start_pan: (f64, f64),
}

/// Main input state containing all drawing session state.
///
/// Owns the committed geometry, the view transform and the active session.
/// Every handler that changes something visible sets `needs_redraw`; the
/// driver consumes the flag once per paint.
pub struct InputState {
    /// Committed shapes and polygons, in world coordinates
    pub store: ShapeStore,
    /// Current pan and zoom
    pub view: ViewState,
    /// Current drawing mode state machine
    pub state: DrawingState,
    /// Tool captured by the next session
    pub current_tool: Tool,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Vertex the next click would snap to, if any
    pub snap_indicator: Option<Point>,
    /// Whether user requested to exit
    pub should_exit: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    pub(crate) settings: InputSettings,
    /// Clamped regular polygon side count
    polygon_sides: u32,
    pub(crate) pan_drag: Option<PanDrag>,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl InputState {
    /// Creates a new InputState with an empty store and the default view.
    pub fn new(settings: InputSettings, action_map: HashMap<KeyBinding, Action>) -> Self {
        let polygon_sides = clamp_sides(settings.polygon_sides);
        Self {
            store: ShapeStore::new(),
            view: ViewState::default(),
            state: DrawingState::Idle,
            current_tool: Tool::default(),
            modifiers: Modifiers::new(),
            snap_indicator: None,
            should_exit: false,
            needs_redraw: true,
            settings,
            polygon_sides,
            pan_drag: None,
            action_map,
        }
    }

    /// Builds the input state from a loaded configuration.
    ///
    /// # Errors
    /// Returns an error if a keybinding string is invalid or bound twice.
    pub fn from_config(config: &Config) -> Result<Self, String> {
        let action_map = config.keybindings.build_action_map()?;
        Ok(Self::new(InputSettings::from_config(config), action_map))
    }

    /// Height of the toolbar band in pixels.
    pub fn top_margin(&self) -> i32 {
        self.settings.top_margin
    }

    /// Current regular polygon side count.
    pub fn polygon_sides(&self) -> u32 {
        self.polygon_sides
    }

    /// Sets the regular polygon side count, clamped to 3 - 64.
    pub fn set_polygon_sides(&mut self, sides: i64) {
        let sides = clamp_sides(sides);
        if sides != self.polygon_sides {
            self.polygon_sides = sides;
            self.needs_redraw = true;
            log::debug!("Polygon sides set to {}", sides);
        }
    }

    /// Selects the tool used by the next draw session.
    ///
    /// A session already in progress keeps the tool it was started with.
    pub fn select_tool(&mut self, tool: Tool) {
        if tool != self.current_tool {
            self.current_tool = tool;
            self.needs_redraw = true;
            log::info!("Tool selected: {}", tool.name());
        }
    }

    /// Whether a draw session is active.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing(_))
    }

    /// Title shown for the drawing surface.
    pub fn window_title(&self) -> String {
        format!(
            "vectorpad [Tool: {}] [Zoom: {:.0}%]",
            self.current_tool.name(),
            self.view.zoom() * 100.0
        )
    }

    /// Consumes the redraw flag, returning whether a paint is due.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Look up an action for the given key and modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map.iter().find_map(|(binding, action)| {
            binding
                .matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
                .then_some(*action)
        })
    }

    /// Starts a session for the current tool unless one is already running.
    pub(crate) fn begin_session(&mut self) {
        if self.is_drawing() {
            return;
        }
        self.state = DrawingState::Drawing(Session::new(self.current_tool));
        self.snap_indicator = None;
        self.needs_redraw = true;
        log::debug!("Draw mode entered with {} tool", self.current_tool.name());
    }

    /// Drops the active session without committing anything.
    pub(crate) fn cancel_session(&mut self) {
        let previous = std::mem::replace(&mut self.state, DrawingState::Idle);
        if let DrawingState::Drawing(session) = previous {
            log::debug!(
                "Draw session cancelled with {} pending point(s)",
                session.points().len()
            );
            self.snap_indicator = None;
            self.needs_redraw = true;
        }
    }

    /// Ends the active session, committing whatever it holds.
    pub(crate) fn finish_session(&mut self) {
        let previous = std::mem::replace(&mut self.state, DrawingState::Idle);
        if let DrawingState::Drawing(session) = previous {
            self.commit(session);
            self.snap_indicator = None;
            self.needs_redraw = true;
        }
    }

    /// Turns a finished session into stored geometry.
    fn commit(&mut self, session: Session) {
        let (first, second) = match session.points() {
            [] => {
                log::debug!("Draw session ended with no points; nothing committed");
                return;
            }
            [only] => (*only, *only),
            [first, second, ..] => (*first, *second),
        };

        match session {
            Session::TwoPoint { kind, .. } => {
                let shape = Shape::from_points(kind, first, second);
                log::info!("Committed {} {:?} -> {:?}", kind.name(), first, second);
                self.store.add_shape(shape);
            }
            Session::Polyline { points } => self.commit_polygon(Polygon::from_points(points)),
            Session::RegularPolygon { .. } => {
                let polygon =
                    regular_polygon(first, second, self.polygon_sides, self.settings.orientation);
                self.commit_polygon(Some(polygon));
            }
        }
    }

    pub(crate) fn commit_polygon(&mut self, polygon: Option<Polygon>) {
        if let Some(polygon) = polygon {
            log::info!("Committed polygon with {} point(s)", polygon.len());
            self.store.add_polygon(polygon);
        }
    }
}
