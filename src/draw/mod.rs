//! World-space drawing model and Cairo rendering.
//!
//! This module defines the core drawing types:
//! - [`Point`], [`Shape`], [`Polygon`]: geometry stored in world coordinates
//! - [`ShapeStore`]: append-only container for committed geometry
//! - [`find_snap`]: nearest-vertex snapping in screen space
//! - [`Scene`]: the projected, screen-space view handed to the renderer
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod polygon;
pub mod render;
pub mod scene;
pub mod shape;
pub mod snap;
pub mod store;

// Re-export commonly used types at module level
pub use color::Color;
pub use polygon::{MAX_SIDES, MIN_SIDES, PolygonOrientation, clamp_sides, regular_polygon};
pub use render::{RenderStyle, render_background, render_scene};
pub use scene::{Preview, Scene, ScreenShape, SnapMarker};
pub use shape::{Point, Polygon, Shape, ShapeKind};
pub use snap::find_snap;
pub use store::ShapeStore;
