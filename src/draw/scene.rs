//! Screen-space scene handed to the renderer.
//!
//! Everything here is already projected through the current view, so the
//! renderer never sees world coordinates.

use super::shape::ShapeKind;
use crate::view::ScreenPoint;

/// A finalized two-point shape projected onto the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenShape {
    pub kind: ShapeKind,
    pub p1: ScreenPoint,
    pub p2: ScreenPoint,
}

/// Live preview of the session being drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Line/rectangle/ellipse with one or two points so far
    TwoPoint {
        kind: ShapeKind,
        points: Vec<ScreenPoint>,
    },
    /// Open polyline through every pending point
    Polyline { points: Vec<ScreenPoint> },
    /// Regular polygon builder
    RegularPolygon {
        /// Pending center/rim points
        points: Vec<ScreenPoint>,
        /// Generated closed ring, present once a rim point exists
        ring: Vec<ScreenPoint>,
        /// Circumscribed circle as screen center and pixel radius
        circle: Option<(ScreenPoint, f64)>,
    },
}

/// Marker drawn where the next click would snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMarker {
    pub center: ScreenPoint,
    pub radius: f64,
}

/// Everything a paint pass needs, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub shapes: Vec<ScreenShape>,
    pub rings: Vec<Vec<ScreenPoint>>,
    pub preview: Option<Preview>,
    pub snap: Option<SnapMarker>,
}
