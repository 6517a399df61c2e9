//! World-space geometry: points, two-point shapes and point rings.

/// A point in the infinite drawing plane (world coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another world point.
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Discriminant of the two-point shape variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rect,
    Ellipse,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Rect => "Rect",
            ShapeKind::Ellipse => "Ellipse",
        }
    }
}

/// A finalized two-point shape.
///
/// Both points are kept exactly as clicked; rectangles and ellipses use them as
/// opposite corners of their bounding box, so no normalization happens here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Straight segment from `p1` to `p2`
    Line { p1: Point, p2: Point },
    /// Axis-aligned rectangle outline spanned by `p1` and `p2`
    Rect { p1: Point, p2: Point },
    /// Ellipse inscribed in the box spanned by `p1` and `p2`
    Ellipse { p1: Point, p2: Point },
}

impl Shape {
    /// Builds the shape of `kind` from its two defining points.
    pub fn from_points(kind: ShapeKind, p1: Point, p2: Point) -> Self {
        match kind {
            ShapeKind::Line => Shape::Line { p1, p2 },
            ShapeKind::Rect => Shape::Rect { p1, p2 },
            ShapeKind::Ellipse => Shape::Ellipse { p1, p2 },
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line { .. } => ShapeKind::Line,
            Shape::Rect { .. } => ShapeKind::Rect,
            Shape::Ellipse { .. } => ShapeKind::Ellipse,
        }
    }

    /// Returns the two defining points in creation order.
    pub fn endpoints(&self) -> [Point; 2] {
        match *self {
            Shape::Line { p1, p2 } | Shape::Rect { p1, p2 } | Shape::Ellipse { p1, p2 } => {
                [p1, p2]
            }
        }
    }
}

/// Ordered sequence of world points: an open polyline or a closed ring.
///
/// Always holds at least two points. A closed ring repeats its first point as
/// its last.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Wraps a point sequence, padding a lone point into a degenerate pair.
    ///
    /// Returns `None` for an empty sequence.
    pub fn from_points(mut points: Vec<Point>) -> Option<Self> {
        match points.len() {
            0 => None,
            1 => {
                points.push(points[0]);
                Some(Self { points })
            }
            _ => Some(Self { points }),
        }
    }

    /// Builds a closed ring, appending the first point when the sequence does
    /// not already end on it.
    pub fn closed(mut points: Vec<Point>) -> Option<Self> {
        let first = *points.first()?;
        if points.last() != Some(&first) || points.len() == 1 {
            points.push(first);
        }
        Some(Self { points })
    }

    /// Wraps a ring produced internally that already repeats its first point.
    pub(crate) fn from_ring(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 2 && points.first() == points.last());
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the last point repeats the first.
    pub fn is_closed(&self) -> bool {
        self.points.first() == self.points.last()
    }
}
