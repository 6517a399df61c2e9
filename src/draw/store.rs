//! Append-only storage for finalized shapes and point rings.

use super::shape::{Point, Polygon, Shape};

/// Container for everything committed during the session.
///
/// Shapes and polygons live in separate lists, each in commit order
/// (first = bottom layer). Nothing is ever removed or edited.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: Vec<Shape>,
    polygons: Vec<Polygon>,
}

impl ShapeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a two-point shape.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Appends a polyline or closed ring.
    pub fn add_polygon(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Iterates every stored vertex: shape endpoints first, then polygon
    /// vertices, each in commit order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.shapes
            .iter()
            .flat_map(|shape| shape.endpoints())
            .chain(
                self.polygons
                    .iter()
                    .flat_map(|polygon| polygon.points().iter().copied()),
            )
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty() && self.polygons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::ShapeKind;

    #[test]
    fn vertices_follow_shapes_then_polygons() {
        let mut store = ShapeStore::new();
        let ring = vec![Point::new(7.0, 7.0), Point::new(8.0, 8.0)];
        store.add_polygon(Polygon::from_points(ring).unwrap());
        store.add_shape(Shape::from_points(
            ShapeKind::Line,
            Point::new(1.0, 1.0),
            Point::new(2.0, 2.0),
        ));

        let vertices: Vec<Point> = store.vertices().collect();
        assert_eq!(
            vertices,
            vec![
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0),
                Point::new(7.0, 7.0),
                Point::new(8.0, 8.0),
            ]
        );
    }

    #[test]
    fn new_store_is_empty() {
        let store = ShapeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.vertices().count(), 0);
    }
}
