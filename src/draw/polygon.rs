//! Regular polygon generation from a center and a point on the circumcircle.

use super::shape::{Point, Polygon};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Fewest sides a regular polygon may have.
pub const MIN_SIDES: u32 = 3;
/// Most sides a regular polygon may have.
pub const MAX_SIDES: u32 = 64;

/// How the first vertex of a regular polygon is oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PolygonOrientation {
    /// First vertex lies on the dragged circle point (full-quadrant `atan2`)
    #[default]
    Drag,
    /// Single-argument `atan(dy / dx)`: directions left of the center are
    /// mirrored through it, so the first vertex may sit opposite the drag
    Legacy,
}

impl PolygonOrientation {
    /// Base angle in radians for a drag from `center` to `rim`.
    pub fn base_angle(self, center: Point, rim: Point) -> f64 {
        let dx = rim.x - center.x;
        let dy = rim.y - center.y;
        let angle = match self {
            PolygonOrientation::Drag => dy.atan2(dx),
            PolygonOrientation::Legacy => (dy / dx).atan(),
        };
        if angle.is_nan() { 0.0 } else { angle }
    }
}

/// Clamps a requested side count into [`MIN_SIDES`, `MAX_SIDES`].
pub fn clamp_sides(sides: i64) -> u32 {
    sides.clamp(MIN_SIDES as i64, MAX_SIDES as i64) as u32
}

/// Generates the vertices of a regular polygon, closed by repeating the first.
///
/// The radius is the distance from `center` to `rim`; `sides` is clamped.
/// The result always has `sides + 1` points.
pub fn regular_polygon_points(
    center: Point,
    rim: Point,
    sides: u32,
    orientation: PolygonOrientation,
) -> Vec<Point> {
    let sides = clamp_sides(sides as i64);
    let radius = center.distance(rim);
    let step = 2.0 * PI / sides as f64;
    let base = orientation.base_angle(center, rim);

    let mut points: Vec<Point> = (0..sides)
        .map(|i| {
            let theta = base + i as f64 * step;
            Point::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
            )
        })
        .collect();
    points.push(points[0]);
    points
}

/// Builds the committed ring for a center/rim pair.
pub fn regular_polygon(
    center: Point,
    rim: Point,
    sides: u32,
    orientation: PolygonOrientation,
) -> Polygon {
    Polygon::from_ring(regular_polygon_points(center, rim, sides, orientation))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn ring_has_sides_plus_one_points_on_circle() {
        let center = Point::new(12.5, -4.0);
        let rim = Point::new(40.0, 17.0);
        let radius = center.distance(rim);

        for sides in [3, 4, 5, 6, 7, 12, 33, 64] {
            for orientation in [PolygonOrientation::Drag, PolygonOrientation::Legacy] {
                let ring = regular_polygon(center, rim, sides, orientation);
                assert_eq!(ring.len(), sides as usize + 1);
                assert!(ring.is_closed());
                for p in ring.points() {
                    assert!((p.distance(center) - radius).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn side_count_is_clamped() {
        assert_eq!(clamp_sides(0), MIN_SIDES);
        assert_eq!(clamp_sides(-7), MIN_SIDES);
        assert_eq!(clamp_sides(65), MAX_SIDES);
        assert_eq!(clamp_sides(8), 8);

        let ring = regular_polygon(
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            1000,
            PolygonOrientation::Drag,
        );
        assert_eq!(ring.len(), MAX_SIDES as usize + 1);
    }

    #[test]
    fn drag_orientation_starts_at_rim_point() {
        let center = Point::new(0.0, 0.0);
        let rim = Point::new(-10.0, -10.0);
        let ring = regular_polygon(center, rim, 5, PolygonOrientation::Drag);
        let first = ring.points()[0];
        assert!((first.x - rim.x).abs() < EPS);
        assert!((first.y - rim.y).abs() < EPS);
    }

    #[test]
    fn legacy_orientation_mirrors_left_half_plane() {
        let center = Point::new(0.0, 0.0);
        let rim = Point::new(-10.0, 0.0);
        let ring = regular_polygon(center, rim, 4, PolygonOrientation::Legacy);
        let first = ring.points()[0];
        assert!((first.x - 10.0).abs() < EPS);
        assert!(first.y.abs() < EPS);
    }

    #[test]
    fn degenerate_radius_collapses_onto_center() {
        let center = Point::new(5.0, 5.0);
        for orientation in [PolygonOrientation::Drag, PolygonOrientation::Legacy] {
            let ring = regular_polygon(center, center, 6, orientation);
            assert_eq!(ring.len(), 7);
            assert!(ring.points().iter().all(|p| *p == center));
        }
    }
}
