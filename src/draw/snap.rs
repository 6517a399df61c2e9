//! Nearest-vertex snapping measured in screen pixels.
//!
//! Distances are compared after projecting candidates onto the screen, so the
//! snap radius stays the same number of pixels at every zoom level.

use super::shape::Point;
use super::store::ShapeStore;
use crate::view::{ScreenPoint, ViewState, world_to_screen};

/// Finds the stored or pending vertex closest to `screen`.
///
/// Candidates are visited in a fixed order: shape endpoints, polygon vertices,
/// then the pending points of the active session. The nearest candidate whose
/// squared screen distance is within `radius_px²` wins; on ties the first one
/// visited is kept.
pub fn find_snap(
    screen: ScreenPoint,
    radius_px: f64,
    view: &ViewState,
    top_margin: i32,
    store: &ShapeStore,
    pending: &[Point],
) -> Option<Point> {
    let limit = radius_px * radius_px;
    let mut best: Option<(Point, f64)> = None;

    for candidate in store.vertices().chain(pending.iter().copied()) {
        let projected = world_to_screen(candidate, view, top_margin);
        let distance = projected.distance_squared(screen) as f64;
        if distance > limit {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(point, _)| point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Polygon, Shape, ShapeKind};

    const MARGIN: i32 = 40;

    fn store_with_line(p1: Point, p2: Point) -> ShapeStore {
        let mut store = ShapeStore::new();
        store.add_shape(Shape::from_points(ShapeKind::Line, p1, p2));
        store
    }

    #[test]
    fn snaps_to_vertex_inside_radius() {
        let store = store_with_line(Point::new(100.0, 100.0), Point::new(300.0, 100.0));
        let view = ViewState::default();

        // (100, 100) in world sits at (100, 140) on screen.
        let hit = find_snap(ScreenPoint::new(106, 148), 10.0, &view, MARGIN, &store, &[]);
        assert_eq!(hit, Some(Point::new(100.0, 100.0)));
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let store = store_with_line(Point::new(0.0, 0.0), Point::new(500.0, 500.0));
        let view = ViewState::default();

        // Exactly 10px away (6-8-10 triangle).
        let on_edge = find_snap(ScreenPoint::new(6, 48), 10.0, &view, MARGIN, &store, &[]);
        assert_eq!(on_edge, Some(Point::new(0.0, 0.0)));

        let outside = find_snap(ScreenPoint::new(7, 48), 10.0, &view, MARGIN, &store, &[]);
        assert_eq!(outside, None);
    }

    #[test]
    fn picks_nearest_candidate() {
        let mut store = store_with_line(Point::new(0.0, 0.0), Point::new(20.0, 0.0));
        store.add_polygon(
            Polygon::from_points(vec![Point::new(12.0, 0.0), Point::new(90.0, 90.0)]).unwrap(),
        );
        let view = ViewState::default();

        let hit = find_snap(ScreenPoint::new(13, 40), 15.0, &view, MARGIN, &store, &[]);
        assert_eq!(hit, Some(Point::new(12.0, 0.0)));
    }

    #[test]
    fn ties_keep_first_in_visit_order() {
        let store = store_with_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let pending = [Point::new(5.0, 5.0)];
        let view = ViewState::default();

        // Screen (5, 40) is 5px from both line endpoints and from the pending point.
        let hit = find_snap(ScreenPoint::new(5, 40), 10.0, &view, MARGIN, &store, &pending);
        assert_eq!(hit, Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn pending_points_are_candidates() {
        let store = ShapeStore::new();
        let pending = [Point::new(50.0, 50.0)];
        let view = ViewState::default();

        let hit = find_snap(ScreenPoint::new(52, 91), 5.0, &view, MARGIN, &store, &pending);
        assert_eq!(hit, Some(Point::new(50.0, 50.0)));
    }

    #[test]
    fn radius_is_measured_in_screen_pixels() {
        let store = store_with_line(Point::new(10.0, 10.0), Point::new(1000.0, 1000.0));
        let cursor = ScreenPoint::new(14, 54);

        // At zoom 1 the vertex projects to (10, 50): about 5.7px away.
        let near = ViewState::default();
        assert!(find_snap(cursor, 8.0, &near, MARGIN, &store, &[]).is_some());

        // At zoom 4 it projects to (40, 80): far outside the same radius.
        let zoomed = ViewState::new(0.0, 0.0, 4.0);
        assert!(find_snap(cursor, 8.0, &zoomed, MARGIN, &store, &[]).is_none());
    }

    #[test]
    fn empty_scene_never_snaps() {
        let hit = find_snap(
            ScreenPoint::new(0, 0),
            100.0,
            &ViewState::default(),
            MARGIN,
            &ShapeStore::new(),
            &[],
        );
        assert!(hit.is_none());
    }
}
