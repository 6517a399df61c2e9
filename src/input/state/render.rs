use crate::draw::polygon::regular_polygon_points;
use crate::draw::{Point, Preview, Scene, ScreenShape, SnapMarker};
use crate::view::{ScreenPoint, world_to_screen};

use super::{DrawingState, InputState, Session};

impl InputState {
    /// Projects the committed geometry, the live preview and the snap
    /// indicator into screen space for one paint.
    pub fn scene(&self) -> Scene {
        let shapes = self
            .store
            .shapes()
            .iter()
            .map(|shape| {
                let [p1, p2] = shape.endpoints();
                ScreenShape {
                    kind: shape.kind(),
                    p1: self.project(p1),
                    p2: self.project(p2),
                }
            })
            .collect();

        let rings = self
            .store
            .polygons()
            .iter()
            .map(|polygon| self.project_all(polygon.points()))
            .collect();

        let preview = match &self.state {
            DrawingState::Idle => None,
            DrawingState::Drawing(session) => Some(self.preview(session)),
        };

        let snap = self.snap_indicator.map(|point| SnapMarker {
            center: self.project(point),
            radius: self.settings.indicator_radius_px,
        });

        Scene {
            shapes,
            rings,
            preview,
            snap,
        }
    }

    fn preview(&self, session: &Session) -> Preview {
        match session {
            Session::TwoPoint { kind, points } => Preview::TwoPoint {
                kind: *kind,
                points: self.project_all(points),
            },
            Session::Polyline { points } => Preview::Polyline {
                points: self.project_all(points),
            },
            Session::RegularPolygon { points } => {
                let (ring, circle) = match points.as_slice() {
                    [center, rim] => {
                        let ring = regular_polygon_points(
                            *center,
                            *rim,
                            self.polygon_sides(),
                            self.settings.orientation,
                        );
                        let radius = center.distance(*rim) * self.view.zoom();
                        (self.project_all(&ring), Some((self.project(*center), radius)))
                    }
                    _ => (Vec::new(), None),
                };
                Preview::RegularPolygon {
                    points: self.project_all(points),
                    ring,
                    circle,
                }
            }
        }
    }

    fn project(&self, point: Point) -> ScreenPoint {
        world_to_screen(point, &self.view, self.top_margin())
    }

    fn project_all(&self, points: &[Point]) -> Vec<ScreenPoint> {
        points.iter().map(|p| self.project(*p)).collect()
    }
}
