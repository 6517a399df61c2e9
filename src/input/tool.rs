//! Drawing tool selection.

use crate::draw::ShapeKind;

/// Drawing tool selection.
///
/// The selected tool is captured when draw mode is entered and decides how
/// clicks accumulate and what gets committed when draw mode ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Straight line between two clicked points
    #[default]
    Line,
    /// Rectangle spanned by two clicked corners
    Rect,
    /// Ellipse inscribed in the box of two clicked corners
    Ellipse,
    /// Open polyline through every click; closes itself when a click lands on
    /// one of its own vertices
    Polyline,
    /// Regular polygon from a center click and a rim click
    Polygon,
}

impl Tool {
    /// Every tool, in toolbar order.
    pub const ALL: [Tool; 5] = [
        Tool::Line,
        Tool::Rect,
        Tool::Ellipse,
        Tool::Polyline,
        Tool::Polygon,
    ];

    /// Human-readable name used in the toolbar and window title.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Line => "Line",
            Tool::Rect => "Rect",
            Tool::Ellipse => "Ellipse",
            Tool::Polyline => "Polyline",
            Tool::Polygon => "Polygon",
        }
    }

    /// Parses a tool name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Tool> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(name))
    }

    /// The shape kind committed by two-point tools.
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rect => Some(ShapeKind::Rect),
            Tool::Ellipse => Some(ShapeKind::Ellipse),
            Tool::Polyline | Tool::Polygon => None,
        }
    }
}
