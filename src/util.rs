//! Utility functions for color names and box geometry.

use crate::draw::{Color, color::*};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "orange", "white", "black", "grey"/"gray"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "grey" | "gray" => Some(LIGHT_GREY),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Normalizes two opposite corners into `(x, y, width, height)` with
/// non-negative extent, whichever direction the corners were given in.
pub fn normalized_rect(x1: i32, y1: i32, x2: i32, y2: i32) -> (f64, f64, f64, f64) {
    (
        x1.min(x2) as f64,
        y1.min(y2) as f64,
        (x2 as f64 - x1 as f64).abs(),
        (y2 as f64 - y1 as f64).abs(),
    )
}

/// Calculates ellipse parameters from two corner points.
///
/// The ellipse is inscribed in the box spanned by the corners.
///
/// # Returns
/// Tuple `(cx, cy, rx, ry)` where:
/// - `cx`, `cy` = center point coordinates
/// - `rx` = horizontal radius (half width)
/// - `ry` = vertical radius (half height)
pub fn ellipse_from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> (f64, f64, f64, f64) {
    let cx = (x1 as f64 + x2 as f64) / 2.0;
    let cy = (y1 as f64 + y2 as f64) / 2.0;
    let rx = (x2 as f64 - x1 as f64).abs() / 2.0;
    let ry = (y2 as f64 - y1 as f64).abs() / 2.0;
    (cx, cy, rx, ry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_rect_handles_any_drag_direction() {
        assert_eq!(normalized_rect(10, 10, 30, 50), (10.0, 10.0, 20.0, 40.0));
        assert_eq!(normalized_rect(30, 50, 10, 10), (10.0, 10.0, 20.0, 40.0));
        assert_eq!(normalized_rect(5, 5, 5, 5), (5.0, 5.0, 0.0, 0.0));
    }

    #[test]
    fn corners_at_i32_extremes() {
        let span = u32::MAX as f64;
        assert_eq!(
            normalized_rect(i32::MAX, 0, i32::MIN, 10),
            (i32::MIN as f64, 0.0, span, 10.0)
        );
        assert_eq!(
            ellipse_from_corners(i32::MAX, i32::MAX, i32::MIN, i32::MIN),
            (-0.5, -0.5, span / 2.0, span / 2.0)
        );
    }

    #[test]
    fn ellipse_from_corners_computes_center_and_radii() {
        assert_eq!(ellipse_from_corners(0, 0, 10, 4), (5.0, 2.0, 5.0, 2.0));
        assert_eq!(ellipse_from_corners(10, 4, 0, 0), (5.0, 2.0, 5.0, 2.0));
        assert_eq!(ellipse_from_corners(0, 0, 3, 0), (1.5, 0.0, 1.5, 0.0));
    }

    #[test]
    fn name_mapping_is_case_insensitive() {
        assert_eq!(name_to_color("Blue").unwrap(), BLUE);
        assert_eq!(name_to_color("GRAY").unwrap(), LIGHT_GREY);
        assert!(name_to_color("chartreuse").is_none());
    }
}
