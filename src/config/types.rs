//! Configuration type definitions.

use super::enums::{ColorSpec, DrawModeKey};
use crate::draw::PolygonOrientation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Height of the toolbar band at the top of the surface, in pixels
    /// (valid range: 0 - 200). Clicks inside the band never draw.
    #[serde(default = "default_top_margin")]
    pub top_margin: i32,

    /// Canvas background color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            top_margin: default_top_margin(),
            background_color: default_background_color(),
        }
    }
}

/// Drawing-related settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Stroke color of committed shapes - a named color or an RGB array like `[0, 0, 255]`
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub thickness: f64,

    /// Color of the in-progress preview
    #[serde(default = "default_preview_color")]
    pub preview_color: ColorSpec,

    /// Key held to stay in draw mode (shift, ctrl, alt, space)
    #[serde(default)]
    pub draw_mode_key: DrawModeKey,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            thickness: default_thickness(),
            preview_color: default_preview_color(),
            draw_mode_key: DrawModeKey::default(),
        }
    }
}

/// Vertex snapping settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SnapConfig {
    /// Enable snapping clicks onto existing vertices
    #[serde(default = "default_snap_enabled")]
    pub enabled: bool,

    /// Snap radius in screen pixels (valid range: 1.0 - 100.0)
    #[serde(default = "default_snap_radius")]
    pub radius_px: f64,

    /// Radius of the snap indicator circle in pixels (valid range: 1.0 - 50.0)
    #[serde(default = "default_indicator_radius")]
    pub indicator_radius_px: f64,

    /// Snap indicator color
    #[serde(default = "default_snap_color")]
    pub color: ColorSpec,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: default_snap_enabled(),
            radius_px: default_snap_radius(),
            indicator_radius_px: default_indicator_radius(),
            color: default_snap_color(),
        }
    }
}

/// Regular polygon tool settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PolygonConfig {
    /// Initial number of sides (clamped to 3 - 64)
    #[serde(default = "default_sides")]
    pub sides: i64,

    /// Orientation of the first vertex: "drag" points it at the dragged rim
    /// point, "legacy" uses the single-argument arctangent
    #[serde(default)]
    pub orientation: PolygonOrientation,
}

impl Default for PolygonConfig {
    fn default() -> Self {
        Self {
            sides: default_sides(),
            orientation: PolygonOrientation::default(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_top_margin() -> i32 {
    40
}

fn default_background_color() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("blue".to_string())
}

fn default_thickness() -> f64 {
    2.0
}

fn default_preview_color() -> ColorSpec {
    ColorSpec::Name("orange".to_string())
}

fn default_snap_enabled() -> bool {
    true
}

fn default_snap_radius() -> f64 {
    10.0
}

fn default_indicator_radius() -> f64 {
    6.0
}

fn default_snap_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_sides() -> i64 {
    6
}
