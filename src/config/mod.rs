//! Configuration file support for vectorpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/vectorpad/config.toml` (or an explicit path). Settings include
//! the toolbar band height, stroke appearance, snapping and the regular polygon tool.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, DrawModeKey};
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{CanvasConfig, DrawingConfig, PolygonConfig, SnapConfig};

use crate::draw::{Color, MAX_SIDES, MIN_SIDES, RenderStyle, color};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// top_margin = 40
///
/// [drawing]
/// color = "blue"
/// thickness = 2.0
/// draw_mode_key = "shift"
///
/// [snap]
/// radius_px = 10.0
///
/// [polygon]
/// sides = 6
/// orientation = "drag"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas layout (toolbar band, background)
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Stroke appearance and draw-mode key
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Vertex snapping
    #[serde(default)]
    pub snap: SnapConfig,

    /// Regular polygon tool
    #[serde(default)]
    pub polygon: PolygonConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.top_margin`: 0 - 200
    /// - `drawing.thickness`: 1.0 - 20.0
    /// - `snap.radius_px`: 1.0 - 100.0
    /// - `snap.indicator_radius_px`: 1.0 - 50.0
    /// - `polygon.sides`: 3 - 64
    pub(crate) fn validate_and_clamp(&mut self) {
        if !(0..=200).contains(&self.canvas.top_margin) {
            log::warn!(
                "Invalid top_margin {}, clamping to 0-200 range",
                self.canvas.top_margin
            );
            self.canvas.top_margin = self.canvas.top_margin.clamp(0, 200);
        }

        if !(1.0..=20.0).contains(&self.drawing.thickness) {
            log::warn!(
                "Invalid thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.thickness
            );
            self.drawing.thickness = clamp_f64(self.drawing.thickness, 1.0, 20.0);
        }

        if !(1.0..=100.0).contains(&self.snap.radius_px) {
            log::warn!(
                "Invalid snap radius_px {:.1}, clamping to 1.0-100.0 range",
                self.snap.radius_px
            );
            self.snap.radius_px = clamp_f64(self.snap.radius_px, 1.0, 100.0);
        }

        if !(1.0..=50.0).contains(&self.snap.indicator_radius_px) {
            log::warn!(
                "Invalid snap indicator_radius_px {:.1}, clamping to 1.0-50.0 range",
                self.snap.indicator_radius_px
            );
            self.snap.indicator_radius_px = clamp_f64(self.snap.indicator_radius_px, 1.0, 50.0);
        }

        let sides_range = MIN_SIDES as i64..=MAX_SIDES as i64;
        if !sides_range.contains(&self.polygon.sides) {
            log::warn!(
                "Invalid polygon sides {}, clamping to {}-{} range",
                self.polygon.sides,
                MIN_SIDES,
                MAX_SIDES
            );
            self.polygon.sides = crate::draw::clamp_sides(self.polygon.sides) as i64;
        }
    }

    /// Returns the path to the default configuration file.
    ///
    /// The config file is located at `~/.config/vectorpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("vectorpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from `path` (or the default location), or returns
    /// defaults if the file does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - No path was given and the config directory cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a TOML document and clamps its values.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Stroke settings for the renderer, resolving configured colors.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            stroke: self.drawing.color.to_color_or(color::BLUE),
            preview: self.drawing.preview_color.to_color_or(color::ORANGE),
            snap: self.snap.color.to_color_or(color::RED),
            thickness: self.drawing.thickness,
        }
    }

    /// Canvas background color.
    pub fn background_color(&self) -> Color {
        self.canvas.background_color.to_color_or(color::WHITE)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

// NaN compares false against every bound, so it lands on the lower limit.
fn clamp_f64(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::PolygonOrientation;
    use std::io::Write;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.canvas.top_margin, 40);
        assert_eq!(config.drawing.thickness, 2.0);
        assert_eq!(config.drawing.draw_mode_key, DrawModeKey::Shift);
        assert!(config.snap.enabled);
        assert_eq!(config.snap.radius_px, 10.0);
        assert_eq!(config.polygon.sides, 6);
        assert_eq!(config.polygon.orientation, PolygonOrientation::Drag);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml(
            r#"
            [canvas]
            top_margin = -5

            [drawing]
            thickness = 99.0

            [snap]
            radius_px = 0.0
            indicator_radius_px = 400.0

            [polygon]
            sides = -12
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.top_margin, 0);
        assert_eq!(config.drawing.thickness, 20.0);
        assert_eq!(config.snap.radius_px, 1.0);
        assert_eq!(config.snap.indicator_radius_px, 50.0);
        assert_eq!(config.polygon.sides, 3);
    }

    #[test]
    fn enums_parse_from_kebab_case() {
        let config = Config::from_toml(
            r#"
            [drawing]
            draw_mode_key = "space"
            color = [0, 128, 0]

            [polygon]
            sides = 100
            orientation = "legacy"
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.draw_mode_key, DrawModeKey::Space);
        assert_eq!(config.drawing.color, ColorSpec::Rgb([0, 128, 0]));
        assert_eq!(config.polygon.sides, 64);
        assert_eq!(config.polygon.orientation, PolygonOrientation::Legacy);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml("[drawing\nthickness = ").is_err());
    }

    #[test]
    fn load_reads_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[snap]\nenabled = false").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(!config.snap.enabled);
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.canvas.top_margin, 40);
    }

    #[test]
    fn unknown_color_names_fall_back() {
        let config = Config::from_toml(
            r#"
            [drawing]
            color = "chartreuse"
            preview_color = [0, 255, 0]
            "#,
        )
        .unwrap();

        let style = config.render_style();
        assert_eq!(style.stroke, color::BLUE);
        assert_eq!(style.preview, Color::new(0.0, 1.0, 0.0, 1.0));
        assert_eq!(config.background_color(), color::WHITE);
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("polygon"));
        assert!(schema.contains("keybindings"));
    }
}
