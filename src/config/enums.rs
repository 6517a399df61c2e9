//! Configuration enum types.

use crate::draw::{Color, color::*};
use crate::input::Key;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Key that must be held for the draw session to stay active.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DrawModeKey {
    #[default]
    Shift,
    Ctrl,
    Alt,
    Space,
}

impl DrawModeKey {
    /// Whether `key` is the configured draw-mode key.
    pub fn matches(self, key: Key) -> bool {
        matches!(
            (self, key),
            (DrawModeKey::Shift, Key::Shift)
                | (DrawModeKey::Ctrl, Key::Ctrl)
                | (DrawModeKey::Alt, Key::Alt)
                | (DrawModeKey::Space, Key::Space)
        )
    }
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "blue"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, orange, white, black, grey
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown color names fall back to `fallback` with a warning. RGB arrays
    /// are converted from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color_or(&self, fallback: Color) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using fallback", name);
                fallback
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }

    /// Converts with blue as the fallback for unknown names.
    pub fn to_color(&self) -> Color {
        self.to_color_or(BLUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_spec_scales_components() {
        let color = ColorSpec::Rgb([255, 0, 51]).to_color();
        assert_eq!(color, Color::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn unknown_name_uses_fallback() {
        let color = ColorSpec::Name("mauve".to_string()).to_color_or(WHITE);
        assert_eq!(color, WHITE);
    }

    #[test]
    fn draw_mode_key_matches_only_its_key() {
        assert!(DrawModeKey::Shift.matches(Key::Shift));
        assert!(!DrawModeKey::Shift.matches(Key::Ctrl));
        assert!(DrawModeKey::Space.matches(Key::Space));
    }
}
