//! Keybinding configuration types and parsing.
//!
//! Tool selection, polygon side count and view reset are bound through this
//! table. The draw-mode key is a held key and is configured separately in
//! `[drawing]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit and cancellation
    Exit,

    // Tool selection
    SelectLine,
    SelectRect,
    SelectEllipse,
    SelectPolyline,
    SelectPolygon,

    // Regular polygon side count
    IncreaseSides,
    DecreaseSides,

    // View
    ResetView,
}

/// A single keybinding: a key character with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Q" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let s_normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in s_normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into ["Ctrl", "", ""]: the key itself is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() { "+".to_string() } else { key };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Configuration for all keybindings.
///
/// ```toml
/// [keybindings]
/// exit = ["Escape", "Ctrl+Q"]
/// select_polygon = ["G"]
/// increase_sides = ["+", "="]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_select_line")]
    pub select_line: Vec<String>,

    #[serde(default = "default_select_rect")]
    pub select_rect: Vec<String>,

    #[serde(default = "default_select_ellipse")]
    pub select_ellipse: Vec<String>,

    #[serde(default = "default_select_polyline")]
    pub select_polyline: Vec<String>,

    #[serde(default = "default_select_polygon")]
    pub select_polygon: Vec<String>,

    #[serde(default = "default_increase_sides")]
    pub increase_sides: Vec<String>,

    #[serde(default = "default_decrease_sides")]
    pub decrease_sides: Vec<String>,

    #[serde(default = "default_reset_view")]
    pub reset_view: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            select_line: default_select_line(),
            select_rect: default_select_rect(),
            select_ellipse: default_select_ellipse(),
            select_polyline: default_select_polyline(),
            select_polygon: default_select_polygon(),
            increase_sides: default_increase_sides(),
            decrease_sides: default_decrease_sides(),
            reset_view: default_reset_view(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let table: [(&[String], Action); 9] = [
            (self.exit.as_slice(), Action::Exit),
            (self.select_line.as_slice(), Action::SelectLine),
            (self.select_rect.as_slice(), Action::SelectRect),
            (self.select_ellipse.as_slice(), Action::SelectEllipse),
            (self.select_polyline.as_slice(), Action::SelectPolyline),
            (self.select_polygon.as_slice(), Action::SelectPolygon),
            (self.increase_sides.as_slice(), Action::IncreaseSides),
            (self.decrease_sides.as_slice(), Action::DecreaseSides),
            (self.reset_view.as_slice(), Action::ResetView),
        ];

        for (bindings, action) in table {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string(), "Ctrl+Q".to_string()]
}

fn default_select_line() -> Vec<String> {
    vec!["L".to_string()]
}

fn default_select_rect() -> Vec<String> {
    vec!["R".to_string()]
}

fn default_select_ellipse() -> Vec<String> {
    vec!["E".to_string()]
}

fn default_select_polyline() -> Vec<String> {
    vec!["P".to_string()]
}

fn default_select_polygon() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_increase_sides() -> Vec<String> {
    vec!["+".to_string(), "=".to_string()]
}

fn default_decrease_sides() -> Vec<String> {
    vec!["-".to_string(), "_".to_string()]
}

fn default_reset_view() -> Vec<String> {
    vec!["0".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+Q").unwrap();
        assert_eq!(binding.key, "Q");
        assert!(binding.ctrl);
        assert!(!binding.shift);
    }

    #[test]
    fn test_parse_plus_key() {
        let plain = KeyBinding::parse("+").unwrap();
        assert_eq!(plain.key, "+");

        let with_ctrl = KeyBinding::parse("Ctrl++").unwrap();
        assert_eq!(with_ctrl.key, "+");
        assert!(with_ctrl.ctrl);
    }

    #[test]
    fn test_parse_with_spaces_and_any_order() {
        let a = KeyBinding::parse("Ctrl + Alt + G").unwrap();
        let b = KeyBinding::parse("Alt+Ctrl+G").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+Q").unwrap();
        assert!(binding.matches("q", true, false, false)); // Case insensitive
        assert!(!binding.matches("Q", false, false, false)); // Missing ctrl
        assert!(!binding.matches("W", true, false, false)); // Wrong key
    }

    #[test]
    fn test_build_action_map() {
        let map = KeybindingsConfig::default().build_action_map().unwrap();

        let escape = KeyBinding::parse("Escape").unwrap();
        assert_eq!(map.get(&escape), Some(&Action::Exit));

        let g = KeyBinding::parse("G").unwrap();
        assert_eq!(map.get(&g), Some(&Action::SelectPolygon));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let config = KeybindingsConfig {
            select_line: vec!["L".to_string()],
            select_rect: vec!["l".to_string(), "L".to_string()],
            ..KeybindingsConfig::default()
        };

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
        assert!(err_msg.contains("'L'"));
    }
}
