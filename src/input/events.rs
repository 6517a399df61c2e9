//! Generic input event types.

/// Generic key representation.
///
/// Event sources map their native key codes to these values for unified
/// input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Space bar
    Space,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key name as used in keybinding and event script files.
    ///
    /// Named keys are case-insensitive; any other single character maps to
    /// [`Key::Char`]. Returns `None` for empty or unknown multi-character names.
    pub fn from_name(name: &str) -> Option<Key> {
        match name.to_lowercase().as_str() {
            "escape" | "esc" => Some(Key::Escape),
            "space" => Some(Key::Space),
            "shift" => Some(Key::Shift),
            "ctrl" | "control" => Some(Key::Ctrl),
            "alt" => Some(Key::Alt),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }

    /// Name used for keybinding lookup, or `None` for pure modifiers.
    pub(crate) fn binding_name(self) -> Option<String> {
        match self {
            Key::Char(c) => Some(c.to_string()),
            Key::Escape => Some("Escape".to_string()),
            Key::Space => Some("Space".to_string()),
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => None,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (places vertices, presses toolbar buttons)
    Left,
    /// Right mouse button (pans the view while held)
    Right,
    /// Middle mouse button (currently unused)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_parse_case_insensitively() {
        assert_eq!(Key::from_name("SHIFT"), Some(Key::Shift));
        assert_eq!(Key::from_name("Esc"), Some(Key::Escape));
        assert_eq!(Key::from_name("g"), Some(Key::Char('g')));
        assert_eq!(Key::from_name("+"), Some(Key::Char('+')));
        assert_eq!(Key::from_name("hyper"), None);
        assert_eq!(Key::from_name(""), None);
    }
}
