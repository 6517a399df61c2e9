//! Input handling and the draw-session state machine.
//!
//! This module translates keyboard and mouse events into drawing actions.
//! It owns the view (pan/zoom), the shape store and the in-progress draw
//! session, and produces the screen-space scene for each paint.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::{DrawingState, InputSettings, InputState, Session};
pub use tool::Tool;
