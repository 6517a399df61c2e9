//! Line-oriented event scripts replayed against an [`InputState`].
//!
//! Each non-empty line holds one event; `#` starts a comment.
//!
//! ```text
//! tool polygon
//! sides 5
//! key-down shift
//! click 200 240
//! click 250 240
//! key-up shift
//! scroll 1 300 300
//! ```

use crate::input::{InputState, Key, MouseButton, Tool};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single replayable input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptEvent {
    /// Select the tool for the next session
    Tool(Tool),
    /// Set the regular polygon side count (clamped when applied)
    Sides(i64),
    KeyDown(Key),
    KeyUp(Key),
    Press(MouseButton, i32, i32),
    Release(MouseButton, i32, i32),
    Move(i32, i32),
    /// Left press immediately followed by a left release
    Click(i32, i32),
    /// Wheel step: positive zooms in
    Scroll(i32, i32, i32),
}

/// Errors that can occur while loading an event script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to read script {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parses a whole script, reporting the first malformed line.
pub fn parse_script(source: &str) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }

        let event = parse_line(line).map_err(|message| ScriptError::Parse {
            line: index + 1,
            message,
        })?;
        events.push(event);
    }

    Ok(events)
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptEvent>, ScriptError> {
    let source = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let events = parse_script(&source)?;
    log::info!("Loaded {} event(s) from {}", events.len(), path.display());
    Ok(events)
}

/// Feeds one event into the input state.
pub fn apply(state: &mut InputState, event: ScriptEvent) {
    log::trace!("Replaying {:?}", event);
    match event {
        ScriptEvent::Tool(tool) => state.select_tool(tool),
        ScriptEvent::Sides(sides) => state.set_polygon_sides(sides),
        ScriptEvent::KeyDown(key) => state.on_key_press(key),
        ScriptEvent::KeyUp(key) => state.on_key_release(key),
        ScriptEvent::Press(button, x, y) => state.on_mouse_press(button, x, y),
        ScriptEvent::Release(button, x, y) => state.on_mouse_release(button, x, y),
        ScriptEvent::Move(x, y) => state.on_mouse_motion(x, y),
        ScriptEvent::Click(x, y) => {
            state.on_mouse_motion(x, y);
            state.on_mouse_press(MouseButton::Left, x, y);
            state.on_mouse_release(MouseButton::Left, x, y);
        }
        ScriptEvent::Scroll(delta, x, y) => state.on_scroll(delta, x, y),
    }
}

/// Replays events in order, stopping early once an exit is requested.
///
/// Returns the number of events applied.
pub fn replay(state: &mut InputState, events: &[ScriptEvent]) -> usize {
    for (applied, event) in events.iter().enumerate() {
        if state.should_exit {
            log::info!("Exit requested; skipping {} event(s)", events.len() - applied);
            return applied;
        }
        apply(state, *event);
    }
    events.len()
}

fn parse_line(line: &str) -> Result<ScriptEvent, String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = words.collect();

    let event = match command.as_str() {
        "tool" => {
            let [name] = expect_args::<1>(&command, &args)?;
            let tool = Tool::from_name(name).ok_or_else(|| format!("unknown tool '{}'", name))?;
            ScriptEvent::Tool(tool)
        }
        "sides" => {
            let [n] = expect_args::<1>(&command, &args)?;
            ScriptEvent::Sides(parse_number(n)?)
        }
        "key-down" | "key-up" => {
            let [name] = expect_args::<1>(&command, &args)?;
            let key = Key::from_name(name).ok_or_else(|| format!("unknown key '{}'", name))?;
            if command == "key-down" {
                ScriptEvent::KeyDown(key)
            } else {
                ScriptEvent::KeyUp(key)
            }
        }
        "press" | "release" => {
            let [button, x, y] = expect_args::<3>(&command, &args)?;
            let button = parse_button(button)?;
            let (x, y) = (parse_number(x)?, parse_number(y)?);
            if command == "press" {
                ScriptEvent::Press(button, x, y)
            } else {
                ScriptEvent::Release(button, x, y)
            }
        }
        "move" => {
            let [x, y] = expect_args::<2>(&command, &args)?;
            ScriptEvent::Move(parse_number(x)?, parse_number(y)?)
        }
        "click" => {
            let [x, y] = expect_args::<2>(&command, &args)?;
            ScriptEvent::Click(parse_number(x)?, parse_number(y)?)
        }
        "scroll" => {
            let [delta, x, y] = expect_args::<3>(&command, &args)?;
            ScriptEvent::Scroll(parse_number(delta)?, parse_number(x)?, parse_number(y)?)
        }
        other => return Err(format!("unknown command '{}'", other)),
    };

    Ok(event)
}

fn expect_args<'a, const N: usize>(
    command: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], String> {
    <[&'a str; N]>::try_from(args)
        .map_err(|_| format!("'{}' expects {} argument(s), got {}", command, N, args.len()))
}

fn parse_number<T: std::str::FromStr>(word: &str) -> Result<T, String> {
    word.parse().map_err(|_| format!("invalid number '{}'", word))
}

fn parse_button(word: &str) -> Result<MouseButton, String> {
    match word.to_lowercase().as_str() {
        "left" => Ok(MouseButton::Left),
        "right" => Ok(MouseButton::Right),
        "middle" => Ok(MouseButton::Middle),
        other => Err(format!("unknown mouse button '{}'", other)),
    }
}
