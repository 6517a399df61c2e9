//! Library exports for the vectorpad drawing core.
//!
//! Exposes the view transform, geometry store, draw-session state machine and
//! Cairo renderer so the binary, the schema dumper and integration tests share
//! one implementation.

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod ui;
pub mod util;
pub mod view;

pub use config::Config;
