//! Shellpad - unified gamepad + keyboard input layer
//!
//! Normalizes gamepad and keyboard state into a single polled button/stick
//! query surface for a console-style shell UI. The host drives one
//! [`input::InputManager::update`] per rendered frame and feeds keyboard
//! events from its window layer; everything else is pure queries.

pub mod config;
pub mod input;

pub use config::{AppConfig, InputConfig};
pub use input::{Button, InputManager, InputMethod, Stick, StickSample};
