//! Unified input layer: gamepad + keyboard behind one polled query surface
//!
//! This module provides:
//! - [`InputManager`]: the aggregator the UI layer talks to
//! - [`GamepadSource`] / [`KeyboardSource`]: the two device sources
//! - [`PadBackend`]: the hardware seam ([`GilrsBackend`] in production)
//! - [`normalize`]: deadzone and trigger math shared by both sources
//!
//! The host drives one [`InputManager::update`] per rendered frame; every
//! query between updates is a pure read against that frame's snapshot.

pub mod button;
pub mod diagnostics;
pub mod gamepad;
pub mod gilrs_backend;
pub mod keyboard;
pub mod manager;
pub mod normalize;
pub mod pad;

pub use button::{Button, Stick};
pub use gamepad::{GamepadSource, StickTuning};
pub use gilrs_backend::GilrsBackend;
pub use keyboard::KeyboardSource;
pub use manager::{InputManager, InputMethod};
pub use normalize::StickSample;
pub use pad::{NullBackend, PadBackend, PadButton, PadSnapshot};
