//! Input aggregator
//!
//! One query surface over the gamepad and keyboard sources. Buttons are the
//! logical OR of both sources, so the controller and keyboard can be used
//! simultaneously; sticks prefer the gamepad once its deflection clears a
//! small crossover threshold, so pad drift near center never masks
//! deliberate keyboard stick input.

use crate::input::button::{Button, Stick};
use crate::input::gamepad::{GamepadSource, StickTuning};
use crate::input::gilrs_backend::GilrsBackend;
use crate::input::keyboard::KeyboardSource;
use crate::input::normalize::StickSample;
use crate::input::pad::{NullBackend, PadBackend, PadSnapshot};
use crate::config::InputConfig;
use std::fmt;
use tracing::warn;

/// Classification of where input is currently coming from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    Gamepad,
    Keyboard,
    Both,
    None,
}

impl fmt::Display for InputMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputMethod::Gamepad => "gamepad",
            InputMethod::Keyboard => "keyboard",
            InputMethod::Both => "both",
            InputMethod::None => "none",
        };
        f.write_str(name)
    }
}

/// Owns one gamepad source and one keyboard source for the application
/// lifetime and merges their answers.
pub struct InputManager {
    gamepad: GamepadSource,
    keyboard: KeyboardSource,
    stick_crossover: f32,
}

impl InputManager {
    /// Create a manager over the gilrs backend. If the platform gamepad
    /// subsystem is unavailable this degrades to keyboard-only operation
    /// rather than failing.
    pub fn new(config: &InputConfig) -> Self {
        let backend: Box<dyn PadBackend> = match GilrsBackend::new() {
            Ok(backend) => Box::new(backend),
            Err(e) => {
                warn!("Gamepad support unavailable: {}. Continuing keyboard-only.", e);
                Box::new(NullBackend)
            }
        };
        Self::with_backend(backend, config)
    }

    /// Create a manager over an explicit backend (tests, alternate hosts).
    pub fn with_backend(backend: Box<dyn PadBackend>, config: &InputConfig) -> Self {
        let tuning = StickTuning {
            deadzone: config.deadzone,
            trigger_threshold: config.trigger_threshold,
        };
        Self {
            gamepad: GamepadSource::new(backend, tuning),
            keyboard: KeyboardSource::new(),
            stick_crossover: config.stick_crossover,
        }
    }

    /// Commit a new frame on both sources. Call exactly once per rendered
    /// frame; every query until the next call is a pure read.
    pub fn update(&mut self) {
        self.gamepad.update();
        self.keyboard.update();
    }

    /// Whether the button is held on either device.
    pub fn is_down(&self, button: Button, slot: usize) -> bool {
        self.gamepad.is_down(button, slot) || self.keyboard.is_down(button)
    }

    /// Whether the button went down this frame on either device.
    pub fn just_pressed(&self, button: Button, slot: usize) -> bool {
        self.gamepad.just_pressed(button, slot) || self.keyboard.just_pressed(button)
    }

    /// Whether the button went up this frame on either device.
    pub fn just_released(&self, button: Button, slot: usize) -> bool {
        self.gamepad.just_released(button, slot) || self.keyboard.just_released(button)
    }

    /// Merged stick sample: the gamepad wins once its magnitude clears the
    /// crossover threshold, otherwise the keyboard virtual stick answers.
    pub fn stick(&self, which: Stick, slot: usize) -> StickSample {
        let pad_sample = self.gamepad.stick(which, slot);
        if pad_sample.magnitude > self.stick_crossover {
            return pad_sample;
        }
        self.keyboard.stick(which)
    }

    /// Classify current input activity. Gamepad counts when a pad is
    /// connected; keyboard counts when a mapped button or virtual stick is
    /// engaged.
    pub fn active_method(&self) -> InputMethod {
        let gamepad_active = self.gamepad.is_connected();
        let keyboard_active = self.keyboard.any_button_down()
            || self.keyboard.stick(Stick::Left).is_active()
            || self.keyboard.stick(Stick::Right).is_active();

        match (gamepad_active, keyboard_active) {
            (true, true) => InputMethod::Both,
            (true, false) => InputMethod::Gamepad,
            (false, true) => InputMethod::Keyboard,
            (false, false) => InputMethod::None,
        }
    }

    /// Raw snapshot of the first connected pad, for downstream consumers
    /// (haptics and the like).
    pub fn first_pad(&self) -> Option<&PadSnapshot> {
        self.gamepad.first()
    }

    /// The gamepad source.
    pub fn gamepad(&self) -> &GamepadSource {
        &self.gamepad
    }

    /// The keyboard source.
    pub fn keyboard(&self) -> &KeyboardSource {
        &self.keyboard
    }

    /// Mutable keyboard source, for the host's key event handlers.
    pub fn keyboard_mut(&mut self) -> &mut KeyboardSource {
        &mut self.keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::pad::testing::{pad_with_button, pad_with_left_stick, ScriptedBackend};
    use crate::input::pad::PadSnapshot;

    fn manager_with_frames(frames: Vec<Vec<PadSnapshot>>) -> InputManager {
        InputManager::with_backend(
            Box::new(ScriptedBackend::new(frames)),
            &InputConfig::default(),
        )
    }

    #[test]
    fn test_idle_reports_nothing() {
        let mut input = manager_with_frames(vec![]);
        input.update();
        for button in Button::ALL {
            assert!(!input.is_down(button, 0));
        }
        assert_eq!(input.stick(Stick::Left, 0), StickSample::ZERO);
        assert_eq!(input.active_method(), InputMethod::None);
        assert!(input.first_pad().is_none());
    }

    #[test]
    fn test_or_semantics_keyboard_only() {
        let mut input = manager_with_frames(vec![vec![PadSnapshot::new(0, "Test Pad")]]);
        input.update();
        input.keyboard_mut().key_down("a");
        // Pad does not report A; keyboard does
        assert!(input.is_down(Button::A, 0));
        assert!(input.just_pressed(Button::A, 0));
    }

    #[test]
    fn test_or_semantics_gamepad_only() {
        let mut input = manager_with_frames(vec![vec![pad_with_button(0, Button::Home)]]);
        input.update();
        assert!(input.is_down(Button::Home, 0));
    }

    #[test]
    fn test_edges_merge_across_sources() {
        let mut input = manager_with_frames(vec![
            vec![pad_with_button(0, Button::A)],
            vec![pad_with_button(0, Button::A)],
        ]);

        input.update();
        assert!(input.just_pressed(Button::A, 0));

        input.update();
        assert!(!input.just_pressed(Button::A, 0));

        // A keyboard press of the same button while the pad holds it still
        // registers as an edge from the keyboard side
        input.keyboard_mut().key_down("j");
        assert!(input.just_pressed(Button::A, 0));
    }

    #[test]
    fn test_stick_crossover_prefers_keyboard_under_drift() {
        // Pad drift at raw 0.05: inside the deadzone, normalizes to zero
        let mut input = manager_with_frames(vec![vec![pad_with_left_stick(0, 0.05, 0.0)]]);
        input.update();
        input.keyboard_mut().key_down("Control");
        input.keyboard_mut().key_down("w");
        input.keyboard_mut().key_down("d");

        let sample = input.stick(Stick::Left, 0);
        assert_eq!(sample.magnitude, 1.0);
        assert!((sample.x - 0.707).abs() < 1e-3);
    }

    #[test]
    fn test_stick_crossover_prefers_gamepad_when_deflected() {
        let mut input = manager_with_frames(vec![vec![pad_with_left_stick(0, 1.0, 0.0)]]);
        input.update();
        input.keyboard_mut().key_down("Control");
        input.keyboard_mut().key_down("a");

        let sample = input.stick(Stick::Left, 0);
        // Gamepad sample wins: full right, not keyboard's full left
        assert!(sample.x > 0.9);
    }

    #[test]
    fn test_active_method_classification() {
        let mut input = manager_with_frames(vec![
            vec![PadSnapshot::new(0, "Test Pad")],
            vec![PadSnapshot::new(0, "Test Pad")],
            vec![],
            vec![],
        ]);

        input.update();
        assert_eq!(input.active_method(), InputMethod::Gamepad);

        input.keyboard_mut().key_down("Enter");
        assert_eq!(input.active_method(), InputMethod::Both);

        input.update();
        input.update();
        // Pad gone, Enter still held
        assert_eq!(input.active_method(), InputMethod::Keyboard);

        input.keyboard_mut().key_up("Enter");
        input.update();
        assert_eq!(input.active_method(), InputMethod::None);
    }

    #[test]
    fn test_first_pad_exposed() {
        let mut input = manager_with_frames(vec![vec![PadSnapshot::new(1, "Xbox Controller")]]);
        input.update();
        let pad = input.first_pad().unwrap();
        assert_eq!(pad.slot, 1);
        assert_eq!(pad.name, "Xbox Controller");
    }
}
