//! Gamepad source: per-frame snapshot buffering and logical queries
//!
//! Keeps the two most recent frames of pad snapshots and answers every
//! logical-button and stick query against them. Edge detection
//! (just-pressed / just-released) is a diff between the two buffers.
//!
//! Slot handling: a query for a slot with no pad silently falls back to the
//! first connected pad in ascending slot order, so a single controller works
//! no matter which slot the host assigned it. The fallback is resolved
//! independently in the previous and current frame; if pads reconnect in a
//! different slot order between frames the edge queries can momentarily see
//! two different devices. That matches the observed behavior of the shell
//! and is kept as-is (a stable device-identity key would change it).

use crate::input::button::{Button, Stick};
use crate::input::normalize::{
    radial_deadzone, trigger_value, StickSample, DEFAULT_DEADZONE, DEFAULT_TRIGGER_THRESHOLD,
};
use crate::input::pad::{PadBackend, PadSnapshot};
use std::collections::BTreeMap;

/// Stick and trigger tunables for the gamepad source.
#[derive(Debug, Clone, Copy)]
pub struct StickTuning {
    /// Radial stick deadzone.
    pub deadzone: f32,
    /// Analog trigger activation threshold.
    pub trigger_threshold: f32,
}

impl Default for StickTuning {
    fn default() -> Self {
        Self {
            deadzone: DEFAULT_DEADZONE,
            trigger_threshold: DEFAULT_TRIGGER_THRESHOLD,
        }
    }
}

/// Polls a [`PadBackend`] once per frame and answers logical queries.
pub struct GamepadSource {
    backend: Box<dyn PadBackend>,
    /// Previous frame's snapshots, keyed by slot.
    prev: BTreeMap<usize, PadSnapshot>,
    /// Current frame's snapshots, keyed by slot.
    now: BTreeMap<usize, PadSnapshot>,
    tuning: StickTuning,
}

impl GamepadSource {
    pub fn new(backend: Box<dyn PadBackend>, tuning: StickTuning) -> Self {
        Self {
            backend,
            prev: BTreeMap::new(),
            now: BTreeMap::new(),
            tuning,
        }
    }

    /// Capture a fresh frame. Call exactly once per rendered frame; every
    /// query until the next call reads the committed snapshot.
    pub fn update(&mut self) {
        self.prev = std::mem::take(&mut self.now);
        for pad in self.backend.poll() {
            self.now.insert(pad.slot, pad);
        }
    }

    /// Resolve a slot against a frame buffer: the requested slot if a pad is
    /// there, otherwise the first connected pad in ascending slot order.
    fn resolve(frame: &BTreeMap<usize, PadSnapshot>, slot: usize) -> Option<&PadSnapshot> {
        frame
            .get(&slot)
            .or_else(|| frame.values().next())
    }

    fn down_in(&self, frame: &BTreeMap<usize, PadSnapshot>, button: Button, slot: usize) -> bool {
        match Self::resolve(frame, slot) {
            Some(pad) => self.button_value_of(pad, button) > 0.0,
            None => false,
        }
    }

    fn button_value_of(&self, pad: &PadSnapshot, button: Button) -> f32 {
        let state = pad.buttons[button.index()];
        if button.is_analog() {
            trigger_value(state.value, self.tuning.trigger_threshold)
        } else if state.pressed {
            1.0
        } else {
            0.0
        }
    }

    /// Whether the logical button is currently held. No pad connected
    /// resolves to false, never an error.
    pub fn is_down(&self, button: Button, slot: usize) -> bool {
        self.down_in(&self.now, button, slot)
    }

    /// Current analog value for the button: raw trigger position for LT/RT
    /// (0.0 below the activation threshold), 1.0/0.0 for digital buttons.
    pub fn button_value(&self, button: Button, slot: usize) -> f32 {
        match Self::resolve(&self.now, slot) {
            Some(pad) => self.button_value_of(pad, button),
            None => 0.0,
        }
    }

    /// Whether the button went down between the previous and current frame.
    pub fn just_pressed(&self, button: Button, slot: usize) -> bool {
        self.down_in(&self.now, button, slot) && !self.down_in(&self.prev, button, slot)
    }

    /// Whether the button went up between the previous and current frame.
    pub fn just_released(&self, button: Button, slot: usize) -> bool {
        !self.down_in(&self.now, button, slot) && self.down_in(&self.prev, button, slot)
    }

    /// Deadzone-normalized stick sample, up and right positive.
    pub fn stick(&self, which: Stick, slot: usize) -> StickSample {
        let Some(pad) = Self::resolve(&self.now, slot) else {
            return StickSample::ZERO;
        };

        let base = which.axis_base();
        let x = pad.axes[base];
        // Snapshot axes are HID convention (down positive); flip to screen
        // convention so up is positive.
        let y = -pad.axes[base + 1];

        radial_deadzone(x, y, self.tuning.deadzone)
    }

    /// First connected pad in ascending slot order, if any. Raw accessor for
    /// downstream consumers (haptics and the like).
    pub fn first(&self) -> Option<&PadSnapshot> {
        self.now.values().next()
    }

    /// Number of pads seen in the current frame.
    pub fn connected_count(&self) -> usize {
        self.now.len()
    }

    /// Whether any pad is connected this frame.
    pub fn is_connected(&self) -> bool {
        !self.now.is_empty()
    }
}
