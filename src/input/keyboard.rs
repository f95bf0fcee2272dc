//! Keyboard source: held-key tracking and virtual sticks
//!
//! The host feeds raw key press/release notifications (by host key
//! identifier, e.g. `"a"`, `"ArrowUp"`, `"Tab"`) into this source from its
//! window event handlers; nothing here is polled from the OS. `update()`
//! only commits the held set into a previous-frame snapshot so edge queries
//! can diff the two, mirroring the gamepad source's two-buffer model.
//!
//! # Key map
//!
//! Dual ABXY layouts are supported so either hand position works:
//!
//! ```text
//!   WASD:  a→A  s→B  d→X  w→Y         IJKL:  j→A  l→B  k→X  i→Y
//! ```
//!
//! Arrows map to the D-pad, Q/E to the bumpers, Z/C to the triggers, V/N to
//! the stick clicks, Tab/Enter/Escape to VIEW/MENU/HOME. Letter keys are
//! mapped in both cases since the host reports the shifted character.
//!
//! # Virtual sticks
//!
//! WASD and IJKL double as digital buttons, so a modifier disambiguates
//! intent: the left stick is live only while `Control` is held (WASD as
//! -1/0/+1 per axis), the right stick only while `Alt` is held (IJKL).
//! Sticks are recomputed on every key event, not per frame.

use crate::input::button::{Button, Stick};
use crate::input::normalize::{clamp_to_unit, StickSample};
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Host key identifier → logical button.
static KEY_MAP: Lazy<HashMap<&'static str, Button>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // ABXY, WASD layout
    for key in ["a", "A"] {
        map.insert(key, Button::A);
    }
    for key in ["s", "S"] {
        map.insert(key, Button::B);
    }
    for key in ["d", "D"] {
        map.insert(key, Button::X);
    }
    for key in ["w", "W"] {
        map.insert(key, Button::Y);
    }

    // ABXY, IJKL layout (closer to the physical pad layout)
    for key in ["j", "J"] {
        map.insert(key, Button::A);
    }
    for key in ["l", "L"] {
        map.insert(key, Button::B);
    }
    for key in ["k", "K"] {
        map.insert(key, Button::X);
    }
    for key in ["i", "I"] {
        map.insert(key, Button::Y);
    }

    // D-pad
    map.insert("ArrowUp", Button::Up);
    map.insert("ArrowDown", Button::Down);
    map.insert("ArrowLeft", Button::Left);
    map.insert("ArrowRight", Button::Right);

    // Bumpers and triggers
    for key in ["q", "Q"] {
        map.insert(key, Button::Lb);
    }
    for key in ["e", "E"] {
        map.insert(key, Button::Rb);
    }
    for key in ["z", "Z"] {
        map.insert(key, Button::Lt);
    }
    for key in ["c", "C"] {
        map.insert(key, Button::Rt);
    }

    // Stick clicks
    for key in ["v", "V"] {
        map.insert(key, Button::Ls);
    }
    for key in ["n", "N"] {
        map.insert(key, Button::Rs);
    }

    // System buttons
    map.insert("Tab", Button::View);
    map.insert("Enter", Button::Menu);
    map.insert("Escape", Button::Home);

    map
});

/// Modifier that gates the left virtual stick.
const LEFT_STICK_MODIFIER: &str = "Control";
/// Modifier that gates the right virtual stick.
const RIGHT_STICK_MODIFIER: &str = "Alt";

/// Tracks held keys and derives two virtual analog sticks.
#[derive(Debug, Default)]
pub struct KeyboardSource {
    keys_down: HashSet<String>,
    prev_keys_down: HashSet<String>,
    left_stick: (f32, f32),
    right_stick: (f32, f32),
}

impl KeyboardSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the host should treat this key as claimed by the shell (and
    /// suppress its default behavior). Tab is always claimed so focus never
    /// escapes to the host chrome.
    pub fn is_mapped(key: &str) -> bool {
        KEY_MAP.contains_key(key) || key == "Tab"
    }

    /// Record a key going down. Call from the host's key-press handler.
    pub fn key_down(&mut self, key: &str) {
        self.keys_down.insert(key.to_string());
        self.update_sticks();
    }

    /// Record a key going up. Call from the host's key-release handler.
    pub fn key_up(&mut self, key: &str) {
        self.keys_down.remove(key);
        self.update_sticks();
    }

    /// Commit the held set for edge detection. Call once per frame.
    pub fn update(&mut self) {
        self.prev_keys_down = self.keys_down.clone();
    }

    fn held(&self, key: &str) -> bool {
        self.keys_down.contains(key)
    }

    /// Recompute both virtual sticks from the held set. Runs on every key
    /// event so the sticks track the keyboard between frames.
    fn update_sticks(&mut self) {
        let mut lx = 0.0;
        let mut ly = 0.0;
        if self.held(LEFT_STICK_MODIFIER) {
            if self.held("a") || self.held("A") {
                lx -= 1.0;
            }
            if self.held("d") || self.held("D") {
                lx += 1.0;
            }
            // Screen convention: up is positive
            if self.held("w") || self.held("W") {
                ly += 1.0;
            }
            if self.held("s") || self.held("S") {
                ly -= 1.0;
            }
        }
        self.left_stick = (lx, ly);

        let mut rx = 0.0;
        let mut ry = 0.0;
        if self.held(RIGHT_STICK_MODIFIER) {
            if self.held("j") || self.held("J") {
                rx -= 1.0;
            }
            if self.held("l") || self.held("L") {
                rx += 1.0;
            }
            if self.held("i") || self.held("I") {
                ry += 1.0;
            }
            if self.held("k") || self.held("K") {
                ry -= 1.0;
            }
        }
        self.right_stick = (rx, ry);
    }

    fn down_in(set: &HashSet<String>, button: Button) -> bool {
        KEY_MAP
            .iter()
            .any(|(key, mapped)| *mapped == button && set.contains(*key))
    }

    /// Whether any key mapped to this button is currently held.
    pub fn is_down(&self, button: Button) -> bool {
        Self::down_in(&self.keys_down, button)
    }

    /// Whether the button went down since the last committed frame.
    pub fn just_pressed(&self, button: Button) -> bool {
        Self::down_in(&self.keys_down, button) && !Self::down_in(&self.prev_keys_down, button)
    }

    /// Whether the button went up since the last committed frame.
    pub fn just_released(&self, button: Button) -> bool {
        !Self::down_in(&self.keys_down, button) && Self::down_in(&self.prev_keys_down, button)
    }

    /// Current virtual stick sample, diagonals rescaled to unit length.
    pub fn stick(&self, which: Stick) -> StickSample {
        let (x, y) = match which {
            Stick::Left => self.left_stick,
            Stick::Right => self.right_stick,
        };
        clamp_to_unit(x, y)
    }

    /// Whether any mapped logical button is currently held.
    pub fn any_button_down(&self) -> bool {
        self.keys_down.iter().any(|key| KEY_MAP.contains_key(key.as_str()))
    }
}
