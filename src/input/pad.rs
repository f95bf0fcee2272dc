//! Pad snapshots and the backend seam
//!
//! The host's gamepad objects are duck-typed and host-owned; this module
//! replaces them with explicit value types captured once per frame, and puts
//! a trait between the frame logic and whatever actually talks to the
//! hardware. [`super::gilrs_backend::GilrsBackend`] is the production
//! implementation; [`NullBackend`] is the no-hardware fallback.

use crate::input::button::BUTTON_COUNT;

/// One physical button's captured state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PadButton {
    /// Digital pressed flag.
    pub pressed: bool,
    /// Analog value in [0, 1]. Digital buttons report 0.0 or 1.0;
    /// triggers report their raw analog position.
    pub value: f32,
}

impl PadButton {
    /// A fully pressed digital button.
    pub fn down() -> Self {
        Self {
            pressed: true,
            value: 1.0,
        }
    }

    /// An analog button at the given position.
    pub fn analog(value: f32) -> Self {
        Self {
            pressed: value > 0.5,
            value,
        }
    }
}

/// One connected pad's per-frame snapshot.
///
/// Buttons are stored in standard-layout index order (see
/// [`crate::input::Button::index`]). Axes follow the HID convention: right
/// and **down** positive, `[lx, ly, rx, ry]`. Consumers invert Y for screen
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PadSnapshot {
    /// Host slot index. Not a stable device identity; a pad that reconnects
    /// may land in a different slot.
    pub slot: usize,
    /// Product name reported by the host.
    pub name: String,
    pub buttons: [PadButton; BUTTON_COUNT],
    pub axes: [f32; 4],
}

impl PadSnapshot {
    /// Create an idle snapshot for the given slot.
    pub fn new(slot: usize, name: impl Into<String>) -> Self {
        Self {
            slot,
            name: name.into(),
            buttons: [PadButton::default(); BUTTON_COUNT],
            axes: [0.0; 4],
        }
    }
}

/// Source of per-frame pad snapshots.
///
/// `poll` is called exactly once per frame and returns a snapshot for every
/// currently connected pad, each tagged with its host slot index. Absence of
/// pads is not an error; implementations return an empty vec.
pub trait PadBackend {
    fn poll(&mut self) -> Vec<PadSnapshot>;
}

/// Backend that never reports a pad.
///
/// Used when the gamepad subsystem fails to initialize so the rest of the
/// input layer keeps working on keyboard alone.
#[derive(Debug, Default)]
pub struct NullBackend;

impl PadBackend for NullBackend {
    fn poll(&mut self) -> Vec<PadSnapshot> {
        Vec::new()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted backend for exercising the frame logic without hardware.

    use super::*;
    use crate::input::button::Button;
    use std::collections::VecDeque;

    /// Replays a pre-scripted sequence of frames; once the script runs out,
    /// every further poll reports no pads (disconnection).
    pub struct ScriptedBackend {
        frames: VecDeque<Vec<PadSnapshot>>,
    }

    impl ScriptedBackend {
        pub fn new(frames: Vec<Vec<PadSnapshot>>) -> Self {
            Self {
                frames: frames.into(),
            }
        }
    }

    impl PadBackend for ScriptedBackend {
        fn poll(&mut self) -> Vec<PadSnapshot> {
            self.frames.pop_front().unwrap_or_default()
        }
    }

    /// Snapshot with one digital button held.
    pub fn pad_with_button(slot: usize, button: Button) -> PadSnapshot {
        let mut pad = PadSnapshot::new(slot, "Test Pad");
        pad.buttons[button.index()] = PadButton::down();
        pad
    }

    /// Snapshot with a trigger at the given raw analog value.
    pub fn pad_with_trigger(slot: usize, button: Button, raw: f32) -> PadSnapshot {
        let mut pad = PadSnapshot::new(slot, "Test Pad");
        pad.buttons[button.index()] = PadButton::analog(raw);
        pad
    }

    /// Snapshot with raw left-stick axes (HID convention, down positive).
    pub fn pad_with_left_stick(slot: usize, lx: f32, ly: f32) -> PadSnapshot {
        let mut pad = PadSnapshot::new(slot, "Test Pad");
        pad.axes[0] = lx;
        pad.axes[1] = ly;
        pad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_backend_reports_nothing() {
        let mut backend = NullBackend;
        assert!(backend.poll().is_empty());
        assert!(backend.poll().is_empty());
    }

    #[test]
    fn test_idle_snapshot() {
        let pad = PadSnapshot::new(0, "Xbox Wireless Controller");
        assert_eq!(pad.slot, 0);
        assert!(pad.buttons.iter().all(|b| !b.pressed && b.value == 0.0));
        assert_eq!(pad.axes, [0.0; 4]);
    }

    #[test]
    fn test_pad_button_constructors() {
        assert!(PadButton::down().pressed);
        assert_eq!(PadButton::down().value, 1.0);

        let trigger = PadButton::analog(0.3);
        assert!(!trigger.pressed);
        assert_eq!(trigger.value, 0.3);
    }
}
