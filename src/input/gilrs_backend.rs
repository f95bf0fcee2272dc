//! GilRs-backed pad snapshots
//!
//! Production [`PadBackend`]: pumps the gilrs event queue each poll (which is
//! what drives gilrs's own hot-plug detection) and then snapshots every
//! connected gamepad into the explicit [`PadSnapshot`] form.
//!
//! gilrs reports buttons by physical position (South/East/North/West) and
//! stick Y axes up-positive; snapshots use standard-layout indices and the
//! HID axis convention (down positive), so both are converted here.

use crate::input::button::Button;
use crate::input::pad::{PadBackend, PadButton, PadSnapshot};
use anyhow::Result;
use gilrs::{Axis, Event, EventType, GamepadId, Gilrs};
use tracing::{debug, info};

/// Map a logical button to the gilrs button that carries it.
fn gilrs_button(button: Button) -> gilrs::Button {
    match button {
        Button::A => gilrs::Button::South,
        Button::B => gilrs::Button::East,
        Button::X => gilrs::Button::West,
        Button::Y => gilrs::Button::North,
        Button::Lb => gilrs::Button::LeftTrigger,
        Button::Rb => gilrs::Button::RightTrigger,
        Button::Lt => gilrs::Button::LeftTrigger2,
        Button::Rt => gilrs::Button::RightTrigger2,
        Button::View => gilrs::Button::Select,
        Button::Menu => gilrs::Button::Start,
        Button::Ls => gilrs::Button::LeftThumb,
        Button::Rs => gilrs::Button::RightThumb,
        Button::Up => gilrs::Button::DPadUp,
        Button::Down => gilrs::Button::DPadDown,
        Button::Left => gilrs::Button::DPadLeft,
        Button::Right => gilrs::Button::DPadRight,
        Button::Home => gilrs::Button::Mode,
    }
}

/// [`PadBackend`] implementation over gilrs.
pub struct GilrsBackend {
    gilrs: Gilrs,
}

impl GilrsBackend {
    /// Initialize gilrs. Fails only if the platform gamepad subsystem is
    /// unavailable; callers degrade to [`crate::input::pad::NullBackend`].
    pub fn new() -> Result<Self> {
        let gilrs = Gilrs::new().map_err(|e| anyhow::anyhow!("gilrs init failed: {}", e))?;
        info!("GilRs initialized");
        Ok(Self { gilrs })
    }

    /// Underlying gilrs id of the first connected pad, for downstream
    /// consumers that talk to gilrs directly (force feedback).
    pub fn first_gamepad_id(&self) -> Option<GamepadId> {
        self.gilrs
            .gamepads()
            .filter(|(_, pad)| pad.is_connected())
            .map(|(id, _)| id)
            .min_by_key(|id| usize::from(*id))
    }

    fn snapshot(id: GamepadId, pad: &gilrs::Gamepad<'_>) -> PadSnapshot {
        let mut snapshot = PadSnapshot::new(usize::from(id), pad.name());

        for button in Button::ALL {
            let gb = gilrs_button(button);
            let state = match pad.button_data(gb) {
                Some(data) => PadButton {
                    pressed: data.is_pressed(),
                    value: data.value(),
                },
                None => {
                    let pressed = pad.is_pressed(gb);
                    PadButton {
                        pressed,
                        value: if pressed { 1.0 } else { 0.0 },
                    }
                }
            };
            snapshot.buttons[button.index()] = state;
        }

        // gilrs Y axes are up-positive; snapshots carry HID convention.
        snapshot.axes = [
            pad.value(Axis::LeftStickX),
            -pad.value(Axis::LeftStickY),
            pad.value(Axis::RightStickX),
            -pad.value(Axis::RightStickY),
        ];

        snapshot
    }
}

impl PadBackend for GilrsBackend {
    fn poll(&mut self) -> Vec<PadSnapshot> {
        // Drain the event queue; gilrs updates its cached gamepad state as a
        // side effect. Connection changes are worth a log line.
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => {
                    let name = self.gilrs.gamepad(id).name().to_string();
                    info!("🎮 Gamepad connected: {:?} \"{}\"", id, name);
                }
                EventType::Disconnected => {
                    info!("🎮 Gamepad disconnected: {:?}", id);
                }
                _ => {
                    debug!("Gamepad event: {:?} {:?}", id, event);
                }
            }
        }

        self.gilrs
            .gamepads()
            .filter(|(_, pad)| pad.is_connected())
            .map(|(id, pad)| Self::snapshot(id, &pad))
            .collect()
    }
}
