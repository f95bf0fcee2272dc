//! Gamepad diagnostics tool for troubleshooting detection issues

use gilrs::{Axis, Button, Event, EventType, Gilrs};
use std::thread;
use std::time::Duration;
use tracing::info;

/// Print detailed information about all detected gamepads
///
/// Useful for troubleshooting detection issues, especially Bluetooth
/// controllers that take a moment to enumerate.
pub fn print_gamepad_diagnostics() {
    info!("=== Gamepad Diagnostics ===");
    info!("Platform: {}", std::env::consts::OS);
    info!("Initializing gilrs...");

    let mut gilrs = match Gilrs::new() {
        Ok(g) => {
            info!("✅ gilrs initialized successfully");
            g
        }
        Err(e) => {
            info!("❌ Failed to initialize GilRs: {:?}", e);
            info!("This may indicate missing system libraries or permissions issues.");
            return;
        }
    };

    info!("⏳ Waiting for gamepads to connect (3 seconds)...");

    // Poll events to let slow (Bluetooth) gamepads announce themselves
    let start = std::time::Instant::now();
    let wait_duration = Duration::from_secs(3);

    while start.elapsed() < wait_duration {
        while let Some(Event { event, .. }) = gilrs.next_event() {
            match event {
                EventType::Connected => info!("   📶 Gamepad connection detected..."),
                EventType::Disconnected => info!("   📵 Gamepad disconnection detected..."),
                _ => {}
            }
        }
        thread::sleep(Duration::from_millis(100));
    }

    let gamepads: Vec<_> = gilrs.gamepads().collect();

    if gamepads.is_empty() {
        info!("⚠️  No gamepads detected");
        info!("   Please check:");
        info!("   - Gamepad is connected (USB or Bluetooth paired)");
        info!("   - Drivers are installed");
        return;
    }

    info!("✅ Found {} gamepad(s):", gamepads.len());

    for (id, gamepad) in gamepads {
        info!("📋 Gamepad ID: {:?} (slot {})", id, usize::from(id));
        info!("   Name: \"{}\"", gamepad.name());
        info!("   Connected: {}", gamepad.is_connected());
        info!("   Power Info: {:?}", gamepad.power_info());

        info!("   🎮 Current button states:");
        let mut has_pressed = false;
        for button in &[
            Button::South,
            Button::East,
            Button::West,
            Button::North,
            Button::LeftTrigger,
            Button::RightTrigger,
            Button::LeftTrigger2,
            Button::RightTrigger2,
            Button::Select,
            Button::Start,
            Button::Mode,
            Button::LeftThumb,
            Button::RightThumb,
            Button::DPadUp,
            Button::DPadDown,
            Button::DPadLeft,
            Button::DPadRight,
        ] {
            if gamepad.is_pressed(*button) {
                info!("      {:?}: PRESSED", button);
                has_pressed = true;
            }
        }
        if !has_pressed {
            info!("      (no buttons currently pressed)");
        }

        info!("   🕹️  Current axis values:");
        let mut has_axis_movement = false;
        for axis in &[
            Axis::LeftStickX,
            Axis::LeftStickY,
            Axis::RightStickX,
            Axis::RightStickY,
        ] {
            let value = gamepad.value(*axis);
            if value.abs() > 0.01 {
                info!("      {:?}: {:.3}", axis, value);
                has_axis_movement = true;
            }
        }
        if !has_axis_movement {
            info!("      (all axes centered, move sticks to see values)");
        }
    }

    info!("=== End Diagnostics ===");
}
