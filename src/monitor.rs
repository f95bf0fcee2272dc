//! Live input monitor - prints edge transitions and stick motion
//!
//! Stands in for the shell's frame clock: one `update()` per iteration at
//! the configured interval, pure queries afterwards. Useful for verifying a
//! controller's mapping and deadzone tuning without launching the shell.

use anyhow::Result;
use colored::Colorize;
use shellpad::config::MonitorConfig;
use shellpad::input::{Button, InputManager, InputMethod, Stick};
use std::time::{Duration, Instant};
use tracing::info;

/// How much a stick sample must move before the monitor reprints it.
const STICK_PRINT_DELTA: f32 = 0.05;

/// Run the monitor frame loop.
///
/// # Arguments
/// * `input` - Input manager to poll
/// * `config` - Monitor settings (frame interval)
/// * `duration_secs` - Stop after this many seconds; 0 runs until killed
pub fn run(mut input: InputManager, config: &MonitorConfig, duration_secs: u64) -> Result<()> {
    println!("\n{}", "=== Shellpad Input Monitor ===".bold().cyan());
    println!("Press buttons or move sticks on a connected pad.");
    println!("Keyboard input is fed by the embedding shell; this monitor shows the pad path.\n");

    let interval = Duration::from_millis(config.poll_interval_ms);
    let started = Instant::now();

    let mut last_method = InputMethod::None;
    let mut last_sticks = [(0.0f32, 0.0f32); 2];

    loop {
        input.update();

        for button in Button::ALL {
            if input.just_pressed(button, 0) {
                let value = input.gamepad().button_value(button, 0);
                if button.is_analog() {
                    println!("  {} {} ({:.2})", "▼".green(), button.to_string().bold(), value);
                } else {
                    println!("  {} {}", "▼".green(), button.to_string().bold());
                }
            }
            if input.just_released(button, 0) {
                println!("  {} {}", "▲".yellow(), button.to_string().dimmed());
            }
        }

        for (idx, which) in [Stick::Left, Stick::Right].into_iter().enumerate() {
            let sample = input.stick(which, 0);
            let (lx, ly) = last_sticks[idx];
            if (sample.x - lx).abs() > STICK_PRINT_DELTA || (sample.y - ly).abs() > STICK_PRINT_DELTA {
                let label = match which {
                    Stick::Left => "LS",
                    Stick::Right => "RS",
                };
                println!(
                    "  {} x={:+.2} y={:+.2} mag={:.2}",
                    label.cyan(),
                    sample.x,
                    sample.y,
                    sample.magnitude
                );
                last_sticks[idx] = (sample.x, sample.y);
            }
        }

        let method = input.active_method();
        if method != last_method {
            println!("  {} {}", "input method:".dimmed(), method.to_string().magenta());
            last_method = method;
        }

        if duration_secs > 0 && started.elapsed() >= Duration::from_secs(duration_secs) {
            break;
        }

        std::thread::sleep(interval);
    }

    info!("Monitor finished after {:.1}s", started.elapsed().as_secs_f32());
    Ok(())
}
