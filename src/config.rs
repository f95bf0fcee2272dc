//! Configuration management
//!
//! Handles loading and parsing of the YAML configuration file. Every field
//! has a default matching the shell's built-in tuning, so a missing file or
//! an empty document is perfectly valid.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::input::normalize::{
    DEFAULT_DEADZONE, DEFAULT_STICK_CROSSOVER, DEFAULT_TRIGGER_THRESHOLD,
};

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
}

/// Input layer tuning
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct InputConfig {
    /// Radial stick deadzone.
    #[serde(default = "default_deadzone")]
    pub deadzone: f32,
    /// Analog trigger activation threshold.
    #[serde(default = "default_trigger_threshold")]
    pub trigger_threshold: f32,
    /// Gamepad stick magnitude above which it overrides the keyboard
    /// virtual stick.
    #[serde(default = "default_stick_crossover")]
    pub stick_crossover: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            deadzone: default_deadzone(),
            trigger_threshold: default_trigger_threshold(),
            stick_crossover: default_stick_crossover(),
        }
    }
}

/// Monitor mode settings
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct MonitorConfig {
    /// Frame interval in milliseconds (the monitor's stand-in frame clock).
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

fn default_deadzone() -> f32 {
    DEFAULT_DEADZONE
}

fn default_trigger_threshold() -> f32 {
    DEFAULT_TRIGGER_THRESHOLD
}

fn default_stick_crossover() -> f32 {
    DEFAULT_STICK_CROSSOVER
}

fn default_poll_interval_ms() -> u64 {
    16
}

impl AppConfig {
    /// Load configuration from a YAML file. A missing file yields the
    /// defaults; a malformed file is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }
}
