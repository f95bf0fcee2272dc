//! Shared normalization functions for stick and trigger values.
//!
//! This module provides the canonical implementations used by every input
//! source, ensuring gamepad and keyboard sticks agree on what a "full
//! deflection" looks like.
//!
//! # Stick Normalization
//!
//! Uses a radial (circular) deadzone rather than a per-axis (square) one.
//! After the deadzone is removed the remaining range is rescaled so response
//! starts at exactly zero on the deadzone boundary and reaches magnitude 1.0
//! at full deflection, with no discontinuity.
//!
//! # Key Functions
//!
//! - [`radial_deadzone`]: for gamepad sticks (already in -1.0..1.0 per axis)
//! - [`clamp_to_unit`]: for keyboard virtual sticks (-1/0/+1 per axis)
//! - [`trigger_value`]: analog trigger gate

use serde::{Deserialize, Serialize};

/// Radius around a stick's center within which raw input is discarded as noise.
pub const DEFAULT_DEADZONE: f32 = 0.18;

/// Analog trigger value below which the trigger reads as released.
pub const DEFAULT_TRIGGER_THRESHOLD: f32 = 0.2;

/// Gamepad stick magnitude above which it takes priority over the keyboard
/// virtual stick in the aggregator.
pub const DEFAULT_STICK_CROSSOVER: f32 = 0.1;

/// One analog stick's post-normalization position.
///
/// `x`/`y` are in [-1, 1] with up and right positive (screen convention);
/// `magnitude` is `hypot(x, y)` in [0, 1]. A stick inside its deadzone is
/// exactly [`StickSample::ZERO`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StickSample {
    pub x: f32,
    pub y: f32,
    pub magnitude: f32,
}

impl StickSample {
    /// The centered (inactive) sample.
    pub const ZERO: StickSample = StickSample {
        x: 0.0,
        y: 0.0,
        magnitude: 0.0,
    };

    /// Whether this sample carries any deflection at all.
    pub fn is_active(&self) -> bool {
        self.magnitude > 0.0
    }
}

/// Apply a radial deadzone and rescale the remaining range.
///
/// Below the deadzone the sample is exactly zero. Above it, the magnitude is
/// remapped so the deadzone boundary reads 0.0 and full deflection reads 1.0:
/// `norm = (mag - deadzone) / (1 - deadzone)`, with both components scaled by
/// `norm / mag`. Response is therefore continuous starting at the deadzone
/// edge and the full range is preserved.
///
/// # Arguments
/// * `x`, `y` - Raw stick values (-1.0 to 1.0 per axis, up/right positive)
/// * `deadzone` - Radial deadzone in [0, 1)
///
/// # Example
/// ```
/// use shellpad::input::normalize::{radial_deadzone, StickSample, DEFAULT_DEADZONE};
///
/// // Inside the deadzone: exactly zero
/// assert_eq!(radial_deadzone(0.1, 0.0, DEFAULT_DEADZONE), StickSample::ZERO);
///
/// // Full deflection: full magnitude preserved
/// let sample = radial_deadzone(1.0, 0.0, DEFAULT_DEADZONE);
/// assert!((sample.magnitude - 1.0).abs() < 1e-6);
/// ```
pub fn radial_deadzone(x: f32, y: f32, deadzone: f32) -> StickSample {
    let magnitude = (x * x + y * y).sqrt();

    if magnitude < deadzone {
        return StickSample::ZERO;
    }

    if deadzone >= 1.0 {
        return StickSample::ZERO;
    }

    // Remap [deadzone, 1] -> [0, 1]; guard the divide for a centered stick
    // with a zero deadzone.
    let normalized = (magnitude - deadzone) / (1.0 - deadzone);
    let scale = if magnitude > 0.0 {
        normalized / magnitude
    } else {
        0.0
    };

    StickSample {
        x: x * scale,
        y: y * scale,
        magnitude: normalized,
    }
}

/// Clamp a virtual stick sample to the unit circle.
///
/// Keyboard sticks are never partially deflected: each axis is -1, 0, or +1,
/// so only diagonals (magnitude √2) need rescaling. Interior values pass
/// through unchanged.
pub fn clamp_to_unit(x: f32, y: f32) -> StickSample {
    let magnitude = (x * x + y * y).sqrt();

    if magnitude > 1.0 {
        StickSample {
            x: x / magnitude,
            y: y / magnitude,
            magnitude: 1.0,
        }
    } else {
        StickSample { x, y, magnitude }
    }
}

/// Gate an analog trigger value.
///
/// Below the threshold the trigger reads 0.0 (released). At or above it the
/// raw analog value is passed through unchanged so downstream consumers can
/// still use it proportionally.
pub fn trigger_value(raw: f32, threshold: f32) -> f32 {
    if raw >= threshold {
        raw
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_radial_deadzone_centered() {
        assert_eq!(radial_deadzone(0.0, 0.0, DEFAULT_DEADZONE), StickSample::ZERO);
    }

    #[test]
    fn test_radial_deadzone_inside() {
        // Magnitude 0.17 < 0.18: discarded as noise
        assert_eq!(radial_deadzone(0.17, 0.0, DEFAULT_DEADZONE), StickSample::ZERO);
        // Diagonal that creeps over the radius is NOT discarded
        let sample = radial_deadzone(0.15, 0.15, DEFAULT_DEADZONE);
        assert!(sample.is_active());
    }

    #[test]
    fn test_radial_deadzone_continuous_at_edge() {
        // Just past the deadzone boundary the response starts near zero
        let sample = radial_deadzone(0.181, 0.0, DEFAULT_DEADZONE);
        assert!(sample.magnitude > 0.0);
        assert!(sample.magnitude < 0.01, "magnitude was {}", sample.magnitude);
    }

    #[test]
    fn test_radial_deadzone_full_deflection() {
        let sample = radial_deadzone(1.0, 0.0, DEFAULT_DEADZONE);
        assert!((sample.x - 1.0).abs() < 1e-6);
        assert_eq!(sample.y, 0.0);
        assert!((sample.magnitude - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_radial_deadzone_halfway() {
        // Raw 0.59 with deadzone 0.18 -> (0.59 - 0.18) / 0.82 = 0.5
        let sample = radial_deadzone(0.59, 0.0, DEFAULT_DEADZONE);
        assert!((sample.magnitude - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_radial_deadzone_zero_deadzone_centered() {
        assert_eq!(radial_deadzone(0.0, 0.0, 0.0), StickSample::ZERO);
    }

    #[test]
    fn test_clamp_to_unit_diagonal() {
        let sample = clamp_to_unit(1.0, 1.0);
        assert!((sample.x - 0.707).abs() < 1e-3);
        assert!((sample.y - 0.707).abs() < 1e-3);
        assert_eq!(sample.magnitude, 1.0);
    }

    #[test]
    fn test_clamp_to_unit_cardinal_passthrough() {
        let sample = clamp_to_unit(0.0, 1.0);
        assert_eq!(sample.x, 0.0);
        assert_eq!(sample.y, 1.0);
        assert!((sample.magnitude - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_to_unit_centered() {
        assert_eq!(clamp_to_unit(0.0, 0.0), StickSample::ZERO);
    }

    #[test]
    fn test_trigger_value_gate() {
        assert_eq!(trigger_value(0.15, DEFAULT_TRIGGER_THRESHOLD), 0.0);
        assert_eq!(trigger_value(0.2, DEFAULT_TRIGGER_THRESHOLD), 0.2);
        assert_eq!(trigger_value(0.5, DEFAULT_TRIGGER_THRESHOLD), 0.5);
        assert_eq!(trigger_value(0.0, DEFAULT_TRIGGER_THRESHOLD), 0.0);
    }

    proptest! {
        #[test]
        fn prop_radial_deadzone_magnitude_consistent(
            x in -1.0f32..=1.0,
            y in -1.0f32..=1.0,
        ) {
            let sample = radial_deadzone(x, y, DEFAULT_DEADZONE);
            let hypot = (sample.x * sample.x + sample.y * sample.y).sqrt();
            // magnitude always agrees with the components
            prop_assert!((sample.magnitude - hypot).abs() < 1e-4);
            prop_assert!(sample.magnitude >= 0.0);
        }

        #[test]
        fn prop_radial_deadzone_zero_inside(
            angle in 0.0f32..std::f32::consts::TAU,
            mag in 0.0f32..0.179,
        ) {
            let sample = radial_deadzone(mag * angle.cos(), mag * angle.sin(), DEFAULT_DEADZONE);
            prop_assert_eq!(sample, StickSample::ZERO);
        }
    }
}
