//! Fixed parameters of the Ohm's law model and its presentation.
//!
//! The physics itself has no tunable constants; everything here either guards
//! the arithmetic (the resistance floor) or shapes how results are presented
//! (status thresholds, brightness normalization, slider ranges).

use crate::math::Scalar;

/// Smallest resistance (Ω) used as a divisor. Keeps current finite as R → 0.
pub const RESISTANCE_FLOOR: Scalar = 0.1;

/// Current (A) that maps to full bulb brightness.
pub const BRIGHTNESS_MAX_CURRENT: Scalar = 12.0;

/// Lower bound (A, inclusive) of the `Dim` status band.
pub const DIM_THRESHOLD: Scalar = 0.1;
/// Lower bound (A, inclusive) of the `Moderate` status band.
pub const MODERATE_THRESHOLD: Scalar = 1.0;
/// Lower bound (A, inclusive) of the `Bright` status band.
pub const BRIGHT_THRESHOLD: Scalar = 4.0;
/// Lower bound (A, inclusive) of the `Blinding` status band.
pub const BLINDING_THRESHOLD: Scalar = 8.0;

/// Voltage slider minimum (V).
pub const VOLTAGE_MIN: Scalar = 1.0;
/// Voltage slider maximum (V).
pub const VOLTAGE_MAX: Scalar = 24.0;
/// Voltage slider step (V).
pub const VOLTAGE_STEP: Scalar = 0.5;
/// Voltage at start-up (V).
pub const DEFAULT_VOLTAGE: Scalar = 12.0;

/// Resistance slider minimum (Ω).
pub const RESISTANCE_MIN: Scalar = 1.0;
/// Resistance slider maximum (Ω).
pub const RESISTANCE_MAX: Scalar = 100.0;
/// Resistance slider step (Ω).
pub const RESISTANCE_STEP: Scalar = 0.5;
/// Resistance at start-up (Ω).
pub const DEFAULT_RESISTANCE: Scalar = 50.0;

/// First resistance sample (Ω) of the I-R curve.
pub const CURVE_START: Scalar = 1.0;
/// Last resistance (Ω, inclusive) the I-R curve may reach.
pub const CURVE_STOP: Scalar = 100.0;
/// Spacing (Ω) between I-R curve samples.
pub const CURVE_STEP: Scalar = 2.0;
/// Upper bound on the number of I-R curve samples a configuration may request.
pub const MAX_CURVE_SAMPLES: usize = 10_000;
