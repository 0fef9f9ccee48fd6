//! Simulator configuration: slider ranges, start-up state and view tuning.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the stock simulator. Controls may be overridden field by field
//! (`voltage: { max: 48.0 }`); missing fields keep their stock values.
//!
//! ```yaml
//! voltage:    { min: 1.0, max: 24.0,  step: 0.5, default: 12.0 }
//! resistance: { min: 1.0, max: 100.0, step: 0.5, default: 50.0 }
//! resistance_floor: 0.1
//! brightness_max_current: 12.0
//! curve: { start: 1.0, stop: 100.0, step: 2.0 }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::circuits::ohm::CircuitState;
use crate::constants::{
    BRIGHTNESS_MAX_CURRENT, DEFAULT_RESISTANCE, DEFAULT_VOLTAGE, MAX_CURVE_SAMPLES,
    RESISTANCE_FLOOR, RESISTANCE_MAX, RESISTANCE_MIN, RESISTANCE_STEP, VOLTAGE_MAX, VOLTAGE_MIN,
    VOLTAGE_STEP,
};
use crate::math::{clamp, snap_to_step, Scalar};
use crate::sweep::CurveSpec;

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The YAML document is malformed or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A value is out of its permitted range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A continuous input control with a fixed range and step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Smallest selectable value.
    pub min: Scalar,
    /// Largest selectable value.
    pub max: Scalar,
    /// Granularity, anchored at `min`.
    pub step: Scalar,
    /// Value at start-up.
    pub default: Scalar,
}

impl Control {
    /// Stock voltage slider: 1–24 V in 0.5 V steps, starting at 12 V.
    pub const VOLTAGE: Self = Self {
        min: VOLTAGE_MIN,
        max: VOLTAGE_MAX,
        step: VOLTAGE_STEP,
        default: DEFAULT_VOLTAGE,
    };

    /// Stock resistance slider: 1–100 Ω in 0.5 Ω steps, starting at 50 Ω.
    pub const RESISTANCE: Self = Self {
        min: RESISTANCE_MIN,
        max: RESISTANCE_MAX,
        step: RESISTANCE_STEP,
        default: DEFAULT_RESISTANCE,
    };

    /// Clamps `value` into range and snaps it onto the step grid.
    ///
    /// When the range is not a whole number of steps, values near `max`
    /// settle on the last grid point below it.
    #[must_use]
    pub fn quantize(&self, value: Scalar) -> Scalar {
        let inside = clamp(value, self.min, self.max);
        let snapped = snap_to_step(inside, self.min, self.step);
        let on_grid = if snapped > self.max + self.step * 1.0e-9 {
            snapped - self.step
        } else {
            snapped
        };
        clamp(on_grid, self.min, self.max)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        let finite = [self.min, self.max, self.step, self.default]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::Invalid(format!("{name}: values must be finite")));
        }
        if self.min <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{name}: min ({}) must be positive",
                self.min
            )));
        }
        if self.min >= self.max {
            return Err(ConfigError::Invalid(format!(
                "{name}: min ({}) must be below max ({})",
                self.min, self.max
            )));
        }
        if self.step <= 0.0 {
            return Err(ConfigError::Invalid(format!("{name}: step must be positive")));
        }
        if !(self.min..=self.max).contains(&self.default) {
            return Err(ConfigError::Invalid(format!(
                "{name}: default {} outside [{}, {}]",
                self.default, self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Partial control as written in YAML; absent fields fall back to a base.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ControlOverride {
    min: Option<Scalar>,
    max: Option<Scalar>,
    step: Option<Scalar>,
    default: Option<Scalar>,
}

impl ControlOverride {
    fn over(self, base: Control) -> Control {
        Control {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            step: self.step.unwrap_or(base.step),
            default: self.default.unwrap_or(base.default),
        }
    }
}

fn voltage_control<'de, D: Deserializer<'de>>(d: D) -> Result<Control, D::Error> {
    ControlOverride::deserialize(d).map(|o| o.over(Control::VOLTAGE))
}

fn resistance_control<'de, D: Deserializer<'de>>(d: D) -> Result<Control, D::Error> {
    ControlOverride::deserialize(d).map(|o| o.over(Control::RESISTANCE))
}

/// Full simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Voltage slider.
    #[serde(deserialize_with = "voltage_control")]
    pub voltage: Control,
    /// Resistance slider.
    #[serde(deserialize_with = "resistance_control")]
    pub resistance: Control,
    /// Divide-by-zero guard (Ω).
    pub resistance_floor: Scalar,
    /// Current mapped to full bulb brightness (A).
    pub brightness_max_current: Scalar,
    /// Chart sampling.
    pub curve: CurveSpec,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            voltage: Control::VOLTAGE,
            resistance: Control::RESISTANCE,
            resistance_floor: RESISTANCE_FLOOR,
            brightness_max_current: BRIGHTNESS_MAX_CURRENT,
            curve: CurveSpec::default(),
        }
    }
}

impl SimulatorConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), "loaded simulator config");
        Ok(config)
    }

    /// Checks ranges, steps and scalar parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.voltage.validate("voltage")?;
        self.resistance.validate("resistance")?;
        if !(self.resistance_floor.is_finite() && self.resistance_floor > 0.0) {
            return Err(ConfigError::Invalid(
                "resistance_floor must be a positive number".into(),
            ));
        }
        if !(self.brightness_max_current.is_finite() && self.brightness_max_current > 0.0) {
            return Err(ConfigError::Invalid(
                "brightness_max_current must be a positive number".into(),
            ));
        }
        let curve = &self.curve;
        if !(curve.step > 0.0 && curve.start > 0.0 && curve.start <= curve.stop && curve.stop.is_finite())
        {
            return Err(ConfigError::Invalid(
                "curve: need 0 < start <= stop and step > 0".into(),
            ));
        }
        let samples = (curve.stop - curve.start) / curve.step + 1.0;
        if samples > MAX_CURVE_SAMPLES as Scalar {
            return Err(ConfigError::Invalid(format!(
                "curve: {samples:.0} samples requested, at most {MAX_CURVE_SAMPLES} allowed"
            )));
        }
        Ok(())
    }

    /// State the simulator starts in.
    #[must_use]
    pub fn initial_state(&self) -> CircuitState {
        CircuitState::new(self.voltage.default, self.resistance.default)
    }
}
