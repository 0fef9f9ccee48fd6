//! The physics model: a single source driving a single resistive load.
//!
//! `current = V / max(R, 0.1)` and `power = V · I`. The resistance floor makes
//! the model total over every non-negative resistance, zero included, so
//! nothing here can fail.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RESISTANCE, DEFAULT_VOLTAGE, RESISTANCE_FLOOR};
use crate::math::Scalar;
use crate::units::{Current, Power, Resistance, Voltage};

/// User-controlled inputs of the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitState {
    /// Source voltage in volts.
    pub voltage: Scalar,
    /// Load resistance in ohms.
    pub resistance: Scalar,
}

impl CircuitState {
    /// Creates a state from raw volts and ohms.
    #[must_use]
    pub const fn new(voltage: Scalar, resistance: Scalar) -> Self {
        Self {
            voltage,
            resistance,
        }
    }

    /// Voltage as a typed quantity.
    #[must_use]
    pub fn voltage(&self) -> Voltage {
        Voltage::new(self.voltage)
    }

    /// Resistance as a typed quantity.
    #[must_use]
    pub fn resistance(&self) -> Resistance {
        Resistance::new(self.resistance)
    }
}

impl Default for CircuitState {
    fn default() -> Self {
        Self::new(DEFAULT_VOLTAGE, DEFAULT_RESISTANCE)
    }
}

/// Quantities derived from a [`CircuitState`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircuitResult {
    /// Current through the load in amperes.
    pub current: Scalar,
    /// Power dissipated in the load in watts.
    pub power: Scalar,
}

impl CircuitResult {
    /// Current as a typed quantity.
    #[must_use]
    pub fn current(&self) -> Current {
        Current::new(self.current)
    }

    /// Power as a typed quantity.
    #[must_use]
    pub fn power(&self) -> Power {
        Power::new(self.power)
    }
}

/// Solves the circuit with the standard 0.1 Ω floor.
#[must_use]
pub fn solve(state: &CircuitState) -> CircuitResult {
    solve_with_floor(state, RESISTANCE_FLOOR)
}

/// Solves the circuit, flooring resistance at `floor` before dividing.
#[must_use]
pub fn solve_with_floor(state: &CircuitState, floor: Scalar) -> CircuitResult {
    let current = current_for(state.voltage, state.resistance, floor);
    CircuitResult {
        current,
        power: state.voltage * current,
    }
}

/// Current (A) that `voltage` drives through `resistance`, floored at `floor`.
#[inline]
#[must_use]
pub fn current_for(voltage: Scalar, resistance: Scalar, floor: Scalar) -> Scalar {
    voltage / resistance.max(floor)
}
