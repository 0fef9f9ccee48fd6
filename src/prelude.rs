//! Convenience re-exports for driving the simulator.

pub use crate::circuits::ohm::{current_for, solve, solve_with_floor, CircuitResult, CircuitState};
pub use crate::config::{ConfigError, Control, SimulatorConfig};
pub use crate::constants::*;
pub use crate::errors::OhmLabError;
pub use crate::math::Scalar;
pub use crate::simulation::{evaluate, Input, Session, Snapshot};
pub use crate::status::{brightness, brightness_with_max, BulbAppearance, LightStatus};
pub use crate::sweep::{chart_data, current_curve, ChartData, CurvePoint, CurveSpec};
pub use crate::units::{Ampere, Current, Ohm, Power, Quantity, Resistance, Unit, Volt, Voltage, Watt};
