//! Circuit primitives and the Ohm's law model.

/// Single-loop DC model: current and power from voltage and resistance.
pub mod ohm;

pub use ohm::{current_for, solve, solve_with_floor, CircuitResult, CircuitState};
