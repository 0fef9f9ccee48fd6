//! Interactive session: owns the circuit state and recomputes on every input.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::circuits::ohm::{solve_with_floor, CircuitResult, CircuitState};
use crate::config::{Control, SimulatorConfig};
use crate::errors::OhmLabError;
use crate::math::Scalar;
use crate::status::{brightness_with_max, BulbAppearance, LightStatus};
use crate::sweep::{chart_data, ChartData};

/// A single user input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Voltage slider moved to the given value (V).
    Voltage(Scalar),
    /// Resistance slider moved to the given value (Ω).
    Resistance(Scalar),
}

/// Everything the views need after a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Inputs.
    pub state: CircuitState,
    /// Derived current and power.
    pub result: CircuitResult,
    /// Bulb status label.
    pub status: LightStatus,
    /// Normalized bulb brightness.
    pub brightness: Scalar,
}

impl Snapshot {
    /// Bulb rendering parameters for this snapshot.
    #[must_use]
    pub fn bulb(&self) -> BulbAppearance {
        BulbAppearance::from_brightness(self.brightness)
    }
}

/// Holds the single [`CircuitState`] and the results derived from it.
#[derive(Debug, Clone)]
pub struct Session {
    config: SimulatorConfig,
    state: CircuitState,
    snapshot: Snapshot,
}

impl Session {
    /// Starts a session at the configured default state.
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        let state = config.initial_state();
        let snapshot = evaluate(&config, state);
        info!(
            voltage = state.voltage,
            resistance = state.resistance,
            "session started"
        );
        Self {
            config,
            state,
            snapshot,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Current inputs.
    #[must_use]
    pub fn state(&self) -> CircuitState {
        self.state
    }

    /// Latest recomputed view of the circuit.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    /// Moves the voltage slider and recomputes.
    pub fn set_voltage(&mut self, volts: Scalar) -> Result<Snapshot, OhmLabError> {
        self.apply(Input::Voltage(volts))
    }

    /// Moves the resistance slider and recomputes.
    pub fn set_resistance(&mut self, ohms: Scalar) -> Result<Snapshot, OhmLabError> {
        self.apply(Input::Resistance(ohms))
    }

    /// Applies an input event with slider semantics, then recomputes everything.
    ///
    /// Non-finite values are rejected and leave the state untouched.
    pub fn apply(&mut self, input: Input) -> Result<Snapshot, OhmLabError> {
        match input {
            Input::Voltage(v) => {
                self.state.voltage = accept("voltage", &self.config.voltage, v)?;
            }
            Input::Resistance(r) => {
                self.state.resistance = accept("resistance", &self.config.resistance, r)?;
            }
        }
        self.snapshot = evaluate(&self.config, self.state);
        Ok(self.snapshot)
    }

    /// Chart data for the present state.
    #[must_use]
    pub fn chart(&self) -> ChartData {
        chart_data(
            &self.state,
            &self.snapshot.result,
            &self.config.curve,
            self.config.resistance_floor,
        )
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SimulatorConfig::default())
    }
}

fn accept(control: &'static str, spec: &Control, value: Scalar) -> Result<Scalar, OhmLabError> {
    if !value.is_finite() {
        return Err(OhmLabError::NonFiniteInput { control, value });
    }
    Ok(spec.quantize(value))
}

/// Full recomputation of every derived quantity from `state`.
#[must_use]
pub fn evaluate(config: &SimulatorConfig, state: CircuitState) -> Snapshot {
    let result = solve_with_floor(&state, config.resistance_floor);
    let status = LightStatus::from_current(result.current);
    let brightness = brightness_with_max(result.current, config.brightness_max_current);
    debug!(
        voltage = state.voltage,
        resistance = state.resistance,
        current = result.current,
        power = result.power,
        %status,
        "recomputed circuit"
    );
    Snapshot {
        state,
        result,
        status,
        brightness,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn starts_at_twelve_volts_fifty_ohms() {
        let session = Session::default();
        let snap = session.snapshot();
        assert_eq!(snap.state, CircuitState::new(12.0, 50.0));
        assert_relative_eq!(snap.result.current, 0.24, epsilon = 1.0e-12);
        assert_relative_eq!(snap.result.power, 2.88, epsilon = 1.0e-12);
        assert_eq!(snap.status, LightStatus::Dim);
        assert_relative_eq!(snap.brightness, 0.02, epsilon = 1.0e-12);
    }

    #[test]
    fn each_input_recomputes_everything() {
        let mut session = Session::default();
        session.set_voltage(24.0).expect("finite");
        let snap = session.set_resistance(1.0).expect("finite");
        assert_relative_eq!(snap.result.current, 24.0);
        assert_relative_eq!(snap.result.power, 576.0);
        assert_eq!(snap.status, LightStatus::Blinding);
        assert_relative_eq!(snap.brightness, 1.0);
        assert!(snap.bulb().white_hot);
        assert_eq!(session.snapshot(), snap);
    }

    #[test]
    fn inputs_are_clamped_and_snapped() {
        let mut session = Session::default();
        let snap = session.set_resistance(0.0).expect("finite");
        assert_relative_eq!(snap.state.resistance, 1.0);
        let snap = session.set_voltage(99.0).expect("finite");
        assert_relative_eq!(snap.state.voltage, 24.0);
        let snap = session.apply(Input::Resistance(33.3)).expect("finite");
        assert_relative_eq!(snap.state.resistance, 33.5);
    }

    #[test]
    fn non_finite_input_leaves_state_alone() {
        let mut session = Session::default();
        let before = session.snapshot();
        let err = session.set_voltage(Scalar::NAN).unwrap_err();
        assert!(matches!(err, OhmLabError::NonFiniteInput { control: "voltage", .. }));
        assert!(session.set_resistance(Scalar::INFINITY).is_err());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn chart_marker_follows_session() {
        let mut session = Session::default();
        session.set_resistance(20.0).expect("finite");
        let chart = session.chart();
        assert_relative_eq!(chart.marker.resistance, 20.0);
        assert_relative_eq!(chart.marker.current, 0.6, epsilon = 1.0e-12);
        assert_eq!(chart.points.len(), 50);
    }

    #[test]
    fn custom_brightness_scale_is_honoured() {
        let config = SimulatorConfig {
            brightness_max_current: 0.48,
            ..SimulatorConfig::default()
        };
        let session = Session::new(config);
        assert_relative_eq!(session.snapshot().brightness, 0.5, epsilon = 1.0e-12);
    }

    #[test]
    fn chart_uses_configured_floor() {
        let config = SimulatorConfig::from_yaml_str(
            "resistance: { min: 1.0, max: 100.0, step: 0.5, default: 50.0 }\nresistance_floor: 5.0\n",
        )
        .expect("valid");
        let mut session = Session::new(config);
        let snap = session.set_resistance(1.0).expect("finite");
        assert_relative_eq!(snap.result.current, 2.4, epsilon = 1.0e-12);
        let chart = session.chart();
        assert_relative_eq!(chart.marker.resistance, chart.points[0].resistance);
        assert_relative_eq!(chart.marker.current, chart.points[0].current);
    }
}
