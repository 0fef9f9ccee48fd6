//! Current-vs-resistance sweeps for the chart view.

use serde::{Deserialize, Serialize};

use crate::circuits::ohm::{current_for, CircuitResult, CircuitState};
use crate::constants::{CURVE_START, CURVE_STEP, CURVE_STOP};
use crate::math::{arange_inclusive, Scalar};

/// One sample of the I-R curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Resistance in ohms.
    pub resistance: Scalar,
    /// Current in amperes at that resistance.
    pub current: Scalar,
}

/// Resistance sampling used to draw the curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSpec {
    /// First resistance sample (Ω).
    pub start: Scalar,
    /// Upper bound (Ω, inclusive when on the grid).
    pub stop: Scalar,
    /// Sample spacing (Ω).
    pub step: Scalar,
}

impl Default for CurveSpec {
    fn default() -> Self {
        Self {
            start: CURVE_START,
            stop: CURVE_STOP,
            step: CURVE_STEP,
        }
    }
}

/// Data backing the chart: the curve for the present voltage and the marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Voltage the curve was computed for.
    pub voltage: Scalar,
    /// Curve samples in increasing resistance order.
    pub points: Vec<CurvePoint>,
    /// Operating point `(resistance, current)`.
    pub marker: CurvePoint,
}

impl ChartData {
    /// X-axis domain (Ω).
    pub const X_DOMAIN: (Scalar, Scalar) = (0.0, 100.0);

    /// Largest current on the curve or at the marker; the y-axis upper bound.
    #[must_use]
    pub fn y_max(&self) -> Scalar {
        self.points
            .iter()
            .map(|p| p.current)
            .fold(self.marker.current, Scalar::max)
    }
}

/// Samples `I = V / max(R, floor)` along `spec` for a fixed `voltage`.
///
/// `floor` must match the one used to solve the operating point, otherwise
/// the marker drifts off the curve.
#[must_use]
pub fn current_curve(voltage: Scalar, spec: &CurveSpec, floor: Scalar) -> Vec<CurvePoint> {
    arange_inclusive(spec.start, spec.stop, spec.step)
        .into_iter()
        .map(|resistance| CurvePoint {
            resistance,
            current: current_for(voltage, resistance, floor),
        })
        .collect()
}

/// Builds the chart for `state` with its already-computed `result`.
#[must_use]
pub fn chart_data(
    state: &CircuitState,
    result: &CircuitResult,
    spec: &CurveSpec,
    floor: Scalar,
) -> ChartData {
    ChartData {
        voltage: state.voltage,
        points: current_curve(state.voltage, spec, floor),
        marker: CurvePoint {
            resistance: state.resistance,
            current: result.current,
        },
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::circuits::ohm::{solve, solve_with_floor};
    use crate::constants::RESISTANCE_FLOOR;

    #[test]
    fn default_curve_samples_odd_resistances() {
        let points = current_curve(12.0, &CurveSpec::default(), RESISTANCE_FLOOR);
        assert_eq!(points.len(), 50);
        assert_relative_eq!(points[0].resistance, 1.0);
        assert_relative_eq!(points[0].current, 12.0);
        assert_relative_eq!(points[49].resistance, 99.0);
        assert_relative_eq!(points[49].current, 12.0 / 99.0, max_relative = 1.0e-12);
    }

    #[test]
    fn curve_is_strictly_decreasing() {
        let points = current_curve(5.0, &CurveSpec::default(), RESISTANCE_FLOOR);
        assert!(points.windows(2).all(|w| w[1].current < w[0].current));
    }

    #[test]
    fn marker_tracks_operating_point() {
        let state = CircuitState::new(12.0, 50.0);
        let result = solve(&state);
        let chart = chart_data(&state, &result, &CurveSpec::default(), RESISTANCE_FLOOR);
        assert_relative_eq!(chart.marker.resistance, 50.0);
        assert_relative_eq!(chart.marker.current, 0.24, epsilon = 1.0e-12);
        assert_relative_eq!(chart.y_max(), 12.0);
    }

    #[test]
    fn raised_floor_flattens_curve_under_marker() {
        let state = CircuitState::new(12.0, 1.0);
        let result = solve_with_floor(&state, 5.0);
        let chart = chart_data(&state, &result, &CurveSpec::default(), 5.0);
        assert_relative_eq!(chart.points[0].resistance, 1.0);
        assert_relative_eq!(chart.points[0].current, 2.4, epsilon = 1.0e-12);
        assert_relative_eq!(chart.marker.current, chart.points[0].current);
        assert_relative_eq!(chart.y_max(), 2.4, epsilon = 1.0e-12);
    }
}
