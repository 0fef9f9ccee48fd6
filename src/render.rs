//! Plain-text views of a [`Snapshot`]: readouts, bulb gauge and I-R plot.

use std::fmt::Write as _;

use crate::math::Scalar;
use crate::simulation::Snapshot;
use crate::status::LightStatus;
use crate::sweep::ChartData;

const GAUGE_WIDTH: usize = 24;

/// `I = V / R` with the numbers filled in.
#[must_use]
pub fn ohm_law_line(snapshot: &Snapshot) -> String {
    format!(
        "{:.3} A = {}V / {:.1}Ω",
        snapshot.result.current, snapshot.state.voltage, snapshot.state.resistance
    )
}

/// `P = V × I` with the numbers filled in.
#[must_use]
pub fn power_line(snapshot: &Snapshot) -> String {
    format!(
        "{:.2} W = {}V × {:.3}A",
        snapshot.result.power, snapshot.state.voltage, snapshot.result.current
    )
}

/// The large "measured current" figure. Flags the reading at full brightness.
#[must_use]
pub fn measured_current(snapshot: &Snapshot) -> String {
    let warn = if snapshot.status == LightStatus::Blinding {
        " (!)"
    } else {
        ""
    };
    format!("{:.2}{warn}", snapshot.result.current())
}

/// Bulb indicator: a brightness gauge plus status badge.
#[must_use]
pub fn bulb_line(snapshot: &Snapshot) -> String {
    let bulb = snapshot.bulb();
    let lit = (bulb.brightness * GAUGE_WIDTH as Scalar).round() as usize;
    let fill = if bulb.white_hot { '#' } else { '*' };
    let mut gauge: String = std::iter::repeat(fill).take(lit).collect();
    gauge.extend(std::iter::repeat('.').take(GAUGE_WIDTH - lit));
    let caption = if bulb.off { " OFF" } else { "" };
    let badge = if bulb.highlight_status {
        snapshot.status.label().to_uppercase()
    } else {
        snapshot.status.label().to_string()
    };
    format!("[{gauge}]{caption}  Status: {badge}")
}

/// Full panel for one snapshot: bulb, controls, figures and formulas.
#[must_use]
pub fn panel(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Bulb            {}", bulb_line(snapshot));
    let _ = writeln!(out, "Voltage (V)     {:.1}", snapshot.state.voltage());
    let _ = writeln!(out, "Resistance (R)  {:.1}", snapshot.state.resistance());
    let _ = writeln!(out, "Current         {}", measured_current(snapshot));
    let _ = writeln!(out, "Ohm's law       I = V / R   {}", ohm_law_line(snapshot));
    let _ = writeln!(out, "Power           P = V × I   {}", power_line(snapshot));
    let _ = writeln!(out, "Dissipated      {:.2}", snapshot.result.power());
    out
}

/// ASCII plot of the I-R curve with the operating point drawn as `o`.
///
/// The x axis spans [`ChartData::X_DOMAIN`]; the y axis runs from zero to the
/// largest plotted current.
#[must_use]
pub fn plot(chart: &ChartData, width: usize, height: usize) -> String {
    let width = width.max(2);
    let height = height.max(2);
    let (x_lo, x_hi) = ChartData::X_DOMAIN;
    let y_hi = chart.y_max().max(Scalar::EPSILON);

    let col = |x: Scalar| -> Option<usize> {
        let t = (x - x_lo) / (x_hi - x_lo);
        (0.0..=1.0)
            .contains(&t)
            .then(|| (t * (width - 1) as Scalar).round() as usize)
    };
    let row = |y: Scalar| -> usize {
        let t = (y / y_hi).clamp(0.0, 1.0);
        height - 1 - (t * (height - 1) as Scalar).round() as usize
    };

    let mut grid = vec![vec![' '; width]; height];
    for p in &chart.points {
        if let Some(c) = col(p.resistance) {
            grid[row(p.current)][c] = '.';
        }
    }
    if let Some(c) = col(chart.marker.resistance) {
        grid[row(chart.marker.current)][c] = 'o';
    }

    let mut out = String::new();
    let _ = writeln!(out, "Current vs. Resistance at {} V", chart.voltage);
    for (i, line) in grid.iter().enumerate() {
        let label = if i == 0 {
            format!("{y_hi:>7.2}")
        } else if i == height - 1 {
            format!("{:>7.2}", 0.0)
        } else {
            " ".repeat(7)
        };
        let body: String = line.iter().collect();
        let _ = writeln!(out, "{label} |{}", body.trim_end());
    }
    let _ = writeln!(out, "{} +{}", " ".repeat(7), "-".repeat(width));
    let left = format!("{x_lo} Ω");
    let right = format!("{x_hi} Ω");
    let gap = width.saturating_sub(left.chars().count() + right.chars().count());
    let _ = writeln!(out, "{}  {left}{}{right}", " ".repeat(7), " ".repeat(gap));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulatorConfig;
    use crate::simulation::{evaluate, Session};
    use crate::circuits::ohm::CircuitState;

    fn snap(v: Scalar, r: Scalar) -> Snapshot {
        evaluate(&SimulatorConfig::default(), CircuitState::new(v, r))
    }

    #[test]
    fn formula_lines_match_readout_format() {
        let s = snap(12.0, 50.0);
        assert_eq!(ohm_law_line(&s), "0.240 A = 12V / 50.0Ω");
        assert_eq!(power_line(&s), "2.88 W = 12V × 0.240A");
        assert_eq!(measured_current(&s), "0.24 A");
    }

    #[test]
    fn half_volt_steps_print_their_fraction() {
        let s = snap(7.5, 2.5);
        assert_eq!(ohm_law_line(&s), "3.000 A = 7.5V / 2.5Ω");
    }

    #[test]
    fn blinding_current_is_flagged() {
        let s = snap(24.0, 1.0);
        assert_eq!(measured_current(&s), "24.00 A (!)");
        assert!(bulb_line(&s).ends_with("Status: MAXIMUM"));
        assert!(bulb_line(&s).starts_with(&format!("[{}]", "#".repeat(GAUGE_WIDTH))));
    }

    #[test]
    fn dim_bulb_gauge_is_mostly_dark() {
        let s = snap(12.0, 50.0);
        let line = bulb_line(&s);
        assert!(line.starts_with(&format!("[{}]", ".".repeat(GAUGE_WIDTH))));
        assert!(line.ends_with("Status: Dim"));
    }

    #[test]
    fn panel_contains_every_readout() {
        let text = panel(&snap(12.0, 50.0));
        for needle in ["12.0 V", "50.0 Ω", "0.24 A", "2.88 W", "I = V / R", "P = V × I"] {
            assert!(text.contains(needle), "missing {needle} in\n{text}");
        }
    }

    #[test]
    fn plot_marks_operating_point_once() {
        let mut session = Session::default();
        session.set_resistance(50.0).expect("finite");
        let text = plot(&session.chart(), 60, 12);
        assert_eq!(text.matches('o').count(), 1);
        assert!(text.contains('.'));
        assert!(text.starts_with("Current vs. Resistance at 12 V"));
        assert!(text.contains("12.00 |"));
    }
}
