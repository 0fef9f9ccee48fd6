//! CSV export of the I-R curve.

use std::io::{self, Write};

use crate::sweep::CurvePoint;

/// Writes `resistance,current` rows for each curve sample.
pub fn write_curve_csv<W: Write>(mut w: W, points: &[CurvePoint]) -> io::Result<()> {
    writeln!(w, "resistance,current")?;
    for p in points {
        writeln!(w, "{},{:.6}", p.resistance, p.current)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RESISTANCE_FLOOR;
    use crate::sweep::{current_curve, CurveSpec};

    #[test]
    fn header_then_one_row_per_sample() {
        let points = current_curve(12.0, &CurveSpec::default(), RESISTANCE_FLOOR);
        let mut buf = Vec::new();
        write_curve_csv(&mut buf, &points).expect("in-memory write");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), points.len() + 1);
        assert_eq!(lines[0], "resistance,current");
        assert_eq!(lines[1], "1,12.000000");
        assert_eq!(lines[2], "3,4.000000");
    }
}
