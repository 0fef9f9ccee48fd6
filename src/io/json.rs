//! JSON export of snapshots and chart data.

use std::io::Write;

use crate::errors::OhmLabError;
use crate::simulation::Snapshot;
use crate::sweep::ChartData;

/// Serializes a snapshot as pretty-printed JSON followed by a newline.
pub fn write_snapshot_json<W: Write>(mut w: W, snapshot: &Snapshot) -> Result<(), OhmLabError> {
    serde_json::to_writer_pretty(&mut w, snapshot)?;
    writeln!(w)?;
    Ok(())
}

/// Serializes chart data as pretty-printed JSON followed by a newline.
pub fn write_chart_json<W: Write>(mut w: W, chart: &ChartData) -> Result<(), OhmLabError> {
    serde_json::to_writer_pretty(&mut w, chart)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::simulation::Session;

    #[test]
    fn snapshot_fields_are_named() {
        let mut buf = Vec::new();
        write_snapshot_json(&mut buf, &Session::default().snapshot()).expect("serialize");
        let value: Value = serde_json::from_slice(&buf).expect("valid json");
        assert_eq!(value["status"], "dim");
        assert_eq!(value["state"]["voltage"], 12.0);
        assert_eq!(value["state"]["resistance"], 50.0);
        assert!(value["result"]["current"].as_f64().is_some());
    }

    #[test]
    fn chart_round_trips() {
        let chart = Session::default().chart();
        let mut buf = Vec::new();
        write_chart_json(&mut buf, &chart).expect("serialize");
        let back: ChartData = serde_json::from_slice(&buf).expect("deserialize");
        assert_eq!(back.points.len(), chart.points.len());
        assert_eq!(back.marker, chart.marker);
    }
}
