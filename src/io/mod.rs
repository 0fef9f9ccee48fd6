//! I/O helpers for exporting simulator data.

pub mod csv;
pub mod json;

pub use self::csv::write_curve_csv;
pub use self::json::{write_chart_json, write_snapshot_json};
