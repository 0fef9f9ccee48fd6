#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Fixed model parameters, thresholds and slider ranges.
pub mod constants;
/// Strongly typed unit helpers and quantity abstractions.
pub mod units;
/// Shared numerical utilities (clamping, step snapping, ranges).
pub mod math;
/// The Ohm's law circuit model.
pub mod circuits;
/// Bulb status classification and brightness.
pub mod status;
/// Current-vs-resistance sweeps for the chart.
pub mod sweep;
/// Session state and event-driven recomputation.
pub mod simulation;
/// Simulator configuration loading and validation.
pub mod config;
/// Plain-text rendering of readouts, bulb and chart.
pub mod render;
/// CSV and JSON export.
pub mod io;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
