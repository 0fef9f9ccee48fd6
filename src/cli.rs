use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ohm_lab::errors::OhmLabError;
use ohm_lab::io::{write_chart_json, write_curve_csv, write_snapshot_json};
use ohm_lab::render;
use ohm_lab::simulation::{Input, Session};
use tracing::{debug, warn};

pub const PLOT_WIDTH: usize = 60;
pub const PLOT_HEIGHT: usize = 14;

#[derive(Parser, Debug)]
#[command(name = "ohm-lab", version, about = "Interactive Ohm's law simulator")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, global = true, help = "YAML file overriding slider ranges and view settings")]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (-v, -vv)")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one operating point.
    Solve {
        #[arg(long, allow_negative_numbers = true)]
        voltage: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        resistance: Option<f64>,
    },
    /// Print the current-vs-resistance curve for a voltage.
    Curve {
        #[arg(long, allow_negative_numbers = true)]
        voltage: Option<f64>,
        #[arg(long, allow_negative_numbers = true, help = "Operating point to mark")]
        resistance: Option<f64>,
        #[arg(long, default_value_t = false, help = "Emit resistance,current rows")]
        csv: bool,
    },
    /// Read `v <volts>`, `r <ohms>`, `show`, `quit` from stdin.
    Interactive,
}

/// A parsed line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Apply(Input),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "commands: v <volts> | r <ohms> | show | help | quit";

pub fn parse_command(line: &str) -> Result<Option<Command>, OhmLabError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let value = |words: &mut std::str::SplitWhitespace<'_>| -> Result<f64, OhmLabError> {
        words
            .next()
            .and_then(|w| w.parse::<f64>().ok())
            .ok_or_else(|| OhmLabError::UnknownInput(line.trim().to_string()))
    };
    let command = match head.to_ascii_lowercase().as_str() {
        "v" | "voltage" => Command::Apply(Input::Voltage(value(&mut words)?)),
        "r" | "resistance" => Command::Apply(Input::Resistance(value(&mut words)?)),
        "show" | "s" => Command::Show,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(OhmLabError::UnknownInput(line.trim().to_string())),
    };
    if words.next().is_some() {
        return Err(OhmLabError::UnknownInput(line.trim().to_string()));
    }
    Ok(Some(command))
}

pub fn run(cli: Cli, session: &mut Session) -> Result<()> {
    let stdout = std::io::stdout();
    match cli.command {
        Commands::Solve {
            voltage,
            resistance,
        } => {
            if let Some(v) = voltage {
                session.set_voltage(v)?;
            }
            if let Some(r) = resistance {
                session.set_resistance(r)?;
            }
            let snapshot = session.snapshot();
            let mut out = stdout.lock();
            if cli.json {
                write_snapshot_json(&mut out, &snapshot)?;
            } else {
                write!(out, "{}", render::panel(&snapshot))?;
            }
        }
        Commands::Curve {
            voltage,
            resistance,
            csv,
        } => {
            if let Some(v) = voltage {
                session.set_voltage(v)?;
            }
            if let Some(r) = resistance {
                session.set_resistance(r)?;
            }
            let chart = session.chart();
            let mut out = stdout.lock();
            if csv {
                write_curve_csv(&mut out, &chart.points).context("writing curve csv")?;
            } else if cli.json {
                write_chart_json(&mut out, &chart)?;
            } else {
                write!(out, "{}", render::plot(&chart, PLOT_WIDTH, PLOT_HEIGHT))?;
            }
        }
        Commands::Interactive => {
            let stdin = std::io::stdin();
            interactive(session, stdin.lock(), stdout.lock(), cli.json)?;
        }
    }
    Ok(())
}

/// Event loop: every accepted input recomputes the circuit and redraws.
pub fn interactive<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
    json: bool,
) -> Result<()> {
    let redraw = |session: &Session, out: &mut W| -> Result<()> {
        let snapshot = session.snapshot();
        if json {
            serde_json::to_writer(&mut *out, &snapshot)?;
            writeln!(out)?;
        } else {
            write!(out, "{}", render::panel(&snapshot))?;
            write!(out, "{}", render::plot(&session.chart(), PLOT_WIDTH, PLOT_HEIGHT))?;
        }
        out.flush()?;
        Ok(())
    };

    if !json {
        writeln!(out, "{HELP}")?;
    }
    redraw(&*session, &mut out)?;
    for line in input.lines() {
        let line = line.context("reading stdin")?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Apply(event))) => match session.apply(event) {
                Ok(_) => redraw(&*session, &mut out)?,
                Err(err) => {
                    warn!(%err, "input rejected");
                    writeln!(out, "error: {err}")?;
                }
            },
            Ok(Some(Command::Show)) => redraw(&*session, &mut out)?,
            Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(Command::Quit)) => break,
            Err(err) => {
                debug!(%err, "unparsed input");
                writeln!(out, "error: {err}")?;
                writeln!(out, "{HELP}")?;
            }
        }
    }
    Ok(())
}
