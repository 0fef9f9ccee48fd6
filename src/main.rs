use anyhow::{Context, Result};
use clap::Parser;
use ohm_lab::config::SimulatorConfig;
use ohm_lab::simulation::Session;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "ohm_lab=info,warn",
        _ => "ohm_lab=debug,debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => SimulatorConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulatorConfig::default(),
    };
    let mut session = Session::new(config);
    cli::run(cli, &mut session)
}
