//! Command-line entry point.
//!
//! ```text
//! ljmd < md.in
//! ljmd --config run.yaml --seed 42
//! ```
//!
//! Diagnostics go to stdout, logs to stderr.

use std::{
    fs::File,
    io::{self, BufWriter},
};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use ljmd::{
    config::{input, Args, RunOptions, SimulationParameters},
    Simulation,
};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    setup_logging(&args.log_level);

    let (params, options) = load_parameters(&args)?;
    info!(?params, ?options, "configuration loaded");

    let mut simulation =
        Simulation::new(params, &options).wrap_err("Failed to set up the simulation")?;

    let stdout = io::stdout();
    let mut output = simulation.output(BufWriter::new(stdout.lock()));
    simulation
        .run(&mut output)
        .wrap_err_with(|| format!("Simulation aborted at step {}", simulation.step_count()))?;

    Ok(())
}

fn setup_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_parameters(args: &Args) -> Result<(SimulationParameters, RunOptions)> {
    if let Some(path) = &args.config {
        info!("Reading configuration from: {}", path.display());
        let config = SimulationParameters::from_yaml_file(path)
            .wrap_err_with(|| format!("Unable to load configuration file: {}", path.display()))?;
        return Ok((config.parameters, args.apply(config.options)));
    }

    let params = match &args.input {
        Some(path) => {
            info!("Reading parameters from: {}", path.display());
            let file = File::open(path)
                .wrap_err_with(|| format!("Unable to open input file: {}", path.display()))?;
            input::read(file)
        }
        None => input::read(io::stdin().lock()),
    }
    .wrap_err("Failed to read control parameters")?;

    Ok((params, args.apply(RunOptions::default())))
}
