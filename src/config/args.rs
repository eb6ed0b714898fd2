//! Command-line argument parsing

use std::path::PathBuf;

use clap::Parser;

use super::RunOptions;
use crate::atoms::VelocityInit;

/// Lennard-Jones molecular dynamics in a periodic box.
///
/// Reads the control parameters in positional order from stdin (or --input),
/// or as named fields from a YAML file (--config), and prints one line of
/// time, temperature, potential energy and total energy per reporting interval.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Read positional parameters from this file instead of stdin
    #[arg(short, long, conflicts_with = "config")]
    pub input: Option<PathBuf>,

    /// Read named parameters from a YAML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the maximum number of atoms
    #[arg(long)]
    pub max_atoms: Option<usize>,

    /// Override the seed of the velocity generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override how initial velocities are drawn
    #[arg(long, value_enum)]
    pub velocity_init: Option<VelocityInit>,

    /// Override the potential cutoff radius
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Log filter for stderr, e.g. `info` or `ljmd=debug`
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Command-line flags take precedence over file options
    pub fn apply(&self, options: RunOptions) -> RunOptions {
        RunOptions {
            max_atoms: self.max_atoms.unwrap_or(options.max_atoms),
            seed: self.seed.unwrap_or(options.seed),
            velocity_init: self.velocity_init.unwrap_or(options.velocity_init),
            cutoff: self.cutoff.unwrap_or(options.cutoff),
        }
    }
}
