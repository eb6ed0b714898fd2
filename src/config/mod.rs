//! Control parameters and run options.
//!
//! Parameters come either from the positional text format (see [`input`]) or
//! from a YAML file with named fields. Both are validated before any
//! simulation work starts.

pub mod args;
pub mod input;

pub use args::Args;

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    atomic::{ljcut::DEFAULT_RCUT, LJCut},
    atoms::VelocityInit,
    container::Container,
    lattice::Fcc,
    utils::random::DEFAULT_SEED,
    Error, Result, Verlet,
};

/// Largest system simulated unless configured otherwise
pub const DEFAULT_MAX_ATOMS: usize = 100_000;

/// The six control inputs, immutable once loaded
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Number of FCC unit cells along x, y and z
    pub init_ucell: [usize; 3],
    /// Number density of atoms
    pub density: f64,
    /// Starting temperature
    pub init_temp: f64,
    /// Size of a time step
    pub delta_t: f64,
    /// Number of time steps to simulate
    pub step_limit: usize,
    /// Reporting interval in steps
    pub step_avg: usize,
}

impl SimulationParameters {
    /// Check every field, reporting the first one out of range
    pub fn validate(&self) -> Result<()> {
        if let Some(n) = self.init_ucell.iter().find(|&&n| n == 0) {
            return Err(Error::config(
                "init_ucell",
                format!("unit cell counts must be positive, found {}", n),
            ));
        }
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(Error::config(
                "density",
                format!("must be positive, found {}", self.density),
            ));
        }
        if !(self.init_temp.is_finite() && self.init_temp >= 0.0) {
            return Err(Error::config(
                "init_temp",
                format!("must be non-negative, found {}", self.init_temp),
            ));
        }
        if !(self.delta_t.is_finite() && self.delta_t > 0.0) {
            return Err(Error::config(
                "delta_t",
                format!("must be positive, found {}", self.delta_t),
            ));
        }
        if self.step_avg == 0 {
            return Err(Error::config("step_avg", "must be at least 1"));
        }
        Ok(())
    }

    /// Number of atoms in the lattice, `4 * nx * ny * nz`, or `None` if it
    /// does not fit in `usize`
    pub fn num_atoms(&self) -> Option<usize> {
        self.init_ucell
            .iter()
            .try_fold(Fcc::atoms_per_cell(), |acc, &n| acc.checked_mul(n))
    }

    /// Atom count, checked against the capacity before anything is allocated
    pub fn check_capacity(&self, max_atoms: usize) -> Result<usize> {
        match self.num_atoms() {
            Some(n) if n <= max_atoms => Ok(n),
            requested => Err(Error::Capacity {
                requested: requested.unwrap_or(usize::MAX),
                max: max_atoms,
            }),
        }
    }

    /// Box geometry and potential constants
    pub fn derive(&self, cutoff: f64) -> Result<DerivedConstants> {
        self.validate()?;
        let derived = DerivedConstants {
            integrator: Verlet::new(self.delta_t)?,
            container: Container::from_density(self.init_ucell, self.density)?,
            potential: LJCut::new(cutoff)?,
        };
        debug!(
            region = ?derived.container.region(),
            uc = derived.potential.uc(),
            duc = derived.potential.duc(),
            "derived constants"
        );
        Ok(derived)
    }

    pub fn from_yaml_str(text: &str) -> Result<ConfigFile> {
        let config: ConfigFile = serde_yml::from_str(text)
            .map_err(|e| Error::config("config", e.to_string()))?;
        config.parameters.validate()?;
        Ok(config)
    }
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

/// Quantities computed once from the parameters
#[derive(Clone, Debug)]
pub struct DerivedConstants {
    /// Velocity-Verlet integrator carrying `DeltaT` and its half `DeltaTH`
    pub integrator: Verlet,
    /// Periodic box, `Region` and `RegionH`
    pub container: Container,
    /// Shifted-force LJ potential carrying `Uc` and `Duc`
    pub potential: LJCut,
}

/// Settings outside the six control inputs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunOptions {
    /// Capacity of the atom arrays
    pub max_atoms: usize,
    /// Seed of the velocity generator
    pub seed: u64,
    pub velocity_init: VelocityInit,
    /// LJ cutoff radius
    pub cutoff: f64,
}
impl Default for RunOptions {
    fn default() -> Self {
        Self {
            max_atoms: DEFAULT_MAX_ATOMS,
            seed: DEFAULT_SEED,
            velocity_init: VelocityInit::default(),
            cutoff: DEFAULT_RCUT,
        }
    }
}

/// Layout of a YAML configuration file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(flatten)]
    pub parameters: SimulationParameters,
    #[serde(default)]
    pub options: RunOptions,
}
