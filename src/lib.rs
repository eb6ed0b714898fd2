//! Molecular dynamics of a Lennard-Jones fluid in a periodic box.
//!
//! An FCC crystal with thermal velocities is integrated with velocity Verlet
//! under the shifted-force LJ potential, using an O(N^2) minimum-image pair
//! scan. Energies and temperature are reported at a fixed interval.

pub mod atomic;
pub mod atoms;
pub mod compute;
pub mod config;
pub mod container;
pub mod error;
pub mod integrators;
pub mod lattice;
pub mod output;
pub mod prelude;
pub mod region;
pub mod simulation;
pub mod utils;

pub use atomic::{AtomicPotential, AtomicPotentialTrait, LJCut, None_};
pub use atoms::{Atoms, VelocityInit};
pub use compute::Thermo;
pub use config::{RunOptions, SimulationParameters};
pub use container::Container;
pub use error::{Error, Result};
pub use integrators::{Integrator, Verlet};
pub use simulation::Simulation;
