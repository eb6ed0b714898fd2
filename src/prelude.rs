pub use super::atomic::{AtomicPotential, AtomicPotentialTrait, LJCut, None_};
pub use super::atoms::{Atoms, VelocityInit};
pub use super::compute::{ConservationMonitor, Thermo};
pub use super::config::{input, RunOptions, SimulationParameters};
pub use super::container::Container;
pub use super::error::{Error, Result};
pub use super::integrators::{Integrator, Verlet};
pub use super::lattice::{Fcc, Lattice};
pub use super::output::Output;
pub use super::region::{Rect, Region};
pub use super::simulation::Simulation;
