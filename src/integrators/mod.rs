mod verlet;
pub use verlet::Verlet;

use crate::{AtomicPotentialTrait, Atoms, Container};

/// Simulation integrator
pub trait Integrator {
    /// Size of one time step
    fn timestep(&self) -> f64;

    /// Advance positions and velocities by one time step.
    ///
    /// The accelerations in `atoms` must be valid for the current positions
    /// on entry and are valid for the new positions on return. Returns the
    /// potential energy of the new configuration.
    fn step<A: AtomicPotentialTrait>(
        &self,
        atoms: &mut Atoms,
        container: &Container,
        potential: &A,
    ) -> f64;
}
