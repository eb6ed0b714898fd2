use super::*;
use crate::{Error, Result};

/// Velocity-Verlet integrator: kick, drift, wrap, force, kick
#[derive(Clone, Copy, Debug)]
pub struct Verlet {
    timestep: f64,
    half_timestep: f64,
}

impl Verlet {
    pub fn new(timestep: f64) -> Result<Self> {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(Error::config(
                "delta_t",
                format!("timestep should be positive, found {}", timestep),
            ));
        }
        Ok(Self {
            timestep,
            half_timestep: 0.5 * timestep,
        })
    }
    /// Half the time step, used by both velocity kicks
    pub fn half_timestep(&self) -> f64 {
        self.half_timestep
    }
    /// Steps the velocities by half a timestep
    fn increment_velocity_halfstep(&self, atoms: &mut Atoms) {
        let half_ts = self.half_timestep;
        for i in 0..atoms.num_atoms() {
            let acc = atoms.accelerations[i];
            atoms.increment_velocity(i, [half_ts * acc[0], half_ts * acc[1], half_ts * acc[2]]);
        }
    }
    /// Steps the positions forward
    fn increment_positions(&self, atoms: &mut Atoms) {
        let ts = self.timestep;
        for i in 0..atoms.num_atoms() {
            let vel = atoms.velocities[i];
            atoms.increment_position(i, [ts * vel[0], ts * vel[1], ts * vel[2]]);
        }
    }
    /// Folds the positions back into the periodic box
    fn apply_boundary_cond(&self, atoms: &mut Atoms, container: &Container) {
        atoms.positions.iter_mut().for_each(|p| container.wrap(p));
    }
}

impl Integrator for Verlet {
    fn timestep(&self) -> f64 {
        self.timestep
    }
    fn step<A: AtomicPotentialTrait>(
        &self,
        atoms: &mut Atoms,
        container: &Container,
        potential: &A,
    ) -> f64 {
        self.increment_velocity_halfstep(atoms);
        self.increment_positions(atoms);
        self.apply_boundary_cond(atoms, container);
        let energy = potential.compute_forces(atoms, container);
        self.increment_velocity_halfstep(atoms);
        energy
    }
}
