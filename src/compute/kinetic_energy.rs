use super::vsq;
use crate::Atoms;

/// Kinetic energy per atom (unit mass)
pub fn compute(atoms: &Atoms) -> f64 {
    vsq::sum(atoms) * (0.5 / atoms.num_atoms() as f64)
}
