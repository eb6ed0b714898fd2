use crate::{utils::norm_squared, Atoms};

/// Sum of squared speeds over all atoms
pub(super) fn sum(atoms: &Atoms) -> f64 {
    atoms.velocities().iter().map(norm_squared).sum::<f64>()
}
