pub mod ljcut;
pub mod none;

pub use ljcut::LJCut;
pub use none::None_;

use enum_dispatch::enum_dispatch;

use crate::{Atoms, Container};

#[enum_dispatch]
#[derive(Clone, Debug)]
pub enum AtomicPotential {
    LJCut,
    None_,
}
impl Default for AtomicPotential {
    fn default() -> Self {
        LJCut::default().into()
    }
}

#[enum_dispatch(AtomicPotential)]
/// Trait for pairwise atomic potentials
pub trait AtomicPotentialTrait {
    /// Get the maximum distance for effective interaction
    fn cutoff_distance(&self) -> f64;

    /// Overwrite the accelerations of `atoms` with the pairwise forces of the
    /// current configuration and return the total potential energy.
    ///
    /// Every unordered pair is visited once, using the nearest periodic
    /// image, and contributes equal and opposite forces to its two atoms.
    fn compute_forces(&self, atoms: &mut Atoms, container: &Container) -> f64;
}
