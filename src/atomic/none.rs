use super::AtomicPotentialTrait;
use crate::{Atoms, Container};

/// Non-interacting atoms
#[derive(Clone, Debug, Default)]
pub struct None_ {}
impl None_ {
    pub fn new() -> Self {
        Self {}
    }
}
impl AtomicPotentialTrait for None_ {
    fn cutoff_distance(&self) -> f64 {
        0.0
    }
    fn compute_forces(&self, atoms: &mut Atoms, _container: &Container) -> f64 {
        atoms.accelerations.iter_mut().for_each(|a| *a = [0.0; 3]);
        0.0
    }
}
