pub mod conservation;
pub mod kinetic_energy;
pub mod potential_energy;
pub mod temperature;
pub mod total_energy;
mod vsq;

pub use conservation::{ConservationMonitor, ConservationState};

use crate::Atoms;

/// Energies per atom and temperature of one configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thermo {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
    pub temperature: f64,
}
impl Thermo {
    /// Reduce the velocities and the pair-summed potential energy
    pub fn evaluate(atoms: &Atoms, potential_total: f64) -> Self {
        let kinetic = kinetic_energy::compute(atoms);
        let potential = potential_energy::compute(potential_total, atoms.num_atoms());
        Self {
            kinetic,
            potential,
            total: total_energy::compute(kinetic, potential),
            temperature: temperature::compute(kinetic),
        }
    }
    pub fn is_finite(&self) -> bool {
        self.kinetic.is_finite() && self.potential.is_finite() && self.total.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn energies_are_per_atom() {
        let mut atoms = Atoms::new(vec![[0.0; 3], [1.0, 0.0, 0.0]], 2).unwrap();
        atoms.set_velocity(0, [1.0, 2.0, 2.0]);
        atoms.set_velocity(1, [0.0, 0.0, 1.0]);
        let thermo = Thermo::evaluate(&atoms, -3.0);
        // (9 + 1) * 0.5 / 2
        assert_relative_eq!(thermo.kinetic, 2.5);
        assert_relative_eq!(thermo.potential, -1.5);
        assert_relative_eq!(thermo.total, 1.0);
        assert_relative_eq!(thermo.temperature, 5.0 / 3.0);
        assert!(thermo.is_finite());
    }

    #[test]
    fn non_finite_energy_is_reported() {
        let atoms = Atoms::new(vec![[0.0; 3]], 1).unwrap();
        assert!(!Thermo::evaluate(&atoms, f64::INFINITY).is_finite());
    }
}
