use super::AtomicPotentialTrait;
use crate::{utils::norm_squared, Atoms, Container, Error, Result};

/// Cutoff radius used when none is given
pub const DEFAULT_RCUT: f64 = 2.5;

/// Lennard-Jones 12-6 potential in reduced units, truncated and shifted so
/// that both the energy and the force vanish at the cutoff (shifted force).
///
/// U(r) = 4 (r^-12 - r^-6) - Uc - Duc (r - rcut)   for r < rcut
#[derive(Clone, Copy, Debug)]
pub struct LJCut {
    rcut: f64,
    rcut2: f64,
    uc: f64,  // U(rcut)
    duc: f64, // dU/dr at rcut
}
impl LJCut {
    pub fn new(rcut: f64) -> Result<Self> {
        if !(rcut.is_finite() && rcut > 0.0) {
            return Err(Error::config(
                "cutoff",
                format!("must be positive, found {}", rcut),
            ));
        }
        Ok(Self::shifted_at(rcut))
    }
    fn shifted_at(rcut: f64) -> Self {
        let rr = rcut * rcut;
        let ri2 = 1.0 / rr;
        let ri6 = ri2 * ri2 * ri2;
        let r1 = rr.sqrt();
        Self {
            rcut,
            rcut2: rr,
            uc: 4.0 * ri6 * (ri6 - 1.0),
            duc: -48.0 * ri6 * (ri6 - 0.5) / r1,
        }
    }
    pub fn rcut(&self) -> f64 {
        self.rcut
    }
    /// Potential shift constant, the unshifted energy at the cutoff
    pub fn uc(&self) -> f64 {
        self.uc
    }
    /// Force shift constant, the unshifted slope at the cutoff
    pub fn duc(&self) -> f64 {
        self.duc
    }

    /// Force factor and energy of a pair at squared distance `rr`.
    ///
    /// The force on the first atom is `factor * d`, `d` being its
    /// displacement from the second atom. Both terms are zero beyond the cutoff.
    pub fn pair(&self, rr: f64) -> (f64, f64) {
        if rr >= self.rcut2 {
            return (0.0, 0.0);
        }
        let ri2 = 1.0 / rr;
        let ri6 = ri2 * ri2 * ri2;
        let r1 = rr.sqrt();
        let factor = 48.0 * ri2 * ri6 * (ri6 - 0.5) + self.duc / r1;
        let energy = 4.0 * ri6 * (ri6 - 1.0) - self.uc - self.duc * (r1 - self.rcut);
        (factor, energy)
    }
}
impl Default for LJCut {
    fn default() -> Self {
        Self::shifted_at(DEFAULT_RCUT)
    }
}

impl AtomicPotentialTrait for LJCut {
    fn cutoff_distance(&self) -> f64 {
        self.rcut
    }
    fn compute_forces(&self, atoms: &mut Atoms, container: &Container) -> f64 {
        let positions = &atoms.positions;
        let accelerations = &mut atoms.accelerations;
        accelerations.iter_mut().for_each(|a| *a = [0.0; 3]);

        let num_atoms = positions.len();
        let mut energy = 0.0;
        for i in 0..num_atoms.saturating_sub(1) {
            for j in (i + 1)..num_atoms {
                let dr = container.minimum_image(&positions[i], &positions[j]);
                let rr = norm_squared(&dr);
                if rr >= self.rcut2 {
                    continue;
                }
                let (factor, pair_energy) = self.pair(rr);
                for k in 0..3 {
                    let f = factor * dr[k];
                    accelerations[i][k] += f;
                    accelerations[j][k] -= f;
                }
                energy += pair_energy;
            }
        }
        energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn pair_atoms(separation: f64) -> (Atoms, Container) {
        let container = Container::new([10.0, 10.0, 10.0]).unwrap();
        let atoms = Atoms::new(vec![[0.0, 0.0, 0.0], [separation, 0.0, 0.0]], 10).unwrap();
        (atoms, container)
    }

    #[test]
    fn default_matches_explicit_cutoff() {
        let a = LJCut::default();
        let b = LJCut::new(2.5).unwrap();
        assert_eq!(a.uc(), b.uc());
        assert_eq!(a.duc(), b.duc());
        assert_eq!(a.rcut(), b.rcut());
        assert!(LJCut::new(0.0).is_err());
    }

    #[test]
    fn energy_and_force_vanish_at_cutoff() {
        let lj = LJCut::default();
        let rc = lj.rcut();
        let dr = 1e-9 * rc;
        let (factor, energy) = lj.pair((rc - dr).powi(2));
        assert_abs_diff_eq!(energy, 0.0, epsilon = 1e-12);
        // radial force is factor * r and grows linearly with the distance
        // to the cutoff
        let force = factor * (rc - dr);
        assert!(force.abs() < dr);
        assert_eq!(lj.pair(rc * rc), (0.0, 0.0));
    }

    #[test]
    fn other_cutoffs_are_shifted_too() {
        for rc in [1.5, 3.0] {
            let lj = LJCut::new(rc).unwrap();
            let (_, energy) = lj.pair((rc * (1.0 - 1e-12)).powi(2));
            assert_abs_diff_eq!(energy, 0.0, epsilon = 1e-12);
            let (factor, _) = lj.pair(1.0);
            assert_relative_eq!(factor, 24.0 + lj.duc(), max_relative = 1e-12);
        }
    }

    #[test]
    fn unshifted_minimum_is_near_two_to_the_sixth() {
        let lj = LJCut::default();
        // the linear shift moves the zero of the force only slightly
        let rmin = 2f64.powf(1.0 / 6.0);
        let (factor, _) = lj.pair(rmin * rmin);
        assert!(factor.abs() < 0.05);
    }

    #[test]
    fn pair_forces_are_opposite() {
        let lj = LJCut::default();
        let (mut atoms, container) = pair_atoms(1.0);
        let energy = lj.compute_forces(&mut atoms, &container);
        let a = atoms.accelerations();
        for k in 0..3 {
            assert_eq!(a[0][k], -a[1][k]);
        }
        // repulsive at r = 1: atom 0 is pushed towards -x
        assert!(a[0][0] < 0.0);
        assert_relative_eq!(energy, lj.pair(1.0).1, max_relative = 1e-14);
    }

    #[test]
    fn interacts_through_the_periodic_boundary() {
        let lj = LJCut::default();
        let container = Container::new([10.0, 10.0, 10.0]).unwrap();
        let mut atoms = Atoms::new(vec![[-4.6, 0.0, 0.0], [4.6, 0.0, 0.0]], 10).unwrap();
        let energy = lj.compute_forces(&mut atoms, &container);
        // nearest images are 0.8 apart
        assert_relative_eq!(energy, lj.pair(0.64).1, max_relative = 1e-12);
        // atom 0 is pushed towards +x, away from the image of atom 1 at -5.4
        assert!(atoms.accelerations()[0][0] > 0.0);
    }

    #[test]
    fn pairs_beyond_cutoff_do_nothing() {
        let lj = LJCut::default();
        let (mut atoms, container) = pair_atoms(3.0);
        assert_eq!(lj.compute_forces(&mut atoms, &container), 0.0);
        assert_eq!(atoms.accelerations(), &[[0.0; 3], [0.0; 3]]);
    }

    #[test]
    fn stale_accelerations_are_overwritten() {
        let lj = LJCut::default();
        let (mut atoms, container) = pair_atoms(3.0);
        atoms.accelerations[0] = [1.0, 2.0, 3.0];
        lj.compute_forces(&mut atoms, &container);
        assert_eq!(atoms.accelerations()[0], [0.0; 3]);
    }
}
