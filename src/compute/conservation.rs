//! Conservation monitoring.
//!
//! Without a thermostat the total energy and the momentum are constants of
//! motion; their drift measures integration error.

use super::Thermo;
use crate::{utils::norm_squared, Atoms};

/// Baseline quantities recorded after initialization
#[derive(Clone, Copy, Debug)]
pub struct ConservationState {
    pub baseline_energy: f64,
    pub baseline_momentum: [f64; 3],
}
impl ConservationState {
    pub fn new(atoms: &Atoms, thermo: &Thermo) -> Self {
        Self {
            baseline_energy: thermo.total,
            baseline_momentum: atoms.net_momentum(),
        }
    }
}

/// Deviation from the baseline at the current step
#[derive(Clone, Copy, Debug)]
pub struct ConservationMonitor {
    /// Relative energy error |E - E0| / |E0|
    pub energy_error: f64,
    /// Magnitude of the momentum change |p - p0|
    pub momentum_error: f64,
}
impl ConservationMonitor {
    pub fn check(baseline: &ConservationState, atoms: &Atoms, thermo: &Thermo) -> Self {
        let de = (thermo.total - baseline.baseline_energy).abs();
        // Avoid division by zero
        let energy_error = if baseline.baseline_energy.abs() > 1e-12 {
            de / baseline.baseline_energy.abs()
        } else {
            de
        };
        let p = atoms.net_momentum();
        let p0 = baseline.baseline_momentum;
        let dp = [p[0] - p0[0], p[1] - p0[1], p[2] - p0[2]];
        Self {
            energy_error,
            momentum_error: norm_squared(&dp).sqrt(),
        }
    }
    pub fn within(&self, energy_tolerance: f64) -> bool {
        self.energy_error <= energy_tolerance
    }
}
