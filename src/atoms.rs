use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::{
    region::Rect,
    utils::{self, Lcg},
    Error, Result,
};

/// How initial velocities are drawn
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum VelocityInit {
    /// Fixed speed `sqrt(3T)` along an isotropic random direction
    #[default]
    UnitSphere,
    /// Maxwell-Boltzmann components with variance `T`
    Gaussian,
}

/// Atom properties during simulation.
///
/// Positions, velocities and accelerations are co-indexed: the index is the
/// identity of the atom. Mass is 1, so accelerations equal forces.
#[derive(Clone, Debug)]
pub struct Atoms {
    pub positions: Vec<[f64; 3]>,
    pub velocities: Vec<[f64; 3]>,
    pub accelerations: Vec<[f64; 3]>,
}
impl Atoms {
    /// Atoms at rest at the given coordinates
    pub fn new(coords: Vec<[f64; 3]>, max_atoms: usize) -> Result<Self> {
        let num_atoms = coords.len();
        if num_atoms > max_atoms {
            return Err(Error::Capacity {
                requested: num_atoms,
                max: max_atoms,
            });
        }
        Ok(Atoms {
            positions: coords,
            velocities: vec![[0.0; 3]; num_atoms],
            accelerations: vec![[0.0; 3]; num_atoms],
        })
    }
    pub fn num_atoms(&self) -> usize {
        self.positions.len()
    }
    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }
    pub fn velocities(&self) -> &[[f64; 3]] {
        &self.velocities
    }
    pub fn accelerations(&self) -> &[[f64; 3]] {
        &self.accelerations
    }
    pub fn increment_position(&mut self, i: usize, increment: [f64; 3]) {
        self.positions[i][0] += increment[0];
        self.positions[i][1] += increment[1];
        self.positions[i][2] += increment[2];
    }
    pub fn increment_velocity(&mut self, i: usize, increment: [f64; 3]) {
        self.velocities[i][0] += increment[0];
        self.velocities[i][1] += increment[1];
        self.velocities[i][2] += increment[2];
    }
    pub fn set_velocity(&mut self, i: usize, new_vel: [f64; 3]) {
        self.velocities[i] = new_vel;
    }

    /// Draw thermal velocities for `temperature` and remove the net momentum
    pub fn set_temperature(
        &mut self,
        temperature: f64,
        method: VelocityInit,
        rng: &mut Lcg,
    ) -> Result<()> {
        if !(temperature.is_finite() && temperature >= 0.0) {
            return Err(Error::config(
                "init_temp",
                format!("must be non-negative, found {}", temperature),
            ));
        }
        match method {
            VelocityInit::UnitSphere => {
                let v_mag = (3.0 * temperature).sqrt();
                for i in 0..self.num_atoms() {
                    let e = utils::rand_vec3(rng);
                    self.velocities[i] = [v_mag * e[0], v_mag * e[1], v_mag * e[2]];
                }
            }
            VelocityInit::Gaussian => {
                let dist = Normal::new(0.0, temperature.sqrt())
                    .map_err(|e| Error::config("init_temp", e.to_string()))?;
                for i in 0..self.num_atoms() {
                    self.velocities[i] = [dist.sample(rng), dist.sample(rng), dist.sample(rng)];
                }
            }
        }
        self.zero_momentum();
        Ok(())
    }

    /// Subtract the mean velocity from every atom
    pub fn zero_momentum(&mut self) {
        let n = self.num_atoms();
        if n == 0 {
            return;
        }
        let v_sum = self.net_momentum();
        let v_mean = v_sum.map(|s| s / n as f64);
        for v in self.velocities.iter_mut() {
            for k in 0..3 {
                v[k] -= v_mean[k];
            }
        }
    }
    /// Sum of velocities (unit mass)
    pub fn net_momentum(&self) -> [f64; 3] {
        sum(&self.velocities)
    }
    /// Sum of accelerations, i.e. the net force on the system
    pub fn net_acceleration(&self) -> [f64; 3] {
        sum(&self.accelerations)
    }

    /// Bounding box of all positions (`min_ext`, `max_ext`)
    pub fn extents(&self) -> Option<Rect> {
        Rect::enclosing(&self.positions)
    }

    /// Name of the first per-atom quantity holding a NaN or infinity
    pub fn first_non_finite(&self) -> Option<&'static str> {
        let finite = |v: &Vec<[f64; 3]>| v.iter().flatten().all(|x| x.is_finite());
        if !finite(&self.positions) {
            Some("position")
        } else if !finite(&self.velocities) {
            Some("velocity")
        } else if !finite(&self.accelerations) {
            Some("acceleration")
        } else {
            None
        }
    }
}

fn sum(vectors: &[[f64; 3]]) -> [f64; 3] {
    vectors.iter().fold([0.0; 3], |acc, v| {
        [acc[0] + v[0], acc[1] + v[1], acc[2] + v[2]]
    })
}
