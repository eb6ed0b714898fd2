/// Group of useful computations
pub mod computations;
/// Deterministic random numbers for initial velocities
pub mod random;

pub use computations::*;
pub use random::{rand_vec3, Lcg};
