/// Total energy per atom
pub fn compute(kinetic: f64, potential: f64) -> f64 {
    kinetic + potential
}
