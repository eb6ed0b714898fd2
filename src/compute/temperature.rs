/// Temperature from the kinetic energy per atom, by equipartition over
/// three degrees of freedom
pub fn compute(kinetic: f64) -> f64 {
    kinetic * 2.0 / 3.0
}
