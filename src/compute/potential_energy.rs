/// Potential energy per atom from the pair total
pub fn compute(total: f64, num_atoms: usize) -> f64 {
    total / num_atoms as f64
}
