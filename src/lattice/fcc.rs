use super::Lattice;
use crate::container::Container;

const FCC_BASIS: [[f64; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.5, 0.5],
    [0.5, 0.0, 0.5],
    [0.5, 0.5, 0.0],
];

/// Face-centered cubic lattice, four atoms per cell
#[derive(Clone, Debug)]
pub struct Fcc {
    gap: [f64; 3],
}
impl Fcc {
    pub fn new(gap: [f64; 3]) -> Self {
        assert!(
            gap.iter().all(|&g| g > 0.0),
            "Lattice constants should be positive, found {:?}",
            gap
        );
        Self { gap }
    }
    /// Lattice that tiles the container with exactly `ucell` cells per axis
    pub fn fill(container: &Container, ucell: [usize; 3]) -> Self {
        let region = container.region();
        Self::new([
            region[0] / ucell[0] as f64,
            region[1] / ucell[1] as f64,
            region[2] / ucell[2] as f64,
        ])
    }
    pub const fn atoms_per_cell() -> usize {
        FCC_BASIS.len()
    }
}
impl Lattice for Fcc {
    fn cell_lengths(&self) -> [f64; 3] {
        self.gap
    }
    fn basis(&self) -> &[[f64; 3]] {
        &FCC_BASIS
    }
}
