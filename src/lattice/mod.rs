mod fcc;

pub use fcc::Fcc;

/// A Bravais lattice with a basis, replicated cell by cell
pub trait Lattice {
    /// Edge lengths of one conventional unit cell
    fn cell_lengths(&self) -> [f64; 3];
    /// Basis atoms in fractional cell coordinates
    fn basis(&self) -> &[[f64; 3]];

    /// Coordinates of `ucell[0] x ucell[1] x ucell[2]` cells starting at `origin`.
    ///
    /// Cells are enumerated with Z outermost, then Y, then X, then the basis
    /// atoms; the position in the returned vector is the atom index.
    fn coords(&self, ucell: [usize; 3], origin: [f64; 3]) -> Vec<[f64; 3]> {
        let gap = self.cell_lengths();
        let basis = self.basis();
        let mut coords = Vec::with_capacity(basis.len() * ucell.iter().product::<usize>());
        for nz in 0..ucell[2] {
            for ny in 0..ucell[1] {
                for nx in 0..ucell[0] {
                    let c = [
                        origin[0] + nx as f64 * gap[0],
                        origin[1] + ny as f64 * gap[1],
                        origin[2] + nz as f64 * gap[2],
                    ];
                    for b in basis {
                        coords.push([
                            c[0] + gap[0] * b[0],
                            c[1] + gap[1] * b[1],
                            c[2] + gap[2] * b[2],
                        ]);
                    }
                }
            }
        }
        coords
    }
}
