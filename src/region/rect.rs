use super::Region;

/// Axis-aligned rectangular box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    lo: [f64; 3],
    hi: [f64; 3],
}
impl Rect {
    /// Box of the given edge lengths centered at the origin
    pub fn centered(lengths: [f64; 3]) -> Self {
        Self {
            lo: lengths.map(|l| -0.5 * l),
            hi: lengths.map(|l| 0.5 * l),
        }
    }
    /// Smallest box containing every coordinate, or `None` if there are none
    pub fn enclosing(coords: &[[f64; 3]]) -> Option<Self> {
        let first = coords.first()?;
        let mut lo = *first;
        let mut hi = *first;
        for c in coords.iter().skip(1) {
            for k in 0..3 {
                lo[k] = lo[k].min(c[k]);
                hi[k] = hi[k].max(c[k]);
            }
        }
        Some(Self { lo, hi })
    }
    pub fn lo(&self) -> [f64; 3] {
        self.lo
    }
    pub fn hi(&self) -> [f64; 3] {
        self.hi
    }
    pub fn lengths(&self) -> [f64; 3] {
        [
            self.hi[0] - self.lo[0],
            self.hi[1] - self.lo[1],
            self.hi[2] - self.lo[2],
        ]
    }
    pub fn volume(&self) -> f64 {
        self.lengths().iter().product()
    }
}
impl Region for Rect {
    /// Half-open on the upper faces, matching the periodic fold
    fn contains(&self, coord: &[f64; 3]) -> bool {
        (0..3).all(|k| self.lo[k] <= coord[k] && coord[k] < self.hi[k])
    }
}
