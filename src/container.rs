use tracing::debug;

use crate::{
    region::{Rect, Region},
    utils::wrap_centered,
    Error, Result,
};

/// Fully periodic simulation box, centered at the origin.
///
/// The box is orthorhombic and fixed for the whole run. Every coordinate is
/// kept in `[-RegionH, RegionH)` along each axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    rect: Rect,
    region: [f64; 3],
    region_h: [f64; 3],
}
impl Container {
    // Creation

    /// Create a periodic container with the given edge lengths
    pub fn new(region: [f64; 3]) -> Result<Self> {
        if region.iter().any(|&l| !(l.is_finite() && l > 0.0)) {
            return Err(Error::config(
                "region",
                format!("box lengths must be positive, found {:?}", region),
            ));
        }
        Ok(Self {
            rect: Rect::centered(region),
            region,
            region_h: region.map(|l| 0.5 * l),
        })
    }
    /// Box holding `init_ucell` FCC unit cells at the given number density.
    ///
    /// Each cell holds four atoms, so the cell edge is `(density / 4)^(-1/3)`.
    pub fn from_density(init_ucell: [usize; 3], density: f64) -> Result<Self> {
        if !(density.is_finite() && density > 0.0) {
            return Err(Error::config(
                "density",
                format!("must be positive, found {}", density),
            ));
        }
        let cell = (density / 4.0).powf(1.0 / 3.0);
        let region = init_ucell.map(|n| n as f64 / cell);
        debug!(?region, "derived box geometry");
        Self::new(region)
    }

    // Getters

    /// Edge lengths
    pub fn region(&self) -> [f64; 3] {
        self.region
    }
    /// Half edge lengths
    pub fn region_h(&self) -> [f64; 3] {
        self.region_h
    }
    /// A reference to the rectangular box
    pub fn rect(&self) -> &Rect {
        &self.rect
    }
    pub fn volume(&self) -> f64 {
        self.rect.volume()
    }
    pub fn contains(&self, coord: &[f64; 3]) -> bool {
        self.rect.contains(coord)
    }

    // Periodic geometry

    /// Whether the nearest image of every atom within `cutoff` is unique,
    /// i.e. the cutoff is at most half of each edge
    pub fn fits_cutoff(&self, cutoff: f64) -> bool {
        self.region_h.iter().all(|&h| cutoff <= h)
    }

    /// Fold a coordinate back into the box
    pub fn wrap(&self, coord: &mut [f64; 3]) {
        for k in 0..3 {
            coord[k] = wrap_centered(coord[k], self.region[k]);
        }
    }
    /// Displacement `from - to` of the nearest periodic image of `to`
    pub fn minimum_image(&self, from: &[f64; 3], to: &[f64; 3]) -> [f64; 3] {
        [
            wrap_centered(from[0] - to[0], self.region[0]),
            wrap_centered(from[1] - to[1], self.region[1]),
            wrap_centered(from[2] - to[2], self.region[2]),
        ]
    }
}
