pub mod rect;
pub use rect::Rect;

pub trait Region {
    /// Whether the coordinate lies inside the region
    fn contains(&self, coord: &[f64; 3]) -> bool;
}
