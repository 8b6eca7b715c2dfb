//! Layout strategies that assign integer lattice cells to an ordered list of items.
//!
//! A strategy maps item index `i` to cell `i`; callers pair the cells with their
//! own objects. The square spiral in [`spiral`] is the layout used for exhibits
//! that carry no explicit coordinates.
use glam::IVec2;
use mint::Vector2;

pub mod spiral;

pub use spiral::{
    generate, ring_at, spiral_extent, spiral_positions, spiral_positions_with,
    try_spiral_positions, SpiralIter, SpiralLayout, Winding,
};

/// A cell on the integer lattice.
pub type Position = IVec2;

/// Trait for layout strategies.
pub trait LayoutStrategy: Send + Sync {
    /// Produce exactly `count` cells, one per item, in item order.
    fn generate(&self, count: usize) -> Vec<Vector2<i32>>;
}

/// Chebyshev distance of `p` from the origin, i.e. the square ring it lies on.
#[inline]
pub fn ring_of(p: Position) -> i32 {
    p.abs().max_element()
}
