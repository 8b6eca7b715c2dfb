//! Deterministic square spiral on the integer lattice.
//!
//! The spiral starts at the origin and walks one lattice step per item. The walk
//! state is a position `v`, a ring radius `r`, the active axis and a unit step
//! `delta`. After every step, if `|v[axis]| == r` the walk turns: it switches
//! axis, negates `delta` when turning onto the y axis, and grows `r` by one when
//! turning back onto the x axis with a positive `delta`. That growth rule decides
//! which index lands on which ring.
//!
//! Unmirrored, the walk turns clockwise in a y-up frame. [`Winding`] selects
//! how the walk is reported; the default mirrors y so the spiral turns
//! counter-clockwise: `(0,0), (1,0), (1,1), (0,1), (-1,1), ...`.
use glam::IVec2;
use mint::Vector2;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::layout::{LayoutStrategy, Position};

/// Turning direction of the reported spiral, seen in a y-up frame.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Winding {
    /// `(0,0), (1,0), (1,1), (0,1), ...`
    #[default]
    CounterClockwise,
    /// `(0,0), (1,0), (1,-1), (0,-1), ...`, the raw walk.
    Clockwise,
}

impl Winding {
    #[inline]
    fn orient(self, v: IVec2) -> IVec2 {
        match self {
            Winding::CounterClockwise => IVec2::new(v.x, -v.y),
            Winding::Clockwise => v,
        }
    }
}

/// Unbounded iterator over spiral cells.
///
/// Each iterator owns its walk state, so independent iterators never interact
/// and the `n`-th item is the same no matter how many are taken.
#[derive(Debug, Clone)]
pub struct SpiralIter {
    v: IVec2,
    ring: i32,
    axis: usize,
    delta: i32,
    winding: Winding,
}

impl SpiralIter {
    /// Counter-clockwise spiral starting at the origin.
    pub fn new() -> Self {
        Self::with_winding(Winding::default())
    }

    pub fn with_winding(winding: Winding) -> Self {
        Self {
            v: IVec2::ZERO,
            ring: 1,
            axis: 0,
            delta: 1,
            winding,
        }
    }

    #[inline]
    fn step(&mut self) {
        self.v[self.axis] += self.delta;
        if self.v[self.axis].abs() == self.ring {
            self.axis ^= 1;
            if self.axis == 1 {
                self.delta = -self.delta;
            } else if self.delta > 0 {
                self.ring += 1;
            }
        }
    }
}

impl Default for SpiralIter {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SpiralIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        let out = self.winding.orient(self.v);
        self.step();
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// First `count` cells of the counter-clockwise spiral.
pub fn generate(count: usize) -> Vec<Position> {
    spiral_positions_with(count, Winding::default())
}

/// Alias of [`generate`].
pub fn spiral_positions(count: usize) -> Vec<Position> {
    generate(count)
}

/// First `count` cells of the spiral with the given winding.
pub fn spiral_positions_with(count: usize, winding: Winding) -> Vec<Position> {
    trace!(count, ?winding, "generating spiral positions");
    let mut out = Vec::with_capacity(count);
    out.extend(SpiralIter::with_winding(winding).take(count));
    out
}

/// Like [`generate`] for callers holding a signed count. Negative counts are rejected.
pub fn try_spiral_positions(count: i64) -> Result<Vec<Position>> {
    let count = usize::try_from(count).map_err(|_| {
        Error::InvalidArgument(format!("count must be a non-negative integer, got {count}"))
    })?;
    Ok(generate(count))
}

/// Ring of the cell at `index`, without walking the spiral.
///
/// The first `(2k+1)^2` cells fill the square of ring `k`, so index `i` sits on
/// ring `(isqrt(i) + 1) / 2`.
pub fn ring_at(index: usize) -> i32 {
    ((index.isqrt() + 1) / 2) as i32
}

/// Largest absolute coordinate among the first `count` cells.
pub fn spiral_extent(count: usize) -> i32 {
    match count {
        0 => 0,
        n => ring_at(n - 1),
    }
}

/// Square spiral layout strategy.
#[derive(Debug, Clone, Default)]
pub struct SpiralLayout {
    /// Turning direction of the produced cells.
    pub winding: Winding,
}

impl SpiralLayout {
    /// Counter-clockwise spiral layout.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_winding(winding: Winding) -> Self {
        Self { winding }
    }
}

impl LayoutStrategy for SpiralLayout {
    fn generate(&self, count: usize) -> Vec<Vector2<i32>> {
        debug!(count, winding = ?self.winding, "spiral layout");
        spiral_positions_with(count, self.winding)
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::layout::ring_of;

    fn cells(pairs: &[(i32, i32)]) -> Vec<IVec2> {
        pairs.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate(0).is_empty());
        assert!(spiral_positions_with(0, Winding::Clockwise).is_empty());
    }

    #[test]
    fn single_item_sits_at_origin() {
        assert_eq!(generate(1), vec![IVec2::ZERO]);
    }

    #[test]
    fn first_item_is_origin_for_any_count() {
        for n in 1..64 {
            assert_eq!(generate(n)[0], IVec2::ZERO, "n = {n}");
        }
    }

    #[test]
    fn first_nine_cells_match_golden_output() {
        let expected = cells(&[
            (0, 0),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
        ]);
        assert_eq!(generate(9), expected);
    }

    #[test]
    fn second_ring_is_entered_right_of_the_first() {
        let expected = cells(&[
            (2, -1),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
            (0, 2),
            (-1, 2),
            (-2, 2),
            (-2, 1),
            (-2, 0),
            (-2, -1),
            (-2, -2),
            (-1, -2),
            (0, -2),
            (1, -2),
            (2, -2),
            (3, -2),
        ]);
        assert_eq!(&generate(26)[9..], expected.as_slice());
    }

    #[test]
    fn clockwise_matches_the_raw_walk() {
        let expected = cells(&[
            (0, 0),
            (1, 0),
            (1, -1),
            (0, -1),
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
            (2, 1),
            (2, 0),
            (2, -1),
            (2, -2),
        ]);
        assert_eq!(spiral_positions_with(13, Winding::Clockwise), expected);
    }

    #[test]
    fn windings_mirror_each_other_on_y() {
        let ccw = spiral_positions_with(500, Winding::CounterClockwise);
        let cw = spiral_positions_with(500, Winding::Clockwise);
        for (a, b) in ccw.iter().zip(&cw) {
            assert_eq!(*a, IVec2::new(b.x, -b.y));
        }
    }

    #[test]
    fn longer_runs_extend_shorter_ones() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let long = generate(4096);
        for _ in 0..32 {
            let n = (rng.next_u32() % 4096) as usize;
            assert_eq!(generate(n).as_slice(), &long[..n], "n = {n}");
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(generate(1000), generate(1000));
        assert_eq!(spiral_positions(77), generate(77));
    }

    #[test]
    fn cells_are_distinct() {
        let pts = generate(10_000);
        let unique: HashSet<_> = pts.iter().copied().collect();
        assert_eq!(unique.len(), pts.len());
    }

    #[test]
    fn consecutive_cells_are_one_step_apart() {
        let pts = generate(2_000);
        for w in pts.windows(2) {
            let d = (w[1] - w[0]).abs();
            assert_eq!(d.x + d.y, 1, "{:?} -> {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn completed_squares_are_filled() {
        for k in 0..12 {
            let side = 2 * k + 1;
            let pts: HashSet<_> = generate((side * side) as usize).into_iter().collect();
            for x in -k..=k {
                for y in -k..=k {
                    assert!(pts.contains(&IVec2::new(x, y)), "ring {k} misses ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn extent_grows_with_square_root_of_count() {
        for n in [1usize, 10, 100, 1_000, 10_000, 100_000] {
            let extent = generate(n).into_iter().map(ring_of).max().unwrap_or(0);
            let bound = ((n as f64).sqrt() / 2.0).ceil() as i32 + 1;
            assert!(extent <= bound, "n = {n}: extent {extent} > {bound}");
            assert_eq!(extent, spiral_extent(n), "n = {n}");
        }
    }

    #[test]
    fn ring_at_matches_walk() {
        for (i, p) in generate(3_000).into_iter().enumerate() {
            assert_eq!(ring_at(i), ring_of(p), "index {i}");
        }
        assert_eq!(spiral_extent(0), 0);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = try_spiral_positions(-1).expect_err("negative count");
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(try_spiral_positions(9).expect("valid count"), generate(9));
        assert!(try_spiral_positions(0).expect("zero count").is_empty());
    }

    #[test]
    fn iterators_are_independent() {
        let mut a = SpiralIter::new();
        let mut b = SpiralIter::new();
        a.nth(10);
        assert_eq!(b.next(), Some(IVec2::ZERO));
        assert_eq!(a.next(), Some(generate(12)[11]));
    }

    #[test]
    fn strategy_matches_free_function() {
        let layout = SpiralLayout::with_winding(Winding::Clockwise);
        let pts: Vec<IVec2> = layout.generate(50).into_iter().map(IVec2::from).collect();
        assert_eq!(pts, spiral_positions_with(50, Winding::Clockwise));
    }

    #[test]
    fn generation_is_safe_across_threads() {
        let expected = generate(512);
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| generate(512)))
            .collect();
        for h in handles {
            assert_eq!(h.join().expect("thread panicked"), expected);
        }
    }
}
