//! Neighborhood kernels and neighbor sampling.

use crate::{edge::Edge, grid::Grid};
use rand::Rng;

/// Offsets of the four axis-adjacent neighbors.
pub(crate) const NEAREST: [(i32, i32); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Offsets of the four diagonal neighbors.
pub(crate) const FURTHER: [(i32, i32); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];

/// Offsets of the full ring of eight neighbors.
pub(crate) const MOORE: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Reads the cells at `offsets` relative to `(x, y)` under `edge`.
///
/// Values appear in offset order, duplicates included; wrapping can
/// make several offsets land on the same cell.
pub(crate) fn gather<V: Clone>(
    offsets: &[(i32, i32)],
    grid: &Grid<V>,
    edge: Edge,
    x: i32,
    y: i32,
) -> Vec<V> {
    offsets
        .iter()
        .map(|&(dx, dy)| edge.get(grid, x + dx, y + dy))
        .collect()
}

/// A neighborhood kernel: one or more alternative groups of offsets.
///
/// Sampling a kernel with several groups picks one group uniformly at
/// random and reads every offset in it, so the effective neighborhood
/// alternates between the sub-patterns across calls. A single-group
/// kernel never consumes randomness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    groups: Vec<Vec<(i32, i32)>>,
}

impl Kernel {
    /// Creates a kernel from explicit offset groups.
    pub fn new(groups: Vec<Vec<(i32, i32)>>) -> Self {
        Kernel { groups }
    }

    /// The four axis-adjacent neighbors.
    pub fn von_neumann() -> Self {
        Kernel::new(vec![NEAREST.to_vec()])
    }

    /// The full ring of eight neighbors.
    pub fn moore() -> Self {
        Kernel::new(vec![MOORE.to_vec()])
    }

    /// The four diagonal neighbors.
    pub fn further_moore() -> Self {
        Kernel::new(vec![FURTHER.to_vec()])
    }

    /// The offset groups.
    #[inline]
    pub fn groups(&self) -> &[Vec<(i32, i32)>] {
        &self.groups
    }

    /// Reads the neighbors of `(x, y)` through one of the kernel's
    /// groups.
    ///
    /// With several groups the group is drawn from `rng`; with one the
    /// draw is skipped. A kernel without groups samples to nothing.
    pub fn sample<V, R>(&self, grid: &Grid<V>, edge: Edge, x: i32, y: i32, rng: &mut R) -> Vec<V>
    where
        V: Clone,
        R: Rng + ?Sized,
    {
        let group = match self.groups.len() {
            0 => return Vec::new(),
            1 => &self.groups[0],
            n => &self.groups[rng.gen_range(0..n)],
        };
        gather(group, grid, edge, x, y)
    }
}

impl Default for Kernel {
    /// The von Neumann kernel.
    fn default() -> Self {
        Kernel::von_neumann()
    }
}
