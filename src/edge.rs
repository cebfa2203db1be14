//! Edge policies for reads at or beyond the grid extent.

use crate::grid::Grid;
use educe::Educe;

/// How a neighbor read outside the nominal extent resolves.
///
/// Within the extent both policies agree with a plain [`Grid::get`].
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
pub enum Edge {
    /// Reads the coordinate as given. Outside the extent nothing is
    /// stored, so such reads resolve to the grid default and growth
    /// stops at the border.
    #[educe(Default)]
    Absorbing,
    /// Wraps both coordinates around the extent, joining opposite
    /// borders into a torus.
    Repeating,
}

impl Edge {
    /// Reads the cell at `(x, y)` under this policy.
    #[inline]
    pub fn get<V: Clone>(self, grid: &Grid<V>, x: i32, y: i32) -> V {
        match self {
            Edge::Absorbing => grid.get(x, y),
            Edge::Repeating => grid.get(x.rem_euclid(grid.width()), y.rem_euclid(grid.height())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies_agree_within_extent() {
        let mut grid = Grid::new(3, 3, 0_u8);
        grid.set(1, 2, 9);
        for x in 0..3 {
            for y in 0..3 {
                assert_eq!(
                    Edge::Absorbing.get(&grid, x, y),
                    Edge::Repeating.get(&grid, x, y)
                );
            }
        }
    }

    #[test]
    fn absorbing_reads_default_outside() {
        let mut grid = Grid::new(3, 3, 0_u8);
        grid.set(0, 0, 9);
        assert_eq!(Edge::Absorbing.get(&grid, 3, 0), 0);
        assert_eq!(Edge::Absorbing.get(&grid, -1, -1), 0);
    }

    #[test]
    fn repeating_wraps_both_axes() {
        let mut grid = Grid::new(3, 4, 0_u8);
        grid.set(0, 0, 9);
        grid.set(2, 3, 5);
        assert_eq!(Edge::Repeating.get(&grid, 3, 4), 9);
        assert_eq!(Edge::Repeating.get(&grid, -3, -4), 9);
        assert_eq!(Edge::Repeating.get(&grid, -1, -1), 5);
        assert_eq!(Edge::Repeating.get(&grid, 5, 7), 5);
    }
}
