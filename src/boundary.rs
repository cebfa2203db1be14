//! Boundary detection between regions of distinct values.

use crate::{
    edge::Edge,
    grid::{Coord, Grid},
    neighborhood::{gather, MOORE},
};

/// The cells of the nominal extent whose ring of eight neighbors holds
/// more than one distinct value.
///
/// The cell's own value does not take part, so a lone cell in a uniform
/// field is not itself a boundary cell; the ring around it is.
pub fn boundary_cells<V: Clone + PartialEq>(grid: &Grid<V>, edge: Edge) -> Vec<Coord> {
    let mut found = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let ring = gather(&MOORE, grid, edge, x, y);
            if ring.iter().any(|value| *value != ring[0]) {
                found.push((x, y));
            }
        }
    }
    found
}

/// Marks the boundary cells of `grid` on a fresh grid of the same
/// extent, `no` everywhere else.
///
/// Each boundary cell is dilated to a centered square of side
/// `2 * size - 1`, so `size` of 1 marks just the cell itself. Dilation
/// writes land outside the extent near the borders and are kept there
/// like any other out-of-range cell. When `generate` is false the whole
/// detection is skipped and a degenerate 1 × 1 grid comes back.
pub fn boundary_grid<V: Clone + PartialEq>(
    grid: &Grid<V>,
    edge: Edge,
    generate: bool,
    size: i32,
    no: V,
    yes: V,
) -> Grid<V> {
    if !generate {
        return Grid::new(1, 1, no);
    }
    let reach = size - 1;
    let mut marked = Grid::new(grid.width(), grid.height(), no);
    for (x, y) in boundary_cells(grid, edge) {
        for dx in -reach..=reach {
            for dy in -reach..=reach {
                marked.set(x + dx, y + dy, yes.clone());
            }
        }
    }
    marked
}
