//! The sparse grid and the values its cells hold.

use crate::error::Error;
use rand::Rng;
use std::{
    collections::HashMap,
    fmt::{self, Display},
    ops::Range,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinates of a cell.
///
/// The first component is the horizontal coordinate, the second the
/// vertical one. Coordinates may be negative or exceed the grid extent;
/// the sparse store accepts writes anywhere.
pub type Coord = (i32, i32);

/// An RGB color, the cell value used when grids double as images.
///
/// The wire form is a 3-element list, e.g. `[255, 0, 0]`. Anything
/// else, a bare number included, is rejected when decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Creates a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Draws a color whose three channels are sampled independently
    /// from `range`.
    pub fn random_range<R: Rng + ?Sized>(rng: &mut R, range: Range<u8>) -> Self {
        Rgb(
            rng.gen_range(range.clone()),
            rng.gen_range(range.clone()),
            rng.gen_range(range),
        )
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.0, self.1, self.2)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}

/// A sparse two-dimensional grid of cell values.
///
/// Only cells that were explicitly written are stored; every other
/// coordinate reads as the grid's default value, so a freshly created
/// grid is uniform. The nominal extent bounds iteration and random
/// positions, not storage: writes outside it are kept like any other
/// cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<V> {
    /// Width of the grid.
    width: i32,
    /// Height of the grid.
    height: i32,
    /// The value every unset cell reads as.
    default: V,
    /// Values that neighbor sampling should not count as votes.
    ignore: Vec<V>,
    /// The stored cells.
    cells: HashMap<Coord, V>,
}

impl<V: Clone> Grid<V> {
    /// Creates an empty grid of the given extent.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is not positive.
    pub fn new(width: i32, height: i32, default: V) -> Self {
        assert!(width > 0 && height > 0, "grid extent must be positive");
        Grid {
            width,
            height,
            default,
            ignore: Vec::new(),
            cells: HashMap::new(),
        }
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The value every unset cell reads as.
    #[inline]
    pub fn default_value(&self) -> &V {
        &self.default
    }

    /// Values that neighbor sampling should not count as votes.
    #[inline]
    pub fn ignore(&self) -> &[V] {
        &self.ignore
    }

    /// Replaces the grid's ignore list.
    #[inline]
    pub fn set_ignore(&mut self, ignore: Vec<V>) {
        self.ignore = ignore;
    }

    /// The stored cells.
    #[inline]
    pub fn cells(&self) -> &HashMap<Coord, V> {
        &self.cells
    }

    /// Reads the cell at `(x, y)`.
    ///
    /// Unset coordinates, those outside the nominal extent included,
    /// read as the default value.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> V {
        self.cells.get(&(x, y)).unwrap_or(&self.default).clone()
    }

    /// Writes `value` at `(x, y)`.
    ///
    /// The coordinate is stored as given; nothing clamps it to the
    /// nominal extent.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: V) {
        self.cells.insert((x, y), value);
    }

    /// Whether `(x, y)` holds a stored cell.
    #[inline]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cells.contains_key(&(x, y))
    }

    /// Overwrites every stored cell with `value`.
    ///
    /// Unset cells keep reading as the default.
    pub fn set_all_to(&mut self, value: V) {
        for cell in self.cells.values_mut() {
            *cell = value.clone();
        }
    }

    /// The fraction of the nominal extent that holds stored cells.
    pub fn occupancy(&self) -> f64 {
        self.cells.len() as f64 / (self.width as f64 * self.height as f64)
    }

    /// The cell values of the nominal extent, row by row.
    pub fn rows(&self) -> Vec<Vec<V>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.get(x, y)).collect())
            .collect()
    }

    /// A uniformly random position within the nominal extent.
    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        (
            rng.gen_range(0..self.width),
            rng.gen_range(0..self.height),
        )
    }

    /// A uniformly random position among the stored cells.
    ///
    /// The stored positions are sorted before drawing, so two grids
    /// with the same cells give the same answer to the same generator
    /// state regardless of insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the grid has no stored cells.
    pub fn random_occupied_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Coord {
        let mut occupied: Vec<Coord> = self.cells.keys().copied().collect();
        assert!(!occupied.is_empty(), "no stored cells to draw from");
        occupied.sort_unstable();
        occupied[rng.gen_range(0..occupied.len())]
    }
}

impl<V: Clone + PartialEq> Grid<V> {
    /// A copy of the grid keeping only the stored cells whose value is
    /// in `selection`.
    ///
    /// The copy carries no ignore list. An empty selection yields a
    /// degenerate 1 × 1 grid with the same default, standing in for
    /// "nothing selected".
    pub fn filter_selection(&self, selection: &[V]) -> Self {
        if selection.is_empty() {
            return Grid::new(1, 1, self.default.clone());
        }
        let cells = self
            .cells
            .iter()
            .filter(|&(_, value)| selection.contains(value))
            .map(|(&pos, value)| (pos, value.clone()))
            .collect();
        Grid {
            width: self.width,
            height: self.height,
            default: self.default.clone(),
            ignore: Vec::new(),
            cells,
        }
    }
}

impl<V: Clone + Display> Grid<V> {
    /// Renders the nominal extent as text.
    ///
    /// Cells in a row are joined by single spaces, rows by newlines.
    pub fn to_text(&self) -> String {
        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| self.get(x, y).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Grid<char> {
    /// Parses the text form written by [`to_text`].
    ///
    /// The extent comes from the first line's cell count and the line
    /// count; spaces only separate cells and every remaining character
    /// becomes a stored cell.
    ///
    /// [`to_text`]: Grid::to_text
    pub fn from_text(text: &str, default: char) -> Result<Self, Error> {
        let height = text.lines().count() as i32;
        let width = text
            .lines()
            .next()
            .map_or(0, |line| line.chars().filter(|&c| c != ' ').count())
            as i32;
        if width == 0 || height == 0 {
            return Err(Error::EmptyText);
        }
        let mut grid = Grid::new(width, height, default);
        for (y, line) in text.lines().enumerate() {
            for (x, c) in line.chars().filter(|&c| c != ' ').enumerate() {
                grid.set(x as i32, y as i32, c);
            }
        }
        Ok(grid)
    }
}
