#![cfg(feature = "serde")]

//! Saves the grid in a serializable form.

use crate::{
    error::Error,
    grid::{Coord, Grid},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A representation of [`Grid`] which can be easily serialized.
///
/// Stored cells are keyed by `"x,y"` strings, so the map survives
/// formats whose object keys must be strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSer<V> {
    /// Width of the grid.
    width: i32,
    /// Height of the grid.
    height: i32,
    /// The value every unset cell reads as.
    default: V,
    /// Values that neighbor sampling should not count as votes.
    ignore: Vec<V>,
    /// The stored cells, keyed `"x,y"`.
    cells: HashMap<String, V>,
}

impl<V: Clone> Grid<V> {
    /// Saves the grid in a serializable form.
    pub fn ser(&self) -> GridSer<V> {
        GridSer {
            width: self.width(),
            height: self.height(),
            default: self.default_value().clone(),
            ignore: self.ignore().to_vec(),
            cells: self
                .cells()
                .iter()
                .map(|(&(x, y), value)| (format!("{},{}", x, y), value.clone()))
                .collect(),
        }
    }
}

impl<V: Clone> GridSer<V> {
    /// Restores the grid from this saved form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositive`] when the saved extent is not
    /// positive, and [`Error::InvalidCellKey`] when a cell key does not
    /// parse as two comma-separated integers.
    pub fn grid(&self) -> Result<Grid<V>, Error> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::NonPositive);
        }
        let mut grid = Grid::new(self.width, self.height, self.default.clone());
        grid.set_ignore(self.ignore.clone());
        for (key, value) in &self.cells {
            let (x, y) = parse_key(key)?;
            grid.set(x, y, value.clone());
        }
        Ok(grid)
    }
}

/// Parses an `"x,y"` cell key.
fn parse_key(key: &str) -> Result<Coord, Error> {
    let mut parts = key.split(',');
    let x = parts.next().and_then(|part| part.trim().parse().ok());
    let y = parts.next().and_then(|part| part.trim().parse().ok());
    match (x, y, parts.next()) {
        (Some(x), Some(y), None) => Ok((x, y)),
        _ => Err(Error::InvalidCellKey(key.to_string())),
    }
}
