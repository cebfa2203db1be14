//! Deferred step results.

use crate::grid::{Coord, Grid};
use once_cell::unsync::OnceCell;
use std::collections::HashMap;

/// The outcome of one step, held apart from the grid it was computed
/// against.
///
/// A change set owns the pre-step grid, the staged cell updates, and a
/// flag telling whether the step found anything it could change. The
/// post-step grid is materialized on first request and cached; the
/// pre-step grid itself is never touched, so several change sets can be
/// derived from clones of one grid and compared.
#[derive(Debug)]
pub struct ChangeSet<V> {
    base: Grid<V>,
    updates: HashMap<Coord, V>,
    can_change: bool,
    result: OnceCell<Grid<V>>,
}

impl<V: Clone> ChangeSet<V> {
    pub(crate) fn new(base: Grid<V>, updates: HashMap<Coord, V>, can_change: bool) -> Self {
        ChangeSet {
            base,
            updates,
            can_change,
            result: OnceCell::new(),
        }
    }

    /// The grid the step was computed against.
    #[inline]
    pub fn base(&self) -> &Grid<V> {
        &self.base
    }

    /// The staged cell updates.
    #[inline]
    pub fn updates(&self) -> &HashMap<Coord, V> {
        &self.updates
    }

    /// Whether the step found any cell it could change.
    ///
    /// Under the advanced rule this is raised as soon as an eligible
    /// cell has votable neighbors, even if no threshold fires in the
    /// end, so `true` does not imply [`updates`] is non-empty.
    ///
    /// [`updates`]: ChangeSet::updates
    #[inline]
    pub fn can_change(&self) -> bool {
        self.can_change
    }

    /// The post-step grid: the base overlaid with the updates.
    ///
    /// Computed on first access and cached for later ones.
    pub fn result(&self) -> &Grid<V> {
        self.result.get_or_init(|| {
            let mut grid = self.base.clone();
            for (&(x, y), value) in &self.updates {
                grid.set(x, y, value.clone());
            }
            grid
        })
    }

    /// Consumes the change set, returning the post-step grid.
    pub fn into_result(mut self) -> Grid<V> {
        if let Some(grid) = self.result.take() {
            return grid;
        }
        let mut grid = self.base;
        for ((x, y), value) in self.updates {
            grid.set(x, y, value);
        }
        grid
    }
}
