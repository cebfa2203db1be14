//! The majority-vote rule.

use super::mode;
use crate::{change::ChangeSet, edge::Edge, grid::Grid, neighborhood::Kernel};
use rand::Rng;
use std::{collections::HashMap, hash::Hash};

/// The majority-vote rule.
///
/// Every cell of the nominal extent whose value is in the rule's empty
/// set adopts the most frequent value among its sampled neighbors,
/// skipping neighbors whose value is in the ignore set. Cells holding
/// any other value, and empty cells with no votable neighbors, are left
/// alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicRule<V> {
    kernel: Kernel,
    ignore: Vec<V>,
    empty: Vec<V>,
    edge: Edge,
}

impl<V> BasicRule<V> {
    /// Creates a rule with the von Neumann kernel, absorbing edges, and
    /// empty ignore and empty sets.
    pub fn new() -> Self {
        BasicRule {
            kernel: Kernel::default(),
            ignore: Vec::new(),
            empty: Vec::new(),
            edge: Edge::default(),
        }
    }

    /// Sets the sampling kernel.
    pub fn set_kernel(mut self, kernel: Kernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// Sets the values that never count as votes.
    ///
    /// The grid's own ignore list is honored as well at step time.
    pub fn set_ignore(mut self, ignore: Vec<V>) -> Self {
        self.ignore = ignore;
        self
    }

    /// Sets the values a cell may hold and still be overwritten.
    pub fn set_empty(mut self, empty: Vec<V>) -> Self {
        self.empty = empty;
        self
    }

    /// Sets the edge policy.
    pub fn set_edge(mut self, edge: Edge) -> Self {
        self.edge = edge;
        self
    }

    /// The edge policy neighbors are read with.
    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    /// The sampling kernel.
    #[inline]
    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

impl<V> Default for BasicRule<V> {
    fn default() -> Self {
        BasicRule::new()
    }
}

impl<V: Clone + Eq + Hash> BasicRule<V> {
    /// Computes one step against `grid` without mutating it.
    ///
    /// Every cell is judged against the pre-step grid, so the order the
    /// extent is walked in cannot leak into the outcome.
    pub fn step<R: Rng + ?Sized>(&self, grid: &Grid<V>, rng: &mut R) -> ChangeSet<V> {
        let ignore: Vec<V> = self
            .ignore
            .iter()
            .chain(grid.ignore().iter())
            .cloned()
            .collect();
        let mut updates = HashMap::new();
        let mut can_change = false;
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if !self.empty.contains(&self.edge.get(grid, x, y)) {
                    continue;
                }
                let mut neighbors = self.kernel.sample(grid, self.edge, x, y, rng);
                neighbors.retain(|value| !ignore.contains(value));
                if let Some(winner) = mode(&neighbors) {
                    updates.insert((x, y), winner);
                    can_change = true;
                }
            }
        }
        ChangeSet::new(grid.clone(), updates, can_change)
    }
}
