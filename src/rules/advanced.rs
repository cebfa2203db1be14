//! The thresholded rule with a probabilistic fallback.

use super::mode_with_count;
use crate::{
    change::ChangeSet,
    edge::Edge,
    grid::Grid,
    neighborhood::{gather, FURTHER, NEAREST},
};
use rand::Rng;
use std::{collections::HashMap, hash::Hash};

/// The thresholded rule.
///
/// For every empty-eligible cell the rule reads two fixed pools through
/// the edge policy, the four axis-adjacent neighbors and the four
/// diagonal ones, drops ignored values, and works down a cascade:
///
/// 1. a value held by more than half of all eight neighbors wins;
/// 2. otherwise a value held by at least three axis-adjacent neighbors
///    wins;
/// 3. otherwise a value held by at least three diagonal neighbors wins;
/// 4. otherwise the overall front-runner is adopted with the rule's
///    percent probability.
///
/// A cell with any votable neighbor marks the step as able to change,
/// whether or not a stage fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvancedRule<V> {
    probability: u32,
    ignore: Vec<V>,
    empty: Vec<V>,
    edge: Edge,
}

impl<V> AdvancedRule<V> {
    /// Creates a rule whose fallback stage fires with `probability`
    /// percent chance, with absorbing edges and empty ignore and empty
    /// sets.
    pub fn new(probability: u32) -> Self {
        AdvancedRule {
            probability,
            ignore: Vec::new(),
            empty: Vec::new(),
            edge: Edge::default(),
        }
    }

    /// Sets the values that never count as votes.
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

    /// The fallback stage's percent probability.
    #[inline]
    pub fn probability(&self) -> u32 {
        self.probability
    }
}

impl<V: Clone + Eq + Hash> AdvancedRule<V> {
    /// Computes one step against `grid` without mutating it.
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
                let mut nearest = gather(&NEAREST, grid, self.edge, x, y);
                nearest.retain(|value| !ignore.contains(value));
                let mut further = gather(&FURTHER, grid, self.edge, x, y);
                further.retain(|value| !ignore.contains(value));
                let mut all = nearest.clone();
                all.extend(further.iter().cloned());

                let (winner, count) = match mode_with_count(&all) {
                    Some(found) => found,
                    None => continue,
                };
                can_change = true;
                // Over half of the eight possible neighbors.
                if count >= 5 {
                    updates.insert((x, y), winner);
                    continue;
                }
                if let Some((value, count)) = mode_with_count(&nearest) {
                    if count >= 3 {
                        updates.insert((x, y), value);
                        continue;
                    }
                }
                if let Some((value, count)) = mode_with_count(&further) {
                    if count >= 3 {
                        updates.insert((x, y), value);
                        continue;
                    }
                }
                if rng.gen_range(0..100) < self.probability {
                    updates.insert((x, y), winner);
                }
            }
        }
        ChangeSet::new(grid.clone(), updates, can_change)
    }
}
