//! Step rules that grow occupied phases into empty cells.
//!
//! A rule walks the nominal extent of a grid, decides a new value for
//! every eligible cell from the values around it, and stages the
//! decisions in a [`ChangeSet`] so the whole step reads the pre-step
//! grid. Two flavors exist: the majority-vote [`BasicRule`] and the
//! thresholded [`AdvancedRule`].

mod advanced;
mod basic;

pub use advanced::AdvancedRule;
pub use basic::BasicRule;

use crate::{change::ChangeSet, edge::Edge, grid::Grid};
use from_variants::FromVariants;
use rand::Rng;
use std::{collections::HashMap, hash::Hash};

/// A step rule of either flavor.
#[derive(Clone, Debug, PartialEq, Eq, FromVariants)]
pub enum StepRule<V> {
    /// Majority vote over a configurable kernel.
    Basic(BasicRule<V>),
    /// Fixed kernels with vote thresholds and a probabilistic fallback.
    Advanced(AdvancedRule<V>),
}

/// Dispatches a method call to the rule inside a [`StepRule`].
macro_rules! dispatch {
    ($self: expr, $rule: ident => $action: expr) => {
        match $self {
            StepRule::Basic($rule) => $action,
            StepRule::Advanced($rule) => $action,
        }
    };
}

impl<V> StepRule<V> {
    /// The edge policy neighbors are read with.
    #[inline]
    pub fn edge(&self) -> Edge {
        dispatch!(self, rule => rule.edge())
    }
}

impl<V: Clone + Eq + Hash> StepRule<V> {
    /// Computes one step against `grid` without mutating it.
    #[inline]
    pub fn step<R: Rng + ?Sized>(&self, grid: &Grid<V>, rng: &mut R) -> ChangeSet<V> {
        dispatch!(self, rule => rule.step(grid, rng))
    }
}

/// The most frequent value of a sequence, with its count.
///
/// Ties break toward the value encountered first, so the winner depends
/// only on the order of `values`, never on hash iteration order.
/// Returns `None` for an empty sequence.
pub(crate) fn mode_with_count<V: Clone + Eq + Hash>(values: &[V]) -> Option<(V, usize)> {
    let mut counts: HashMap<&V, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    let mut best: Option<(&V, usize)> = None;
    for value in values {
        let count = counts[value];
        if best.map_or(true, |(_, n)| count > n) {
            best = Some((value, count));
        }
    }
    best.map(|(value, count)| (value.clone(), count))
}

/// The most frequent value of a sequence.
///
/// Ties break toward the value encountered first; an empty sequence has
/// no mode.
pub fn mode<V: Clone + Eq + Hash>(values: &[V]) -> Option<V> {
    mode_with_count(values).map(|(value, _)| value)
}
