//! All kinds of errors in this crate.

use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Unsupported rule type: {0:?}. Expected "normal" or "advanced".
    UnsupportedRuleType(String),
    /// Unsupported edge policy: {0:?}. Expected "absorbing" or "repeating".
    UnsupportedEdgePolicy(String),
    /// Width and height must be positive.
    NonPositive,
    /// Invalid cell key: {0:?}. Expected two comma-separated integers.
    InvalidCellKey(String),
    /// The text form contains no cells.
    EmptyText,
}
