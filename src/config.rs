//! Building step rules from wire-level descriptors.

use crate::{
    edge::Edge,
    error::Error,
    neighborhood::Kernel,
    rules::{AdvancedRule, BasicRule, StepRule},
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A wire-level description of a step rule.
///
/// Field names follow the request payload, so the serialized form reads
/// `rulesType`, `cells`, `edge` and `advancedProbability`. The rule
/// type and edge policy stay plain strings until [`build`] is called,
/// which turns unknown names into structured errors instead of decode
/// failures.
///
/// [`build`]: RuleDescriptor::build
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RuleDescriptor {
    /// `"normal"` for the majority-vote rule, `"advanced"` for the
    /// thresholded one.
    #[educe(Default(expression = "String::from(\"normal\")"))]
    pub rules_type: String,
    /// Explicit offset groups for the majority-vote kernel.
    ///
    /// `None` or an empty list selects the von Neumann kernel. The
    /// advanced rule pays no attention to this field.
    pub cells: Option<Vec<Vec<(i32, i32)>>>,
    /// `"absorbing"` or `"repeating"`.
    #[educe(Default(expression = "String::from(\"absorbing\")"))]
    pub edge: String,
    /// Percent probability of the advanced rule's fallback stage, in
    /// `[0, 100]`.
    pub advanced_probability: u32,
}

impl RuleDescriptor {
    /// Builds the step rule this descriptor names.
    ///
    /// `ignore` and `empty` come from the caller; the wire form does
    /// not carry them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRuleType`] or
    /// [`Error::UnsupportedEdgePolicy`] when the corresponding string
    /// names neither known variant.
    pub fn build<V>(&self, ignore: Vec<V>, empty: Vec<V>) -> Result<StepRule<V>, Error> {
        let edge = match self.edge.as_str() {
            "absorbing" => Edge::Absorbing,
            "repeating" => Edge::Repeating,
            other => return Err(Error::UnsupportedEdgePolicy(other.to_string())),
        };
        match self.rules_type.as_str() {
            "normal" => {
                let kernel = match &self.cells {
                    Some(groups) if !groups.is_empty() => Kernel::new(groups.clone()),
                    _ => Kernel::von_neumann(),
                };
                Ok(BasicRule::new()
                    .set_kernel(kernel)
                    .set_ignore(ignore)
                    .set_empty(empty)
                    .set_edge(edge)
                    .into())
            }
            "advanced" => Ok(AdvancedRule::new(self.advanced_probability)
                .set_ignore(ignore)
                .set_empty(empty)
                .set_edge(edge)
                .into()),
            other => Err(Error::UnsupportedRuleType(other.to_string())),
        }
    }
}
