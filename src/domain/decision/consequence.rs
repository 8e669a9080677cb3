//! Consequences - projected effects of choosing an option, with cascades.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::domain::foundation::{Level, Probability};

/// One of the six fixed impact domains a consequence lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Operational,
    Political,
    Personnel,
    #[serde(alias = "budget")]
    Economic,
    Environmental,
    Legal,
}

impl Dimension {
    /// All dimensions in canonical report order.
    pub const ALL: [Dimension; 6] = [
        Dimension::Operational,
        Dimension::Political,
        Dimension::Personnel,
        Dimension::Economic,
        Dimension::Environmental,
        Dimension::Legal,
    ];

    /// Returns the wire name of the dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Operational => "operational",
            Dimension::Political => "political",
            Dimension::Personnel => "personnel",
            Dimension::Economic => "economic",
            Dimension::Environmental => "environmental",
            Dimension::Legal => "legal",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a consequence favors or disfavors the option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsequenceKind {
    Positive,
    Negative,
}

impl ConsequenceKind {
    /// Infers the kind from a signed impact; zero counts as positive.
    pub fn from_impact(impact_score: i32) -> Self {
        if impact_score < 0 {
            ConsequenceKind::Negative
        } else {
            ConsequenceKind::Positive
        }
    }

    /// Returns true if `impact_score` carries the sign this kind requires.
    pub fn admits(&self, impact_score: i32) -> bool {
        match self {
            ConsequenceKind::Positive => impact_score >= 0,
            ConsequenceKind::Negative => impact_score <= 0,
        }
    }

    /// Forces the sign of `impact_score` to match this kind.
    pub fn align(&self, impact_score: i32) -> i32 {
        match self {
            ConsequenceKind::Positive => impact_score.saturating_abs(),
            ConsequenceKind::Negative => -impact_score.saturating_abs(),
        }
    }
}

impl fmt::Display for ConsequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsequenceKind::Positive => write!(f, "positive"),
            ConsequenceKind::Negative => write!(f, "negative"),
        }
    }
}

/// How far out a consequence lands.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    #[default]
    Immediate,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

/// A fully-populated projected effect of choosing an option.
///
/// `cascades` holds the second-order effects this consequence triggers.
/// Cascades form a finite forest; the data contract forbids self-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consequence {
    pub domain: Dimension,
    #[serde(rename = "type")]
    pub kind: ConsequenceKind,
    pub severity: Level,
    pub description: String,
    pub likelihood: Probability,
    pub impact_score: i32,
    pub timeframe: Timeframe,
    #[serde(default)]
    pub affected_metrics: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cascades: Vec<Consequence>,
}

impl Consequence {
    /// Creates a consequence whose kind follows the sign of `impact_score`.
    pub fn new(
        domain: Dimension,
        description: impl Into<String>,
        likelihood: f64,
        impact_score: i32,
    ) -> Self {
        Self {
            domain,
            kind: ConsequenceKind::from_impact(impact_score),
            severity: Level::default(),
            description: description.into(),
            likelihood: Probability::new(likelihood),
            impact_score,
            timeframe: Timeframe::default(),
            affected_metrics: BTreeSet::new(),
            cascades: Vec::new(),
        }
    }

    /// Sets the severity.
    pub fn with_severity(mut self, severity: Level) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the timeframe.
    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    /// Attaches a second-order consequence.
    pub fn with_cascade(mut self, cascade: Consequence) -> Self {
        self.cascades.push(cascade);
        self
    }

    /// Likelihood-weighted impact; zero-likelihood effects contribute nothing.
    pub fn weighted_impact(&self) -> f64 {
        if self.likelihood.is_zero() {
            return 0.0;
        }
        f64::from(self.impact_score) * self.likelihood.value()
    }

    /// Number of nodes in this consequence's cascade tree, itself included.
    pub fn node_count(&self) -> usize {
        1 + self.cascades.iter().map(Consequence::node_count).sum::<usize>()
    }

    /// Depth of the cascade tree; a consequence without cascades has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.cascades.iter().map(Consequence::depth).max().unwrap_or(0)
    }

    /// Returns a copy without nested cascades.
    pub fn detached(&self) -> Self {
        Self {
            cascades: Vec::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_accepts_budget_alias() {
        let dim: Dimension = serde_json::from_str("\"budget\"").unwrap();
        assert_eq!(dim, Dimension::Economic);
        assert_eq!(serde_json::to_string(&dim).unwrap(), "\"economic\"");
    }

    #[test]
    fn kind_align_forces_sign() {
        assert_eq!(ConsequenceKind::Positive.align(-15), 15);
        assert_eq!(ConsequenceKind::Negative.align(15), -15);
        assert_eq!(ConsequenceKind::Negative.align(-15), -15);
    }

    #[test]
    fn kind_admits_zero_either_way() {
        assert!(ConsequenceKind::Positive.admits(0));
        assert!(ConsequenceKind::Negative.admits(0));
        assert!(!ConsequenceKind::Negative.admits(3));
    }

    #[test]
    fn weighted_impact_scales_by_likelihood() {
        let c = Consequence::new(Dimension::Legal, "review", 0.5, -40);
        assert_eq!(c.weighted_impact(), -20.0);
    }

    #[test]
    fn zero_likelihood_contributes_nothing() {
        let c = Consequence::new(Dimension::Legal, "remote", 0.0, -90);
        assert_eq!(c.weighted_impact(), 0.0);
    }

    #[test]
    fn node_count_and_depth_walk_cascades() {
        let c = Consequence::new(Dimension::Operational, "root", 0.9, 20)
            .with_cascade(
                Consequence::new(Dimension::Political, "child", 0.5, -10)
                    .with_cascade(Consequence::new(Dimension::Legal, "grandchild", 0.2, -5)),
            )
            .with_cascade(Consequence::new(Dimension::Personnel, "sibling", 0.3, -2));

        assert_eq!(c.node_count(), 4);
        assert_eq!(c.depth(), 3);
        assert!(c.detached().cascades.is_empty());
    }

    #[test]
    fn consequence_uses_camel_case_and_type_field() {
        let c = Consequence::new(Dimension::Economic, "cost", 1.0, -12);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"impactScore\":-12"));
        assert!(json.contains("\"type\":\"negative\""));
        assert!(!json.contains("cascades"));
    }
}
