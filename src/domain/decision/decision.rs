//! Decision - a pending choice requiring human authorization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::foundation::{DecisionId, Level, OptionId, Timestamp};

use super::{DecisionOption, RiskFactor};

/// How intricate the decision is to staff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    #[default]
    Medium,
    High,
}

/// Authorization state of a decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Rules-of-engagement gating state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoeStatus {
    #[default]
    PendingReview,
    Compliant,
    Conditional,
    Restricted,
}

/// A party with a stake in the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub required_consult: bool,
}

/// Situational context of a decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionContext {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub stakeholders: Vec<Stakeholder>,
    #[serde(default)]
    pub political_sensitivity: Level,
    #[serde(default)]
    pub media_visibility: Level,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggering_event: Option<String>,
    #[serde(default)]
    pub related_entities: Vec<String>,
}

/// A pending choice with its candidate options and standing risks.
///
/// A well-formed decision has at least one option; the engine rejects
/// an empty option set rather than inventing a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: DecisionId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub urgency: Level,
    #[serde(default)]
    pub complexity: Complexity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Timestamp>,
    #[serde(default)]
    pub context: DecisionContext,
    #[serde(default)]
    pub options: Vec<DecisionOption>,
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
    #[serde(default)]
    pub required_approvers: Vec<String>,
    #[serde(default)]
    pub status: DecisionStatus,
    #[serde(default)]
    pub roe_status: RoeStatus,
    #[serde(default)]
    pub roe_notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub created_by: String,
}

impl Decision {
    /// Creates a pending decision with no options.
    pub fn new(id: impl Into<DecisionId>, title: impl Into<String>, urgency: Level) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            urgency,
            complexity: Complexity::default(),
            deadline: None,
            context: DecisionContext::default(),
            options: Vec::new(),
            risk_factors: Vec::new(),
            required_approvers: Vec::new(),
            status: DecisionStatus::default(),
            roe_status: RoeStatus::default(),
            roe_notes: String::new(),
            created_at: None,
            created_by: String::new(),
        }
    }

    /// Adds an option, preserving declaration order.
    pub fn with_option(mut self, option: DecisionOption) -> Self {
        self.options.push(option);
        self
    }

    /// Adds a risk factor.
    pub fn with_risk(mut self, factor: RiskFactor) -> Self {
        self.risk_factors.push(factor);
        self
    }

    /// Sets the context category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.context.category = category.into();
        self
    }

    /// Looks up an option by id.
    pub fn option(&self, id: &OptionId) -> Option<&DecisionOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    /// First option id that appears more than once, if any.
    pub fn duplicate_option_id(&self) -> Option<&OptionId> {
        let mut seen = BTreeSet::new();
        self.options
            .iter()
            .map(|o| &o.id)
            .find(|id| !seen.insert(*id))
    }

    /// Counts critical risk factors bearing on the given option.
    pub fn critical_risks_for(&self, option_id: &OptionId) -> usize {
        self.risk_factors
            .iter()
            .filter(|r| r.is_critical() && r.applies_to(option_id))
            .count()
    }

    /// Stakeholders that must be consulted before authorization.
    pub fn required_consultations(&self) -> impl Iterator<Item = &Stakeholder> {
        self.context.stakeholders.iter().filter(|s| s.required_consult)
    }
}
