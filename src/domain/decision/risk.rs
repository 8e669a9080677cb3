//! Standing risk factors and historical precedents.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DecisionId, Level, OptionId, RiskFactorId};

/// Who raised a risk factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedBy {
    #[default]
    System,
    Ai,
    Human,
}

/// A standing hazard associated with the decision as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub id: RiskFactorId,
    pub description: String,
    pub severity: Level,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub mitigation: String,
    #[serde(default)]
    pub detected_by: DetectedBy,
    /// Options this factor is tied to; empty means it applies to every option.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_options: Vec<OptionId>,
}

impl RiskFactor {
    /// Creates a decision-wide risk factor.
    pub fn new(id: impl Into<RiskFactorId>, description: impl Into<String>, severity: Level) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            severity,
            category: String::new(),
            mitigation: String::new(),
            detected_by: DetectedBy::default(),
            affected_options: Vec::new(),
        }
    }

    /// Scopes the factor to specific options.
    pub fn affecting(mut self, options: Vec<OptionId>) -> Self {
        self.affected_options = options;
        self
    }

    /// Returns true if this factor bears on the given option.
    pub fn applies_to(&self, option_id: &OptionId) -> bool {
        self.affected_options.is_empty() || self.affected_options.contains(option_id)
    }

    /// Returns true for critical severity.
    pub fn is_critical(&self) -> bool {
        self.severity == Level::Critical
    }
}

/// A historical decision similar to the one under analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Precedent {
    pub decision_id: DecisionId,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub chosen_option: String,
    #[serde(default)]
    pub outcome: String,
    /// Category used by precedent stores for matching.
    #[serde(default)]
    pub category: String,
}
