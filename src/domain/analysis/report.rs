//! Analysis report types - the engine's output for one decision.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{
    Availability, Consequence, DecisionOption, Precedent, ResourceRequirement, RiskFactor,
};
use crate::domain::foundation::{DecisionId, OptionId, Probability, Timestamp};

use super::{CognitiveLoadWarning, DataIntegrityError, RecommendationBasis, TradeoffAnalysis};

/// Aggregate resource state of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    Available,
    Constrained,
    Unavailable,
}

/// Worst-case availability across an option's resource requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAvailability {
    pub status: ResourceStatus,
    /// Conflict notes, or the resource type when no note was given.
    #[serde(default)]
    pub conflicts: Vec<String>,
}

impl ResourceAvailability {
    /// Summarizes requirements; an option needing nothing is available.
    pub fn summarize(requirements: &[ResourceRequirement]) -> Self {
        let worst = requirements
            .iter()
            .map(|r| r.availability)
            .max()
            .unwrap_or(Availability::Available);

        let status = match worst {
            Availability::Available => ResourceStatus::Available,
            Availability::Limited => ResourceStatus::Constrained,
            Availability::Unavailable => ResourceStatus::Unavailable,
        };

        let conflicts = requirements
            .iter()
            .filter(|r| r.availability != Availability::Available || r.conflict.is_some())
            .map(|r| {
                r.conflict
                    .clone()
                    .unwrap_or_else(|| format!("{} {}", r.resource_type, r.availability.as_str()))
            })
            .collect();

        Self { status, conflicts }
    }
}

/// One option after projection and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedOption {
    /// The option with its consequence lists filled in.
    pub option: DecisionOption,
    pub immediate_consequences: Vec<Consequence>,
    pub secondary_consequences: Vec<Consequence>,
    pub trade_off_analysis: TradeoffAnalysis,
    pub resource_availability: ResourceAvailability,
    pub overall_score: f64,
}

impl AnalyzedOption {
    /// Returns the option id.
    pub fn id(&self) -> &OptionId {
        &self.option.id
    }
}

/// The engine's full output for one decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionAnalysis {
    pub decision_id: DecisionId,
    pub analyzed_options: Vec<AnalyzedOption>,
    pub risk_factors: Vec<RiskFactor>,
    pub precedents: Vec<Precedent>,
    pub recommendation: OptionId,
    pub recommendation_basis: RecommendationBasis,
    /// Human-readable qualifications attached to the recommendation.
    pub caveats: Vec<String>,
    /// Option ids in selection order.
    pub ranking: Vec<OptionId>,
    pub ai_confidence: Probability,
    pub cognitive_load_warning: CognitiveLoadWarning,
    #[serde(default)]
    pub integrity_warnings: Vec<DataIntegrityError>,
    pub analyzed_at: Timestamp,
}

impl DecisionAnalysis {
    /// Looks up an analyzed option.
    pub fn option(&self, id: &OptionId) -> Option<&AnalyzedOption> {
        self.analyzed_options.iter().find(|o| o.id() == id)
    }

    /// The analyzed option that was recommended.
    pub fn recommended(&self) -> Option<&AnalyzedOption> {
        self.option(&self.recommendation)
    }
}
