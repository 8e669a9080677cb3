//! Trade-off Scorer - per-dimension score deltas against thresholds.

use serde::{Deserialize, Serialize};

use crate::domain::decision::{Consequence, Dimension};
use crate::domain::foundation::{Level, OptionId, Score};

use super::{AnalysisPolicy, DimensionBaseline, ProjectedConsequences};

/// Projected state of one dimension under one option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionAnalysis {
    pub current_score: Score,
    pub projected_impact: f64,
    pub new_score: Score,
    pub threshold: Score,
    pub breaches_threshold: bool,
    pub priority: Level,
}

impl DimensionAnalysis {
    /// Applies a projected impact to a baseline.
    pub fn from_baseline(baseline: &DimensionBaseline, projected_impact: f64) -> Self {
        let new_score = baseline.current_score.shifted(projected_impact);
        Self {
            current_score: baseline.current_score,
            projected_impact,
            new_score,
            threshold: baseline.threshold,
            breaches_threshold: new_score < baseline.threshold,
            priority: baseline.priority,
        }
    }

    /// A breach on a critical-priority dimension.
    pub fn is_critical_breach(&self) -> bool {
        self.breaches_threshold && self.priority == Level::Critical
    }
}

/// The six dimension analyses of one option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeoffDimensions {
    pub operational: DimensionAnalysis,
    pub political: DimensionAnalysis,
    pub personnel: DimensionAnalysis,
    pub economic: DimensionAnalysis,
    pub environmental: DimensionAnalysis,
    pub legal: DimensionAnalysis,
}

impl TradeoffDimensions {
    /// Returns the analysis of a dimension.
    pub fn get(&self, dimension: Dimension) -> &DimensionAnalysis {
        match dimension {
            Dimension::Operational => &self.operational,
            Dimension::Political => &self.political,
            Dimension::Personnel => &self.personnel,
            Dimension::Economic => &self.economic,
            Dimension::Environmental => &self.environmental,
            Dimension::Legal => &self.legal,
        }
    }

    /// Iterates dimensions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &DimensionAnalysis)> {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }

    /// Dimensions whose new score falls below threshold.
    pub fn breaches(&self) -> Vec<Dimension> {
        self.iter()
            .filter(|(_, a)| a.breaches_threshold)
            .map(|(d, _)| d)
            .collect()
    }

    /// Critical-priority dimensions whose new score falls below threshold.
    pub fn critical_breaches(&self) -> Vec<Dimension> {
        self.iter()
            .filter(|(_, a)| a.is_critical_breach())
            .map(|(d, _)| d)
            .collect()
    }
}

/// Scoring result for one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeoffAnalysis {
    pub dimensions: TradeoffDimensions,
    pub overall_score: f64,
    /// The decision's recommended option, repeated on every option for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_option: Option<OptionId>,
}

impl TradeoffAnalysis {
    /// Returns true if no critical dimension is breached.
    pub fn is_eligible(&self) -> bool {
        self.dimensions.iter().all(|(_, a)| !a.is_critical_breach())
    }
}

/// Converts projected consequences into the six-dimension trade-off model.
pub struct TradeoffScorer;

impl TradeoffScorer {
    /// Scores one option's projected consequences.
    ///
    /// # Algorithm
    /// - projectedImpact(d) = Σ impactScore × likelihood over consequences in d,
    ///   zero-likelihood entries excluded
    /// - newScore(d) = clamp(currentScore(d) + projectedImpact(d), 0, 100)
    /// - breach when newScore < threshold
    /// - overallScore = Σ projectedImpact(d) × weight(priority(d))
    pub fn score(projected: &ProjectedConsequences, policy: &AnalysisPolicy) -> TradeoffAnalysis {
        let analyze = |dimension: Dimension| {
            let impact = Self::projected_impact(projected.scoring_set(), dimension);
            DimensionAnalysis::from_baseline(policy.baselines.get(dimension), impact)
        };

        let dimensions = TradeoffDimensions {
            operational: analyze(Dimension::Operational),
            political: analyze(Dimension::Political),
            personnel: analyze(Dimension::Personnel),
            economic: analyze(Dimension::Economic),
            environmental: analyze(Dimension::Environmental),
            legal: analyze(Dimension::Legal),
        };

        TradeoffAnalysis {
            overall_score: Self::overall_score(&dimensions, policy),
            dimensions,
            recommended_option: None,
        }
    }

    /// Likelihood-weighted impact of the consequences landing in `dimension`.
    pub fn projected_impact<'a>(
        consequences: impl Iterator<Item = &'a Consequence>,
        dimension: Dimension,
    ) -> f64 {
        consequences
            .filter(|c| c.domain == dimension && !c.likelihood.is_zero())
            .map(Consequence::weighted_impact)
            .fold(0.0, |acc, impact| acc + impact)
    }

    /// Priority-weighted sum of projected impacts.
    pub fn overall_score(dimensions: &TradeoffDimensions, policy: &AnalysisPolicy) -> f64 {
        dimensions
            .iter()
            .map(|(_, a)| a.projected_impact * policy.weight_for(a.priority))
            .fold(0.0, |acc, weighted| acc + weighted)
    }
}
