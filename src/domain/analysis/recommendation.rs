//! Recommendation Selector - eligibility filtering and deterministic ranking.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::decision::{Decision, DecisionOption, Dimension};
use crate::domain::foundation::{OptionId, Probability};

use super::TradeoffAnalysis;

/// Ranking inputs for one option.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub option_id: OptionId,
    pub overall_score: f64,
    pub confidence: Probability,
    /// Critical-severity risk factors bearing on this option.
    pub critical_risks: usize,
    pub critical_breaches: Vec<Dimension>,
}

impl Candidate {
    /// Collects ranking inputs from an option and its scoring.
    pub fn from_analysis(
        decision: &Decision,
        option: &DecisionOption,
        analysis: &TradeoffAnalysis,
    ) -> Self {
        Self {
            option_id: option.id.clone(),
            overall_score: analysis.overall_score,
            confidence: option.confidence,
            critical_risks: decision.critical_risks_for(&option.id),
            critical_breaches: analysis.dimensions.critical_breaches(),
        }
    }

    /// An option is eligible when it breaches no critical dimension.
    pub fn is_eligible(&self) -> bool {
        self.critical_breaches.is_empty()
    }
}

/// Why the recommended option was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationBasis {
    /// Best-ranked option among those with no critical breach.
    Eligible,
    /// Every option breaches a critical dimension; least damaging one chosen.
    DamageMinimization,
}

/// The selected option and the full ranking behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub option_id: OptionId,
    pub basis: RecommendationBasis,
    /// Every option, best first: eligible options, then ineligible ones.
    pub ranking: Vec<OptionId>,
}

/// Selects the recommended option for a decision.
pub struct RecommendationSelector;

impl RecommendationSelector {
    /// Ranks candidates and picks the first.
    ///
    /// Returns `None` only for an empty candidate list.
    ///
    /// # Policy
    /// - Options with a critical breach are never recommended while any
    ///   eligible option exists
    /// - Within each group: higher overall score, then higher confidence,
    ///   then fewer critical risk factors, then declaration order
    pub fn select(candidates: &[Candidate]) -> Option<Recommendation> {
        let order = Self::rank(candidates);
        let first = candidates.get(*order.first()?)?;

        let basis = if first.is_eligible() {
            RecommendationBasis::Eligible
        } else {
            RecommendationBasis::DamageMinimization
        };

        Some(Recommendation {
            option_id: first.option_id.clone(),
            basis,
            ranking: order
                .iter()
                .map(|&i| candidates[i].option_id.clone())
                .collect(),
        })
    }

    /// Returns candidate indices in recommendation order.
    pub fn rank(candidates: &[Candidate]) -> Vec<usize> {
        let (mut eligible, mut ineligible): (Vec<usize>, Vec<usize>) =
            (0..candidates.len()).partition(|&i| candidates[i].is_eligible());

        // Stable sorts keep declaration order as the final tie-break.
        eligible.sort_by(|&a, &b| Self::compare(&candidates[a], &candidates[b]));
        ineligible.sort_by(|&a, &b| Self::compare(&candidates[a], &candidates[b]));

        eligible.extend(ineligible);
        eligible
    }

    /// Orders the better candidate first.
    fn compare(a: &Candidate, b: &Candidate) -> Ordering {
        b.overall_score
            .total_cmp(&a.overall_score)
            .then_with(|| b.confidence.value().total_cmp(&a.confidence.value()))
            .then_with(|| a.critical_risks.cmp(&b.critical_risks))
    }
}
