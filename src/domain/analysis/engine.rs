//! Decision Engine - the pure entry point from `Decision` to `DecisionAnalysis`.

use tracing::{debug, info};

use crate::domain::decision::{Decision, Precedent};
use crate::domain::foundation::{Probability, Timestamp};

use super::{
    AnalysisError, AnalysisPolicy, AnalyzedOption, Candidate, CognitiveLoadAssessor,
    ConsequenceCatalog, ConsequenceProjector, DataIntegrityError, DecisionAnalysis,
    RecommendationBasis, RecommendationSelector, ResourceAvailability, TradeoffScorer,
};

/// Collaborator data gathered by the caller before analysis.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub catalog: &'a ConsequenceCatalog,
    pub precedents: &'a [Precedent],
    /// Minutes the decision-maker has been on duty.
    pub time_on_duty: u32,
    pub analyzed_at: Timestamp,
}

/// Stateless analysis over a fixed policy.
///
/// Safe to share across threads; every call works only on its arguments.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    policy: AnalysisPolicy,
}

impl DecisionEngine {
    /// Creates an engine for the given policy.
    pub fn new(policy: AnalysisPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in force.
    pub fn policy(&self) -> &AnalysisPolicy {
        &self.policy
    }

    /// Analyzes a decision.
    ///
    /// # Errors
    /// - `EmptyOptionSet` if the decision has no options
    /// - `DuplicateOption` if two options share an id
    /// - `DataIntegrity` if the policy is strict and a template's sign contradicts its type
    pub fn analyze(
        &self,
        decision: &Decision,
        ctx: AnalysisContext<'_>,
    ) -> Result<DecisionAnalysis, AnalysisError> {
        if decision.options.is_empty() {
            return Err(AnalysisError::EmptyOptionSet {
                decision_id: decision.id.clone(),
            });
        }
        if let Some(option_id) = decision.duplicate_option_id() {
            return Err(AnalysisError::DuplicateOption {
                decision_id: decision.id.clone(),
                option_id: option_id.clone(),
            });
        }

        let mut analyzed_options = Vec::with_capacity(decision.options.len());
        let mut candidates = Vec::with_capacity(decision.options.len());
        let mut integrity_warnings = Vec::new();

        for option in &decision.options {
            let projected = ConsequenceProjector::project(decision, option, ctx.catalog);

            if self.policy.strict_integrity {
                if let Some(err) = projected.integrity_errors.first() {
                    return Err(err.clone().into());
                }
            }

            let trade_off_analysis = TradeoffScorer::score(&projected, &self.policy);
            candidates.push(Candidate::from_analysis(decision, option, &trade_off_analysis));

            debug!(
                decision_id = %decision.id,
                option_id = %option.id,
                overall_score = trade_off_analysis.overall_score,
                eligible = trade_off_analysis.is_eligible(),
                "Scored option"
            );

            let mut projected_option = option.clone();
            projected_option.immediate_consequences = projected.immediate.clone();
            projected_option.secondary_consequences = projected.secondary.clone();

            integrity_warnings.extend(projected.integrity_errors);
            analyzed_options.push(AnalyzedOption {
                overall_score: trade_off_analysis.overall_score,
                option: projected_option,
                immediate_consequences: projected.immediate,
                secondary_consequences: projected.secondary,
                trade_off_analysis,
                resource_availability: ResourceAvailability::summarize(&option.resource_requirements),
            });
        }

        let recommendation = RecommendationSelector::select(&candidates).ok_or_else(|| {
            AnalysisError::EmptyOptionSet {
                decision_id: decision.id.clone(),
            }
        })?;

        for analyzed in &mut analyzed_options {
            analyzed.trade_off_analysis.recommended_option = Some(recommendation.option_id.clone());
        }

        let chosen = analyzed_options
            .iter()
            .find(|o| o.id() == &recommendation.option_id);
        let ai_confidence = chosen.map(|o| o.option.confidence).unwrap_or(Probability::ZERO);
        let caveats = chosen
            .map(|o| Self::caveats(o, recommendation.basis, &integrity_warnings))
            .unwrap_or_default();

        let cognitive_load_warning = CognitiveLoadAssessor::assess(
            ctx.time_on_duty,
            decision.urgency,
            &self.policy.fatigue,
        );

        info!(
            decision_id = %decision.id,
            recommendation = %recommendation.option_id,
            basis = ?recommendation.basis,
            options = analyzed_options.len(),
            integrity_warnings = integrity_warnings.len(),
            "Decision analysis complete"
        );

        Ok(DecisionAnalysis {
            decision_id: decision.id.clone(),
            analyzed_options,
            risk_factors: decision.risk_factors.clone(),
            precedents: ctx.precedents.to_vec(),
            recommendation: recommendation.option_id,
            recommendation_basis: recommendation.basis,
            caveats,
            ranking: recommendation.ranking,
            ai_confidence,
            cognitive_load_warning,
            integrity_warnings,
            analyzed_at: ctx.analyzed_at,
        })
    }

    fn caveats(
        chosen: &AnalyzedOption,
        basis: RecommendationBasis,
        integrity_warnings: &[DataIntegrityError],
    ) -> Vec<String> {
        let mut caveats = Vec::new();

        if basis == RecommendationBasis::DamageMinimization {
            caveats.push(
                "Every option breaches a critical threshold; recommending the least damaging option"
                    .to_string(),
            );
        }

        for (dimension, analysis) in chosen.trade_off_analysis.dimensions.iter() {
            if analysis.breaches_threshold {
                caveats.push(format!(
                    "Projected {} score {} falls below threshold {} ({} priority)",
                    dimension, analysis.new_score, analysis.threshold, analysis.priority
                ));
            }
        }

        let corrected = integrity_warnings
            .iter()
            .filter(|w| &w.option_id == chosen.id())
            .count();
        if corrected > 0 {
            caveats.push(format!(
                "{} consequence(s) had impact signs corrected to match their type",
                corrected
            ));
        }

        caveats
    }
}
