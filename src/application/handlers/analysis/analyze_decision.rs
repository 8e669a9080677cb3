//! AnalyzeDecisionHandler - gathers collaborator data and runs the engine.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::analysis::{
    AnalysisContext, AnalysisError, AnalysisPolicy, DecisionAnalysis, DecisionEngine,
    DimensionBaselines,
};
use crate::domain::decision::Decision;
use crate::domain::foundation::{DomainError, OptionId, Timestamp};
use crate::ports::{BaselineProvider, ConsequenceSource, DutyClock, PrecedentSource};

/// Command to analyze one decision.
#[derive(Debug, Clone)]
pub struct AnalyzeDecisionCommand {
    pub decision: Decision,
    /// Whose time on duty feeds the cognitive load warning.
    pub decision_maker_id: String,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeDecisionResult {
    pub analysis: DecisionAnalysis,
}

/// Handler for decision analysis.
///
/// Baselines come from the `BaselineProvider` on every call; the rest of
/// the policy is fixed at construction.
pub struct AnalyzeDecisionHandler {
    consequences: Arc<dyn ConsequenceSource>,
    baselines: Arc<dyn BaselineProvider>,
    precedents: Arc<dyn PrecedentSource>,
    duty_clock: Arc<dyn DutyClock>,
    policy: AnalysisPolicy,
}

impl AnalyzeDecisionHandler {
    pub fn new(
        consequences: Arc<dyn ConsequenceSource>,
        baselines: Arc<dyn BaselineProvider>,
        precedents: Arc<dyn PrecedentSource>,
        duty_clock: Arc<dyn DutyClock>,
        policy: AnalysisPolicy,
    ) -> Self {
        Self {
            consequences,
            baselines,
            precedents,
            duty_clock,
            policy,
        }
    }

    pub async fn handle(&self, cmd: AnalyzeDecisionCommand) -> Result<AnalyzeDecisionResult, DomainError> {
        let decision = &cmd.decision;

        // 1. Nothing to fetch for an empty or ambiguous decision
        if decision.options.is_empty() {
            return Err(AnalysisError::EmptyOptionSet {
                decision_id: decision.id.clone(),
            }
            .into());
        }
        if let Some(option_id) = decision.duplicate_option_id() {
            return Err(AnalysisError::DuplicateOption {
                decision_id: decision.id.clone(),
                option_id: option_id.clone(),
            }
            .into());
        }

        // 2. Resolve baselines; gaps are fatal
        let entries = self.baselines.baselines().await.map_err(|e| {
            warn!(decision_id = %decision.id, error = %e, "Baseline provider failed");
            e
        })?;
        let baselines = DimensionBaselines::from_entries(&entries)?;
        let engine = DecisionEngine::new(self.policy.clone().with_baselines(baselines));

        // 3. Consequence templates for every option
        let option_ids: Vec<OptionId> = decision.options.iter().map(|o| o.id.clone()).collect();
        let catalog = self.consequences.templates_for(&option_ids).await.map_err(|e| {
            warn!(decision_id = %decision.id, error = %e, "Consequence source failed");
            e
        })?;

        // 4. Precedents are context only; a failing store yields none
        let precedents = match self.precedents.find_by_category(&decision.context.category).await {
            Ok(found) => found,
            Err(e) => {
                warn!(decision_id = %decision.id, error = %e, "Precedent lookup failed, continuing without precedents");
                Vec::new()
            }
        };

        // 5. Time on duty
        let time_on_duty = self.duty_clock.time_on_duty(&cmd.decision_maker_id).await?;

        debug!(
            decision_id = %decision.id,
            templates = catalog.len(),
            precedents = precedents.len(),
            time_on_duty,
            "Collaborator data gathered"
        );

        // 6. Run the pure engine
        let analysis = engine.analyze(
            decision,
            AnalysisContext {
                catalog: &catalog,
                precedents: &precedents,
                time_on_duty,
                analyzed_at: Timestamp::now(),
            },
        )?;

        Ok(AnalyzeDecisionResult { analysis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{BaselineEntry, ConsequenceCatalog};
    use crate::domain::decision::{DecisionOption, Dimension, Precedent};
    use crate::domain::foundation::{DecisionId, ErrorCode, Level};
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    struct MockConsequenceSource {
        requested: Mutex<Vec<OptionId>>,
    }

    impl MockConsequenceSource {
        fn new() -> Self {
            Self {
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<OptionId> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ConsequenceSource for MockConsequenceSource {
        async fn templates_for(&self, option_ids: &[OptionId]) -> Result<ConsequenceCatalog, DomainError> {
            self.requested.lock().unwrap().extend_from_slice(option_ids);
            Ok(ConsequenceCatalog::empty())
        }
    }

    struct MockBaselineProvider {
        entries: BTreeMap<Dimension, BaselineEntry>,
        fail: bool,
    }

    impl MockBaselineProvider {
        fn complete() -> Self {
            Self {
                entries: Dimension::ALL
                    .into_iter()
                    .map(|d| (d, BaselineEntry::complete(80.0, 50.0, Level::Medium)))
                    .collect(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                entries: BTreeMap::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl BaselineProvider for MockBaselineProvider {
        async fn baselines(&self) -> Result<BTreeMap<Dimension, BaselineEntry>, DomainError> {
            if self.fail {
                return Err(DomainError::collaborator("readiness", "Readiness feed offline"));
            }
            Ok(self.entries.clone())
        }
    }

    struct MockPrecedentSource {
        fail: bool,
    }

    #[async_trait]
    impl PrecedentSource for MockPrecedentSource {
        async fn find_by_category(&self, category: &str) -> Result<Vec<Precedent>, DomainError> {
            if self.fail {
                return Err(DomainError::collaborator("precedents", "Archive unreachable"));
            }
            Ok(vec![Precedent {
                decision_id: DecisionId::new("prec-1"),
                title: "Earlier call".to_string(),
                date: "2022-11-03".to_string(),
                chosen_option: "Hold".to_string(),
                outcome: "Stable".to_string(),
                category: category.to_string(),
            }])
        }
    }

    struct MockDutyClock(u32);

    #[async_trait]
    impl DutyClock for MockDutyClock {
        async fn time_on_duty(&self, _decision_maker_id: &str) -> Result<u32, DomainError> {
            Ok(self.0)
        }
    }

    fn decision() -> Decision {
        Decision::new("dec-1", "Resupply route", Level::Critical)
            .with_category("logistics")
            .with_option(DecisionOption::new("north", "North route", 0.7))
            .with_option(DecisionOption::new("south", "South route", 0.6))
    }

    fn handler(
        consequences: Arc<MockConsequenceSource>,
        baselines: MockBaselineProvider,
        precedents_fail: bool,
    ) -> AnalyzeDecisionHandler {
        AnalyzeDecisionHandler::new(
            consequences,
            Arc::new(baselines),
            Arc::new(MockPrecedentSource { fail: precedents_fail }),
            Arc::new(MockDutyClock(800)),
            AnalysisPolicy::default(),
        )
    }

    fn command(decision: Decision) -> AnalyzeDecisionCommand {
        AnalyzeDecisionCommand {
            decision,
            decision_maker_id: "cdr-1".to_string(),
        }
    }

    #[tokio::test]
    async fn gathers_collaborator_data_and_analyzes() {
        let consequences = Arc::new(MockConsequenceSource::new());
        let handler = handler(consequences.clone(), MockBaselineProvider::complete(), false);

        let result = handler.handle(command(decision())).await.unwrap();
        let analysis = result.analysis;

        assert_eq!(
            consequences.requested(),
            vec![OptionId::new("north"), OptionId::new("south")]
        );
        assert_eq!(analysis.precedents.len(), 1);
        assert_eq!(analysis.precedents[0].category, "logistics");
        assert_eq!(analysis.cognitive_load_warning.time_on_duty, 800);
        assert!(analysis.cognitive_load_warning.recommend_break);
        assert_eq!(analysis.recommendation, OptionId::new("north"));
    }

    #[tokio::test]
    async fn provider_baselines_replace_policy_baselines() {
        let consequences = Arc::new(MockConsequenceSource::new());
        let handler = handler(consequences, MockBaselineProvider::complete(), false);

        let analysis = handler.handle(command(decision())).await.unwrap().analysis;
        let legal = &analysis.analyzed_options[0].trade_off_analysis.dimensions.legal;
        assert_eq!(legal.current_score.value(), 80.0);
        assert_eq!(legal.threshold.value(), 50.0);
    }

    #[tokio::test]
    async fn incomplete_baselines_fail_with_missing_baseline() {
        let mut provider = MockBaselineProvider::complete();
        provider.entries.remove(&Dimension::Environmental);
        let handler = handler(Arc::new(MockConsequenceSource::new()), provider, false);

        let err = handler.handle(command(decision())).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingBaseline);
        assert_eq!(err.details.get("dimension"), Some(&"environmental".to_string()));
    }

    #[tokio::test]
    async fn baseline_provider_failure_propagates() {
        let handler = handler(
            Arc::new(MockConsequenceSource::new()),
            MockBaselineProvider::failing(),
            false,
        );

        let err = handler.handle(command(decision())).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CollaboratorUnavailable);
    }

    #[tokio::test]
    async fn precedent_failure_is_not_fatal() {
        let handler = handler(
            Arc::new(MockConsequenceSource::new()),
            MockBaselineProvider::complete(),
            true,
        );

        let analysis = handler.handle(command(decision())).await.unwrap().analysis;
        assert!(analysis.precedents.is_empty());
    }

    #[tokio::test]
    async fn duplicate_option_ids_are_rejected_before_fetching() {
        let consequences = Arc::new(MockConsequenceSource::new());
        let handler = handler(consequences.clone(), MockBaselineProvider::complete(), false);
        let decision = Decision::new("dec-dup", "Ambiguous", Level::High)
            .with_option(DecisionOption::new("x", "First", 0.3))
            .with_option(DecisionOption::new("x", "Second", 0.9));

        let err = handler.handle(command(decision)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("option_id"), Some(&"x".to_string()));
        assert!(consequences.requested().is_empty());
    }

    #[tokio::test]
    async fn empty_decision_skips_collaborators() {
        let consequences = Arc::new(MockConsequenceSource::new());
        let handler = handler(consequences.clone(), MockBaselineProvider::complete(), false);

        let err = handler
            .handle(command(Decision::new("dec-0", "Empty", Level::Low)))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::EmptyOptionSet);
        assert!(consequences.requested().is_empty());
    }
}
