//! End-to-end scenarios for the pure decision engine.

use cascade_engine::domain::analysis::{
    AnalysisContext, AnalysisPolicy, ConsequenceCatalog, ConsequenceTemplate, DecisionAnalysis,
    DecisionEngine, FatigueLevel, OptionTemplate, RecommendationBasis,
};
use cascade_engine::domain::decision::{
    ConsequenceKind, Decision, DecisionOption, Dimension, RiskFactor,
};
use cascade_engine::domain::foundation::{DomainError, ErrorCode, Level, OptionId, Timestamp};

fn context(catalog: &ConsequenceCatalog, time_on_duty: u32) -> AnalysisContext<'_> {
    AnalysisContext {
        catalog,
        precedents: &[],
        time_on_duty,
        analyzed_at: Timestamp::from_unix_secs(1_700_000_000),
    }
}

fn template(dimension: Dimension, description: &str, likelihood: f64, impact: i32) -> ConsequenceTemplate {
    ConsequenceTemplate::new(
        dimension,
        ConsequenceKind::from_impact(impact),
        description,
        likelihood,
        impact,
    )
}

fn two_options(urgency: Level) -> Decision {
    Decision::new("dec-100", "Checkpoint engagement", urgency)
        .with_category("kinetic")
        .with_option(DecisionOption::new("opt-a", "Engage", 0.7))
        .with_option(DecisionOption::new("opt-b", "Withdraw", 0.7))
}

#[test]
fn legal_breach_disqualifies_higher_scoring_option() {
    let decision = two_options(Level::High);
    let catalog = ConsequenceCatalog::empty()
        .with_option(
            "opt-a",
            OptionTemplate::default()
                .immediate(template(Dimension::Operational, "Checkpoint secured", 1.0, 50))
                .immediate(template(Dimension::Legal, "Possible ROE violation", 1.0, -60)),
        )
        .with_option(
            "opt-b",
            OptionTemplate::default().immediate(template(Dimension::Economic, "Re-staging cost", 1.0, -30)),
        );

    let analysis = DecisionEngine::default()
        .analyze(&decision, context(&catalog, 60))
        .unwrap();

    let a = analysis.option(&OptionId::new("opt-a")).unwrap();
    let b = analysis.option(&OptionId::new("opt-b")).unwrap();

    let legal = &a.trade_off_analysis.dimensions.legal;
    assert_eq!(legal.new_score.value(), 40.0);
    assert!(legal.breaches_threshold);
    assert!(a.overall_score > b.overall_score);

    assert_eq!(analysis.recommendation, OptionId::new("opt-b"));
    assert_eq!(analysis.recommendation_basis, RecommendationBasis::Eligible);
    assert_eq!(
        analysis.ranking,
        vec![OptionId::new("opt-b"), OptionId::new("opt-a")]
    );
}

#[test]
fn long_shift_on_critical_decision_raises_cognitive_load_warning() {
    let decision = two_options(Level::Critical);
    let analysis = DecisionEngine::default()
        .analyze(&decision, context(&ConsequenceCatalog::empty(), 800))
        .unwrap();

    let warning = &analysis.cognitive_load_warning;
    assert_eq!(warning.time_on_duty, 800);
    assert_eq!(warning.fatigue_level, FatigueLevel::High);
    assert!(warning.recommend_consultation);
    assert!(warning.recommend_break);
}

#[test]
fn all_options_breaching_falls_back_to_least_damaging() {
    let decision = two_options(Level::High);
    let catalog = ConsequenceCatalog::empty()
        .with_option(
            "opt-a",
            OptionTemplate::default().immediate(template(Dimension::Legal, "Treaty violation", 1.0, -60)),
        )
        .with_option(
            "opt-b",
            OptionTemplate::default().immediate(template(Dimension::Operational, "Loss of position", 1.0, -30)),
        );

    let analysis = DecisionEngine::default()
        .analyze(&decision, context(&catalog, 60))
        .unwrap();

    assert!(analysis
        .analyzed_options
        .iter()
        .all(|o| !o.trade_off_analysis.is_eligible()));
    assert_eq!(analysis.recommendation, OptionId::new("opt-b"));
    assert_eq!(analysis.recommendation_basis, RecommendationBasis::DamageMinimization);
    assert!(!analysis.caveats.is_empty());

    let json = serde_json::to_string(&analysis).unwrap();
    let parsed: DecisionAnalysis = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, analysis);
}

#[test]
fn option_scoped_critical_risk_breaks_a_tie() {
    let decision = two_options(Level::Medium).with_risk(
        RiskFactor::new("risk-1", "Civilians near objective", Level::Critical)
            .affecting(vec![OptionId::new("opt-a")]),
    );

    let analysis = DecisionEngine::default()
        .analyze(&decision, context(&ConsequenceCatalog::empty(), 0))
        .unwrap();

    assert_eq!(analysis.recommendation, OptionId::new("opt-b"));
    assert_eq!(analysis.risk_factors.len(), 1);
}

#[test]
fn unweighted_policy_sums_raw_impacts() {
    let decision = two_options(Level::Low);
    let catalog = ConsequenceCatalog::empty().with_option(
        "opt-a",
        OptionTemplate::default()
            .immediate(template(Dimension::Operational, "Tempo gained", 0.5, 20))
            .immediate(template(Dimension::Environmental, "Fuel spill", 1.0, -4)),
    );
    let engine = DecisionEngine::new(AnalysisPolicy {
        weighted_scoring: false,
        ..AnalysisPolicy::default()
    });

    let analysis = engine.analyze(&decision, context(&catalog, 0)).unwrap();
    assert_eq!(analysis.option(&OptionId::new("opt-a")).unwrap().overall_score, 6.0);
}

#[test]
fn decision_json_from_presentation_layer_is_accepted() {
    let json = r#"{
        "id": "dec-7",
        "title": "Bridge demolition",
        "urgency": "critical",
        "context": { "category": "engineering", "politicalSensitivity": "high" },
        "options": [
            { "id": "demolish", "label": "Demolish now", "confidence": 0.65,
              "resourceRequirements": [
                { "resourceType": "Engineers", "quantity": 12, "unit": "sappers", "availability": "limited" }
              ] },
            { "id": "hold", "label": "Hold and monitor", "confidence": 0.8 }
        ],
        "riskFactors": [
            { "id": "r1", "description": "Civilian traffic", "severity": "critical", "category": "civil" }
        ]
    }"#;

    let decision: Decision = serde_json::from_str(json).unwrap();
    let analysis = DecisionEngine::default()
        .analyze(&decision, context(&ConsequenceCatalog::empty(), 400))
        .unwrap();

    assert_eq!(analysis.recommendation, OptionId::new("hold"));
    assert_eq!(analysis.cognitive_load_warning.fatigue_level, FatigueLevel::Medium);
    assert!(!analysis.cognitive_load_warning.recommend_break);

    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(value["decisionId"], "dec-7");
    assert_eq!(value["recommendationBasis"], "eligible");
    assert_eq!(value["cognitiveLoadWarning"]["fatigueLevel"], "medium");
    assert_eq!(
        value["analyzedOptions"][0]["resourceAvailability"]["status"],
        "constrained"
    );
}

#[test]
fn options_sharing_an_id_are_rejected() {
    let decision: Decision = serde_json::from_str(
        r#"{
            "id": "dec-300",
            "title": "Resupply route",
            "urgency": "high",
            "options": [
                { "id": "x", "label": "North route", "confidence": 0.3 },
                { "id": "x", "label": "South route", "confidence": 0.9 }
            ]
        }"#,
    )
    .unwrap();

    let err: DomainError = DecisionEngine::default()
        .analyze(&decision, context(&ConsequenceCatalog::empty(), 60))
        .unwrap_err()
        .into();

    assert_eq!(err.code, ErrorCode::ValidationFailed);
    assert_eq!(err.details.get("option_id").map(String::as_str), Some("x"));
}
