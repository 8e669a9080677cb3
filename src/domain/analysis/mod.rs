//! Analysis Module - the decision analysis and consequence cascade engine.
//!
//! Pure, synchronous functions from a `Decision` plus call-time policy to a
//! `DecisionAnalysis`. No I/O, no shared state; collaborator data is fetched
//! by the application layer and passed in.
//!
//! # Components
//!
//! - `ConsequenceProjector` - expands options into immediate and secondary consequences
//! - `TradeoffScorer` - six-dimension score deltas, threshold breaches, overall score
//! - `RecommendationSelector` - critical-breach filtering and deterministic ranking
//! - `CognitiveLoadAssessor` - fatigue and consultation advisory
//! - `DecisionEngine` - runs the above end to end

mod catalog;
mod cognitive_load;
mod engine;
mod errors;
mod policy;
mod projector;
mod recommendation;
mod report;
mod tradeoff_scorer;

pub use catalog::{ConsequenceCatalog, ConsequenceTemplate, OptionTemplate};
pub use cognitive_load::{CognitiveLoadAssessor, CognitiveLoadWarning, FatigueLevel};
pub use engine::{AnalysisContext, DecisionEngine};
pub use errors::{AnalysisError, DataIntegrityError};
pub use policy::{
    AnalysisPolicy, BaselineEntry, DimensionBaseline, DimensionBaselines, FatigueThresholds,
    PriorityWeights,
};
pub use projector::{ConsequenceProjector, ProjectedConsequences};
pub use recommendation::{Candidate, Recommendation, RecommendationBasis, RecommendationSelector};
pub use report::{AnalyzedOption, DecisionAnalysis, ResourceAvailability, ResourceStatus};
pub use tradeoff_scorer::{DimensionAnalysis, TradeoffAnalysis, TradeoffDimensions, TradeoffScorer};
