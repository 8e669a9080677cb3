//! Error types for decision analysis.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::decision::{ConsequenceKind, Dimension};
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode, OptionId};

/// A consequence whose impact sign contradicts its declared kind.
///
/// Recoverable: the projector forces the sign to match the kind and
/// records this error on the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error(
    "Consequence '{description}' on option {option_id} is {kind} but carries impact {impact_score} (corrected to {corrected_score})"
)]
pub struct DataIntegrityError {
    pub option_id: OptionId,
    pub dimension: Dimension,
    pub description: String,
    pub kind: ConsequenceKind,
    pub impact_score: i32,
    pub corrected_score: i32,
}

/// Errors raised by the analysis engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),

    #[error("Missing baseline {field} for dimension {dimension}")]
    MissingBaseline {
        dimension: Dimension,
        field: &'static str,
    },

    #[error("Decision {decision_id} has no options to analyze")]
    EmptyOptionSet { decision_id: DecisionId },

    #[error("Decision {decision_id} lists option {option_id} more than once")]
    DuplicateOption {
        decision_id: DecisionId,
        option_id: OptionId,
    },
}

impl AnalysisError {
    /// Creates a missing baseline error.
    pub fn missing_baseline(dimension: Dimension, field: &'static str) -> Self {
        AnalysisError::MissingBaseline { dimension, field }
    }

    /// Returns the matching domain error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::DataIntegrity(_) => ErrorCode::DataIntegrity,
            AnalysisError::MissingBaseline { .. } => ErrorCode::MissingBaseline,
            AnalysisError::EmptyOptionSet { .. } => ErrorCode::EmptyOptionSet,
            AnalysisError::DuplicateOption { .. } => ErrorCode::ValidationFailed,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            AnalysisError::DataIntegrity(e) => domain.with_detail("option_id", e.option_id.to_string()),
            AnalysisError::MissingBaseline { dimension, field } => domain
                .with_detail("dimension", dimension.as_str())
                .with_detail("field", field),
            AnalysisError::EmptyOptionSet { decision_id } => {
                domain.with_detail("decision_id", decision_id.to_string())
            }
            AnalysisError::DuplicateOption {
                decision_id,
                option_id,
            } => domain
                .with_detail("decision_id", decision_id.to_string())
                .with_detail("field", "options")
                .with_detail("option_id", option_id.to_string()),
        }
    }
}
