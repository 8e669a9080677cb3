//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, scales, and error types
//! that form the vocabulary of the decision analysis domain.

mod errors;
mod ids;
mod level;
mod probability;
mod score;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DecisionId, OptionId, RiskFactorId};
pub use level::Level;
pub use probability::Probability;
pub use score::Score;
pub use timestamp::Timestamp;
