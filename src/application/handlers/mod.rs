//! Application handlers.
//!
//! Command handlers that gather data through ports and run the pure engine.

pub mod analysis;

pub use analysis::{AnalyzeDecisionCommand, AnalyzeDecisionHandler, AnalyzeDecisionResult};
