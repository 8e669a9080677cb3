//! Decision Module - the input data model handed to the analysis engine.
//!
//! # Components
//!
//! - `Decision` - a pending choice with context, options and standing risks
//! - `DecisionOption` - one candidate course of action
//! - `Consequence` - a projected effect, recursively carrying its cascades
//! - `RiskFactor` / `Precedent` - decision-wide hazards and historical outcomes

#[allow(clippy::module_inception)]
mod decision;
mod consequence;
mod option;
mod risk;

pub use consequence::{Consequence, ConsequenceKind, Dimension, Timeframe};
pub use decision::{Complexity, Decision, DecisionContext, DecisionStatus, RoeStatus, Stakeholder};
pub use option::{Availability, DecisionOption, OptionTimeline, ResourceRequirement};
pub use risk::{DetectedBy, Precedent, RiskFactor};
