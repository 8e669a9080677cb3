//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, scales, errors)
//! - `decision` - Decision input model (options, consequences, risk factors)
//! - `analysis` - Pure decision analysis engine (projection, scoring, selection)

pub mod analysis;
pub mod decision;
pub mod foundation;
