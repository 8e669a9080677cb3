//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the analysis engine and the data it needs. Adapters implement these ports.
//!
//! - `ConsequenceSource` - consequence templates by option id
//! - `BaselineProvider` - per-dimension current scores, thresholds and priorities
//! - `PrecedentSource` - precedents by decision category
//! - `DutyClock` - decision-maker time on duty

mod baseline_provider;
mod consequence_source;
mod duty_clock;
mod precedent_source;

pub use baseline_provider::BaselineProvider;
pub use consequence_source::ConsequenceSource;
pub use duty_clock::DutyClock;
pub use precedent_source::PrecedentSource;
