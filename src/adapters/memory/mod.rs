//! In-memory adapters for all analysis ports.

mod baseline_provider;
mod consequence_source;
mod duty_clock;
mod precedent_source;

pub use baseline_provider::StaticBaselineProvider;
pub use consequence_source::InMemoryConsequenceSource;
pub use duty_clock::{FixedDutyClock, InMemoryDutyClock};
pub use precedent_source::InMemoryPrecedentSource;
