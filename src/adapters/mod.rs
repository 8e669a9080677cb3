//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - in-memory sources for tests and programmatic setups
//! - `file` - YAML/JSON policy documents on disk

pub mod file;
pub mod memory;

pub use file::{PolicyDocument, PolicyFile};
pub use memory::{
    FixedDutyClock, InMemoryConsequenceSource, InMemoryDutyClock, InMemoryPrecedentSource,
    StaticBaselineProvider,
};
