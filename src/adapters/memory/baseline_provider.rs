//! Static Baseline Provider Adapter
//!
//! Serves a fixed set of per-dimension baselines.

use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::domain::analysis::{BaselineEntry, DimensionBaselines};
use crate::domain::decision::Dimension;
use crate::domain::foundation::DomainError;
use crate::ports::BaselineProvider;

/// Fixed baselines, possibly incomplete.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticBaselineProvider {
    entries: BTreeMap<Dimension, BaselineEntry>,
}

impl StaticBaselineProvider {
    /// Serve exactly the given entries
    pub fn new(entries: BTreeMap<Dimension, BaselineEntry>) -> Self {
        Self { entries }
    }

    /// Serve the reference readiness posture
    pub fn reference() -> Self {
        Self::from_baselines(&DimensionBaselines::reference())
    }

    /// Serve a complete set of baselines
    pub fn from_baselines(baselines: &DimensionBaselines) -> Self {
        let entries = baselines
            .iter()
            .map(|(dimension, baseline)| {
                (
                    dimension,
                    BaselineEntry::complete(
                        baseline.current_score.value(),
                        baseline.threshold.value(),
                        baseline.priority,
                    ),
                )
            })
            .collect();
        Self { entries }
    }

    /// Replace one dimension's entry
    pub fn with_entry(mut self, dimension: Dimension, entry: BaselineEntry) -> Self {
        self.entries.insert(dimension, entry);
        self
    }

    /// Drop one dimension entirely
    pub fn without(mut self, dimension: Dimension) -> Self {
        self.entries.remove(&dimension);
        self
    }
}

impl Default for StaticBaselineProvider {
    fn default() -> Self {
        Self::reference()
    }
}

#[async_trait]
impl BaselineProvider for StaticBaselineProvider {
    async fn baselines(&self) -> Result<BTreeMap<Dimension, BaselineEntry>, DomainError> {
        Ok(self.entries.clone())
    }
}
