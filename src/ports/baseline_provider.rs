//! BaselineProvider port - current scores and thresholds per dimension.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::analysis::BaselineEntry;
use crate::domain::decision::Dimension;
use crate::domain::foundation::DomainError;

/// Supplies per-dimension baselines.
///
/// Entries are returned raw; completeness is checked when they are
/// converted into `DimensionBaselines`.
#[async_trait]
pub trait BaselineProvider: Send + Sync {
    async fn baselines(&self) -> Result<BTreeMap<Dimension, BaselineEntry>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn BaselineProvider) {}
    }
}
