//! ConsequenceSource port - consequence templates keyed by option.

use async_trait::async_trait;

use crate::domain::analysis::ConsequenceCatalog;
use crate::domain::foundation::{DomainError, OptionId};

/// Supplies the consequence templates the projector expands.
///
/// Options with no template are simply absent from the returned catalog.
#[async_trait]
pub trait ConsequenceSource: Send + Sync {
    /// Returns the templates for the given options.
    async fn templates_for(&self, option_ids: &[OptionId]) -> Result<ConsequenceCatalog, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consequence_source_is_object_safe() {
        fn _accepts_dyn(_source: &dyn ConsequenceSource) {}
    }
}
