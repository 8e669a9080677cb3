//! PrecedentSource port - historical decisions for context.

use async_trait::async_trait;

use crate::domain::decision::Precedent;
use crate::domain::foundation::DomainError;

/// Query operations for precedents
#[async_trait]
pub trait PrecedentSource: Send + Sync {
    /// Finds precedents recorded under a decision category.
    ///
    /// Returns an empty list when nothing matches.
    async fn find_by_category(&self, category: &str) -> Result<Vec<Precedent>, DomainError>;
}
