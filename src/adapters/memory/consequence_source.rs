//! In-Memory Consequence Source Adapter
//!
//! Holds a consequence catalog in memory. Useful for tests and for
//! catalogs assembled programmatically.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::analysis::{ConsequenceCatalog, OptionTemplate};
use crate::domain::foundation::{DomainError, OptionId};
use crate::ports::ConsequenceSource;

/// In-memory consequence templates
#[derive(Debug, Clone)]
pub struct InMemoryConsequenceSource {
    catalog: Arc<RwLock<ConsequenceCatalog>>,
}

impl InMemoryConsequenceSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::with_catalog(ConsequenceCatalog::empty())
    }

    /// Create a source seeded with a catalog
    pub fn with_catalog(catalog: ConsequenceCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Register (or replace) the templates for an option
    pub async fn insert(&self, option_id: impl Into<OptionId>, template: OptionTemplate) {
        self.catalog.write().await.insert(option_id.into(), template);
    }

    /// Number of options with templates
    pub async fn option_count(&self) -> usize {
        self.catalog.read().await.len()
    }
}

impl Default for InMemoryConsequenceSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConsequenceSource for InMemoryConsequenceSource {
    async fn templates_for(&self, option_ids: &[OptionId]) -> Result<ConsequenceCatalog, DomainError> {
        Ok(self.catalog.read().await.subset(option_ids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::ConsequenceTemplate;
    use crate::domain::decision::{ConsequenceKind, Dimension};

    fn template(description: &str, impact: i32) -> OptionTemplate {
        OptionTemplate::default().immediate(ConsequenceTemplate::new(
            Dimension::Operational,
            ConsequenceKind::from_impact(impact),
            description,
            1.0,
            impact,
        ))
    }

    #[tokio::test]
    async fn returns_only_requested_options() {
        let source = InMemoryConsequenceSource::new();
        source.insert("opt-a", template("Advance", 10)).await;
        source.insert("opt-b", template("Hold", -5)).await;

        let catalog = source
            .templates_for(&[OptionId::new("opt-b"), OptionId::new("opt-z")])
            .await
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(catalog.lookup(&OptionId::new("opt-b")).is_some());
        assert!(catalog.lookup(&OptionId::new("opt-a")).is_none());
    }

    #[tokio::test]
    async fn insert_replaces_existing_templates() {
        let source = InMemoryConsequenceSource::new();
        source.insert("opt-a", template("First", 10)).await;
        source.insert("opt-a", template("Second", 20)).await;

        assert_eq!(source.option_count().await, 1);
        let catalog = source.templates_for(&[OptionId::new("opt-a")]).await.unwrap();
        let stored = catalog.lookup(&OptionId::new("opt-a")).unwrap();
        assert_eq!(stored.immediate[0].description, "Second");
    }

    #[tokio::test]
    async fn clones_share_state() {
        let source = InMemoryConsequenceSource::default();
        let clone = source.clone();
        clone.insert("opt-a", template("Shared", 1)).await;
        assert_eq!(source.option_count().await, 1);
    }
}
