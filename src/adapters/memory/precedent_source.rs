//! In-Memory Precedent Source Adapter

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::decision::Precedent;
use crate::domain::foundation::DomainError;
use crate::ports::PrecedentSource;

/// In-memory precedent store, matched by exact category ignoring ASCII case.
#[derive(Debug, Clone)]
pub struct InMemoryPrecedentSource {
    precedents: Arc<RwLock<Vec<Precedent>>>,
}

impl InMemoryPrecedentSource {
    pub fn new() -> Self {
        Self::with_precedents(Vec::new())
    }

    pub fn with_precedents(precedents: Vec<Precedent>) -> Self {
        Self {
            precedents: Arc::new(RwLock::new(precedents)),
        }
    }

    /// Record a precedent
    pub async fn add(&self, precedent: Precedent) {
        self.precedents.write().await.push(precedent);
    }

    pub async fn count(&self) -> usize {
        self.precedents.read().await.len()
    }
}

impl Default for InMemoryPrecedentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrecedentSource for InMemoryPrecedentSource {
    async fn find_by_category(&self, category: &str) -> Result<Vec<Precedent>, DomainError> {
        let category = category.trim();
        if category.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .precedents
            .read()
            .await
            .iter()
            .filter(|p| p.category.trim().eq_ignore_ascii_case(category))
            .cloned()
            .collect())
    }
}
