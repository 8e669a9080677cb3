//! File-based Policy Adapter
//!
//! Loads baselines, weights, consequence templates and precedents from a
//! single YAML or JSON document. The loaded document serves the
//! consequence, baseline and precedent ports.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::domain::analysis::{
    AnalysisPolicy, BaselineEntry, ConsequenceCatalog, FatigueThresholds, PriorityWeights,
};
use crate::domain::decision::{Dimension, Precedent};
use crate::domain::foundation::{DomainError, ErrorCode, OptionId};
use crate::ports::{BaselineProvider, ConsequenceSource, PrecedentSource};

use crate::adapters::memory::StaticBaselineProvider;

/// On-disk policy layout.
///
/// `baselines` may be omitted to use the reference posture; when present,
/// gaps surface as missing baselines at analysis time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baselines: Option<BTreeMap<Dimension, BaselineEntry>>,
    #[serde(default)]
    pub weights: PriorityWeights,
    #[serde(default = "default_weighted_scoring")]
    pub weighted_scoring: bool,
    #[serde(default)]
    pub fatigue: FatigueThresholds,
    #[serde(default)]
    pub strict_integrity: bool,
    #[serde(default)]
    pub consequences: ConsequenceCatalog,
    #[serde(default)]
    pub precedents: Vec<Precedent>,
}

fn default_weighted_scoring() -> bool {
    true
}

impl Default for PolicyDocument {
    fn default() -> Self {
        Self {
            baselines: None,
            weights: PriorityWeights::default(),
            weighted_scoring: default_weighted_scoring(),
            fatigue: FatigueThresholds::default(),
            strict_integrity: false,
            consequences: ConsequenceCatalog::empty(),
            precedents: Vec::new(),
        }
    }
}

impl PolicyDocument {
    /// Parse a document, choosing the format from the file extension.
    ///
    /// `.json` is read as JSON; anything else as YAML.
    pub fn parse(path: &Path, contents: &str) -> Result<Self, DomainError> {
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let parsed = if is_json {
            serde_json::from_str(contents).map_err(|e| e.to_string())
        } else {
            serde_yaml::from_str(contents).map_err(|e| e.to_string())
        };

        let document: Self =
            parsed.map_err(|e| unreadable(path, format!("Invalid policy document: {}", e)))?;
        document
            .analysis_policy()
            .validate()
            .map_err(|e| unreadable(path, format!("Invalid policy document: {}", e)))?;
        Ok(document)
    }

    /// Analysis policy with the reference baselines.
    ///
    /// Baselines are resolved separately through `BaselineProvider`.
    pub fn analysis_policy(&self) -> AnalysisPolicy {
        AnalysisPolicy {
            weights: self.weights,
            weighted_scoring: self.weighted_scoring,
            fatigue: self.fatigue,
            strict_integrity: self.strict_integrity,
            ..AnalysisPolicy::default()
        }
    }
}

fn unreadable(path: &Path, message: impl Into<String>) -> DomainError {
    DomainError::new(ErrorCode::PolicyUnreadable, message)
        .with_detail("path", path.display().to_string())
}

/// A policy document loaded from disk.
#[derive(Debug, Clone)]
pub struct PolicyFile {
    path: PathBuf,
    document: PolicyDocument,
}

impl PolicyFile {
    /// Read and parse a policy file.
    ///
    /// # Errors
    /// `PolicyUnreadable` if the file is missing or malformed.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();

        let contents = fs::read_to_string(&path)
            .await
            .map_err(|e| unreadable(&path, format!("Cannot read policy file: {}", e)))?;
        let document = PolicyDocument::parse(&path, &contents)?;

        info!(
            path = %path.display(),
            options = document.consequences.len(),
            precedents = document.precedents.len(),
            "Loaded policy file"
        );

        Ok(Self { path, document })
    }

    /// Wrap an already parsed document.
    pub fn from_document(path: impl Into<PathBuf>, document: PolicyDocument) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &PolicyDocument {
        &self.document
    }

    pub fn analysis_policy(&self) -> AnalysisPolicy {
        self.document.analysis_policy()
    }
}

#[async_trait]
impl ConsequenceSource for PolicyFile {
    async fn templates_for(&self, option_ids: &[OptionId]) -> Result<ConsequenceCatalog, DomainError> {
        Ok(self.document.consequences.subset(option_ids))
    }
}

#[async_trait]
impl BaselineProvider for PolicyFile {
    async fn baselines(&self) -> Result<BTreeMap<Dimension, BaselineEntry>, DomainError> {
        match &self.document.baselines {
            Some(entries) => Ok(entries.clone()),
            None => StaticBaselineProvider::reference().baselines().await,
        }
    }
}

#[async_trait]
impl PrecedentSource for PolicyFile {
    async fn find_by_category(&self, category: &str) -> Result<Vec<Precedent>, DomainError> {
        let category = category.trim();
        if category.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .document
            .precedents
            .iter()
            .filter(|p| p.category.trim().eq_ignore_ascii_case(category))
            .cloned()
            .collect())
    }
}
