//! Consequence catalog - templates keyed by option id.
//!
//! Templates come from an external rules/policy evaluation. They may be
//! incomplete; the projector turns them into fully-populated consequences.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::decision::{ConsequenceKind, Dimension, Timeframe};
use crate::domain::foundation::{Level, OptionId};

/// A consequence as supplied by the template source; any field but `domain` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsequenceTemplate {
    pub domain: Dimension,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ConsequenceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Level>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<Timeframe>,
    #[serde(default)]
    pub affected_metrics: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cascades: Vec<ConsequenceTemplate>,
}

impl ConsequenceTemplate {
    /// Creates a template with kind, likelihood and impact set.
    pub fn new(
        domain: Dimension,
        kind: ConsequenceKind,
        description: impl Into<String>,
        likelihood: f64,
        impact_score: i32,
    ) -> Self {
        Self {
            domain,
            kind: Some(kind),
            severity: None,
            description: description.into(),
            likelihood: Some(likelihood),
            impact_score: Some(impact_score),
            timeframe: None,
            affected_metrics: BTreeSet::new(),
            cascades: Vec::new(),
        }
    }

    /// Sets the severity.
    pub fn with_severity(mut self, severity: Level) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets the timeframe.
    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = Some(timeframe);
        self
    }

    /// Adds an affected KPI.
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.affected_metrics.insert(metric.into());
        self
    }

    /// Attaches a second-order template.
    pub fn with_cascade(mut self, cascade: ConsequenceTemplate) -> Self {
        self.cascades.push(cascade);
        self
    }
}

/// Immediate and secondary templates for one option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionTemplate {
    #[serde(default)]
    pub immediate: Vec<ConsequenceTemplate>,
    #[serde(default)]
    pub secondary: Vec<ConsequenceTemplate>,
}

impl OptionTemplate {
    /// Adds an immediate template.
    pub fn immediate(mut self, template: ConsequenceTemplate) -> Self {
        self.immediate.push(template);
        self
    }

    /// Adds a secondary template.
    pub fn secondary(mut self, template: ConsequenceTemplate) -> Self {
        self.secondary.push(template);
        self
    }
}

/// Deterministic lookup of consequence templates by option id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsequenceCatalog {
    templates: BTreeMap<OptionId, OptionTemplate>,
}

impl ConsequenceCatalog {
    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers templates for an option, replacing any previous entry.
    pub fn with_option(mut self, option_id: impl Into<OptionId>, template: OptionTemplate) -> Self {
        self.templates.insert(option_id.into(), template);
        self
    }

    /// Inserts templates for an option.
    pub fn insert(&mut self, option_id: OptionId, template: OptionTemplate) {
        self.templates.insert(option_id, template);
    }

    /// Looks up the templates for an option.
    pub fn lookup(&self, option_id: &OptionId) -> Option<&OptionTemplate> {
        self.templates.get(option_id)
    }

    /// Returns a catalog restricted to the given options.
    pub fn subset<'a>(&self, option_ids: impl IntoIterator<Item = &'a OptionId>) -> Self {
        let templates = option_ids
            .into_iter()
            .filter_map(|id| self.templates.get(id).map(|t| (id.clone(), t.clone())))
            .collect();
        Self { templates }
    }

    /// Number of options with templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no option has templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
