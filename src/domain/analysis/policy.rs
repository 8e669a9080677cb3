//! Analysis policy - baselines, thresholds, priority weights and fatigue bands.
//!
//! Everything the engine treats as institutional policy rather than derived
//! data lives here and is passed in at call time. Nothing is module-level state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use crate::domain::decision::Dimension;
use crate::domain::foundation::{Level, Score, ValidationError};

use super::AnalysisError;

/// Baseline posture, minimum acceptable score and priority tier of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionBaseline {
    pub current_score: Score,
    pub threshold: Score,
    pub priority: Level,
}

impl DimensionBaseline {
    /// Creates a baseline, clamping both scores into 0-100.
    ///
    /// Out-of-range readings are logged before clamping.
    pub fn new(current_score: f64, threshold: f64, priority: Level) -> Self {
        let baseline = Self {
            current_score: Score::clamped(current_score),
            threshold: Score::clamped(threshold),
            priority,
        };
        if !Self::is_within_range(current_score, threshold) {
            warn!(
                current_score,
                threshold,
                clamped_current_score = baseline.current_score.value(),
                clamped_threshold = baseline.threshold.value(),
                "Baseline reading outside 0-100, clamped"
            );
        }
        baseline
    }

    /// True when both readings were already within 0-100.
    pub fn is_within_range(current_score: f64, threshold: f64) -> bool {
        Score::clamped(current_score).value() == current_score
            && Score::clamped(threshold).value() == threshold
    }
}

/// A possibly incomplete baseline reading, as supplied by a readiness feed.
///
/// Priority may be omitted; the reference tier for the dimension applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineEntry {
    #[serde(default)]
    pub current_score: Option<f64>,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub priority: Option<Level>,
}

impl BaselineEntry {
    /// Creates a complete entry.
    pub fn complete(current_score: f64, threshold: f64, priority: Level) -> Self {
        Self {
            current_score: Some(current_score),
            threshold: Some(threshold),
            priority: Some(priority),
        }
    }
}

/// Baselines for all six dimensions.
///
/// Six named fields rather than a map, so a constructed value can never be
/// missing a dimension. Partial data is rejected at the conversion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    try_from = "BTreeMap<Dimension, BaselineEntry>"
)]
pub struct DimensionBaselines {
    pub operational: DimensionBaseline,
    pub political: DimensionBaseline,
    pub personnel: DimensionBaseline,
    pub economic: DimensionBaseline,
    pub environmental: DimensionBaseline,
    pub legal: DimensionBaseline,
}

impl DimensionBaselines {
    /// Reference readiness posture and institutional priority ordering.
    pub fn reference() -> Self {
        Self {
            operational: DimensionBaseline::new(85.0, 60.0, Level::Critical),
            political: DimensionBaseline::new(70.0, 50.0, Level::High),
            personnel: DimensionBaseline::new(80.0, 60.0, Level::Medium),
            economic: DimensionBaseline::new(75.0, 40.0, Level::Medium),
            environmental: DimensionBaseline::new(90.0, 30.0, Level::Low),
            legal: DimensionBaseline::new(100.0, 60.0, Level::Critical),
        }
    }

    /// Reference priority tier of a dimension.
    pub fn reference_priority(dimension: Dimension) -> Level {
        match dimension {
            Dimension::Operational | Dimension::Legal => Level::Critical,
            Dimension::Political => Level::High,
            Dimension::Personnel | Dimension::Economic => Level::Medium,
            Dimension::Environmental => Level::Low,
        }
    }

    /// Builds baselines from a per-dimension map, failing on the first gap.
    pub fn from_entries(
        entries: &BTreeMap<Dimension, BaselineEntry>,
    ) -> Result<Self, AnalysisError> {
        let resolve = |dimension: Dimension| -> Result<DimensionBaseline, AnalysisError> {
            let entry = entries
                .get(&dimension)
                .ok_or_else(|| AnalysisError::missing_baseline(dimension, "entry"))?;
            let current = entry
                .current_score
                .ok_or_else(|| AnalysisError::missing_baseline(dimension, "currentScore"))?;
            let threshold = entry
                .threshold
                .ok_or_else(|| AnalysisError::missing_baseline(dimension, "threshold"))?;
            let priority = entry
                .priority
                .unwrap_or_else(|| Self::reference_priority(dimension));
            Ok(DimensionBaseline::new(current, threshold, priority))
        };

        Ok(Self {
            operational: resolve(Dimension::Operational)?,
            political: resolve(Dimension::Political)?,
            personnel: resolve(Dimension::Personnel)?,
            economic: resolve(Dimension::Economic)?,
            environmental: resolve(Dimension::Environmental)?,
            legal: resolve(Dimension::Legal)?,
        })
    }

    /// Returns the baseline of a dimension.
    pub fn get(&self, dimension: Dimension) -> &DimensionBaseline {
        match dimension {
            Dimension::Operational => &self.operational,
            Dimension::Political => &self.political,
            Dimension::Personnel => &self.personnel,
            Dimension::Economic => &self.economic,
            Dimension::Environmental => &self.environmental,
            Dimension::Legal => &self.legal,
        }
    }

    /// Returns a mutable baseline of a dimension.
    pub fn get_mut(&mut self, dimension: Dimension) -> &mut DimensionBaseline {
        match dimension {
            Dimension::Operational => &mut self.operational,
            Dimension::Political => &mut self.political,
            Dimension::Personnel => &mut self.personnel,
            Dimension::Economic => &mut self.economic,
            Dimension::Environmental => &mut self.environmental,
            Dimension::Legal => &mut self.legal,
        }
    }

    /// Iterates dimensions in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &DimensionBaseline)> {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}

impl Default for DimensionBaselines {
    fn default() -> Self {
        Self::reference()
    }
}

impl TryFrom<BTreeMap<Dimension, BaselineEntry>> for DimensionBaselines {
    type Error = AnalysisError;

    fn try_from(entries: BTreeMap<Dimension, BaselineEntry>) -> Result<Self, Self::Error> {
        Self::from_entries(&entries)
    }
}

/// Multipliers applied to each dimension's projected impact by priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityWeights {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl PriorityWeights {
    /// Every tier counts the same.
    pub fn uniform() -> Self {
        Self {
            critical: 1.0,
            high: 1.0,
            medium: 1.0,
            low: 1.0,
        }
    }

    /// Rejects negative or non-finite multipliers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("weights.critical", self.critical),
            ("weights.high", self.high),
            ("weights.medium", self.medium),
            ("weights.low", self.low),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::out_of_range(field, 0.0, f64::MAX, value));
            }
        }
        Ok(())
    }

    /// Returns the multiplier for a priority tier.
    pub fn weight(&self, priority: Level) -> f64 {
        match priority {
            Level::Critical => self.critical,
            Level::High => self.high,
            Level::Medium => self.medium,
            Level::Low => self.low,
        }
    }
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            critical: 2.0,
            high: 1.5,
            medium: 1.0,
            low: 0.5,
        }
    }
}

/// Time-on-duty bands, in minutes.
///
/// Below `medium_from` is low fatigue; `medium_from..=high_above` is medium;
/// anything beyond `high_above` is high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatigueThresholds {
    pub medium_from: u32,
    pub high_above: u32,
}

impl FatigueThresholds {
    /// Rejects bands where medium fatigue would start after high fatigue.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.medium_from > self.high_above {
            return Err(ValidationError::invalid_format(
                "fatigue",
                format!(
                    "mediumFrom ({}) must not exceed highAbove ({})",
                    self.medium_from, self.high_above
                ),
            ));
        }
        Ok(())
    }
}

impl Default for FatigueThresholds {
    fn default() -> Self {
        Self {
            medium_from: 360,
            high_above: 720,
        }
    }
}

/// Complete call-time policy for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPolicy {
    #[serde(default)]
    pub baselines: DimensionBaselines,
    #[serde(default)]
    pub weights: PriorityWeights,
    /// When false, `overallScore` is the plain sum of projected impacts.
    #[serde(default = "default_weighted_scoring")]
    pub weighted_scoring: bool,
    #[serde(default)]
    pub fatigue: FatigueThresholds,
    /// When true, a sign/type mismatch aborts the analysis instead of being corrected.
    #[serde(default)]
    pub strict_integrity: bool,
}

fn default_weighted_scoring() -> bool {
    true
}

impl AnalysisPolicy {
    /// Replaces the baselines.
    pub fn with_baselines(mut self, baselines: DimensionBaselines) -> Self {
        self.baselines = baselines;
        self
    }

    /// Checks weights and fatigue bands.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights.validate()?;
        self.fatigue.validate()
    }

    /// Effective multiplier for a tier, honoring `weighted_scoring`.
    pub fn weight_for(&self, priority: Level) -> f64 {
        if self.weighted_scoring {
            self.weights.weight(priority)
        } else {
            1.0
        }
    }
}

impl Default for AnalysisPolicy {
    fn default() -> Self {
        Self {
            baselines: DimensionBaselines::reference(),
            weights: PriorityWeights::default(),
            weighted_scoring: default_weighted_scoring(),
            fatigue: FatigueThresholds::default(),
            strict_integrity: false,
        }
    }
}
