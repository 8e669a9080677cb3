//! Cognitive load advisory for the human decision-maker.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Level;

use super::FatigueThresholds;

/// Fatigue band derived from time on duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatigueLevel {
    Low,
    Medium,
    High,
}

/// Advisory attached to every analysis, independent of option scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveLoadWarning {
    /// Minutes on duty.
    pub time_on_duty: u32,
    pub fatigue_level: FatigueLevel,
    pub recommend_consultation: bool,
    pub recommend_break: bool,
}

pub struct CognitiveLoadAssessor;

impl CognitiveLoadAssessor {
    /// Maps minutes on duty to a fatigue band.
    pub fn fatigue_level(time_on_duty: u32, thresholds: &FatigueThresholds) -> FatigueLevel {
        if time_on_duty > thresholds.high_above {
            FatigueLevel::High
        } else if time_on_duty >= thresholds.medium_from {
            FatigueLevel::Medium
        } else {
            FatigueLevel::Low
        }
    }

    /// Builds the advisory. Consultation and a break are recommended only
    /// when high fatigue meets high or critical urgency.
    pub fn assess(
        time_on_duty: u32,
        urgency: Level,
        thresholds: &FatigueThresholds,
    ) -> CognitiveLoadWarning {
        let fatigue_level = Self::fatigue_level(time_on_duty, thresholds);
        let triggered = fatigue_level == FatigueLevel::High && urgency.is_elevated();

        CognitiveLoadWarning {
            time_on_duty,
            fatigue_level,
            recommend_consultation: triggered,
            recommend_break: triggered,
        }
    }
}
