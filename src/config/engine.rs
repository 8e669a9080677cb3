//! Analysis engine configuration

use serde::Deserialize;
use std::path::Path;

use super::error::ValidationError;
use crate::domain::analysis::AnalysisPolicy;

const POLICY_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// Engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Policy document with baselines, weights, templates and precedents.
    /// Reference policy applies when unset.
    pub policy_path: Option<String>,

    /// Turn off to score by plain impact sums
    #[serde(default = "default_weighted_scoring")]
    pub weighted_scoring: bool,

    /// Time on duty reported for decision-makers with no recorded shift
    #[serde(default)]
    pub default_time_on_duty_minutes: u32,
}

fn default_weighted_scoring() -> bool {
    true
}

impl EngineConfig {
    /// Apply configuration overrides to a policy.
    ///
    /// Weighting stays on only if both the policy and the configuration allow it.
    pub fn apply_to(&self, mut policy: AnalysisPolicy) -> AnalysisPolicy {
        policy.weighted_scoring = policy.weighted_scoring && self.weighted_scoring;
        policy
    }

    /// True when no policy file is configured.
    ///
    /// The reference baselines then apply with no consequence templates or precedents.
    pub fn uses_reference_policy(&self) -> bool {
        self.policy_path.is_none()
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.policy_path {
            let supported = Path::new(path)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| POLICY_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
                .unwrap_or(false);
            if !supported {
                return Err(ValidationError::UnsupportedPolicyFormat(path.clone()));
            }
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy_path: None,
            weighted_scoring: default_weighted_scoring(),
            default_time_on_duty_minutes: 0,
        }
    }
}
