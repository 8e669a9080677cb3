//! Four-step level scale shared by urgency, severity and priority.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Low to critical, ordered so that `Critical` compares greatest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl Level {
    /// All levels, lowest first.
    pub const ALL: [Level; 4] = [Level::Low, Level::Medium, Level::High, Level::Critical];

    /// Parses a level from its lowercase wire name.
    pub fn try_from_str(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Level::Low),
            "medium" => Ok(Level::Medium),
            "high" => Ok(Level::High),
            "critical" => Ok(Level::Critical),
            other => Err(ValidationError::invalid_format(
                "level",
                format!("unknown level '{}'", other),
            )),
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
            Level::Critical => "Critical",
        }
    }

    /// Returns true for `High` and `Critical`.
    pub fn is_elevated(&self) -> bool {
        *self >= Level::High
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_low_to_critical() {
        assert!(Level::Low < Level::Medium);
        assert!(Level::Medium < Level::High);
        assert!(Level::High < Level::Critical);
    }

    #[test]
    fn only_high_and_critical_are_elevated() {
        assert!(!Level::Low.is_elevated());
        assert!(!Level::Medium.is_elevated());
        assert!(Level::High.is_elevated());
        assert!(Level::Critical.is_elevated());
    }

    #[test]
    fn try_from_str_is_case_insensitive() {
        assert_eq!(Level::try_from_str("CRITICAL").unwrap(), Level::Critical);
        assert!(Level::try_from_str("severe").is_err());
    }

    #[test]
    fn level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Level::High).unwrap(), "\"high\"");
        let level: Level = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(level, Level::Medium);
    }
}
