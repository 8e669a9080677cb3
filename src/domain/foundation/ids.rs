//! Strongly-typed identifier value objects.
//!
//! Identifiers arrive from upstream planning data as opaque strings
//! (`"dec-001"`, `"opt-strike"`), so each id wraps a `String` rather than a UUID.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an id from any string-like value.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Creates an id, rejecting blank values.
            pub fn try_new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(value))
            }

            /// Returns the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_new(s)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

string_id!(
    /// Identifier of a decision awaiting authorization.
    DecisionId,
    "decision_id"
);

string_id!(
    /// Identifier of one candidate course of action.
    OptionId,
    "option_id"
);

string_id!(
    /// Identifier of a standing risk factor.
    RiskFactorId,
    "risk_factor_id"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_id_displays_inner_value() {
        let id = OptionId::new("opt-a");
        assert_eq!(id.to_string(), "opt-a");
        assert_eq!(id.as_str(), "opt-a");
    }

    #[test]
    fn try_new_rejects_blank_ids() {
        assert!(DecisionId::try_new("   ").is_err());
        assert!(DecisionId::try_new("dec-1").is_ok());
    }

    #[test]
    fn from_str_parses_valid_id() {
        let id: RiskFactorId = "risk-7".parse().unwrap();
        assert_eq!(id, RiskFactorId::new("risk-7"));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&OptionId::new("opt-b")).unwrap();
        assert_eq!(json, "\"opt-b\"");
    }
}
