//! Decision options - candidate courses of action.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, Probability};

use super::Consequence;

/// Availability of a resource an option draws on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    #[default]
    Available,
    Limited,
    Unavailable,
}

impl Availability {
    /// Lowercase label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Limited => "limited",
            Availability::Unavailable => "unavailable",
        }
    }
}

/// A resource an option needs in order to execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirement {
    pub resource_type: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflict: Option<String>,
}

impl ResourceRequirement {
    /// Creates an available requirement.
    pub fn new(resource_type: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            quantity,
            unit: unit.into(),
            availability: Availability::Available,
            conflict: None,
        }
    }

    /// Sets availability and an optional conflict note.
    pub fn with_availability(mut self, availability: Availability, conflict: Option<&str>) -> Self {
        self.availability = availability;
        self.conflict = conflict.map(str::to_string);
        self
    }
}

/// Execution timing of an option, as free-form durations ("4h", "72 hours").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionTimeline {
    #[serde(default)]
    pub execution_duration: String,
    #[serde(default)]
    pub first_impact: String,
    #[serde(default)]
    pub full_impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversibility_window: Option<String>,
}

/// One candidate course of action.
///
/// Consequence lists are empty on input and filled in by the engine;
/// they are derived, not authoritative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOption {
    pub id: OptionId,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub immediate_consequences: Vec<Consequence>,
    #[serde(default)]
    pub secondary_consequences: Vec<Consequence>,
    #[serde(default)]
    pub resource_requirements: Vec<ResourceRequirement>,
    #[serde(default)]
    pub timeline: OptionTimeline,
    #[serde(default)]
    pub confidence: Probability,
    /// Upstream flag; the engine's own recommendation ignores it.
    #[serde(default)]
    pub recommended: bool,
}

impl DecisionOption {
    /// Creates an option with no consequences or resources.
    pub fn new(id: impl Into<OptionId>, label: impl Into<String>, confidence: f64) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            immediate_consequences: Vec::new(),
            secondary_consequences: Vec::new(),
            resource_requirements: Vec::new(),
            timeline: OptionTimeline::default(),
            confidence: Probability::new(confidence),
            recommended: false,
        }
    }

    /// Adds a resource requirement.
    pub fn with_resource(mut self, requirement: ResourceRequirement) -> Self {
        self.resource_requirements.push(requirement);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_deserializes_with_defaults() {
        let json = r#"{ "id": "opt-a", "label": "Hold position" }"#;
        let option: DecisionOption = serde_json::from_str(json).unwrap();

        assert_eq!(option.id, OptionId::new("opt-a"));
        assert!(option.immediate_consequences.is_empty());
        assert!(option.resource_requirements.is_empty());
        assert_eq!(option.confidence, Probability::ZERO);
        assert!(!option.recommended);
    }

    #[test]
    fn resource_requirement_reads_camel_case() {
        let json = r#"{
            "resourceType": "ISR sorties",
            "quantity": 2,
            "unit": "sorties",
            "availability": "limited",
            "conflict": "Tasked to adjacent sector"
        }"#;
        let req: ResourceRequirement = serde_json::from_str(json).unwrap();
        assert_eq!(req.availability, Availability::Limited);
        assert_eq!(req.conflict.as_deref(), Some("Tasked to adjacent sector"));
    }

    #[test]
    fn availability_label_matches_serialized_form() {
        for availability in [Availability::Available, Availability::Limited, Availability::Unavailable] {
            let json = serde_json::to_string(&availability).unwrap();
            assert_eq!(json, format!("\"{}\"", availability.as_str()));
        }
    }

    #[test]
    fn availability_orders_by_scarcity() {
        assert!(Availability::Available < Availability::Limited);
        assert!(Availability::Limited < Availability::Unavailable);
    }
}
