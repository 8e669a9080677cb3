//! Consequence Projector - expands an option into immediate and secondary consequences.

use tracing::warn;

use crate::domain::decision::{Consequence, ConsequenceKind, Decision, DecisionOption};
use crate::domain::foundation::{OptionId, Probability};

use super::{ConsequenceCatalog, ConsequenceTemplate, DataIntegrityError};

/// Projected consequences of one option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectedConsequences {
    /// Immediate consequences with their cascade trees intact.
    pub immediate: Vec<Consequence>,
    /// Every second-order effect as a flat list; entries carry no nested cascades.
    pub secondary: Vec<Consequence>,
    /// Sign/type mismatches corrected during projection.
    pub integrity_errors: Vec<DataIntegrityError>,
}

impl ProjectedConsequences {
    /// Consequences that feed scoring: immediate roots plus the flat secondary list.
    ///
    /// Nested cascades on immediate roots are skipped here since they already
    /// appear in `secondary`.
    pub fn scoring_set(&self) -> impl Iterator<Item = &Consequence> {
        self.immediate.iter().chain(self.secondary.iter())
    }

    /// Returns true if nothing was projected.
    pub fn is_empty(&self) -> bool {
        self.immediate.is_empty() && self.secondary.is_empty()
    }
}

/// Structural projection of consequence templates.
pub struct ConsequenceProjector;

impl ConsequenceProjector {
    /// Projects the consequences of `option` within `decision`.
    ///
    /// # Algorithm
    /// 1. Look up the option's templates; no templates yields empty lists
    /// 2. Materialize each template, defaulting absent fields and forcing
    ///    the impact sign to agree with the declared kind
    /// 3. Keep immediate trees nested; flatten every cascade into `secondary`
    ///
    /// # Edge Cases
    /// - Zero-likelihood consequences are kept; scoring ignores them
    /// - Likelihoods outside [0,1] are clamped
    pub fn project(
        decision: &Decision,
        option: &DecisionOption,
        catalog: &ConsequenceCatalog,
    ) -> ProjectedConsequences {
        let Some(template) = catalog.lookup(&option.id) else {
            return ProjectedConsequences::default();
        };

        let mut integrity_errors = Vec::new();

        let immediate: Vec<Consequence> = template
            .immediate
            .iter()
            .map(|t| Self::materialize(decision, &option.id, t, &mut integrity_errors))
            .collect();

        let secondary_roots: Vec<Consequence> = template
            .secondary
            .iter()
            .map(|t| Self::materialize(decision, &option.id, t, &mut integrity_errors))
            .collect();

        let mut secondary = Self::flatten_cascades(&immediate);
        for root in &secondary_roots {
            secondary.push(root.detached());
            Self::push_descendants(root, &mut secondary);
        }

        ProjectedConsequences {
            immediate,
            secondary,
            integrity_errors,
        }
    }

    /// Flattens the cascades below `roots` in pre-order, roots excluded.
    pub fn flatten_cascades(roots: &[Consequence]) -> Vec<Consequence> {
        let mut flat = Vec::new();
        for root in roots {
            Self::push_descendants(root, &mut flat);
        }
        flat
    }

    fn push_descendants(node: &Consequence, out: &mut Vec<Consequence>) {
        for child in &node.cascades {
            out.push(child.detached());
            Self::push_descendants(child, out);
        }
    }

    fn materialize(
        decision: &Decision,
        option_id: &OptionId,
        template: &ConsequenceTemplate,
        integrity_errors: &mut Vec<DataIntegrityError>,
    ) -> Consequence {
        let raw_impact = template.impact_score.unwrap_or(0);
        let kind = template
            .kind
            .unwrap_or_else(|| ConsequenceKind::from_impact(raw_impact));

        let impact_score = if kind.admits(raw_impact) {
            raw_impact
        } else {
            let corrected = kind.align(raw_impact);
            warn!(
                decision_id = %decision.id,
                option_id = %option_id,
                dimension = %template.domain,
                impact_score = raw_impact,
                corrected_score = corrected,
                "Consequence impact sign contradicts its type; sign corrected"
            );
            integrity_errors.push(DataIntegrityError {
                option_id: option_id.clone(),
                dimension: template.domain,
                description: template.description.clone(),
                kind,
                impact_score: raw_impact,
                corrected_score: corrected,
            });
            corrected
        };

        let raw_likelihood = template.likelihood.unwrap_or(0.0);
        let likelihood = Probability::new(raw_likelihood);
        if likelihood.value() != raw_likelihood {
            warn!(
                decision_id = %decision.id,
                option_id = %option_id,
                likelihood = raw_likelihood,
                "Consequence likelihood outside [0, 1]; clamped"
            );
        }

        Consequence {
            domain: template.domain,
            kind,
            severity: template.severity.unwrap_or_default(),
            description: template.description.clone(),
            likelihood,
            impact_score,
            timeframe: template.timeframe.unwrap_or_default(),
            affected_metrics: template.affected_metrics.clone(),
            cascades: template
                .cascades
                .iter()
                .map(|c| Self::materialize(decision, option_id, c, integrity_errors))
                .collect(),
        }
    }
}
