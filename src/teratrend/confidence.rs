//! Prediction-confidence scoring.

use serde::{Deserialize, Serialize};

use super::mechanisms::{MechanismTrends, TherapeuticEvolution};
use super::StructuralMotif;

/// Confidence never drops below this even for unknown compounds.
pub const CONFIDENCE_FLOOR: f64 = 0.5;

/// Confidence never exceeds this; trend projection stays uncertain.
pub const CONFIDENCE_CEILING: f64 = 0.95;

/// Per-signal weights feeding the confidence score.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ConfidenceWeights {
    pub motif_weight: f64,
    pub trend_weight: f64,
    pub evolution_weight: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            motif_weight: 0.04,
            trend_weight: 0.03,
            evolution_weight: 0.02,
        }
    }
}

impl ConfidenceWeights {
    /// Score how much synthesized evidence backs a trend projection.
    ///
    /// Each signal contributes in proportion to how much material the
    /// analysis produced, capped so no single section can saturate the
    /// score; the result is clamped to
    /// [`CONFIDENCE_FLOOR`]..=[`CONFIDENCE_CEILING`].
    pub fn prediction_confidence(
        &self,
        motifs: &[StructuralMotif],
        trends: &MechanismTrends,
        evolution: &TherapeuticEvolution,
    ) -> f64 {
        let motif_signal = motifs.len().min(5) as f64 * self.motif_weight;
        let trend_material = trends.historical_evolution.len() + trends.emerging_targets.len();
        let trend_signal = trend_material.min(8) as f64 * self.trend_weight;
        let evolution_signal = evolution.timeline.len().min(5) as f64 * self.evolution_weight;

        (CONFIDENCE_FLOOR + motif_signal + trend_signal + evolution_signal)
            .clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
    }
}
