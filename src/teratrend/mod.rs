//! Drug-class trend analysis over synthesized pharmacological knowledge.
//!
//! Everything here is derived from static per-area tables plus a seeded RNG
//! keyed on the drug name, so the same compound always yields the same
//! report and no external data source is consulted.

pub mod classes;
pub mod combinations;
pub mod confidence;
pub mod market;
pub mod mechanisms;
pub mod motifs;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PharmascopeConfig;
use crate::core::errors::Result;
use crate::core::seed;
use crate::core::TherapeuticArea;

pub use confidence::{ConfidenceWeights, CONFIDENCE_CEILING, CONFIDENCE_FLOOR};
pub use market::{InnovationPatterns, MarketDynamics};
pub use mechanisms::{
    EvolutionEra, MechanismTrends, TherapeuticEvolution, TimelinePhase,
};

/// Resolved pharmacological class of a drug.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DrugClass {
    pub name: String,
    /// Nomenclature stem that matched, when one did.
    pub stem: Option<String>,
    pub therapeutic_area: TherapeuticArea,
    pub target: String,
}

impl DrugClass {
    pub fn unspecified() -> Self {
        Self {
            name: "Unspecified Therapeutic Class".to_string(),
            stem: None,
            therapeutic_area: TherapeuticArea::General,
            target: "Not established".to_string(),
        }
    }

    pub fn is_unspecified(&self) -> bool {
        self.stem.is_none()
    }
}

impl fmt::Display for DrugClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.therapeutic_area)
    }
}

/// One structural motif observed across a class.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StructuralMotif {
    pub motif_type: String,
    /// Share of class members carrying the motif, in `0.0..=1.0`.
    pub frequency: f64,
    pub therapeutic_impact: String,
    pub innovation_potential: String,
}

/// One plausible combination-therapy direction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CombinationCandidate {
    pub combination_type: String,
    pub mechanism: String,
    pub clinical_potential: String,
    /// How far the most advanced program of this kind has progressed.
    pub development_stage: String,
}

/// Composite trend report for one drug.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TeratrendReport {
    pub drug_name: String,
    pub generated_at: DateTime<Utc>,
    pub drug_class: DrugClass,
    pub structural_motifs: Vec<StructuralMotif>,
    pub mechanism_trends: MechanismTrends,
    pub therapeutic_evolution: TherapeuticEvolution,
    pub market_dynamics: MarketDynamics,
    pub innovation_patterns: InnovationPatterns,
    pub combination_potential: Vec<CombinationCandidate>,
    /// Always within [`CONFIDENCE_FLOOR`]..=[`CONFIDENCE_CEILING`].
    pub prediction_confidence: f64,
}

/// Facade over the trend-analysis pipeline.
pub struct TeratrendAnalyzer {
    weights: ConfidenceWeights,
}

impl Default for TeratrendAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TeratrendAnalyzer {
    pub fn new() -> Self {
        Self {
            weights: ConfidenceWeights::default(),
        }
    }

    pub fn with_config(config: &PharmascopeConfig) -> Self {
        Self {
            weights: ConfidenceWeights {
                motif_weight: config.confidence.motif_weight,
                trend_weight: config.confidence.trend_weight,
                evolution_weight: config.confidence.evolution_weight,
            },
        }
    }

    pub fn weights(&self) -> &ConfidenceWeights {
        &self.weights
    }

    pub fn identify_drug_class(&self, drug: &str) -> DrugClass {
        classes::identify_drug_class(drug)
    }

    /// Full trend pipeline: classification, motif and mechanism synthesis,
    /// market view, combination candidates, confidence scoring.
    ///
    /// An unknown or empty name still produces a complete report under the
    /// unspecified-class fallback.
    pub fn analyze_drug_teratrends(&self, drug: &str) -> Result<TeratrendReport> {
        let name = drug.trim();
        let drug_class = classes::identify_drug_class(name);
        log::debug!("classified {name:?} as {drug_class}");

        let area = drug_class.therapeutic_area;
        let normalized = name.to_lowercase();
        let structural_motifs = motifs::analyze_motifs(&normalized, area);
        let mechanism_trends = mechanisms::analyze_mechanism_trends(area);
        let therapeutic_evolution =
            mechanisms::analyze_therapeutic_evolution(&drug_class.name, area);
        let market_dynamics = market::analyze_market_dynamics(&normalized, area);
        let innovation_patterns = market::analyze_innovation_patterns(&normalized, area);
        let combination_potential = combinations::analyze_combination_potential(&normalized, area);

        let prediction_confidence = self.weights.prediction_confidence(
            &structural_motifs,
            &mechanism_trends,
            &therapeutic_evolution,
        );

        Ok(TeratrendReport {
            drug_name: name.to_string(),
            generated_at: seed::stable_datetime(name),
            drug_class,
            structural_motifs,
            mechanism_trends,
            therapeutic_evolution,
            market_dynamics,
            innovation_patterns,
            combination_potential,
            prediction_confidence,
        })
    }
}
