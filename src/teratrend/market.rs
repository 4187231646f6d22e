//! Market-dynamics and innovation-pattern synthesis.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::seed::{self, stream};
use crate::core::TherapeuticArea;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MarketDynamics {
    pub market_phase: String,
    pub patent_cliff_exposure: String,
    /// Share of class revenue facing near-term patent expiry, in `0.0..=1.0`.
    pub patent_cliff_index: f64,
    pub generic_pressure: String,
    /// Intensity of generic competition, in `0.0..=1.0`.
    pub generic_pressure_index: f64,
    pub pipeline_density: String,
    /// Late-stage pipeline crowding, in `0.0..=1.0`.
    pub pipeline_density_index: f64,
    pub differentiation_drivers: Vec<String>,
    pub access_pressure: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InnovationPatterns {
    pub dominant_pattern: String,
    /// Share of recent class innovation judged incremental rather than
    /// breakthrough, in `0.0..=1.0`.
    pub incremental_breakthrough_ratio: f64,
    pub recent_approvals_estimate: usize,
    pub white_space: Vec<String>,
    /// How much mechanistic ground remains unclaimed, in `0.0..=1.0`.
    pub white_space_score: f64,
}

const MARKET_PHASES: &[&str] = &["expansion", "maturity", "late maturity", "renewal"];

const ACCESS_PRESSURE: &[&str] = &[
    "Payer step-therapy favors established low-cost agents",
    "Outcome-based contracts gate access to newest entrants",
    "Broad formulary access with modest prior-authorization burden",
];

fn patent_cliff_label(index: f64) -> &'static str {
    match index {
        i if i >= 0.7 => "Major class patents expire within two years",
        i if i >= 0.35 => "Key exclusivity runs out mid-decade",
        _ => "Recent entrants hold long exclusivity runways",
    }
}

fn generic_pressure_label(index: f64) -> &'static str {
    match index {
        i if i >= 0.7 => "Originators fully genericized; competition is price-led",
        i if i >= 0.35 => "First generics recently entered; branded share eroding",
        _ => "Exclusivity intact for lead agents; generics on the horizon",
    }
}

fn pipeline_density_label(index: f64) -> &'static str {
    match index {
        i if i >= 0.7 => "Crowded late-stage pipeline across the class",
        i if i >= 0.35 => "Selective late-stage activity from a few sponsors",
        _ => "Thin pipeline with little late-stage investment",
    }
}

fn differentiation_drivers(area: TherapeuticArea) -> Vec<String> {
    let drivers: &[&str] = match area {
        TherapeuticArea::Cardiovascular => &[
            "Outcome-trial mortality data",
            "Dosing convenience and fixed-dose combinations",
            "Renal-safety profile",
        ],
        TherapeuticArea::AntiInfective => &[
            "Activity against resistant isolates",
            "Oral step-down availability",
            "Stewardship positioning",
        ],
        TherapeuticArea::Oncology => &[
            "Progression-free survival deltas",
            "CNS penetration",
            "Tolerability at full dose intensity",
        ],
        TherapeuticArea::Metabolic => &[
            "Weight and cardio-renal co-benefits",
            "Injection interval",
            "Oral formulation availability",
        ],
        _ => &[
            "Head-to-head comparative data",
            "Convenience of administration",
            "Safety-label breadth",
        ],
    };
    drivers.iter().map(|d| d.to_string()).collect()
}

/// Market view for a drug's class, deterministic per drug name. Each
/// pressure is drawn as a unit-range index and labeled from it, so the
/// narrative never contradicts the number.
pub fn analyze_market_dynamics(drug: &str, area: TherapeuticArea) -> MarketDynamics {
    let mut rng = seed::seeded_rng(drug, stream::MARKET);

    let patent_cliff_index = rng.gen_range(0.0..=1.0);
    let generic_pressure_index = rng.gen_range(0.0..=1.0);
    let pipeline_density_index = rng.gen_range(0.0..=1.0);

    MarketDynamics {
        market_phase: pick(&mut rng, MARKET_PHASES),
        patent_cliff_exposure: patent_cliff_label(patent_cliff_index).to_string(),
        patent_cliff_index,
        generic_pressure: generic_pressure_label(generic_pressure_index).to_string(),
        generic_pressure_index,
        pipeline_density: pipeline_density_label(pipeline_density_index).to_string(),
        pipeline_density_index,
        differentiation_drivers: differentiation_drivers(area),
        access_pressure: pick(&mut rng, ACCESS_PRESSURE),
    }
}

/// Innovation view for a drug's class, deterministic per drug name.
pub fn analyze_innovation_patterns(drug: &str, area: TherapeuticArea) -> InnovationPatterns {
    let mut rng = seed::seeded_rng(drug, stream::INNOVATION);

    let dominant_pattern = match area {
        TherapeuticArea::Oncology | TherapeuticArea::Metabolic => {
            "Fast-follower races on validated targets"
        }
        TherapeuticArea::AntiInfective => "Push-pull incentives reviving dormant scaffolds",
        TherapeuticArea::Cardiovascular => "Lifecycle extension through combinations and new intervals",
        _ => "Incremental optimization within proven mechanisms",
    }
    .to_string();

    let white_space: &[&str] = match area {
        TherapeuticArea::Cardiovascular => {
            &["Residual inflammatory risk", "Heart-failure phenotypes beyond ejection fraction"]
        }
        TherapeuticArea::AntiInfective => {
            &["Gram-negative cell-wall permeability", "Biofilm-resident infection"]
        }
        TherapeuticArea::Oncology => &["Tumor-agnostic resistance reversal", "Brain-metastasis control"],
        TherapeuticArea::Metabolic => &["Durable remission endpoints", "Lean-mass-sparing weight loss"],
        _ => &["Mechanistically novel first-in-class entries"],
    };

    let recent_approvals_estimate = rng.gen_range(1..=9);
    let incremental_breakthrough_ratio = rng.gen_range(0.4..=0.9);
    let white_space_score =
        (0.2 + 0.15 * white_space.len() as f64 + rng.gen_range(-0.1..=0.1)).clamp(0.0, 1.0);

    InnovationPatterns {
        dominant_pattern,
        incremental_breakthrough_ratio,
        recent_approvals_estimate,
        white_space: white_space.iter().map(|w| w.to_string()).collect(),
        white_space_score,
    }
}

fn pick(rng: &mut rand::rngs::StdRng, pool: &[&str]) -> String {
    pool.choose(rng).copied().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_view_is_deterministic_per_drug() {
        let a = analyze_market_dynamics("atorvastatin", TherapeuticArea::Cardiovascular);
        let b = analyze_market_dynamics("atorvastatin", TherapeuticArea::Cardiovascular);
        assert_eq!(a, b);
    }

    #[test]
    fn every_area_gets_differentiation_drivers() {
        for area in [
            TherapeuticArea::Cardiovascular,
            TherapeuticArea::Respiratory,
            TherapeuticArea::General,
        ] {
            let dynamics = analyze_market_dynamics("anything", area);
            assert!(!dynamics.differentiation_drivers.is_empty());
            assert!(!dynamics.market_phase.is_empty());
        }
    }

    #[test]
    fn approvals_estimate_stays_plausible() {
        let patterns = analyze_innovation_patterns("imatinib", TherapeuticArea::Oncology);
        assert!((1..=9).contains(&patterns.recent_approvals_estimate));
        assert!(!patterns.white_space.is_empty());
    }

    #[test]
    fn market_indices_stay_in_unit_range() {
        for drug in ["atorvastatin", "amoxicillin", "unclassified-compound"] {
            let dynamics = analyze_market_dynamics(drug, TherapeuticArea::General);
            assert!((0.0..=1.0).contains(&dynamics.patent_cliff_index));
            assert!((0.0..=1.0).contains(&dynamics.generic_pressure_index));
            assert!((0.0..=1.0).contains(&dynamics.pipeline_density_index));

            let patterns = analyze_innovation_patterns(drug, TherapeuticArea::General);
            assert!((0.0..=1.0).contains(&patterns.incremental_breakthrough_ratio));
            assert!((0.0..=1.0).contains(&patterns.white_space_score));
        }
    }

    #[test]
    fn pressure_labels_track_their_indices() {
        assert_eq!(
            patent_cliff_label(0.9),
            "Major class patents expire within two years"
        );
        assert_eq!(
            generic_pressure_label(0.1),
            "Exclusivity intact for lead agents; generics on the horizon"
        );
        assert_eq!(
            pipeline_density_label(0.5),
            "Selective late-stage activity from a few sponsors"
        );
    }
}
