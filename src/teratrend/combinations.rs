//! Combination-therapy candidate synthesis.

use rand::seq::SliceRandom;

use crate::core::seed::{self, stream};
use crate::core::TherapeuticArea;

use super::CombinationCandidate;

struct CombinationSeed {
    combination_type: &'static str,
    mechanism: &'static str,
    clinical_potential: &'static str,
}

const CARDIOVASCULAR_COMBINATIONS: &[CombinationSeed] = &[
    CombinationSeed {
        combination_type: "Fixed-dose pairing with a thiazide diuretic",
        mechanism: "Volume reduction layered on vascular-tone control",
        clinical_potential: "high",
    },
    CombinationSeed {
        combination_type: "Dual renin-angiotensin and calcium-channel blockade",
        mechanism: "Complementary pressure lowering with edema offset",
        clinical_potential: "high",
    },
    CombinationSeed {
        combination_type: "Polypill with a lipid-lowering backbone",
        mechanism: "Single-tablet adherence across risk factors",
        clinical_potential: "moderate",
    },
];

const ANTI_INFECTIVE_COMBINATIONS: &[CombinationSeed] = &[
    CombinationSeed {
        combination_type: "Beta-lactamase inhibitor pairing",
        mechanism: "Enzyme shielding restores scaffold potency",
        clinical_potential: "high",
    },
    CombinationSeed {
        combination_type: "Dual-mechanism synergy regimen",
        mechanism: "Cell-wall plus protein-synthesis attack narrows escape routes",
        clinical_potential: "moderate",
    },
    CombinationSeed {
        combination_type: "Adjuvant efflux-pump inhibition",
        mechanism: "Intracellular accumulation recovered in resistant strains",
        clinical_potential: "exploratory",
    },
];

const ONCOLOGY_COMBINATIONS: &[CombinationSeed] = &[
    CombinationSeed {
        combination_type: "Vertical pathway blockade",
        mechanism: "Upstream and downstream nodes of one signaling axis",
        clinical_potential: "high",
    },
    CombinationSeed {
        combination_type: "Immune-checkpoint pairing",
        mechanism: "Targeted debulking with immune consolidation",
        clinical_potential: "high",
    },
    CombinationSeed {
        combination_type: "Resistance-preemption doublet",
        mechanism: "Co-targeting the dominant escape mutation",
        clinical_potential: "exploratory",
    },
];

const METABOLIC_COMBINATIONS: &[CombinationSeed] = &[
    CombinationSeed {
        combination_type: "Incretin plus transporter co-therapy",
        mechanism: "Independent glycemic levers with additive weight effect",
        clinical_potential: "high",
    },
    CombinationSeed {
        combination_type: "Backbone metformin pairing",
        mechanism: "Established sensitizer base with newer-agent add-on",
        clinical_potential: "high",
    },
];

const GENERIC_COMBINATIONS: &[CombinationSeed] = &[
    CombinationSeed {
        combination_type: "Adjunct to current standard of care",
        mechanism: "Additive benefit without overlapping toxicity",
        clinical_potential: "moderate",
    },
    CombinationSeed {
        combination_type: "Formulation co-packaging for adherence",
        mechanism: "Regimen simplification rather than new pharmacology",
        clinical_potential: "moderate",
    },
];

/// How far the furthest-along program of each kind has progressed.
pub const DEVELOPMENT_STAGES: &[&str] = &[
    "preclinical",
    "phase 1",
    "phase 2",
    "phase 3",
    "approved combination",
];

fn seeds_for(area: TherapeuticArea) -> &'static [CombinationSeed] {
    match area {
        TherapeuticArea::Cardiovascular => CARDIOVASCULAR_COMBINATIONS,
        TherapeuticArea::AntiInfective => ANTI_INFECTIVE_COMBINATIONS,
        TherapeuticArea::Oncology => ONCOLOGY_COMBINATIONS,
        TherapeuticArea::Metabolic => METABOLIC_COMBINATIONS,
        _ => GENERIC_COMBINATIONS,
    }
}

/// Combination candidates for a drug, ordered deterministically per drug.
///
/// Never empty: areas without a dedicated table fall back to the generic
/// candidates.
pub fn analyze_combination_potential(drug: &str, area: TherapeuticArea) -> Vec<CombinationCandidate> {
    let mut rng = seed::seeded_rng(drug, stream::COMBINATIONS);
    let mut candidates: Vec<CombinationCandidate> = seeds_for(area)
        .iter()
        .map(|seed| CombinationCandidate {
            combination_type: seed.combination_type.to_string(),
            mechanism: seed.mechanism.to_string(),
            clinical_potential: seed.clinical_potential.to_string(),
            development_stage: DEVELOPMENT_STAGES
                .choose(&mut rng)
                .copied()
                .unwrap_or("preclinical")
                .to_string(),
        })
        .collect();
    candidates.shuffle(&mut rng);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_are_never_empty() {
        for area in [
            TherapeuticArea::Cardiovascular,
            TherapeuticArea::Immunology,
            TherapeuticArea::General,
        ] {
            assert!(!analyze_combination_potential("anydrug", area).is_empty());
        }
    }

    #[test]
    fn ordering_is_deterministic_per_drug() {
        let a = analyze_combination_potential("lisinopril", TherapeuticArea::Cardiovascular);
        let b = analyze_combination_potential("lisinopril", TherapeuticArea::Cardiovascular);
        assert_eq!(a, b);
    }

    #[test]
    fn fields_are_populated() {
        for candidate in analyze_combination_potential("imatinib", TherapeuticArea::Oncology) {
            assert!(!candidate.combination_type.is_empty());
            assert!(!candidate.mechanism.is_empty());
            assert!(!candidate.clinical_potential.is_empty());
            assert!(DEVELOPMENT_STAGES.contains(&candidate.development_stage.as_str()));
        }
    }
}
