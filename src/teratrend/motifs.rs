//! Structural-motif synthesis per therapeutic area.

use rand::Rng;

use crate::core::seed::{self, stream};
use crate::core::TherapeuticArea;

use super::StructuralMotif;

struct MotifSeed {
    motif_type: &'static str,
    base_frequency: f64,
    therapeutic_impact: &'static str,
    innovation_potential: &'static str,
}

const CARDIOVASCULAR_MOTIFS: &[MotifSeed] = &[
    MotifSeed {
        motif_type: "Zinc-binding carboxyl pharmacophore",
        base_frequency: 0.62,
        therapeutic_impact: "Sustained enzyme engagement with once-daily dosing",
        innovation_potential: "moderate",
    },
    MotifSeed {
        motif_type: "Lipophilic aryl core with polar head group",
        base_frequency: 0.74,
        therapeutic_impact: "Membrane penetration balanced against renal clearance",
        innovation_potential: "established",
    },
    MotifSeed {
        motif_type: "Single chiral center governing receptor selectivity",
        base_frequency: 0.55,
        therapeutic_impact: "Enantiopure follow-ons with cleaner side-effect profiles",
        innovation_potential: "high",
    },
];

const ANTI_INFECTIVE_MOTIFS: &[MotifSeed] = &[
    MotifSeed {
        motif_type: "Beta-lactam or mimetic warhead",
        base_frequency: 0.58,
        therapeutic_impact: "Covalent target inactivation; resistance-prone",
        innovation_potential: "renewed",
    },
    MotifSeed {
        motif_type: "Efflux-evading side chain",
        base_frequency: 0.41,
        therapeutic_impact: "Restored potency against resistant isolates",
        innovation_potential: "high",
    },
    MotifSeed {
        motif_type: "Zwitterionic solubilizing group",
        base_frequency: 0.66,
        therapeutic_impact: "Parenteral and oral formulation flexibility",
        innovation_potential: "established",
    },
];

const ONCOLOGY_MOTIFS: &[MotifSeed] = &[
    MotifSeed {
        motif_type: "Hinge-binding heteroaryl scaffold",
        base_frequency: 0.79,
        therapeutic_impact: "ATP-competitive kinase inhibition",
        innovation_potential: "established",
    },
    MotifSeed {
        motif_type: "Covalent acrylamide warhead",
        base_frequency: 0.33,
        therapeutic_impact: "Durable target occupancy at lower exposures",
        innovation_potential: "high",
    },
    MotifSeed {
        motif_type: "Solvent-front mutation tolerance",
        base_frequency: 0.27,
        therapeutic_impact: "Activity retained after first-line resistance",
        innovation_potential: "high",
    },
];

const METABOLIC_MOTIFS: &[MotifSeed] = &[
    MotifSeed {
        motif_type: "Glucose-mimetic glycoside core",
        base_frequency: 0.52,
        therapeutic_impact: "Transporter-level glycemic control",
        innovation_potential: "moderate",
    },
    MotifSeed {
        motif_type: "Peptidomimetic protease-resistant backbone",
        base_frequency: 0.48,
        therapeutic_impact: "Extended incretin half-life",
        innovation_potential: "high",
    },
    MotifSeed {
        motif_type: "Biguanide polar cluster",
        base_frequency: 0.39,
        therapeutic_impact: "Mitochondrial signaling without hypoglycemia",
        innovation_potential: "established",
    },
];

const NEUROLOGY_MOTIFS: &[MotifSeed] = &[
    MotifSeed {
        motif_type: "Blood-brain-barrier permeant amine",
        base_frequency: 0.81,
        therapeutic_impact: "Central exposure at tolerated peripheral doses",
        innovation_potential: "established",
    },
    MotifSeed {
        motif_type: "Receptor-subtype selective aryl piperazine",
        base_frequency: 0.46,
        therapeutic_impact: "Narrowed receptor footprint, fewer off-target effects",
        innovation_potential: "moderate",
    },
    MotifSeed {
        motif_type: "Slow-dissociation binding kinetics",
        base_frequency: 0.35,
        therapeutic_impact: "Functional selectivity beyond raw affinity",
        innovation_potential: "high",
    },
];

const GENERIC_MOTIFS: &[MotifSeed] = &[
    MotifSeed {
        motif_type: "Rule-of-five compliant small molecule",
        base_frequency: 0.72,
        therapeutic_impact: "Oral bioavailability with conventional formulation",
        innovation_potential: "established",
    },
    MotifSeed {
        motif_type: "Metabolically soft spot shielding",
        base_frequency: 0.44,
        therapeutic_impact: "Reduced first-pass loss and drug-drug interaction risk",
        innovation_potential: "moderate",
    },
    MotifSeed {
        motif_type: "Prodrug masking of polar functionality",
        base_frequency: 0.31,
        therapeutic_impact: "Absorption gains traded against activation variability",
        innovation_potential: "moderate",
    },
];

fn seeds_for(area: TherapeuticArea) -> &'static [MotifSeed] {
    match area {
        TherapeuticArea::Cardiovascular => CARDIOVASCULAR_MOTIFS,
        TherapeuticArea::AntiInfective => ANTI_INFECTIVE_MOTIFS,
        TherapeuticArea::Oncology => ONCOLOGY_MOTIFS,
        TherapeuticArea::Metabolic => METABOLIC_MOTIFS,
        TherapeuticArea::Neurology => NEUROLOGY_MOTIFS,
        _ => GENERIC_MOTIFS,
    }
}

/// Synthesize the motif profile for a drug within its therapeutic area.
///
/// Frequencies carry per-drug jitter on top of the area baseline and always
/// land in `0.0..=1.0`; the returned set is never empty, unknown areas use
/// the generic scaffold profile.
pub fn analyze_motifs(drug: &str, area: TherapeuticArea) -> Vec<StructuralMotif> {
    let mut rng = seed::seeded_rng(drug, stream::MOTIFS);
    seeds_for(area)
        .iter()
        .map(|seed| StructuralMotif {
            motif_type: seed.motif_type.to_string(),
            frequency: (seed.base_frequency + rng.gen_range(-0.08..0.08)).clamp(0.01, 0.99),
            therapeutic_impact: seed.therapeutic_impact.to_string(),
            innovation_potential: seed.innovation_potential.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_area_yields_motifs() {
        for area in [
            TherapeuticArea::Cardiovascular,
            TherapeuticArea::AntiInfective,
            TherapeuticArea::Oncology,
            TherapeuticArea::Metabolic,
            TherapeuticArea::Neurology,
            TherapeuticArea::Respiratory,
            TherapeuticArea::General,
        ] {
            assert!(!analyze_motifs("somedrug", area).is_empty());
        }
    }

    #[test]
    fn frequencies_stay_in_unit_range() {
        for motif in analyze_motifs("atorvastatin", TherapeuticArea::Cardiovascular) {
            assert!((0.0..=1.0).contains(&motif.frequency));
        }
    }

    #[test]
    fn motifs_are_deterministic_per_drug() {
        let a = analyze_motifs("lisinopril", TherapeuticArea::Cardiovascular);
        let b = analyze_motifs("lisinopril", TherapeuticArea::Cardiovascular);
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_differs_between_drugs() {
        let a = analyze_motifs("lisinopril", TherapeuticArea::Cardiovascular);
        let b = analyze_motifs("enalapril", TherapeuticArea::Cardiovascular);
        let same_frequencies = a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| (x.frequency - y.frequency).abs() < f64::EPSILON);
        assert!(!same_frequencies);
    }
}
