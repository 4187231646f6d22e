//! Mechanism-trend and therapeutic-evolution synthesis.

use serde::{Deserialize, Serialize};

use crate::core::TherapeuticArea;

/// One era in the mechanistic history of a class.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EvolutionEra {
    pub era: String,
    pub dominant_approach: String,
    pub refinement: String,
}

/// How the mechanism landscape of a class has moved and where it points.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MechanismTrends {
    pub historical_evolution: Vec<EvolutionEra>,
    pub mechanism_complexity: String,
    pub innovation_velocity: String,
    pub emerging_targets: Vec<String>,
}

/// One phase in the therapeutic timeline of a class.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TimelinePhase {
    pub period: String,
    pub milestone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TherapeuticEvolution {
    pub timeline: Vec<TimelinePhase>,
    pub current_generation: String,
    pub next_generation_outlook: String,
}

struct EraSeed {
    era: &'static str,
    dominant_approach: &'static str,
    refinement: &'static str,
}

struct AreaMechanisms {
    eras: &'static [EraSeed],
    complexity: &'static str,
    velocity: &'static str,
    emerging_targets: &'static [&'static str],
    current_generation: &'static str,
    next_generation_outlook: &'static str,
}

const CARDIOVASCULAR: AreaMechanisms = AreaMechanisms {
    eras: &[
        EraSeed {
            era: "1960s-1970s",
            dominant_approach: "Non-selective receptor blockade",
            refinement: "Proof that neurohormonal axes are druggable",
        },
        EraSeed {
            era: "1980s-1990s",
            dominant_approach: "Enzyme inhibition along the renin-angiotensin axis",
            refinement: "Outcome trials established mortality benefit",
        },
        EraSeed {
            era: "2000s-2010s",
            dominant_approach: "Selective receptor antagonism and combination regimens",
            refinement: "Tolerability-driven substitution of earlier agents",
        },
        EraSeed {
            era: "2020s",
            dominant_approach: "Multi-pathway modulation and RNA-targeted agents",
            refinement: "Dosing intervals stretched from daily to biannual",
        },
    ],
    complexity: "Single-target antagonism maturing into multi-pathway modulation",
    velocity: "steady",
    emerging_targets: &["PCSK9", "Lp(a) synthesis", "Aldosterone synthase", "Cardiac myosin"],
    current_generation: "Optimized once-daily oral agents with outcome-trial backing",
    next_generation_outlook: "Long-interval RNA therapeutics layered over oral standards of care",
};

const ANTI_INFECTIVE: AreaMechanisms = AreaMechanisms {
    eras: &[
        EraSeed {
            era: "1940s-1960s",
            dominant_approach: "Natural-product scaffolds used as found",
            refinement: "Empirical screening of fermentation libraries",
        },
        EraSeed {
            era: "1970s-1990s",
            dominant_approach: "Semi-synthetic broadening of spectrum",
            refinement: "Side-chain engineering against early resistance",
        },
        EraSeed {
            era: "2000s-present",
            dominant_approach: "Resistance-aware design and stewardship",
            refinement: "Beta-lactamase inhibitor pairings and narrow-spectrum revival",
        },
    ],
    complexity: "Arms race between scaffold refinement and resistance mutation",
    velocity: "accelerating",
    emerging_targets: &["LpxC", "Efflux pump machinery", "Quorum sensing", "Phage-assisted lysis"],
    current_generation: "Combination regimens guarding legacy scaffolds",
    next_generation_outlook: "Pathogen-specific narrow agents with companion diagnostics",
};

const ONCOLOGY: AreaMechanisms = AreaMechanisms {
    eras: &[
        EraSeed {
            era: "1990s",
            dominant_approach: "Cytotoxic chemotherapy backbones",
            refinement: "Dose-density and supportive-care gains",
        },
        EraSeed {
            era: "2000s",
            dominant_approach: "First-generation targeted kinase inhibition",
            refinement: "Genotype-selected patient populations",
        },
        EraSeed {
            era: "2010s-present",
            dominant_approach: "Resistance-mutation-aware inhibitors and immune engagement",
            refinement: "Sequential therapy mapped to clonal evolution",
        },
    ],
    complexity: "Target-defined niches with rapid generational turnover",
    velocity: "accelerating",
    emerging_targets: &["KRAS G12C", "Protein degradation", "Synthetic lethality pairs"],
    current_generation: "Mutation-selective inhibitors with CNS penetration",
    next_generation_outlook: "Degrader and combination strategies outpacing monotherapy",
};

const METABOLIC: AreaMechanisms = AreaMechanisms {
    eras: &[
        EraSeed {
            era: "1950s-1990s",
            dominant_approach: "Insulin supply and sensitizer pharmacology",
            refinement: "Crude glycemic control with hypoglycemia burden",
        },
        EraSeed {
            era: "2000s-2010s",
            dominant_approach: "Incretin-axis and transporter pharmacology",
            refinement: "Weight-neutral then weight-reducing profiles",
        },
        EraSeed {
            era: "2020s",
            dominant_approach: "Multi-agonist peptides with organ-protection claims",
            refinement: "Cardio-renal outcomes driving indication growth",
        },
    ],
    complexity: "From single-hormone replacement to poly-agonist engineering",
    velocity: "accelerating",
    emerging_targets: &["Dual and triple incretin agonism", "Hepatic lipogenesis", "Amylin analogues"],
    current_generation: "Injectable incretin multi-agonists and oral transporters",
    next_generation_outlook: "Oral peptide delivery collapsing the injectable moat",
};

const NEUROLOGY: AreaMechanisms = AreaMechanisms {
    eras: &[
        EraSeed {
            era: "1950s-1980s",
            dominant_approach: "Serendipitous receptor pharmacology",
            refinement: "Efficacy discovered before mechanism",
        },
        EraSeed {
            era: "1990s-2000s",
            dominant_approach: "Transporter-selective reuptake inhibition",
            refinement: "Tolerability gains over first-generation agents",
        },
        EraSeed {
            era: "2010s-present",
            dominant_approach: "Circuit-level and rapid-acting interventions",
            refinement: "Receptor-trafficking and neuroplasticity pharmacology",
        },
    ],
    complexity: "Receptor-level pharmacology giving way to circuit modulation",
    velocity: "steady",
    emerging_targets: &["NMDA receptor subunits", "Orexin signaling", "Neuroinflammation"],
    current_generation: "Tolerability-optimized monoamine and GABAergic agents",
    next_generation_outlook: "Mechanistically novel rapid-onset agents under active trial",
};

const GENERIC: AreaMechanisms = AreaMechanisms {
    eras: &[
        EraSeed {
            era: "Legacy period",
            dominant_approach: "Phenotype-driven small-molecule discovery",
            refinement: "Optimization against clinical endpoints alone",
        },
        EraSeed {
            era: "Target era",
            dominant_approach: "Mechanism-first design against cloned targets",
            refinement: "Structure-guided potency and selectivity work",
        },
        EraSeed {
            era: "Current period",
            dominant_approach: "Modality-agnostic matching of target to format",
            refinement: "Small molecules, biologics, and conjugates in parallel",
        },
    ],
    complexity: "Heterogeneous; no single mechanistic lineage dominates",
    velocity: "incremental",
    emerging_targets: &["Undrugged protein classes", "Tissue-selective delivery"],
    current_generation: "Mixed portfolio without a defining scaffold",
    next_generation_outlook: "Driven by target biology rather than class chemistry",
};

fn mechanisms_for(area: TherapeuticArea) -> &'static AreaMechanisms {
    match area {
        TherapeuticArea::Cardiovascular => &CARDIOVASCULAR,
        TherapeuticArea::AntiInfective => &ANTI_INFECTIVE,
        TherapeuticArea::Oncology => &ONCOLOGY,
        TherapeuticArea::Metabolic => &METABOLIC,
        TherapeuticArea::Neurology => &NEUROLOGY,
        _ => &GENERIC,
    }
}

/// Mechanism-trend profile for a therapeutic area; the era list is never
/// empty.
pub fn analyze_mechanism_trends(area: TherapeuticArea) -> MechanismTrends {
    let seeds = mechanisms_for(area);
    MechanismTrends {
        historical_evolution: seeds
            .eras
            .iter()
            .map(|e| EvolutionEra {
                era: e.era.to_string(),
                dominant_approach: e.dominant_approach.to_string(),
                refinement: e.refinement.to_string(),
            })
            .collect(),
        mechanism_complexity: seeds.complexity.to_string(),
        innovation_velocity: seeds.velocity.to_string(),
        emerging_targets: seeds
            .emerging_targets
            .iter()
            .map(|t| t.to_string())
            .collect(),
    }
}

/// Therapeutic timeline for a class, phrased around the class name.
pub fn analyze_therapeutic_evolution(class_name: &str, area: TherapeuticArea) -> TherapeuticEvolution {
    let seeds = mechanisms_for(area);
    let timeline = seeds
        .eras
        .iter()
        .enumerate()
        .map(|(i, e)| TimelinePhase {
            period: e.era.to_string(),
            milestone: if i == 0 {
                format!("{class_name} pharmacology first established")
            } else {
                e.refinement.to_string()
            },
        })
        .collect();

    TherapeuticEvolution {
        timeline,
        current_generation: seeds.current_generation.to_string(),
        next_generation_outlook: seeds.next_generation_outlook.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_area_has_a_nonempty_history() {
        for area in [
            TherapeuticArea::Cardiovascular,
            TherapeuticArea::Oncology,
            TherapeuticArea::Gastrointestinal,
            TherapeuticArea::General,
        ] {
            let trends = analyze_mechanism_trends(area);
            assert!(!trends.historical_evolution.is_empty());
            assert!(!trends.emerging_targets.is_empty());
            assert!(!trends.innovation_velocity.is_empty());
        }
    }

    #[test]
    fn timeline_opens_with_the_class_name() {
        let evolution =
            analyze_therapeutic_evolution("ACE Inhibitor", TherapeuticArea::Cardiovascular);
        assert!(evolution.timeline[0].milestone.contains("ACE Inhibitor"));
        assert_eq!(
            evolution.timeline.len(),
            analyze_mechanism_trends(TherapeuticArea::Cardiovascular)
                .historical_evolution
                .len()
        );
    }

    #[test]
    fn unknown_areas_use_the_generic_profile() {
        let trends = analyze_mechanism_trends(TherapeuticArea::General);
        assert_eq!(trends.innovation_velocity, "incremental");
    }
}
