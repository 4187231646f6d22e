//! Drug-class identification from nomenclature stems.
//!
//! Classification is a find-first scan over an ordered stem table, so more
//! specific stems must precede the general ones they contain ("piprazole"
//! before "prazole", "tinib" before "nib"). The bare antiviral stem "vir"
//! sits last for the same reason.

use crate::core::TherapeuticArea;

use super::DrugClass;

struct StemEntry {
    stem: &'static str,
    class_name: &'static str,
    area: TherapeuticArea,
    target: &'static str,
}

const STEM_CLASSES: &[StemEntry] = &[
    // metabolic
    StemEntry {
        stem: "gliflozin",
        class_name: "SGLT2 Inhibitor",
        area: TherapeuticArea::Metabolic,
        target: "Sodium-glucose cotransporter 2",
    },
    StemEntry {
        stem: "gliptin",
        class_name: "DPP-4 Inhibitor",
        area: TherapeuticArea::Metabolic,
        target: "Dipeptidyl peptidase-4",
    },
    StemEntry {
        stem: "glitazone",
        class_name: "Thiazolidinedione",
        area: TherapeuticArea::Metabolic,
        target: "PPAR-gamma nuclear receptor",
    },
    StemEntry {
        stem: "glutide",
        class_name: "GLP-1 Receptor Agonist",
        area: TherapeuticArea::Metabolic,
        target: "Glucagon-like peptide-1 receptor",
    },
    StemEntry {
        stem: "formin",
        class_name: "Biguanide Antidiabetic",
        area: TherapeuticArea::Metabolic,
        target: "AMP-activated protein kinase",
    },
    // anti-infective
    StemEntry {
        stem: "floxacin",
        class_name: "Fluoroquinolone Antibiotic",
        area: TherapeuticArea::AntiInfective,
        target: "Bacterial DNA gyrase",
    },
    StemEntry {
        stem: "cycline",
        class_name: "Tetracycline Antibiotic",
        area: TherapeuticArea::AntiInfective,
        target: "Bacterial 30S ribosomal subunit",
    },
    StemEntry {
        stem: "cillin",
        class_name: "Beta-lactam Antibiotic",
        area: TherapeuticArea::AntiInfective,
        target: "Penicillin-binding proteins",
    },
    StemEntry {
        stem: "micin",
        class_name: "Aminoglycoside Antibiotic",
        area: TherapeuticArea::AntiInfective,
        target: "Bacterial 30S ribosomal subunit",
    },
    StemEntry {
        stem: "mycin",
        class_name: "Macrolide Antibiotic",
        area: TherapeuticArea::AntiInfective,
        target: "Bacterial 50S ribosomal subunit",
    },
    StemEntry {
        stem: "conazole",
        class_name: "Azole Antifungal",
        area: TherapeuticArea::AntiInfective,
        target: "Lanosterol 14-alpha demethylase",
    },
    StemEntry {
        stem: "dazole",
        class_name: "Nitroimidazole Antimicrobial",
        area: TherapeuticArea::AntiInfective,
        target: "Microbial DNA synthesis",
    },
    StemEntry {
        stem: "ciclovir",
        class_name: "Nucleoside Analogue Antiviral",
        area: TherapeuticArea::AntiInfective,
        target: "Viral DNA polymerase",
    },
    StemEntry {
        stem: "navir",
        class_name: "Protease Inhibitor Antiviral",
        area: TherapeuticArea::AntiInfective,
        target: "Viral protease",
    },
    // cardiovascular
    StemEntry {
        stem: "statin",
        class_name: "Statin",
        area: TherapeuticArea::Cardiovascular,
        target: "HMG-CoA reductase",
    },
    StemEntry {
        stem: "sartan",
        class_name: "Angiotensin II Receptor Blocker",
        area: TherapeuticArea::Cardiovascular,
        target: "Angiotensin II type 1 receptor",
    },
    StemEntry {
        stem: "pril",
        class_name: "ACE Inhibitor",
        area: TherapeuticArea::Cardiovascular,
        target: "Angiotensin-converting enzyme",
    },
    StemEntry {
        stem: "dipine",
        class_name: "Dihydropyridine Calcium Channel Blocker",
        area: TherapeuticArea::Cardiovascular,
        target: "L-type calcium channels",
    },
    StemEntry {
        stem: "dilol",
        class_name: "Mixed Alpha/Beta Blocker",
        area: TherapeuticArea::Cardiovascular,
        target: "Alpha-1 and beta adrenoceptors",
    },
    StemEntry {
        stem: "olol",
        class_name: "Beta-blocker",
        area: TherapeuticArea::Cardiovascular,
        target: "Beta-adrenergic receptors",
    },
    StemEntry {
        stem: "semide",
        class_name: "Loop Diuretic",
        area: TherapeuticArea::Cardiovascular,
        target: "Na-K-2Cl cotransporter",
    },
    StemEntry {
        stem: "parin",
        class_name: "Low Molecular Weight Heparin",
        area: TherapeuticArea::Cardiovascular,
        target: "Antithrombin III",
    },
    StemEntry {
        stem: "grel",
        class_name: "P2Y12 Inhibitor Antiplatelet",
        area: TherapeuticArea::Cardiovascular,
        target: "P2Y12 ADP receptor",
    },
    // gastrointestinal and neuro overlaps
    StemEntry {
        stem: "piprazole",
        class_name: "Atypical Antipsychotic",
        area: TherapeuticArea::Neurology,
        target: "Dopamine D2 partial agonism",
    },
    StemEntry {
        stem: "prazole",
        class_name: "Proton Pump Inhibitor",
        area: TherapeuticArea::Gastrointestinal,
        target: "Gastric H+/K+ ATPase",
    },
    StemEntry {
        stem: "tidine",
        class_name: "H2 Receptor Antagonist",
        area: TherapeuticArea::Gastrointestinal,
        target: "Histamine H2 receptors",
    },
    StemEntry {
        stem: "setron",
        class_name: "5-HT3 Antagonist Antiemetic",
        area: TherapeuticArea::Gastrointestinal,
        target: "Serotonin 5-HT3 receptors",
    },
    // oncology and biologics
    StemEntry {
        stem: "mab",
        class_name: "Monoclonal Antibody",
        area: TherapeuticArea::Immunology,
        target: "Target-specific surface antigens",
    },
    StemEntry {
        stem: "tinib",
        class_name: "Tyrosine Kinase Inhibitor",
        area: TherapeuticArea::Oncology,
        target: "Receptor tyrosine kinases",
    },
    StemEntry {
        stem: "parib",
        class_name: "PARP Inhibitor",
        area: TherapeuticArea::Oncology,
        target: "Poly(ADP-ribose) polymerase",
    },
    StemEntry {
        stem: "nib",
        class_name: "Small-molecule Kinase Inhibitor",
        area: TherapeuticArea::Oncology,
        target: "Intracellular kinases",
    },
    // neurology
    StemEntry {
        stem: "triptan",
        class_name: "Triptan",
        area: TherapeuticArea::Neurology,
        target: "Serotonin 5-HT1B/1D receptors",
    },
    StemEntry {
        stem: "azepam",
        class_name: "Benzodiazepine",
        area: TherapeuticArea::Neurology,
        target: "GABA-A receptor",
    },
    StemEntry {
        stem: "zolam",
        class_name: "Benzodiazepine",
        area: TherapeuticArea::Neurology,
        target: "GABA-A receptor",
    },
    StemEntry {
        stem: "oxetine",
        class_name: "SSRI Antidepressant",
        area: TherapeuticArea::Neurology,
        target: "Serotonin transporter",
    },
    StemEntry {
        stem: "faxine",
        class_name: "SNRI Antidepressant",
        area: TherapeuticArea::Neurology,
        target: "Serotonin-norepinephrine transporters",
    },
    StemEntry {
        stem: "pramine",
        class_name: "Tricyclic Antidepressant",
        area: TherapeuticArea::Neurology,
        target: "Monoamine reuptake transporters",
    },
    StemEntry {
        stem: "apine",
        class_name: "Atypical Antipsychotic",
        area: TherapeuticArea::Neurology,
        target: "Dopamine and serotonin receptors",
    },
    StemEntry {
        stem: "ridone",
        class_name: "Atypical Antipsychotic",
        area: TherapeuticArea::Neurology,
        target: "Dopamine D2 and serotonin 5-HT2A receptors",
    },
    StemEntry {
        stem: "caine",
        class_name: "Local Anesthetic",
        area: TherapeuticArea::Neurology,
        target: "Voltage-gated sodium channels",
    },
    // musculoskeletal
    StemEntry {
        stem: "coxib",
        class_name: "COX-2 Selective NSAID",
        area: TherapeuticArea::Musculoskeletal,
        target: "Cyclooxygenase-2",
    },
    StemEntry {
        stem: "profen",
        class_name: "Propionic Acid NSAID",
        area: TherapeuticArea::Musculoskeletal,
        target: "Cyclooxygenase-1 and -2",
    },
    StemEntry {
        stem: "dronate",
        class_name: "Bisphosphonate",
        area: TherapeuticArea::Musculoskeletal,
        target: "Farnesyl pyrophosphate synthase",
    },
    // respiratory
    StemEntry {
        stem: "terol",
        class_name: "Beta-2 Agonist Bronchodilator",
        area: TherapeuticArea::Respiratory,
        target: "Beta-2 adrenergic receptors",
    },
    StemEntry {
        stem: "lukast",
        class_name: "Leukotriene Receptor Antagonist",
        area: TherapeuticArea::Respiratory,
        target: "Cysteinyl leukotriene receptor 1",
    },
    StemEntry {
        stem: "tropium",
        class_name: "Muscarinic Antagonist Bronchodilator",
        area: TherapeuticArea::Respiratory,
        target: "Muscarinic acetylcholine receptors",
    },
    // bare antiviral stem, kept last so it cannot shadow anything above
    StemEntry {
        stem: "vir",
        class_name: "Antiviral Agent",
        area: TherapeuticArea::AntiInfective,
        target: "Viral replication machinery",
    },
];

/// Classify a drug by the first stem its normalized name contains; names
/// with no recognized stem fall back to an unspecified class.
pub fn identify_drug_class(drug: &str) -> DrugClass {
    let name = drug.trim().to_lowercase();
    STEM_CLASSES
        .iter()
        .find(|entry| name.contains(entry.stem))
        .map(|entry| DrugClass {
            name: entry.class_name.to_string(),
            stem: Some(entry.stem.to_string()),
            therapeutic_area: entry.area,
            target: entry.target.to_string(),
        })
        .unwrap_or_else(DrugClass::unspecified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_canonical_stems() {
        assert_eq!(identify_drug_class("lisinopril").name, "ACE Inhibitor");
        assert_eq!(identify_drug_class("propranolol").name, "Beta-blocker");
        assert_eq!(identify_drug_class("atorvastatin").name, "Statin");
        assert!(identify_drug_class("amoxicillin").name.contains("Antibiotic"));
    }

    #[test]
    fn specific_stems_win_over_their_suffixes() {
        // aripiprazole contains "prazole" but is not a proton pump inhibitor
        assert_eq!(
            identify_drug_class("aripiprazole").name,
            "Atypical Antipsychotic"
        );
        assert_eq!(
            identify_drug_class("omeprazole").name,
            "Proton Pump Inhibitor"
        );
        assert_eq!(
            identify_drug_class("imatinib").name,
            "Tyrosine Kinase Inhibitor"
        );
        // ranibizumab contains "nib" but is an antibody
        assert_eq!(
            identify_drug_class("ranibizumab").name,
            "Monoclonal Antibody"
        );
    }

    #[test]
    fn unknown_names_fall_back_to_unspecified() {
        let class = identify_drug_class("nonexistent_compound_xq7");
        assert_eq!(class.name, "Unspecified Therapeutic Class");
        assert!(class.stem.is_none());
        assert_eq!(class.therapeutic_area, TherapeuticArea::General);
    }

    #[test]
    fn classification_ignores_case_and_whitespace() {
        assert_eq!(
            identify_drug_class("  Atorvastatin  ").name,
            identify_drug_class("atorvastatin").name
        );
    }

    #[test]
    fn every_stem_is_reachable() {
        // a later stem fully contained in an earlier one could never match
        for (i, entry) in STEM_CLASSES.iter().enumerate() {
            let shadowed = STEM_CLASSES[..i]
                .iter()
                .any(|earlier| entry.stem.contains(earlier.stem));
            assert!(!shadowed, "stem {:?} is shadowed by an earlier entry", entry.stem);
        }
    }
}
