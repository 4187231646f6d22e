pub mod errors;
pub mod seed;

use serde::{Deserialize, Serialize};

/// Study designs recognized by the literature pipeline.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StudyType {
    RandomizedControlledTrial,
    SystematicReview,
    MetaAnalysis,
    CohortStudy,
    CaseControlStudy,
    CaseSeries,
    ObservationalStudy,
}

impl StudyType {
    /// Relative weight of the design in the evidence hierarchy (0..=1).
    pub fn evidence_weight(&self) -> f64 {
        match self {
            StudyType::MetaAnalysis => 1.0,
            StudyType::SystematicReview => 0.95,
            StudyType::RandomizedControlledTrial => 0.9,
            StudyType::CohortStudy => 0.7,
            StudyType::CaseControlStudy => 0.6,
            StudyType::ObservationalStudy => 0.5,
            StudyType::CaseSeries => 0.4,
        }
    }

    /// Designs that aggregate primary studies rather than report them.
    pub fn is_secondary_research(&self) -> bool {
        matches!(self, StudyType::SystematicReview | StudyType::MetaAnalysis)
    }
}

impl std::fmt::Display for StudyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(StudyType, &str)] = &[
            (
                StudyType::RandomizedControlledTrial,
                "Randomized Controlled Trial",
            ),
            (StudyType::SystematicReview, "Systematic Review"),
            (StudyType::MetaAnalysis, "Meta-Analysis"),
            (StudyType::CohortStudy, "Cohort Study"),
            (StudyType::CaseControlStudy, "Case-Control Study"),
            (StudyType::CaseSeries, "Case Series"),
            (StudyType::ObservationalStudy, "Observational Study"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(st, _)| st == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Quality band for a scored article.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QualityBand {
    Low,
    Moderate,
    High,
}

impl QualityBand {
    /// Classify a 0..=1 quality score with the default thresholds
    /// (high >= 0.8, moderate >= 0.6).
    pub fn from_score(score: f64) -> Self {
        Self::from_score_with(score, 0.8, 0.6)
    }

    pub fn from_score_with(score: f64, high: f64, moderate: f64) -> Self {
        match score {
            s if s >= high => QualityBand::High,
            s if s >= moderate => QualityBand::Moderate,
            _ => QualityBand::Low,
        }
    }
}

impl std::fmt::Display for QualityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_str = match self {
            QualityBand::High => "High",
            QualityBand::Moderate => "Moderate",
            QualityBand::Low => "Low",
        };
        write!(f, "{display_str}")
    }
}

/// GRADE certainty-of-evidence levels.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EvidenceGrade {
    VeryLow,
    Low,
    Moderate,
    High,
}

impl EvidenceGrade {
    pub fn from_quality_score(score: f64) -> Self {
        match score {
            s if s >= 0.8 => EvidenceGrade::High,
            s if s >= 0.65 => EvidenceGrade::Moderate,
            s if s >= 0.5 => EvidenceGrade::Low,
            _ => EvidenceGrade::VeryLow,
        }
    }

    /// One step down the GRADE ladder; saturates at VeryLow.
    pub fn downgraded(&self) -> Self {
        match self {
            EvidenceGrade::High => EvidenceGrade::Moderate,
            EvidenceGrade::Moderate => EvidenceGrade::Low,
            EvidenceGrade::Low | EvidenceGrade::VeryLow => EvidenceGrade::VeryLow,
        }
    }
}

impl std::fmt::Display for EvidenceGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(EvidenceGrade, &str)] = &[
            (EvidenceGrade::High, "High"),
            (EvidenceGrade::Moderate, "Moderate"),
            (EvidenceGrade::Low, "Low"),
            (EvidenceGrade::VeryLow, "Very Low"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(g, _)| g == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Clinical trial phase.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrialPhase {
    Phase1,
    Phase2,
    Phase3,
    Phase4,
}

impl std::fmt::Display for TrialPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(TrialPhase, &str)] = &[
            (TrialPhase::Phase1, "Phase 1"),
            (TrialPhase::Phase2, "Phase 2"),
            (TrialPhase::Phase3, "Phase 3"),
            (TrialPhase::Phase4, "Phase 4"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(p, _)| p == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// Registry status of a clinical trial.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrialStatus {
    Completed,
    Active,
    Recruiting,
    Terminated,
}

impl std::fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let display_str = match self {
            TrialStatus::Completed => "Completed",
            TrialStatus::Active => "Active",
            TrialStatus::Recruiting => "Recruiting",
            TrialStatus::Terminated => "Terminated",
        };
        write!(f, "{display_str}")
    }
}

/// Broad therapeutic area used by classification and trend synthesis.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TherapeuticArea {
    Cardiovascular,
    AntiInfective,
    Oncology,
    Metabolic,
    Neurology,
    Gastrointestinal,
    Respiratory,
    Immunology,
    Musculoskeletal,
    General,
}

impl std::fmt::Display for TherapeuticArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(TherapeuticArea, &str)] = &[
            (TherapeuticArea::Cardiovascular, "Cardiovascular"),
            (TherapeuticArea::AntiInfective, "Anti-infective"),
            (TherapeuticArea::Oncology, "Oncology"),
            (TherapeuticArea::Metabolic, "Metabolic"),
            (TherapeuticArea::Neurology, "Neurology"),
            (TherapeuticArea::Gastrointestinal, "Gastrointestinal"),
            (TherapeuticArea::Respiratory, "Respiratory"),
            (TherapeuticArea::Immunology, "Immunology"),
            (TherapeuticArea::Musculoskeletal, "Musculoskeletal"),
            (TherapeuticArea::General, "General"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(a, _)| a == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}
