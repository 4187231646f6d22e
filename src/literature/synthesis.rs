//! Evidence synthesis: pooled statistics and the composite review sections.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::seed::ANCHOR_YEAR;
use crate::core::{EvidenceGrade, StudyType, TrialPhase, TrialStatus};

use super::terms;
use super::LiteratureSearchResult;

/// Within-study variance assumed when records do not report their own.
const ASSUMED_WITHIN_STUDY_VARIANCE: f64 = 0.04;

/// Standard error assigned when only a single effect size is available.
const SINGLE_STUDY_STANDARD_ERROR: f64 = 0.2;

// ---------------------------------------------------------------------------
// systematic review

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SystematicReviewSummary {
    pub methodology: ReviewMethodology,
    pub results: ReviewResults,
    pub synthesis: EvidenceSynthesis,
    pub limitations: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewMethodology {
    pub databases_searched: Vec<String>,
    pub search_window: String,
    pub prisma_flow: PrismaFlow,
}

/// PRISMA-style record flow. Each stage is a subset of the previous one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PrismaFlow {
    pub records_identified: usize,
    pub records_screened: usize,
    pub full_text_assessed: usize,
    pub studies_included: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewResults {
    // BTreeMap keeps the serialized design counts in a stable order
    pub included_by_design: BTreeMap<StudyType, usize>,
    pub median_sample_size: u32,
    pub publication_span: (i32, i32),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvidenceSynthesis {
    pub primary_outcomes: String,
    pub effect_direction: EffectDirection,
    pub consistency: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EffectDirection {
    Favorable,
    Neutral,
    Unfavorable,
}

impl fmt::Display for EffectDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EffectDirection::Favorable => "favorable",
            EffectDirection::Neutral => "neutral",
            EffectDirection::Unfavorable => "unfavorable",
        };
        write!(f, "{label}")
    }
}

pub fn build_systematic_review(search: &LiteratureSearchResult) -> SystematicReviewSummary {
    let articles = &search.regular_literature;
    let included = articles.len();

    // duplicates removed before screening; later stages never drop below
    // what actually got included
    let records_identified = search.total_articles;
    let duplicates = records_identified / 12;
    let records_screened = records_identified.saturating_sub(duplicates).max(included);
    let full_text_assessed = ((records_screened as f64 * 0.7) as usize).max(included);
    let prisma_flow = PrismaFlow {
        records_identified: records_identified.max(records_screened),
        records_screened,
        full_text_assessed,
        studies_included: included,
    };

    let included_by_design = articles.iter().fold(BTreeMap::new(), |mut acc, article| {
        *acc.entry(article.study_type).or_insert(0) += 1;
        acc
    });
    let median_sample_size = median_u32(articles.iter().map(|a| a.sample_size).collect());
    let publication_span = match (
        articles.iter().map(|a| a.year).min(),
        articles.iter().map(|a| a.year).max(),
    ) {
        (Some(first), Some(last)) => (first, last),
        _ => (0, 0),
    };
    let search_window = if included == 0 {
        "n/a".to_string()
    } else {
        format!("{}-{}", publication_span.0, publication_span.1)
    };

    let effects: Vec<f64> = articles.iter().map(|a| a.effect_size).collect();
    let pooled = mean(&effects);
    let effect_direction = direction_of(pooled);
    let i2 = i_squared(&effects);
    let consistency = if i2 < 25.0 {
        "Findings were consistent across studies".to_string()
    } else if i2 < 50.0 {
        "Moderate variability across studies".to_string()
    } else {
        "Substantial variability across studies".to_string()
    };
    let primary_outcomes = match effect_direction {
        EffectDirection::Favorable => format!(
            "Pooled outcomes favored {} over comparator arms",
            search.query_term
        ),
        EffectDirection::Neutral => format!(
            "Pooled outcomes for {} were comparable with comparator arms",
            search.query_term
        ),
        EffectDirection::Unfavorable => format!(
            "Pooled outcomes disfavored {} relative to comparator arms",
            search.query_term
        ),
    };

    let rct_count = articles
        .iter()
        .filter(|a| a.study_type == StudyType::RandomizedControlledTrial)
        .count();
    let total_sample: u64 = articles.iter().map(|a| u64::from(a.sample_size)).sum();

    let mut limitations = Vec::new();
    if included > 0 && (rct_count as f64) < 0.3 * included as f64 {
        limitations
            .push("Few randomized trials; observational designs dominate the evidence base".to_string());
    }
    if i2 >= 50.0 {
        limitations
            .push("Substantial between-study heterogeneity limits pooled interpretation".to_string());
    }
    if total_sample < 2_000 {
        limitations.push("Aggregate sample size remains modest".to_string());
    }
    limitations.push("Publication bias cannot be fully excluded".to_string());

    SystematicReviewSummary {
        methodology: ReviewMethodology {
            databases_searched: search.databases_searched.clone(),
            search_window,
            prisma_flow,
        },
        results: ReviewResults {
            included_by_design,
            median_sample_size,
            publication_span,
        },
        synthesis: EvidenceSynthesis {
            primary_outcomes,
            effect_direction,
            consistency,
        },
        limitations,
    }
}

// ---------------------------------------------------------------------------
// meta-analysis

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetaAnalysisResults {
    pub pooled_estimates: PooledEstimates,
    pub heterogeneity: Heterogeneity,
    pub publication_bias: PublicationBias,
    pub studies_pooled: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PooledEstimates {
    pub effect_size: f64,
    pub confidence_interval: (f64, f64),
    pub significance: String,
    pub p_value: f64,
}

impl PooledEstimates {
    /// The 95% CI excludes the null effect.
    pub fn is_significant(&self) -> bool {
        let (low, high) = self.confidence_interval;
        low > 0.0 || high < 0.0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Heterogeneity {
    pub i_squared: f64,
    pub tau_squared: f64,
    pub interpretation: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicationBias {
    pub funnel_asymmetry: String,
    pub egger_p_value: f64,
}

impl MetaAnalysisResults {
    /// Placeholder returned when no effect sizes are available to pool.
    pub fn insufficient() -> Self {
        Self {
            pooled_estimates: PooledEstimates {
                effect_size: 0.0,
                confidence_interval: (0.0, 0.0),
                significance: "Insufficient data".to_string(),
                p_value: 1.0,
            },
            heterogeneity: Heterogeneity {
                i_squared: 0.0,
                tau_squared: 0.0,
                interpretation: "Not assessable".to_string(),
            },
            publication_bias: PublicationBias {
                funnel_asymmetry: "Not assessable".to_string(),
                egger_p_value: 1.0,
            },
            studies_pooled: 0,
        }
    }
}

/// Fixed-effect pooling over the available effect sizes, with Higgins I²
/// and a DerSimonian-Laird tau² for the heterogeneity section.
pub fn pool_meta_analysis(search: &LiteratureSearchResult) -> MetaAnalysisResults {
    // prefer dedicated pooled analyses; fall back to primary-study effects
    let effects: Vec<f64> = if search.meta_analyses.is_empty() {
        search
            .regular_literature
            .iter()
            .map(|a| a.effect_size)
            .collect()
    } else {
        search.meta_analyses.iter().map(|m| m.effect_size).collect()
    };

    if effects.is_empty() {
        return MetaAnalysisResults::insufficient();
    }

    let n = effects.len();
    let pooled = mean(&effects);
    let standard_deviation = sample_variance(&effects, pooled).sqrt();
    let standard_error = if n > 1 {
        standard_deviation / (n as f64).sqrt()
    } else {
        SINGLE_STUDY_STANDARD_ERROR
    };
    let confidence_interval = (pooled - 1.96 * standard_error, pooled + 1.96 * standard_error);

    let pooled_estimates = PooledEstimates {
        effect_size: pooled,
        confidence_interval,
        significance: String::new(),
        p_value: 0.0,
    };
    let z = if standard_error > 0.0 {
        pooled / standard_error
    } else {
        0.0
    };
    let p_value = two_sided_p(z);
    let significance = if pooled_estimates.is_significant() {
        format!("Statistically significant (p = {p_value:.4})")
    } else {
        format!("Not statistically significant (p = {p_value:.4})")
    };
    let pooled_estimates = PooledEstimates {
        significance,
        p_value,
        ..pooled_estimates
    };

    let q = q_statistic(&effects, pooled);
    let degrees_of_freedom = (n - 1) as f64;
    let i_squared = i_squared(&effects);
    let tau_squared = if n > 1 && q > degrees_of_freedom {
        (q - degrees_of_freedom) * ASSUMED_WITHIN_STUDY_VARIANCE / degrees_of_freedom
    } else {
        0.0
    };
    let interpretation = heterogeneity_label(i_squared).to_string();

    let skew = skewness(&effects, pooled, standard_deviation);
    let funnel_asymmetry = if skew.abs() < 0.5 {
        "No material funnel asymmetry".to_string()
    } else if skew.abs() < 1.0 {
        "Mild funnel asymmetry".to_string()
    } else {
        "Marked funnel asymmetry".to_string()
    };
    let egger_p_value = (0.8 - 0.35 * skew.abs()).clamp(0.02, 0.8);

    MetaAnalysisResults {
        pooled_estimates,
        heterogeneity: Heterogeneity {
            i_squared,
            tau_squared,
            interpretation,
        },
        publication_bias: PublicationBias {
            funnel_asymmetry,
            egger_p_value,
        },
        studies_pooled: n,
    }
}

fn heterogeneity_label(i_squared: f64) -> &'static str {
    match i_squared {
        i if i < 25.0 => "Low heterogeneity",
        i if i < 50.0 => "Moderate heterogeneity",
        i if i < 75.0 => "Substantial heterogeneity",
        _ => "Considerable heterogeneity",
    }
}

// ---------------------------------------------------------------------------
// narrative and scoping reviews

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NarrativeReview {
    pub key_themes: Vec<String>,
    pub clinical_context: String,
    pub knowledge_gaps: Vec<String>,
}

pub fn build_narrative_review(drug: &str, search: &LiteratureSearchResult) -> NarrativeReview {
    let name = drug.trim().to_lowercase();
    let display = terms::capitalize(&name);

    let mut key_themes = vec![
        format!("Comparative effectiveness of {name} against established alternatives"),
        format!("Tolerability and discontinuation patterns in long-term {name} use"),
        "Translation of trial efficacy into routine-practice effectiveness".to_string(),
    ];
    if !search.clinical_trials.is_empty() {
        key_themes.push(format!(
            "Trial pipeline maturity across {} registered studies",
            search.clinical_trials.len()
        ));
    }

    let design_count = search.quality_assessment.study_type_distribution.len();
    let clinical_context = format!(
        "{display} has accumulated {} records across {} databases; the synthesized evidence spans {} study designs",
        search.total_articles,
        search.databases_searched.len(),
        design_count
    );

    NarrativeReview {
        key_themes,
        clinical_context,
        knowledge_gaps: vec![
            "Head-to-head comparisons against in-class alternatives remain sparse".to_string(),
            "Elderly and renally impaired patients are under-represented".to_string(),
            "Patient-reported outcomes are inconsistently captured".to_string(),
        ],
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScopingReview {
    pub research_landscape: ResearchLandscape,
    pub evidence_map: BTreeMap<StudyType, usize>,
    pub gaps: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResearchLandscape {
    pub publication_trend: String,
    pub active_research_areas: Vec<String>,
    pub annual_publication_estimate: usize,
}

pub fn build_scoping_review(search: &LiteratureSearchResult) -> ScopingReview {
    let articles = &search.regular_literature;
    let latest = articles.iter().map(|a| a.year).max().unwrap_or(ANCHOR_YEAR);

    let recent = articles.iter().filter(|a| a.year >= latest - 5).count();
    let recent_share = recent as f64 / articles.len().max(1) as f64;
    let publication_trend = if recent_share >= 0.6 {
        "Accelerating".to_string()
    } else if recent_share >= 0.3 {
        "Steady".to_string()
    } else {
        "Declining".to_string()
    };

    let span_years = articles
        .iter()
        .map(|a| a.year)
        .min()
        .map(|first| (latest - first + 1).max(1) as usize)
        .unwrap_or(1);
    let annual_publication_estimate = (articles.len() / span_years).max(1);

    ScopingReview {
        research_landscape: ResearchLandscape {
            publication_trend,
            active_research_areas: vec![
                format!("Efficacy consolidation for {}", search.query_term),
                "Post-marketing safety surveillance".to_string(),
                "Health-economic evaluation".to_string(),
                "Use in special populations".to_string(),
            ],
            annual_publication_estimate,
        },
        evidence_map: search.quality_assessment.study_type_distribution.clone(),
        gaps: vec![
            "Pediatric evidence".to_string(),
            "Very-long-term outcome data".to_string(),
            "Real-world adherence patterns".to_string(),
        ],
    }
}

// ---------------------------------------------------------------------------
// clinical trials

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClinicalTrialSummary {
    pub pivotal_trials: Vec<PivotalTrial>,
    pub total_enrollment: u64,
    pub phase_distribution: BTreeMap<TrialPhase, usize>,
    pub status_distribution: BTreeMap<TrialStatus, usize>,
    pub endpoint_success_rate: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PivotalTrial {
    pub nct_id: String,
    pub title: String,
    pub phase: TrialPhase,
    pub enrollment: u32,
    pub primary_endpoint_met: bool,
}

/// Phase 3+ trials ranked by enrollment are treated as pivotal; at most
/// five are surfaced.
pub fn summarize_clinical_trials(search: &LiteratureSearchResult) -> ClinicalTrialSummary {
    let trials = &search.clinical_trials;

    let mut pivotal: Vec<_> = trials
        .iter()
        .filter(|t| t.phase >= TrialPhase::Phase3)
        .collect();
    pivotal.sort_by(|a, b| b.enrollment.cmp(&a.enrollment));
    let pivotal_trials = pivotal
        .into_iter()
        .take(5)
        .map(|t| PivotalTrial {
            nct_id: t.nct_id.clone(),
            title: t.title.clone(),
            phase: t.phase,
            enrollment: t.enrollment,
            primary_endpoint_met: t.primary_endpoint_met,
        })
        .collect();

    let phase_distribution = trials.iter().fold(BTreeMap::new(), |mut acc, trial| {
        *acc.entry(trial.phase).or_insert(0) += 1;
        acc
    });
    let status_distribution = trials.iter().fold(BTreeMap::new(), |mut acc, trial| {
        *acc.entry(trial.status).or_insert(0) += 1;
        acc
    });

    let completed: Vec<_> = trials
        .iter()
        .filter(|t| t.status == TrialStatus::Completed)
        .collect();
    let endpoint_success_rate = if completed.is_empty() {
        0.0
    } else {
        completed.iter().filter(|t| t.primary_endpoint_met).count() as f64
            / completed.len() as f64
    };

    ClinicalTrialSummary {
        pivotal_trials,
        total_enrollment: trials.iter().map(|t| u64::from(t.enrollment)).sum(),
        phase_distribution,
        status_distribution,
        endpoint_success_rate,
    }
}

// ---------------------------------------------------------------------------
// evidence quality and recommendations

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvidenceQuality {
    pub grade_assessment: Vec<GradeAssessment>,
    pub strength_of_evidence: String,
    pub clinical_recommendations: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GradeAssessment {
    pub outcome: String,
    pub grade: EvidenceGrade,
    pub rationale: String,
}

pub fn assess_evidence_quality(search: &LiteratureSearchResult) -> EvidenceQuality {
    let overall = search.quality_assessment.overall_quality_score;
    let scored = search.regular_literature.len();
    let efficacy = EvidenceGrade::from_quality_score(overall);
    // safety and durability lean on observational follow-up
    let safety = efficacy.downgraded();
    let span = search
        .regular_literature
        .iter()
        .map(|a| a.year)
        .max()
        .zip(search.regular_literature.iter().map(|a| a.year).min())
        .map(|(last, first)| last - first)
        .unwrap_or(0);
    let long_term = if span < 8 { efficacy.downgraded() } else { efficacy };

    let grade_assessment = vec![
        GradeAssessment {
            outcome: "Efficacy".to_string(),
            grade: efficacy,
            rationale: format!("Derived from {scored} scored articles with mean quality {overall:.2}"),
        },
        GradeAssessment {
            outcome: "Safety".to_string(),
            grade: safety,
            rationale: "Safety estimates lean on observational follow-up and registry data"
                .to_string(),
        },
        GradeAssessment {
            outcome: "Long-term outcomes".to_string(),
            grade: long_term,
            rationale: format!("Publication span of {span} years informs durability of effect"),
        },
    ];

    let strength_of_evidence = match efficacy {
        EvidenceGrade::High => "Strong evidence base supporting clinical use",
        EvidenceGrade::Moderate => "Moderate evidence base; key outcomes replicated",
        EvidenceGrade::Low => "Limited evidence base; findings require confirmation",
        EvidenceGrade::VeryLow => "Very limited evidence base; conclusions are provisional",
    }
    .to_string();

    let clinical_recommendations = match efficacy {
        EvidenceGrade::High | EvidenceGrade::Moderate => {
            "Strong recommendation, moderate-to-high certainty evidence"
        }
        EvidenceGrade::Low => "Conditional recommendation, low certainty evidence",
        EvidenceGrade::VeryLow => "No recommendation possible at current certainty",
    }
    .to_string();

    EvidenceQuality {
        grade_assessment,
        strength_of_evidence,
        clinical_recommendations,
    }
}

/// Practice recommendations derived from the synthesized sections; never
/// empty.
pub fn generate_recommendations(
    drug: &str,
    systematic: &SystematicReviewSummary,
    meta: &MetaAnalysisResults,
    trials: &ClinicalTrialSummary,
) -> Vec<String> {
    let display = terms::capitalize(&drug.trim().to_lowercase());
    let mut recommendations = Vec::new();

    if meta.pooled_estimates.is_significant()
        && systematic.synthesis.effect_direction == EffectDirection::Favorable
    {
        recommendations.push(format!(
            "{display} is supported by a statistically significant pooled effect of {:.2}; routine use within labeled indications is reasonable",
            meta.pooled_estimates.effect_size
        ));
    } else {
        recommendations.push(format!(
            "Current pooled evidence for {display} is inconclusive; restrict use to settings with demonstrated benefit"
        ));
    }

    if trials.pivotal_trials.len() >= 2 {
        let largest = trials
            .pivotal_trials
            .iter()
            .map(|t| t.enrollment)
            .max()
            .unwrap_or(0);
        recommendations.push(format!(
            "{} pivotal trials (largest n = {largest}) anchor the efficacy claim; align prescribing with their enrolled populations",
            trials.pivotal_trials.len()
        ));
    }

    if meta.heterogeneity.i_squared >= 50.0 {
        recommendations.push(
            "Between-study heterogeneity is substantial; interpret subgroup claims cautiously"
                .to_string(),
        );
    }

    if systematic.limitations.len() > 2 {
        recommendations.push(
            "Multiple methodological limitations were identified; prioritize confirmatory studies before guideline changes"
                .to_string(),
        );
    }

    recommendations.push(
        "Monitor trial registries for newly reported studies and refresh the synthesis periodically"
            .to_string(),
    );
    recommendations
}

/// Open research questions; never empty.
pub fn future_research_directions(drug: &str, search: &LiteratureSearchResult) -> Vec<String> {
    let name = drug.trim().to_lowercase();
    let mut directions = vec![
        format!("Head-to-head trials of {name} against newer agents in the same class"),
        "Long-term safety surveillance beyond five years of exposure".to_string(),
        "Dedicated studies in renal impairment, pregnancy, and pediatric populations".to_string(),
        "Dose-optimization and de-escalation strategies".to_string(),
    ];
    if search
        .gray_literature
        .iter()
        .any(|g| g.source_type == "preprint")
    {
        directions.push(
            "Peer-reviewed confirmation of findings currently available only as preprints"
                .to_string(),
        );
    }
    directions
}

// ---------------------------------------------------------------------------
// statistics helpers

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_variance(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64
}

fn skewness(values: &[f64], mean: f64, standard_deviation: f64) -> f64 {
    if standard_deviation == 0.0 || values.is_empty() {
        return 0.0;
    }
    values
        .iter()
        .map(|v| ((v - mean) / standard_deviation).powi(3))
        .sum::<f64>()
        / values.len() as f64
}

fn q_statistic(effects: &[f64], mean: f64) -> f64 {
    effects.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / ASSUMED_WITHIN_STUDY_VARIANCE
}

/// Higgins I² against the assumed within-study variance, clamped to
/// percentage range.
fn i_squared(effects: &[f64]) -> f64 {
    if effects.len() < 2 {
        return 0.0;
    }
    let q = q_statistic(effects, mean(effects));
    let degrees_of_freedom = (effects.len() - 1) as f64;
    if q <= degrees_of_freedom {
        return 0.0;
    }
    ((q - degrees_of_freedom) / q * 100.0).clamp(0.0, 100.0)
}

/// Two-sided p from a z statistic via the logistic approximation to the
/// normal CDF.
fn two_sided_p(z: f64) -> f64 {
    let phi = 1.0 / (1.0 + (-1.702 * z.abs()).exp());
    (2.0 * (1.0 - phi)).clamp(0.0001, 1.0)
}

fn median_u32(mut values: Vec<u32>) -> u32 {
    if values.is_empty() {
        return 0;
    }
    values.sort_unstable();
    values[values.len() / 2]
}

fn direction_of(pooled_effect: f64) -> EffectDirection {
    if pooled_effect > 0.1 {
        EffectDirection::Favorable
    } else if pooled_effect < -0.1 {
        EffectDirection::Unfavorable
    } else {
        EffectDirection::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i_squared_stays_in_percentage_range() {
        let tight = [0.5, 0.5, 0.5, 0.5];
        assert_eq!(i_squared(&tight), 0.0);

        let spread = [-0.8, 0.0, 0.9, 1.5, -1.2];
        let i2 = i_squared(&spread);
        assert!((0.0..=100.0).contains(&i2));
        assert!(i2 > 50.0);
    }

    #[test]
    fn single_effect_has_no_heterogeneity() {
        assert_eq!(i_squared(&[0.42]), 0.0);
    }

    #[test]
    fn p_value_shrinks_with_larger_z() {
        assert!(two_sided_p(3.0) < two_sided_p(1.0));
        assert!(two_sided_p(0.0) > 0.99);
    }

    #[test]
    fn median_of_empty_is_zero() {
        assert_eq!(median_u32(Vec::new()), 0);
        assert_eq!(median_u32(vec![7, 1, 9]), 7);
    }

    #[test]
    fn direction_thresholds() {
        assert_eq!(direction_of(0.5), EffectDirection::Favorable);
        assert_eq!(direction_of(0.0), EffectDirection::Neutral);
        assert_eq!(direction_of(-0.5), EffectDirection::Unfavorable);
    }

    #[test]
    fn significance_matches_the_interval() {
        let significant = PooledEstimates {
            effect_size: 0.4,
            confidence_interval: (0.1, 0.7),
            significance: String::new(),
            p_value: 0.01,
        };
        assert!(significant.is_significant());

        let crossing = PooledEstimates {
            effect_size: 0.1,
            confidence_interval: (-0.2, 0.4),
            significance: String::new(),
            p_value: 0.5,
        };
        assert!(!crossing.is_significant());
    }
}
