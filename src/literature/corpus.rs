//! Fabricated evidence corpus.
//!
//! All records are synthesized from a seeded RNG keyed on the normalized
//! drug name, so repeated runs for the same drug produce the same corpus
//! while different drugs get decorrelated ones.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::core::seed::{self, stream, ANCHOR_YEAR};
use crate::core::{StudyType, TrialPhase, TrialStatus};

use super::terms;
use super::{ArticleRecord, ClinicalTrialRecord, GrayLiteratureRecord};

const JOURNALS: &[&str] = &[
    "The Lancet",
    "New England Journal of Medicine",
    "JAMA",
    "BMJ",
    "Annals of Internal Medicine",
    "European Heart Journal",
    "Clinical Pharmacology & Therapeutics",
    "British Journal of Clinical Pharmacology",
    "Pharmacotherapy",
    "Drugs",
    "Journal of Clinical Pharmacy and Therapeutics",
    "Clinical Therapeutics",
];

const AUTHOR_SURNAMES: &[&str] = &[
    "Chen", "Okafor", "Tanaka", "Johansson", "Rossi", "Novak", "Silva", "Kowalski", "Haddad",
    "Nakamura", "Fernandez", "Petrov", "Lindgren", "Moreau", "Adeyemi", "Janssen",
];

const AUTHOR_INITIALS: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "J", "K", "L", "M", "N", "P", "R", "S", "T",
];

const POPULATIONS: &[&str] = &[
    "adult outpatients",
    "treatment-naive patients",
    "elderly patients",
    "patients with comorbid disease",
    "a multicenter cohort",
    "routine clinical practice",
];

const ORGANIZATIONS: &[&str] = &[
    "FDA",
    "EMA",
    "WHO",
    "NICE",
    "AHRQ",
    "Health Canada",
    "PMDA",
    "Cochrane Collaboration",
];

/// Relative frequency of each study design in the indexed corpus.
const STUDY_TYPE_WEIGHTS: &[(StudyType, u32)] = &[
    (StudyType::RandomizedControlledTrial, 28),
    (StudyType::CohortStudy, 20),
    (StudyType::ObservationalStudy, 15),
    (StudyType::CaseControlStudy, 10),
    (StudyType::SystematicReview, 10),
    (StudyType::CaseSeries, 9),
    (StudyType::MetaAnalysis, 8),
];

const TRIAL_PHASE_WEIGHTS: &[(TrialPhase, u32)] = &[
    (TrialPhase::Phase1, 10),
    (TrialPhase::Phase2, 25),
    (TrialPhase::Phase3, 40),
    (TrialPhase::Phase4, 25),
];

const TRIAL_STATUS_WEIGHTS: &[(TrialStatus, u32)] = &[
    (TrialStatus::Completed, 55),
    (TrialStatus::Active, 20),
    (TrialStatus::Recruiting, 18),
    (TrialStatus::Terminated, 7),
];

/// How far back publication years reach.
const PUBLICATION_WINDOW_YEARS: i32 = 17;

/// Indexed journal articles for a term set, at most `max_results` of them.
pub fn fabricate_articles(search_terms: &[String], max_results: usize) -> Vec<ArticleRecord> {
    let query = terms::primary_term(search_terms);
    let mut rng = seed::seeded_rng(query, stream::ARTICLES);
    let count = jittered_count(&mut rng, max_results);
    let display = terms::capitalize(query);

    (0..count)
        .map(|_| fabricate_article(&mut rng, query, &display))
        .collect()
}

/// Gray-literature documents for a term set, drawn from the given source
/// types.
pub fn fabricate_gray_literature(
    search_terms: &[String],
    max_results: usize,
    sources: &[String],
) -> Vec<GrayLiteratureRecord> {
    let query = terms::primary_term(search_terms);
    let mut rng = seed::seeded_rng(query, stream::GRAY_LITERATURE);
    let count = jittered_count(&mut rng, max_results);
    let display = terms::capitalize(query);
    let latest = ANCHOR_YEAR;

    (0..count)
        .map(|_| {
            let source_type = sources
                .choose(&mut rng)
                .cloned()
                .unwrap_or_else(|| "report".to_string());
            GrayLiteratureRecord {
                document_id: format!("GL-{:06}", rng.gen_range(1_000..1_000_000)),
                title: gray_title(&display, &source_type),
                organization: pick(&mut rng, ORGANIZATIONS).to_string(),
                source_type,
                year: latest - rng.gen_range(0..=9),
            }
        })
        .collect()
}

/// Registered clinical trials for a term set.
pub fn fabricate_clinical_trials(
    search_terms: &[String],
    max_results: usize,
) -> Vec<ClinicalTrialRecord> {
    let query = terms::primary_term(search_terms);
    let mut rng = seed::seeded_rng(query, stream::CLINICAL_TRIALS);
    let count = jittered_count(&mut rng, max_results);
    let display = terms::capitalize(query);
    let latest = ANCHOR_YEAR;

    (0..count)
        .map(|_| {
            let phase = weighted_choice(&mut rng, TRIAL_PHASE_WEIGHTS);
            let status = weighted_choice(&mut rng, TRIAL_STATUS_WEIGHTS);
            let completion_year = match status {
                TrialStatus::Active | TrialStatus::Recruiting => latest + rng.gen_range(0..=2),
                TrialStatus::Completed | TrialStatus::Terminated => latest - rng.gen_range(0..=7),
            };
            ClinicalTrialRecord {
                nct_id: format!("NCT{:08}", rng.gen_range(1_000_000..100_000_000u32)),
                title: trial_title(&mut rng, &display, phase),
                phase,
                status,
                enrollment: trial_enrollment(&mut rng, phase),
                completion_year,
                primary_endpoint_met: rng.gen_bool(0.72),
            }
        })
        .collect()
}

/// Between 90% and 100% of the requested cap.
fn jittered_count(rng: &mut StdRng, max_results: usize) -> usize {
    max_results - rng.gen_range(0..=max_results / 10)
}

fn fabricate_article(rng: &mut StdRng, query: &str, display: &str) -> ArticleRecord {
    let latest = ANCHOR_YEAR;
    let study_type = weighted_choice(rng, STUDY_TYPE_WEIGHTS);

    // min of two uniform draws keeps most records recent
    let offset = rng
        .gen_range(0..=PUBLICATION_WINDOW_YEARS)
        .min(rng.gen_range(0..=PUBLICATION_WINDOW_YEARS));
    let year = latest - offset;

    // methodological quality tracks the design hierarchy with per-article
    // jitter on top
    let quality_score = (0.35 + 0.55 * study_type.evidence_weight() + rng.gen_range(-0.1..0.1))
        .clamp(0.05, 0.98);

    let citation_count = ((latest - year) as f64 * rng.gen_range(2.0..9.0) * quality_score) as u32;

    ArticleRecord {
        pmid: rng.gen_range(10_000_000..40_000_000u32).to_string(),
        title: article_title(rng, query, display, study_type),
        authors: author_list(rng),
        journal: pick(rng, JOURNALS).to_string(),
        year,
        study_type,
        quality_score,
        citation_count,
        effect_size: rng.gen_range(-0.25..=1.0),
        sample_size: article_sample_size(rng, study_type),
    }
}

fn article_title(rng: &mut StdRng, query: &str, display: &str, study_type: StudyType) -> String {
    let population = pick(rng, POPULATIONS);
    match study_type {
        StudyType::RandomizedControlledTrial => {
            format!("{display} in {population}: a randomized controlled trial")
        }
        StudyType::SystematicReview => {
            format!("Systematic review of {query} therapy: efficacy and safety outcomes")
        }
        StudyType::MetaAnalysis => format!("Meta-analysis of {query} trials in {population}"),
        StudyType::CohortStudy => {
            format!("Long-term outcomes of {query} treatment in {population}: a cohort study")
        }
        StudyType::CaseControlStudy => {
            format!("{display} exposure and clinical outcomes: a case-control study")
        }
        StudyType::CaseSeries => format!("{display} in complex cases: a case series"),
        StudyType::ObservationalStudy => {
            format!("Real-world effectiveness of {query} in {population}")
        }
    }
}

fn article_sample_size(rng: &mut StdRng, study_type: StudyType) -> u32 {
    match study_type {
        StudyType::RandomizedControlledTrial => rng.gen_range(120..2_400),
        StudyType::CohortStudy => rng.gen_range(400..9_000),
        StudyType::CaseControlStudy => rng.gen_range(80..1_200),
        StudyType::ObservationalStudy => rng.gen_range(150..5_000),
        StudyType::CaseSeries => rng.gen_range(8..60),
        // pooled sample across the included primaries
        StudyType::SystematicReview | StudyType::MetaAnalysis => rng.gen_range(800..20_000),
    }
}

fn author_list(rng: &mut StdRng) -> Vec<String> {
    let count = rng.gen_range(2..=5);
    (0..count)
        .map(|_| {
            format!(
                "{} {}",
                pick(rng, AUTHOR_SURNAMES),
                pick(rng, AUTHOR_INITIALS)
            )
        })
        .collect()
}

fn gray_title(display: &str, source_type: &str) -> String {
    match source_type {
        "regulatory_report" => format!("Regulatory assessment of {display}"),
        "conference_abstract" => {
            format!("{display}: interim findings presented at an international congress")
        }
        "doctoral_thesis" => format!("Population pharmacology of {display}: a doctoral thesis"),
        "clinical_guideline" => format!("Clinical practice guideline covering {display} use"),
        "hta_report" => format!("Health technology assessment of {display}"),
        "preprint" => format!("{display} effectiveness: preprint awaiting peer review"),
        _ => format!("{display}: unpublished report"),
    }
}

fn trial_title(rng: &mut StdRng, display: &str, phase: TrialPhase) -> String {
    let population = pick(rng, POPULATIONS);
    match phase {
        TrialPhase::Phase1 => format!("Safety and tolerability of {display}: a first-in-human study"),
        TrialPhase::Phase2 => format!("Dose-ranging study of {display} in {population}"),
        TrialPhase::Phase3 => {
            format!("{display} versus standard of care in {population}: a pivotal trial")
        }
        TrialPhase::Phase4 => format!("Post-marketing surveillance of {display} in {population}"),
    }
}

fn trial_enrollment(rng: &mut StdRng, phase: TrialPhase) -> u32 {
    match phase {
        TrialPhase::Phase1 => rng.gen_range(20..=90),
        TrialPhase::Phase2 => rng.gen_range(100..=450),
        TrialPhase::Phase3 => rng.gen_range(300..=5_000),
        TrialPhase::Phase4 => rng.gen_range(500..=9_000),
    }
}

/// Roll against a weight table; the fallthrough arm is unreachable for the
/// constant tables above.
fn weighted_choice<T: Copy>(rng: &mut StdRng, table: &[(T, u32)]) -> T {
    let total: u32 = table.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.gen_range(0..total.max(1));
    for (value, weight) in table {
        if roll < *weight {
            return *value;
        }
        roll -= weight;
    }
    table[0].0
}

fn pick<'a>(rng: &mut StdRng, pool: &'a [&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literature::terms::generate_search_terms;

    #[test]
    fn articles_respect_the_cap_and_stay_close_to_it() {
        let terms = generate_search_terms("atorvastatin");
        let articles = fabricate_articles(&terms, 50);
        assert!(articles.len() <= 50);
        assert!(articles.len() >= 45);
    }

    #[test]
    fn articles_are_deterministic_per_drug() {
        let terms = generate_search_terms("lisinopril");
        assert_eq!(fabricate_articles(&terms, 30), fabricate_articles(&terms, 30));
    }

    #[test]
    fn different_drugs_get_different_corpora() {
        let a = fabricate_articles(&generate_search_terms("lisinopril"), 30);
        let b = fabricate_articles(&generate_search_terms("propranolol"), 30);
        assert_ne!(a, b);
    }

    #[test]
    fn zero_cap_yields_no_records() {
        let terms = generate_search_terms("metformin");
        assert!(fabricate_articles(&terms, 0).is_empty());
        assert!(fabricate_clinical_trials(&terms, 0).is_empty());
    }

    #[test]
    fn quality_scores_stay_in_range() {
        let terms = generate_search_terms("amoxicillin");
        for article in fabricate_articles(&terms, 80) {
            assert!((0.0..=1.0).contains(&article.quality_score));
        }
    }

    #[test]
    fn gray_records_use_the_configured_sources() {
        let sources: Vec<String> = super::super::DEFAULT_GRAY_SOURCES
            .iter()
            .map(|s| s.to_string())
            .collect();
        let terms = generate_search_terms("omeprazole");
        for record in fabricate_gray_literature(&terms, 12, &sources) {
            assert!(sources.contains(&record.source_type));
            assert!(record.document_id.starts_with("GL-"));
        }
    }

    #[test]
    fn trial_ids_look_like_registry_ids() {
        let terms = generate_search_terms("propranolol");
        for trial in fabricate_clinical_trials(&terms, 10) {
            assert!(trial.nct_id.starts_with("NCT"));
            assert_eq!(trial.nct_id.len(), 11);
            assert!(trial.enrollment > 0);
        }
    }
}
