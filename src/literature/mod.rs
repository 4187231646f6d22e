//! Literature-review aggregation over a synthesized evidence corpus.
//!
//! The pipeline mirrors a real evidence review: term expansion, database
//! searches (fabricated records, deterministic per drug), study-design
//! filtering, quality aggregation, and synthesis into a composite
//! [`ComprehensiveReview`]. There is no network I/O anywhere; every record
//! is generated in memory.

pub mod corpus;
pub mod filters;
pub mod quality;
pub mod synthesis;
pub mod terms;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::PharmascopeConfig;
use crate::core::errors::{Error, Result};
use crate::core::seed;
use crate::core::{StudyType, TrialPhase, TrialStatus};

pub use quality::{QualityAssessment, QualityDistribution, QualityThresholds};
pub use synthesis::{
    ClinicalTrialSummary, EffectDirection, EvidenceQuality, GradeAssessment, Heterogeneity,
    MetaAnalysisResults, NarrativeReview, PivotalTrial, PooledEstimates, PrismaFlow,
    PublicationBias, ResearchLandscape, ReviewMethodology, ReviewResults, ScopingReview,
    SystematicReviewSummary,
};

/// Bibliographic databases consulted by default.
pub const DEFAULT_DATABASES: &[&str] = &[
    "pubmed",
    "embase",
    "cochrane",
    "web_of_science",
    "scopus",
];

/// Gray-literature source types the aggregator draws from.
pub const DEFAULT_GRAY_SOURCES: &[&str] = &[
    "regulatory_report",
    "conference_abstract",
    "doctoral_thesis",
    "clinical_guideline",
    "hta_report",
    "preprint",
];

/// One indexed article.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ArticleRecord {
    pub pmid: String,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: String,
    pub year: i32,
    pub study_type: StudyType,
    pub quality_score: f64,
    pub citation_count: u32,
    pub effect_size: f64,
    pub sample_size: u32,
}

impl ArticleRecord {
    /// Record with neutral defaults for everything past the identifying
    /// fields; the corpus generator overwrites all of them.
    pub fn new(pmid: String, title: String, study_type: StudyType) -> Self {
        Self {
            pmid,
            title,
            authors: Vec::new(),
            journal: String::new(),
            year: 2020,
            study_type,
            quality_score: 0.7,
            citation_count: 0,
            effect_size: 0.0,
            sample_size: 0,
        }
    }
}

/// One gray-literature document (unindexed or non-journal source).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GrayLiteratureRecord {
    pub document_id: String,
    pub title: String,
    pub source_type: String,
    pub organization: String,
    pub year: i32,
}

/// One registered clinical trial.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ClinicalTrialRecord {
    pub nct_id: String,
    pub title: String,
    pub phase: TrialPhase,
    pub status: TrialStatus,
    pub enrollment: u32,
    pub completion_year: i32,
    pub primary_endpoint_met: bool,
}

/// An article that passed the systematic-review filter, annotated with
/// review-specific metadata.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SystematicReviewRecord {
    pub pmid: String,
    pub title: String,
    pub year: i32,
    pub prisma_compliance: bool,
    pub studies_included: u32,
}

/// An article that passed the meta-analysis filter, annotated with its
/// reported pooled statistics.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MetaAnalysisRecord {
    pub pmid: String,
    pub title: String,
    pub year: i32,
    pub effect_size: f64,
    pub confidence_interval: (f64, f64),
    pub heterogeneity_i2: f64,
    pub studies_pooled: u32,
}

/// Combined output of every search stream for one query.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LiteratureSearchResult {
    pub query_term: String,
    pub total_articles: usize,
    pub systematic_reviews: Vec<SystematicReviewRecord>,
    pub meta_analyses: Vec<MetaAnalysisRecord>,
    pub clinical_trials: Vec<ClinicalTrialRecord>,
    pub gray_literature: Vec<GrayLiteratureRecord>,
    pub regular_literature: Vec<ArticleRecord>,
    pub search_date: NaiveDate,
    pub databases_searched: Vec<String>,
    pub quality_assessment: QualityAssessment,
}

/// Composite literature review for one drug.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComprehensiveReview {
    pub drug_name: String,
    pub generated_at: DateTime<Utc>,
    pub article_count: usize,
    pub systematic_review_summary: SystematicReviewSummary,
    pub meta_analysis_results: MetaAnalysisResults,
    pub narrative_review: NarrativeReview,
    pub scoping_review: ScopingReview,
    pub clinical_trial_summary: ClinicalTrialSummary,
    pub evidence_quality: EvidenceQuality,
    pub recommendations: Vec<String>,
    pub future_research_directions: Vec<String>,
}

/// Facade over the literature pipeline.
pub struct LiteratureAnalyzer {
    databases: Vec<String>,
    gray_sources: Vec<String>,
    thresholds: QualityThresholds,
}

impl Default for LiteratureAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LiteratureAnalyzer {
    pub fn new() -> Self {
        Self {
            databases: DEFAULT_DATABASES.iter().map(|s| s.to_string()).collect(),
            gray_sources: DEFAULT_GRAY_SOURCES.iter().map(|s| s.to_string()).collect(),
            thresholds: QualityThresholds::default(),
        }
    }

    pub fn with_config(config: &PharmascopeConfig) -> Self {
        Self {
            databases: config.review.databases.clone(),
            gray_sources: DEFAULT_GRAY_SOURCES.iter().map(|s| s.to_string()).collect(),
            thresholds: QualityThresholds {
                high: config.quality.high_threshold,
                moderate: config.quality.moderate_threshold,
            },
        }
    }

    pub fn databases(&self) -> &[String] {
        &self.databases
    }

    pub fn gray_literature_sources(&self) -> &[String] {
        &self.gray_sources
    }

    pub fn quality_thresholds(&self) -> &QualityThresholds {
        &self.thresholds
    }

    pub fn generate_search_terms(&self, drug: &str) -> Vec<String> {
        terms::generate_search_terms(drug)
    }

    pub fn search_regular_literature(
        &self,
        search_terms: &[String],
        max_results: usize,
    ) -> Vec<ArticleRecord> {
        corpus::fabricate_articles(search_terms, max_results)
    }

    pub fn search_gray_literature(
        &self,
        search_terms: &[String],
        max_results: usize,
    ) -> Vec<GrayLiteratureRecord> {
        corpus::fabricate_gray_literature(search_terms, max_results, &self.gray_sources)
    }

    pub fn search_clinical_trials(
        &self,
        search_terms: &[String],
        max_results: usize,
    ) -> Vec<ClinicalTrialRecord> {
        corpus::fabricate_clinical_trials(search_terms, max_results)
    }

    pub fn filter_systematic_reviews(
        &self,
        articles: &[ArticleRecord],
    ) -> Vec<SystematicReviewRecord> {
        filters::filter_systematic_reviews(articles)
    }

    pub fn filter_meta_analyses(&self, articles: &[ArticleRecord]) -> Vec<MetaAnalysisRecord> {
        filters::filter_meta_analyses(articles)
    }

    pub fn assess_quality(&self, articles: &[ArticleRecord]) -> QualityAssessment {
        quality::assess_quality(articles, &self.thresholds)
    }

    /// Run every search stream for a drug and assemble the combined result.
    pub fn search_literature(
        &self,
        drug_name: &str,
        target_article_count: usize,
    ) -> LiteratureSearchResult {
        let search_terms = terms::generate_search_terms(drug_name);
        let regular = self.search_regular_literature(&search_terms, target_article_count);

        let gray_cap = (target_article_count / 5).clamp(3, 15);
        let trial_cap = (target_article_count / 4).clamp(3, 20);
        let gray = self.search_gray_literature(&search_terms, gray_cap);
        let trials = self.search_clinical_trials(&search_terms, trial_cap);

        let systematic_reviews = self.filter_systematic_reviews(&regular);
        let meta_analyses = self.filter_meta_analyses(&regular);
        let quality_assessment = self.assess_quality(&regular);
        let total_articles = regular.len() + gray.len() + trials.len();

        LiteratureSearchResult {
            query_term: drug_name.trim().to_lowercase(),
            total_articles,
            systematic_reviews,
            meta_analyses,
            clinical_trials: trials,
            gray_literature: gray,
            regular_literature: regular,
            search_date: seed::stable_datetime(drug_name).date_naive(),
            databases_searched: self.databases.clone(),
            quality_assessment,
        }
    }

    /// Full pipeline: searches, filters, aggregation, report assembly.
    pub fn generate_comprehensive_review(
        &self,
        drug_name: &str,
        target_article_count: usize,
    ) -> Result<ComprehensiveReview> {
        if target_article_count == 0 {
            return Err(Error::validation("target article count must be at least 1"));
        }

        log::debug!(
            "aggregating literature for {drug_name:?} (target {target_article_count} articles)"
        );

        let search = self.search_literature(drug_name, target_article_count);
        let systematic_review_summary = synthesis::build_systematic_review(&search);
        let meta_analysis_results = synthesis::pool_meta_analysis(&search);
        let narrative_review = synthesis::build_narrative_review(drug_name, &search);
        let scoping_review = synthesis::build_scoping_review(&search);
        let clinical_trial_summary = synthesis::summarize_clinical_trials(&search);
        let evidence_quality = synthesis::assess_evidence_quality(&search);
        let recommendations = synthesis::generate_recommendations(
            drug_name,
            &systematic_review_summary,
            &meta_analysis_results,
            &clinical_trial_summary,
        );
        let future_research_directions = synthesis::future_research_directions(drug_name, &search);

        Ok(ComprehensiveReview {
            drug_name: drug_name.trim().to_string(),
            generated_at: seed::stable_datetime(drug_name),
            article_count: search.regular_literature.len(),
            systematic_review_summary,
            meta_analysis_results,
            narrative_review,
            scoping_review,
            clinical_trial_summary,
            evidence_quality,
            recommendations,
            future_research_directions,
        })
    }
}
