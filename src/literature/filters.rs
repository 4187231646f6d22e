//! Study-design filters over fabricated article sets.
//!
//! Filtering keys on both the declared design and the title, so a record
//! labelled as primary research but titled "systematic review of ..." is
//! still picked up. Annotations (PRISMA compliance, pooled statistics) are
//! derived from the article itself so they stay stable across runs.

use crate::core::seed::{self, stream};
use crate::core::StudyType;

use super::{ArticleRecord, MetaAnalysisRecord, SystematicReviewRecord};

/// Narrowest CI half-width reported by a pooled analysis.
const MIN_CI_HALF_WIDTH: f64 = 0.08;

pub fn is_systematic_review(article: &ArticleRecord) -> bool {
    if article.study_type.is_secondary_research() {
        return true;
    }
    let title = article.title.to_lowercase();
    title.contains("systematic review") || title.contains("meta-analysis")
}

pub fn is_meta_analysis(article: &ArticleRecord) -> bool {
    article.study_type == StudyType::MetaAnalysis
        || article.title.to_lowercase().contains("meta-analysis")
}

/// Articles that are (or embed) a systematic review, annotated for the
/// evidence summary.
pub fn filter_systematic_reviews(articles: &[ArticleRecord]) -> Vec<SystematicReviewRecord> {
    articles
        .iter()
        .filter(|article| is_systematic_review(article))
        .map(annotate_systematic_review)
        .collect()
}

/// Articles reporting a pooled analysis, annotated with its statistics.
pub fn filter_meta_analyses(articles: &[ArticleRecord]) -> Vec<MetaAnalysisRecord> {
    articles
        .iter()
        .filter(|article| is_meta_analysis(article))
        .map(annotate_meta_analysis)
        .collect()
}

fn annotate_systematic_review(article: &ArticleRecord) -> SystematicReviewRecord {
    let marker = seed::stable_seed(&article.pmid, stream::ANNOTATIONS);
    SystematicReviewRecord {
        pmid: article.pmid.clone(),
        title: article.title.clone(),
        year: article.year,
        prisma_compliance: article.quality_score >= 0.7,
        studies_included: 5 + (marker % 45) as u32,
    }
}

fn annotate_meta_analysis(article: &ArticleRecord) -> MetaAnalysisRecord {
    let marker = seed::stable_seed(&article.pmid, stream::ANNOTATIONS);
    // lower-quality analyses report wider intervals
    let half_width = MIN_CI_HALF_WIDTH + (1.0 - article.quality_score).max(0.0) * 0.35;
    MetaAnalysisRecord {
        pmid: article.pmid.clone(),
        title: article.title.clone(),
        year: article.year,
        effect_size: article.effect_size,
        confidence_interval: (
            article.effect_size - half_width,
            article.effect_size + half_width,
        ),
        heterogeneity_i2: (marker % 8_100) as f64 / 100.0,
        studies_pooled: 4 + (marker % 28) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(pmid: &str, title: &str, study_type: StudyType) -> ArticleRecord {
        ArticleRecord::new(pmid.to_string(), title.to_string(), study_type)
    }

    #[test]
    fn declared_design_is_sufficient() {
        let articles = vec![article(
            "1001",
            "Pooled outcomes in hypertension",
            StudyType::SystematicReview,
        )];
        assert_eq!(filter_systematic_reviews(&articles).len(), 1);
    }

    #[test]
    fn title_keywords_catch_mislabelled_records() {
        let articles = vec![
            article(
                "1002",
                "A Systematic Review of statin therapy",
                StudyType::ObservationalStudy,
            ),
            article(
                "1003",
                "Meta-Analysis of beta-blocker trials",
                StudyType::CohortStudy,
            ),
            article("1004", "A plain cohort study", StudyType::CohortStudy),
        ];
        assert_eq!(filter_systematic_reviews(&articles).len(), 2);
        assert_eq!(filter_meta_analyses(&articles).len(), 1);
    }

    #[test]
    fn annotations_are_stable_per_pmid() {
        let articles = vec![article(
            "2200",
            "Meta-analysis of anything",
            StudyType::MetaAnalysis,
        )];
        let first = filter_meta_analyses(&articles);
        let second = filter_meta_analyses(&articles);
        assert_eq!(first, second);
    }

    #[test]
    fn interval_brackets_the_effect() {
        let mut record = article("3300", "Meta-analysis again", StudyType::MetaAnalysis);
        record.effect_size = 0.4;
        let annotated = filter_meta_analyses(&[record]);
        let (low, high) = annotated[0].confidence_interval;
        assert!(low < 0.4 && 0.4 < high);
    }

    #[test]
    fn i2_stays_in_percentage_range() {
        let articles: Vec<ArticleRecord> = (0..40)
            .map(|i| {
                article(
                    &format!("{}", 5_000 + i),
                    "Meta-analysis of anything",
                    StudyType::MetaAnalysis,
                )
            })
            .collect();
        for record in filter_meta_analyses(&articles) {
            assert!((0.0..=100.0).contains(&record.heterogeneity_i2));
            assert!(record.studies_pooled >= 4);
        }
    }
}
