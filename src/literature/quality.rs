//! Quality aggregation over scored articles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{QualityBand, StudyType};

use super::ArticleRecord;

/// Score cutoffs separating the quality bands.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct QualityThresholds {
    pub high: f64,
    pub moderate: f64,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            high: 0.8,
            moderate: 0.6,
        }
    }
}

impl QualityThresholds {
    pub fn classify(&self, score: f64) -> QualityBand {
        QualityBand::from_score_with(score, self.high, self.moderate)
    }
}

/// Article counts per quality band.
///
/// The three counts always sum to the number of scored articles.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualityDistribution {
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
}

impl QualityDistribution {
    pub fn total(&self) -> usize {
        self.high + self.moderate + self.low
    }
}

/// Aggregated quality view of one article set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QualityAssessment {
    pub quality_distribution: QualityDistribution,
    pub study_type_distribution: BTreeMap<StudyType, usize>,
    pub overall_quality_score: f64,
}

pub fn assess_quality(articles: &[ArticleRecord], thresholds: &QualityThresholds) -> QualityAssessment {
    let quality_distribution =
        articles
            .iter()
            .fold(QualityDistribution::default(), |mut acc, article| {
                match thresholds.classify(article.quality_score) {
                    QualityBand::High => acc.high += 1,
                    QualityBand::Moderate => acc.moderate += 1,
                    QualityBand::Low => acc.low += 1,
                }
                acc
            });

    let study_type_distribution = articles.iter().fold(BTreeMap::new(), |mut acc, article| {
        *acc.entry(article.study_type).or_insert(0) += 1;
        acc
    });

    QualityAssessment {
        quality_distribution,
        study_type_distribution,
        overall_quality_score: average_quality(articles),
    }
}

/// Mean quality score, 0.0 for an empty set.
pub fn average_quality(articles: &[ArticleRecord]) -> f64 {
    if articles.is_empty() {
        return 0.0;
    }
    let total: f64 = articles.iter().map(|a| a.quality_score).sum();
    total / articles.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(pmid: u32, score: f64) -> ArticleRecord {
        let mut article = ArticleRecord::new(
            pmid.to_string(),
            "Any title".to_string(),
            StudyType::CohortStudy,
        );
        article.quality_score = score;
        article
    }

    #[test]
    fn distribution_counts_sum_to_article_count() {
        let articles: Vec<ArticleRecord> = (0..25)
            .map(|i| scored(i, f64::from(i) / 25.0))
            .collect();
        let assessment = assess_quality(&articles, &QualityThresholds::default());
        assert_eq!(assessment.quality_distribution.total(), 25);
    }

    #[test]
    fn bands_follow_the_thresholds() {
        let articles = vec![scored(1, 0.85), scored(2, 0.7), scored(3, 0.3)];
        let assessment = assess_quality(&articles, &QualityThresholds::default());
        assert_eq!(assessment.quality_distribution.high, 1);
        assert_eq!(assessment.quality_distribution.moderate, 1);
        assert_eq!(assessment.quality_distribution.low, 1);
    }

    #[test]
    fn custom_thresholds_shift_the_bands() {
        let articles = vec![scored(1, 0.7)];
        let strict = QualityThresholds {
            high: 0.9,
            moderate: 0.75,
        };
        let assessment = assess_quality(&articles, &strict);
        assert_eq!(assessment.quality_distribution.low, 1);
    }

    #[test]
    fn empty_set_scores_zero() {
        let assessment = assess_quality(&[], &QualityThresholds::default());
        assert_eq!(assessment.overall_quality_score, 0.0);
        assert_eq!(assessment.quality_distribution.total(), 0);
    }

    #[test]
    fn overall_score_is_the_mean() {
        let articles = vec![scored(1, 0.4), scored(2, 0.8)];
        let assessment = assess_quality(&articles, &QualityThresholds::default());
        assert!((assessment.overall_quality_score - 0.6).abs() < 1e-9);
    }
}
