//! Property tests for the invariants both report pipelines guarantee.

use proptest::prelude::*;

use pharmascope::literature::LiteratureAnalyzer;
use pharmascope::teratrend::{TeratrendAnalyzer, CONFIDENCE_CEILING, CONFIDENCE_FLOOR};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn article_count_stays_near_the_target(
        drug in "[a-z]{3,12}",
        target in 1usize..=120,
    ) {
        let analyzer = LiteratureAnalyzer::new();
        let review = analyzer.generate_comprehensive_review(&drug, target).unwrap();

        prop_assert!(review.article_count <= target);
        prop_assert!(review.article_count >= target - target / 10);
    }

    #[test]
    fn quality_distribution_sums_to_the_corpus(
        drug in "[a-z]{3,12}",
        target in 1usize..=120,
    ) {
        let analyzer = LiteratureAnalyzer::new();
        let search = analyzer.search_literature(&drug, target);

        prop_assert_eq!(
            search.quality_assessment.quality_distribution.total(),
            search.regular_literature.len()
        );
        prop_assert!((0.0..=1.0).contains(&search.quality_assessment.overall_quality_score));
    }

    #[test]
    fn heterogeneity_is_a_percentage(
        drug in "[a-z]{3,12}",
        target in 5usize..=100,
    ) {
        let analyzer = LiteratureAnalyzer::new();
        let review = analyzer.generate_comprehensive_review(&drug, target).unwrap();
        let i2 = review.meta_analysis_results.heterogeneity.i_squared;

        prop_assert!((0.0..=100.0).contains(&i2));
        prop_assert!(review.meta_analysis_results.heterogeneity.tau_squared >= 0.0);
    }

    #[test]
    fn pooled_interval_brackets_the_estimate(
        drug in "[a-z]{3,12}",
        target in 2usize..=100,
    ) {
        let analyzer = LiteratureAnalyzer::new();
        let review = analyzer.generate_comprehensive_review(&drug, target).unwrap();
        let pooled = &review.meta_analysis_results.pooled_estimates;

        prop_assert!(pooled.confidence_interval.0 <= pooled.effect_size);
        prop_assert!(pooled.effect_size <= pooled.confidence_interval.1);
        prop_assert!((0.0..=1.0).contains(&pooled.p_value));
    }

    #[test]
    fn searches_are_reproducible(drug in "[a-z]{3,12}") {
        let analyzer = LiteratureAnalyzer::new();
        let first = analyzer.search_literature(&drug, 40);
        let second = analyzer.search_literature(&drug, 40);

        prop_assert_eq!(first.regular_literature, second.regular_literature);
        prop_assert_eq!(first.gray_literature, second.gray_literature);
        prop_assert_eq!(first.clinical_trials, second.clinical_trials);
    }

    #[test]
    fn confidence_respects_its_band(drug in "[a-zA-Z]{1,20}") {
        let analyzer = TeratrendAnalyzer::new();
        let report = analyzer.analyze_drug_teratrends(&drug).unwrap();

        prop_assert!(report.prediction_confidence >= CONFIDENCE_FLOOR);
        prop_assert!(report.prediction_confidence <= CONFIDENCE_CEILING);
    }

    #[test]
    fn motif_frequencies_stay_in_unit_range(drug in "[a-z]{3,16}") {
        let analyzer = TeratrendAnalyzer::new();
        let report = analyzer.analyze_drug_teratrends(&drug).unwrap();

        prop_assert!(!report.structural_motifs.is_empty());
        for motif in &report.structural_motifs {
            prop_assert!((0.0..=1.0).contains(&motif.frequency));
        }
        prop_assert!(!report.combination_potential.is_empty());
    }

    #[test]
    fn market_and_innovation_scores_stay_in_unit_range(drug in "[a-z]{3,16}") {
        let analyzer = TeratrendAnalyzer::new();
        let report = analyzer.analyze_drug_teratrends(&drug).unwrap();
        let market = &report.market_dynamics;
        let innovation = &report.innovation_patterns;

        prop_assert!((0.0..=1.0).contains(&market.patent_cliff_index));
        prop_assert!((0.0..=1.0).contains(&market.generic_pressure_index));
        prop_assert!((0.0..=1.0).contains(&market.pipeline_density_index));
        prop_assert!((0.0..=1.0).contains(&innovation.incremental_breakthrough_ratio));
        prop_assert!((0.0..=1.0).contains(&innovation.white_space_score));
    }

    #[test]
    fn classification_is_total(drug in "\\PC{0,24}") {
        let analyzer = TeratrendAnalyzer::new();
        let class = analyzer.identify_drug_class(&drug);

        prop_assert!(!class.name.is_empty());
        prop_assert!(!class.target.is_empty());
    }
}
