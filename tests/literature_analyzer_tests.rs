//! Integration tests for the literature-review pipeline.

use pretty_assertions::assert_eq;

use pharmascope::core::StudyType;
use pharmascope::literature::LiteratureAnalyzer;

#[test]
fn comprehensive_review_reaches_the_target_count() {
    let analyzer = LiteratureAnalyzer::new();
    let review = analyzer
        .generate_comprehensive_review("atorvastatin", 50)
        .unwrap();

    assert_eq!(review.drug_name, "atorvastatin");
    assert!(review.article_count <= 50);
    assert!(review.article_count as f64 >= 0.8 * 50.0);
}

#[test]
fn review_carries_every_synthesis_section() {
    let analyzer = LiteratureAnalyzer::new();
    let review = analyzer
        .generate_comprehensive_review("lisinopril", 40)
        .unwrap();

    let summary = &review.systematic_review_summary;
    assert!(!summary.methodology.databases_searched.is_empty());
    assert!(!summary.limitations.is_empty());
    assert!(!summary.synthesis.primary_outcomes.is_empty());

    let pooled = &review.meta_analysis_results.pooled_estimates;
    assert!(!pooled.significance.is_empty());
    assert!(pooled.confidence_interval.0 <= pooled.effect_size);
    assert!(pooled.effect_size <= pooled.confidence_interval.1);

    assert!(!review.narrative_review.key_themes.is_empty());
    assert!(!review.scoping_review.research_landscape.publication_trend.is_empty());
    assert!(!review.evidence_quality.grade_assessment.is_empty());
    assert!(!review.evidence_quality.strength_of_evidence.is_empty());
    assert!(!review.evidence_quality.clinical_recommendations.is_empty());
}

#[test]
fn recommendations_are_nonempty_strings() {
    let analyzer = LiteratureAnalyzer::new();
    let review = analyzer
        .generate_comprehensive_review("metformin", 30)
        .unwrap();

    assert!(!review.recommendations.is_empty());
    for recommendation in &review.recommendations {
        assert!(!recommendation.trim().is_empty());
    }
    assert!(!review.future_research_directions.is_empty());
}

#[test]
fn review_is_deterministic_per_drug() {
    let analyzer = LiteratureAnalyzer::new();
    let first = analyzer
        .generate_comprehensive_review("metformin", 40)
        .unwrap();
    let second = analyzer
        .generate_comprehensive_review("metformin", 40)
        .unwrap();

    assert_eq!(first.article_count, second.article_count);
    assert_eq!(first.recommendations, second.recommendations);
    assert_eq!(
        first.meta_analysis_results.pooled_estimates.effect_size,
        second.meta_analysis_results.pooled_estimates.effect_size
    );
    assert_eq!(
        first.systematic_review_summary.methodology.prisma_flow,
        second.systematic_review_summary.methodology.prisma_flow
    );
}

#[test]
fn review_json_is_byte_identical_across_runs() {
    let analyzer = LiteratureAnalyzer::new();
    let first = analyzer
        .generate_comprehensive_review("metformin", 40)
        .unwrap();
    let second = analyzer
        .generate_comprehensive_review("metformin", 40)
        .unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn zero_target_is_rejected() {
    let analyzer = LiteratureAnalyzer::new();
    let err = analyzer
        .generate_comprehensive_review("atorvastatin", 0)
        .unwrap_err();
    assert!(err.to_string().contains("at least 1"));
}

#[test]
fn empty_drug_name_still_yields_a_review() {
    let analyzer = LiteratureAnalyzer::new();
    let review = analyzer.generate_comprehensive_review("", 20).unwrap();

    assert_eq!(review.drug_name, "");
    assert!(review.article_count > 0);
    assert!(!review.recommendations.is_empty());
}

#[test]
fn single_article_target_still_works() {
    let analyzer = LiteratureAnalyzer::new();
    let review = analyzer
        .generate_comprehensive_review("propranolol", 1)
        .unwrap();
    assert_eq!(review.article_count, 1);
}

#[test]
fn search_terms_expand_the_drug_name() {
    let analyzer = LiteratureAnalyzer::new();
    let terms = analyzer.generate_search_terms("Atorvastatin");

    assert!(terms.len() > 5);
    assert!(terms.contains(&"atorvastatin".to_string()));
    assert!(terms.contains(&"Atorvastatin".to_string()));
    assert!(terms.iter().any(|t| t.contains("efficacy")));
}

#[test]
fn regular_articles_carry_full_bibliographic_fields() {
    let analyzer = LiteratureAnalyzer::new();
    let terms = analyzer.generate_search_terms("lisinopril");
    let articles = analyzer.search_regular_literature(&terms, 25);

    assert!(articles.len() <= 25);
    assert!(!articles.is_empty());
    for article in &articles {
        assert!(!article.pmid.is_empty());
        assert!(!article.title.is_empty());
        assert!(!article.authors.is_empty());
        assert!(!article.journal.is_empty());
        assert!(article.year >= 2000);
        assert!(article.sample_size > 0);
    }
}

#[test]
fn gray_literature_uses_known_source_types() {
    let analyzer = LiteratureAnalyzer::new();
    let terms = analyzer.generate_search_terms("omeprazole");
    let records = analyzer.search_gray_literature(&terms, 10);

    assert!(records.len() <= 10);
    assert!(!records.is_empty());
    for record in &records {
        assert!(!record.document_id.is_empty());
        assert!(!record.title.is_empty());
        assert!(!record.organization.is_empty());
        assert!(analyzer
            .gray_literature_sources()
            .contains(&record.source_type));
    }
}

#[test]
fn clinical_trials_look_like_registry_entries() {
    let analyzer = LiteratureAnalyzer::new();
    let terms = analyzer.generate_search_terms("amoxicillin");
    let trials = analyzer.search_clinical_trials(&terms, 12);

    assert!(trials.len() <= 12);
    assert!(!trials.is_empty());
    for trial in &trials {
        assert!(trial.nct_id.starts_with("NCT"));
        assert!(!trial.title.is_empty());
        assert!(trial.enrollment > 0);
        assert!(trial.phase.to_string().starts_with("Phase"));
    }
}

#[test]
fn systematic_review_filter_annotates_matches() {
    let analyzer = LiteratureAnalyzer::new();
    let terms = analyzer.generate_search_terms("atorvastatin");
    let articles = analyzer.search_regular_literature(&terms, 60);
    let reviews = analyzer.filter_systematic_reviews(&articles);

    assert!(reviews.len() <= articles.len());
    let pmids: Vec<&str> = articles.iter().map(|a| a.pmid.as_str()).collect();
    for review in &reviews {
        assert!(pmids.contains(&review.pmid.as_str()));
        assert!(review.studies_included >= 5);
    }
}

#[test]
fn meta_analysis_filter_reports_pooled_statistics() {
    let analyzer = LiteratureAnalyzer::new();
    let terms = analyzer.generate_search_terms("atorvastatin");
    let articles = analyzer.search_regular_literature(&terms, 60);
    let metas = analyzer.filter_meta_analyses(&articles);
    let reviews = analyzer.filter_systematic_reviews(&articles);

    // every pooled analysis also qualifies as secondary research
    assert!(metas.len() <= reviews.len());
    for meta in &metas {
        let (low, high) = meta.confidence_interval;
        assert!(low <= meta.effect_size && meta.effect_size <= high);
        assert!((0.0..=100.0).contains(&meta.heterogeneity_i2));
    }
}

#[test]
fn quality_distribution_accounts_for_every_article() {
    let analyzer = LiteratureAnalyzer::new();
    let terms = analyzer.generate_search_terms("metformin");
    let articles = analyzer.search_regular_literature(&terms, 45);
    let assessment = analyzer.assess_quality(&articles);

    assert_eq!(assessment.quality_distribution.total(), articles.len());
    let typed: usize = assessment.study_type_distribution.values().sum();
    assert_eq!(typed, articles.len());
    assert!((0.0..=1.0).contains(&assessment.overall_quality_score));
}

#[test]
fn combined_search_respects_stream_caps() {
    let analyzer = LiteratureAnalyzer::new();
    let search = analyzer.search_literature("atorvastatin", 100);

    assert!(search.regular_literature.len() <= 100);
    assert!(search.gray_literature.len() <= 15);
    assert!(search.clinical_trials.len() <= 20);
    assert_eq!(
        search.total_articles,
        search.regular_literature.len()
            + search.gray_literature.len()
            + search.clinical_trials.len()
    );
}

#[test]
fn prisma_flow_narrows_monotonically() {
    let analyzer = LiteratureAnalyzer::new();
    let review = analyzer
        .generate_comprehensive_review("lisinopril", 60)
        .unwrap();
    let flow = &review.systematic_review_summary.methodology.prisma_flow;

    assert!(flow.records_identified >= flow.records_screened);
    assert!(flow.records_screened >= flow.full_text_assessed);
    assert!(flow.full_text_assessed >= flow.studies_included);
    assert_eq!(flow.studies_included, review.article_count);
}

#[test]
fn pivotal_trials_are_late_phase_and_ranked_by_enrollment() {
    let analyzer = LiteratureAnalyzer::new();
    let review = analyzer
        .generate_comprehensive_review("atorvastatin", 80)
        .unwrap();
    let pivotal = &review.clinical_trial_summary.pivotal_trials;

    assert!(pivotal.len() <= 5);
    for pair in pivotal.windows(2) {
        assert!(pair[0].enrollment >= pair[1].enrollment);
    }
    for trial in pivotal {
        let phase = trial.phase.to_string();
        assert!(phase == "Phase 3" || phase == "Phase 4");
    }
}

#[test]
fn evidence_map_mirrors_study_type_distribution() {
    let analyzer = LiteratureAnalyzer::new();
    let search = analyzer.search_literature("metformin", 50);
    let rct_count = search
        .regular_literature
        .iter()
        .filter(|a| a.study_type == StudyType::RandomizedControlledTrial)
        .count();

    assert_eq!(
        search
            .quality_assessment
            .study_type_distribution
            .get(&StudyType::RandomizedControlledTrial)
            .copied()
            .unwrap_or(0),
        rct_count
    );
}
