//! End-to-end checks of report writers against file destinations.

use std::fs;

use pharmascope::io::output::{create_writer, OutputFormat};
use pharmascope::literature::LiteratureAnalyzer;
use pharmascope::teratrend::TeratrendAnalyzer;

#[test]
fn json_review_written_to_file_round_trips() {
    let review = LiteratureAnalyzer::new()
        .generate_comprehensive_review("atorvastatin", 25)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("review.json");
    let mut writer = create_writer(OutputFormat::Json, Some(&path)).unwrap();
    writer.write_review(&review).unwrap();
    drop(writer);

    let content = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["drug_name"], "atorvastatin");
    assert_eq!(
        parsed["article_count"].as_u64().unwrap() as usize,
        review.article_count
    );
    assert!(!parsed["recommendations"].as_array().unwrap().is_empty());
}

#[test]
fn json_trend_report_written_to_file_round_trips() {
    let report = TeratrendAnalyzer::new()
        .analyze_drug_teratrends("imatinib")
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trends.json");
    let mut writer = create_writer(OutputFormat::Json, Some(&path)).unwrap();
    writer.write_trends(&report).unwrap();
    drop(writer);

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["drug_class"]["name"], "Tyrosine Kinase Inhibitor");
    let confidence = parsed["prediction_confidence"].as_f64().unwrap();
    assert!((0.5..=0.95).contains(&confidence));
}

#[test]
fn markdown_file_contains_the_report_skeleton() {
    let review = LiteratureAnalyzer::new()
        .generate_comprehensive_review("metformin", 20)
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("review.md");
    let mut writer = create_writer(OutputFormat::Markdown, Some(&path)).unwrap();
    writer.write_review(&review).unwrap();
    drop(writer);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Literature Review: metformin"));
    assert!(content.contains("## Systematic Review"));
    assert!(content.contains("## Evidence Quality"));
    assert!(content.contains("## Future Research"));
}

#[test]
fn writer_creates_missing_parent_directories() {
    let report = TeratrendAnalyzer::new()
        .analyze_drug_teratrends("lisinopril")
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deeply/nested/out/trends.md");
    let mut writer = create_writer(OutputFormat::Markdown, Some(&path)).unwrap();
    writer.write_trends(&report).unwrap();
    drop(writer);

    assert!(path.is_file());
}

#[test]
fn terminal_format_cannot_target_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let err = create_writer(OutputFormat::Terminal, Some(&path))
        .err()
        .expect("terminal writer with a file path must be rejected");
    assert!(err.to_string().contains("terminal"));
    assert!(!path.exists());
}
