//! Report writers for the supported output formats.
//!
//! JSON and markdown can target stdout or a file; terminal output is
//! stdout-only and colorized.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::core::EvidenceGrade;
use crate::literature::ComprehensiveReview;
use crate::teratrend::TeratrendReport;

/// Serialization formats for generated reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Sink for finished reports.
pub trait OutputWriter {
    fn write_review(&mut self, review: &ComprehensiveReview) -> Result<()>;
    fn write_trends(&mut self, report: &TeratrendReport) -> Result<()>;
}

/// Build a writer for the requested format and destination.
///
/// Terminal output cannot be redirected to a file; ask for json or markdown
/// instead.
pub fn create_writer(format: OutputFormat, output: Option<&Path>) -> Result<Box<dyn OutputWriter>> {
    match (format, output) {
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(create_file(path)?))),
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(create_file(path)?)))
        }
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(io::stdout()))),
        (OutputFormat::Terminal, Some(_)) => {
            anyhow::bail!("terminal format cannot be written to a file; use json or markdown")
        }
        (OutputFormat::Terminal, None) => Ok(Box::new(TerminalWriter::new())),
    }
}

fn create_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
    }
    File::create(path).with_context(|| format!("failed to create file: {}", path.display()))
}

// ---------------------------------------------------------------------------
// JSON

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_review(&mut self, review: &ComprehensiveReview) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, review)
            .context("failed to serialize review")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_trends(&mut self, report: &TeratrendReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)
            .context("failed to serialize trend report")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Markdown

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn review_sections(&mut self, review: &ComprehensiveReview) -> io::Result<()> {
        let w = &mut self.writer;
        writeln!(w, "# Literature Review: {}", review.drug_name)?;
        writeln!(w)?;
        writeln!(w, "Generated {}", review.generated_at.format("%Y-%m-%d"))?;
        writeln!(w)?;

        writeln!(w, "## Evidence Base")?;
        writeln!(w)?;
        writeln!(w, "- Articles aggregated: {}", review.article_count)?;
        let methodology = &review.systematic_review_summary.methodology;
        writeln!(
            w,
            "- Databases searched: {}",
            methodology.databases_searched.join(", ")
        )?;
        writeln!(w, "- Publication window: {}", methodology.search_window)?;
        writeln!(w)?;

        writeln!(w, "## Systematic Review")?;
        writeln!(w)?;
        let flow = &methodology.prisma_flow;
        writeln!(w, "| PRISMA stage | Records |")?;
        writeln!(w, "|---|---|")?;
        writeln!(w, "| Identified | {} |", flow.records_identified)?;
        writeln!(w, "| Screened | {} |", flow.records_screened)?;
        writeln!(w, "| Full text assessed | {} |", flow.full_text_assessed)?;
        writeln!(w, "| Included | {} |", flow.studies_included)?;
        writeln!(w)?;
        let synthesis = &review.systematic_review_summary.synthesis;
        writeln!(w, "{}.", synthesis.primary_outcomes)?;
        writeln!(w, "{}.", synthesis.consistency)?;
        writeln!(w)?;
        writeln!(w, "Limitations:")?;
        for limitation in &review.systematic_review_summary.limitations {
            writeln!(w, "- {limitation}")?;
        }
        writeln!(w)?;

        writeln!(w, "## Meta-analysis")?;
        writeln!(w)?;
        let pooled = &review.meta_analysis_results.pooled_estimates;
        writeln!(
            w,
            "- Pooled effect size: {:.3} (95% CI {:.3} to {:.3})",
            pooled.effect_size, pooled.confidence_interval.0, pooled.confidence_interval.1
        )?;
        writeln!(w, "- {}", pooled.significance)?;
        let heterogeneity = &review.meta_analysis_results.heterogeneity;
        writeln!(
            w,
            "- Heterogeneity: I\u{b2} = {:.1}%, \u{3c4}\u{b2} = {:.4} ({})",
            heterogeneity.i_squared, heterogeneity.tau_squared, heterogeneity.interpretation
        )?;
        writeln!(
            w,
            "- Publication bias: {} (Egger p = {:.2})",
            review.meta_analysis_results.publication_bias.funnel_asymmetry,
            review.meta_analysis_results.publication_bias.egger_p_value
        )?;
        writeln!(w)?;

        writeln!(w, "## Clinical Trials")?;
        writeln!(w)?;
        let trials = &review.clinical_trial_summary;
        writeln!(w, "- Total enrollment: {}", trials.total_enrollment)?;
        writeln!(
            w,
            "- Completed-trial endpoint success rate: {:.0}%",
            trials.endpoint_success_rate * 100.0
        )?;
        if !trials.pivotal_trials.is_empty() {
            writeln!(w)?;
            writeln!(w, "| Pivotal trial | Phase | Enrollment | Endpoint met |")?;
            writeln!(w, "|---|---|---|---|")?;
            for trial in &trials.pivotal_trials {
                writeln!(
                    w,
                    "| {} | {} | {} | {} |",
                    trial.nct_id,
                    trial.phase,
                    trial.enrollment,
                    if trial.primary_endpoint_met { "yes" } else { "no" }
                )?;
            }
        }
        writeln!(w)?;

        writeln!(w, "## Evidence Quality")?;
        writeln!(w)?;
        for grade in &review.evidence_quality.grade_assessment {
            writeln!(w, "- {}: {} ({})", grade.outcome, grade.grade, grade.rationale)?;
        }
        writeln!(w)?;
        writeln!(w, "{}.", review.evidence_quality.strength_of_evidence)?;
        writeln!(w)?;

        writeln!(w, "## Recommendations")?;
        writeln!(w)?;
        for (i, recommendation) in review.recommendations.iter().enumerate() {
            writeln!(w, "{}. {recommendation}", i + 1)?;
        }
        writeln!(w)?;

        writeln!(w, "## Future Research")?;
        writeln!(w)?;
        for direction in &review.future_research_directions {
            writeln!(w, "- {direction}")?;
        }
        Ok(())
    }

    fn trend_sections(&mut self, report: &TeratrendReport) -> io::Result<()> {
        let w = &mut self.writer;
        writeln!(w, "# Drug Trend Analysis: {}", report.drug_name)?;
        writeln!(w)?;
        writeln!(w, "Generated {}", report.generated_at.format("%Y-%m-%d"))?;
        writeln!(w)?;
        writeln!(w, "- Class: {}", report.drug_class)?;
        writeln!(w, "- Target: {}", report.drug_class.target)?;
        writeln!(
            w,
            "- Prediction confidence: {:.2}",
            report.prediction_confidence
        )?;
        writeln!(w)?;

        writeln!(w, "## Structural Motifs")?;
        writeln!(w)?;
        writeln!(w, "| Motif | Frequency | Impact | Innovation potential |")?;
        writeln!(w, "|---|---|---|---|")?;
        for motif in &report.structural_motifs {
            writeln!(
                w,
                "| {} | {:.0}% | {} | {} |",
                motif.motif_type,
                motif.frequency * 100.0,
                motif.therapeutic_impact,
                motif.innovation_potential
            )?;
        }
        writeln!(w)?;

        writeln!(w, "## Mechanism Trends")?;
        writeln!(w)?;
        for era in &report.mechanism_trends.historical_evolution {
            writeln!(
                w,
                "- **{}**: {} ({})",
                era.era, era.dominant_approach, era.refinement
            )?;
        }
        writeln!(w)?;
        writeln!(
            w,
            "Complexity: {}.",
            report.mechanism_trends.mechanism_complexity
        )?;
        writeln!(
            w,
            "Innovation velocity: {}.",
            report.mechanism_trends.innovation_velocity
        )?;
        writeln!(
            w,
            "Emerging targets: {}.",
            report.mechanism_trends.emerging_targets.join(", ")
        )?;
        writeln!(w)?;

        writeln!(w, "## Therapeutic Evolution")?;
        writeln!(w)?;
        for phase in &report.therapeutic_evolution.timeline {
            writeln!(w, "- {}: {}", phase.period, phase.milestone)?;
        }
        writeln!(w)?;
        writeln!(
            w,
            "Current generation: {}.",
            report.therapeutic_evolution.current_generation
        )?;
        writeln!(
            w,
            "Outlook: {}.",
            report.therapeutic_evolution.next_generation_outlook
        )?;
        writeln!(w)?;

        writeln!(w, "## Market Dynamics")?;
        writeln!(w)?;
        let market = &report.market_dynamics;
        writeln!(w, "- Phase: {}", market.market_phase)?;
        writeln!(
            w,
            "- Patent cliff ({:.2}): {}",
            market.patent_cliff_index, market.patent_cliff_exposure
        )?;
        writeln!(
            w,
            "- Generic pressure ({:.2}): {}",
            market.generic_pressure_index, market.generic_pressure
        )?;
        writeln!(
            w,
            "- Pipeline density ({:.2}): {}",
            market.pipeline_density_index, market.pipeline_density
        )?;
        writeln!(w, "- Access: {}", market.access_pressure)?;
        writeln!(w, "- Differentiation drivers:")?;
        for driver in &market.differentiation_drivers {
            writeln!(w, "  - {driver}")?;
        }
        writeln!(w)?;

        writeln!(w, "## Innovation Patterns")?;
        writeln!(w)?;
        let innovation = &report.innovation_patterns;
        writeln!(w, "- Dominant pattern: {}", innovation.dominant_pattern)?;
        writeln!(
            w,
            "- Incremental share of recent innovation: {:.2}",
            innovation.incremental_breakthrough_ratio
        )?;
        writeln!(
            w,
            "- Recent approvals (estimate): {}",
            innovation.recent_approvals_estimate
        )?;
        writeln!(
            w,
            "- White space (score {:.2}): {}",
            innovation.white_space_score,
            innovation.white_space.join("; ")
        )?;
        writeln!(w)?;

        writeln!(w, "## Combination Potential")?;
        writeln!(w)?;
        for candidate in &report.combination_potential {
            writeln!(
                w,
                "- {} ({} potential, {}): {}",
                candidate.combination_type,
                candidate.clinical_potential,
                candidate.development_stage,
                candidate.mechanism
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_review(&mut self, review: &ComprehensiveReview) -> Result<()> {
        self.review_sections(review)
            .context("failed to write markdown review")
    }

    fn write_trends(&mut self, report: &TeratrendReport) -> Result<()> {
        self.trend_sections(report)
            .context("failed to write markdown trend report")
    }
}

// ---------------------------------------------------------------------------
// Terminal

#[derive(Default)]
pub struct TerminalWriter;

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

fn grade_colored(grade: EvidenceGrade) -> String {
    let text = grade.to_string();
    match grade {
        EvidenceGrade::High => text.green().to_string(),
        EvidenceGrade::Moderate => text.yellow().to_string(),
        EvidenceGrade::Low | EvidenceGrade::VeryLow => text.red().to_string(),
    }
}

fn confidence_colored(confidence: f64) -> String {
    let text = format!("{confidence:.2}");
    if confidence >= 0.8 {
        text.green().to_string()
    } else if confidence >= 0.65 {
        text.yellow().to_string()
    } else {
        text.red().to_string()
    }
}

impl OutputWriter for TerminalWriter {
    fn write_review(&mut self, review: &ComprehensiveReview) -> Result<()> {
        println!();
        println!(
            "{}",
            format!("Literature Review: {}", review.drug_name)
                .bright_white()
                .bold()
        );
        println!();

        let assessment = &review.systematic_review_summary;
        println!("{}", "Evidence base".cyan().bold());
        println!(
            "  {} articles, window {}",
            review.article_count, assessment.methodology.search_window
        );
        let flow = &assessment.methodology.prisma_flow;
        println!(
            "  PRISMA: identified {}, screened {}, full text {}, included {}",
            flow.records_identified,
            flow.records_screened,
            flow.full_text_assessed,
            flow.studies_included
        );
        println!();

        println!("{}", "Meta-analysis".cyan().bold());
        let pooled = &review.meta_analysis_results.pooled_estimates;
        println!(
            "  Pooled effect {:.3} (95% CI {:.3} to {:.3})",
            pooled.effect_size, pooled.confidence_interval.0, pooled.confidence_interval.1
        );
        println!("  {}", pooled.significance);
        let heterogeneity = &review.meta_analysis_results.heterogeneity;
        println!(
            "  I\u{b2} {:.1}% ({})",
            heterogeneity.i_squared, heterogeneity.interpretation
        );
        println!();

        println!("{}", "Evidence quality".cyan().bold());
        for grade in &review.evidence_quality.grade_assessment {
            println!("  {}: {}", grade.outcome, grade_colored(grade.grade));
        }
        println!("  {}", review.evidence_quality.strength_of_evidence);
        println!();

        println!("{}", "Recommendations".cyan().bold());
        for (i, recommendation) in review.recommendations.iter().enumerate() {
            println!("  {}. {recommendation}", i + 1);
        }
        println!();
        Ok(())
    }

    fn write_trends(&mut self, report: &TeratrendReport) -> Result<()> {
        println!();
        println!(
            "{}",
            format!("Drug Trend Analysis: {}", report.drug_name)
                .bright_white()
                .bold()
        );
        println!();
        println!("  Class: {}", report.drug_class);
        println!("  Target: {}", report.drug_class.target);
        println!(
            "  Confidence: {}",
            confidence_colored(report.prediction_confidence)
        );
        println!();

        println!("{}", "Structural motifs".cyan().bold());
        for motif in &report.structural_motifs {
            println!(
                "  {:>3.0}%  {} ({})",
                motif.frequency * 100.0,
                motif.motif_type,
                motif.innovation_potential
            );
        }
        println!();

        println!("{}", "Mechanism history".cyan().bold());
        for era in &report.mechanism_trends.historical_evolution {
            println!("  {}: {}", era.era, era.dominant_approach);
        }
        println!(
            "  Emerging targets: {}",
            report.mechanism_trends.emerging_targets.join(", ")
        );
        println!();

        println!("{}", "Market".cyan().bold());
        println!(
            "  {} phase; {}",
            report.market_dynamics.market_phase, report.market_dynamics.generic_pressure
        );
        println!(
            "  Patent cliff {:.2}; pipeline density {:.2}",
            report.market_dynamics.patent_cliff_index,
            report.market_dynamics.pipeline_density_index
        );
        println!();

        println!("{}", "Combination potential".cyan().bold());
        for candidate in &report.combination_potential {
            println!(
                "  [{}] {} ({})",
                candidate.clinical_potential, candidate.combination_type, candidate.development_stage
            );
        }
        println!();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literature::LiteratureAnalyzer;
    use crate::teratrend::TeratrendAnalyzer;

    #[test]
    fn json_review_is_valid_and_newline_terminated() {
        let review = LiteratureAnalyzer::new()
            .generate_comprehensive_review("atorvastatin", 20)
            .unwrap();
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_review(&review).unwrap();
        assert_eq!(buffer.last(), Some(&b'\n'));
        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["drug_name"], "atorvastatin");
    }

    #[test]
    fn markdown_review_has_the_expected_sections() {
        let review = LiteratureAnalyzer::new()
            .generate_comprehensive_review("lisinopril", 20)
            .unwrap();
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_review(&review)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("# Literature Review: lisinopril"));
        assert!(text.contains("## Meta-analysis"));
        assert!(text.contains("## Recommendations"));
        assert!(text.contains("| PRISMA stage | Records |"));
    }

    #[test]
    fn markdown_trends_lists_every_motif() {
        let report = TeratrendAnalyzer::new()
            .analyze_drug_teratrends("atorvastatin")
            .unwrap();
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_trends(&report)
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        for motif in &report.structural_motifs {
            assert!(text.contains(&motif.motif_type));
        }
    }

    #[test]
    fn terminal_format_rejects_file_destinations() {
        let err = create_writer(OutputFormat::Terminal, Some(Path::new("out.txt")))
            .err()
            .expect("terminal writer with a file path must be rejected");
        assert!(err.to_string().contains("terminal"));
    }

    #[test]
    fn coloring_helpers_cover_the_bounds() {
        confidence_colored(0.5);
        confidence_colored(0.95);
        grade_colored(EvidenceGrade::High);
        grade_colored(EvidenceGrade::VeryLow);
    }
}
