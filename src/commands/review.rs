//! The `review` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::io::output::{create_writer, OutputFormat};
use crate::literature::LiteratureAnalyzer;

/// Options resolved from the CLI for one review run.
pub struct ReviewOptions {
    pub drug: String,
    pub articles: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

pub fn handle_review(options: ReviewOptions) -> Result<()> {
    let config = super::resolve_config(options.config_path.as_deref())?;
    let target = options.articles.unwrap_or(config.review.target_articles);
    let analyzer = LiteratureAnalyzer::with_config(&config);

    log::info!("generating literature review for {}", options.drug);
    let review = analyzer.generate_comprehensive_review(&options.drug, target)?;

    let mut writer = create_writer(options.format, options.output.as_deref())?;
    writer.write_review(&review)?;

    if let Some(path) = &options.output {
        log::info!("review written to {}", path.display());
    }
    Ok(())
}
