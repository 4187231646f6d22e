//! The `trends` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::io::output::{create_writer, OutputFormat};
use crate::teratrend::TeratrendAnalyzer;

/// Options resolved from the CLI for one trend-analysis run.
pub struct TrendsOptions {
    pub drug: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

pub fn handle_trends(options: TrendsOptions) -> Result<()> {
    let config = super::resolve_config(options.config_path.as_deref())?;
    let analyzer = TeratrendAnalyzer::with_config(&config);

    log::info!("analyzing class trends for {}", options.drug);
    let report = analyzer.analyze_drug_teratrends(&options.drug)?;

    let mut writer = create_writer(options.format, options.output.as_deref())?;
    writer.write_trends(&report)?;

    if let Some(path) = &options.output {
        log::info!("trend report written to {}", path.display());
    }
    Ok(())
}
