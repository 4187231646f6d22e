//! The `init` command: write a starter configuration file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::CONFIG_FILE_NAME;

const CONFIG_TEMPLATE: &str = r#"# pharmascope configuration
# Values shown are the defaults; uncomment to override.

[review]
# Articles to aggregate when --articles is not given.
# target_articles = 50
# databases = ["pubmed", "embase", "cochrane", "web_of_science", "scopus"]

[quality]
# Score cutoffs for the high/moderate/low quality bands.
# high_threshold = 0.8
# moderate_threshold = 0.6

[confidence]
# Per-signal weights for trend prediction confidence.
# motif_weight = 0.04
# trend_weight = 0.03
# evolution_weight = 0.02
"#;

pub fn handle_init(force: bool) -> Result<()> {
    write_template(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {CONFIG_FILE_NAME}");
    Ok(())
}

fn write_template(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }
    fs::write(path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))
}
