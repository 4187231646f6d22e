//! Configuration loading for `.pharmascope.toml`.
//!
//! The file is optional; every field has a default, and a missing file just
//! means defaults. A present-but-invalid file is an error on explicit loads
//! and a logged fallback on the cached path.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::literature::DEFAULT_DATABASES;

/// File name searched for in the working directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = ".pharmascope.toml";

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PharmascopeConfig {
    pub review: ReviewConfig,
    pub quality: QualityConfig,
    pub confidence: ConfidenceConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Article cap handed to the literature search when the CLI does not
    /// override it.
    #[serde(default = "default_target_articles")]
    pub target_articles: usize,
    #[serde(default = "default_databases")]
    pub databases: Vec<String>,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            target_articles: default_target_articles(),
            databases: default_databases(),
        }
    }
}

fn default_target_articles() -> usize {
    50
}

fn default_databases() -> Vec<String> {
    DEFAULT_DATABASES.iter().map(|s| s.to_string()).collect()
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct QualityConfig {
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,
    #[serde(default = "default_moderate_threshold")]
    pub moderate_threshold: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            high_threshold: default_high_threshold(),
            moderate_threshold: default_moderate_threshold(),
        }
    }
}

fn default_high_threshold() -> f64 {
    0.8
}

fn default_moderate_threshold() -> f64 {
    0.6
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct ConfidenceConfig {
    #[serde(default = "default_motif_weight")]
    pub motif_weight: f64,
    #[serde(default = "default_trend_weight")]
    pub trend_weight: f64,
    #[serde(default = "default_evolution_weight")]
    pub evolution_weight: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            motif_weight: default_motif_weight(),
            trend_weight: default_trend_weight(),
            evolution_weight: default_evolution_weight(),
        }
    }
}

fn default_motif_weight() -> f64 {
    0.04
}

fn default_trend_weight() -> f64 {
    0.03
}

fn default_evolution_weight() -> f64 {
    0.02
}

impl PharmascopeConfig {
    /// Reject values that would make the downstream math meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.review.target_articles == 0 {
            anyhow::bail!("review.target_articles must be at least 1");
        }
        if self.review.databases.is_empty() {
            anyhow::bail!("review.databases must not be empty");
        }
        if !(0.0..=1.0).contains(&self.quality.high_threshold)
            || !(0.0..=1.0).contains(&self.quality.moderate_threshold)
        {
            anyhow::bail!("quality thresholds must lie in 0.0..=1.0");
        }
        if self.quality.moderate_threshold >= self.quality.high_threshold {
            anyhow::bail!("quality.moderate_threshold must be below quality.high_threshold");
        }
        for (name, weight) in [
            ("motif_weight", self.confidence.motif_weight),
            ("trend_weight", self.confidence.trend_weight),
            ("evolution_weight", self.confidence.evolution_weight),
        ] {
            // Oversized weights are legal; the confidence ceiling absorbs them.
            if !(0.0..).contains(&weight) {
                anyhow::bail!("confidence.{name} must not be negative");
            }
        }
        Ok(())
    }
}

static CONFIG: OnceLock<PharmascopeConfig> = OnceLock::new();

/// Cached configuration, loaded on first access.
pub fn get_config() -> &'static PharmascopeConfig {
    CONFIG.get_or_init(|| match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("falling back to default configuration: {e:#}");
            PharmascopeConfig::default()
        }
    })
}

/// Load from the nearest config file, or defaults when none exists.
pub fn load_config() -> Result<PharmascopeConfig> {
    match find_config_file()? {
        Some(path) => load_config_from(&path),
        None => Ok(PharmascopeConfig::default()),
    }
}

/// Load and validate an explicitly named config file.
pub fn load_config_from(path: &Path) -> Result<PharmascopeConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: PharmascopeConfig =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn find_config_file() -> Result<Option<PathBuf>> {
    let current = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(current
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_means_defaults() {
        let config: PharmascopeConfig = toml::from_str("").unwrap();
        assert_eq!(config.review.target_articles, 50);
        assert_eq!(config.quality.high_threshold, 0.8);
        assert_eq!(config.confidence.motif_weight, 0.04);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config: PharmascopeConfig = toml::from_str(
            r#"
            [review]
            target_articles = 25

            [quality]
            high_threshold = 0.85
            "#,
        )
        .unwrap();
        assert_eq!(config.review.target_articles, 25);
        assert_eq!(config.quality.high_threshold, 0.85);
        assert_eq!(config.quality.moderate_threshold, 0.6);
        assert_eq!(config.review.databases.len(), DEFAULT_DATABASES.len());
    }

    #[test]
    fn inverted_thresholds_fail_validation() {
        let config: PharmascopeConfig = toml::from_str(
            r#"
            [quality]
            high_threshold = 0.5
            moderate_threshold = 0.7
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_target_fails_validation() {
        let config: PharmascopeConfig = toml::from_str("[review]\ntarget_articles = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_weight_fails_validation() {
        let config: PharmascopeConfig =
            toml::from_str("[confidence]\nmotif_weight = -0.01").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn large_weight_passes_validation() {
        let config: PharmascopeConfig =
            toml::from_str("[confidence]\nmotif_weight = 0.5").unwrap();
        assert!(config.validate().is_ok());
    }
}
