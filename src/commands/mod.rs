//! Command handlers behind the CLI surface.

pub mod init;
pub mod review;
pub mod trends;

use std::path::Path;

use anyhow::Result;

pub use init::handle_init;
pub use review::{handle_review, ReviewOptions};
pub use trends::{handle_trends, TrendsOptions};

use crate::config::{self, PharmascopeConfig};

/// Explicit `--config` path wins over the ancestor-walk lookup.
pub(crate) fn resolve_config(path: Option<&Path>) -> Result<PharmascopeConfig> {
    match path {
        Some(path) => config::load_config_from(path),
        None => Ok(config::get_config().clone()),
    }
}
