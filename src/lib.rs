pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod literature;
pub mod teratrend;

pub use config::PharmascopeConfig;
pub use core::errors::{Error, Result};
pub use literature::{ComprehensiveReview, LiteratureAnalyzer, LiteratureSearchResult};
pub use teratrend::{DrugClass, TeratrendAnalyzer, TeratrendReport};
