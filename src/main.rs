use anyhow::Result;
use clap::Parser;

use pharmascope::cli::{Cli, Commands};
use pharmascope::commands::{self, ReviewOptions, TrendsOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Review {
            drug,
            articles,
            format,
            output,
            config,
            verbose,
        } => {
            init_logging(verbose);
            commands::handle_review(ReviewOptions {
                drug,
                articles,
                format: format.into(),
                output,
                config_path: config,
            })
        }
        Commands::Trends {
            drug,
            format,
            output,
            config,
            verbose,
        } => {
            init_logging(verbose);
            commands::handle_trends(TrendsOptions {
                drug,
                format: format.into(),
                output,
                config_path: config,
            })
        }
        Commands::Init { force } => {
            init_logging(0);
            commands::handle_init(force)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}
