use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use catalog_nav::core::catalog::FilterId;
use catalog_nav::core::config::{self, CliOverrides, NavConfig};
use catalog_nav::core::filter;
use catalog_nav::core::source::{CatalogSource, JsonFileSource};
use catalog_nav::tui;
use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "catalog-nav", about = "Browse and search a studio catalog")]
struct Args {
    /// Catalog snapshot (JSON with "offers" and "courses")
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive terminal browser (default)
    Browse {
        /// Section to land on
        #[arg(short, long, value_enum)]
        section: Option<FilterId>,
    },
    /// Filter once and print the outcome as JSON
    Filter {
        #[arg(short, long, value_enum)]
        filter: Option<FilterId>,
        #[arg(short, long, default_value = "")]
        query: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to catalog-nav.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("catalog-nav.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        eprintln!("warning: {e}, using defaults");
        NavConfig::default()
    });

    let command = args.command.unwrap_or(Command::Browse { section: None });
    let section = match &command {
        Command::Browse { section } => *section,
        Command::Filter { filter, .. } => *filter,
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            section,
            data_file: args.data,
        },
    );

    log::info!("catalog-nav starting with data file {}", resolved.data_file.display());
    let source: Arc<dyn CatalogSource> = Arc::new(JsonFileSource::new(&resolved.data_file));
    let initial = source.load().await;

    match command {
        Command::Browse { .. } => match tui::run(resolved, source, initial) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Command::Filter { query, .. } => {
            let snapshot = match initial {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    log::warn!("{}", e);
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let outcome = filter::apply_snapshot(
                resolved.default_section,
                &query,
                &resolved.offer_vocabulary,
                &snapshot,
            );
            match serde_json::to_string_pretty(&outcome) {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
