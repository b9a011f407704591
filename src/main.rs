use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use machdetect::classifiers::ModelArtifact;
use machdetect::config::AppConfig;
use machdetect::core::RawReadingSet;
use machdetect::inference::submit;
use machdetect::ui::cli::drivers::InquireDriver;
use machdetect::ui::cli::{render_status, run_form};
use machdetect::utils::file_parsing::split_reading_row;

/// Machine failure detection from ten sensor readings
#[derive(Parser)]
#[command(name = "machdetect")]
#[command(version)]
#[command(about = "Predicts imminent machine failure from sensor readings")]
struct Cli {
    /// Model artifact to use (defaults to $MACHDETECT_MODEL, then model.json next to the binary)
    #[arg(long, value_name = "PATH")]
    model: Option<PathBuf>,

    /// Load the model once and reuse it across submissions
    #[arg(long)]
    cached: bool,

    /// Submit one row of ten comma-separated readings in form order and exit
    #[arg(long, value_name = "ROW", conflicts_with = "print_schema")]
    csv: Option<String>,

    /// Print the JSON Schema of the model artifact format and exit
    #[arg(long)]
    print_schema: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.print_schema {
        let schema = serde_json::to_string_pretty(&ModelArtifact::json_schema())?;
        println!("{schema}");
        return Ok(());
    }

    let config = AppConfig::resolve(cli.model, cli.cached)?;
    info!("Using model artifact {}", config.model_path.display());
    let source = config.model_source();

    if let Some(row) = cli.csv {
        let readings = RawReadingSet::from_ordered(split_reading_row(&row))
            .context("expected ten comma-separated readings")?;
        let outcome = submit(&readings, source.as_ref());
        println!("{}", render_status(&outcome.status_line()));
        return Ok(());
    }

    let submissions = run_form(&InquireDriver, source.as_ref(), &mut io::stdout())?;
    info!("{submissions} submission(s) evaluated");
    Ok(())
}
