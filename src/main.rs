use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

use sentiment_engine::{
    models::SentimentFilter, AnalysisService, BatchInput, Database, EngineError, LatencyProfile,
    Scorer, SettingsStore,
};

#[derive(Parser)]
#[command(name = "sentiment-engine", version, about = "Score feedback and inspect analysis history")]
struct Cli {
    /// Directory holding the database and settings.json
    #[arg(long, env = "SENTIMENT_ENGINE_DATA_DIR", default_value = ".sentiment-engine")]
    data_dir: PathBuf,

    /// Skip the simulated processing delay
    #[arg(long)]
    no_delay: bool,

    /// Use a throwaway in-memory store instead of the data directory
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a single text
    Analyze { text: String },
    /// Score one text per line from a file or stdin (`.json` files hold an array)
    Batch {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show a page of history, newest first
    History {
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Dashboard counters over the retained history
    Stats,
    /// Case-insensitive text search with an optional sentiment filter
    Search {
        query: String,
        #[arg(long, default_value = "all")]
        sentiment: String,
    },
    /// Remove all history and stats
    Clear,
    /// Dump metadata, stats and history as one JSON document
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Sentiment shares, daily counts and frequent marker words
    Trends {
        #[arg(long)]
        markers: Option<usize>,
    },
    /// Show or change settings.json
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Update one or more settings and write them back
    Set {
        #[arg(long)]
        simulate_latency: Option<bool>,
        #[arg(long)]
        page_size: Option<usize>,
        #[arg(long)]
        markers: Option<usize>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let store = SettingsStore::new(cli.data_dir.join("settings.json"))?;
    let command = match cli.command {
        Command::Config { action } => return configure(&store, &action),
        command => command,
    };

    let settings = store.current();
    let latency = LatencyProfile::from_enabled(settings.latency_enabled() && !cli.no_delay);

    let db = if cli.ephemeral {
        Database::in_memory()?
    } else {
        Database::new(cli.data_dir.join("sentiment.sqlite3"))?
    };
    let service = AnalysisService::open(db, Scorer::default(), latency).await;

    match command {
        Command::Analyze { text } => print_json(&service.analyze_text(&text).await?)?,
        Command::Batch { file } => {
            let input = BatchInput::read(file.as_deref())?;
            print_json(&service.analyze_batch_input(&input).await?)?;
        }
        Command::History { page, limit } => {
            let limit = limit.unwrap_or(settings.default_page_size);
            print_json(&service.get_history(page, limit).await?)?;
        }
        Command::Stats => print_json(&service.get_stats().await)?,
        Command::Search { query, sentiment } => {
            let filter: SentimentFilter = sentiment.parse()?;
            print_json(&service.search(&query, filter).await)?;
        }
        Command::Clear => print_json(&service.clear_history().await)?,
        Command::Export { output } => {
            let snapshot = service.export_snapshot().await;
            match output {
                Some(path) => {
                    fs::write(&path, serde_json::to_string_pretty(&snapshot)?)
                        .with_context(|| format!("failed to write export to {}", path.display()))?;
                    info!(
                        "Exported {} analyses to {}",
                        snapshot.metadata.total_records,
                        path.display()
                    );
                }
                None => print_json(&snapshot)?,
            }
        }
        Command::Trends { markers } => {
            let limit = markers.unwrap_or(settings.marker_limit);
            print_json(&service.get_trends(limit).await)?;
        }
        Command::Config { .. } => {}
    }

    Ok(())
}

fn configure(store: &SettingsStore, action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => print_json(&store.current()),
        ConfigAction::Set {
            simulate_latency,
            page_size,
            markers,
        } => {
            let mut settings = store.current();
            if let Some(enabled) = simulate_latency {
                settings.simulate_latency = *enabled;
            }
            if let Some(size) = page_size {
                if *size == 0 {
                    return Err(EngineError::validation("page size must be at least 1").into());
                }
                settings.default_page_size = *size;
            }
            if let Some(limit) = markers {
                settings.marker_limit = *limit;
            }
            store.update(settings.clone())?;
            info!("Saved settings to {}", store.path().display());
            print_json(&settings)
        }
    }
}

fn report(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<EngineError>() {
        Some(EngineError::Validation(message)) => eprintln!("invalid input: {message}"),
        _ => eprintln!("error: {err:#}"),
    }
    1
}

#[tokio::main]
async fn main() {
    sentiment_engine::init_logging();

    if let Err(err) = run(Cli::parse()).await {
        std::process::exit(report(&err));
    }
}
