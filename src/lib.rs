//! Lexicon-based sentiment scoring with a bounded, persisted analysis
//! history and the dashboard analytics derived from it.

pub mod db;
pub mod error;
pub mod history;
pub mod lexicon;
pub mod models;
pub mod scoring;
pub mod service;
pub mod settings;
pub mod stats;
pub mod utils;

pub use db::Database;
pub use error::{EngineError, EngineResult};
pub use history::{HistoryStore, HISTORY_CAPACITY};
pub use lexicon::Lexicon;
pub use scoring::{FixedTieBreaker, RandomTieBreaker, Scorer, ScoringConfig, TieBreaker};
pub use service::{split_batch_lines, AnalysisService, BatchInput, LatencyProfile};
pub use settings::{EngineSettings, SettingsStore};

/// Installs the process-wide logger at `info`, with `RUST_LOG` directives
/// applied on top.
pub fn init_logging() {
    if env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init()
        .is_err()
    {
        log::warn!("Logger already initialized");
    }
}
