pub mod config;
pub mod scorer;
pub mod tie_break;

pub use config::ScoringConfig;
pub use scorer::{Score, Scorer};
pub use tie_break::{FixedTieBreaker, RandomTieBreaker, TieBreaker};
