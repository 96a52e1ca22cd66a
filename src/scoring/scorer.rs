use std::sync::Arc;

use crate::error::{EngineError, EngineResult};
use crate::lexicon::{Lexicon, MarkerMatches};
use crate::models::Sentiment;
use crate::scoring::config::ScoringConfig;
use crate::scoring::tie_break::{RandomTieBreaker, TieBreaker};
use crate::utils::round3;

/// Output of a single scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub polarity: f64,
    pub sentiment: Sentiment,
    pub subjectivity: f64,
    pub word_count: usize,
    pub markers: MarkerMatches,
}

#[derive(Clone)]
pub struct Scorer {
    lexicon: Lexicon,
    config: ScoringConfig,
    tie_breaker: Arc<dyn TieBreaker>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(
            Lexicon::default(),
            ScoringConfig::default(),
            Arc::new(RandomTieBreaker::new()),
        )
    }
}

impl Scorer {
    pub fn new(lexicon: Lexicon, config: ScoringConfig, tie_breaker: Arc<dyn TieBreaker>) -> Self {
        Self {
            lexicon,
            config,
            tie_breaker,
        }
    }

    /// Default lexicon and weights with a caller-supplied tie-break source.
    pub fn with_tie_breaker(tie_breaker: Arc<dyn TieBreaker>) -> Self {
        Self::new(Lexicon::default(), ScoringConfig::default(), tie_breaker)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, text: &str) -> EngineResult<Score> {
        if text.trim().is_empty() {
            return Err(EngineError::validation("Invalid text input"));
        }

        let markers = self.lexicon.find_markers(text);
        let base = self.base_polarity(markers.positive_count(), markers.negative_count());
        let polarity = round3(self.apply_exclamations(base, text));

        let word_count = text.split_whitespace().count().max(1);
        let subjectivity = round3(self.subjectivity(markers.emotional_count(), word_count));

        Ok(Score {
            polarity,
            sentiment: self.classify(polarity),
            subjectivity,
            word_count,
            markers,
        })
    }

    /// Maps a polarity onto its sentiment band.
    pub fn classify(&self, polarity: f64) -> Sentiment {
        if polarity > self.config.positive_threshold {
            Sentiment::Positive
        } else if polarity < self.config.negative_threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    fn base_polarity(&self, positive: usize, negative: usize) -> f64 {
        let cfg = &self.config;
        if positive > negative {
            (cfg.base_offset + cfg.marker_step * positive as f64).min(cfg.max_base_magnitude)
        } else if negative > positive {
            (-cfg.base_offset - cfg.marker_step * negative as f64).max(-cfg.max_base_magnitude)
        } else {
            self.tie_breaker.draw(-cfg.tie_spread, cfg.tie_spread)
        }
    }

    // Not clamped afterwards: a maxed-out base plus three `!` reaches ±1.2.
    fn apply_exclamations(&self, polarity: f64, text: &str) -> f64 {
        let bangs = text.chars().filter(|c| *c == '!').count();
        if bangs == 0 {
            return polarity;
        }

        let direction = if polarity > 0.0 { 1.0 } else { -1.0 };
        let steps = bangs.min(self.config.max_exclamations) as f64;
        polarity + direction * self.config.exclamation_step * steps
    }

    fn subjectivity(&self, emotional: usize, word_count: usize) -> f64 {
        let cfg = &self.config;
        let ratio = emotional as f64 / word_count as f64;
        (cfg.subjectivity_floor + cfg.subjectivity_weight * ratio).min(cfg.subjectivity_cap)
    }
}
