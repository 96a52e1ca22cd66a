//! Analysis records as they are stored in history and returned to callers.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentiment restriction applied by search. `All` disables the restriction.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Negative,
    Neutral,
}

impl SentimentFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentFilter::All => "all",
            SentimentFilter::Positive => "positive",
            SentimentFilter::Negative => "negative",
            SentimentFilter::Neutral => "neutral",
        }
    }

    pub fn matches(&self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => sentiment == Sentiment::Positive,
            SentimentFilter::Negative => sentiment == Sentiment::Negative,
            SentimentFilter::Neutral => sentiment == Sentiment::Neutral,
        }
    }
}

impl From<Sentiment> for SentimentFilter {
    fn from(value: Sentiment) -> Self {
        match value {
            Sentiment::Positive => SentimentFilter::Positive,
            Sentiment::Negative => SentimentFilter::Negative,
            Sentiment::Neutral => SentimentFilter::Neutral,
        }
    }
}

impl FromStr for SentimentFilter {
    type Err = EngineError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(SentimentFilter::All),
            "positive" => Ok(SentimentFilter::Positive),
            "negative" => Ok(SentimentFilter::Negative),
            "neutral" => Ok(SentimentFilter::Neutral),
            other => Err(EngineError::validation(format!(
                "unknown sentiment filter '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SentimentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single scored piece of feedback. Never modified after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub id: String,
    pub text: String,
    pub polarity: f64,
    pub sentiment: Sentiment,
    pub subjectivity: f64,
    pub word_count: usize,
    pub timestamp: DateTime<Utc>,
}
