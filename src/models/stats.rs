//! Dashboard projections derived from the history window.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Sentiment;

/// Counters shown on the dashboard. Always recomputed from the retained
/// history, so they describe at most the last 100 analyses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_analysis: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub average_polarity: f64,
    pub last_updated: DateTime<Utc>,
}

impl DashboardStats {
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            total_analysis: 0,
            positive: 0,
            negative: 0,
            neutral: 0,
            average_polarity: 0.0,
            last_updated: now,
        }
    }
}

/// Whole-number share of each sentiment, in percent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SentimentDistribution {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTrend {
    pub date: NaiveDate,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarkerCount {
    pub word: String,
    pub count: usize,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrendReport {
    pub distribution: SentimentDistribution,
    pub daily: Vec<DailyTrend>,
    pub markers: Vec<MarkerCount>,
}
