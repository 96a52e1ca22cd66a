use chrono::{DateTime, Utc};

use crate::models::{AnalysisResult, DashboardStats, Sentiment};
use crate::utils::round3;

/// Derives dashboard counters from the given history window.
///
/// Nothing is carried over between calls, so the result can never drift from
/// the records it was computed from.
pub fn compute<'a, I>(history: I, now: DateTime<Utc>) -> DashboardStats
where
    I: IntoIterator<Item = &'a AnalysisResult>,
{
    let mut stats = DashboardStats::empty(now);
    let mut polarity_sum = 0.0;

    for record in history {
        stats.total_analysis += 1;
        polarity_sum += record.polarity;
        match record.sentiment {
            Sentiment::Positive => stats.positive += 1,
            Sentiment::Negative => stats.negative += 1,
            Sentiment::Neutral => stats.neutral += 1,
        }
    }

    if stats.total_analysis > 0 {
        stats.average_polarity = round3(polarity_sum / stats.total_analysis as f64);
    }

    stats
}
