//! Chart-oriented views over the history window: sentiment shares, a per-day
//! breakdown and the marker words that show up most.

use std::collections::BTreeMap;

use crate::lexicon::Lexicon;
use crate::models::{
    AnalysisResult, DailyTrend, DashboardStats, MarkerCount, Sentiment, SentimentDistribution,
    TrendReport,
};

/// Whole-number percentage of each sentiment; all zero for an empty window.
pub fn distribution(stats: &DashboardStats) -> SentimentDistribution {
    if stats.total_analysis == 0 {
        return SentimentDistribution::default();
    }

    let share = |count: usize| -> u32 {
        ((count as f64 / stats.total_analysis as f64) * 100.0).round() as u32
    };

    SentimentDistribution {
        positive: share(stats.positive),
        negative: share(stats.negative),
        neutral: share(stats.neutral),
    }
}

/// Sentiment counts per UTC calendar day, oldest day first.
pub fn daily_trends<'a, I>(history: I) -> Vec<DailyTrend>
where
    I: IntoIterator<Item = &'a AnalysisResult>,
{
    let mut days: BTreeMap<_, DailyTrend> = BTreeMap::new();

    for record in history {
        let date = record.timestamp.date_naive();
        let day = days.entry(date).or_insert_with(|| DailyTrend {
            date,
            positive: 0,
            negative: 0,
            neutral: 0,
        });
        match record.sentiment {
            Sentiment::Positive => day.positive += 1,
            Sentiment::Negative => day.negative += 1,
            Sentiment::Neutral => day.neutral += 1,
        }
    }

    days.into_values().collect()
}

/// Number of records mentioning each marker word, most frequent first.
/// Markers that never appear are left out.
pub fn marker_frequency<'a, I>(history: I, lexicon: &Lexicon, limit: usize) -> Vec<MarkerCount>
where
    I: IntoIterator<Item = &'a AnalysisResult>,
{
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();

    for record in history {
        let matches = lexicon.find_markers(&record.text);
        for word in matches.positive.into_iter().chain(matches.negative) {
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let mut markers: Vec<MarkerCount> = lexicon
        .entries()
        .filter_map(|(word, sentiment)| {
            counts.get(word).map(|count| MarkerCount {
                word: word.to_string(),
                count: *count,
                sentiment,
            })
        })
        .collect();

    markers.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    markers.truncate(limit);
    markers
}

pub fn trend_report(
    history: &[AnalysisResult],
    stats: &DashboardStats,
    lexicon: &Lexicon,
    marker_limit: usize,
) -> TrendReport {
    TrendReport {
        distribution: distribution(stats),
        daily: daily_trends(history),
        markers: marker_frequency(history, lexicon, marker_limit),
    }
}
