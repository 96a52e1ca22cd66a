//! Marker words recognized by the scorer.
//!
//! Matching is plain substring containment against the lowercased text, so
//! "goodness" counts as "good" and "unbroken" counts as "broken". Each marker
//! contributes at most once per text no matter how often it appears.

use crate::models::Sentiment;

pub const POSITIVE_MARKERS: &[&str] = &[
    "excellent",
    "great",
    "good",
    "amazing",
    "wonderful",
    "perfect",
    "outstanding",
    "fantastic",
    "awesome",
    "brilliant",
    "love",
    "best",
    "happy",
    "satisfied",
    "pleased",
    "impressed",
];

pub const NEGATIVE_MARKERS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "horrible",
    "poor",
    "disappointing",
    "worst",
    "hate",
    "angry",
    "frustrated",
    "annoyed",
    "useless",
    "waste",
    "broken",
    "failed",
];

/// Markers found in one text, split by polarity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerMatches {
    pub positive: Vec<&'static str>,
    pub negative: Vec<&'static str>,
}

impl MarkerMatches {
    pub fn positive_count(&self) -> usize {
        self.positive.len()
    }

    pub fn negative_count(&self) -> usize {
        self.negative.len()
    }

    pub fn emotional_count(&self) -> usize {
        self.positive.len() + self.negative.len()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            positive: POSITIVE_MARKERS,
            negative: NEGATIVE_MARKERS,
        }
    }
}

impl Lexicon {
    pub fn new(positive: &'static [&'static str], negative: &'static [&'static str]) -> Self {
        Self { positive, negative }
    }

    pub fn positive(&self) -> &'static [&'static str] {
        self.positive
    }

    pub fn negative(&self) -> &'static [&'static str] {
        self.negative
    }

    /// Every marker with the sentiment it pushes towards.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Sentiment)> + '_ {
        self.positive
            .iter()
            .map(|word| (*word, Sentiment::Positive))
            .chain(self.negative.iter().map(|word| (*word, Sentiment::Negative)))
    }

    pub fn find_markers(&self, text: &str) -> MarkerMatches {
        let folded = text.to_lowercase();
        MarkerMatches {
            positive: matching(self.positive, &folded),
            negative: matching(self.negative, &folded),
        }
    }
}

fn matching(markers: &'static [&'static str], folded: &str) -> Vec<&'static str> {
    markers
        .iter()
        .copied()
        .filter(|marker| folded.contains(marker))
        .collect()
}
