use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{
    db::Database,
    error::{EngineError, EngineResult},
    history::HistoryStore,
    log_error, log_info, log_warn,
    models::{
        AnalysisResult, BatchOutcome, BatchSummary, ClearAck, DashboardStats, ExportMetadata,
        ExportSnapshot, HistoryPage, Pagination, SearchOutcome, SearchSummary, Sentiment,
        SentimentFilter, TrendReport,
    },
    scoring::Scorer,
    stats,
};

use super::{
    batch_input::BatchInput,
    latency::{pause, LatencyProfile},
};

const ENABLE_LOGS: bool = true;

pub const EXPORT_VERSION: &str = "1.0";

/// Splits a pasted block into one text per non-blank line.
pub fn split_batch_lines(block: &str) -> Vec<String> {
    block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Entry point for every engine operation.
///
/// Cloning is cheap and clones share the same history. Writes hold the
/// history lock until the new state has been persisted, so concurrent
/// analyses never lose each other's records.
#[derive(Clone)]
pub struct AnalysisService {
    history: Arc<Mutex<HistoryStore>>,
    db: Database,
    scorer: Arc<Scorer>,
    latency: LatencyProfile,
}

impl AnalysisService {
    pub fn new(db: Database, history: HistoryStore, scorer: Scorer, latency: LatencyProfile) -> Self {
        Self {
            history: Arc::new(Mutex::new(history)),
            db,
            scorer: Arc::new(scorer),
            latency,
        }
    }

    /// Builds the service around whatever history `db` already holds.
    /// Unreadable history is logged and replaced with an empty log.
    pub async fn open(db: Database, scorer: Scorer, latency: LatencyProfile) -> Self {
        let history = match db.load_history().await {
            Ok(entries) => {
                log_info!("Restored {} analyses from storage", entries.len());
                HistoryStore::from_entries(entries)
            }
            Err(err) => {
                log_warn!("Starting with empty history: {err}");
                HistoryStore::new()
            }
        };

        Self::new(db, history, scorer, latency)
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    pub async fn analyze_text(&self, text: &str) -> EngineResult<AnalysisResult> {
        let text = text.trim();
        if text.is_empty() {
            return Err(EngineError::validation("Invalid text input"));
        }

        let result = self.build_result(text, "analysis")?;
        {
            let mut history = self.history.lock().await;
            history.append(result.clone());
            self.persist(&history).await;
        }

        log_info!(
            "Analyzed {} ({}, polarity {})",
            result.id,
            result.sentiment,
            result.polarity
        );

        pause(self.latency.analyze).await;
        Ok(result)
    }

    /// Scores each non-blank text on its own and records them in order,
    /// so the last text of the batch becomes the newest history entry.
    pub async fn analyze_batch<S: AsRef<str>>(&self, texts: &[S]) -> EngineResult<BatchOutcome> {
        if texts.is_empty() {
            return Err(EngineError::validation("Invalid texts array"));
        }

        let valid: Vec<&str> = texts
            .iter()
            .map(|text| text.as_ref().trim())
            .filter(|text| !text.is_empty())
            .collect();
        if valid.is_empty() {
            return Err(EngineError::validation("No valid texts to analyze"));
        }

        let results = valid
            .into_iter()
            .map(|text| self.build_result(text, "batch"))
            .collect::<EngineResult<Vec<_>>>()?;

        let mut summary = BatchSummary {
            total: results.len(),
            ..BatchSummary::default()
        };
        for result in &results {
            match result.sentiment {
                Sentiment::Positive => summary.positive += 1,
                Sentiment::Negative => summary.negative += 1,
                Sentiment::Neutral => summary.neutral += 1,
            }
        }

        {
            let mut history = self.history.lock().await;
            history.append_many(results.iter().cloned());
            self.persist(&history).await;
        }

        log_info!(
            "Analyzed batch of {} ({} positive, {} negative, {} neutral)",
            summary.total,
            summary.positive,
            summary.negative,
            summary.neutral
        );

        pause(self.latency.batch(results.len())).await;
        Ok(BatchOutcome {
            data: results,
            summary,
        })
    }

    /// Batch entry point for untyped callers. Anything other than an array
    /// is rejected; array items that are not strings count as blank.
    pub async fn analyze_batch_json(&self, value: &Value) -> EngineResult<BatchOutcome> {
        let items = value
            .as_array()
            .ok_or_else(|| EngineError::validation("Invalid texts array"))?;
        let texts: Vec<&str> = items.iter().map(|item| item.as_str().unwrap_or("")).collect();
        self.analyze_batch(&texts).await
    }

    pub async fn analyze_batch_input(&self, input: &BatchInput) -> EngineResult<BatchOutcome> {
        match input {
            BatchInput::Lines(lines) => self.analyze_batch(lines.as_slice()).await,
            BatchInput::Json(value) => self.analyze_batch_json(value).await,
        }
    }

    pub async fn get_history(&self, page: usize, limit: usize) -> EngineResult<HistoryPage> {
        if page == 0 || limit == 0 {
            return Err(EngineError::validation("page and limit must be at least 1"));
        }

        let (data, total) = {
            let history = self.history.lock().await;
            let start = (page - 1).saturating_mul(limit);
            (history.slice(start, limit), history.len())
        };

        pause(self.latency.history).await;
        Ok(HistoryPage {
            data,
            pagination: Pagination {
                page,
                limit,
                total,
                total_pages: total.div_ceil(limit),
            },
        })
    }

    /// Fresh counters over the current history, also stored as the
    /// last-known snapshot.
    pub async fn get_stats(&self) -> DashboardStats {
        let stats = {
            let history = self.history.lock().await;
            let stats = stats::compute(history.iter(), Utc::now());
            if let Err(err) = self.db.save_stats(&stats).await {
                log_warn!("Failed to persist stats snapshot: {err}");
            }
            stats
        };

        pause(self.latency.stats).await;
        stats
    }

    /// Stats record as last written to storage, if any.
    pub async fn last_stats_snapshot(&self) -> Option<DashboardStats> {
        match self.db.load_stats().await {
            Ok(stats) => stats,
            Err(err) => {
                log_warn!("Ignoring unreadable stats snapshot: {err}");
                None
            }
        }
    }

    pub async fn search(&self, query: &str, filter: SentimentFilter) -> SearchOutcome {
        let needle = query.to_lowercase();
        let data: Vec<AnalysisResult> = {
            let history = self.history.lock().await;
            history
                .iter()
                .filter(|record| filter.matches(record.sentiment))
                .filter(|record| record.text.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        };

        pause(self.latency.search).await;
        SearchOutcome {
            summary: SearchSummary {
                total: data.len(),
                query: query.to_string(),
                sentiment_filter: filter,
            },
            data,
        }
    }

    pub async fn clear_history(&self) -> ClearAck {
        let mut history = self.history.lock().await;
        history.clear();

        match self.db.clear_snapshot().await {
            Ok(()) => {
                log_info!("History cleared");
                ClearAck {
                    success: true,
                    message: Some("All analysis history cleared successfully".into()),
                }
            }
            Err(err) => {
                log_error!("History cleared in memory but not in storage: {err}");
                ClearAck {
                    success: false,
                    message: Some("Failed to clear history".into()),
                }
            }
        }
    }

    pub async fn export_snapshot(&self) -> ExportSnapshot {
        let history = self.history.lock().await;
        let now = Utc::now();

        ExportSnapshot {
            metadata: ExportMetadata {
                exported_at: now,
                total_records: history.len(),
                version: EXPORT_VERSION.to_string(),
            },
            statistics: stats::compute(history.iter(), now),
            analyses: history.all(),
        }
    }

    pub async fn get_trends(&self, marker_limit: usize) -> TrendReport {
        let history = self.history.lock().await.all();
        let stats = stats::compute(&history, Utc::now());
        stats::trend_report(&history, &stats, self.scorer.lexicon(), marker_limit)
    }

    fn build_result(&self, text: &str, id_prefix: &str) -> EngineResult<AnalysisResult> {
        let score = self.scorer.score(text)?;
        Ok(AnalysisResult {
            id: format!("{id_prefix}_{}", Uuid::new_v4()),
            text: text.to_string(),
            polarity: score.polarity,
            sentiment: score.sentiment,
            subjectivity: score.subjectivity,
            word_count: score.word_count,
            timestamp: Utc::now(),
        })
    }

    // Storage failures never fail the write; memory stays authoritative.
    async fn persist(&self, history: &HistoryStore) {
        let entries = history.all();
        let stats = stats::compute(&entries, Utc::now());
        if let Err(err) = self.db.save_snapshot(&entries, &stats).await {
            log_warn!("Failed to persist history: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::FixedTieBreaker;

    async fn service() -> AnalysisService {
        let db = Database::in_memory().unwrap();
        let scorer = Scorer::with_tie_breaker(Arc::new(FixedTieBreaker(0.0)));
        AnalysisService::open(db, scorer, LatencyProfile::none()).await
    }

    #[test]
    fn split_drops_blank_lines() {
        let lines = split_batch_lines("great stuff\n\n   \n  awful wait  \r\nok");
        assert_eq!(lines, vec!["great stuff", "awful wait", "ok"]);
    }

    #[tokio::test]
    async fn analyze_trims_and_stamps() {
        let service = service().await;
        let result = service.analyze_text("  love it  ").await.unwrap();

        assert_eq!(result.text, "love it");
        assert_eq!(result.word_count, 2);
        assert!(result.id.starts_with("analysis_"));
    }

    #[tokio::test]
    async fn blank_text_leaves_history_untouched() {
        let service = service().await;
        let err = service.analyze_text(" \t ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(service.get_stats().await.total_analysis, 0);
    }

    #[tokio::test]
    async fn batch_ids_use_batch_prefix() {
        let service = service().await;
        let outcome = service.analyze_batch(&["good", "bad"]).await.unwrap();
        assert!(outcome.data.iter().all(|r| r.id.starts_with("batch_")));
    }

    #[tokio::test]
    async fn json_batch_treats_non_strings_as_blank() {
        let service = service().await;
        let value = serde_json::json!(["great work", 42, null, "  "]);
        let outcome = service.analyze_batch_json(&value).await.unwrap();
        assert_eq!(outcome.summary.total, 1);

        let err = service
            .analyze_batch_json(&serde_json::json!({"texts": ["great"]}))
            .await
            .unwrap_err();
        assert!(err.is_validation());

        let err = service
            .analyze_batch_json(&serde_json::json!([1, 2]))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn batch_input_dispatches_on_format() {
        let service = service().await;
        let lines = BatchInput::Lines(vec!["great".into(), "awful".into()]);
        assert_eq!(service.analyze_batch_input(&lines).await.unwrap().summary.total, 2);

        let json = BatchInput::Json(serde_json::json!(["fine", 7]));
        assert_eq!(service.analyze_batch_input(&json).await.unwrap().summary.total, 1);

        let not_array = BatchInput::Json(serde_json::json!("fine"));
        assert!(service
            .analyze_batch_input(&not_array)
            .await
            .unwrap_err()
            .is_validation());
    }

    #[tokio::test]
    async fn zero_page_or_limit_is_rejected() {
        let service = service().await;
        assert!(service.get_history(0, 10).await.unwrap_err().is_validation());
        assert!(service.get_history(1, 0).await.unwrap_err().is_validation());
    }
}
