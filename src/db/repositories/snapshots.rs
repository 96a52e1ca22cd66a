//! The two persisted records: the history list and the last stats snapshot.
//! Both are stored as JSON text under fixed keys.

use anyhow::Context;

use crate::db::Database;
use crate::error::EngineResult;
use crate::models::{AnalysisResult, DashboardStats};

pub const HISTORY_KEY: &str = "sentiment_analysis_history";
pub const DASHBOARD_STATS_KEY: &str = "dashboard_stats";

impl Database {
    /// Newest-first history; empty when nothing has been stored yet.
    pub async fn load_history(&self) -> EngineResult<Vec<AnalysisResult>> {
        match self.get_value(HISTORY_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw).context("failed to decode history")?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn load_stats(&self) -> EngineResult<Option<DashboardStats>> {
        match self.get_value(DASHBOARD_STATS_KEY).await? {
            Some(raw) => Ok(Some(
                serde_json::from_str(&raw).context("failed to decode dashboard stats")?,
            )),
            None => Ok(None),
        }
    }

    pub async fn save_stats(&self, stats: &DashboardStats) -> EngineResult<()> {
        let encoded = serde_json::to_string(stats).context("failed to encode dashboard stats")?;
        self.set_value(DASHBOARD_STATS_KEY, encoded).await?;
        Ok(())
    }

    /// Writes history and stats together so a reader never sees one without
    /// the other.
    pub async fn save_snapshot(
        &self,
        history: &[AnalysisResult],
        stats: &DashboardStats,
    ) -> EngineResult<()> {
        let history = serde_json::to_string(history).context("failed to encode history")?;
        let stats = serde_json::to_string(stats).context("failed to encode dashboard stats")?;
        self.set_values(vec![
            (HISTORY_KEY.to_string(), history),
            (DASHBOARD_STATS_KEY.to_string(), stats),
        ])
        .await?;
        Ok(())
    }

    pub async fn clear_snapshot(&self) -> EngineResult<()> {
        self.remove_values(&[HISTORY_KEY, DASHBOARD_STATS_KEY])
            .await?;
        Ok(())
    }
}
