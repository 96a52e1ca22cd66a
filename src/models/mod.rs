pub mod analysis;
pub mod responses;
pub mod stats;

pub use analysis::{AnalysisResult, Sentiment, SentimentFilter};
pub use responses::{
    BatchOutcome, BatchSummary, ClearAck, ExportMetadata, ExportSnapshot, HistoryPage,
    Pagination, SearchOutcome, SearchSummary,
};
pub use stats::{DailyTrend, DashboardStats, MarkerCount, SentimentDistribution, TrendReport};
