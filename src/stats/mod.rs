pub mod aggregate;
pub mod trends;

pub use aggregate::compute;
pub use trends::{daily_trends, distribution, marker_frequency, trend_report};
