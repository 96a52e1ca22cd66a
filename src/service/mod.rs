pub mod batch_input;
pub mod controller;
pub mod latency;

pub use batch_input::BatchInput;
pub use controller::{split_batch_lines, AnalysisService};
pub use latency::LatencyProfile;
