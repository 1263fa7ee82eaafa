pub mod aggregation;
pub mod job;

pub use aggregation::{AggregationReport, AggregationStrategy, CompanyJobsResponse, SourceCounts};
pub use job::{CompanyContext, JobCandidate, JobSource, RawJobDescriptor, WorkModel};

/// Errors raised while loading configuration or collector output.
///
/// The aggregation core itself never fails; bad records are dropped instead.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
