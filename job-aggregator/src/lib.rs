//! Job Aggregator Crate
//!
//! Turns the raw output of several independent job collectors (career page
//! crawler, ATS adapters, LinkedIn feed, inference agent) into one clean,
//! deduplicated list of job candidates for a company.
//!
//! # Architecture
//!
//! - **Types**: `JobCandidate`, `RawJobDescriptor` and the report types live
//!   in the `shared-types` crate
//! - **Normalization**: [`SourceNormalizer`] validates raw descriptors and
//!   rejects untrusted URLs
//! - **Aggregation**: [`select_strategy`] picks the primary sources,
//!   [`dedupe_jobs`] folds duplicates through [`merge_candidate_jobs`]
//! - **Pipeline**: [`JobAggregator`] runs all of the above for one company
//!
//! Everything here is synchronous and free of I/O. Bad input is dropped or
//! clamped, never returned as an error.
//!
//! # Example
//!
//! ```rust,ignore
//! use job_aggregator::{JobAggregator, SourceBatches};
//! use shared_types::CompanyContext;
//!
//! let aggregator = JobAggregator::default();
//! let response = aggregator.aggregate(&company, SourceBatches { career, linkedin, intel });
//! if response.report.degraded_confidence {
//!     // only intel-agent hints were found
//! }
//! ```

pub mod config;
pub mod date_parser;
pub mod dedupe;
pub mod location;
pub mod merge;
pub mod normalizer;
pub mod pipeline;
pub mod priority;
pub mod strategy;
pub mod tables;
pub mod text;
pub mod trust;

// Re-export commonly used types
pub use config::{AggregationLimits, AggregatorConfig};
pub use dedupe::{dedupe_jobs, identity_key, IdentityKey};
pub use location::{
    detect_work_model, is_primary_market_match, normalize_country, parse_location,
    LocationClassifier, ParsedLocation,
};
pub use merge::{merge_candidate_jobs, score_candidate_job};
pub use normalizer::{DropReason, NormalizeContext, NormalizedBatch, SourceNormalizer};
pub use pipeline::{JobAggregator, SourceBatches};
pub use priority::{pick_preferred_source, source_rank};
pub use strategy::{select_strategy, StrategySelection};
pub use trust::TrustPolicy;
