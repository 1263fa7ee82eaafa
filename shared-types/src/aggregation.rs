use crate::job::JobCandidate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Which source lists dominated the combined candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AggregationStrategy {
    CareerPagePrimary,
    LinkedinPrimary,
    FallbackIntel,
}

impl AggregationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationStrategy::CareerPagePrimary => "career_page_primary",
            AggregationStrategy::LinkedinPrimary => "linkedin_primary",
            AggregationStrategy::FallbackIntel => "fallback_intel",
        }
    }

    /// Only hint sources were available, so the result deserves less trust.
    pub fn is_degraded(&self) -> bool {
        matches!(self, AggregationStrategy::FallbackIntel)
    }
}

impl fmt::Display for AggregationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-stage candidate counts for one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SourceCounts {
    /// Normalized career-page / ATS candidates
    pub career: usize,
    /// Normalized LinkedIn candidates
    pub linkedin: usize,
    /// Normalized intel-agent hints
    pub intel: usize,
    /// Raw descriptors rejected by the normalizer, plus unreadable input records
    pub dropped: usize,
    /// Candidates in the combined list before deduplication
    pub combined: usize,
    /// Candidates left after deduplication
    pub deduped: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregationReport {
    pub strategy: AggregationStrategy,
    pub counts: SourceCounts,
    /// Set when the result rests on hint sources only and is non-empty.
    pub degraded_confidence: bool,
    pub jobs_found: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyJobsResponse {
    pub jobs: Vec<JobCandidate>,
    pub report: AggregationReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_serialization() {
        let json = serde_json::to_string(&AggregationStrategy::CareerPagePrimary).unwrap();
        assert_eq!(json, "\"career_page_primary\"");

        let parsed: AggregationStrategy = serde_json::from_str("\"fallback_intel\"").unwrap();
        assert_eq!(parsed, AggregationStrategy::FallbackIntel);
        assert_eq!(parsed.to_string(), "fallback_intel");
    }

    #[test]
    fn test_only_fallback_is_degraded() {
        assert!(AggregationStrategy::FallbackIntel.is_degraded());
        assert!(!AggregationStrategy::LinkedinPrimary.is_degraded());
        assert!(!AggregationStrategy::CareerPagePrimary.is_degraded());
    }
}
