use crate::config::{AggregationLimits, AggregatorConfig};
use crate::dedupe::dedupe_jobs;
use crate::normalizer::{NormalizeContext, SourceNormalizer};
use crate::strategy::select_strategy;
use serde::{Deserialize, Serialize};
use shared_types::{
    AggregationReport, AggregationStrategy, CompanyContext, CompanyJobsResponse, JobSource,
    RawJobDescriptor, SourceCounts,
};

pub const CAREER_EVIDENCE_TAG: &str = "career-page";
pub const LINKEDIN_EVIDENCE_TAG: &str = "linkedin";
pub const INTEL_EVIDENCE_TAG: &str = "intel-agent";

/// Raw collector output for one company, one list per source category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceBatches {
    /// Career page crawler and ATS adapters
    pub career: Vec<RawJobDescriptor>,
    pub linkedin: Vec<RawJobDescriptor>,
    /// Low-trust hints from the inference agent
    pub intel: Vec<RawJobDescriptor>,
}

/// Normalize, combine and deduplicate one company's collector output.
///
/// Immutable once built, so one instance can serve any number of companies
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct JobAggregator {
    normalizer: SourceNormalizer,
    limits: AggregationLimits,
}

impl JobAggregator {
    pub fn new(config: &AggregatorConfig) -> Self {
        Self {
            normalizer: SourceNormalizer::new(config),
            limits: config.aggregation,
        }
    }

    pub fn normalizer(&self) -> &SourceNormalizer {
        &self.normalizer
    }

    pub fn aggregate(
        &self,
        company: &CompanyContext,
        sources: SourceBatches,
    ) -> CompanyJobsResponse {
        self.aggregate_at(company, sources, chrono::Utc::now().timestamp())
    }

    /// Same as [`aggregate`](Self::aggregate) with an explicit run timestamp,
    /// used as `discovered_at` for descriptors that carry none.
    pub fn aggregate_at(
        &self,
        company: &CompanyContext,
        sources: SourceBatches,
        now: i64,
    ) -> CompanyJobsResponse {
        let context = |default_source: JobSource, evidence_tag: &'static str| NormalizeContext {
            company,
            default_source,
            evidence_tag,
            discovered_at: Some(now),
        };

        let career = self.normalizer.normalize_batch(
            sources.career,
            &context(JobSource::CareersSite, CAREER_EVIDENCE_TAG),
        );
        let linkedin = self.normalizer.normalize_batch(
            sources.linkedin,
            &context(JobSource::Linkedin, LINKEDIN_EVIDENCE_TAG),
        );
        let intel = self.normalizer.normalize_batch(
            sources.intel,
            &context(JobSource::IntelAgent, INTEL_EVIDENCE_TAG),
        );

        let mut counts = SourceCounts {
            career: career.jobs.len(),
            linkedin: linkedin.jobs.len(),
            intel: intel.jobs.len(),
            dropped: career.dropped + linkedin.dropped + intel.dropped,
            ..SourceCounts::default()
        };

        let selection = select_strategy(career.jobs, linkedin.jobs, intel.jobs, &self.limits);
        counts.combined = selection.combined.len();

        let jobs = dedupe_jobs(selection.combined);
        counts.deduped = jobs.len();

        let report = build_report(selection.strategy, counts, !jobs.is_empty());
        log_report(company, &report);

        CompanyJobsResponse { jobs, report }
    }
}

fn build_report(
    strategy: AggregationStrategy,
    counts: SourceCounts,
    jobs_found: bool,
) -> AggregationReport {
    AggregationReport {
        strategy,
        counts,
        degraded_confidence: strategy.is_degraded() && jobs_found,
        jobs_found,
    }
}

fn log_report(company: &CompanyContext, report: &AggregationReport) {
    let counts = &report.counts;
    tracing::info!(
        "Aggregated jobs for {}: strategy={}, career={}, linkedin={}, intel={}, dropped={}, combined={}, deduped={}",
        company.primary_domain,
        report.strategy,
        counts.career,
        counts.linkedin,
        counts.intel,
        counts.dropped,
        counts.combined,
        counts.deduped
    );

    if report.degraded_confidence {
        tracing::warn!(
            "Only intel-agent hints found for {}; {} jobs have degraded confidence",
            company.primary_domain,
            counts.deduped
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company() -> CompanyContext {
        CompanyContext {
            name: None,
            primary_domain: "acme.com".to_string(),
            preferred_country: Some("Israel".to_string()),
        }
    }

    #[test]
    fn test_counts_and_report() {
        let sources = SourceBatches {
            career: vec![
                RawJobDescriptor::new("Backend Engineer", "https://acme.com/jobs/1"),
                RawJobDescriptor::new("Backend Engineer", "https://ACME.com/jobs/1"),
                RawJobDescriptor::new("Apply", "https://example.com/jobs/2"),
            ],
            linkedin: vec![RawJobDescriptor::new(
                "Backend Engineer",
                "https://www.linkedin.com/jobs/view/99",
            )],
            intel: vec![RawJobDescriptor::new("Data Engineer", "https://acme.com/jobs/3")],
        };

        let response = JobAggregator::default().aggregate_at(&company(), sources, 1_700_000_000);
        let report = &response.report;

        assert_eq!(report.strategy, AggregationStrategy::CareerPagePrimary);
        assert_eq!(
            report.counts,
            SourceCounts {
                career: 2,
                linkedin: 1,
                intel: 1,
                dropped: 1,
                combined: 4,
                deduped: 3,
            }
        );
        assert!(report.jobs_found);
        assert!(!report.degraded_confidence);
        assert!(response
            .jobs
            .iter()
            .all(|job| job.discovered_at == Some(1_700_000_000)));
    }

    #[test]
    fn test_evidence_tags_per_list() {
        let sources = SourceBatches {
            linkedin: vec![RawJobDescriptor::new("Engineer", "https://www.linkedin.com/jobs/view/1")],
            intel: vec![RawJobDescriptor::new("Engineer", "https://acme.com/jobs/1")],
            ..SourceBatches::default()
        };

        let response = JobAggregator::default().aggregate_at(&company(), sources, 0);
        assert_eq!(response.report.strategy, AggregationStrategy::LinkedinPrimary);
        assert_eq!(response.jobs[0].evidence_sources, vec![LINKEDIN_EVIDENCE_TAG]);
        assert_eq!(response.jobs[0].source, JobSource::Linkedin);
        assert_eq!(response.jobs[1].evidence_sources, vec![INTEL_EVIDENCE_TAG]);
        assert_eq!(response.jobs[1].source, JobSource::IntelAgent);
    }

    #[test]
    fn test_no_jobs_is_not_degraded() {
        let response =
            JobAggregator::default().aggregate_at(&company(), SourceBatches::default(), 0);

        assert_eq!(response.report.strategy, AggregationStrategy::FallbackIntel);
        assert!(!response.report.jobs_found);
        assert!(!response.report.degraded_confidence);
        assert!(response.jobs.is_empty());
    }

    #[test]
    fn test_configured_caps_are_used() {
        let mut config = AggregatorConfig::default();
        config.aggregation.linkedin_intel_cap = 1;

        let sources = SourceBatches {
            linkedin: vec![RawJobDescriptor::new("Engineer", "https://www.linkedin.com/jobs/view/1")],
            intel: vec![
                RawJobDescriptor::new("Data Engineer", "https://acme.com/jobs/1"),
                RawJobDescriptor::new("Data Analyst", "https://acme.com/jobs/2"),
            ],
            ..SourceBatches::default()
        };

        let response = JobAggregator::new(&config).aggregate_at(&company(), sources, 0);
        assert_eq!(response.report.counts.intel, 2);
        assert_eq!(response.report.counts.combined, 2);
    }

    #[test]
    fn test_aggregator_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<JobAggregator>();
    }

    #[test]
    fn test_source_batches_deserialize_with_missing_lists() {
        let sources: SourceBatches =
            serde_json::from_str(r#"{"intel": [{"title": "Engineer", "url": "https://acme.com/j"}]}"#)
                .unwrap();
        assert!(sources.career.is_empty());
        assert_eq!(sources.intel.len(), 1);
    }
}
