use crate::config::AggregationLimits;
use crate::dedupe::url_key;
use shared_types::{AggregationStrategy, JobCandidate};
use std::collections::HashSet;

/// Strategy label plus the combined, not yet deduplicated, candidate list.
#[derive(Debug, Clone)]
pub struct StrategySelection {
    pub strategy: AggregationStrategy,
    pub combined: Vec<JobCandidate>,
}

/// Decide which lists are primary and which are hints.
///
/// Career jobs win over LinkedIn jobs, which win over intel hints. Intel
/// hints only join a primary list up to the configured cap and only when
/// their URL is new; hints without a URL count as new.
pub fn select_strategy(
    career: Vec<JobCandidate>,
    linkedin: Vec<JobCandidate>,
    intel: Vec<JobCandidate>,
    limits: &AggregationLimits,
) -> StrategySelection {
    if !career.is_empty() {
        let known = url_set(career.iter().chain(linkedin.iter()));
        let hints = novel_hints(intel, &known, limits.career_intel_cap);

        let mut combined = career;
        combined.extend(linkedin);
        combined.extend(hints);

        return StrategySelection {
            strategy: AggregationStrategy::CareerPagePrimary,
            combined,
        };
    }

    if !linkedin.is_empty() {
        let known = url_set(linkedin.iter());
        let hints = novel_hints(intel, &known, limits.linkedin_intel_cap);

        let mut combined = linkedin;
        combined.extend(hints);

        return StrategySelection {
            strategy: AggregationStrategy::LinkedinPrimary,
            combined,
        };
    }

    StrategySelection {
        strategy: AggregationStrategy::FallbackIntel,
        combined: intel,
    }
}

fn url_set<'a>(jobs: impl Iterator<Item = &'a JobCandidate>) -> HashSet<String> {
    jobs.filter_map(url_key).collect()
}

fn novel_hints(
    intel: Vec<JobCandidate>,
    known: &HashSet<String>,
    cap: usize,
) -> Vec<JobCandidate> {
    intel
        .into_iter()
        .filter(|job| url_key(job).map_or(true, |url| !known.contains(&url)))
        .take(cap)
        .collect()
}
