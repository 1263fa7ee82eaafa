use job_aggregator::dedupe::url_key;
use job_aggregator::{dedupe_jobs, merge_candidate_jobs};
use proptest::prelude::*;
use shared_types::{JobCandidate, JobSource};
use std::collections::HashSet;

const TAGS: &[&str] = &["json-ld", "career-page", "career-page-dom", "linkedin", "intel-agent"];

fn job_strategy() -> impl Strategy<Value = JobCandidate> {
    (
        prop::sample::select(vec!["Backend Engineer", "backend engineer ", "Data Analyst"]),
        prop::option::of(prop::sample::select(vec![
            "https://acme.com/jobs/1",
            "HTTPS://ACME.COM/JOBS/1",
            " https://acme.com/jobs/2",
            "https://jobs.lever.co/acme/3",
        ])),
        prop::option::of(prop::sample::select(vec!["Berlin", "berlin", "Tel Aviv, Israel"])),
        prop::option::of("[a-z ]{0,30}"),
        prop::sample::subsequence(TAGS.to_vec(), 0..=TAGS.len()),
        prop::sample::select(vec![
            JobSource::CareersSite,
            JobSource::Linkedin,
            JobSource::LinkedinPost,
            JobSource::IntelAgent,
            JobSource::Other,
        ]),
        prop::option::of(0i64..2_000_000_000),
        prop::option::of(0.0f32..=1.0),
    )
        .prop_map(
            |(title, url, location, description, tags, source, posted_at, confidence)| {
                let mut job = JobCandidate::new(title, url.map(str::to_string), source);
                job.location = location.map(str::to_string);
                job.description = description;
                job.evidence_sources = tags.into_iter().map(str::to_string).collect();
                job.posted_at = posted_at;
                job.overall_confidence = confidence;
                job
            },
        )
}

proptest! {
    #[test]
    fn dedupe_is_idempotent(jobs in prop::collection::vec(job_strategy(), 0..12)) {
        let once = dedupe_jobs(jobs);
        let twice = dedupe_jobs(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merged_evidence_is_the_union(a in job_strategy(), b in job_strategy()) {
        let expected: HashSet<String> = a
            .evidence_sources
            .iter()
            .chain(b.evidence_sources.iter())
            .cloned()
            .collect();

        let merged = merge_candidate_jobs(a, b);
        let actual: HashSet<String> = merged.evidence_sources.iter().cloned().collect();

        prop_assert_eq!(actual.len(), merged.evidence_sources.len());
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn one_candidate_per_url(jobs in prop::collection::vec(job_strategy(), 0..12)) {
        let deduped = dedupe_jobs(jobs);
        let urls: Vec<String> = deduped.iter().filter_map(url_key).collect();
        let unique: HashSet<&String> = urls.iter().collect();
        prop_assert_eq!(unique.len(), urls.len());
    }

    #[test]
    fn merged_confidence_stays_in_range(a in job_strategy(), b in job_strategy()) {
        let merged = merge_candidate_jobs(a, b);
        if let Some(confidence) = merged.overall_confidence {
            prop_assert!((0.0..=1.0).contains(&confidence));
        }
    }
}
