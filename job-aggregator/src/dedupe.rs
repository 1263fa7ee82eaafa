use crate::merge::merge_candidate_jobs;
use shared_types::JobCandidate;
use std::collections::HashMap;

/// What makes two candidates the same posting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey {
    Url(String),
    TitleLocation { title: String, location: String },
}

/// Lowercased trimmed URL, or `None` when the candidate has no usable URL.
pub fn url_key(job: &JobCandidate) -> Option<String> {
    job.url
        .as_deref()
        .map(|url| url.trim().to_lowercase())
        .filter(|url| !url.is_empty())
}

pub fn identity_key(job: &JobCandidate) -> IdentityKey {
    match url_key(job) {
        Some(url) => IdentityKey::Url(url),
        None => IdentityKey::TitleLocation {
            title: job.title.trim().to_lowercase(),
            location: job
                .location
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
        },
    }
}

/// Fold every group of candidates sharing an identity key into one.
///
/// Output order is the first-seen order of the keys. Within a group the
/// candidates are merged in input order, the running value always passed as
/// `existing`.
pub fn dedupe_jobs(jobs: Vec<JobCandidate>) -> Vec<JobCandidate> {
    let mut index: HashMap<IdentityKey, usize> = HashMap::with_capacity(jobs.len());
    let mut merged: Vec<JobCandidate> = Vec::with_capacity(jobs.len());

    for job in jobs {
        let key = identity_key(&job);
        match index.get(&key) {
            Some(&position) => {
                let existing = std::mem::take(&mut merged[position]);
                merged[position] = merge_candidate_jobs(existing, job);
            }
            None => {
                index.insert(key, merged.len());
                merged.push(job);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::JobSource;

    fn job(title: &str, url: Option<&str>, location: Option<&str>) -> JobCandidate {
        let mut job = JobCandidate::new(title, url.map(str::to_string), JobSource::Other);
        job.location = location.map(str::to_string);
        job
    }

    #[test]
    fn test_identity_key_prefers_url() {
        let a = job("Engineer", Some(" HTTPS://Acme.com/Jobs/1 "), Some("Berlin"));
        assert_eq!(identity_key(&a), IdentityKey::Url("https://acme.com/jobs/1".to_string()));

        let b = job("  Engineer ", None, Some(" BERLIN"));
        assert_eq!(
            identity_key(&b),
            IdentityKey::TitleLocation {
                title: "engineer".to_string(),
                location: "berlin".to_string(),
            }
        );

        let c = job("Engineer", Some("   "), None);
        assert_eq!(url_key(&c), None);
        assert!(matches!(identity_key(&c), IdentityKey::TitleLocation { .. }));
    }

    #[test]
    fn test_same_url_collapses_to_one() {
        let jobs = vec![
            job("Engineer", Some("https://x.com/j1"), None),
            job("Designer", Some("https://x.com/j2"), None),
            job("Engineer II", Some("HTTPS://X.COM/J1"), None),
            job("Engineer", Some("https://x.com/j1 "), None),
        ];

        let deduped = dedupe_jobs(jobs);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "Engineer");
        assert_eq!(deduped[1].title, "Designer");
    }

    #[test]
    fn test_title_location_identity_without_url() {
        let jobs = vec![
            job("Engineer", None, Some("Berlin")),
            job("engineer", None, Some("berlin ")),
            job("Engineer", None, Some("Munich")),
        ];

        let deduped = dedupe_jobs(jobs);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].location.as_deref(), Some("Berlin"));
        assert_eq!(deduped[1].location.as_deref(), Some("Munich"));
    }

    #[test]
    fn test_group_members_are_merged() {
        let mut first = job("Engineer", Some("https://x.com/j1"), None);
        first.evidence_sources = vec!["career-page".to_string()];
        let mut second = job("Engineer", Some("https://x.com/j1"), None);
        second.evidence_sources = vec!["linkedin".to_string()];
        second.source = JobSource::Linkedin;

        let deduped = dedupe_jobs(vec![first, second]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].source, JobSource::Linkedin);
        // The linkedin copy scores higher and becomes the base
        assert_eq!(deduped[0].evidence_sources, vec!["linkedin", "career-page"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_jobs(Vec::new()).is_empty());
    }
}
