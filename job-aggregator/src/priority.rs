use shared_types::JobSource;

/// Tie-break ranks used when two sources describe the same job.
/// ATS feeds are first-party data and rank with the careers site.
pub const SOURCE_PRIORITY: &[(JobSource, u8)] = &[
    (JobSource::CareersSite, 3),
    (JobSource::AtsApi, 3),
    (JobSource::Linkedin, 2),
    (JobSource::LinkedinPost, 1),
    (JobSource::IntelAgent, 0),
    (JobSource::Other, 0),
];

pub fn source_rank(source: JobSource) -> u8 {
    SOURCE_PRIORITY
        .iter()
        .find(|(s, _)| *s == source)
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

/// `incoming` only replaces `current` when it ranks strictly higher.
pub fn pick_preferred_source(current: JobSource, incoming: JobSource) -> JobSource {
    if source_rank(incoming) > source_rank(current) {
        incoming
    } else {
        current
    }
}
