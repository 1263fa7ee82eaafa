//! Completeness scoring and field-by-field reconciliation of two candidates
//! that describe the same posting.

use crate::priority::pick_preferred_source;
use crate::text::{has_text, union_preserving_order};
use shared_types::{JobCandidate, JobSource};
use std::collections::BTreeMap;

/// How much of the posting a candidate fills in. Measures richness, not
/// correctness.
pub fn score_candidate_job(job: &JobCandidate) -> u32 {
    let mut score = 0;

    if has_text(&job.description) {
        score += 5;
    }
    if has_text(&job.location) {
        score += 2;
    }
    if !job.core_duties.is_empty() {
        score += 2;
    }

    let single_points = [
        !job.must_haves.is_empty(),
        !job.benefits.is_empty(),
        has_text(&job.industry),
        has_text(&job.seniority_level),
        has_text(&job.employment_type),
        has_text(&job.work_model),
        !job.evidence_sources.is_empty(),
        job.source != JobSource::Other,
    ];
    score += single_points.iter().filter(|present| **present).count() as u32;

    score
}

/// Merge two candidates for the same identity key. Never fails.
///
/// The higher-scoring candidate becomes the base; on an exact tie `existing`
/// stays the base. The other candidate only donates what the base lacks.
pub fn merge_candidate_jobs(existing: JobCandidate, incoming: JobCandidate) -> JobCandidate {
    let (mut primary, secondary) =
        if score_candidate_job(&incoming) > score_candidate_job(&existing) {
            (incoming, existing)
        } else {
            (existing, incoming)
        };

    // City and country always describe the same place, so they move as a pair
    let location_from_secondary = !has_text(&primary.location) && has_text(&secondary.location);
    let primary_unplaced = !has_text(&primary.city) && !has_text(&primary.country);
    let secondary_placed = has_text(&secondary.city) || has_text(&secondary.country);
    if (location_from_secondary || primary_unplaced) && secondary_placed {
        primary.city = secondary.city;
        primary.country = secondary.country;
    }
    fill_if_empty(&mut primary.location, secondary.location);
    fill_if_empty(&mut primary.industry, secondary.industry);
    fill_if_empty(&mut primary.seniority_level, secondary.seniority_level);
    fill_if_empty(&mut primary.employment_type, secondary.employment_type);
    fill_if_empty(&mut primary.work_model, secondary.work_model);
    fill_if_empty(&mut primary.salary, secondary.salary);
    fill_if_empty(&mut primary.salary_period, secondary.salary_period);
    fill_if_empty(&mut primary.currency, secondary.currency);
    fill_if_empty(&mut primary.external_id, secondary.external_id);

    if primary.is_primary_market.is_none() {
        primary.is_primary_market = secondary.is_primary_market;
    }

    primary.description = longer_text(primary.description.take(), secondary.description);
    primary.source = pick_preferred_source(primary.source, secondary.source);

    primary.evidence_sources = union_preserving_order(
        std::mem::take(&mut primary.evidence_sources),
        secondary.evidence_sources,
    );
    primary.core_duties =
        union_preserving_order(std::mem::take(&mut primary.core_duties), secondary.core_duties);
    primary.must_haves =
        union_preserving_order(std::mem::take(&mut primary.must_haves), secondary.must_haves);
    primary.benefits =
        union_preserving_order(std::mem::take(&mut primary.benefits), secondary.benefits);

    primary.posted_at = earliest(primary.posted_at, secondary.posted_at);
    primary.discovered_at = earliest(primary.discovered_at, secondary.discovered_at);

    let mut field_confidence =
        clamp_field_confidence(std::mem::take(&mut primary.field_confidence));
    for (field, confidence) in clamp_field_confidence(secondary.field_confidence) {
        let entry = field_confidence.entry(field).or_insert(confidence);
        *entry = entry.max(confidence);
    }
    primary.field_confidence = field_confidence;

    primary.overall_confidence = match (
        primary.overall_confidence.and_then(clamp_confidence),
        secondary.overall_confidence.and_then(clamp_confidence),
    ) {
        (Some(a), Some(b)) => Some(a.max(b)),
        (a, b) => a.or(b),
    };

    primary
}

/// Confidence clamped into `[0, 1]`; NaN is treated as absent.
pub fn clamp_confidence(value: f32) -> Option<f32> {
    (!value.is_nan()).then(|| value.clamp(0.0, 1.0))
}

fn clamp_field_confidence(map: BTreeMap<String, f32>) -> BTreeMap<String, f32> {
    map.into_iter()
        .filter_map(|(field, confidence)| clamp_confidence(confidence).map(|c| (field, c)))
        .collect()
}

fn fill_if_empty(target: &mut Option<String>, donor: Option<String>) {
    if !has_text(target) && has_text(&donor) {
        *target = donor;
    }
}

/// Longer of the two texts; ties keep `primary`.
fn longer_text(primary: Option<String>, secondary: Option<String>) -> Option<String> {
    let length = |text: &Option<String>| text.as_deref().map_or(0, |t| t.trim().chars().count());

    if length(&secondary) > length(&primary) {
        secondary
    } else {
        primary
    }
}

fn earliest(a: Option<i64>, b: Option<i64>) -> Option<i64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
