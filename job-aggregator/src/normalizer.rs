//! Validation boundary between loosely-shaped collector output and
//! [`JobCandidate`].
//!
//! Everything past this module can rely on a candidate having a non-empty
//! title, an absolute trusted URL, duplicate-free lists and confidences in
//! `[0, 1]`. Descriptors that cannot meet that bar are dropped, never
//! reported as errors.

use crate::config::AggregatorConfig;
use crate::date_parser::parse_timestamp;
use crate::location::{detect_work_model, LocationClassifier};
use crate::merge::clamp_confidence;
use crate::tables::DEGENERATE_TITLES;
use crate::text::{clean_text, title_case, union_preserving_order};
use crate::trust::{normalize_domain, TrustPolicy};
use serde_json::Value;
use shared_types::{CompanyContext, JobCandidate, JobSource, RawJobDescriptor};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use url::Url;

const MIN_FALLBACK_TITLE_CHARS: usize = 4;
const PAGE_EXTENSIONS: &[&str] = &[".html", ".htm", ".php", ".aspx"];

/// Why a raw descriptor did not become a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    MissingUrl,
    MalformedUrl,
    RedFlagHost,
    UntrustedHost,
    DegenerateTitle,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DropReason::MissingUrl => "missing url",
            DropReason::MalformedUrl => "malformed url",
            DropReason::RedFlagHost => "red-flag host",
            DropReason::UntrustedHost => "untrusted host",
            DropReason::DegenerateTitle => "degenerate title",
        };
        f.write_str(reason)
    }
}

/// Per-list settings for one normalization pass.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext<'a> {
    pub company: &'a CompanyContext,
    /// Used when the descriptor carries no recognisable source hint
    pub default_source: JobSource,
    /// Provenance tag added to every candidate of this list
    pub evidence_tag: &'a str,
    /// Fallback for descriptors without their own discovery time
    pub discovered_at: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub jobs: Vec<JobCandidate>,
    pub dropped: usize,
}

#[derive(Debug, Clone)]
pub struct SourceNormalizer {
    trust: TrustPolicy,
    locations: LocationClassifier,
    degenerate_titles: HashSet<String>,
}

impl SourceNormalizer {
    pub fn new(config: &AggregatorConfig) -> Self {
        let degenerate_titles = DEGENERATE_TITLES
            .iter()
            .map(|t| t.to_string())
            .chain(
                config
                    .titles
                    .degenerate_titles
                    .iter()
                    .map(|t| t.trim().to_lowercase()),
            )
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            trust: TrustPolicy::new(&config.trust),
            locations: LocationClassifier::new(&config.locations),
            degenerate_titles,
        }
    }

    pub fn locations(&self) -> &LocationClassifier {
        &self.locations
    }

    /// Candidate for `raw`, or `None` when the descriptor is dropped.
    pub fn normalize(
        &self,
        raw: RawJobDescriptor,
        ctx: &NormalizeContext<'_>,
    ) -> Option<JobCandidate> {
        let title_hint = raw.title.clone();
        let url_hint = raw.url.clone();

        match self.try_normalize(raw, ctx) {
            Ok(job) => Some(job),
            Err(reason) => {
                tracing::debug!(
                    "Dropping {} descriptor (title: {:?}, url: {:?}): {}",
                    ctx.evidence_tag,
                    title_hint,
                    url_hint,
                    reason
                );
                None
            }
        }
    }

    pub fn normalize_batch(
        &self,
        raws: Vec<RawJobDescriptor>,
        ctx: &NormalizeContext<'_>,
    ) -> NormalizedBatch {
        let mut batch = NormalizedBatch::default();

        for raw in raws {
            match self.normalize(raw, ctx) {
                Some(job) => batch.jobs.push(job),
                None => batch.dropped += 1,
            }
        }

        batch
    }

    pub fn try_normalize(
        &self,
        raw: RawJobDescriptor,
        ctx: &NormalizeContext<'_>,
    ) -> Result<JobCandidate, DropReason> {
        let primary_domain = normalize_domain(&ctx.company.primary_domain);

        let url_text = clean_text(raw.url.as_deref()).ok_or(DropReason::MissingUrl)?;
        let url = resolve_url(&url_text, primary_domain.as_deref()).ok_or(DropReason::MalformedUrl)?;
        let host = url.host_str().ok_or(DropReason::MalformedUrl)?;

        if self.trust.is_red_flag_host(host) {
            return Err(DropReason::RedFlagHost);
        }
        if !self.trust.is_trusted_job_url(&url, primary_domain.as_deref()) {
            return Err(DropReason::UntrustedHost);
        }

        let title = clean_text(raw.title.as_deref())
            .filter(|t| !self.is_degenerate_title(t))
            .or_else(|| fallback_title(&url).filter(|t| !self.is_degenerate_title(t)))
            .ok_or(DropReason::DegenerateTitle)?;

        let source = raw
            .source
            .as_deref()
            .and_then(JobSource::from_hint)
            .unwrap_or(ctx.default_source);

        let mut job = JobCandidate::new(title, Some(url.to_string()), source);

        job.location = clean_text(raw.location.as_deref());
        if let Some(location) = job.location.as_deref() {
            let parsed = self.locations.parse(location);
            job.city = parsed.city;
            job.country = parsed.country;
        }
        job.is_primary_market = match (&job.country, &ctx.company.preferred_country) {
            (Some(country), Some(preferred)) if !preferred.trim().is_empty() => Some(
                self.locations
                    .is_primary_market_match(Some(country), Some(preferred)),
            ),
            _ => None,
        };

        job.description = clean_text(raw.description.as_deref());
        job.industry = clean_text(raw.industry.as_deref());
        job.seniority_level = clean_text(raw.seniority_level.as_deref());
        job.employment_type = clean_text(raw.employment_type.as_deref());
        job.work_model = clean_text(raw.work_model.as_deref()).or_else(|| {
            job.location
                .as_deref()
                .and_then(detect_work_model)
                .map(|model| model.as_str().to_string())
        });
        job.salary = clean_text(raw.salary.as_deref());
        job.salary_period = clean_text(raw.salary_period.as_deref());
        job.currency = clean_text(raw.currency.as_deref());
        job.external_id = clean_text(raw.external_id.as_deref());

        job.core_duties = string_list(raw.core_duties.as_ref());
        job.must_haves = string_list(raw.must_haves.as_ref());
        job.benefits = string_list(raw.benefits.as_ref());

        let tag = clean_text(Some(ctx.evidence_tag));
        job.evidence_sources = union_preserving_order(
            tag.into_iter().collect(),
            string_list(raw.evidence_sources.as_ref()),
        );

        job.overall_confidence = raw
            .overall_confidence
            .as_ref()
            .and_then(confidence_value)
            .and_then(clamp_confidence);
        job.field_confidence = field_confidence(raw.field_confidence.as_ref());

        job.posted_at = raw.posted_at.as_ref().and_then(parse_timestamp);
        job.discovered_at = raw
            .discovered_at
            .as_ref()
            .and_then(parse_timestamp)
            .or(ctx.discovered_at);

        Ok(job)
    }

    fn is_degenerate_title(&self, title: &str) -> bool {
        let key = title
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        key.is_empty() || self.degenerate_titles.contains(&key)
    }
}

impl Default for SourceNormalizer {
    fn default() -> Self {
        Self::new(&AggregatorConfig::default())
    }
}

/// Absolute http(s) URL for collector input such as `//host/x`, `/jobs/1`
/// or `acme.com/jobs/1`. Fragments are removed.
fn resolve_url(text: &str, primary_domain: Option<&str>) -> Option<Url> {
    let mut url = match Url::parse(text) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let absolute = if let Some(rest) = text.strip_prefix("//") {
                format!("https://{}", rest)
            } else if text.starts_with('/') {
                format!("https://{}{}", primary_domain?, text)
            } else {
                format!("https://{}", text)
            };
            Url::parse(&absolute).ok()?
        }
        Err(_) => return None,
    };

    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return None;
    }

    url.set_fragment(None);
    Some(url)
}

/// Readable title from the last path segment, e.g.
/// `/careers/senior-backend-engineer-4411.html` -> `Senior Backend Engineer`.
fn fallback_title(url: &Url) -> Option<String> {
    let segment = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    let segment = segment.replace("%20", " ");

    let lower = segment.to_ascii_lowercase();
    let stem = PAGE_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(*ext))
        .map_or(segment.as_str(), |ext| &segment[..segment.len() - ext.len()]);

    let words: String = stem
        .chars()
        .filter(|c| !c.is_ascii_digit())
        .map(|c| if matches!(c, '-' | '_' | '+' | '.') { ' ' } else { c })
        .collect();
    let title = title_case(&words);

    (title.chars().count() >= MIN_FALLBACK_TITLE_CHARS).then_some(title)
}

/// Strings only, whitespace-collapsed, blanks and duplicates removed.
fn string_list(value: Option<&Value>) -> Vec<String> {
    let items = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter_map(|s| clean_text(Some(s)))
            .collect(),
        Some(Value::String(s)) => clean_text(Some(s)).into_iter().collect(),
        _ => Vec::new(),
    };

    union_preserving_order(items, Vec::new())
}

fn confidence_value(value: &Value) -> Option<f32> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    Some(number as f32)
}

/// Numeric entries inside `[0, 1]`; everything else is dropped.
fn field_confidence(value: Option<&Value>) -> BTreeMap<String, f32> {
    let Some(Value::Object(map)) = value else {
        return BTreeMap::new();
    };

    map.iter()
        .filter_map(|(field, value)| {
            let confidence = value.as_f64()? as f32;
            (0.0..=1.0)
                .contains(&confidence)
                .then(|| (field.clone(), confidence))
        })
        .collect()
}
