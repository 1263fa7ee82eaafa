use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use ts_rs::TS;

/// Where a job candidate was collected from.
///
/// The label set is closed. Unknown hints coming from collectors map to
/// [`JobSource::Other`] through [`JobSource::from_hint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum JobSource {
    CareersSite,
    AtsApi,
    Linkedin,
    LinkedinPost,
    IntelAgent,
    #[default]
    Other,
}

impl JobSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobSource::CareersSite => "careers-site",
            JobSource::AtsApi => "ats-api",
            JobSource::Linkedin => "linkedin",
            JobSource::LinkedinPost => "linkedin-post",
            JobSource::IntelAgent => "intel-agent",
            JobSource::Other => "other",
        }
    }

    /// Lenient parse of a collector-supplied source hint.
    ///
    /// Case-insensitive, `_` and spaces are treated like `-`. Returns `None`
    /// for blank or unrecognised hints so the caller can apply its own default.
    pub fn from_hint(hint: &str) -> Option<Self> {
        let key = hint
            .trim()
            .to_ascii_lowercase()
            .replace(['_', ' '], "-");

        match key.as_str() {
            "careers-site" | "careers" | "career-page" | "career-site" | "careers-page" => {
                Some(JobSource::CareersSite)
            }
            "ats-api" | "ats" => Some(JobSource::AtsApi),
            "linkedin" | "linkedin-job" | "linkedin-jobs" => Some(JobSource::Linkedin),
            "linkedin-post" | "linkedin-posts" => Some(JobSource::LinkedinPost),
            "intel-agent" | "intel" | "llm" => Some(JobSource::IntelAgent),
            "other" => Some(JobSource::Other),
            _ => None,
        }
    }
}

impl fmt::Display for JobSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote / hybrid / on-site marker inferred from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum WorkModel {
    Remote,
    Hybrid,
    Onsite,
}

impl WorkModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkModel::Remote => "remote",
            WorkModel::Hybrid => "hybrid",
            WorkModel::Onsite => "onsite",
        }
    }
}

/// Canonical, validated representation of one discovered job posting.
///
/// Only the source normalizer creates these and only the merge engine
/// changes them. List fields never hold duplicates and every confidence
/// value lies in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct JobCandidate {
    pub title: String,
    pub url: Option<String>,
    pub source: JobSource,

    // Location
    pub location: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_primary_market: Option<bool>,

    // Posting details
    pub description: Option<String>,
    pub industry: Option<String>,
    pub seniority_level: Option<String>,
    pub employment_type: Option<String>,
    pub work_model: Option<String>,
    pub salary: Option<String>,
    pub salary_period: Option<String>,
    pub currency: Option<String>,
    pub external_id: Option<String>,

    #[serde(default)]
    pub core_duties: Vec<String>,
    #[serde(default)]
    pub must_haves: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,

    // Provenance
    #[serde(default)]
    pub evidence_sources: Vec<String>,
    pub overall_confidence: Option<f32>,
    #[serde(default)]
    pub field_confidence: BTreeMap<String, f32>,

    pub posted_at: Option<i64>,     // Unix timestamp
    pub discovered_at: Option<i64>, // Unix timestamp
}

impl JobCandidate {
    pub fn new(title: impl Into<String>, url: Option<String>, source: JobSource) -> Self {
        Self {
            title: title.into(),
            url,
            source,
            ..Self::default()
        }
    }
}

/// Company the jobs are being collected for.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyContext {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(alias = "primaryDomain", alias = "domain")]
    pub primary_domain: String,
    /// Headquarters country, used to tag primary-market postings.
    #[serde(default, alias = "preferredCountry", alias = "hq_country")]
    pub preferred_country: Option<String>,
}

/// Loosely-shaped job record as handed over by an upstream collector.
///
/// Every field is optional and tolerant of the wrong JSON type: strings
/// accept numbers and booleans, list and confidence fields are kept as raw
/// JSON until the normalizer validates them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawJobDescriptor {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", alias = "link", alias = "applyUrl")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub source: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub industry: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", alias = "seniorityLevel")]
    pub seniority_level: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", alias = "employmentType")]
    pub employment_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", alias = "workModel")]
    pub work_model: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", alias = "salaryPeriod")]
    pub salary_period: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", alias = "externalId")]
    pub external_id: Option<String>,

    #[serde(default, alias = "coreDuties")]
    pub core_duties: Option<serde_json::Value>,
    #[serde(default, alias = "mustHaves")]
    pub must_haves: Option<serde_json::Value>,
    #[serde(default)]
    pub benefits: Option<serde_json::Value>,
    #[serde(default, alias = "evidenceSources")]
    pub evidence_sources: Option<serde_json::Value>,

    #[serde(default, alias = "overallConfidence", alias = "confidence")]
    pub overall_confidence: Option<serde_json::Value>,
    #[serde(default, alias = "fieldConfidence")]
    pub field_confidence: Option<serde_json::Value>,

    #[serde(default, alias = "postedAt", alias = "datePosted")]
    pub posted_at: Option<serde_json::Value>,
    #[serde(default, alias = "discoveredAt")]
    pub discovered_at: Option<serde_json::Value>,
}

impl RawJobDescriptor {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
