//! Free-text location parsing and primary-market tagging.
//!
//! The classifier is a heuristic: anything it cannot place degrades to
//! `None` rather than an error.

use crate::config::LocationConfig;
use crate::tables::{CITIES, COUNTRY_ALIASES, US_STATE_CODES};
use crate::text::{collapse_whitespace, title_case};
use regex::Regex;
use serde::Serialize;
use shared_types::WorkModel;
use std::collections::HashMap;
use std::sync::LazyLock;

static WORK_MODE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:100%\s*|fully\s+)?(?:remote|hybrid|on[\s-]?site|in[\s-]office)\b\s*(?:[-–—:,/|]+\s*|in\s+)?",
    )
    .unwrap()
});

static WORK_MODE_PAREN_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*[(\[]\s*(?:fully\s+)?(?:remote|hybrid|on[\s-]?site|in[\s-]office)[^)\]]*[)\]]\s*$",
    )
    .unwrap()
});

static WORK_MODE_TRAILING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\s*[-–—,/|]\s*|\s+)(?:fully\s+)?(?:remote|hybrid|on[\s-]?site)(?:\s+(?:only|friendly|ok|possible))?\s*$",
    )
    .unwrap()
});

static PART_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:[,/|–—]|\s-\s)\s*").unwrap());

static HYBRID_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bhybrid\b").unwrap());
static REMOTE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bremote\b").unwrap());
static ONSITE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:on[\s-]?site|in[\s-]office)\b").unwrap());

static BUILTIN: LazyLock<LocationClassifier> =
    LazyLock::new(|| LocationClassifier::new(&LocationConfig::default()));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedLocation {
    pub city: Option<String>,
    pub country: Option<String>,
}

impl ParsedLocation {
    fn new(city: Option<String>, country: Option<String>) -> Self {
        Self { city, country }
    }
}

#[derive(Debug, Clone)]
pub struct LocationClassifier {
    country_aliases: HashMap<String, String>,
    cities: HashMap<String, (String, String)>,
    us_state_codes_only: bool,
}

impl LocationClassifier {
    /// Built-in tables extended with `config`.
    pub fn new(config: &LocationConfig) -> Self {
        let mut country_aliases: HashMap<String, String> = COUNTRY_ALIASES
            .iter()
            .map(|(alias, country)| (alias.to_string(), country.to_string()))
            .collect();
        for (alias, country) in &config.country_aliases {
            country_aliases.insert(alias.trim().to_lowercase(), country.trim().to_string());
        }

        let mut cities: HashMap<String, (String, String)> = CITIES
            .iter()
            .map(|(key, city, country)| (key.to_string(), (city.to_string(), country.to_string())))
            .collect();
        for (key, entry) in &config.cities {
            cities.insert(
                key.trim().to_lowercase(),
                (entry.city.trim().to_string(), entry.country.trim().to_string()),
            );
        }

        // Canonical names resolve to themselves
        let canonical: Vec<String> = country_aliases
            .values()
            .chain(cities.values().map(|(_, country)| country))
            .cloned()
            .collect();
        for country in canonical {
            country_aliases
                .entry(country.to_lowercase())
                .or_insert(country);
        }

        Self {
            country_aliases,
            cities,
            us_state_codes_only: config.us_state_codes_only,
        }
    }

    /// Process-wide classifier over the built-in tables.
    pub fn builtin() -> &'static LocationClassifier {
        &BUILTIN
    }

    pub fn parse(&self, text: &str) -> ParsedLocation {
        let stripped = strip_work_mode(text);
        let parts: Vec<&str> = PART_SEPARATOR
            .split(&stripped)
            .map(clean_part)
            .filter(|part| !part.is_empty())
            .collect();

        match parts.as_slice() {
            [] => ParsedLocation::default(),
            [single] => self.classify_single(single),
            _ => self.classify_parts(&parts),
        }
    }

    /// Canonical country for `text`: alias table first, title case otherwise.
    pub fn normalize_country(&self, text: &str) -> Option<String> {
        let cleaned = collapse_whitespace(clean_part(text));
        if cleaned.is_empty() {
            return None;
        }

        Some(
            self.lookup_alias(&cleaned)
                .map(str::to_string)
                .unwrap_or_else(|| title_case(&cleaned)),
        )
    }

    pub fn is_primary_market_match(
        &self,
        job_country: Option<&str>,
        preferred_country: Option<&str>,
    ) -> bool {
        let job = job_country.and_then(|c| self.normalize_country(c));
        let preferred = preferred_country.and_then(|c| self.normalize_country(c));

        match (job, preferred) {
            (Some(job), Some(preferred)) => job.to_lowercase() == preferred.to_lowercase(),
            _ => false,
        }
    }

    fn classify_single(&self, token: &str) -> ParsedLocation {
        if let Some((city, country)) = self.lookup_city(token) {
            return ParsedLocation::new(Some(city.clone()), Some(country.clone()));
        }

        if self.lookup_alias(token).is_some() || token.chars().count() > 3 {
            return ParsedLocation::new(None, self.normalize_country(token));
        }

        ParsedLocation::new(Some(token.to_string()), None)
    }

    fn classify_parts(&self, parts: &[&str]) -> ParsedLocation {
        let (last, rest) = match parts.split_last() {
            Some(split) => split,
            None => return ParsedLocation::default(),
        };
        let city = rest.join(", ");

        if self.is_state_code(last) {
            return ParsedLocation::new(Some(city), Some("United States".to_string()));
        }

        if self.lookup_alias(last).is_some() || last.chars().count() > 2 {
            return ParsedLocation::new(Some(city), self.normalize_country(last));
        }

        match self.lookup_city(parts[0]) {
            Some((city, country)) => ParsedLocation::new(Some(city.clone()), Some(country.clone())),
            None => ParsedLocation::new(Some(parts[0].to_string()), None),
        }
    }

    /// Two-letter uppercase token, optionally limited to real state codes.
    fn is_state_code(&self, token: &str) -> bool {
        let two_upper = token.len() == 2 && token.chars().all(|c| c.is_ascii_uppercase());
        two_upper && (!self.us_state_codes_only || US_STATE_CODES.contains(&token))
    }

    fn lookup_city(&self, token: &str) -> Option<&(String, String)> {
        self.cities.get(&collapse_whitespace(token).to_lowercase())
    }

    fn lookup_alias(&self, token: &str) -> Option<&str> {
        self.country_aliases
            .get(&collapse_whitespace(token).to_lowercase())
            .map(String::as_str)
    }
}

impl Default for LocationClassifier {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

pub fn parse_location(text: &str) -> ParsedLocation {
    BUILTIN.parse(text)
}

pub fn normalize_country(text: &str) -> Option<String> {
    BUILTIN.normalize_country(text)
}

pub fn is_primary_market_match(job_country: Option<&str>, preferred_country: Option<&str>) -> bool {
    BUILTIN.is_primary_market_match(job_country, preferred_country)
}

/// Remote / hybrid / on-site marker mentioned anywhere in `text`.
pub fn detect_work_model(text: &str) -> Option<WorkModel> {
    if HYBRID_MARKER.is_match(text) {
        Some(WorkModel::Hybrid)
    } else if REMOTE_MARKER.is_match(text) {
        Some(WorkModel::Remote)
    } else if ONSITE_MARKER.is_match(text) {
        Some(WorkModel::Onsite)
    } else {
        None
    }
}

fn strip_work_mode(text: &str) -> String {
    let mut current = text.trim().to_string();

    // "Hybrid / Remote - Berlin" carries more than one marker
    for _ in 0..3 {
        let next = WORK_MODE_PREFIX.replace(&current, "");
        let next = WORK_MODE_PAREN_SUFFIX.replace(&next, "");
        let next = WORK_MODE_TRAILING.replace(&next, "").trim().to_string();
        if next == current {
            break;
        }
        current = next;
    }

    current
}

fn clean_part(part: &str) -> &str {
    part.trim_matches(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']' | ','))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CityEntry;

    fn parsed(city: Option<&str>, country: Option<&str>) -> ParsedLocation {
        ParsedLocation::new(city.map(str::to_string), country.map(str::to_string))
    }

    #[test]
    fn test_city_and_country() {
        assert_eq!(
            parse_location("Tel Aviv, Israel"),
            parsed(Some("Tel Aviv"), Some("Israel"))
        );
        assert_eq!(
            parse_location("Tel Aviv - Israel"),
            parsed(Some("Tel Aviv"), Some("Israel"))
        );
    }

    #[test]
    fn test_known_city_alone() {
        assert_eq!(parse_location("Bangalore"), parsed(Some("Bangalore"), Some("India")));
        assert_eq!(parse_location("bengaluru"), parsed(Some("Bangalore"), Some("India")));
        assert_eq!(parse_location("NYC"), parsed(Some("New York"), Some("United States")));
    }

    #[test]
    fn test_us_state_code() {
        assert_eq!(
            parse_location("New York, NY"),
            parsed(Some("New York"), Some("United States"))
        );
        assert_eq!(
            parse_location("Winston-Salem, NC"),
            parsed(Some("Winston-Salem"), Some("United States"))
        );
    }

    #[test]
    fn test_any_two_letter_uppercase_suffix_is_a_us_state() {
        assert_eq!(
            parse_location("Paris, FR"),
            parsed(Some("Paris"), Some("United States"))
        );
        assert_eq!(
            parse_location("London, UK"),
            parsed(Some("London"), Some("United States"))
        );
        // Lowercase codes go through the alias table instead
        assert_eq!(parse_location("London, uk"), parsed(Some("London"), Some("United Kingdom")));
    }

    #[test]
    fn test_state_codes_only_keeps_country_codes() {
        let classifier = LocationClassifier::new(&LocationConfig {
            us_state_codes_only: true,
            ..LocationConfig::default()
        });

        assert_eq!(classifier.parse("Paris, FR"), parsed(Some("Paris"), Some("France")));
        assert_eq!(
            classifier.parse("London, UK"),
            parsed(Some("London"), Some("United Kingdom"))
        );
        assert_eq!(
            classifier.parse("Austin, TX"),
            parsed(Some("Austin"), Some("United States"))
        );
    }

    #[test]
    fn test_work_mode_markers_are_stripped() {
        assert_eq!(
            parse_location("Remote – New York, NY"),
            parsed(Some("New York"), Some("United States"))
        );
        assert_eq!(
            parse_location("Berlin, Germany (Hybrid)"),
            parsed(Some("Berlin"), Some("Germany"))
        );
        assert_eq!(parse_location("Hybrid in London"), parsed(Some("London"), Some("United Kingdom")));
        assert_eq!(
            parse_location("San Francisco / Remote"),
            parsed(Some("San Francisco"), Some("United States"))
        );
        assert_eq!(parse_location("Remote"), ParsedLocation::default());
    }

    #[test]
    fn test_single_token_country() {
        assert_eq!(parse_location("Germany"), parsed(None, Some("Germany")));
        assert_eq!(parse_location("usa"), parsed(None, Some("United States")));
        assert_eq!(parse_location("narnia"), parsed(None, Some("Narnia")));
    }

    #[test]
    fn test_short_unknown_token_is_city() {
        assert_eq!(parse_location("Xyz"), parsed(Some("Xyz"), None));
    }

    #[test]
    fn test_multi_part_with_country_alias() {
        assert_eq!(
            parse_location("Austin, TX, USA"),
            parsed(Some("Austin, TX"), Some("United States"))
        );
    }

    #[test]
    fn test_falls_back_to_first_part() {
        assert_eq!(parse_location("Berlin, B"), parsed(Some("Berlin"), Some("Germany")));
        assert_eq!(parse_location("Springfield, x"), parsed(Some("Springfield"), None));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_location(""), ParsedLocation::default());
        assert_eq!(parse_location("  ,  "), ParsedLocation::default());
    }

    #[test]
    fn test_normalize_country() {
        assert_eq!(normalize_country("U.S."), Some("United States".to_string()));
        assert_eq!(normalize_country("uk"), Some("United Kingdom".to_string()));
        assert_eq!(normalize_country("IL"), Some("Israel".to_string()));
        assert_eq!(normalize_country("france"), Some("France".to_string()));
        assert_eq!(normalize_country("new caledonia"), Some("New Caledonia".to_string()));
        assert_eq!(normalize_country("  "), None);
    }

    #[test]
    fn test_primary_market_match() {
        assert!(is_primary_market_match(Some("USA"), Some("United States")));
        assert!(is_primary_market_match(Some("israel"), Some("IL")));
        assert!(!is_primary_market_match(Some("India"), Some("Israel")));
        assert!(!is_primary_market_match(None, Some("Israel")));
        assert!(!is_primary_market_match(Some("Israel"), Some("")));
    }

    #[test]
    fn test_detect_work_model() {
        assert_eq!(detect_work_model("Remote – US"), Some(WorkModel::Remote));
        assert_eq!(detect_work_model("Hybrid/Remote, London"), Some(WorkModel::Hybrid));
        assert_eq!(detect_work_model("On-site, Haifa"), Some(WorkModel::Onsite));
        assert_eq!(detect_work_model("Tel Aviv"), None);
    }

    #[test]
    fn test_config_extends_builtin_tables() {
        let mut config = LocationConfig::default();
        config
            .country_aliases
            .insert("KSA".to_string(), "Saudi Arabia".to_string());
        config.cities.insert(
            "riyadh".to_string(),
            CityEntry {
                city: "Riyadh".to_string(),
                country: "Saudi Arabia".to_string(),
            },
        );

        let classifier = LocationClassifier::new(&config);
        assert_eq!(
            classifier.parse("Riyadh"),
            parsed(Some("Riyadh"), Some("Saudi Arabia"))
        );
        assert_eq!(classifier.normalize_country("ksa"), Some("Saudi Arabia".to_string()));
        assert_eq!(
            classifier.normalize_country("saudi arabia"),
            Some("Saudi Arabia".to_string())
        );
        // Built-ins are still there
        assert_eq!(
            classifier.parse("Tel Aviv, Israel"),
            parsed(Some("Tel Aviv"), Some("Israel"))
        );
    }
}
