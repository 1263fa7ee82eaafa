use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Static configuration for the aggregation core.
///
/// Every list or table here is added on top of the built-in tables in
/// [`crate::tables`]; a config can extend the defaults but never shrink them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregatorConfig {
    pub trust: TrustConfig,
    pub locations: LocationConfig,
    pub titles: TitleConfig,
    pub aggregation: AggregationLimits,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TrustConfig {
    /// Extra job-board hosts accepted for every company
    pub trusted_job_hosts: Vec<String>,
    /// Extra host fragments that cause a URL to be rejected
    pub red_flag_host_fragments: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationConfig {
    /// Alias -> canonical country, e.g. `"ksa" = "Saudi Arabia"`
    pub country_aliases: HashMap<String, String>,
    /// City key -> display name and country
    pub cities: HashMap<String, CityEntry>,
    /// Only real U.S. state / territory codes count as a trailing state.
    /// Off by default: any two-letter uppercase last part means United States.
    pub us_state_codes_only: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CityEntry {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TitleConfig {
    pub degenerate_titles: Vec<String>,
}

/// Caps on how many hint-source jobs may join a primary source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AggregationLimits {
    pub career_intel_cap: usize,
    pub linkedin_intel_cap: usize,
}

impl Default for AggregationLimits {
    fn default() -> Self {
        Self {
            career_intel_cap: 5,
            linkedin_intel_cap: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_default_limits() {
        let config: AggregatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.aggregation, AggregationLimits::default());
        assert!(config.trust.trusted_job_hosts.is_empty());
        assert!(!config.locations.us_state_codes_only);
    }

    #[test]
    fn test_partial_config() {
        let config: AggregatorConfig = serde_json::from_str(
            r#"{
                "aggregation": {"linkedin_intel_cap": 3},
                "locations": {"cities": {"riyadh": {"city": "Riyadh", "country": "Saudi Arabia"}}}
            }"#,
        )
        .unwrap();

        assert_eq!(config.aggregation.career_intel_cap, 5);
        assert_eq!(config.aggregation.linkedin_intel_cap, 3);
        assert_eq!(config.locations.cities["riyadh"].country, "Saudi Arabia");
    }
}
