use config::{Config, ConfigError, File, FileFormat};
use job_aggregator::AggregatorConfig;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Every list and table below extends the built-in defaults.

[trust]
# Job boards accepted for every company, on top of LinkedIn, Greenhouse, Lever, ...
# trusted_job_hosts = ["jobs.ch"]
# Hosts containing any of these fragments are always rejected
# red_flag_host_fragments = ["staging"]

[locations]
# Only real U.S. state codes ("NY", "CA") mark a trailing state; "London, UK"
# then resolves to United Kingdom instead of United States
# us_state_codes_only = false

[locations.country_aliases]
# ksa = "Saudi Arabia"

[locations.cities]
# riyadh = { city = "Riyadh", country = "Saudi Arabia" }

[titles]
# Link texts that are never accepted as a job title
# degenerate_titles = ["join us"]

[aggregation]
career_intel_cap = 5
linkedin_intel_cap = 10
"#;

/// Load the aggregator configuration.
///
/// An explicit `path` must exist. Without one the per-user file is used and
/// created with commented defaults on first run.
pub fn load(path: Option<&Path>) -> Result<(AggregatorConfig, PathBuf), ConfigError> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let config_path = get_config_path();
            write_default_config(&config_path)?;
            config_path
        }
    };

    // TOML whatever the extension, e.g. `--config settings.conf`
    let builder = Config::builder()
        .add_source(File::new(&config_path.to_string_lossy(), FileFormat::Toml).required(true))
        .build()?;

    let config: AggregatorConfig = builder.try_deserialize()?;

    Ok((config, config_path))
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("job-aggregator").join("config.toml")
    } else {
        PathBuf::from("job-aggregator.toml")
    }
}

fn write_default_config(config_path: &Path) -> Result<(), ConfigError> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Message(format!("Failed to create config directory: {e}"))
        })?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| ConfigError::Message(format!("Failed to write default config: {e}")))?;

    tracing::info!("Wrote default config to {}", config_path.display());
    Ok(())
}
