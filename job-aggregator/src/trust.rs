use crate::config::TrustConfig;
use crate::tables::{RED_FLAG_HOST_FRAGMENTS, TRUSTED_JOB_HOSTS};
use url::Url;

/// Decides whether a job URL may be attributed to a company.
#[derive(Debug, Clone)]
pub struct TrustPolicy {
    trusted_hosts: Vec<String>,
    red_flag_fragments: Vec<String>,
}

impl TrustPolicy {
    pub fn new(config: &TrustConfig) -> Self {
        let trusted_hosts = TRUSTED_JOB_HOSTS
            .iter()
            .map(|h| h.to_string())
            .chain(config.trusted_job_hosts.iter().filter_map(|h| normalize_domain(h)))
            .collect();

        let red_flag_fragments = RED_FLAG_HOST_FRAGMENTS
            .iter()
            .map(|f| f.to_string())
            .chain(
                config
                    .red_flag_host_fragments
                    .iter()
                    .map(|f| f.trim().to_lowercase())
                    .filter(|f| !f.is_empty()),
            )
            .collect();

        Self {
            trusted_hosts,
            red_flag_fragments,
        }
    }

    pub fn is_red_flag_host(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.red_flag_fragments
            .iter()
            .any(|fragment| host.contains(fragment.as_str()))
    }

    pub fn is_trusted_job_host(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.trusted_hosts
            .iter()
            .any(|trusted| host_matches(&host, trusted))
    }

    /// Company-owned or trusted-board host, and free of red-flag fragments.
    pub fn is_trusted_job_url(&self, url: &Url, primary_domain: Option<&str>) -> bool {
        let host = match url.host_str() {
            Some(host) => host.to_lowercase(),
            None => return false,
        };

        if self.is_red_flag_host(&host) {
            return false;
        }

        let company_owned = primary_domain.is_some_and(|domain| host_matches(&host, domain));
        company_owned || self.is_trusted_job_host(&host)
    }
}

impl Default for TrustPolicy {
    fn default() -> Self {
        Self::new(&TrustConfig::default())
    }
}

/// Bare lowercase host for a domain given as `https://www.acme.com/careers`,
/// `acme.com:443` or plain `acme.com`.
pub fn normalize_domain(input: &str) -> Option<String> {
    let mut domain = input.trim().to_lowercase();
    if let Some((_, rest)) = domain.split_once("://") {
        domain = rest.to_string();
    }

    let domain = domain
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .split(':')
        .next()
        .unwrap_or_default()
        .trim_end_matches('.');
    let domain = domain.strip_prefix("www.").unwrap_or(domain);

    (!domain.is_empty()).then(|| domain.to_string())
}

/// `host` equals `domain` or is one of its subdomains.
fn host_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}
