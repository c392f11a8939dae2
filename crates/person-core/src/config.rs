//! Centralized configuration for the person mirror.
//!
//! Constants live on unit structs; [`MirrorConfig`] carries the values a
//! single mirror instance is built with.

use crate::{MirrorError, Result};
use std::time::Duration;
use url::Url;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/";
    pub const PERSONS_PATH: &'static str = "persons";
    pub const CONTENT_TYPE: &'static str = "application/json";
    pub const USER_AGENT: &'static str = "person-mirror";
}

/// Environment variables read by [`MirrorConfig::from_env`].
pub struct EnvConfig;

impl EnvConfig {
    pub const BASE_URL: &'static str = "PERSON_MIRROR_BASE_URL";
    pub const TIMEOUT_SECS: &'static str = "PERSON_MIRROR_TIMEOUT_SECS";
    pub const SORT_POLICY: &'static str = "PERSON_MIRROR_SORT_POLICY";
}

/// How `list_all` turns the caller's sorting options into query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortQueryPolicy {
    /// Always send `sortField=ID&sortingOrder=ASCENDING`, whatever the caller asked for.
    #[default]
    Fixed,
    /// Forward the caller's sorting options.
    FromOptions,
}

impl SortQueryPolicy {
    /// Parse from the environment string form (`fixed` / `from-options`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fixed" => Some(SortQueryPolicy::Fixed),
            "from-options" | "from_options" | "options" => Some(SortQueryPolicy::FromOptions),
            _ => None,
        }
    }
}

/// Settings for one mirror instance.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Base endpoint; relative paths such as `persons` are joined onto it.
    pub base_url: Url,
    /// Per-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// Query parameter policy for `list_all`.
    pub sort_policy: SortQueryPolicy,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(NetworkConfig::DEFAULT_BASE_URL)
                .expect("default base URL is valid"),
            timeout: None,
            sort_policy: SortQueryPolicy::Fixed,
        }
    }
}

impl MirrorConfig {
    /// Create a config targeting the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Build a config from `PERSON_MIRROR_*` environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var(EnvConfig::BASE_URL) {
            config.base_url = normalize_base_url(&base_url)?;
        }

        if let Ok(raw) = std::env::var(EnvConfig::TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| MirrorError::Config {
                message: format!(
                    "{} must be a whole number of seconds: {}",
                    EnvConfig::TIMEOUT_SECS,
                    e
                ),
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Ok(raw) = std::env::var(EnvConfig::SORT_POLICY) {
            config.sort_policy = SortQueryPolicy::parse(&raw).ok_or_else(|| MirrorError::Config {
                message: format!("Unknown {} value: {}", EnvConfig::SORT_POLICY, raw),
            })?;
        }

        Ok(config)
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the sort query policy.
    pub fn with_sort_policy(mut self, policy: SortQueryPolicy) -> Self {
        self.sort_policy = policy;
        self
    }
}

/// Parse a base URL and make sure it ends with `/` so relative joins append
/// rather than replace the last path segment.
fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };
    let url = Url::parse(&with_slash)?;
    if url.cannot_be_a_base() {
        return Err(MirrorError::Config {
            message: format!("Base URL cannot carry paths: {}", raw),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Process environment is global; tests touching it run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ALL_VARS: [&str; 3] = [
        EnvConfig::BASE_URL,
        EnvConfig::TIMEOUT_SECS,
        EnvConfig::SORT_POLICY,
    ];

    /// Run `f` with exactly the given `PERSON_MIRROR_*` variables set.
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for name in ALL_VARS {
            std::env::remove_var(name);
        }
        for (name, value) in vars {
            std::env::set_var(name, value);
        }
        let result = f();
        for name in ALL_VARS {
            std::env::remove_var(name);
        }
        result
    }

    #[test]
    fn test_from_env_defaults_when_unset() {
        let config = with_env(&[], MirrorConfig::from_env).unwrap();
        assert_eq!(config.base_url.as_str(), NetworkConfig::DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
        assert_eq!(config.sort_policy, SortQueryPolicy::Fixed);
    }

    #[test]
    fn test_from_env_reads_overrides() {
        let config = with_env(
            &[
                (EnvConfig::BASE_URL, "http://10.0.0.5:9000/api"),
                (EnvConfig::TIMEOUT_SECS, " 7 "),
                (EnvConfig::SORT_POLICY, "from-options"),
            ],
            MirrorConfig::from_env,
        )
        .unwrap();
        assert_eq!(config.base_url.as_str(), "http://10.0.0.5:9000/api/");
        assert_eq!(config.timeout, Some(Duration::from_secs(7)));
        assert_eq!(config.sort_policy, SortQueryPolicy::FromOptions);
    }

    #[test]
    fn test_from_env_rejects_non_numeric_timeout() {
        let result = with_env(&[(EnvConfig::TIMEOUT_SECS, "abc")], MirrorConfig::from_env);
        match result {
            Err(MirrorError::Config { message }) => {
                assert!(message.contains(EnvConfig::TIMEOUT_SECS))
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_env_rejects_unknown_sort_policy() {
        let result = with_env(&[(EnvConfig::SORT_POLICY, "random")], MirrorConfig::from_env);
        match result {
            Err(MirrorError::Config { message }) => assert!(message.contains("random")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_env_rejects_bad_base_url() {
        let result = with_env(&[(EnvConfig::BASE_URL, "not a url")], MirrorConfig::from_env);
        assert!(matches!(result, Err(MirrorError::Config { .. })));
    }

    #[test]
    fn test_default_config() {
        let config = MirrorConfig::default();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert!(config.timeout.is_none());
        assert_eq!(config.sort_policy, SortQueryPolicy::Fixed);
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = MirrorConfig::new("http://127.0.0.1:9000/api").unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:9000/api/");
        assert_eq!(
            config.base_url.join("persons").unwrap().as_str(),
            "http://127.0.0.1:9000/api/persons"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            MirrorConfig::new("not a url"),
            Err(MirrorError::Config { .. })
        ));
        assert!(MirrorConfig::new("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_sort_policy_parse() {
        assert_eq!(SortQueryPolicy::parse("fixed"), Some(SortQueryPolicy::Fixed));
        assert_eq!(
            SortQueryPolicy::parse(" From-Options "),
            Some(SortQueryPolicy::FromOptions)
        );
        assert_eq!(SortQueryPolicy::parse("random"), None);
    }

    #[test]
    fn test_builder_setters() {
        let config = MirrorConfig::default()
            .with_timeout(Duration::from_secs(3))
            .with_sort_policy(SortQueryPolicy::FromOptions);
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.sort_policy, SortQueryPolicy::FromOptions);
    }
}
