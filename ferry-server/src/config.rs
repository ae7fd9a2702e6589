//! Server configuration from environment variables.

use std::{
    env, fmt::Display, net::SocketAddr, num::NonZeroUsize, path::PathBuf, str::FromStr,
    time::Duration,
};

use thiserror::Error;
use tracing::{info, warn};

use crate::planner::{DEFAULT_LAYOVER_MINS, DEFAULT_MAX_SUGGESTIONS, RouteConfig};
use crate::store::{CacheConfig, HttpStoreConfig};

#[derive(Debug, Error)]
#[error("invalid {key} value {value:?}: {message}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub message: String,
}

/// Where segments come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentsConfig {
    /// JSON file on disk, reloaded periodically.
    File(PathBuf),
    /// Segment table behind an HTTP API.
    Remote(HttpStoreConfig),
}

/// Everything the server binary needs.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub segments: SegmentsConfig,
    pub cache: CacheConfig,
    pub routes: RouteConfig,
    /// Zero disables reloading.
    pub reload_interval: Duration,
    pub static_dir: String,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let segments = match lookup("FERRY_SEGMENTS_URL").filter(|url| !url.is_empty()) {
            Some(url) => {
                let mut remote = HttpStoreConfig::new(url)
                    .with_timeout(try_load(&lookup, "FERRY_HTTP_TIMEOUT_SECS", "30")?);
                match lookup("FERRY_SEGMENTS_TOKEN") {
                    Some(token) if !token.is_empty() => remote = remote.with_token(token),
                    _ => warn!("FERRY_SEGMENTS_TOKEN not set, segment API calls are unauthenticated"),
                }
                SegmentsConfig::Remote(remote)
            }
            None => SegmentsConfig::File(try_load(&lookup, "FERRY_SEGMENTS_FILE", "data/segments.json")?),
        };

        let max_suggestions: NonZeroUsize = try_load(
            &lookup,
            "FERRY_MAX_SUGGESTIONS",
            &DEFAULT_MAX_SUGGESTIONS.to_string(),
        )?;

        Ok(Self {
            bind_addr: try_load(&lookup, "FERRY_BIND_ADDR", "127.0.0.1:3000")?,
            segments,
            cache: CacheConfig {
                ttl: Duration::from_secs(try_load(&lookup, "FERRY_CACHE_TTL_SECS", "60")?),
                max_capacity: try_load(&lookup, "FERRY_CACHE_CAPACITY", "1000")?,
            },
            routes: RouteConfig::new(
                try_load(&lookup, "FERRY_LAYOVER_MINS", &DEFAULT_LAYOVER_MINS.to_string())?,
                max_suggestions.get(),
            ),
            reload_interval: Duration::from_secs(try_load(&lookup, "FERRY_RELOAD_SECS", "300")?),
            static_dir: try_load(&lookup, "FERRY_STATIC_DIR", "static")?,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| ConfigError {
        key,
        message: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(
            config.segments,
            SegmentsConfig::File(PathBuf::from("data/segments.json"))
        );
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
        assert_eq!(config.cache.max_capacity, 1000);
        assert_eq!(config.routes.layover_mins, 120);
        assert_eq!(config.routes.max_suggestions, 5);
        assert_eq!(config.reload_interval, Duration::from_secs(300));
        assert_eq!(config.static_dir, "static");
    }

    #[test]
    fn remote_source() {
        let config = load(&[
            ("FERRY_SEGMENTS_URL", "https://cms.example.mv/api"),
            ("FERRY_SEGMENTS_TOKEN", "secret"),
            ("FERRY_HTTP_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        let expected = HttpStoreConfig::new("https://cms.example.mv/api")
            .with_token("secret")
            .with_timeout(5);
        assert_eq!(config.segments, SegmentsConfig::Remote(expected));
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("FERRY_LAYOVER_MINS", "90"),
            ("FERRY_MAX_SUGGESTIONS", "3"),
            ("FERRY_RELOAD_SECS", "0"),
        ])
        .unwrap();

        assert_eq!(config.routes.layover_mins, 90);
        assert_eq!(config.routes.max_suggestions, 3);
        assert!(config.reload_interval.is_zero());
    }

    #[test]
    fn zero_suggestions_rejected() {
        let err = load(&[("FERRY_MAX_SUGGESTIONS", "0")]).unwrap_err();

        assert_eq!(err.key, "FERRY_MAX_SUGGESTIONS");
        assert_eq!(err.value, "0");
    }

    #[test]
    fn invalid_value_names_the_key() {
        let err = load(&[("FERRY_LAYOVER_MINS", "two hours")]).unwrap_err();

        assert_eq!(err.key, "FERRY_LAYOVER_MINS");
        assert_eq!(err.value, "two hours");
        assert!(err.to_string().starts_with("invalid FERRY_LAYOVER_MINS value"));
    }
}
