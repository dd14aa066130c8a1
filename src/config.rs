use std::{env, num::NonZeroU64, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_POLL_SECS: u64 = 30;
pub const DEFAULT_NOTICE_SECS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub port: u16,
    pub api_url: String,
    pub poll_interval: Duration,
    pub notice_ttl: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            notice_ttl: Duration::from_secs(DEFAULT_NOTICE_SECS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset or unparsable values keep
    /// their defaults. A poll interval of zero counts as unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            api_url: lookup("CHECKLIST_API_URL")
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_url),
            poll_interval: Duration::from_secs(
                parse_or(
                    "CHECKLIST_POLL_SECS",
                    lookup("CHECKLIST_POLL_SECS"),
                    NonZeroU64::new(DEFAULT_POLL_SECS).unwrap_or(NonZeroU64::MIN),
                )
                .get(),
            ),
            notice_ttl: Duration::from_secs(parse_or(
                "CHECKLIST_NOTICE_SECS",
                lookup("CHECKLIST_NOTICE_SECS"),
                DEFAULT_NOTICE_SECS,
            )),
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> T {
    let Some(value) = value else {
        return default;
    };
    match value.trim().parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(key, value = %value, "ignoring invalid setting");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ClientConfig::from_lookup(lookup(&[])), ClientConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("PORT", "9100"),
            ("CHECKLIST_API_URL", "http://backend:8000"),
            ("CHECKLIST_POLL_SECS", "5"),
        ]));
        assert_eq!(config.port, 9100);
        assert_eq!(config.api_url, "http://backend:8000");
        assert_eq!(config.poll_interval, Duration::from_secs(5));
        assert_eq!(config.notice_ttl, Duration::from_secs(DEFAULT_NOTICE_SECS));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[("PORT", "eighty"), ("CHECKLIST_API_URL", " ")]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn zero_poll_interval_falls_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CHECKLIST_POLL_SECS", "0"),
            ("CHECKLIST_NOTICE_SECS", "0"),
        ]));
        assert_eq!(config.poll_interval, Duration::from_secs(DEFAULT_POLL_SECS));
        assert_eq!(config.notice_ttl, Duration::ZERO);
    }
}
