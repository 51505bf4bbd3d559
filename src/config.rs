use crate::errors::ConfigError;
use reqwest::Url;
use std::{env, time::Duration};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MESSAGE_TTL_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub api_base_url: Url,
    pub port: u16,
    pub message_ttl: Duration,
    pub request_timeout: Option<Duration>,
}

impl BoardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_url = env::var("ACTIVITIES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_base_url = parse_base_url(&raw_url)?;

        let port = parse_env("PORT").unwrap_or(DEFAULT_PORT);
        let message_ttl =
            Duration::from_secs(parse_env("MESSAGE_TTL_SECS").unwrap_or(DEFAULT_MESSAGE_TTL_SECS));
        let request_timeout = parse_env::<u64>("REQUEST_TIMEOUT_SECS")
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Ok(Self {
            api_base_url,
            port,
            message_ttl,
            request_timeout,
        })
    }
}

pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|err| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason: err.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            value: raw.to_string(),
            reason: "not a base url".to_string(),
        });
    }
    Ok(url)
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse::<T>().ok())
}
