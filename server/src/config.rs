//! Host configuration parsed from environment variables.

use client::config::{ApiConfig, DEFAULT_API_BASE_URL, parse_flag};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid QUIZ_API_WITH_CREDENTIALS: {0} (expected true/false)")]
    InvalidFlag(String),
    #[error("invalid QUIZ_API_BASE_URL: {0} (expected an http:// or https:// origin)")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Handed to the client at render time; the host never calls the API.
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `QUIZ_API_BASE_URL`: default `http://localhost:5000`
    /// - `QUIZ_API_WITH_CREDENTIALS`: default `true`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let base_url = parse_base_url(std::env::var("QUIZ_API_BASE_URL").ok().as_deref())?;
        let with_credentials = parse_credentials(std::env::var("QUIZ_API_WITH_CREDENTIALS").ok().as_deref())?;
        Ok(Self { port, api: ApiConfig::new(&base_url, with_credentials) })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_API_BASE_URL.to_owned()),
        Some(value) if value.starts_with("http://") || value.starts_with("https://") => Ok(value.to_owned()),
        Some(value) => Err(ConfigError::InvalidBaseUrl(value.to_owned())),
    }
}

fn parse_credentials(raw: Option<&str>) -> Result<bool, ConfigError> {
    match raw {
        None => Ok(true),
        Some(value) => parse_flag(value).ok_or_else(|| ConfigError::InvalidFlag(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
