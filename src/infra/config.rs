//! Centralized configuration (environment variables + defaults).

use reqwest::Url;
use std::str::FromStr;
use thiserror::Error;

pub const API_URL_VAR: &str = "RESTAURANT_API_URL";
pub const ROUTE_STYLE_VAR: &str = "RESTAURANT_ROUTE_STYLE";

/// Local development backend.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Collection path appended to the base URL.
pub const COLLECTION_PATH: &str = "restaurants";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("unknown route style '{0}' (expected 'legacy' or 'path')")]
    UnknownRouteStyle(String),
}

/// How the update endpoint addresses a record.
///
/// `Legacy` matches the existing backend: `PUT /restaurants?id={id}` while
/// delete uses `DELETE /restaurants/{id}`. `Path` uses the path form for both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RouteStyle {
    #[default]
    Legacy,
    Path,
}

impl FromStr for RouteStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legacy" | "query" => Ok(RouteStyle::Legacy),
            "path" => Ok(RouteStyle::Path),
            _ => Err(ConfigError::UnknownRouteStyle(s.to_string())),
        }
    }
}

/// Base URL of the restaurants backend (defaults to the local dev server).
pub fn api_url() -> String {
    std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Route style (defaults to `legacy`).
pub fn route_style() -> Result<RouteStyle, ConfigError> {
    match std::env::var(ROUTE_STYLE_VAR) {
        Ok(v) => v.parse(),
        Err(_) => Ok(RouteStyle::default()),
    }
}

/// Everything the record store client needs, resolved once and injected at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: Url,
    route_style: RouteStyle,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query and fragment are not allowed".to_string()));
        }
        Ok(Self {
            base_url: url,
            route_style: RouteStyle::default(),
        })
    }

    pub fn with_route_style(mut self, route_style: RouteStyle) -> Self {
        self.route_style = route_style;
        self
    }

    /// Reads `RESTAURANT_API_URL` and `RESTAURANT_ROUTE_STYLE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(&api_url())?.with_route_style(route_style()?))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn route_style(&self) -> RouteStyle {
        self.route_style
    }
}
