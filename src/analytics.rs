//! Product analytics wiring.
//!
//! The site does not talk to the analytics backend itself; it only renders
//! the browser snippet. [`Analytics`] is built once at startup from
//! configuration and handed to the renderer through application state.

use serde::Serialize;

pub const DEFAULT_ANALYTICS_HOST: &str = "https://app.posthog.com";

/// Analytics settings as read from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyticsConfig {
    /// Project API key (`POSTHOG_KEY`)
    pub key: Option<String>,
    /// Ingestion host (`POSTHOG_HOST`)
    pub host: Option<String>,
}

/// An initialized analytics client, serialized into page templates.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Analytics {
    key: String,
    api_host: String,
    capture_pageview: bool,
}

impl Analytics {
    /// Returns `None` when no project key is configured.
    pub fn init(config: &AnalyticsConfig) -> Option<Self> {
        let key = config.key.as_deref().map(str::trim).filter(|k| !k.is_empty())?;
        let api_host = config
            .host
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_ANALYTICS_HOST)
            .trim_end_matches('/')
            .to_string();

        Some(Self {
            key: key.to_string(),
            api_host,
            capture_pageview: true,
        })
    }

    pub fn api_host(&self) -> &str {
        &self.api_host
    }
}
