use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};

use crate::{
    analytics::AnalyticsConfig,
    http::HttpClient,
    releases::{DEFAULT_API_URL, DEFAULT_RELEASE_LIMIT, GitHubReleases, ReleaseFeed, RepoId},
    runtime::Runtime,
};

/// Repository whose releases feed the changelog.
pub const DEFAULT_REPO: &str = "trandactri/nutree-web";

/// How long a fetched release list is served before refetching.
pub const DEFAULT_REVALIDATE_SECS: u64 = 3600;

const USER_AGENT: &str = concat!("nutree-web/", env!("NUTREE_WEB_VERSION"));

/// Settings taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteOptions {
    pub repo: String,
    pub api_url: Option<String>,
    pub release_limit: u32,
    pub revalidate_secs: u64,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            api_url: None,
            release_limit: DEFAULT_RELEASE_LIMIT,
            revalidate_secs: DEFAULT_REVALIDATE_SECS,
        }
    }
}

/// Fully resolved site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub repo: RepoId,
    pub api_url: String,
    pub release_limit: u32,
    pub revalidate: Duration,
    pub github_token: Option<String>,
    pub analytics: AnalyticsConfig,
}

impl SiteConfig {
    pub fn new<R: Runtime>(runtime: &R, options: SiteOptions) -> Result<Self> {
        let repo = options
            .repo
            .parse::<RepoId>()
            .with_context(|| format!("Invalid --repo value '{}'", options.repo))?;

        Ok(Self {
            repo,
            api_url: options
                .api_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            release_limit: options.release_limit,
            revalidate: Duration::from_secs(options.revalidate_secs),
            github_token: non_empty_env(runtime, "GITHUB_TOKEN"),
            analytics: AnalyticsConfig {
                key: non_empty_env(runtime, "POSTHOG_KEY"),
                host: non_empty_env(runtime, "POSTHOG_HOST"),
            },
        })
    }

    /// Builds the HTTP client, authenticating when a token is configured.
    pub fn build_http_client(&self) -> Result<Client> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.github_token {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))
                .context("GITHUB_TOKEN contains characters not allowed in a header")?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication: {}", mask_token(token));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(client)
    }

    pub fn release_feed(&self) -> Result<ReleaseFeed> {
        let http_client = HttpClient::new(self.build_http_client()?);
        let source = GitHubReleases::new(http_client, &self.api_url);
        Ok(ReleaseFeed::new(Arc::new(source), self.repo.clone()))
    }
}

fn non_empty_env<R: Runtime>(runtime: &R, key: &str) -> Option<String> {
    runtime
        .env_var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 12 {
        return "*********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}*********{}", head, tail)
}
