//! GitHub releases API source.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;

use crate::http::HttpClient;

use super::model::RawRelease;
use super::{ReleaseSource, RepoId};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Reads releases from the GitHub REST API.
pub struct GitHubReleases {
    http_client: HttpClient,
    api_url: String,
}

impl GitHubReleases {
    pub fn new(http_client: HttpClient, api_url: &str) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    fn releases_url(&self, repo: &RepoId) -> String {
        format!("{}/repos/{}/{}/releases", self.api_url, repo.owner, repo.repo)
    }
}

#[async_trait]
impl ReleaseSource for GitHubReleases {
    #[tracing::instrument(skip(self))]
    async fn list_releases(&self, repo: &RepoId, per_page: u32) -> Result<Vec<RawRelease>> {
        let url = self.releases_url(repo);
        debug!("Fetching up to {} releases from {}...", per_page, url);

        self.http_client
            .get_json_with_query(&url, &[("per_page", &per_page.to_string())])
            .await
            .with_context(|| format!("Failed to list releases for {}", repo))
    }

    #[tracing::instrument(skip(self))]
    async fn latest_release(&self, repo: &RepoId) -> Result<RawRelease> {
        let url = format!("{}/latest", self.releases_url(repo));
        debug!("Fetching latest release from {}...", url);

        self.http_client
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to get latest release for {}", repo))
    }
}
