//! Release feed for the changelog.
//!
//! `github` talks to the API, `parse` turns payloads into display records,
//! and [`ReleaseFeed`] ties them together behind a degrade-to-empty contract:
//! callers always get a list (or `None`), never an error.

mod date;
mod github;
mod model;
mod parse;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error, warn};

pub use date::format_date;
pub use github::{DEFAULT_API_URL, GitHubReleases};
pub use model::{DisplayRelease, RawAsset, RawRelease};
pub use parse::{PACKAGE_EXTENSIONS, select_download_asset, to_display_release, to_display_releases};

/// Number of releases shown on the changelog.
pub const DEFAULT_RELEASE_LIMIT: u32 = 20;

/// Largest page GitHub serves in one request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for RepoId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            anyhow::bail!("Invalid repository format. Expected 'owner/repo'.")
        } else {
            Ok(RepoId {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// Where raw releases come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// One page of releases, newest first.
    async fn list_releases(&self, repo: &RepoId, per_page: u32) -> Result<Vec<RawRelease>>;

    /// The most recent published, non-prerelease release.
    async fn latest_release(&self, repo: &RepoId) -> Result<RawRelease>;
}

/// The changelog's view of a repository's releases.
#[derive(Clone)]
pub struct ReleaseFeed {
    source: Arc<dyn ReleaseSource>,
    repo: RepoId,
}

impl ReleaseFeed {
    pub fn new(source: Arc<dyn ReleaseSource>, repo: RepoId) -> Self {
        Self { source, repo }
    }

    /// Up to `limit` non-draft releases in API order, the first marked latest.
    ///
    /// Returns an empty list when the upstream call fails.
    #[tracing::instrument(skip(self), fields(repo = %self.repo))]
    pub async fn fetch_releases(&self, limit: u32) -> Vec<DisplayRelease> {
        let per_page = limit.clamp(1, MAX_PAGE_SIZE);

        match self.source.list_releases(&self.repo, per_page).await {
            Ok(raw) => {
                let releases = to_display_releases(raw);
                debug!("{} releases ready for {}", releases.len(), self.repo);
                releases
            }
            Err(e) => {
                error!("Failed to fetch releases for {}: {:#}", self.repo, e);
                Vec::new()
            }
        }
    }

    /// The latest release, or `None` when there is none or the call fails.
    #[tracing::instrument(skip(self), fields(repo = %self.repo))]
    pub async fn fetch_latest_release(&self) -> Option<DisplayRelease> {
        let raw = match self.source.latest_release(&self.repo).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to fetch latest release for {}: {:#}", self.repo, e);
                return None;
            }
        };

        if raw.draft {
            warn!("Latest release {} of {} is a draft", raw.tag_name, self.repo);
            return None;
        }

        match to_display_release(raw, true) {
            Ok(release) => Some(release),
            Err(e) => {
                error!("Failed to read latest release for {}: {:#}", self.repo, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpClient;
    use mockall::predicate::eq;

    fn repo() -> RepoId {
        "trandactri/nutree-web".parse().unwrap()
    }

    fn raw(id: u64, tag: &str, draft: bool) -> RawRelease {
        RawRelease {
            id,
            tag_name: tag.to_string(),
            name: None,
            body: None,
            published_at: if draft {
                None
            } else {
                Some("2026-02-01T00:00:00Z".to_string())
            },
            html_url: format!("https://github.com/trandactri/nutree-web/releases/tag/{}", tag),
            prerelease: false,
            draft,
            assets: vec![],
        }
    }

    #[test]
    fn test_repo_id_parse() {
        let repo: RepoId = "owner/repo".parse().unwrap();
        assert_eq!(repo.owner, "owner");
        assert_eq!(repo.repo, "repo");
    }

    #[test]
    fn test_repo_id_display() {
        let repo = RepoId {
            owner: "owner".into(),
            repo: "repo".into(),
        };
        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn test_repo_id_invalid() {
        assert!("invalid".parse::<RepoId>().is_err());
        assert!("".parse::<RepoId>().is_err());
        assert!("/repo".parse::<RepoId>().is_err());
        assert!("owner/".parse::<RepoId>().is_err());
        assert!("a/b/c".parse::<RepoId>().is_err());
    }

    #[tokio::test]
    async fn test_fetch_releases_filters_drafts_and_keeps_order() {
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .with(eq(repo()), eq(20))
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    raw(3, "v1.2.0", false),
                    raw(2, "v1.1.0", true),
                    raw(1, "v1.0.0", false),
                ])
            });

        let feed = ReleaseFeed::new(Arc::new(source), repo());
        let releases = feed.fetch_releases(DEFAULT_RELEASE_LIMIT).await;

        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].version, "v1.2.0");
        assert_eq!(releases[1].version, "v1.0.0");
        assert!(releases[0].is_latest);
        assert!(!releases[1].is_latest);
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_releases_degrades_to_empty() {
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .returning(|_, _| Err(anyhow::anyhow!("connection reset by peer")));

        let feed = ReleaseFeed::new(Arc::new(source), repo());
        assert!(feed.fetch_releases(20).await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_releases_clamps_limit() {
        let mut source = MockReleaseSource::new();
        source
            .expect_list_releases()
            .with(eq(repo()), eq(1))
            .times(1)
            .returning(|_, _| Ok(vec![]));
        source
            .expect_list_releases()
            .with(eq(repo()), eq(MAX_PAGE_SIZE))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let feed = ReleaseFeed::new(Arc::new(source), repo());
        assert!(feed.fetch_releases(0).await.is_empty());
        assert!(feed.fetch_releases(500).await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_latest_release_forces_latest() {
        let mut source = MockReleaseSource::new();
        source
            .expect_latest_release()
            .times(1)
            .returning(|_| Ok(raw(7, "v2.0.0", false)));

        let feed = ReleaseFeed::new(Arc::new(source), repo());
        let latest = feed.fetch_latest_release().await.unwrap();

        assert!(latest.is_latest);
        assert_eq!(latest.version, "v2.0.0");
        assert_eq!(latest.name, "v2.0.0");
    }

    #[test_log::test(tokio::test)]
    async fn test_fetch_latest_release_degrades_to_none() {
        let mut source = MockReleaseSource::new();
        source
            .expect_latest_release()
            .returning(|_| Err(anyhow::anyhow!("dns lookup failed")));

        let feed = ReleaseFeed::new(Arc::new(source), repo());
        assert!(feed.fetch_latest_release().await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_latest_release_ignores_draft() {
        let mut source = MockReleaseSource::new();
        source
            .expect_latest_release()
            .returning(|_| Ok(raw(8, "v3.0.0", true)));

        let feed = ReleaseFeed::new(Arc::new(source), repo());
        assert!(feed.fetch_latest_release().await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_releases_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/repos/trandactri/nutree-web/releases?per_page=20")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": 3, "tag_name": "v1.2.0", "name": "", "body": "Newest",
                     "published_at": "2026-02-01T00:00:00Z",
                     "html_url": "https://github.com/trandactri/nutree-web/releases/tag/v1.2.0",
                     "prerelease": false, "draft": false,
                     "assets": [
                        {"name": "readme.txt", "browser_download_url": "https://dl.example.com/readme.txt"},
                        {"name": "app-release.apk", "browser_download_url": "https://dl.example.com/app-release.apk"}
                     ]},
                    {"id": 2, "tag_name": "v1.3.0-draft", "name": null, "body": null,
                     "published_at": null,
                     "html_url": "https://github.com/trandactri/nutree-web/releases/tag/untagged",
                     "prerelease": false, "draft": true, "assets": []},
                    {"id": 1, "tag_name": "v1.1.0", "name": "Beta", "body": "",
                     "published_at": "2026-01-10T08:00:00Z",
                     "html_url": "https://github.com/trandactri/nutree-web/releases/tag/v1.1.0",
                     "prerelease": true, "draft": false, "assets": []}
                ]"#,
            )
            .create_async()
            .await;

        let source = GitHubReleases::new(HttpClient::new(reqwest::Client::new()), &url);
        let feed = ReleaseFeed::new(Arc::new(source), repo());
        let releases = feed.fetch_releases(20).await;

        mock.assert_async().await;
        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].id, 3);
        assert_eq!(releases[1].id, 1);
        assert!(releases[0].is_latest);
        assert!(!releases[1].is_latest);
        assert_eq!(releases[0].name, "v1.2.0");
        assert_eq!(
            releases[0].download_url.as_deref(),
            Some("https://dl.example.com/app-release.apk")
        );
        assert!(releases[1].is_prerelease);
        assert_eq!(releases[1].download_url, None);
    }

    #[tokio::test]
    async fn test_fetch_releases_unreachable_upstream() {
        // Nothing listens on port 1.
        let source = GitHubReleases::new(
            HttpClient::new(reqwest::Client::new()),
            "http://127.0.0.1:1",
        );
        let feed = ReleaseFeed::new(Arc::new(source), repo());

        assert!(feed.fetch_releases(20).await.is_empty());
        assert!(feed.fetch_latest_release().await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_releases_malformed_payload() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let _mock = server
            .mock("GET", "/repos/trandactri/nutree-web/releases?per_page=20")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "not a list"}"#)
            .create_async()
            .await;

        let source = GitHubReleases::new(HttpClient::new(reqwest::Client::new()), &url);
        let feed = ReleaseFeed::new(Arc::new(source), repo());

        assert!(feed.fetch_releases(20).await.is_empty());
    }
}
