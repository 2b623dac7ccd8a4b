use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A release as returned by the GitHub releases API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawRelease {
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    pub body: Option<String>,
    /// ISO 8601; null for drafts
    pub published_at: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
}

/// A binary attached to a GitHub release.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RawAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// A release shaped for rendering on the changelog.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRelease {
    pub id: u64,
    /// The tag name, shown as the primary label
    pub version: String,
    /// Release title; equals `version` when the release has none
    pub name: String,
    /// Release notes, rendered verbatim
    pub body: String,
    pub published_at: DateTime<Utc>,
    pub html_url: String,
    pub is_latest: bool,
    pub is_prerelease: bool,
    /// First attached package asset, if any
    pub download_url: Option<String>,
}
