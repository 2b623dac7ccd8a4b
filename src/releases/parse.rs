//! Pure mapping from GitHub payloads to [`DisplayRelease`] values.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::warn;

use super::model::{DisplayRelease, RawAsset, RawRelease};

/// File extensions offered as a direct download, in no particular priority.
pub const PACKAGE_EXTENSIONS: &[&str] = &[".apk", ".ipa", ".zip"];

/// Drops drafts, maps the rest in API order and marks the first one latest.
///
/// A release whose publish date cannot be read is skipped with a warning
/// rather than failing the whole list.
pub fn to_display_releases(raw: Vec<RawRelease>) -> Vec<DisplayRelease> {
    let mut releases: Vec<DisplayRelease> = raw
        .into_iter()
        .filter(|r| !r.draft)
        .filter_map(|r| {
            let tag = r.tag_name.clone();
            match to_display_release(r, false) {
                Ok(release) => Some(release),
                Err(e) => {
                    warn!("Skipping release {}: {:#}", tag, e);
                    None
                }
            }
        })
        .collect();

    if let Some(first) = releases.first_mut() {
        first.is_latest = true;
    }

    releases
}

/// Maps a single release. Drafts are not rejected here; callers filter them.
pub fn to_display_release(raw: RawRelease, is_latest: bool) -> Result<DisplayRelease> {
    let published_at = parse_published_at(raw.published_at.as_deref())
        .with_context(|| format!("Release {} has no usable publish date", raw.tag_name))?;

    let download_url = select_download_asset(&raw.assets).map(|a| a.browser_download_url.clone());

    let name = match raw.name {
        Some(name) if !name.is_empty() => name,
        _ => raw.tag_name.clone(),
    };

    Ok(DisplayRelease {
        id: raw.id,
        version: raw.tag_name,
        name,
        body: raw.body.unwrap_or_default(),
        published_at,
        html_url: raw.html_url,
        is_latest,
        is_prerelease: raw.prerelease,
        download_url,
    })
}

/// Returns the first asset, in API order, whose name ends in a package extension.
pub fn select_download_asset(assets: &[RawAsset]) -> Option<&RawAsset> {
    assets.iter().find(|asset| {
        PACKAGE_EXTENSIONS
            .iter()
            .any(|ext| asset.name.ends_with(ext))
    })
}

fn parse_published_at(value: Option<&str>) -> Result<DateTime<Utc>> {
    let value = value.context("published_at is missing")?;
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("Invalid published_at timestamp: {}", value))?;
    Ok(parsed.with_timezone(&Utc))
}
