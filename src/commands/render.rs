use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use crate::{
    analytics::Analytics,
    config::{SiteConfig, SiteOptions},
    runtime::Runtime,
    site::{Page, PageData, Renderer},
};

/// Render one page and write the HTML to `out`.
///
/// Only the changelog and home pages reach the release feed.
#[tracing::instrument(skip(runtime, options, out))]
pub async fn render<R: Runtime, W: Write>(
    runtime: R,
    options: SiteOptions,
    page: Page,
    out: &mut W,
) -> Result<()> {
    let config = SiteConfig::new(&runtime, options)?;
    let analytics = Analytics::init(&config.analytics);

    let (releases, latest) = match page {
        Page::Changelog => {
            let feed = config.release_feed()?;
            (feed.fetch_releases(config.release_limit).await, None)
        }
        Page::Home => {
            let feed = config.release_feed()?;
            (Vec::new(), feed.fetch_latest_release().await)
        }
        _ => (Vec::new(), None),
    };
    debug!("Rendering {} with {} releases", page, releases.len());

    let renderer = Renderer::new()?;
    let html = renderer.render(
        page,
        &PageData::new(&releases, latest.as_ref(), analytics.as_ref()),
    )?;

    out.write_all(html.as_bytes())
        .context("Failed to write rendered page")?;
    Ok(())
}
