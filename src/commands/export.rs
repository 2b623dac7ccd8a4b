use anyhow::Result;
use std::path::Path;

use crate::{
    analytics::Analytics,
    config::{SiteConfig, SiteOptions},
    export::export_site,
    runtime::Runtime,
    site::{PageData, Renderer},
};

/// Export every page as static HTML under `out_dir`.
#[tracing::instrument(skip(runtime, options))]
pub async fn export<R: Runtime>(runtime: R, options: SiteOptions, out_dir: &Path) -> Result<()> {
    let config = SiteConfig::new(&runtime, options)?;
    let analytics = Analytics::init(&config.analytics);
    let feed = config.release_feed()?;

    let (releases, latest) = tokio::join!(
        feed.fetch_releases(config.release_limit),
        feed.fetch_latest_release()
    );

    let renderer = Renderer::new()?;
    let data = PageData::new(&releases, latest.as_ref(), analytics.as_ref());
    let written = export_site(&runtime, &renderer, &data, out_dir)?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}
