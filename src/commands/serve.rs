use anyhow::Result;
use log::info;
use std::net::SocketAddr;

use crate::{
    analytics::Analytics,
    config::{SiteConfig, SiteOptions},
    runtime::Runtime,
    site::Renderer,
    web::{self, AppState},
};

/// Serve the site over HTTP until shutdown.
#[tracing::instrument(skip(runtime, options))]
pub async fn serve<R: Runtime>(runtime: R, options: SiteOptions, bind: SocketAddr) -> Result<()> {
    let config = SiteConfig::new(&runtime, options)?;
    let analytics = Analytics::init(&config.analytics);
    if analytics.is_some() {
        info!("Analytics enabled");
    }

    let state = AppState::new(
        Renderer::new()?,
        config.release_feed()?,
        analytics,
        config.release_limit,
        config.revalidate,
    );

    info!(
        "Serving releases of {} (revalidate every {}s)",
        config.repo,
        config.revalidate.as_secs()
    );
    web::serve(state, bind).await
}
