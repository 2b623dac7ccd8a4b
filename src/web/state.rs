use std::sync::Arc;
use std::time::Duration;

use crate::analytics::Analytics;
use crate::releases::{DisplayRelease, ReleaseFeed};
use crate::site::Renderer;

use super::cache::RevalidatingCache;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<Renderer>,
    pub feed: ReleaseFeed,
    pub analytics: Option<Arc<Analytics>>,
    pub release_limit: u32,
    releases: Arc<RevalidatingCache<Vec<DisplayRelease>>>,
    latest: Arc<RevalidatingCache<Option<DisplayRelease>>>,
}

impl AppState {
    pub fn new(
        renderer: Renderer,
        feed: ReleaseFeed,
        analytics: Option<Analytics>,
        release_limit: u32,
        revalidate: Duration,
    ) -> Self {
        Self {
            renderer: Arc::new(renderer),
            feed,
            analytics: analytics.map(Arc::new),
            release_limit,
            releases: Arc::new(RevalidatingCache::new(revalidate)),
            latest: Arc::new(RevalidatingCache::new(revalidate)),
        }
    }

    /// The changelog feed, refetched at most once per revalidation window.
    pub async fn releases(&self) -> Vec<DisplayRelease> {
        self.releases
            .get_or_refresh(|| self.feed.fetch_releases(self.release_limit))
            .await
    }

    pub async fn latest_release(&self) -> Option<DisplayRelease> {
        self.latest
            .get_or_refresh(|| self.feed.fetch_latest_release())
            .await
    }
}
