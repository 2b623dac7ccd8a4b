use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Serves a stored value until it is older than `ttl`, then refetches.
///
/// Concurrent callers that find the value expired may all refetch; the
/// last one to finish wins.
#[derive(Debug)]
pub struct RevalidatingCache<T> {
    ttl: Duration,
    slot: RwLock<Option<(Instant, T)>>,
}

impl<T: Clone> RevalidatingCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: RwLock::new(None),
        }
    }

    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        if let Some((fetched_at, value)) = self.slot.read().await.as_ref() {
            if fetched_at.elapsed() < self.ttl {
                return value.clone();
            }
        }

        debug!("Cache expired or empty, refreshing");
        let value = refresh().await;
        *self.slot.write().await = Some((Instant::now(), value.clone()));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_serves_stored_value_inside_window() {
        let cache = RevalidatingCache::new(Duration::from_secs(3600));
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_refresh(|| async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    vec![1, 2, 3]
                })
                .await;
            assert_eq!(value, vec![1, 2, 3]);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refetches_after_window() {
        let cache = RevalidatingCache::new(Duration::ZERO);
        let calls = AtomicUsize::new(0);

        for expected in 1..=2 {
            let value = cache
                .get_or_refresh(|| async { calls.fetch_add(1, Ordering::SeqCst) + 1 })
                .await;
            assert_eq!(value, expected);
        }
    }

    #[tokio::test]
    async fn test_empty_result_is_cached() {
        let cache: RevalidatingCache<Vec<u8>> = RevalidatingCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        assert!(cache
            .get_or_refresh(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                Vec::new()
            })
            .await
            .is_empty());
        cache
            .get_or_refresh(|| async {
                calls.fetch_add(1, Ordering::SeqCst);
                vec![9]
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
