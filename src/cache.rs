use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::time::{interval, Duration};
use uuid::Uuid;

use crate::entities::Quote;
use crate::error::Error;

#[async_trait]
pub trait QuoteCache {
    async fn save(&self, quote: Quote) -> Result<(), Error>;

    /// Missing and expired entries are both reported as `None`.
    async fn load(&self, token: Uuid) -> Result<Option<Quote>, Error>;
}

struct CacheEntry {
    quote: Quote,
    expires_at: DateTime<Utc>,
}

/// Map from quote token to (quote, expiry) pair. Expiry is compared against
/// the clock on every read; the reaper only reclaims storage.
#[derive(Clone)]
pub struct MemoryQuoteCache {
    entries: Arc<DashMap<Uuid, CacheEntry>>,
}

impl MemoryQuoteCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();

        let expired: Vec<Uuid> = self
            .entries
            .iter()
            .filter(|entry| entry.value().expires_at <= now)
            .map(|entry| *entry.key())
            .collect();

        for token in &expired {
            self.entries.remove(token);
        }

        expired.len()
    }

    pub fn start_reaper(&self, period: Duration) -> tokio::task::JoinHandle<()> {
        let cache = self.clone();

        tokio::spawn(async move {
            let mut tick = interval(period);

            loop {
                tick.tick().await;

                let purged = cache.purge_expired();

                if purged > 0 {
                    tracing::debug!(purged, "reaped expired quotes");
                }
            }
        })
    }
}

#[async_trait]
impl QuoteCache for MemoryQuoteCache {
    #[tracing::instrument(skip(self, quote))]
    async fn save(&self, quote: Quote) -> Result<(), Error> {
        let entry = CacheEntry {
            expires_at: quote.expires_at,
            quote,
        };

        self.entries.insert(entry.quote.token, entry);

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn load(&self, token: Uuid) -> Result<Option<Quote>, Error> {
        let now = Utc::now();

        let quote = match self.entries.get(&token) {
            Some(entry) if now < entry.expires_at => Some(entry.quote.clone()),
            _ => None,
        };

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks;

    #[test]
    fn load_returns_the_saved_quote() {
        tokio_test::block_on(async {
            let cache = MemoryQuoteCache::new();
            let quote = mocks::quote();

            cache.save(quote.clone()).await.unwrap();

            assert_eq!(cache.load(quote.token).await.unwrap(), Some(quote));
        });
    }

    #[test]
    fn unknown_token_is_absent() {
        tokio_test::block_on(async {
            let cache = MemoryQuoteCache::new();

            assert_eq!(cache.load(Uuid::new_v4()).await.unwrap(), None);
        });
    }

    #[test]
    fn expired_entry_is_absent_without_purging() {
        tokio_test::block_on(async {
            let cache = MemoryQuoteCache::new();
            let quote = mocks::expired_quote();

            cache.save(quote.clone()).await.unwrap();

            // still physically stored, logically gone
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.load(quote.token).await.unwrap(), None);
            assert_eq!(cache.load(quote.token).await.unwrap(), None);
        });
    }

    #[test]
    fn purge_removes_only_expired_entries() {
        tokio_test::block_on(async {
            let cache = MemoryQuoteCache::new();
            let live = mocks::quote();

            cache.save(live.clone()).await.unwrap();
            cache.save(mocks::expired_quote()).await.unwrap();

            assert_eq!(cache.purge_expired(), 1);
            assert_eq!(cache.len(), 1);
            assert_eq!(cache.load(live.token).await.unwrap(), Some(live));
        });
    }
}
