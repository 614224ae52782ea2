use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use tokio::sync::RwLock;

use crate::auth::error::{AuthError, UNKNOWN_KEY};

/// Where the issuer's published key set comes from.
#[async_trait]
pub trait KeySetSource: Send + Sync {
    async fn fetch(&self) -> Result<JwkSet, AuthError>;
}

pub struct HttpKeySetSource {
    client: reqwest::Client,
    url: String,
}

impl HttpKeySetSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::KeySetUnavailable(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl KeySetSource for HttpKeySetSource {
    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        log::debug!("Fetching JWKS from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                log::error!("JWKS request to {} failed: {}", self.url, e);
                AuthError::KeySetUnavailable(e.to_string())
            })?;

        response.json::<JwkSet>().await.map_err(|e| {
            log::error!("JWKS response from {} is not a key set: {}", self.url, e);
            AuthError::KeySetUnavailable(e.to_string())
        })
    }
}

struct CachedKeySet {
    keys: JwkSet,
    fetched_at: Instant,
}

/// Holds the most recent key set of a single issuer.
///
/// Entries older than `ttl` are re-fetched on the next lookup. A `kid` that
/// is not in a still-fresh set forces one re-fetch, which is how key
/// rotation at the issuer is picked up, but at most once per
/// `min_refresh_interval`. Lookups of unknown ids inside that window are
/// answered from the cached set.
pub struct JwksCache {
    source: Arc<dyn KeySetSource>,
    ttl: Duration,
    min_refresh_interval: Duration,
    slot: RwLock<Option<CachedKeySet>>,
}

impl JwksCache {
    pub const DEFAULT_MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

    pub fn new(source: Arc<dyn KeySetSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            min_refresh_interval: Self::DEFAULT_MIN_REFRESH_INTERVAL,
            slot: RwLock::new(None),
        }
    }

    pub fn with_min_refresh_interval(mut self, interval: Duration) -> Self {
        self.min_refresh_interval = interval;
        self
    }

    pub async fn find(&self, kid: &str) -> Result<Jwk, AuthError> {
        {
            let slot = self.slot.read().await;
            if let Some(cached) = slot.as_ref() {
                let age = cached.fetched_at.elapsed();
                if age < self.ttl {
                    if let Some(jwk) = cached.keys.find(kid) {
                        return Ok(jwk.clone());
                    }
                    if age < self.min_refresh_interval {
                        log::debug!("Unknown signing key '{}', JWKS refreshed {:?} ago", kid, age);
                        return Err(AuthError::InvalidHeader(UNKNOWN_KEY));
                    }
                    log::info!("Signing key '{}' not in cached JWKS, refreshing", kid);
                }
            }
        }

        let keys = self.refresh(kid).await?;
        keys.find(kid).cloned().ok_or(AuthError::InvalidHeader(UNKNOWN_KEY))
    }

    pub async fn invalidate(&self) {
        self.slot.write().await.take();
    }

    async fn refresh(&self, kid: &str) -> Result<JwkSet, AuthError> {
        let mut slot = self.slot.write().await;

        // another lookup may have refreshed while this one waited for the lock
        if let Some(cached) = slot.as_ref() {
            let age = cached.fetched_at.elapsed();
            if age < self.ttl
                && (age < self.min_refresh_interval || cached.keys.find(kid).is_some())
            {
                return Ok(cached.keys.clone());
            }
        }

        let keys = self.source.fetch().await?;

        *slot = Some(CachedKeySet {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });
        Ok(keys)
    }
}
