//! License Provider Adapter
//!
//! Wraps the two remote metadata providers behind a single call, normalizes
//! their responses into the common license-info shape, and suppresses
//! duplicate calls within a session via an in-memory cache keyed by the exact
//! URL string.
//!
//! The public entry point never fails: all provider and network failures are
//! converted into a degraded but well-formed [`LicenseInfo`]. The fallible
//! path is exposed separately so failure causes remain inspectable in tests.

use crate::classify::ResourceKind;
use crate::error::{EvaluationError, Result};
use crate::license::LicenseInfo;
use crate::providers::{extract_video_id, extract_volume_id, GoogleBooksClient, YouTubeClient};
use bridge_traits::http::HttpClient;
use bridge_traits::time::Clock;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Adapter over the video and document metadata providers
///
/// Owns a session-scoped license cache with a lifetime equal to the adapter
/// instance's. The cache is an optimization only; the persistent report store
/// remains the source of truth across sessions, and the two are never
/// reconciled.
pub struct LicenseProviderAdapter {
    youtube: YouTubeClient,
    books: GoogleBooksClient,
    clock: Arc<dyn Clock>,
    cache: Mutex<LruCache<String, LicenseInfo>>,
}

impl LicenseProviderAdapter {
    /// Create a new adapter
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client shared by both provider clients
    /// * `clock` - Time source for `lastUpdated` stamps
    /// * `youtube_api_key` - Video provider API key
    /// * `books_api_key` - Document provider API key
    /// * `cache_capacity` - Session cache capacity (clamped to at least 1)
    /// * `request_timeout` - Timeout applied to provider requests
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        clock: Arc<dyn Clock>,
        youtube_api_key: String,
        books_api_key: String,
        cache_capacity: usize,
        request_timeout: Duration,
    ) -> Self {
        let capacity = NonZeroUsize::new(cache_capacity).unwrap_or(NonZeroUsize::MIN);

        Self {
            youtube: YouTubeClient::new(
                Arc::clone(&http_client),
                youtube_api_key,
                Arc::clone(&clock),
                request_timeout,
            ),
            books: GoogleBooksClient::new(
                http_client,
                books_api_key,
                Arc::clone(&clock),
                request_timeout,
            ),
            clock,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Fetch license metadata for a URL
    ///
    /// Never fails: any error on the fallible path is logged and converted
    /// into the degraded license info for the resource kind. Degradation here
    /// does not fail the evaluation that requested it; only the license
    /// sub-object is affected.
    pub async fn fetch_license(&self, url: &str, kind: ResourceKind) -> LicenseInfo {
        match self.try_fetch_license(url, kind).await {
            Ok(info) => info,
            Err(
                err @ (EvaluationError::MissingIdentifier(_)
                | EvaluationError::Network(_)
                | EvaluationError::Http { .. }
                | EvaluationError::JsonParse(_)
                | EvaluationError::MissingItem(_)),
            ) => {
                warn!(
                    url = %url,
                    kind = ?kind,
                    error = %err,
                    "License fetch failed, returning degraded license info"
                );
                LicenseInfo::degraded(kind, self.clock.now())
            }
            Err(err) => {
                warn!(
                    url = %url,
                    kind = ?kind,
                    error = %err,
                    "Unexpected failure outside the provider paths"
                );
                LicenseInfo::unavailable(kind, &err.to_string(), self.clock.now())
            }
        }
    }

    /// Fallible license fetch
    ///
    /// A missing identifier, a non-success status, a response lacking the
    /// expected item and a transport failure all surface as errors of equal
    /// weight; [`fetch_license`](Self::fetch_license) collapses them into the
    /// same fallback outcome.
    pub async fn try_fetch_license(&self, url: &str, kind: ResourceKind) -> Result<LicenseInfo> {
        match kind {
            ResourceKind::Video => self.fetch_video(url).await,
            ResourceKind::Document => self.fetch_document(url).await,
            // No network call for unsupported kinds
            ResourceKind::Other => Ok(LicenseInfo::unsupported(self.clock.now())),
        }
    }

    async fn fetch_video(&self, url: &str) -> Result<LicenseInfo> {
        let video_id = extract_video_id(url)
            .ok_or_else(|| EvaluationError::MissingIdentifier(url.to_string()))?;

        if let Some(info) = self.cache_get(url).await {
            debug!(url = %url, "Session license cache hit");
            return Ok(info);
        }

        let info = self.youtube.fetch_by_id(&video_id).await?;
        self.cache_put(url, info.clone()).await;
        Ok(info)
    }

    async fn fetch_document(&self, url: &str) -> Result<LicenseInfo> {
        let volume_id = extract_volume_id(url)
            .ok_or_else(|| EvaluationError::MissingIdentifier(url.to_string()))?;

        if let Some(info) = self.cache_get(url).await {
            debug!(url = %url, "Session license cache hit");
            return Ok(info);
        }

        let info = self.books.fetch_by_id(&volume_id).await?;
        self.cache_put(url, info.clone()).await;
        Ok(info)
    }

    async fn cache_get(&self, url: &str) -> Option<LicenseInfo> {
        self.cache.lock().await.get(url).cloned()
    }

    /// Only successful normalizations enter the cache; degraded results are
    /// recomputed on the next call
    async fn cache_put(&self, url: &str, info: LicenseInfo) {
        self.cache.lock().await.put(url.to_string(), info);
    }

    /// Number of entries currently in the session cache
    pub async fn cached_licenses(&self) -> usize {
        self.cache.lock().await.len()
    }
}
