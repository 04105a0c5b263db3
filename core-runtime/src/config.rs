//! # Core Configuration Module
//!
//! Configuration for the evaluation core, built with a fail-fast builder.
//!
//! ## Overview
//!
//! `CoreConfig` holds the settings and injected bridge implementations the
//! engine needs. Bridges are optional at the config level; the service façade
//! substitutes desktop defaults for any that are missing and fails fast with
//! an actionable error when no default exists.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::CoreConfig;
//!
//! let config = CoreConfig::builder()
//!     .database_path("/var/lib/resource-eval/reports.db")
//!     .youtube_api_key("...")
//!     .books_api_key("...")
//!     .build()
//!     .expect("Failed to build config");
//! ```

use crate::error::{Error, Result};
use bridge_traits::{Clock, HttpClient, NetworkMonitor, ReportStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Default capacity of the provider adapter's session license cache
pub const DEFAULT_LICENSE_CACHE_CAPACITY: usize = 128;

/// Default timeout applied to provider requests
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Core configuration for the evaluation engine.
///
/// Use [`CoreConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct CoreConfig {
    /// Path to the SQLite report database
    pub database_path: PathBuf,

    /// API key for the video metadata provider
    pub youtube_api_key: String,

    /// API key for the document metadata provider
    pub books_api_key: String,

    /// Capacity of the adapter's session-scoped license cache
    pub license_cache_capacity: usize,

    /// Timeout for provider requests
    pub request_timeout: Duration,

    /// HTTP client (optional with desktop default)
    pub http_client: Option<Arc<dyn HttpClient>>,

    /// Network connectivity monitor (optional with desktop default)
    pub network_monitor: Option<Arc<dyn NetworkMonitor>>,

    /// Persistent report store (optional; defaults to SQLite at `database_path`)
    pub report_store: Option<Arc<dyn ReportStore>>,

    /// Time source (optional; defaults to the system clock)
    pub clock: Option<Arc<dyn Clock>>,
}

impl CoreConfig {
    pub fn builder() -> CoreConfigBuilder {
        CoreConfigBuilder::default()
    }
}

/// Builder for [`CoreConfig`] with fail-fast validation
#[derive(Default)]
pub struct CoreConfigBuilder {
    database_path: Option<PathBuf>,
    youtube_api_key: Option<String>,
    books_api_key: Option<String>,
    license_cache_capacity: Option<usize>,
    request_timeout: Option<Duration>,
    http_client: Option<Arc<dyn HttpClient>>,
    network_monitor: Option<Arc<dyn NetworkMonitor>>,
    report_store: Option<Arc<dyn ReportStore>>,
    clock: Option<Arc<dyn Clock>>,
}

impl CoreConfigBuilder {
    pub fn database_path(mut self, path: impl AsRef<Path>) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn youtube_api_key(mut self, key: impl Into<String>) -> Self {
        self.youtube_api_key = Some(key.into());
        self
    }

    pub fn books_api_key(mut self, key: impl Into<String>) -> Self {
        self.books_api_key = Some(key.into());
        self
    }

    pub fn license_cache_capacity(mut self, capacity: usize) -> Self {
        self.license_cache_capacity = Some(capacity);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn http_client(mut self, client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn network_monitor(mut self, monitor: Arc<dyn NetworkMonitor>) -> Self {
        self.network_monitor = Some(monitor);
        self
    }

    pub fn report_store(mut self, store: Arc<dyn ReportStore>) -> Self {
        self.report_store = Some(store);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the configuration, validating required settings
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` when:
    /// - no database path is set and no report store is injected
    /// - either provider API key is missing or empty
    /// - the cache capacity is zero
    pub fn build(self) -> Result<CoreConfig> {
        let database_path = match (&self.database_path, &self.report_store) {
            (Some(path), _) => path.clone(),
            // An injected store makes the path irrelevant; keep a placeholder
            (None, Some(_)) => PathBuf::new(),
            (None, None) => {
                return Err(Error::Config(
                    "database_path is required unless a report store is injected".to_string(),
                ))
            }
        };

        let youtube_api_key = require_key(self.youtube_api_key, "youtube_api_key")?;
        let books_api_key = require_key(self.books_api_key, "books_api_key")?;

        let license_cache_capacity = self
            .license_cache_capacity
            .unwrap_or(DEFAULT_LICENSE_CACHE_CAPACITY);
        if license_cache_capacity == 0 {
            return Err(Error::Config(
                "license_cache_capacity must be non-zero".to_string(),
            ));
        }

        Ok(CoreConfig {
            database_path,
            youtube_api_key,
            books_api_key,
            license_cache_capacity,
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            http_client: self.http_client,
            network_monitor: self.network_monitor,
            report_store: self.report_store,
            clock: self.clock,
        })
    }
}

fn require_key(key: Option<String>, name: &str) -> Result<String> {
    match key {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(Error::Config(format!("{} is required", name))),
    }
}
