//! # Evaluation Service
//!
//! The orchestrator for resource evaluation. Given a URL and the current
//! connectivity snapshot it decides the data-sourcing path (cache hit, online
//! fetch, or offline fallback), assembles the final report and writes it back
//! to the persistent store. A response is always produced unless every path
//! fails.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────┐
//! │ EvaluationService  │
//! └──────────┬─────────┘
//!            │
//!            ├──> ReportStore            (persistent cache, source of truth)
//!            ├──> NetworkMonitor         (connectivity snapshot)
//!            ├──> LicenseProviderAdapter (remote license metadata)
//!            └──> OfflineEvaluator       (heuristic fallback)
//! ```
//!
//! ## Data-sourcing decision
//!
//! - Offline: the cached report wins when present; otherwise the offline
//!   heuristic runs.
//! - Online: the cache hit is ignored and a fresh evaluation is computed;
//!   freshness is preferred over cache reuse whenever the network is
//!   available.
//! - Any online-path failure triggers one retry through the offline
//!   evaluator before the generic failure surfaces.
//!
//! ## Usage
//!
//! ```ignore
//! use core_evaluation::service::EvaluationService;
//! use std::sync::Arc;
//!
//! let service = EvaluationService::new(adapter, report_store, network_monitor, clock);
//! let report = service.evaluate("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await?;
//! ```

use crate::adapter::LicenseProviderAdapter;
use crate::classify::classify;
use crate::error::{EvaluationError, Result};
use crate::offline::OfflineEvaluator;
use crate::report::EvaluationReport;
use crate::scores;
use bridge_traits::network::NetworkMonitor;
use bridge_traits::storage::ReportStore;
use bridge_traits::time::Clock;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Coordinator between the report store, the connectivity signal, the
/// provider adapter and the offline evaluator
pub struct EvaluationService {
    adapter: LicenseProviderAdapter,
    report_store: Arc<dyn ReportStore>,
    network_monitor: Arc<dyn NetworkMonitor>,
    offline_evaluator: OfflineEvaluator,
}

impl EvaluationService {
    /// Create a new evaluation service
    ///
    /// # Arguments
    /// * `adapter` - License provider adapter
    /// * `report_store` - Persistent report store
    /// * `network_monitor` - Connectivity snapshot source
    /// * `clock` - Time source shared with the offline evaluator
    pub fn new(
        adapter: LicenseProviderAdapter,
        report_store: Arc<dyn ReportStore>,
        network_monitor: Arc<dyn NetworkMonitor>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let offline_evaluator = OfflineEvaluator::new(Arc::clone(&report_store), clock);

        Self {
            adapter,
            report_store,
            network_monitor,
            offline_evaluator,
        }
    }

    /// Evaluate a resource URL
    ///
    /// Always produces a report when any data-sourcing path can; the generic
    /// [`EvaluationError::EvaluationFailed`] surfaces only when no meaningful
    /// report of any kind can be produced.
    ///
    /// Connectivity is read once at the start and treated as a snapshot for
    /// the whole evaluation.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn evaluate(&self, url: &str) -> Result<EvaluationReport> {
        let cached = self.read_cached(url).await;
        let online = self.network_monitor.is_connected().await;

        if !online {
            debug!("Offline mode - using cached data or offline evaluation");
            if let Some(mut report) = cached {
                report.from_cache = true;
                return Ok(report);
            }

            return self.offline_evaluator.evaluate(url).await.map_err(|err| {
                warn!(error = %err, "Offline evaluation failed with no cached report");
                EvaluationError::EvaluationFailed
            });
        }

        // Freshness is preferred while online: the cache hit is ignored on
        // purpose and a fresh evaluation overwrites the stored entry.
        match self.evaluate_online(url).await {
            Ok(report) => Ok(report),
            Err(err) => {
                warn!(error = %err, "Online evaluation failed, falling back to offline evaluation");
                self.offline_evaluator.evaluate(url).await.map_err(|err| {
                    warn!(error = %err, "Offline fallback failed as well");
                    EvaluationError::EvaluationFailed
                })
            }
        }
    }

    /// Compute a fresh report while online
    ///
    /// The license fetch cannot fail (provider failures degrade in place and
    /// the evaluation still counts as a success); only serialization or a
    /// failed store write can error out of this path.
    async fn evaluate_online(&self, url: &str) -> Result<EvaluationReport> {
        let kind = classify(url);
        debug!(kind = ?kind, "Classified resource");

        let license = self.adapter.fetch_license(url, kind).await;

        let report = EvaluationReport {
            license,
            quality: scores::quality(url),
            adaptability: scores::adaptability(url),
            reusability: scores::reusability(url),
            from_cache: false,
        };

        // Whole-entry replacement of any prior report for this URL. The write
        // happens strictly after assembly, so a cancelled evaluation never
        // persists a partial entry.
        let json = report.to_json()?;
        self.report_store
            .put(url, &json)
            .await
            .map_err(|e| EvaluationError::Storage(e.to_string()))?;

        info!(license_type = %report.license.license_type, "Evaluation completed");
        Ok(report)
    }

    async fn read_cached(&self, url: &str) -> Option<EvaluationReport> {
        match self.report_store.get(url).await {
            Ok(Some(raw)) => match EvaluationReport::from_json(&raw) {
                Ok(report) => Some(report),
                Err(err) => {
                    warn!(error = %err, "Ignoring corrupt cached report");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                // A broken cache must never mask a computable result
                warn!(error = %err, "Report store read failed, treating as miss");
                None
            }
        }
    }
}
