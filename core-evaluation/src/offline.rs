//! Offline Heuristic Evaluator
//!
//! Produces a best-effort report without network access: cached data when
//! available, otherwise heuristic score labels keyed by the URL's domain and
//! an offline license sentinel. Results are written back to the persistent
//! store so they prime future calls for the same URL.

use crate::classify::{classify, ResourceKind};
use crate::error::{EvaluationError, Result};
use crate::license::LicenseInfo;
use crate::report::EvaluationReport;
use crate::scores;
use bridge_traits::storage::ReportStore;
use bridge_traits::time::Clock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Evaluator used when the network is unavailable or the online path failed
pub struct OfflineEvaluator {
    report_store: Arc<dyn ReportStore>,
    clock: Arc<dyn Clock>,
}

impl OfflineEvaluator {
    pub fn new(report_store: Arc<dyn ReportStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            report_store,
            clock,
        }
    }

    /// Evaluate a URL without network access
    ///
    /// A cached report always wins over a fresh heuristic computation. On a
    /// cache miss the heuristic report is computed, persisted and returned.
    ///
    /// # Errors
    ///
    /// Only a failed store write surfaces as an error; a failed store read is
    /// treated as a miss so a broken cache never blocks the heuristic path.
    pub async fn evaluate(&self, url: &str) -> Result<EvaluationReport> {
        if let Some(mut report) = self.read_cached(url).await {
            debug!(url = %url, "Serving cached report for offline evaluation");
            report.from_cache = true;
            return Ok(report);
        }

        let kind = classify(url);
        let report = self.heuristic_report(kind);

        let json = report.to_json()?;
        self.report_store
            .put(url, &json)
            .await
            .map_err(|e| EvaluationError::Storage(e.to_string()))?;

        debug!(url = %url, kind = ?kind, "Computed and cached offline report");
        Ok(report)
    }

    fn heuristic_report(&self, kind: ResourceKind) -> EvaluationReport {
        EvaluationReport {
            license: LicenseInfo::offline_sentinel(kind, self.clock.now()),
            quality: scores::offline_quality(kind),
            adaptability: scores::offline_adaptability(kind),
            reusability: scores::offline_reusability(kind),
            from_cache: false,
        }
    }

    async fn read_cached(&self, url: &str) -> Option<EvaluationReport> {
        match self.report_store.get(url).await {
            Ok(Some(raw)) => match EvaluationReport::from_json(&raw) {
                Ok(report) => Some(report),
                Err(err) => {
                    warn!(url = %url, error = %err, "Ignoring corrupt cached report");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(url = %url, error = %err, "Report store read failed, treating as miss");
                None
            }
        }
    }
}
