//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (HTTP, network,
//! report storage) into the evaluation engine and exposes the caller-facing
//! request/response contract. Desktop hosts typically enable the
//! `desktop-shims` feature (which depends on `bridge-desktop`) so missing
//! bridges are substituted with desktop defaults; other hosts inject their
//! own adapters and get a fail-fast error for anything missing.
//!
//! ## Request/response contract
//!
//! A request carries exactly one URL; exactly one response is produced per
//! request, either the evaluation report or a short error message, never a
//! raw error payload.

pub mod error;

pub use error::{CoreError, Result};

use bridge_traits::{Clock, HttpClient, NetworkMonitor, ReportStore, SystemClock};
use core_evaluation::{EvaluationReport, EvaluationService, LicenseProviderAdapter};
use core_runtime::config::CoreConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Caller-facing evaluation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    pub url: String,
}

/// Caller-facing evaluation response
///
/// Serializes untagged: a successful response is the report object itself,
/// a failure is `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvaluateResponse {
    Report(EvaluationReport),
    Error { error: String },
}

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct CoreService {
    evaluation: Arc<EvaluationService>,
}

impl CoreService {
    /// Assemble the evaluation engine from a configuration
    ///
    /// Injected bridges take precedence; with the `desktop-shims` feature the
    /// remaining ones fall back to the desktop implementations, otherwise a
    /// [`CoreError::CapabilityMissing`] is returned.
    pub async fn from_config(config: CoreConfig) -> Result<Self> {
        let clock: Arc<dyn Clock> = config
            .clock
            .clone()
            .unwrap_or_else(|| Arc::new(SystemClock));

        let http_client = resolve_http_client(&config)?;
        let network_monitor = resolve_network_monitor(&config)?;
        let report_store = resolve_report_store(&config).await?;

        let adapter = LicenseProviderAdapter::new(
            http_client,
            Arc::clone(&clock),
            config.youtube_api_key.clone(),
            config.books_api_key.clone(),
            config.license_cache_capacity,
            config.request_timeout,
        );

        let evaluation = EvaluationService::new(adapter, report_store, network_monitor, clock);

        Ok(Self {
            evaluation: Arc::new(evaluation),
        })
    }

    /// Handle one evaluation request, producing exactly one response
    pub async fn handle_evaluation(&self, request: EvaluateRequest) -> EvaluateResponse {
        match self.evaluation.evaluate(&request.url).await {
            Ok(report) => EvaluateResponse::Report(report),
            Err(err) => {
                warn!(url = %request.url, error = %err, "Evaluation request failed");
                EvaluateResponse::Error {
                    error: err.to_string(),
                }
            }
        }
    }

    /// Access the underlying evaluation service
    pub fn evaluation(&self) -> &EvaluationService {
        &self.evaluation
    }
}

fn resolve_http_client(config: &CoreConfig) -> Result<Arc<dyn HttpClient>> {
    match &config.http_client {
        Some(client) => Ok(Arc::clone(client)),
        None => {
            #[cfg(feature = "desktop-shims")]
            return Ok(Arc::new(bridge_desktop::ReqwestHttpClient::with_timeout(
                config.request_timeout,
            )));

            #[cfg(not(feature = "desktop-shims"))]
            Err(CoreError::CapabilityMissing {
                capability: "HttpClient".to_string(),
                message: "No HTTP client provided. Enable desktop-shims or inject one".to_string(),
            })
        }
    }
}

fn resolve_network_monitor(config: &CoreConfig) -> Result<Arc<dyn NetworkMonitor>> {
    match &config.network_monitor {
        Some(monitor) => Ok(Arc::clone(monitor)),
        None => {
            #[cfg(feature = "desktop-shims")]
            return Ok(Arc::new(bridge_desktop::DesktopNetworkMonitor::new()));

            #[cfg(not(feature = "desktop-shims"))]
            Err(CoreError::CapabilityMissing {
                capability: "NetworkMonitor".to_string(),
                message: "No network monitor provided. Enable desktop-shims or inject one"
                    .to_string(),
            })
        }
    }
}

async fn resolve_report_store(config: &CoreConfig) -> Result<Arc<dyn ReportStore>> {
    match &config.report_store {
        Some(store) => Ok(Arc::clone(store)),
        None => {
            #[cfg(feature = "desktop-shims")]
            return bridge_desktop::SqliteReportStore::new(config.database_path.clone())
                .await
                .map(|store| Arc::new(store) as Arc<dyn ReportStore>)
                .map_err(|e| CoreError::InitializationFailed(e.to_string()));

            #[cfg(not(feature = "desktop-shims"))]
            Err(CoreError::CapabilityMissing {
                capability: "ReportStore".to_string(),
                message: "No report store provided. Enable desktop-shims or inject one".to_string(),
            })
        }
    }
}
