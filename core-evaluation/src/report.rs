//! Evaluation Report Model
//!
//! The unit of work's result: normalized license metadata plus the three
//! score labels. Reports are persisted as JSON keyed by the exact input URL;
//! `fromCache` is always stored as `false` and set by the reader when a
//! report is served from the persistent cache.

use serde::{Deserialize, Serialize};

use crate::error::{EvaluationError, Result};
use crate::license::LicenseInfo;

/// Result of evaluating a single resource URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub license: LicenseInfo,
    pub quality: String,
    pub adaptability: String,
    pub reusability: String,
    /// Set when served from the persistent cache rather than freshly computed
    #[serde(default)]
    pub from_cache: bool,
}

impl EvaluationReport {
    /// Serialize for storage in the persistent report store
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| EvaluationError::Serialization(e.to_string()))
    }

    /// Deserialize a stored report
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| EvaluationError::Serialization(e.to_string()))
    }
}
