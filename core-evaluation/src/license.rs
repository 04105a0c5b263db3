//! License Metadata Model
//!
//! Normalized license metadata, polymorphic over the provider that produced
//! it but structurally uniform. Every `LicenseInfo` carries a non-empty
//! `type`, a `lastUpdated` timestamp and a `details.platform` entry; failed
//! lookups are represented by explicit sentinel values, never by missing
//! fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::classify::ResourceKind;

/// License label for a video whose provider lookup failed
pub const VIDEO_LICENSE_FALLBACK: &str = "Standard YouTube License (Offline)";

/// License label for a document whose provider lookup failed
pub const DOCUMENT_LICENSE_FALLBACK: &str = "Unknown License (Offline)";

/// License label for resources of an unsupported kind
pub const UNSUPPORTED_LICENSE: &str = "Unknown license";

/// License label for failures outside the provider paths
pub const LICENSE_UNAVAILABLE: &str = "License information unavailable";

/// License label produced by the offline heuristic evaluator
pub const OFFLINE_LICENSE: &str = "Offline evaluation - License information unavailable";

/// Access restrictions reported by the document provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessInfo {
    pub viewability: String,
    pub download_available: bool,
    pub access_view_status: String,
    pub public_domain: bool,
}

impl Default for AccessInfo {
    fn default() -> Self {
        Self {
            viewability: "NO_PAGES".to_string(),
            download_available: false,
            access_view_status: "NONE".to_string(),
            public_domain: false,
        }
    }
}

/// Normalized license metadata for an evaluated resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    /// Free-text license label; a provider value, a Creative-Commons tag,
    /// "Public Domain", or one of the sentinel labels above
    #[serde(rename = "type")]
    pub license_type: String,

    /// Only meaningful for video resources; `None` elsewhere
    pub is_licensed_content: Option<bool>,

    /// Only present for document resources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_info: Option<AccessInfo>,

    pub offline_available: bool,

    pub last_updated: DateTime<Utc>,

    /// Provider-specific auxiliary fields; at minimum contains `platform`
    pub details: BTreeMap<String, Value>,
}

impl LicenseInfo {
    /// Degraded license info for the given kind, used when the provider
    /// lookup fails for any reason
    pub fn degraded(kind: ResourceKind, now: DateTime<Utc>) -> Self {
        match kind {
            ResourceKind::Video => Self::video_fallback(now),
            ResourceKind::Document => Self::document_fallback(now),
            ResourceKind::Other => Self::unsupported(now),
        }
    }

    /// Fallback for a failed video lookup
    pub fn video_fallback(now: DateTime<Utc>) -> Self {
        let mut details = BTreeMap::new();
        details.insert("platform".to_string(), json!("YouTube"));
        details.insert("allowEmbed".to_string(), Value::Null);
        details.insert("privacyStatus".to_string(), json!("unknown"));

        Self {
            license_type: VIDEO_LICENSE_FALLBACK.to_string(),
            is_licensed_content: None,
            access_info: None,
            offline_available: true,
            last_updated: now,
            details,
        }
    }

    /// Fallback for a failed document lookup
    pub fn document_fallback(now: DateTime<Utc>) -> Self {
        let mut details = BTreeMap::new();
        details.insert("platform".to_string(), json!("Google Books"));
        details.insert("country".to_string(), json!("unknown"));
        details.insert("quoteSharingAllowed".to_string(), json!(false));

        Self {
            license_type: DOCUMENT_LICENSE_FALLBACK.to_string(),
            is_licensed_content: None,
            access_info: Some(AccessInfo::default()),
            offline_available: false,
            last_updated: now,
            details,
        }
    }

    /// License info for a resource of unsupported kind; no network call is
    /// ever made for these
    pub fn unsupported(now: DateTime<Utc>) -> Self {
        let mut details = BTreeMap::new();
        details.insert("platform".to_string(), json!("Unknown"));
        details.insert("error".to_string(), json!("Unsupported resource type"));

        Self {
            license_type: UNSUPPORTED_LICENSE.to_string(),
            is_licensed_content: None,
            access_info: None,
            offline_available: true,
            last_updated: now,
            details,
        }
    }

    /// Generic degraded license info for failures outside the provider paths
    pub fn unavailable(kind: ResourceKind, error: &str, now: DateTime<Utc>) -> Self {
        let mut details = BTreeMap::new();
        details.insert("platform".to_string(), json!(kind.platform()));
        details.insert("error".to_string(), json!(error));

        Self {
            license_type: LICENSE_UNAVAILABLE.to_string(),
            is_licensed_content: None,
            access_info: None,
            offline_available: true,
            last_updated: now,
            details,
        }
    }

    /// License sentinel produced by the offline heuristic evaluator
    pub fn offline_sentinel(kind: ResourceKind, now: DateTime<Utc>) -> Self {
        let mut details = BTreeMap::new();
        details.insert("platform".to_string(), json!(kind.platform()));
        details.insert("status".to_string(), json!("Offline evaluation"));
        details.insert(
            "restrictions".to_string(),
            json!("Unable to determine (offline)"),
        );

        Self {
            license_type: OFFLINE_LICENSE.to_string(),
            is_licensed_content: None,
            access_info: None,
            offline_available: true,
            last_updated: now,
            details,
        }
    }

    /// Platform label from the details map
    pub fn platform(&self) -> Option<&str> {
        self.details.get("platform").and_then(Value::as_str)
    }
}
