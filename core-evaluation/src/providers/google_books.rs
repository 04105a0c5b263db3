//! Google Books API Client
//!
//! Provides integration with the Google Books API v1 for fetching volume
//! access and license metadata.
//!
//! ## API Endpoints
//!
//! - **Volumes**: `https://www.googleapis.com/books/v1/volumes/{id}?key={key}`
//!
//! ## Consumed Fields
//!
//! Only `accessInfo.{viewability, epub.isAvailable, accessViewStatus,
//! publicDomain, country, quoteSharingAllowed}` and
//! `volumeInfo.{license, description}` are read; everything else in the
//! response is ignored.

use crate::error::{EvaluationError, Result};
use crate::license::{AccessInfo, LicenseInfo};
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use bridge_traits::time::Clock;
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Google Books API base URL
const BOOKS_API_BASE: &str = "https://www.googleapis.com/books/v1";

/// Creative-Commons markers, most specific first. Scanning in this order is
/// what lets "CC BY-SA 4.0" resolve to `CC BY-SA` instead of `CC BY`.
const CC_MARKERS: &[&str] = &[
    "CC BY-NC-SA",
    "CC BY-NC-ND",
    "CC BY-SA",
    "CC BY-ND",
    "CC BY-NC",
    "CC BY",
];

/// Volume response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeResponse {
    access_info: Option<AccessInfoPayload>,
    #[serde(default)]
    volume_info: VolumeInfoPayload,
}

/// Access info section
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccessInfoPayload {
    viewability: Option<String>,
    epub: Option<EpubAvailability>,
    access_view_status: Option<String>,
    public_domain: Option<bool>,
    country: Option<String>,
    quote_sharing_allowed: Option<bool>,
}

/// Epub availability flag
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EpubAvailability {
    is_available: Option<bool>,
}

/// Volume info section
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfoPayload {
    license: Option<String>,
    description: Option<String>,
}

/// Google Books API client
///
/// Fetches volume access metadata and normalizes it into [`LicenseInfo`].
pub struct GoogleBooksClient {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    clock: Arc<dyn Clock>,
    request_timeout: Duration,
}

impl GoogleBooksClient {
    /// Creates a new Google Books API client
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `api_key` - Books API key
    /// * `clock` - Time source for `lastUpdated` stamps
    /// * `request_timeout` - Timeout applied to every request
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        api_key: String,
        clock: Arc<dyn Clock>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            http_client,
            api_key,
            clock,
            request_timeout,
        }
    }

    /// Fetches license metadata for a volume by identifier
    pub async fn fetch_by_id(&self, volume_id: &str) -> Result<LicenseInfo> {
        let url = format!(
            "{}/volumes/{}?key={}",
            BOOKS_API_BASE,
            urlencoding::encode(volume_id),
            urlencoding::encode(&self.api_key)
        );

        debug!(volume_id = volume_id, "Querying volume metadata");

        let request = HttpRequest::new(HttpMethod::Get, url)
            .header("Accept", "application/json")
            .timeout(self.request_timeout);

        let response = self.http_client.execute(request).await.map_err(|e| {
            EvaluationError::Network(format!("Volume metadata request failed: {}", e))
        })?;

        if !response.is_success() {
            return Err(EvaluationError::Http {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).to_string(),
            });
        }

        let parsed: VolumeResponse = serde_json::from_slice(&response.body).map_err(|e| {
            EvaluationError::JsonParse(format!("Failed to parse volume response: {}", e))
        })?;

        let access = parsed.access_info.ok_or_else(|| {
            EvaluationError::MissingItem(format!("Book information not available: {}", volume_id))
        })?;

        Ok(self.normalize(access, parsed.volume_info))
    }

    /// Normalize a volume into license info, applying the documented defaults
    /// for absent fields
    fn normalize(&self, access: AccessInfoPayload, volume: VolumeInfoPayload) -> LicenseInfo {
        let license_type = determine_license(&access, &volume);

        let access_info = AccessInfo {
            viewability: access.viewability.unwrap_or_else(|| "NO_PAGES".to_string()),
            download_available: access
                .epub
                .and_then(|epub| epub.is_available)
                .unwrap_or(false),
            access_view_status: access
                .access_view_status
                .unwrap_or_else(|| "NONE".to_string()),
            public_domain: access.public_domain.unwrap_or(false),
        };

        let mut details = BTreeMap::new();
        details.insert("platform".to_string(), json!("Google Books"));
        details.insert(
            "country".to_string(),
            json!(access.country.unwrap_or_else(|| "unknown".to_string())),
        );
        details.insert(
            "quoteSharingAllowed".to_string(),
            json!(access.quote_sharing_allowed.unwrap_or(false)),
        );

        LicenseInfo {
            license_type,
            is_licensed_content: None,
            access_info: Some(access_info),
            offline_available: false,
            last_updated: self.clock.now(),
            details,
        }
    }
}

/// Determine the license label for a volume
///
/// Priority: public-domain flag, explicit license field, Creative-Commons
/// marker in the description, raw access-view-status, "Unknown License".
fn determine_license(access: &AccessInfoPayload, volume: &VolumeInfoPayload) -> String {
    if access.public_domain.unwrap_or(false) {
        return "Public Domain".to_string();
    }

    if let Some(license) = &volume.license {
        return license.clone();
    }

    if let Some(description) = &volume.description {
        if description.to_lowercase().contains("creative commons") {
            return extract_creative_commons_license(description);
        }
    }

    match &access.access_view_status {
        Some(status) => status.clone(),
        None => "Unknown License".to_string(),
    }
}

/// Scan a description for the most specific Creative-Commons marker
fn extract_creative_commons_license(text: &str) -> String {
    let lower = text.to_lowercase();

    for marker in CC_MARKERS {
        if lower.contains(&marker.to_lowercase()) {
            return marker.to_string();
        }
    }

    "Creative Commons (Unspecified)".to_string()
}

/// Extract the volume identifier from the `id=` query parameter
///
/// Returns `None` when the parameter is absent or empty.
pub fn extract_volume_id(url: &str) -> Option<String> {
    let pos = url.find("id=")?;
    let rest = &url[pos + 3..];
    let end = rest.find('&').unwrap_or(rest.len());
    let id = &rest[..end];

    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_volume_id() {
        assert_eq!(
            extract_volume_id("https://books.google.com/books?id=zyTCAlFPjgYC"),
            Some("zyTCAlFPjgYC".to_string())
        );
        assert_eq!(
            extract_volume_id("https://books.google.com/books?id=zyTCAlFPjgYC&printsec=frontcover"),
            Some("zyTCAlFPjgYC".to_string())
        );
    }

    #[test]
    fn test_extract_volume_id_missing_or_empty() {
        assert_eq!(extract_volume_id("https://books.google.com/books"), None);
        assert_eq!(extract_volume_id("https://books.google.com/books?id="), None);
        assert_eq!(extract_volume_id("https://books.google.com/books?id=&x=1"), None);
    }

    #[test]
    fn test_public_domain_wins() {
        let access = AccessInfoPayload {
            public_domain: Some(true),
            ..Default::default()
        };
        let volume = VolumeInfoPayload {
            license: Some("some-license".to_string()),
            ..Default::default()
        };

        assert_eq!(determine_license(&access, &volume), "Public Domain");
    }

    #[test]
    fn test_explicit_license_field_before_description() {
        let access = AccessInfoPayload::default();
        let volume = VolumeInfoPayload {
            license: Some("Open Publication License".to_string()),
            description: Some("licensed under Creative Commons CC BY 4.0".to_string()),
        };

        assert_eq!(determine_license(&access, &volume), "Open Publication License");
    }

    #[test]
    fn test_most_specific_cc_marker_wins() {
        let access = AccessInfoPayload::default();
        let volume = VolumeInfoPayload {
            license: None,
            description: Some("licensed under Creative Commons CC BY-SA 4.0".to_string()),
        };

        assert_eq!(determine_license(&access, &volume), "CC BY-SA");
    }

    #[test]
    fn test_unspecified_creative_commons() {
        let access = AccessInfoPayload::default();
        let volume = VolumeInfoPayload {
            license: None,
            description: Some("released under a Creative Commons license".to_string()),
        };

        assert_eq!(
            determine_license(&access, &volume),
            "Creative Commons (Unspecified)"
        );
    }

    #[test]
    fn test_access_view_status_fallback() {
        let access = AccessInfoPayload {
            access_view_status: Some("SAMPLE".to_string()),
            ..Default::default()
        };

        assert_eq!(
            determine_license(&access, &VolumeInfoPayload::default()),
            "SAMPLE"
        );
    }

    #[test]
    fn test_unknown_license_default() {
        assert_eq!(
            determine_license(&AccessInfoPayload::default(), &VolumeInfoPayload::default()),
            "Unknown License"
        );
    }

    #[test]
    fn test_response_parsing_reads_consumed_fields() {
        let raw = r#"{
            "accessInfo": {
                "viewability": "ALL_PAGES",
                "epub": {"isAvailable": true},
                "accessViewStatus": "FULL_PUBLIC_DOMAIN",
                "publicDomain": true,
                "country": "US",
                "quoteSharingAllowed": true
            },
            "volumeInfo": {"description": "A classic."}
        }"#;
        let parsed: VolumeResponse = serde_json::from_str(raw).unwrap();
        let access = parsed.access_info.unwrap();

        assert_eq!(access.viewability.as_deref(), Some("ALL_PAGES"));
        assert_eq!(access.epub.unwrap().is_available, Some(true));
        assert_eq!(access.public_domain, Some(true));
        assert_eq!(access.country.as_deref(), Some("US"));
    }
}
