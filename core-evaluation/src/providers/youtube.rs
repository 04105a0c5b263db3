//! YouTube Data API Client
//!
//! Provides integration with the YouTube Data API v3 for fetching video
//! license and status metadata.
//!
//! ## API Endpoints
//!
//! - **Videos**: `https://www.googleapis.com/youtube/v3/videos?part=status,contentDetails&id={id}&key={key}`
//!
//! ## Consumed Fields
//!
//! Only `items[0].status.{license, embeddable, privacyStatus}` and
//! `items[0].contentDetails.licensedContent` are read; everything else in the
//! response is ignored.
//!
//! ## API Key Requirement
//!
//! The Data API requires an API key for all requests.
//! Obtain one at: https://console.cloud.google.com/apis/credentials

use crate::error::{EvaluationError, Result};
use crate::license::LicenseInfo;
use bridge_traits::http::{HttpClient, HttpMethod, HttpRequest};
use bridge_traits::time::Clock;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// YouTube Data API base URL
const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

/// Length of a YouTube video identifier
const VIDEO_ID_LEN: usize = 11;

/// License label used when the provider omits the license field
const STANDARD_LICENSE: &str = "Standard YouTube License";

/// Video list response
#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

/// Single video resource
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    #[serde(default)]
    status: VideoStatus,
    #[serde(default)]
    content_details: ContentDetails,
}

/// Video status section
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatus {
    license: Option<String>,
    embeddable: Option<bool>,
    privacy_status: Option<String>,
}

/// Video content details section
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContentDetails {
    licensed_content: Option<bool>,
}

/// YouTube Data API client
///
/// Fetches video status metadata and normalizes it into [`LicenseInfo`].
pub struct YouTubeClient {
    http_client: Arc<dyn HttpClient>,
    api_key: String,
    clock: Arc<dyn Clock>,
    request_timeout: Duration,
}

impl YouTubeClient {
    /// Creates a new YouTube Data API client
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `api_key` - Data API key
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

    /// Fetches license metadata for a video by identifier
    ///
    /// A non-success status, a response lacking the expected item, and a
    /// transport error are all reported as errors of the same weight; the
    /// caller treats them identically.
    pub async fn fetch_by_id(&self, video_id: &str) -> Result<LicenseInfo> {
        let url = format!(
            "{}/videos?part=status,contentDetails&id={}&key={}",
            YOUTUBE_API_BASE,
            urlencoding::encode(video_id),
            urlencoding::encode(&self.api_key)
        );

        debug!(video_id = video_id, "Querying video metadata");

        let request = HttpRequest::new(HttpMethod::Get, url)
            .header("Accept", "application/json")
            .timeout(self.request_timeout);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|e| EvaluationError::Network(format!("Video metadata request failed: {}", e)))?;

        if !response.is_success() {
            return Err(EvaluationError::Http {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).to_string(),
            });
        }

        let parsed: VideoListResponse = serde_json::from_slice(&response.body).map_err(|e| {
            EvaluationError::JsonParse(format!("Failed to parse video response: {}", e))
        })?;

        let item = parsed
            .items
            .into_iter()
            .next()
            .ok_or_else(|| EvaluationError::MissingItem(format!("Video not found: {}", video_id)))?;

        Ok(self.normalize(item))
    }

    /// Normalize a video resource into license info, applying the documented
    /// defaults for absent fields
    fn normalize(&self, item: VideoItem) -> LicenseInfo {
        let mut details = BTreeMap::new();
        details.insert("platform".to_string(), json!("YouTube"));
        details.insert(
            "allowEmbed".to_string(),
            json!(item.status.embeddable.unwrap_or(false)),
        );
        details.insert(
            "privacyStatus".to_string(),
            Value::String(
                item.status
                    .privacy_status
                    .unwrap_or_else(|| "unknown".to_string()),
            ),
        );

        LicenseInfo {
            license_type: item
                .status
                .license
                .unwrap_or_else(|| STANDARD_LICENSE.to_string()),
            is_licensed_content: Some(item.content_details.licensed_content.unwrap_or(false)),
            access_info: None,
            offline_available: true,
            last_updated: self.clock.now(),
            details,
        }
    }
}

/// Extract the 11-character video identifier from any of the known URL shapes
/// (`watch?v=`, `&v=`, `youtu.be/`, `embed/`, `/v/`, `/u/<section>/`)
///
/// Returns `None` when no identifier of the expected length is present.
pub fn extract_video_id(url: &str) -> Option<String> {
    const MARKERS: &[&str] = &["watch?v=", "&v=", "youtu.be/", "embed/", "/v/"];

    for marker in MARKERS {
        if let Some(pos) = url.rfind(marker) {
            let token = leading_token(&url[pos + marker.len()..]);
            if token.len() == VIDEO_ID_LEN {
                return Some(token.to_string());
            }
        }
    }

    // Channel-style shape: /u/<section>/<id>
    if let Some(pos) = url.rfind("/u/") {
        let rest = &url[pos + 3..];
        if let Some(slash) = rest.find('/') {
            let token = leading_token(&rest[slash + 1..]);
            if token.len() == VIDEO_ID_LEN {
                return Some(token.to_string());
            }
        }
    }

    None
}

/// Slice up to the first query/fragment delimiter
fn leading_token(s: &str) -> &str {
    let end = s.find(['#', '&', '?']).unwrap_or(s.len());
    &s[..end]
}
