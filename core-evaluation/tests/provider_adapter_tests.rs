//! Integration tests for the license provider adapter
//!
//! These tests verify:
//! - Degrade-in-place behavior for every failure class
//! - Session cache behavior (hits, and that degraded results are not cached)
//! - Normalization defaults for absent provider fields

use bridge_traits::error::BridgeError;
use bridge_traits::http::{HttpClient, HttpRequest, HttpResponse};
use bridge_traits::time::Clock;
use bytes::Bytes;
use chrono::{DateTime, TimeZone, Utc};
use core_evaluation::adapter::LicenseProviderAdapter;
use core_evaluation::classify::ResourceKind;
use core_evaluation::error::EvaluationError;
use core_evaluation::license::{DOCUMENT_LICENSE_FALLBACK, VIDEO_LICENSE_FALLBACK};
use mockall::mock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

mock! {
    pub Http {}

    #[async_trait::async_trait]
    impl HttpClient for Http {
        async fn execute(
            &self,
            request: HttpRequest,
        ) -> bridge_traits::error::Result<HttpResponse>;
    }
}

/// Clock pinned to a fixed instant so license info compares exactly
struct FixedClock(DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn ok_response(body: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        headers: HashMap::new(),
        body: Bytes::from(body.to_string()),
    }
}

fn error_response(status: u16) -> HttpResponse {
    HttpResponse {
        status,
        headers: HashMap::new(),
        body: Bytes::from_static(b"{}"),
    }
}

fn adapter_with(http: MockHttp) -> LicenseProviderAdapter {
    LicenseProviderAdapter::new(
        Arc::new(http),
        Arc::new(FixedClock::default()),
        "yt-key".to_string(),
        "books-key".to_string(),
        16,
        Duration::from_secs(5),
    )
}

const VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
const BOOK_URL: &str = "https://books.google.com/books?id=zyTCAlFPjgYC";

const VIDEO_JSON: &str = r#"{
    "items": [{
        "status": {
            "license": "creativeCommon",
            "embeddable": true,
            "privacyStatus": "public"
        },
        "contentDetails": {"licensedContent": true}
    }]
}"#;

#[tokio::test]
async fn test_other_kind_returns_unknown_without_network_call() {
    // No expectations set: any HTTP call would panic the mock
    let adapter = adapter_with(MockHttp::new());

    let info = adapter
        .fetch_license("https://example.org/course", ResourceKind::Other)
        .await;

    assert_eq!(info.license_type, "Unknown license");
    assert_eq!(info.platform(), Some("Unknown"));
    assert_eq!(adapter.cached_licenses().await, 0);
}

#[tokio::test]
async fn test_video_fetch_surfaces_provider_values() {
    let mut http = MockHttp::new();
    http.expect_execute()
        .withf(|req| req.url.contains("id=dQw4w9WgXcQ") && req.url.contains("key=yt-key"))
        .times(1)
        .returning(|_| Ok(ok_response(VIDEO_JSON)));

    let adapter = adapter_with(http);
    let info = adapter.fetch_license(VIDEO_URL, ResourceKind::Video).await;

    assert_eq!(info.license_type, "creativeCommon");
    assert_eq!(info.is_licensed_content, Some(true));
    assert_eq!(info.platform(), Some("YouTube"));
    assert_eq!(
        info.details.get("allowEmbed"),
        Some(&serde_json::json!(true))
    );
    assert_eq!(
        info.details.get("privacyStatus"),
        Some(&serde_json::json!("public"))
    );
}

#[tokio::test]
async fn test_video_fetch_applies_defaults_for_absent_fields() {
    let mut http = MockHttp::new();
    http.expect_execute()
        .times(1)
        .returning(|_| Ok(ok_response(r#"{"items": [{}]}"#)));

    let adapter = adapter_with(http);
    let info = adapter.fetch_license(VIDEO_URL, ResourceKind::Video).await;

    assert_eq!(info.license_type, "Standard YouTube License");
    assert_eq!(info.is_licensed_content, Some(false));
    assert_eq!(
        info.details.get("allowEmbed"),
        Some(&serde_json::json!(false))
    );
    assert_eq!(
        info.details.get("privacyStatus"),
        Some(&serde_json::json!("unknown"))
    );
}

#[tokio::test]
async fn test_session_cache_suppresses_duplicate_calls() {
    let mut http = MockHttp::new();
    http.expect_execute()
        .times(1)
        .returning(|_| Ok(ok_response(VIDEO_JSON)));

    let adapter = adapter_with(http);

    let first = adapter.fetch_license(VIDEO_URL, ResourceKind::Video).await;
    let second = adapter.fetch_license(VIDEO_URL, ResourceKind::Video).await;

    assert_eq!(first, second);
    assert_eq!(adapter.cached_licenses().await, 1);
}

#[tokio::test]
async fn test_missing_identifier_is_a_fetch_failure() {
    let adapter = adapter_with(MockHttp::new());

    let err = adapter
        .try_fetch_license("https://www.youtube.com/", ResourceKind::Video)
        .await
        .unwrap_err();
    assert!(matches!(err, EvaluationError::MissingIdentifier(_)));

    let info = adapter
        .fetch_license("https://www.youtube.com/", ResourceKind::Video)
        .await;
    assert_eq!(info.license_type, VIDEO_LICENSE_FALLBACK);
}

#[tokio::test]
async fn test_http_error_degrades_to_video_fallback() {
    let mut http = MockHttp::new();
    http.expect_execute()
        .times(1)
        .returning(|_| Ok(error_response(500)));

    let adapter = adapter_with(http);
    let info = adapter.fetch_license(VIDEO_URL, ResourceKind::Video).await;

    assert_eq!(info.license_type, VIDEO_LICENSE_FALLBACK);
    assert_eq!(info.is_licensed_content, None);
    assert_eq!(info.platform(), Some("YouTube"));
    assert_eq!(info.details.get("allowEmbed"), Some(&serde_json::Value::Null));
}

#[tokio::test]
async fn test_video_not_found_and_network_failure_are_equivalent() {
    let mut http = MockHttp::new();
    http.expect_execute()
        .times(1)
        .returning(|_| Ok(ok_response(r#"{"items": []}"#)));
    http.expect_execute()
        .times(1)
        .returning(|_| Err(BridgeError::OperationFailed("Request timed out".to_string())));

    let adapter = adapter_with(http);

    let not_found = adapter.fetch_license(VIDEO_URL, ResourceKind::Video).await;
    let timed_out = adapter.fetch_license(VIDEO_URL, ResourceKind::Video).await;

    // Both failure classes collapse to the same fallback outcome
    assert_eq!(not_found, timed_out);
    assert_eq!(not_found.license_type, VIDEO_LICENSE_FALLBACK);
}

#[tokio::test]
async fn test_degraded_results_are_not_cached() {
    let mut http = MockHttp::new();
    http.expect_execute()
        .times(1)
        .returning(|_| Ok(error_response(503)));
    http.expect_execute()
        .times(1)
        .returning(|_| Ok(ok_response(VIDEO_JSON)));

    let adapter = adapter_with(http);

    let degraded = adapter.fetch_license(VIDEO_URL, ResourceKind::Video).await;
    assert_eq!(degraded.license_type, VIDEO_LICENSE_FALLBACK);
    assert_eq!(adapter.cached_licenses().await, 0);

    // The next call retries the provider instead of serving the fallback
    let fresh = adapter.fetch_license(VIDEO_URL, ResourceKind::Video).await;
    assert_eq!(fresh.license_type, "creativeCommon");
    assert_eq!(adapter.cached_licenses().await, 1);
}

#[tokio::test]
async fn test_document_fetch_full_normalization() {
    let mut http = MockHttp::new();
    http.expect_execute()
        .withf(|req| req.url.contains("/volumes/zyTCAlFPjgYC") && req.url.contains("key=books-key"))
        .times(1)
        .returning(|_| {
            Ok(ok_response(
                r#"{
                    "accessInfo": {
                        "viewability": "PARTIAL",
                        "epub": {"isAvailable": true},
                        "accessViewStatus": "SAMPLE",
                        "publicDomain": false,
                        "country": "US",
                        "quoteSharingAllowed": true
                    },
                    "volumeInfo": {
                        "description": "licensed under Creative Commons CC BY-SA 4.0"
                    }
                }"#,
            ))
        });

    let adapter = adapter_with(http);
    let info = adapter.fetch_license(BOOK_URL, ResourceKind::Document).await;

    assert_eq!(info.license_type, "CC BY-SA");
    let access = info.access_info.as_ref().unwrap();
    assert_eq!(access.viewability, "PARTIAL");
    assert!(access.download_available);
    assert_eq!(access.access_view_status, "SAMPLE");
    assert!(!access.public_domain);
    assert_eq!(info.platform(), Some("Google Books"));
    assert_eq!(info.details.get("country"), Some(&serde_json::json!("US")));
    assert!(!info.offline_available);
}

#[tokio::test]
async fn test_document_missing_access_info_degrades() {
    let mut http = MockHttp::new();
    http.expect_execute()
        .times(1)
        .returning(|_| Ok(ok_response(r#"{"volumeInfo": {}}"#)));

    let adapter = adapter_with(http);

    let err = adapter
        .try_fetch_license(BOOK_URL, ResourceKind::Document)
        .await
        .unwrap_err();
    assert!(matches!(err, EvaluationError::MissingItem(_)));
}

#[tokio::test]
async fn test_document_fallback_shape() {
    let mut http = MockHttp::new();
    http.expect_execute()
        .times(1)
        .returning(|_| Err(BridgeError::OperationFailed("Connection failed".to_string())));

    let adapter = adapter_with(http);
    let info = adapter.fetch_license(BOOK_URL, ResourceKind::Document).await;

    assert_eq!(info.license_type, DOCUMENT_LICENSE_FALLBACK);
    let access = info.access_info.as_ref().unwrap();
    assert_eq!(access.viewability, "NO_PAGES");
    assert_eq!(access.access_view_status, "NONE");
    assert_eq!(info.platform(), Some("Google Books"));
    assert_eq!(
        info.details.get("country"),
        Some(&serde_json::json!("unknown"))
    );
}

#[tokio::test]
async fn test_degradation_always_yields_well_formed_info() {
    // Every degraded shape still carries type, lastUpdated and platform
    let mut http = MockHttp::new();
    http.expect_execute()
        .returning(|_| Err(BridgeError::OperationFailed("down".to_string())));

    let adapter = adapter_with(http);

    for (url, kind) in [
        (VIDEO_URL, ResourceKind::Video),
        (BOOK_URL, ResourceKind::Document),
        ("https://example.org", ResourceKind::Other),
    ] {
        let info = adapter.fetch_license(url, kind).await;
        assert!(!info.license_type.is_empty());
        assert!(info.platform().is_some());
        assert_eq!(info.last_updated, FixedClock::default().now());
    }
}
