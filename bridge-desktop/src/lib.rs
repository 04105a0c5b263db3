//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! This crate provides production-ready implementations of the bridge traits
//! using desktop-appropriate libraries:
//! - `HttpClient` using `reqwest`
//! - `ReportStore` using a SQLite-backed key-value store
//! - `NetworkMonitor` using a TCP connectivity probe
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{ReqwestHttpClient, SqliteReportStore};
//! use bridge_traits::{HttpClient, ReportStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let http_client = ReqwestHttpClient::new();
//!     let store = SqliteReportStore::new("reports.db".into()).await.unwrap();
//!
//!     // Use in core configuration
//! }
//! ```

mod http;
mod network;
mod storage;

pub use http::ReqwestHttpClient;
pub use network::DesktopNetworkMonitor;
pub use storage::SqliteReportStore;
