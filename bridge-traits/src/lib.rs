//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host
//! environment running the evaluation engine.
//!
//! ## Overview
//!
//! This crate defines the contract between the evaluation core and
//! host-specific implementations. Each trait represents a capability the core
//! requires but that is provided differently per host (desktop daemon,
//! embedded service, test harness).
//!
//! ## Traits
//!
//! - [`HttpClient`](http::HttpClient) - Async HTTP operations with retry and TLS
//! - [`NetworkMonitor`](network::NetworkMonitor) - Connectivity snapshot
//! - [`ReportStore`](storage::ReportStore) - Durable key-value report storage
//! - [`Clock`](time::Clock) - Time source for deterministic testing
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type.
//! Implementations should convert host-specific errors to `BridgeError` and
//! provide actionable messages.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` bounds to support safe concurrent
//! usage across async tasks.

pub mod error;
pub mod http;
pub mod network;
pub mod storage;
pub mod time;

pub use error::BridgeError;

// Re-export commonly used types
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, RetryPolicy};
pub use network::{NetworkInfo, NetworkMonitor, NetworkStatus};
pub use storage::ReportStore;
pub use time::{Clock, SystemClock};
