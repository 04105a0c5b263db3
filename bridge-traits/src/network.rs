//! Network Monitoring Abstraction
//!
//! Provides the connectivity snapshot consumed by the evaluation engine.

use async_trait::async_trait;

use crate::error::Result;

/// Network connection status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkStatus {
    /// Connected to network
    Connected,
    /// Not connected to any network
    Disconnected,
    /// Connection status unknown or indeterminate
    Indeterminate,
}

/// Network information
#[derive(Debug, Clone)]
pub struct NetworkInfo {
    pub status: NetworkStatus,
}

/// Network monitor trait
///
/// The evaluation engine reads connectivity exactly once at the start of each
/// evaluation and treats the answer as a snapshot; it is never re-checked
/// mid-operation. An `Indeterminate` status is treated as offline, since the
/// engine can always fall back to cached or heuristic data.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::network::NetworkMonitor;
///
/// async fn data_sourcing_path(monitor: &dyn NetworkMonitor) -> &'static str {
///     if monitor.is_connected().await { "online" } else { "offline" }
/// }
/// ```
#[async_trait]
pub trait NetworkMonitor: Send + Sync {
    /// Get current network information
    async fn get_network_info(&self) -> Result<NetworkInfo>;

    /// Check if currently connected to any network
    async fn is_connected(&self) -> bool {
        matches!(
            self.get_network_info().await,
            Ok(NetworkInfo {
                status: NetworkStatus::Connected,
            })
        )
    }
}
