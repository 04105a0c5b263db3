//! Time Abstraction
//!
//! Clock trait for deterministic testing of timestamp-bearing data.

use chrono::{DateTime, Utc};

/// Time source abstraction
///
/// Report timestamps (`lastUpdated`) go through this seam so tests can pin
/// time and compare reports field-for-field.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::time::{Clock, SystemClock};
///
/// fn stamp(clock: &dyn Clock) -> chrono::DateTime<chrono::Utc> {
///     clock.now()
/// }
/// ```
pub trait Clock: Send + Sync {
    /// Get current UTC time
    fn now(&self) -> DateTime<Utc>;

    /// Get current Unix timestamp in seconds
    fn unix_timestamp(&self) -> i64 {
        self.now().timestamp()
    }
}

/// System clock implementation using actual system time
#[derive(Debug, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
