//! The [`DeviceGateway`] trait: the seam between resolution and devices.

use crate::error::GatewayResult;

/// A live data source queried during path resolution.
///
/// Implementations must be thread-safe (`Send + Sync`): one connection is
/// acquired at process start and shared by all request workers. Calls may
/// block on device I/O; implementations must not require the caller to
/// hold any other lock while waiting.
pub trait DeviceGateway: Send + Sync {
    /// The device's current temperature reading, in the device's unit.
    fn read_temperature(&self) -> GatewayResult<f64>;
}
