use std::io;

use thiserror::Error;

/// Errors from device gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The device was unreachable at connect time.
    #[error("failed to connect to device at {endpoint}: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    /// An I/O fault while reading from a connected device.
    #[error("failed to read from device: {0}")]
    Read(#[from] io::Error),

    /// The device answered, but not with a parseable reading.
    #[error("malformed device reading: {0:?}")]
    MalformedReading(String),
}

/// Result alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;
