//! TCP client for the chiller's line-protocol sensor endpoint.
//!
//! The device speaks a trivial request/response protocol: the client sends
//! `READ temperature\n` and the device answers with one line containing the
//! reading as a decimal float. One connection is acquired at process start
//! and shared by all workers; it is released on every exit path, including
//! panics, via `Drop`.

use std::io::{self, BufRead, BufReader, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::sync::Mutex;

use tracing::{debug, info, warn};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::traits::DeviceGateway;

/// A live connection to the chiller device.
pub struct ChillerConnection {
    stream: Mutex<BufReader<TcpStream>>,
    endpoint: SocketAddr,
}

impl ChillerConnection {
    /// Connect to the device described by `config`.
    ///
    /// Fails with [`GatewayError::Connection`] if the device is unreachable
    /// within the configured connect timeout.
    pub fn connect(config: &GatewayConfig) -> GatewayResult<Self> {
        let connection_error = |source: io::Error| GatewayError::Connection {
            endpoint: config.endpoint.to_string(),
            source,
        };

        let stream = TcpStream::connect_timeout(&config.endpoint, config.connect_timeout)
            .map_err(connection_error)?;
        stream
            .set_read_timeout(Some(config.read_timeout))
            .map_err(connection_error)?;
        stream
            .set_write_timeout(Some(config.read_timeout))
            .map_err(connection_error)?;

        info!(endpoint = %config.endpoint, "connected to chiller");
        Ok(Self {
            stream: Mutex::new(BufReader::new(stream)),
            endpoint: config.endpoint,
        })
    }

    /// Release the connection.
    ///
    /// Dropping the connection has the same effect; `close` exists so call
    /// sites can make the end of the device's lifetime explicit.
    pub fn close(self) {}
}

impl Drop for ChillerConnection {
    fn drop(&mut self) {
        if let Ok(reader) = self.stream.lock() {
            if let Err(e) = reader.get_ref().shutdown(Shutdown::Both) {
                warn!(endpoint = %self.endpoint, error = %e, "chiller shutdown failed");
            } else {
                debug!(endpoint = %self.endpoint, "chiller connection closed");
            }
        }
    }
}

impl DeviceGateway for ChillerConnection {
    fn read_temperature(&self) -> GatewayResult<f64> {
        let mut reader = self.stream.lock().expect("lock poisoned");
        reader.get_mut().write_all(b"READ temperature\n")?;

        let mut line = String::new();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            return Err(GatewayError::Read(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "device closed the connection",
            )));
        }

        let text = line.trim();
        let reading: f64 = text
            .parse()
            .map_err(|_| GatewayError::MalformedReading(text.to_string()))?;
        debug!(endpoint = %self.endpoint, reading, "chiller temperature read");
        Ok(reading)
    }
}

impl std::fmt::Debug for ChillerConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChillerConnection")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
