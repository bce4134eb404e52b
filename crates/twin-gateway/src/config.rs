use std::net::SocketAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the chiller device connection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Address of the device's line-protocol endpoint.
    pub endpoint: SocketAddr,
    /// Maximum time to wait for the TCP connect.
    pub connect_timeout: Duration,
    /// Maximum time to wait for a single reading.
    pub read_timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: "127.0.0.1:9410".parse().unwrap(),
            connect_timeout: Duration::from_secs(5),
            read_timeout: Duration::from_secs(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = GatewayConfig::default();
        assert_eq!(c.endpoint, "127.0.0.1:9410".parse::<SocketAddr>().unwrap());
        assert_eq!(c.connect_timeout, Duration::from_secs(5));
        assert_eq!(c.read_timeout, Duration::from_secs(2));
    }
}
