//! In-memory gateway for tests and demo runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::error::GatewayResult;
use crate::traits::DeviceGateway;

/// A [`DeviceGateway`] that returns a settable fixed reading.
///
/// Used by unit tests and by demo runs without a physical device. The
/// read counter lets tests assert whether resolution touched the gateway
/// at all.
#[derive(Debug)]
pub struct FixedGateway {
    reading: Mutex<f64>,
    reads: AtomicUsize,
}

impl FixedGateway {
    /// Create a gateway that always answers with `reading`.
    pub fn new(reading: f64) -> Self {
        Self {
            reading: Mutex::new(reading),
            reads: AtomicUsize::new(0),
        }
    }

    /// Change the reading returned by subsequent reads.
    pub fn set_reading(&self, reading: f64) {
        *self.reading.lock().expect("lock poisoned") = reading;
    }

    /// Number of reads served so far.
    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Default for FixedGateway {
    /// The bench chiller's idle reading.
    fn default() -> Self {
        Self::new(198.4)
    }
}

impl DeviceGateway for FixedGateway {
    fn read_temperature(&self) -> GatewayResult<f64> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(*self.reading.lock().expect("lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_configured_reading() {
        let gateway = FixedGateway::new(21.5);
        assert_eq!(gateway.read_temperature().unwrap(), 21.5);

        gateway.set_reading(-3.0);
        assert_eq!(gateway.read_temperature().unwrap(), -3.0);
        assert_eq!(gateway.read_count(), 2);
    }

    #[test]
    fn default_matches_bench_chiller_idle() {
        assert_eq!(FixedGateway::default().read_temperature().unwrap(), 198.4);
    }
}
