//! Device gateway for the twinrepo digital-twin repository.
//!
//! Some resolvable paths point at live values that are not backed by stored
//! entities — most prominently the chiller temperature. This crate provides
//! the seam between the resolver and such devices:
//!
//! - [`DeviceGateway`] — the trait the resolver consumes
//! - [`ChillerConnection`] — a line-protocol TCP client with an explicit
//!   connect/read/close lifecycle; the connection is released on every exit
//!   path via `Drop`
//! - [`FixedGateway`] — in-memory implementation for tests and demo runs
//! - [`GatewayConfig`] — endpoint and timeout configuration
//!
//! Gateway calls may block on I/O. Callers must not hold any catalog lock
//! while waiting on the gateway.

pub mod chiller;
pub mod config;
pub mod error;
pub mod fixed;
pub mod traits;

pub use chiller::ChillerConnection;
pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use fixed::FixedGateway;
pub use traits::DeviceGateway;
