//! Currency-conversion webhook HTTP API.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod server;

pub use config::Config;
pub use server::{create_router, start_server};

use cambio_rates::RatesClient;

/// Shared application state available to request handlers.
///
/// Cloned by axum for each request; the rates client shares one connection
/// pool across all clones.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client used to query the currency-rate service.
    pub rates: RatesClient,
}

impl AppState {
    /// Creates application state around the given rates client.
    pub fn new(rates: RatesClient) -> Self {
        Self { rates }
    }
}
