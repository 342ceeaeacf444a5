//! Outbound client for the Frankfurter currency-rate API.
//!
//! This crate performs the single upstream call the webhook service needs:
//! convert an amount between two currencies with one GET against the
//! `/latest` endpoint. There is no retry, caching, or rate-limiting layer;
//! each lookup is issued once and every failure is categorized into a
//! [`RatesError`] variant so the webhook layer can log a precise diagnostic
//! while answering the user with its own fallback text.
//!
//! # Example
//!
//! ```no_run
//! use cambio_core::ConversionRequest;
//! use cambio_rates::{RatesClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = RatesClient::with_defaults()?;
//!
//! let request = ConversionRequest {
//!     amount: 10.0,
//!     source: "USD".parse().unwrap(),
//!     target: "EUR".parse().unwrap(),
//! };
//!
//! let conversion = client.convert(&request).await?;
//! println!("{}", conversion.fulfillment_text());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

// Re-export main public API
pub use client::{ClientConfig, RatesClient};
pub use error::{RatesError, Result};

/// Base URL of the public Frankfurter API.
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

/// Default HTTP request timeout for rate lookups, in seconds.
///
/// Kept well below the server's inbound request timeout so a slow upstream
/// degrades to the fallback reply instead of stalling the webhook call.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
