//! Error types for rate lookups.
//!
//! Failures are categorized so the webhook layer can log a precise
//! diagnostic while answering the caller with its fixed fallback reply:
//! transport problems, upstream HTTP statuses, and undecodable or
//! incomplete response documents each get their own variant.

use thiserror::Error;

/// Result type alias for rate operations.
pub type Result<T> = std::result::Result<T, RatesError>;

/// Failures while querying the currency-rate service.
#[derive(Debug, Clone, Error)]
pub enum RatesError {
    /// Network-level connection failure.
    #[error("network connection failed: {message}")]
    Network {
        /// Description of the transport failure.
        message: String,
    },

    /// The request exceeded the configured timeout.
    #[error("request timeout after {timeout_seconds}s")]
    Timeout {
        /// Timeout that was exceeded, in seconds.
        timeout_seconds: u64,
    },

    /// The rate service answered with a 4xx status.
    ///
    /// Frankfurter uses 404 for unknown currencies, so an unsupported code
    /// that passed local validation surfaces here.
    #[error("rate service rejected the request: HTTP {status}")]
    ClientStatus {
        /// HTTP status code received.
        status: u16,
    },

    /// The rate service answered with a 5xx or otherwise unexpected status.
    #[error("rate service error: HTTP {status}")]
    ServerStatus {
        /// HTTP status code received.
        status: u16,
    },

    /// The response body could not be decoded as a rates document.
    #[error("malformed rates response: {message}")]
    MalformedResponse {
        /// Description of the decoding failure.
        message: String,
    },

    /// The response decoded but carried no rate for the requested currency.
    #[error("no rate for {target} in response")]
    MissingRate {
        /// Currency code the rate was requested for.
        target: String,
    },

    /// The client could not be constructed from its configuration.
    #[error("invalid rates client configuration: {message}")]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },
}

impl RatesError {
    /// Creates a network error with the given message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a timeout error for the given number of seconds.
    pub fn timeout(timeout_seconds: u64) -> Self {
        Self::Timeout { timeout_seconds }
    }

    /// Creates the status error matching the given HTTP status code.
    ///
    /// 4xx codes map to [`RatesError::ClientStatus`]; everything else that
    /// is not a success maps to [`RatesError::ServerStatus`].
    pub fn status(status: u16) -> Self {
        if (400..500).contains(&status) {
            Self::ClientStatus { status }
        } else {
            Self::ServerStatus { status }
        }
    }

    /// Creates a malformed-response error with the given message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Creates a missing-rate error for the given target currency.
    pub fn missing_rate(target: impl Into<String>) -> Self {
        Self::MissingRate {
            target: target.into(),
        }
    }

    /// Creates a configuration error with the given message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
