//! HTTP client for the Frankfurter currency-rate API.
//!
//! Handles request construction, response decoding, and error
//! categorization so the webhook layer can log precise diagnostics while
//! degrading to its fixed fallback reply.

use std::{collections::HashMap, time::Duration};

use cambio_core::{Conversion, ConversionRequest};
use serde::Deserialize;
use tracing::{info_span, Instrument};
use url::Url;

use crate::{
    error::{RatesError, Result},
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS,
};

/// Configuration for the rates client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the rate service, without the `/latest` path.
    pub base_url: String,
    /// Timeout applied to each lookup.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: "Cambio-Rate-Lookup/1.0".to_string(),
        }
    }
}

/// HTTP client for currency-rate lookups.
///
/// Uses connection pooling and a configurable timeout. Lookups are
/// single-shot: there is no retry layer, and every failure is categorized
/// into a [`RatesError`] variant for the caller to log.
#[derive(Debug, Clone)]
pub struct RatesClient {
    client: reqwest::Client,
    config: ClientConfig,
}

/// Response document of the rate service's `/latest` endpoint.
///
/// Only the `rates` mapping is read; the service also echoes `amount`,
/// `base` and `date`, which this client ignores.
#[derive(Debug, Deserialize)]
struct LatestRates {
    rates: HashMap<String, f64>,
}

impl RatesClient {
    /// Creates a new rates client with the given configuration.
    ///
    /// Surrounding whitespace in the base URL is trimmed before validation
    /// and storage, so requests are built from the validated form.
    ///
    /// # Errors
    ///
    /// Returns `RatesError::Configuration` if the base URL is not a valid
    /// http(s) URL or the HTTP client cannot be built.
    pub fn new(mut config: ClientConfig) -> Result<Self> {
        config.base_url = config.base_url.trim().to_string();

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            RatesError::configuration(format!("invalid base URL {:?}: {e}", config.base_url))
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(RatesError::configuration(format!(
                "unsupported base URL scheme {:?}",
                base_url.scheme()
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| RatesError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Creates a new rates client against the public Frankfurter API.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Converts an amount between two currencies.
    ///
    /// Issues a single GET against the `/latest` endpoint and reads the
    /// converted amount for the target currency out of the `rates` mapping.
    ///
    /// # Errors
    ///
    /// Returns categorized lookup errors:
    /// - `Network` for connection failures
    /// - `Timeout` for request timeouts
    /// - `ClientStatus` / `ServerStatus` for non-success responses
    /// - `MalformedResponse` if the body is not a rates document
    /// - `MissingRate` if the document lacks the target currency
    pub async fn convert(&self, request: &ConversionRequest) -> Result<Conversion> {
        let span = info_span!(
            "rate_lookup",
            amount = request.amount,
            from = %request.source,
            to = %request.target
        );

        async move {
            let url = format!("{}/latest", self.config.base_url.trim_end_matches('/'));

            let response = match self
                .client
                .get(&url)
                .query(&[
                    ("amount", request.amount.to_string()),
                    ("from", request.source.to_string()),
                    ("to", request.target.to_string()),
                ])
                .send()
                .await
            {
                Ok(response) => response,
                Err(e) => {
                    tracing::warn!("Rate request failed: {}", e);

                    if e.is_timeout() {
                        return Err(RatesError::timeout(self.config.timeout.as_secs()));
                    }
                    if e.is_connect() {
                        return Err(RatesError::network(format!("connection failed: {e}")));
                    }
                    return Err(RatesError::network(e.to_string()));
                },
            };

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(status = status.as_u16(), "Rate service returned error status");
                return Err(RatesError::status(status.as_u16()));
            }

            let document: LatestRates =
                response.json().await.map_err(|e| RatesError::malformed(e.to_string()))?;

            let target = request.target.as_str();
            let converted_amount = document
                .rates
                .get(target)
                .copied()
                .ok_or_else(|| RatesError::missing_rate(target))?;

            tracing::debug!(converted = converted_amount, "Rate lookup succeeded");

            Ok(Conversion { request: *request, converted_amount })
        }
        .instrument(span)
        .await
    }
}
