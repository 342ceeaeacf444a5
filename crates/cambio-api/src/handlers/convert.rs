//! Conversion-intent webhook handler.
//!
//! Accepts Dialogflow webhook calls, extracts the conversion parameters,
//! performs the rate lookup, and always answers HTTP 200 with a
//! fulfillment text the platform can read back to the user.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cambio_core::{ConversionRequest, Reply};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info, instrument};

use crate::AppState;

/// Webhook request envelope sent by the conversational platform.
///
/// Only the fields this service reads are modeled; the rest of the
/// (large) webhook payload is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebhookRequest {
    query_result: Option<QueryResult>,
}

#[derive(Debug, Deserialize)]
struct QueryResult {
    parameters: Option<Parameters>,
}

/// Intent parameters: an amount/currency pair plus the target currency.
#[derive(Debug, Deserialize)]
struct Parameters {
    #[serde(rename = "unit-currency")]
    unit_currency: Option<UnitCurrency>,
    #[serde(rename = "currency-name")]
    currency_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnitCurrency {
    currency: Option<String>,
    amount: Option<f64>,
}

/// Response body of the webhook: a single line of fulfillment text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Text the conversational platform reads back to the user.
    pub fulfillment_text: String,
}

impl From<Reply> for WebhookResponse {
    fn from(reply: Reply) -> Self {
        Self { fulfillment_text: reply.text() }
    }
}

/// Why the inbound parameters could not be turned into a conversion.
///
/// Every variant maps to the same "couldn't understand" reply; the
/// distinction only feeds the diagnostic log.
#[derive(Debug, Error)]
enum ExtractError {
    #[error("body could not be buffered: {0}")]
    Unreadable(#[from] BytesRejection),
    #[error("body is not a webhook document: {0}")]
    Body(#[from] serde_json::Error),
    #[error("missing queryResult.parameters")]
    MissingParameters,
    #[error("missing unit-currency.currency")]
    MissingSourceCurrency,
    #[error("missing unit-currency.amount")]
    MissingAmount,
    #[error("missing currency-name")]
    MissingTargetCurrency,
    #[error("unusable currency code: {0}")]
    Currency(#[from] cambio_core::ParseCurrencyError),
}

/// Handles the conversion-intent webhook on `POST /`.
///
/// The contract with the conversational platform is strict: every call is
/// answered with HTTP 200 and a `fulfillmentText`, whatever happens.
/// Unusable parameters and rate-service failures each degrade to their
/// own fixed apology text. The body is extracted fallibly so a body the
/// server refuses to buffer (over the size limit, or cut off mid-transfer)
/// folds into the apology path instead of surfacing as a 413.
#[instrument(
    name = "handle_webhook",
    skip(state, body),
    fields(body_bytes = body.as_ref().map_or(0, |b| b.len()))
)]
pub async fn handle_webhook(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    info!("Processing conversion webhook request");

    let extracted = body.map_err(ExtractError::from).and_then(|body| extract_request(&body));

    let reply = match extracted {
        Ok(request) => match state.rates.convert(&request).await {
            Ok(conversion) => {
                info!(
                    from = %conversion.request.source,
                    to = %conversion.request.target,
                    converted = conversion.converted_amount,
                    "Conversion completed"
                );
                Reply::Conversion(conversion)
            },
            Err(e) => {
                error!(
                    error = %e,
                    from = %request.source,
                    to = %request.target,
                    "Rate lookup failed"
                );
                Reply::Unavailable
            },
        },
        Err(e) => {
            debug!(error = %e, "Webhook request rejected");
            Reply::Misunderstood
        },
    };

    (StatusCode::OK, Json(WebhookResponse::from(reply))).into_response()
}

/// Extracts a conversion request from the raw webhook body.
///
/// The body is parsed manually rather than through an extractor so that
/// malformed JSON reaches the same fallback path as missing parameters
/// instead of producing a 4xx response.
fn extract_request(body: &[u8]) -> Result<ConversionRequest, ExtractError> {
    let webhook: WebhookRequest = serde_json::from_slice(body)?;

    let parameters = webhook
        .query_result
        .and_then(|q| q.parameters)
        .ok_or(ExtractError::MissingParameters)?;

    let unit_currency = parameters.unit_currency.ok_or(ExtractError::MissingSourceCurrency)?;
    let source = unit_currency.currency.ok_or(ExtractError::MissingSourceCurrency)?;
    let amount = unit_currency.amount.ok_or(ExtractError::MissingAmount)?;
    let target = parameters.currency_name.ok_or(ExtractError::MissingTargetCurrency)?;

    Ok(ConversionRequest { amount, source: source.parse()?, target: target.parse()? })
}
