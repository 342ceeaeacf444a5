//! HTTP request handlers for the webhook service.
//!
//! Handlers follow a consistent pattern:
//! - Tolerant input parsing with precise diagnostics
//! - Tracing for observability
//! - Responses in the shape the conversational platform expects
//!
//! # Handler Organization
//!
//! Handlers are grouped by functionality:
//! - `convert` - The conversion-intent webhook endpoint
//! - `health` - Availability banner and liveness probe
//!
//! # Error Handling
//!
//! The webhook endpoint never surfaces an error status for bad input or
//! upstream failures; both degrade to fixed fulfillment texts with HTTP
//! 200, because the conversational platform treats anything else as a
//! broken integration.

pub mod convert;
pub mod health;

// Re-export handlers for convenient access
pub use convert::handle_webhook;
pub use health::{availability, health_check};
