//! Core domain types for the currency-conversion webhook service.
//!
//! This crate defines the vocabulary shared by the HTTP surface and the
//! rate-service client: validated [`CurrencyCode`]s, the
//! [`ConversionRequest`]/[`Conversion`] pair describing one lookup, and the
//! fixed [`Reply`] set the bot answers with.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod conversion;
pub mod currency;
pub mod reply;

pub use conversion::{Conversion, ConversionRequest};
pub use currency::{CurrencyCode, ParseCurrencyError};
pub use reply::Reply;
