//! Currency code parsing and normalization.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when a string cannot be parsed as a currency code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid currency code: {input:?}")]
pub struct ParseCurrencyError {
    /// The rejected input, as received.
    pub input: String,
}

/// A three-letter currency code, normalized to upper case.
///
/// Parsing is case-insensitive and ignores surrounding whitespace, so
/// `"usd"`, `" USD "` and `"Usd"` all yield the same code. Anything that is
/// not exactly three ASCII letters after trimming is rejected. No attempt is
/// made to check the code against the ISO 4217 table; the rate service is
/// the authority on which currencies actually exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Returns the upper-cased code as a string slice.
    pub fn as_str(&self) -> &str {
        // The constructor only admits ASCII letters.
        std::str::from_utf8(&self.0).expect("currency code is ASCII by construction")
    }
}

impl FromStr for CurrencyCode {
    type Err = ParseCurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();

        if bytes.len() != 3 || !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(ParseCurrencyError {
                input: s.to_string(),
            });
        }

        let mut code = [0u8; 3];
        for (dst, src) in code.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(Self(code))
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
