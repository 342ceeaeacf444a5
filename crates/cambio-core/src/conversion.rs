//! Conversion requests and their results.

use crate::currency::CurrencyCode;

/// A single currency conversion to perform against the rate service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    /// Amount in the source currency.
    pub amount: f64,
    /// Currency the amount is denominated in.
    pub source: CurrencyCode,
    /// Currency to convert into.
    pub target: CurrencyCode,
}

/// A completed conversion, as reported by the rate service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    /// The request that produced this result.
    pub request: ConversionRequest,
    /// Amount in the target currency.
    pub converted_amount: f64,
}

impl Conversion {
    /// Renders the user-facing reply line for this conversion.
    ///
    /// Amounts are rendered with `f64`'s `Display`, which picks the shortest
    /// representation that round-trips: `10`, not `10.0`.
    pub fn fulfillment_text(&self) -> String {
        format!(
            "💱 {} {} = {} {}",
            self.request.amount, self.request.source, self.converted_amount, self.request.target
        )
    }
}
