//! The bot's reply vocabulary.

use crate::conversion::Conversion;

/// Reply shown to the user after not understanding the request parameters.
pub const MISUNDERSTOOD_TEXT: &str = "Sorry, I couldn't understand the currencies.";

/// Reply shown to the user when the rate service could not answer.
pub const UNAVAILABLE_TEXT: &str =
    "Sorry, I couldn't fetch the conversion right now. Please try again later.";

/// Outcome of handling one webhook call, as shown to the user.
///
/// The webhook contract is to always answer HTTP 200 with a fulfillment
/// text; failures fold into one of two fixed apologies instead of an error
/// status.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The conversion succeeded; reply with the formatted rate line.
    Conversion(Conversion),
    /// The request parameters were missing or unusable.
    Misunderstood,
    /// The rate service failed to provide an answer.
    Unavailable,
}

impl Reply {
    /// The fulfillment text sent back to the conversational platform.
    pub fn text(&self) -> String {
        match self {
            Self::Conversion(conversion) => conversion.fulfillment_text(),
            Self::Misunderstood => MISUNDERSTOOD_TEXT.to_string(),
            Self::Unavailable => UNAVAILABLE_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::ConversionRequest;

    #[test]
    fn conversion_reply_uses_formatted_line() {
        let reply = Reply::Conversion(Conversion {
            request: ConversionRequest {
                amount: 10.0,
                source: "USD".parse().unwrap(),
                target: "EUR".parse().unwrap(),
            },
            converted_amount: 9.3,
        });
        assert_eq!(reply.text(), "💱 10 USD = 9.3 EUR");
    }

    #[test]
    fn misunderstood_reply_is_fixed() {
        assert_eq!(
            Reply::Misunderstood.text(),
            "Sorry, I couldn't understand the currencies."
        );
    }

    #[test]
    fn unavailable_reply_is_fixed() {
        assert_eq!(
            Reply::Unavailable.text(),
            "Sorry, I couldn't fetch the conversion right now. Please try again later."
        );
    }
}
