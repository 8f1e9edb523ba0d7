use std::fmt;

use thiserror::Error;

/// Errors raised by the invoicing core.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FaktorioError {
    /// The draft failed one or more checks of [`validate_draft`](super::validate_draft).
    #[error("invalid invoice: {0}")]
    Validation(String),

    /// The invoice number could not be continued.
    #[error("invoice numbering: {0}")]
    Numbering(String),
}

impl FaktorioError {
    /// Join the problems reported for a draft into one error.
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        let msg = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self::Validation(msg)
    }
}

/// Rule code: line has no VAT rate, or one that is not a Czech bucket.
pub const RULE_VAT_RATE: &str = "VAT-RATE";

/// Rule code: quantity or unit price outside the accepted magnitude.
pub const RULE_AMOUNT_RANGE: &str = "AMOUNT-RANGE";

/// One problem found on an invoice draft.
///
/// `field` is the path as the client sent it, e.g. `items.2.unit_price`, so
/// the form can highlight the input. Problems that concern the tax treatment
/// of a line rather than its shape carry a `rule` code ([`RULE_VAT_RATE`],
/// [`RULE_AMOUNT_RANGE`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub rule: Option<&'static str>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Tag the problem with a rule code.
    pub fn rule(mut self, code: &'static str) -> Self {
        self.rule = Some(code);
        self
    }
}

impl fmt::Display for ValidationError {
    /// `items.0.vat_rate: VAT rate is missing (VAT-RATE)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        match self.rule {
            Some(code) => write!(f, " ({code})"),
            None => Ok(()),
        }
    }
}
