use thiserror::Error;

/// Errors from the exchange-rate resolver.
///
/// A currency missing from the rate sheet is not an error; it resolves to
/// `Ok(None)`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RateError {
    /// Transport failure while fetching the rate sheet.
    #[error("CNB network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The rate sheet endpoint answered with a non-success status.
    #[error("CNB returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Invalid resolver configuration.
    #[error("CNB config error: {0}")]
    Config(String),
}
