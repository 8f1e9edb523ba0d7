use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::config::CnbConfig;
use super::error::RateError;
use super::sheet::RateSheet;
use crate::core::is_home_currency;

/// Exchange rate request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRateQuery {
    /// ISO 4217 code, e.g. "EUR".
    pub currency: String,
    /// Day to take the rate from (`YYYY-MM-DD`); today when absent.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl ExchangeRateQuery {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// The `date` query value for a sheet request, or `None` for today's sheet.
///
/// Only dates strictly before `today` select a historical sheet; today and
/// future dates fall back to the current one.
pub fn date_param(date: Option<NaiveDate>, today: NaiveDate) -> Option<String> {
    date.filter(|d| *d < today)
        .map(|d| d.format("%d.%m.%Y").to_string())
}

/// Client for the CNB daily rate sheet.
#[derive(Debug, Clone)]
pub struct CnbClient {
    http: reqwest::Client,
    config: CnbConfig,
}

impl CnbClient {
    pub fn new(config: CnbConfig) -> Result<Self, RateError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CnbConfig {
        &self.config
    }

    /// CZK per one unit of `query.currency`, using the server's UTC date as today.
    ///
    /// Returns `Ok(None)` when the currency is not on the sheet.
    ///
    /// # Errors
    ///
    /// - [`RateError::Network`] wraps a transport failure as-is, without retry.
    /// - [`RateError::Status`] is returned when the endpoint answers with a
    ///   non-success status; such a body is never parsed as a rate sheet.
    pub async fn get_exchange_rate(
        &self,
        query: &ExchangeRateQuery,
    ) -> Result<Option<Decimal>, RateError> {
        self.get_exchange_rate_on(query, Utc::now().date_naive())
            .await
    }

    /// Like [`get_exchange_rate`](Self::get_exchange_rate) with an explicit `today`.
    pub async fn get_exchange_rate_on(
        &self,
        query: &ExchangeRateQuery,
        today: NaiveDate,
    ) -> Result<Option<Decimal>, RateError> {
        if is_home_currency(&query.currency) {
            return Ok(Some(Decimal::ONE));
        }

        let sheet = self.fetch_sheet(date_param(query.date, today)).await?;
        let rate = sheet.rate_for(&query.currency);
        match rate {
            Some(rate) => debug!(currency = %query.currency, %rate, "resolved exchange rate"),
            None => warn!(currency = %query.currency, "currency not found on CNB rate sheet"),
        }
        Ok(rate)
    }

    /// The full rate sheet for `date` (today's sheet for today or future dates).
    pub async fn get_rate_sheet(&self, date: Option<NaiveDate>) -> Result<RateSheet, RateError> {
        self.fetch_sheet(date_param(date, Utc::now().date_naive()))
            .await
    }

    async fn fetch_sheet(&self, date: Option<String>) -> Result<RateSheet, RateError> {
        let url = &self.config.base_url;
        debug!(%url, date = date.as_deref().unwrap_or("today"), "fetching CNB rate sheet");

        let mut request = self.http.get(url);
        if let Some(date) = &date {
            request = request.query(&[("date", date)]);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!(%url, %status, "CNB rate sheet request failed");
            return Err(RateError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        let body = resp.text().await?;
        Ok(RateSheet::parse(&body))
    }
}

/// Resolve an exchange rate with the default [`CnbConfig`].
///
/// ```ignore
/// use faktorio::rates::*;
///
/// let rate = get_cnb_exchange_rate(&ExchangeRateQuery::new("EUR")).await?;
/// ```
pub async fn get_cnb_exchange_rate(
    query: &ExchangeRateQuery,
) -> Result<Option<Decimal>, RateError> {
    if is_home_currency(&query.currency) {
        return Ok(Some(Decimal::ONE));
    }
    CnbClient::new(CnbConfig::default())?
        .get_exchange_rate(query)
        .await
}
