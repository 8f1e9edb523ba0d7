//! Exchange rates from the Czech National Bank daily rate sheet.
//!
//! Resolves CZK per one unit of a foreign currency for today or a past day.
//! The home currency short-circuits to 1 without network access.
//!
//! # Example
//!
//! ```ignore
//! use faktorio::rates::*;
//!
//! let client = CnbClient::new(CnbConfig::from_env()?)?;
//! let eur = client.get_exchange_rate(&ExchangeRateQuery::new("EUR")).await?;
//! ```

mod client;
mod config;
mod error;
mod sheet;

pub use client::{CnbClient, ExchangeRateQuery, date_param, get_cnb_exchange_rate};
pub use config::{CNB_DAILY_URL, CnbConfig};
pub use error::RateError;
pub use sheet::{RateRow, RateSheet, parse_czech_decimal};
