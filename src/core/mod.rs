//! Core invoice types, totals, validation, and numbering.
//!
//! Line items, VAT buckets, and the totals calculation used by the invoice
//! create/update handlers.

pub mod currencies;
mod error;
mod grouping;
mod numbering;
mod totals;
mod types;
mod validation;

pub use currencies::{HOME_CURRENCY, is_home_currency, is_known_currency_code};
pub use error::*;
pub use grouping::*;
pub use numbering::*;
pub use totals::*;
pub use types::*;
pub use validation::*;
