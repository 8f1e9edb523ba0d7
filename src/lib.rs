//! # faktorio
//!
//! Invoicing core for Czech small businesses: line items, VAT totals,
//! invoice numbering, and exchange rates from the Czech National Bank.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use faktorio::core::*;
//! use rust_decimal_macros::dec;
//!
//! let items = [
//!     InvoiceLineItem::new(dec!(2), dec!(100), dec!(21)),
//!     InvoiceLineItem::new(dec!(3), dec!(50), dec!(12)),
//! ];
//! let totals = get_invoice_sums(&items, dec!(25.1));
//!
//! assert_eq!(totals.subtotal, dec!(350));
//! assert_eq!(totals.total, dec!(410));
//! assert_eq!(totals.native_total, dec!(10291));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Line items, VAT totals, validation, numbering |
//! | `rates` | CNB exchange-rate resolver |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "rates")]
pub mod rates;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
