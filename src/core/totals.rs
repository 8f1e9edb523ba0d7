use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::types::{InvoiceLineItem, InvoiceTotals, VatRate};

/// Compute invoice totals from its line items.
///
/// `exchange_rate` is home-currency units per one unit of invoice currency.
/// Lines whose `vat_rate` is absent or not one of the [`VatRate`] buckets
/// count fully in `subtotal` and `total` but in no `vat_base_*` field and
/// carry no VAT. Nothing is rounded.
///
/// Never panics: sums and products that exceed the `Decimal` range saturate
/// at `Decimal::MAX` / `Decimal::MIN`. [`validate_draft`](super::validate_draft)
/// rejects amounts large enough to get there.
///
/// ```
/// use faktorio::core::*;
/// use rust_decimal_macros::dec;
///
/// let items = [
///     InvoiceLineItem::new(dec!(2), dec!(100), dec!(21)),
///     InvoiceLineItem::new(dec!(1), dec!(50), dec!(21)),
/// ];
/// let totals = get_invoice_sums(&items, dec!(1));
/// assert_eq!(totals.subtotal, dec!(250));
/// assert_eq!(totals.vat_21, dec!(52.5));
/// assert_eq!(totals.total, dec!(302.5));
/// ```
pub fn get_invoice_sums(items: &[InvoiceLineItem], exchange_rate: Decimal) -> InvoiceTotals {
    let mut totals = InvoiceTotals::default();

    for item in items {
        let amount = item.line_amount();
        totals.subtotal = totals.subtotal.saturating_add(amount);

        let base = match item.vat_bucket() {
            Some(VatRate::Standard21) => &mut totals.vat_base_21,
            Some(VatRate::Reduced15) => &mut totals.vat_base_15,
            Some(VatRate::Reduced12) => &mut totals.vat_base_12,
            Some(VatRate::Reduced10) => &mut totals.vat_base_10,
            Some(VatRate::Zero) => &mut totals.vat_base_0,
            None => continue,
        };
        *base = base.saturating_add(amount);
    }

    totals.vat_21 = vat_of(totals.vat_base_21, VatRate::Standard21);
    totals.vat_15 = vat_of(totals.vat_base_15, VatRate::Reduced15);
    totals.vat_12 = vat_of(totals.vat_base_12, VatRate::Reduced12);
    totals.vat_10 = vat_of(totals.vat_base_10, VatRate::Reduced10);

    totals.total = totals.subtotal.saturating_add(totals.vat_total());
    totals.native_subtotal = totals.subtotal.saturating_mul(exchange_rate);
    totals.native_total = totals.total.saturating_mul(exchange_rate);

    totals
}

fn vat_of(base: Decimal, rate: VatRate) -> Decimal {
    base.saturating_mul(rate.percent() / dec!(100))
}

/// Round half-up (away from zero at the midpoint), as used on Czech invoices.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

impl InvoiceTotals {
    /// Copy with every amount rounded half-up to `dp` decimal places, for display.
    pub fn rounded(&self, dp: u32) -> Self {
        let r = |v: Decimal| round_half_up(v, dp);
        Self {
            subtotal: r(self.subtotal),
            total: r(self.total),
            native_subtotal: r(self.native_subtotal),
            native_total: r(self.native_total),
            vat_base_21: r(self.vat_base_21),
            vat_21: r(self.vat_21),
            vat_base_15: r(self.vat_base_15),
            vat_15: r(self.vat_15),
            vat_base_12: r(self.vat_base_12),
            vat_12: r(self.vat_12),
            vat_base_10: r(self.vat_base_10),
            vat_10: r(self.vat_10),
            vat_base_0: r(self.vat_base_0),
        }
    }
}
