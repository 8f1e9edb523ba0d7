use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A single invoice line as submitted by the client.
///
/// Numeric fields are optional because drafts arrive half-filled from the
/// editor. Missing `quantity` / `unit_price` count as zero; a missing
/// `vat_rate` puts the line in no VAT bucket at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// Item name shown on the invoice.
    #[serde(default)]
    pub name: Option<String>,
    /// Invoiced quantity.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub quantity: Option<Decimal>,
    /// Unit of measure (e.g. "ks", "hod").
    #[serde(default)]
    pub unit: Option<String>,
    /// Net price per unit in invoice currency.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,
    /// VAT rate in percent (21, 15, 12, 10, 0).
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub vat_rate: Option<Decimal>,
}

impl InvoiceLineItem {
    /// Line with all three numeric fields set.
    pub fn new(quantity: Decimal, unit_price: Decimal, vat_rate: Decimal) -> Self {
        Self {
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            vat_rate: Some(vat_rate),
            ..Self::default()
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// `quantity * unit_price`, absent values counted as zero.
    /// Saturates at `Decimal::MAX` / `Decimal::MIN` instead of overflowing.
    pub fn line_amount(&self) -> Decimal {
        self.quantity
            .unwrap_or(Decimal::ZERO)
            .saturating_mul(self.unit_price.unwrap_or(Decimal::ZERO))
    }

    /// The VAT bucket this line falls into, if any.
    pub fn vat_bucket(&self) -> Option<VatRate> {
        self.vat_rate.and_then(VatRate::from_rate)
    }
}

/// Czech VAT rate buckets.
///
/// 15 % and 10 % were merged into 12 % in 2024; invoices issued before the
/// change still carry the old rates, so all of them coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VatRate {
    /// 21 % — základní sazba.
    Standard21,
    /// 15 % — first reduced rate (until 2023).
    Reduced15,
    /// 12 % — unified reduced rate (from 2024).
    Reduced12,
    /// 10 % — second reduced rate (until 2023).
    Reduced10,
    /// 0 %.
    Zero,
}

impl VatRate {
    pub const ALL: [VatRate; 5] = [
        Self::Standard21,
        Self::Reduced15,
        Self::Reduced12,
        Self::Reduced10,
        Self::Zero,
    ];

    /// Rate in percent.
    pub fn percent(&self) -> Decimal {
        match self {
            Self::Standard21 => dec!(21),
            Self::Reduced15 => dec!(15),
            Self::Reduced12 => dec!(12),
            Self::Reduced10 => dec!(10),
            Self::Zero => Decimal::ZERO,
        }
    }

    /// Exact match against the bucket rates. `21.0` matches, `20.9` does not.
    pub fn from_rate(rate: Decimal) -> Option<Self> {
        Self::ALL.into_iter().find(|bucket| bucket.percent() == rate)
    }
}

/// Monetary totals of an invoice.
///
/// Amounts are in invoice currency except the `native_*` fields, which are
/// converted to the home currency (CZK) with the invoice exchange rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub total: Decimal,
    pub native_subtotal: Decimal,
    pub native_total: Decimal,
    pub vat_base_21: Decimal,
    pub vat_21: Decimal,
    pub vat_base_15: Decimal,
    pub vat_15: Decimal,
    pub vat_base_12: Decimal,
    pub vat_12: Decimal,
    pub vat_base_10: Decimal,
    pub vat_10: Decimal,
    pub vat_base_0: Decimal,
}

impl InvoiceTotals {
    /// Sum of VAT over all buckets.
    pub fn vat_total(&self) -> Decimal {
        self.vat_21
            .saturating_add(self.vat_15)
            .saturating_add(self.vat_12)
            .saturating_add(self.vat_10)
    }

    /// Taxable base of a bucket.
    pub fn vat_base(&self, rate: VatRate) -> Decimal {
        match rate {
            VatRate::Standard21 => self.vat_base_21,
            VatRate::Reduced15 => self.vat_base_15,
            VatRate::Reduced12 => self.vat_base_12,
            VatRate::Reduced10 => self.vat_base_10,
            VatRate::Zero => self.vat_base_0,
        }
    }

    /// VAT amount of a bucket. Always zero for [`VatRate::Zero`].
    pub fn vat(&self, rate: VatRate) -> Decimal {
        match rate {
            VatRate::Standard21 => self.vat_21,
            VatRate::Reduced15 => self.vat_15,
            VatRate::Reduced12 => self.vat_12,
            VatRate::Reduced10 => self.vat_10,
            VatRate::Zero => Decimal::ZERO,
        }
    }
}

/// Invoice as received by the create/update handlers, before persisting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// Invoice number (e.g. "2024001").
    pub number: String,
    /// Invoice currency code (ISO 4217).
    pub currency: String,
    /// Home-currency units per one unit of invoice currency.
    pub exchange_rate: Decimal,
    /// Issue date.
    pub issued_on: NaiveDate,
    /// DUZP — date of taxable fulfillment.
    pub taxable_fulfillment_due: Option<NaiveDate>,
    /// Payment term in days.
    pub due_in_days: u32,
    pub items: Vec<InvoiceLineItem>,
}

impl InvoiceDraft {
    /// Draft in home currency with the default 14-day payment term.
    pub fn new(number: impl Into<String>, issued_on: NaiveDate) -> Self {
        Self {
            number: number.into(),
            currency: super::currencies::HOME_CURRENCY.to_string(),
            exchange_rate: Decimal::ONE,
            issued_on,
            taxable_fulfillment_due: None,
            due_in_days: 14,
            items: Vec::new(),
        }
    }

    pub fn currency(mut self, code: impl Into<String>, exchange_rate: Decimal) -> Self {
        self.currency = code.into();
        self.exchange_rate = exchange_rate;
        self
    }

    pub fn taxable_fulfillment_due(mut self, date: NaiveDate) -> Self {
        self.taxable_fulfillment_due = Some(date);
        self
    }

    pub fn due_in_days(mut self, days: u32) -> Self {
        self.due_in_days = days;
        self
    }

    pub fn add_item(mut self, item: InvoiceLineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Payment due date. `None` only if the date overflows the calendar.
    pub fn due_on(&self) -> Option<NaiveDate> {
        self.issued_on
            .checked_add_days(Days::new(u64::from(self.due_in_days)))
    }

    /// Totals of the draft's items at its exchange rate.
    pub fn totals(&self) -> InvoiceTotals {
        super::totals::get_invoice_sums(&self.items, self.exchange_rate)
    }
}
