use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::currencies::{is_home_currency, is_known_currency_code};
use super::error::{RULE_AMOUNT_RANGE, RULE_VAT_RATE, ValidationError};
use super::types::*;

/// Upper bound on line items per invoice.
pub const MAX_ITEMS: usize = 10_000;

/// Upper bound on invoice number length.
pub const MAX_NUMBER_LEN: usize = 200;

/// Upper bound on the magnitude of a line's quantity and unit price.
pub const MAX_AMOUNT: Decimal = dec!(1000000000);

/// Validate an invoice draft before it is persisted.
/// Returns all validation errors found (not just the first).
///
/// Lines with an absent or unknown VAT rate are reported under
/// [`RULE_VAT_RATE`]; they would otherwise silently carry no VAT. Quantities
/// and prices beyond [`MAX_AMOUNT`] are reported under [`RULE_AMOUNT_RANGE`].
pub fn validate_draft(draft: &InvoiceDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.number.trim().is_empty() {
        errors.push(ValidationError::new(
            "number",
            "invoice number must not be empty",
        ));
    } else if draft.number.len() > MAX_NUMBER_LEN {
        errors.push(ValidationError::new(
            "number",
            format!("invoice number cannot exceed {MAX_NUMBER_LEN} characters"),
        ));
    }

    if !is_known_currency_code(&draft.currency) {
        errors.push(ValidationError::new(
            "currency",
            format!("currency code '{}' is not supported", draft.currency),
        ));
    }

    if draft.exchange_rate <= Decimal::ZERO {
        errors.push(ValidationError::new(
            "exchange_rate",
            "exchange rate must be positive",
        ));
    } else if is_home_currency(&draft.currency) && draft.exchange_rate != Decimal::ONE {
        errors.push(ValidationError::new(
            "exchange_rate",
            format!(
                "exchange rate of home currency must be 1, got {}",
                draft.exchange_rate
            ),
        ));
    }

    if let Some(duzp) = draft.taxable_fulfillment_due {
        if duzp < draft.issued_on {
            errors.push(ValidationError::new(
                "taxable_fulfillment_due",
                "date of taxable fulfillment cannot precede the issue date",
            ));
        }
    }

    if draft.items.is_empty() {
        errors.push(ValidationError::new(
            "items",
            "at least one line item is required",
        ));
    } else if draft.items.len() > MAX_ITEMS {
        errors.push(ValidationError::new(
            "items",
            format!("invoice cannot have more than {MAX_ITEMS} line items"),
        ));
    }

    for (i, item) in draft.items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    errors
}

fn validate_item(item: &InvoiceLineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let path = format!("items.{index}");

    if item.quantity.is_some_and(|q| q < Decimal::ZERO) {
        errors.push(ValidationError::new(
            format!("{path}.quantity"),
            "quantity must not be negative",
        ));
    }
    if item.unit_price.is_some_and(|p| p < Decimal::ZERO) {
        errors.push(ValidationError::new(
            format!("{path}.unit_price"),
            "unit price must not be negative",
        ));
    }

    for (name, value) in [("quantity", item.quantity), ("unit_price", item.unit_price)] {
        if value.is_some_and(|v| v.abs() > MAX_AMOUNT) {
            errors.push(
                ValidationError::new(
                    format!("{path}.{name}"),
                    format!("{name} must not exceed {MAX_AMOUNT} in magnitude"),
                )
                .rule(RULE_AMOUNT_RANGE),
            );
        }
    }

    match item.vat_rate {
        None => errors.push(
            ValidationError::new(
                format!("{path}.vat_rate"),
                "VAT rate is missing; the line would carry no VAT",
            )
            .rule(RULE_VAT_RATE),
        ),
        Some(rate) if VatRate::from_rate(rate).is_none() => errors.push(
            ValidationError::new(
                format!("{path}.vat_rate"),
                format!("{rate} % is not a Czech VAT rate (21, 15, 12, 10, 0)"),
            )
            .rule(RULE_VAT_RATE),
        ),
        Some(_) => {}
    }
}

/// Fill absent quantities and unit prices with zero.
///
/// `vat_rate` is left as is: an absent rate is not the same as 0 %.
pub fn normalize_items(items: &[InvoiceLineItem]) -> Vec<InvoiceLineItem> {
    items
        .iter()
        .map(|item| InvoiceLineItem {
            quantity: Some(item.quantity.unwrap_or(Decimal::ZERO)),
            unit_price: Some(item.unit_price.unwrap_or(Decimal::ZERO)),
            ..item.clone()
        })
        .collect()
}
