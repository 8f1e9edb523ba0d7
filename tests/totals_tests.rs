use faktorio::core::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn item(quantity: Decimal, unit_price: Decimal, vat_rate: Decimal) -> InvoiceLineItem {
    InvoiceLineItem::new(quantity, unit_price, vat_rate)
}

// ---------------------------------------------------------------------------
// get_invoice_sums
// ---------------------------------------------------------------------------

#[test]
fn empty_list_is_all_zero() {
    let totals = get_invoice_sums(&[], dec!(1));
    assert_eq!(totals.subtotal, Decimal::ZERO);
    assert_eq!(totals.total, Decimal::ZERO);
    assert_eq!(totals.native_subtotal, Decimal::ZERO);
    assert_eq!(totals.native_total, Decimal::ZERO);
    for rate in VatRate::ALL {
        assert_eq!(totals.vat_base(rate), Decimal::ZERO);
        assert_eq!(totals.vat(rate), Decimal::ZERO);
    }
}

#[test]
fn single_rate() {
    let items = [item(dec!(2), dec!(100), dec!(21)), item(dec!(1), dec!(50), dec!(21))];
    let totals = get_invoice_sums(&items, dec!(1));
    assert_eq!(totals.subtotal, dec!(250));
    assert_eq!(totals.vat_base_21, dec!(250));
    assert_eq!(totals.vat_21, dec!(52.5));
    assert_eq!(totals.total, dec!(302.5));
    assert_eq!(totals.native_subtotal, dec!(250));
    assert_eq!(totals.native_total, dec!(302.5));
}

#[test]
fn mixed_rates() {
    let items = [
        item(dec!(2), dec!(100), dec!(21)),
        item(dec!(3), dec!(50), dec!(15)),
        item(dec!(1), dec!(80), dec!(10)),
        item(dec!(5), dec!(20), dec!(0)),
    ];
    let totals = get_invoice_sums(&items, dec!(1));
    assert_eq!(totals.subtotal, dec!(530));
    assert_eq!(totals.vat_base_21, dec!(200));
    assert_eq!(totals.vat_21, dec!(42));
    assert_eq!(totals.vat_base_15, dec!(150));
    assert_eq!(totals.vat_15, dec!(22.5));
    assert_eq!(totals.vat_base_12, Decimal::ZERO);
    assert_eq!(totals.vat_12, Decimal::ZERO);
    assert_eq!(totals.vat_base_10, dec!(80));
    assert_eq!(totals.vat_10, dec!(8));
    assert_eq!(totals.vat_base_0, dec!(100));
    assert_eq!(totals.total, dec!(602.5));
}

#[test]
fn foreign_currency_converts_to_native() {
    let items = [item(dec!(10), dec!(100), dec!(21))];
    let totals = get_invoice_sums(&items, dec!(25.1));
    assert_eq!(totals.subtotal, dec!(1000));
    assert_eq!(totals.total, dec!(1210));
    assert_eq!(totals.native_subtotal, dec!(25100));
    assert_eq!(totals.native_total, dec!(30371));
}

#[test]
fn null_values() {
    let items = [
        InvoiceLineItem {
            quantity: None,
            unit_price: Some(dec!(100)),
            vat_rate: Some(dec!(21)),
            ..Default::default()
        },
        InvoiceLineItem {
            quantity: Some(dec!(2)),
            unit_price: None,
            vat_rate: Some(dec!(15)),
            ..Default::default()
        },
        InvoiceLineItem {
            quantity: Some(dec!(1)),
            unit_price: Some(dec!(50)),
            vat_rate: None,
            ..Default::default()
        },
    ];
    let totals = get_invoice_sums(&items, dec!(1));
    assert_eq!(totals.subtotal, dec!(50));
    assert_eq!(totals.total, dec!(50));
    assert_eq!(totals.vat_base_21, Decimal::ZERO);
    assert_eq!(totals.vat_base_15, Decimal::ZERO);
    // A line without a rate is not zero-rated.
    assert_eq!(totals.vat_base_0, Decimal::ZERO);
}

#[test]
fn unknown_rate_counts_in_subtotal_only() {
    let items = [item(dec!(1), dec!(100), dec!(19)), item(dec!(1), dec!(100), dec!(21))];
    let totals = get_invoice_sums(&items, dec!(1));
    assert_eq!(totals.subtotal, dec!(200));
    assert_eq!(totals.vat_base_21, dec!(100));
    assert_eq!(totals.vat_21, dec!(21));
    assert_eq!(totals.total, dec!(221));
    let bases: Decimal = VatRate::ALL.iter().map(|r| totals.vat_base(*r)).sum();
    assert_eq!(bases, dec!(100));
}

#[test]
fn old_and_new_reduced_rates_coexist() {
    let items = [
        item(dec!(1), dec!(100), dec!(15)),
        item(dec!(1), dec!(100), dec!(12)),
        item(dec!(1), dec!(100), dec!(10)),
    ];
    let totals = get_invoice_sums(&items, dec!(1));
    assert_eq!(totals.vat_15, dec!(15));
    assert_eq!(totals.vat_12, dec!(12));
    assert_eq!(totals.vat_10, dec!(10));
    assert_eq!(totals.vat_total(), dec!(37));
    assert_eq!(totals.total, dec!(337));
}

#[test]
fn totals_are_not_rounded() {
    let items = [item(dec!(1), dec!(0.05), dec!(21))];
    let totals = get_invoice_sums(&items, dec!(1));
    assert_eq!(totals.vat_21, dec!(0.0105));
    assert_eq!(totals.rounded(2).vat_21, dec!(0.01));
}

#[test]
fn normalization_does_not_change_totals() {
    let items = [
        InvoiceLineItem {
            quantity: None,
            unit_price: Some(dec!(100)),
            vat_rate: Some(dec!(21)),
            ..Default::default()
        },
        InvoiceLineItem {
            quantity: Some(dec!(3)),
            unit_price: Some(dec!(10)),
            vat_rate: None,
            ..Default::default()
        },
    ];
    assert_eq!(
        get_invoice_sums(&items, dec!(2)),
        get_invoice_sums(&normalize_items(&items), dec!(2))
    );
}

#[test]
fn totals_from_client_json() {
    let json = r#"[
        {"name": "Vývoj", "quantity": 8, "unit": "hod", "unit_price": 1250, "vat_rate": 21},
        {"name": "Licence", "quantity": 1, "unit_price": 990.5, "vat_rate": 12},
        {"name": "Poznámka", "quantity": null, "unit_price": null, "vat_rate": null}
    ]"#;
    let items: Vec<InvoiceLineItem> = serde_json::from_str(json).unwrap();
    let totals = get_invoice_sums(&items, dec!(1));
    assert_eq!(totals.vat_base_21, dec!(10000));
    assert_eq!(totals.vat_base_12, dec!(990.5));
    assert_eq!(totals.subtotal, dec!(10990.5));
    assert_eq!(totals.total, dec!(10990.5) + dec!(2100) + dec!(118.86));
}

#[test]
fn huge_amounts_saturate_instead_of_panicking() {
    let json = r#"[{"quantity": 1e15, "unit_price": 1e15, "vat_rate": 21}]"#;
    let items: Vec<InvoiceLineItem> = serde_json::from_str(json).unwrap();

    let totals = get_invoice_sums(&items, dec!(25.1));
    assert_eq!(totals.subtotal, Decimal::MAX);
    assert_eq!(totals.vat_base_21, Decimal::MAX);
    assert_eq!(totals.total, Decimal::MAX);
    assert_eq!(totals.native_total, Decimal::MAX);

    let draft = InvoiceDraft::new("2024001", chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    let draft = items.into_iter().fold(draft, InvoiceDraft::add_item);
    let errors = validate_draft(&draft);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.rule == Some(RULE_AMOUNT_RANGE)));
}

// ---------------------------------------------------------------------------
// InvoiceDraft
// ---------------------------------------------------------------------------

#[test]
fn draft_totals_use_its_exchange_rate() {
    let draft = InvoiceDraft::new("2024001", chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        .currency("EUR", dec!(25))
        .add_item(item(dec!(4), dec!(25), dec!(21)));
    assert!(validate_draft(&draft).is_empty());
    let totals = draft.totals();
    assert_eq!(totals.total, dec!(121));
    assert_eq!(totals.native_total, dec!(3025));
}
