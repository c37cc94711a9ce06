use chrono::NaiveDate;
use pricing_rule::evaluate::{evaluate, PricingArgs};
use pricing_rule::form::{handle_event, FormEvent, DISCOUNT_FIELDS, SCHEME_FIELDS};
use pricing_rule::{FieldId, Form, PricingRule};

fn dec(s: &str) -> rust_decimal::Decimal {
    s.parse().unwrap()
}

#[test]
fn load_toggle_and_price_an_item() {
    let doc = PricingRule::builder()
        .title("Monsoon Trade Discount")
        .discount_percentage(dec("10"))
        .additional_discount(true)
        .addl_valid_from(Some(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()))
        .addl_valid_to(Some(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()))
        .addl_discount_percentage(dec("5"))
        .build();
    let mut form = Form::new(doc);

    // Load: the discount group shows, the scheme group hides.
    handle_event(&mut form, FormEvent::Refresh);
    assert!(DISCOUNT_FIELDS.iter().all(|f| !form.hidden(*f)));
    assert!(SCHEME_FIELDS.iter().all(|f| form.hidden(*f)));
    assert!(form.hidden(FieldId::SchemeName));

    // The user opens the scheme section; scheme_name stays hidden.
    form.doc_mut().promotional_scheme = true;
    handle_event(&mut form, FormEvent::FieldChanged(FieldId::PromotionalScheme));
    assert!(SCHEME_FIELDS.iter().all(|f| !form.hidden(*f)));
    assert!(form.hidden(FieldId::SchemeName));

    // Price an item inside the additional-discount window.
    let args = PricingArgs::builder()
        .price_list_rate(dec("1000"))
        .transaction_date(NaiveDate::from_ymd_opt(2024, 8, 15).unwrap())
        .build();
    let pricing = evaluate(form.doc(), &args);

    // 10% base leaves 900; 5% of that net is taken on top.
    assert_eq!(pricing.discount_amount, dec("145.00"));
    assert_eq!(pricing.discount_percentage, dec("14.5"));
    assert!(pricing.addl_discount_applied);
    assert_eq!(pricing.addl_discount_amount, dec("45.00"));
}

#[test]
fn pricing_outside_the_window_keeps_the_base_discount_only() {
    let doc = PricingRule::builder()
        .title("Expired Additional")
        .discount_percentage(dec("10"))
        .additional_discount(true)
        .addl_valid_to(Some(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()))
        .addl_discount_percentage(dec("5"))
        .build();

    let args = PricingArgs::builder()
        .price_list_rate(dec("1000"))
        .transaction_date(NaiveDate::from_ymd_opt(2024, 8, 15).unwrap())
        .build();
    let pricing = evaluate(&doc, &args);

    assert!(!pricing.addl_discount_applied);
    assert_eq!(pricing.discount_amount, dec("100.0"));
}
