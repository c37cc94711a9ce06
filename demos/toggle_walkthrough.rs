//! Walks a Pricing Rule form through its visibility transitions, then
//! prices an item against the resulting rule.
//!
//! Run with `cargo run --example toggle_walkthrough`.

use chrono::NaiveDate;
use pricing_rule::evaluate::{evaluate, PricingArgs};
use pricing_rule::form::{handle_event, FormEvent};
use pricing_rule::{FieldId, Form, PricingRule};

fn dump(stage: &str, form: &Form<'_>) {
    println!("--- {}", stage);
    let mut out = Vec::new();
    pricing_rule::render::render(&mut out, form).expect("render form");
    print!("{}", String::from_utf8(out).expect("rendered form is utf-8"));
    println!();
}

fn main() {
    tracing_subscriber::fmt().init();

    let doc = PricingRule::builder()
        .title("Monsoon Trade Discount")
        .discount_percentage("10".parse().unwrap())
        .additional_discount(true)
        .addl_valid_from(Some(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()))
        .addl_valid_to(Some(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()))
        .addl_discount_percentage("5".parse().unwrap())
        .build();
    let mut form = Form::new(doc);

    handle_event(&mut form, FormEvent::Refresh);
    dump("after load", &form);

    form.doc_mut().promotional_scheme = true;
    handle_event(&mut form, FormEvent::FieldChanged(FieldId::PromotionalScheme));
    dump("promotional scheme checked", &form);

    form.doc_mut().additional_discount = false;
    handle_event(&mut form, FormEvent::FieldChanged(FieldId::AdditionalDiscount));
    dump("additional discount unchecked", &form);

    form.doc_mut().additional_discount = true;
    handle_event(&mut form, FormEvent::FieldChanged(FieldId::AdditionalDiscount));
    dump("additional discount re-checked", &form);

    let args = PricingArgs::builder()
        .price_list_rate("1000".parse().unwrap())
        .transaction_date(NaiveDate::from_ymd_opt(2024, 8, 15).unwrap())
        .currency(Some("INR".into()))
        .build();
    let pricing = evaluate(form.doc(), &args);

    println!("--- pricing an item at {}", args.price_list_rate);
    println!("discount amount:     {}", pricing.discount_amount.round_dp(2));
    println!(
        "discount percentage: {}%",
        pricing.discount_percentage.round_dp(2)
    );
    if pricing.addl_discount_applied {
        println!(
            "of which additional: {}",
            pricing.addl_discount_amount.round_dp(2)
        );
    }
}
