use anyhow::Result;
use indoc::indoc;
use pricing_rule_core::{FieldId, Form, PricingRule};
use pricing_rule_form::{handle_event, on_refresh, FormEvent};

use crate::render;

fn rendered(form: &Form<'_>) -> Result<String> {
    let mut out = Vec::new();
    render(&mut out, form)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn renders_only_the_visible_fields() -> Result<()> {
    let doc = PricingRule::builder()
        .title("Summer Wholesale")
        .additional_discount(true)
        .addl_discount_percentage("2.5".parse()?)
        .build();
    let mut form = Form::new(doc);
    on_refresh(&mut form);

    assert_eq!(
        rendered(&form)?,
        indoc! {"
            Additional Discount: [x]
            Addl Valid From: -
            Addl Valid To: -
            Addl Discount Percentage: 2.5
            Promotional Scheme: [ ]
        "}
    );
    Ok(())
}

#[test]
fn scheme_name_disappears_for_good_once_flag_is_unchecked() -> Result<()> {
    let doc = PricingRule::builder()
        .title("Monsoon Scheme")
        .promotional_scheme(true)
        .scheme_name(Some("MONSOON24".into()))
        .scheme_min_qty("10".parse()?)
        .build();
    let mut form = Form::new(doc);

    // Fresh form, flag checked: scheme_name was never hidden, so it shows.
    on_refresh(&mut form);
    assert_eq!(
        rendered(&form)?,
        indoc! {"
            Additional Discount: [ ]
            Promotional Scheme: [x]
            Scheme Name: MONSOON24
            Scheme Min Qty: 10
            Scheme Valid From: -
            Scheme Valid To: -
        "}
    );

    // Uncheck, then re-check: the rest of the group comes back,
    // scheme_name does not.
    form.doc_mut().promotional_scheme = false;
    handle_event(&mut form, FormEvent::FieldChanged(FieldId::PromotionalScheme));
    form.doc_mut().promotional_scheme = true;
    handle_event(&mut form, FormEvent::FieldChanged(FieldId::PromotionalScheme));

    assert_eq!(
        rendered(&form)?,
        indoc! {"
            Additional Discount: [ ]
            Promotional Scheme: [x]
            Scheme Min Qty: 10
            Scheme Valid From: -
            Scheme Valid To: -
        "}
    );
    Ok(())
}

#[test]
fn renders_dates_in_iso_form() -> Result<()> {
    use chrono::NaiveDate;

    let doc = PricingRule::builder()
        .title("Dated")
        .additional_discount(true)
        .addl_valid_from(Some(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()))
        .addl_valid_to(Some(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()))
        .addl_discount_percentage("5".parse()?)
        .build();
    let mut form = Form::new(doc);
    on_refresh(&mut form);

    assert_eq!(
        rendered(&form)?,
        indoc! {"
            Additional Discount: [x]
            Addl Valid From: 2024-07-01
            Addl Valid To: 2024-09-30
            Addl Discount Percentage: 5
            Promotional Scheme: [ ]
        "}
    );
    Ok(())
}
