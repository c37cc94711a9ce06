use std::borrow::Cow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use typed_builder::TypedBuilder;

use super::Currency;

/// How a rule adjusts the price of the items it matches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RateOrDiscount {
    /// Replace the price list rate outright.
    Rate,
    /// Subtract a flat amount.
    DiscountAmount,
    /// Subtract a percentage (possibly chained, see
    /// [`DiscountComponents`]).
    DiscountPercentage,
}

impl Default for RateOrDiscount {
    fn default() -> Self {
        RateOrDiscount::DiscountPercentage
    }
}

/// Margin flavor a rule may carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MarginType {
    Amount,
    Percentage,
}

/// Trade discount percentages chained after the base discount.
///
/// Applied in declaration order, each percentage against the amount left
/// over from the previous step, never against the original price.
#[derive(Clone, Debug, Default, Eq, PartialEq, TypedBuilder)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscountComponents {
    #[builder(default)]
    pub trade_mark: Decimal,

    #[builder(default)]
    pub scheme: Decimal,

    #[builder(default)]
    pub freight: Decimal,

    #[builder(default)]
    pub extra: Decimal,
}

impl DiscountComponents {
    /// Component percentages in application order.
    pub fn in_order(&self) -> [Decimal; 4] {
        [self.trade_mark, self.scheme, self.freight, self.extra]
    }
}

/// A Pricing Rule record.
///
/// Numeric fields default to zero, flags to unchecked, and optional dates
/// and names to absent, so a record built with only a title behaves like a
/// freshly created one in the host: every conditional feature reads as
/// off.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingRule<'a> {
    /// Rule title as shown in list views.
    #[builder(setter(into))]
    pub title: Cow<'a, str>,

    #[builder(default)]
    pub rate_or_discount: RateOrDiscount,

    /// Currency the rate and flat discounts are denominated in.
    #[builder(default)]
    pub currency: Option<Currency<'a>>,

    #[builder(default)]
    pub rate: Decimal,

    #[builder(default)]
    pub discount_amount: Decimal,

    #[builder(default)]
    pub discount_percentage: Decimal,

    /// Compound this rule's percentage onto discounts already applied by
    /// earlier rules instead of restating it against the full rate.
    #[builder(default)]
    pub apply_discount_on_rate: bool,

    /// Unit of measure the rate is quoted in.
    #[builder(default)]
    pub uom: Option<Cow<'a, str>>,

    #[builder(default)]
    pub margin_type: Option<MarginType>,

    #[builder(default)]
    pub margin_rate_or_amount: Decimal,

    #[builder(default)]
    pub apply_multiple_pricing_rules: bool,

    #[builder(default)]
    pub components: DiscountComponents,

    /// GST percentage backed out of the gross when the component chain
    /// runs.
    #[builder(default)]
    pub gst_rate: Decimal,

    /// Enables the additional-discount section of the form.
    #[builder(default)]
    pub additional_discount: bool,

    #[builder(default)]
    pub addl_valid_from: Option<NaiveDate>,

    #[builder(default)]
    pub addl_valid_to: Option<NaiveDate>,

    #[builder(default)]
    pub addl_discount_percentage: Decimal,

    /// Enables the promotional-scheme section of the form.
    #[builder(default)]
    pub promotional_scheme: bool,

    #[builder(default)]
    pub scheme_name: Option<Cow<'a, str>>,

    #[builder(default)]
    pub scheme_min_qty: Decimal,

    #[builder(default)]
    pub scheme_valid_from: Option<NaiveDate>,

    #[builder(default)]
    pub scheme_valid_to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_record_reads_as_off() {
        let rule = PricingRule::builder().title("Bare").build();
        assert!(!rule.additional_discount);
        assert!(!rule.promotional_scheme);
        assert_eq!(rule.addl_discount_percentage, Decimal::ZERO);
        assert_eq!(rule.rate_or_discount, RateOrDiscount::DiscountPercentage);
        assert_eq!(rule.scheme_name, None);
    }
}
