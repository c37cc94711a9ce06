//! Discount evaluation for Pricing Rule records.
//!
//! The transaction-time pricing pass: a matched rule adjusts an item's
//! price details according to its `rate_or_discount` setting, and the
//! additional discount, when in force, is applied last against the
//! already-discounted net. Every
//! operation here is a total function; a rule that does not apply leaves
//! the pricing untouched rather than failing.

use std::borrow::Cow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;
use typed_builder::TypedBuilder;

use pricing_rule_core::{Currency, MarginType, PricingRule, RateOrDiscount};

/// Transaction-side inputs a rule is evaluated against.
#[derive(Clone, Debug, PartialEq, TypedBuilder)]
pub struct PricingArgs<'a> {
    /// Undiscounted rate from the buyer's price list.
    pub price_list_rate: Decimal,

    pub transaction_date: NaiveDate,

    #[builder(default)]
    pub currency: Option<Currency<'a>>,

    /// Unit of measure the transaction line is quoted in.
    #[builder(default)]
    pub uom: Option<Cow<'a, str>>,

    /// Multiplier from the rule's UOM to the transaction UOM.
    #[builder(default = Decimal::ONE)]
    pub conversion_factor: Decimal,

    /// Discount carried in from rules applied earlier in the chain.
    #[builder(default)]
    pub discount_amount: Decimal,

    #[builder(default)]
    pub discount_percentage: Decimal,
}

/// Price details for one item after a rule has been applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemPricing {
    pub price_list_rate: Decimal,

    pub discount_amount: Decimal,

    pub discount_percentage: Decimal,

    pub margin_type: Option<MarginType>,

    pub margin_rate_or_amount: Decimal,

    pub has_margin: bool,

    /// The component chain expressed as a single percentage of the
    /// post-base-discount price, rounded to two places.
    pub compound_discount_percentage: Decimal,

    /// Diagnostics: how much the additional discount contributed, if it
    /// ran.
    pub addl_discount_amount: Decimal,

    pub addl_discount_applied: bool,
}

/// Evaluates `rule` against `args`: the price/discount pass first, then
/// the additional discount last.
pub fn evaluate(rule: &PricingRule<'_>, args: &PricingArgs<'_>) -> ItemPricing {
    let mut pricing = apply_price_discount_rule(rule, args);
    apply_additional_discount(rule, args.transaction_date, &mut pricing);
    pricing
}

/// Applies the rule's price or discount to the transaction inputs.
pub fn apply_price_discount_rule(rule: &PricingRule<'_>, args: &PricingArgs<'_>) -> ItemPricing {
    let mut pricing = ItemPricing {
        price_list_rate: args.price_list_rate,
        discount_amount: args.discount_amount,
        discount_percentage: args.discount_percentage,
        ..ItemPricing::default()
    };

    apply_margin(rule, args, &mut pricing);

    match rule.rate_or_discount {
        RateOrDiscount::Rate => apply_rate(rule, args, &mut pricing),
        RateOrDiscount::DiscountAmount => apply_discount_amount(rule, &mut pricing),
        RateOrDiscount::DiscountPercentage => apply_discount_percentage(rule, args, &mut pricing),
    }

    debug!(
        rule = %rule.title,
        discount_amount = %pricing.discount_amount,
        discount_percentage = %pricing.discount_percentage,
        "applied price discount rule"
    );
    pricing
}

/// Adopts the rule's margin: percentage margins unconditionally, amount
/// margins only when denominated in the transaction currency. Stacking
/// rules accumulate instead of overwriting.
fn apply_margin(rule: &PricingRule<'_>, args: &PricingArgs<'_>, pricing: &mut ItemPricing) {
    let adopt = match rule.margin_type {
        Some(MarginType::Percentage) => true,
        Some(MarginType::Amount) => rule.currency.is_some() && rule.currency == args.currency,
        None => false,
    };
    if !adopt {
        return;
    }

    pricing.margin_type = rule.margin_type;
    pricing.has_margin = true;
    if rule.apply_multiple_pricing_rules {
        pricing.margin_rate_or_amount += rule.margin_rate_or_amount;
    } else {
        pricing.margin_rate_or_amount = rule.margin_rate_or_amount;
    }
}

/// A `Rate` rule replaces the price list rate when its currency matches,
/// converting by `conversion_factor` when quoted in a different UOM. Any
/// previously computed percentage is reset: the new rate supersedes it.
fn apply_rate(rule: &PricingRule<'_>, args: &PricingArgs<'_>, pricing: &mut ItemPricing) {
    let rate = if rule.currency.is_some() && rule.currency == args.currency {
        rule.rate
    } else {
        Decimal::ZERO
    };

    if !rate.is_zero() {
        let factor = if rule.uom != args.uom {
            args.conversion_factor
        } else {
            Decimal::ONE
        };
        pricing.price_list_rate = rate * factor;
    }
    pricing.discount_percentage = Decimal::ZERO;
}

fn apply_discount_amount(rule: &PricingRule<'_>, pricing: &mut ItemPricing) {
    pricing.discount_amount += rule.discount_amount;
}

/// The percentage pass. With `apply_discount_on_rate` and an existing
/// percentage, the rule compounds onto what earlier rules left. Otherwise
/// the full chain runs: base percentage off the price list rate, the four
/// component percentages each against the remaining amount, then the GST
/// share of the gross folded into the discount.
fn apply_discount_percentage(
    rule: &PricingRule<'_>,
    args: &PricingArgs<'_>,
    pricing: &mut ItemPricing,
) {
    let hundred = Decimal::ONE_HUNDRED;

    if rule.apply_discount_on_rate && !pricing.discount_percentage.is_zero() {
        pricing.discount_percentage +=
            (hundred - pricing.discount_percentage) * rule.discount_percentage / hundred;
        return;
    }

    let base = args.price_list_rate;
    if base.is_zero() {
        // No base price to discount against; carry the raw percentage.
        pricing.discount_percentage += rule.discount_percentage;
        return;
    }

    let mut value = base * rule.discount_percentage / hundred;
    let dp_price = base - value;

    let mut remaining = dp_price;
    for pct in rule.components.in_order().iter() {
        let part = remaining * pct / hundred;
        remaining -= part;
        value += part;
    }
    let net_price = remaining;

    // The GST share of the gross is folded into the discount as well.
    let gross = base - value;
    let gst = gross - gross / (Decimal::ONE + rule.gst_rate / hundred);
    value += gst;

    pricing.compound_discount_percentage = if dp_price.is_zero() {
        Decimal::ZERO
    } else {
        ((dp_price - net_price) * hundred / dp_price).round_dp(2)
    };

    pricing.discount_amount += value;
    if !pricing.discount_amount.is_zero() {
        pricing.discount_percentage = pricing.discount_amount * hundred / base;
    }
}

/// Applies the rule's additional discount, last, against the
/// already-discounted net.
///
/// No-ops unless the `additional_discount` flag is set, the percentage is
/// positive, `transaction_date` falls inside the inclusive
/// `addl_valid_from ..= addl_valid_to` window (an absent end is open),
/// and both the base rate and the net after existing discounts are
/// positive.
pub fn apply_additional_discount(
    rule: &PricingRule<'_>,
    transaction_date: NaiveDate,
    pricing: &mut ItemPricing,
) {
    if !rule.additional_discount {
        return;
    }
    let pct = rule.addl_discount_percentage;
    if pct <= Decimal::ZERO {
        return;
    }
    if let Some(from) = rule.addl_valid_from {
        if transaction_date < from {
            return;
        }
    }
    if let Some(to) = rule.addl_valid_to {
        if transaction_date > to {
            return;
        }
    }

    let base = pricing.price_list_rate;
    if base <= Decimal::ZERO {
        return;
    }
    let net_after_existing = base - pricing.discount_amount;
    if net_after_existing <= Decimal::ZERO {
        return;
    }

    let hundred = Decimal::ONE_HUNDRED;
    let extra = net_after_existing * pct / hundred;
    pricing.discount_amount += extra;
    pricing.discount_percentage = pricing.discount_amount * hundred / base;
    pricing.addl_discount_amount = extra;
    pricing.addl_discount_applied = true;
    debug!(rule = %rule.title, extra = %extra, "applied additional discount");
}
