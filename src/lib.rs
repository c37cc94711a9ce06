//! Tooling surrounding the Pricing Rule record.
//!
//! The typed record and form model live in [`pricing_rule_core`] (its
//! types are re-exported here), the form visibility controller in
//! [`form`], plain-text form rendering in [`render`], and the discount
//! arithmetic that gives the record's fields their meaning in
//! [`evaluate`].

pub use pricing_rule_core::{
    Currency, DiscountComponents, FieldDisplay, FieldId, Form, MarginType, ParseFieldIdError,
    PricingRule, RateOrDiscount,
};

pub use pricing_rule_form as form;
pub use pricing_rule_render as render;

pub mod evaluate;
