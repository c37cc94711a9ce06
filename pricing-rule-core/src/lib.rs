use std::borrow::Cow;

pub use field::{FieldId, ParseFieldIdError};
pub use form::{FieldDisplay, Form};
pub use rule::{DiscountComponents, MarginType, PricingRule, RateOrDiscount};

pub mod field;
pub mod form;
pub mod rule;

/// Currency code, e.g. `INR` or `USD`.
pub type Currency<'a> = Cow<'a, str>;
