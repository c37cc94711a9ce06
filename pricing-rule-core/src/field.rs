use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Identifies a field on the Pricing Rule form.
///
/// Host environments address fields by snake_case wire name; this enum is
/// the typed equivalent, so a misspelled field is a compile error rather
/// than a silent no-op at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FieldId {
    AdditionalDiscount,
    AddlValidFrom,
    AddlValidTo,
    AddlDiscountPercentage,
    PromotionalScheme,
    SchemeName,
    SchemeMinQty,
    SchemeValidFrom,
    SchemeValidTo,
}

impl FieldId {
    /// Every addressable field, in form order.
    pub const ALL: [FieldId; 9] = [
        FieldId::AdditionalDiscount,
        FieldId::AddlValidFrom,
        FieldId::AddlValidTo,
        FieldId::AddlDiscountPercentage,
        FieldId::PromotionalScheme,
        FieldId::SchemeName,
        FieldId::SchemeMinQty,
        FieldId::SchemeValidFrom,
        FieldId::SchemeValidTo,
    ];

    /// The snake_case wire name hosts use to address this field.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::AdditionalDiscount => "additional_discount",
            FieldId::AddlValidFrom => "addl_valid_from",
            FieldId::AddlValidTo => "addl_valid_to",
            FieldId::AddlDiscountPercentage => "addl_discount_percentage",
            FieldId::PromotionalScheme => "promotional_scheme",
            FieldId::SchemeName => "scheme_name",
            FieldId::SchemeMinQty => "scheme_min_qty",
            FieldId::SchemeValidFrom => "scheme_valid_from",
            FieldId::SchemeValidTo => "scheme_valid_to",
        }
    }

    /// Label shown next to the input on the form.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::AdditionalDiscount => "Additional Discount",
            FieldId::AddlValidFrom => "Addl Valid From",
            FieldId::AddlValidTo => "Addl Valid To",
            FieldId::AddlDiscountPercentage => "Addl Discount Percentage",
            FieldId::PromotionalScheme => "Promotional Scheme",
            FieldId::SchemeName => "Scheme Name",
            FieldId::SchemeMinQty => "Scheme Min Qty",
            FieldId::SchemeValidFrom => "Scheme Valid From",
            FieldId::SchemeValidTo => "Scheme Valid To",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a wire name matches no known field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseFieldIdError {
    name: String,
}

impl ParseFieldIdError {
    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseFieldIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown Pricing Rule field: '{}'", self.name)
    }
}

impl Error for ParseFieldIdError {}

impl FromStr for FieldId {
    type Err = ParseFieldIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "additional_discount" => Ok(FieldId::AdditionalDiscount),
            "addl_valid_from" => Ok(FieldId::AddlValidFrom),
            "addl_valid_to" => Ok(FieldId::AddlValidTo),
            "addl_discount_percentage" => Ok(FieldId::AddlDiscountPercentage),
            "promotional_scheme" => Ok(FieldId::PromotionalScheme),
            "scheme_name" => Ok(FieldId::SchemeName),
            "scheme_min_qty" => Ok(FieldId::SchemeMinQty),
            "scheme_valid_from" => Ok(FieldId::SchemeValidFrom),
            "scheme_valid_to" => Ok(FieldId::SchemeValidTo),
            _ => Err(ParseFieldIdError {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for field in FieldId::ALL.iter() {
            assert_eq!(field.as_str().parse::<FieldId>(), Ok(*field));
        }
    }

    #[test]
    fn unknown_name_errors() {
        let err = "scheme_max_qty".parse::<FieldId>().unwrap_err();
        assert_eq!(err.name(), "scheme_max_qty");
    }
}
