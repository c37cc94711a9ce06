use std::{io, io::Write};

use pricing_rule_core::{FieldId, Form, PricingRule};
use thiserror::Error;

#[cfg(test)]
mod tests;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct BasicRenderer {}

impl BasicRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Renders the visible fields of `form` to `w`, one `label: value` line
/// per field, in form order. Hidden fields are omitted, so the output is
/// a direct witness of what the visibility controller left on screen.
pub fn render<W: Write>(w: &mut W, form: &Form<'_>) -> Result<(), RenderError> {
    BasicRenderer::default().render(form, w)
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("an io error occurred")]
    Io(#[from] io::Error),
}

pub trait Renderer<T, W: Write> {
    type Error;
    fn render(&self, renderable: T, write: &mut W) -> Result<(), Self::Error>;
}

impl<'a, W: Write> Renderer<&'a Form<'_>, W> for BasicRenderer {
    type Error = RenderError;
    fn render(&self, form: &'a Form<'_>, write: &mut W) -> Result<(), Self::Error> {
        for field in form.visible_fields() {
            write!(write, "{}: ", field.label())?;
            render_value(form.doc(), field, write)?;
            writeln!(write)?;
        }
        Ok(())
    }
}

fn render_value<W: Write>(
    doc: &PricingRule<'_>,
    field: FieldId,
    w: &mut W,
) -> Result<(), RenderError> {
    match field {
        FieldId::AdditionalDiscount => render_flag(doc.additional_discount, w),
        FieldId::AddlValidFrom => render_optional(&doc.addl_valid_from, w),
        FieldId::AddlValidTo => render_optional(&doc.addl_valid_to, w),
        FieldId::AddlDiscountPercentage => {
            write!(w, "{}", doc.addl_discount_percentage)?;
            Ok(())
        }
        FieldId::PromotionalScheme => render_flag(doc.promotional_scheme, w),
        FieldId::SchemeName => render_optional(&doc.scheme_name, w),
        FieldId::SchemeMinQty => {
            write!(w, "{}", doc.scheme_min_qty)?;
            Ok(())
        }
        FieldId::SchemeValidFrom => render_optional(&doc.scheme_valid_from, w),
        FieldId::SchemeValidTo => render_optional(&doc.scheme_valid_to, w),
    }
}

fn render_flag<W: Write>(checked: bool, w: &mut W) -> Result<(), RenderError> {
    write!(w, "{}", if checked { "[x]" } else { "[ ]" })?;
    Ok(())
}

fn render_optional<T: std::fmt::Display, W: Write>(
    value: &Option<T>,
    w: &mut W,
) -> Result<(), RenderError> {
    match value {
        Some(value) => write!(w, "{}", value)?,
        None => write!(w, "-")?,
    }
    Ok(())
}
