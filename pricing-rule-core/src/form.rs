use std::collections::HashMap;

use super::field::FieldId;
use super::rule::PricingRule;

/// Display metadata the host keeps for each form field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDisplay {
    /// Whether the input is withheld from rendering.
    pub hidden: bool,
}

/// The in-memory, UI-bound representation of a single Pricing Rule record:
/// its field values plus per-field display metadata.
///
/// The form is owned by the host environment and handed to controllers as
/// shared mutable state. Controllers in this repository never write field
/// values; they only toggle the `hidden` display property of enumerated
/// fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Form<'a> {
    doc: PricingRule<'a>,
    fields: HashMap<FieldId, FieldDisplay>,
}

impl<'a> Form<'a> {
    /// A freshly loaded form starts with every field visible. Visibility
    /// is synchronized against the record's flags by the first refresh
    /// event, not here.
    pub fn new(doc: PricingRule<'a>) -> Self {
        let fields = FieldId::ALL
            .iter()
            .map(|id| (*id, FieldDisplay::default()))
            .collect();
        Form { doc, fields }
    }

    /// The record backing this form.
    pub fn doc(&self) -> &PricingRule<'a> {
        &self.doc
    }

    /// Mutable access to the record, for hosts committing user edits.
    pub fn doc_mut(&mut self) -> &mut PricingRule<'a> {
        &mut self.doc
    }

    pub fn hidden(&self, field: FieldId) -> bool {
        self.fields.get(&field).map_or(false, |df| df.hidden)
    }

    pub fn set_hidden(&mut self, field: FieldId, hidden: bool) {
        self.fields.entry(field).or_default().hidden = hidden;
    }

    /// Fields currently rendered to the user, in form order.
    pub fn visible_fields<'f>(&'f self) -> impl Iterator<Item = FieldId> + 'f {
        FieldId::ALL
            .iter()
            .copied()
            .filter(move |id| !self.hidden(*id))
    }
}
