//! Form behavior for the Pricing Rule record.
//!
//! Two checkbox fields on the record, `additional_discount` and
//! `promotional_scheme`, each gate a group of dependent inputs. The
//! controller here reacts to form events and keeps each group's `hidden`
//! display property in lockstep with its flag. Every handler is a
//! stateless re-derivation from the current flag values; running one twice
//! is the same as running it once.

use pricing_rule_core::{FieldId, Form};
use tracing::debug;


/// Fields shown only while `additional_discount` is checked.
pub const DISCOUNT_FIELDS: [FieldId; 3] = [
    FieldId::AddlValidFrom,
    FieldId::AddlValidTo,
    FieldId::AddlDiscountPercentage,
];

/// Fields shown only while `promotional_scheme` is checked.
///
/// `scheme_name` is deliberately absent: the unchecked branch hides it,
/// but no branch ever unhides it. See [`apply_scheme_visibility`].
pub const SCHEME_FIELDS: [FieldId; 3] = [
    FieldId::SchemeMinQty,
    FieldId::SchemeValidFrom,
    FieldId::SchemeValidTo,
];

/// The narrow view of a form this controller needs: read access to the
/// two driver flags, write access to the `hidden` display property.
///
/// Hosts with their own form representation implement this instead of
/// going through [`Form`]. A flag with no committed value must read as
/// `false`.
pub trait FormView {
    fn additional_discount(&self) -> bool;

    fn promotional_scheme(&self) -> bool;

    fn set_hidden(&mut self, field: FieldId, hidden: bool);
}

impl<'a> FormView for Form<'a> {
    fn additional_discount(&self) -> bool {
        self.doc().additional_discount
    }

    fn promotional_scheme(&self) -> bool {
        self.doc().promotional_scheme
    }

    fn set_hidden(&mut self, field: FieldId, hidden: bool) {
        Form::set_hidden(self, field, hidden);
    }
}

/// Form events the controller reacts to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormEvent {
    /// The form was loaded or re-displayed.
    Refresh,
    /// The named field's value was committed by the user or a script.
    FieldChanged(FieldId),
}

/// Routes an event to its handler.
///
/// Changes of fields other than the two driver flags are ignored; the
/// host is free to forward every field change it sees.
pub fn handle_event<V: FormView>(view: &mut V, event: FormEvent) {
    match event {
        FormEvent::Refresh => on_refresh(view),
        FormEvent::FieldChanged(FieldId::AdditionalDiscount) => {
            on_additional_discount_changed(view)
        }
        FormEvent::FieldChanged(FieldId::PromotionalScheme) => {
            on_promotional_scheme_changed(view)
        }
        FormEvent::FieldChanged(_) => {}
    }
}

/// Fired once when the form is loaded, before any field-change event.
/// Synchronizes both groups so a form opened on pre-existing data shows
/// the right fields immediately.
pub fn on_refresh<V: FormView>(view: &mut V) {
    apply_discount_visibility(view);
    apply_scheme_visibility(view);
}

/// Fired whenever `additional_discount` changes.
pub fn on_additional_discount_changed<V: FormView>(view: &mut V) {
    apply_discount_visibility(view);
}

/// Fired whenever `promotional_scheme` changes.
pub fn on_promotional_scheme_changed<V: FormView>(view: &mut V) {
    apply_scheme_visibility(view);
}

/// Shows the [`DISCOUNT_FIELDS`] while the flag is checked, hides them
/// otherwise.
pub fn apply_discount_visibility<V: FormView>(view: &mut V) {
    let checked = view.additional_discount();
    debug!(additional_discount = checked, "toggling discount fields");
    for field in DISCOUNT_FIELDS.iter() {
        view.set_hidden(*field, !checked);
    }
}

/// Shows the [`SCHEME_FIELDS`] while the flag is checked; hides them, and
/// `scheme_name` with them, otherwise.
///
/// `scheme_name` is only ever hidden here, never shown: its visibility on
/// a checked flag is whatever it was before the call.
pub fn apply_scheme_visibility<V: FormView>(view: &mut V) {
    let checked = view.promotional_scheme();
    debug!(promotional_scheme = checked, "toggling scheme fields");
    if checked {
        for field in SCHEME_FIELDS.iter() {
            view.set_hidden(*field, false);
        }
    } else {
        view.set_hidden(FieldId::SchemeName, true);
        for field in SCHEME_FIELDS.iter() {
            view.set_hidden(*field, true);
        }
    }
}
