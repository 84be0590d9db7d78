//! Profile form state and the submit gate

use super::{FieldName, FieldValue, FormField, InputMask};
use crate::profile::{ProfileFields, BIRTH_DATE_MAX_LEN};

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Whether the form may be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitGate {
    #[default]
    Incomplete,
    Complete,
}

impl SubmitGate {
    pub fn is_open(self) -> bool {
        matches!(self, SubmitGate::Complete)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Incomplete => "Incompleto",
            Self::Complete => "Completo",
        }
    }
}

/// Index of the submit button row, after the six inputs
pub const SUBMIT_ROW: usize = 6;

/// The single-screen profile form.
///
/// Edits consume the form and hand back the updated one, so the owner always
/// swaps in a whole new value instead of mutating a shared record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileForm {
    pub name: FormField,
    pub email: FormField,
    pub address: FormField,
    pub birth_date: FormField,
    pub phone: FormField,
    pub terms: FormField,
    pub active_field_index: usize,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldName::Name),
            email: FormField::text(FieldName::Email),
            address: FormField::text(FieldName::Address),
            birth_date: FormField::masked(
                FieldName::BirthDate,
                InputMask::BirthDate,
                BIRTH_DATE_MAX_LEN,
            ),
            phone: FormField::text(FieldName::Phone),
            terms: FormField::toggle(FieldName::TermsAccepted),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Address => &self.address,
            FieldName::BirthDate => &self.birth_date,
            FieldName::Phone => &self.phone,
            FieldName::TermsAccepted => &self.terms,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Address => &mut self.address,
            FieldName::BirthDate => &mut self.birth_date,
            FieldName::Phone => &mut self.phone,
            FieldName::TermsAccepted => &mut self.terms,
        }
    }

    /// Replace a field's value. No validation happens at write time.
    pub fn set_field(mut self, name: FieldName, value: FieldValue) -> Self {
        self.field_mut(name).set(value);
        self
    }

    /// Type a character into the active field
    pub fn with_char(mut self, c: char) -> Self {
        if let Some(field) = self.get_active_field_mut() {
            field.push_char(c);
        }
        self
    }

    /// Delete the last character of the active field
    pub fn with_backspace(mut self) -> Self {
        if let Some(field) = self.get_active_field_mut() {
            field.pop_char();
        }
        self
    }

    pub fn with_terms_toggled(self) -> Self {
        let accepted = !self.terms.as_toggle();
        self.set_field(FieldName::TermsAccepted, FieldValue::Toggle(accepted))
    }

    /// Fields still blank or unchecked, in display order
    pub fn missing_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|name| !self.field(*name).is_filled())
            .collect()
    }

    /// True iff every text field is non-blank and the terms are accepted.
    /// Recomputed from the current values on every call.
    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn gate(&self) -> SubmitGate {
        if self.is_valid() {
            SubmitGate::Complete
        } else {
            SubmitGate::Incomplete
        }
    }

    /// Snapshot of the current values as a flat record
    pub fn fields(&self) -> ProfileFields {
        ProfileFields {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            address: self.address.as_text().to_string(),
            birth_date: self.birth_date.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            terms_accepted: self.terms.as_toggle(),
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    /// Returns true if the terms checkbox is currently active
    pub fn is_terms_active(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(FormField::is_toggle)
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ProfileForm {
    fn field_count(&self) -> usize {
        FieldName::ALL.len() + 1 // six inputs, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let name = *FieldName::ALL.get(self.active_field_index)?;
        Some(self.field_mut(name))
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}
