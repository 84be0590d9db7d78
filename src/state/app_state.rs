//! Application state definitions

use super::forms::{Form, ProfileForm, SubmitGate};
use std::collections::VecDeque;

/// Everything the UI renders, owned by `App`
#[derive(Debug, Default)]
pub struct AppState {
    /// The one current form value; replaced wholesale on every edit
    pub form: ProfileForm,
    /// Pending error messages, shown one at a time
    pub errors: VecDeque<String>,
    /// Informational message shown after a successful export
    pub notice: Option<String>,
}

impl AppState {
    /// Swap in the form produced by `update`, logging submit gate transitions
    pub fn update_form(&mut self, update: impl FnOnce(ProfileForm) -> ProfileForm) {
        let before = self.form.gate();
        self.form = update(std::mem::take(&mut self.form));
        let after = self.form.gate();
        if before != after {
            tracing::debug!("Submit gate changed: {:?} -> {:?}", before, after);
        }
    }

    pub fn gate(&self) -> SubmitGate {
        self.form.gate()
    }

    /// Discard the captured values and start over on the first field
    pub fn reset_form(&mut self) {
        self.update_form(|_| ProfileForm::new());
    }

    pub fn next_form_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_form_field(&mut self) {
        self.form.prev_field();
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// True while a dialog is covering the form
    pub fn has_modal(&self) -> bool {
        self.has_errors() || self.notice.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, FieldValue};

    fn filled(form: ProfileForm) -> ProfileForm {
        form.set_field(FieldName::Name, FieldValue::Text("Ana".into()))
            .set_field(FieldName::Email, FieldValue::Text("a@b.com".into()))
            .set_field(FieldName::Address, FieldValue::Text("Rua 1".into()))
            .set_field(FieldName::BirthDate, FieldValue::Text("01/01/2000".into()))
            .set_field(FieldName::Phone, FieldValue::Text("11999999999".into()))
            .set_field(FieldName::TermsAccepted, FieldValue::Toggle(true))
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.gate(), SubmitGate::Incomplete);
        assert!(!state.has_errors());
        assert!(!state.has_modal());
        assert!(state.current_error().is_none());
    }

    #[test]
    fn test_update_form_replaces_value() {
        let mut state = AppState::default();
        state.update_form(filled);
        assert_eq!(state.gate(), SubmitGate::Complete);
        state.update_form(ProfileForm::with_terms_toggled);
        assert_eq!(state.gate(), SubmitGate::Incomplete);
    }

    #[test]
    fn test_reset_form() {
        let mut state = AppState::default();
        state.update_form(filled);
        state.next_form_field();
        state.reset_form();
        assert_eq!(state.form, ProfileForm::new());
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert!(state.has_modal());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_dismiss_error_on_empty_queue() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_notice_is_modal() {
        let mut state = AppState::default();
        state.notice = Some("PDF Gerado".to_string());
        assert!(state.has_modal());
        state.dismiss_notice();
        assert!(!state.has_modal());
    }

    #[test]
    fn test_form_navigation() {
        let mut state = AppState::default();
        state.prev_form_field();
        assert!(state.form.is_submit_row_active());
        state.next_form_field();
        assert_eq!(state.form.active_field_index, 0);
    }
}
