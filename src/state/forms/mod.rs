//! Form domain layer
//!
//! Type-safe fields and the profile form built from them.

mod field;
mod form_state;

pub use field::{FieldName, FieldValue, FormField, InputMask};
pub use form_state::{Form, ProfileForm, SubmitGate, SUBMIT_ROW};
