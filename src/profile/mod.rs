//! Profile domain: the captured record and the pure transformations on it
//!
//! - `mask`: birth date input mask
//! - `age`: completed-birthday age
//! - `declaration`: declaration text built from the record

mod age;
mod declaration;
mod mask;

pub use age::age_on;
pub use declaration::{compose, ComposedDocument};
pub use mask::{format_birth_date, BIRTH_DATE_MAX_LEN};

/// Flat record of everything the profile form captures.
///
/// Completeness is judged on the form (`ProfileForm::is_valid`), not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub name: String,
    pub email: String,
    pub address: String,
    pub birth_date: String,
    pub phone: String,
    pub terms_accepted: bool,
}
