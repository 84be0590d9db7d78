//! Form rendering module
//!
//! - `field_renderer`: text field and checkbox rendering
//! - `profile_form`: the profile form screen

mod field_renderer;
mod profile_form;

pub use profile_form::draw_profile_form;
#[cfg(test)]
pub use profile_form::{SUBMIT_LABEL, WARNING_TEXT};
