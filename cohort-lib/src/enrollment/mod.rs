//! Enrollment (cohort registration) form and its modal.
//!
//! Independent of the table controller: the two share no state.

mod form;
mod modal;

pub use form::{Course, Enrollment, EnrollmentForm, format_korean_date};
pub use modal::{EnrollmentModal, ModalState};
