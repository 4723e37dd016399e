//! Open/close lifecycle for the enrollment modal.
//!
//! While open, the modal listens for pointer presses anywhere on screen and
//! closes on any press outside its content. The listener exists only while
//! the modal is open.

use crate::error::EnrollmentError;

use super::form::{Enrollment, EnrollmentForm};

/// Visibility plus the outside-press listener registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    listening: bool,
}

impl ModalState {
    /// Create a closed modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the modal is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Check if the outside-press listener is registered.
    pub fn listening(&self) -> bool {
        self.listening
    }

    /// Show the modal and register the outside-press listener.
    pub fn open(&mut self) {
        if !self.open {
            log::debug!("[modal] open, listening for outside presses");
        }
        self.open = true;
        self.listening = true;
    }

    /// Hide the modal and drop the listener.
    pub fn close(&mut self) {
        if self.open {
            log::debug!("[modal] closed");
        }
        self.open = false;
        self.listening = false;
    }

    /// Feed a pointer press. `inside` is whether it hit the modal content.
    ///
    /// Returns `true` if the press closed the modal.
    pub fn pointer_down(&mut self, inside: bool) -> bool {
        if !self.listening || inside {
            return false;
        }
        log::trace!("[modal] outside press");
        self.close();
        true
    }
}

/// The enrollment modal: form state plus visibility.
///
/// Closing keeps whatever was typed; only a successful submit clears it.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentModal {
    pub state: ModalState,
    pub form: EnrollmentForm,
}

impl EnrollmentModal {
    /// Create a closed modal with an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and submit.
    ///
    /// On success the modal closes and the form resets. On failure the modal
    /// stays open with the form untouched.
    pub fn submit(&mut self) -> Result<Enrollment, EnrollmentError> {
        let enrollment = self.form.submit()?;
        log::debug!(
            "[modal] enrolled {} term {}",
            enrollment.course.value(),
            enrollment.term
        );
        self.state.close();
        Ok(enrollment)
    }
}
