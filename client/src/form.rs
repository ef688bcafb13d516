//! The feedback form as a state machine.
//!
//! A single tagged state rules out impossible combinations like "busy and
//! showing an error banner at once". Submission is two-phase so the machine
//! stays pure: `begin_submit` validates and hands the payload to whoever owns
//! the transport, `finish_submit` feeds the outcome back in.

use feedback::{
    payloads::{ApiResult, FeedbackSubmission},
    validation::{Field, validate},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Error(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackForm {
    name: String,
    email: String,
    phone: String,
    errors: FieldErrors,
    state: FormState,
}

impl Default for FeedbackForm {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            errors: FieldErrors::default(),
            state: FormState::Idle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    // Editing a field clears that field's error, nothing else.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.name = None;
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
        self.errors.email = None;
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.phone = value.into();
        self.errors.phone = None;
    }

    /// Validates the current values. On success the form goes busy and the
    /// payload to send is handed back; on failure the per-field errors are
    /// set and nothing leaves the form. A no-op while a submission is already
    /// in flight.
    pub fn begin_submit(&mut self) -> Option<FeedbackSubmission> {
        if self.is_submitting() {
            return None;
        }

        let submission = self.submission();
        let failures = validate(&submission);

        if !failures.is_empty() {
            for failure in failures {
                let message = Some(failure.message.to_string());

                match failure.field {
                    Field::Name => self.errors.name = message,
                    Field::Email => self.errors.email = message,
                    Field::Phone => self.errors.phone = message,
                }
            }

            return None;
        }

        self.state = FormState::Submitting;
        Some(submission)
    }

    /// Feeds the submission outcome back in. Success resets the form to empty
    /// and returns true so the parent shell can swap views; failure keeps the
    /// entered values for correction and shows the message.
    pub fn finish_submit(&mut self, result: ApiResult) -> bool {
        if result.success {
            *self = Self::new();

            true
        } else {
            self.state = FormState::Error(result.message);

            false
        }
    }

    fn submission(&self) -> FeedbackSubmission {
        FeedbackSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: if self.phone.trim().is_empty() {
                None
            } else {
                Some(self.phone.clone())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FeedbackForm, FormState};
    use feedback::{
        payloads::ApiResult,
        validation::{EMAIL_INVALID, NAME_REQUIRED, PHONE_INVALID},
    };

    fn filled_form() -> FeedbackForm {
        let mut form = FeedbackForm::new();
        form.set_name("Ada Lovelace");
        form.set_email("ada@example.com");

        form
    }

    #[test]
    fn test_invalid_submit_sets_field_errors() {
        let mut form = FeedbackForm::new();
        form.set_email("bad");
        form.set_phone("123");

        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.state(), &FormState::Idle);
        assert_eq!(form.errors().name.as_deref(), Some(NAME_REQUIRED));
        assert_eq!(form.errors().email.as_deref(), Some(EMAIL_INVALID));
        assert_eq!(form.errors().phone.as_deref(), Some(PHONE_INVALID));
    }

    #[test]
    fn test_edit_clears_field_error() {
        let mut form = FeedbackForm::new();
        form.begin_submit();
        assert!(form.errors().name.is_some());

        form.set_name("Ada");
        assert_eq!(form.errors().name, None);
        // Untouched fields keep their errors.
        assert!(form.errors().email.is_some());
    }

    #[test]
    fn test_valid_submit_goes_busy() {
        let mut form = filled_form();

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.name, "Ada Lovelace");
        assert_eq!(submission.phone, None);
        assert!(form.is_submitting());

        // Re-entry while in flight is a no-op.
        assert_eq!(form.begin_submit(), None);
        assert!(form.is_submitting());
    }

    #[test]
    fn test_empty_phone_sent_as_absent() {
        let mut form = filled_form();
        form.set_phone("   ");

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.phone, None);
    }

    #[test]
    fn test_success_resets_and_signals() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let done = form.finish_submit(ApiResult::success("Feedback submitted successfully!"));

        assert!(done);
        assert_eq!(form.state(), &FormState::Idle);
        assert_eq!(form.name(), "");
        assert_eq!(form.email(), "");
        assert_eq!(form.phone(), "");
    }

    #[test]
    fn test_failure_keeps_values() {
        let mut form = filled_form();
        form.begin_submit().unwrap();

        let done = form.finish_submit(ApiResult::failure("server said no"));

        assert!(!done);
        assert_eq!(form.state(), &FormState::Error("server said no".to_string()));
        assert_eq!(form.name(), "Ada Lovelace");
        assert_eq!(form.email(), "ada@example.com");

        // Still ready for another attempt.
        assert!(form.begin_submit().is_some());
    }
}
