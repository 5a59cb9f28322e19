use super::submit::{SubmissionPayload, SubmitOutcome};
use super::validation::{validate, Validation, ValidationResult};
use super::{Field, FormFields, FormKind};

/// Banner shown under the form after a submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Error(String),
}

/// Why a submit attempt did not produce a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// The previous submission has not settled yet.
    InFlight,
    /// Field errors were recorded for display.
    Invalid,
    /// Honeypot tripped. Nothing is recorded or shown.
    Bot,
}

/// State of one form instance across edits and submit attempts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub errors: ValidationResult,
    pub status: Option<Status>,
    submitting: bool,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            fields: FormFields::new(kind),
            errors: ValidationResult::default(),
            status: None,
            submitting: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Stores a new value and drops any error shown for that field.
    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.errors.clear(field);
    }

    /// Validates and, when the form is good to go, marks it in flight and
    /// hands back the payload to send. Until [`FormState::finish`] runs, any
    /// further attempt is refused.
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        match validate(&self.fields) {
            Validation::Rejected => Err(SubmitBlocked::Bot),
            Validation::Invalid(errors) => {
                self.errors = errors;
                Err(SubmitBlocked::Invalid)
            }
            Validation::Valid => {
                self.errors = ValidationResult::default();
                self.status = None;
                self.submitting = true;
                Ok(SubmissionPayload::from(&self.fields))
            }
        }
    }

    /// Settles an in-flight submission. Success wipes what was typed;
    /// failure keeps it so the user can retry.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        if outcome.success {
            self.fields.clear_entries();
            self.status = Some(Status::Success(
                self.fields.kind.success_message().to_string(),
            ));
        } else {
            self.status = Some(Status::Error(outcome.message));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submit::submit;
    use crate::forms::submit::tests::RecordingTransport;
    use crate::forms::Platform;
    use futures::executor::block_on;

    fn filled_feedback() -> FormState {
        let mut form = FormState::new(FormKind::Feedback);
        form.edit(Field::Name, "Ada".into());
        form.edit(Field::Email, "ada@example.com".into());
        form.edit(Field::Comment, "Great app".into());
        form
    }

    #[test]
    fn feedback_round_trip_through_the_webhook() {
        let mut form = filled_feedback();
        let transport = RecordingTransport::default();

        let payload = form.begin_submit().expect("form is valid");
        assert!(form.is_submitting());

        let outcome = block_on(submit(Some("https://hook.example"), &payload, &transport));
        form.finish(outcome);

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        let body: serde_json::Value = serde_json::from_str(&sent[0].1).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "comment": "Great app",
                "type": "feedback",
            })
        );

        assert!(!form.is_submitting());
        assert_eq!(
            form.status,
            Some(Status::Success(
                "Thanks for your feedback! We appreciate your input.".into()
            ))
        );
        assert!(form.fields.name.is_empty());
        assert!(form.fields.email.is_empty());
        assert!(form.fields.comment.is_empty());
        assert_eq!(form.fields.kind, FormKind::Feedback);
    }

    #[test]
    fn second_attempt_while_in_flight_is_refused() {
        let mut form = filled_feedback();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));

        form.finish(SubmitOutcome {
            success: false,
            message: "Failed to submit form. Please try again.".into(),
        });
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn failure_keeps_fields_and_shows_error() {
        let mut form = filled_feedback();
        form.begin_submit().unwrap();
        form.finish(SubmitOutcome {
            success: false,
            message: "Failed to submit form. Please try again.".into(),
        });

        assert_eq!(form.fields.name, "Ada");
        assert_eq!(form.fields.comment, "Great app");
        assert_eq!(
            form.status,
            Some(Status::Error("Failed to submit form. Please try again.".into()))
        );
    }

    #[test]
    fn empty_form_records_errors_and_sends_nothing() {
        let mut form = FormState::new(FormKind::Feedback);
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert!(!form.is_submitting());
        assert_eq!(form.errors.len(), 3);
        assert_eq!(form.status, None);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = FormState::new(FormKind::Feedback);
        let _ = form.begin_submit();
        form.edit(Field::Name, "A".into());
        assert_eq!(form.error(Field::Name), None);
        assert_eq!(form.error(Field::Email), Some("Email is required"));
    }

    #[test]
    fn honeypot_blocks_without_any_feedback() {
        let mut form = filled_feedback();
        form.edit(Field::Honeypot, "buy now".into());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Bot));
        assert!(form.errors.is_empty());
        assert_eq!(form.status, None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn waitlist_success_keeps_platform() {
        let mut form = FormState::new(FormKind::Waitlist);
        form.edit(Field::Name, "Ada".into());
        form.edit(Field::Email, "ada@example.com".into());
        form.edit(Field::Platform, "android".into());

        let payload = form.begin_submit().unwrap();
        assert_eq!(payload.platform, Some(Platform::Android));
        assert_eq!(payload.comment, None);

        form.finish(block_on(submit(None, &payload, &RecordingTransport::default())));
        assert_eq!(form.fields.platform, Some(Platform::Android));
        assert!(form.fields.email.is_empty());
        assert!(matches!(form.status, Some(Status::Success(_))));
    }
}
