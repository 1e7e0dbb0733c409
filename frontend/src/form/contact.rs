use serde::Serialize;

use super::options::ContactSubject;
use super::submission::{Receipt, SubmissionStatus, Submission, SubmitBlocked, SubmitError};
use super::validation::{choice, email, min_chars, ValidationErrors, EMAIL_MESSAGE, NAME_MESSAGE};

pub const SUBJECT_MESSAGE: &str = "Please select a subject";
pub const MESSAGE_MESSAGE: &str = "Message must be at least 10 characters";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn key(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactValues {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactValues {
    pub fn text(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_text(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: ContactSubject,
    pub message: String,
}

pub fn validate_contact(values: &ContactValues) -> Result<ContactMessage, ValidationErrors<ContactField>> {
    let mut errors = ValidationErrors::new();
    let name = errors.capture(ContactField::Name, min_chars(&values.name, 2, NAME_MESSAGE));
    let email = errors.capture(ContactField::Email, email(&values.email, EMAIL_MESSAGE));
    let subject = errors.capture(
        ContactField::Subject,
        choice::<ContactSubject>(&values.subject, SUBJECT_MESSAGE),
    );
    let message = errors.capture(ContactField::Message, min_chars(&values.message, 10, MESSAGE_MESSAGE));

    let (Some(name), Some(email), Some(subject), Some(message)) = (name, email, subject, message) else {
        return Err(errors);
    };
    Ok(ContactMessage {
        name,
        email,
        subject,
        message,
    })
}

/// State behind the contact page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    values: ContactValues,
    errors: ValidationErrors<ContactField>,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn values(&self) -> &ContactValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors<ContactField> {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Updates a field. A field already showing an error is re-checked so the
    /// message clears as soon as the input becomes valid.
    pub fn set_text(&mut self, field: ContactField, value: String) {
        self.values.set_text(field, value);
        if self.errors.contains(field) {
            let fresh = match validate_contact(&self.values) {
                Ok(_) => ValidationErrors::new(),
                Err(all) => all,
            };
            self.errors.remove(field);
            if let Some(message) = fresh.get(field) {
                self.errors.insert(field, message);
            }
        }
    }

    pub fn reject(&mut self, errors: ValidationErrors<ContactField>) {
        self.errors = errors;
    }

    pub fn begin_submission(&mut self) -> Result<Submission, SubmitBlocked<ContactField>> {
        if self.status.is_pending() {
            return Err(SubmitBlocked::InFlight);
        }
        match validate_contact(&self.values) {
            Ok(message) => {
                self.errors = ValidationErrors::new();
                self.status.begin();
                Ok(Submission::Contact(message))
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    /// Applies an accepted `begin_submission` made on a snapshot. Returns
    /// `false` and changes nothing when a submission is already in flight.
    pub fn mark_pending(&mut self) -> bool {
        if !self.status.begin() {
            return false;
        }
        self.errors = ValidationErrors::new();
        true
    }

    /// Success clears the form; failure keeps it for a retry.
    pub fn finish_submission(&mut self, outcome: Result<Receipt, SubmitError>) {
        if outcome.is_ok() {
            self.values = ContactValues::default();
            self.errors = ValidationErrors::new();
        }
        self.status.settle(outcome);
    }

    /// Returns to the empty form after the success panel.
    pub fn start_over(&mut self) {
        *self = ContactForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactValues {
        ContactValues {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            subject: "mentor".to_string(),
            message: "Looking for a mentor for my ML project".to_string(),
        }
    }

    #[test]
    fn valid_message_is_typed() {
        let message = validate_contact(&filled()).expect("valid");
        assert_eq!(message.subject, ContactSubject::Mentor);
    }

    #[test]
    fn every_field_is_required() {
        let errors = validate_contact(&ContactValues::default()).expect_err("empty");
        assert_eq!(errors.get(ContactField::Name), Some(NAME_MESSAGE));
        assert_eq!(errors.get(ContactField::Email), Some(EMAIL_MESSAGE));
        assert_eq!(errors.get(ContactField::Subject), Some(SUBJECT_MESSAGE));
        assert_eq!(errors.get(ContactField::Message), Some(MESSAGE_MESSAGE));
    }

    #[test]
    fn errors_clear_as_the_visitor_types() {
        let mut form = ContactForm::default();
        assert!(matches!(form.begin_submission(), Err(SubmitBlocked::Invalid(_))));
        assert!(form.errors().contains(ContactField::Message));

        form.set_text(ContactField::Message, "too short".to_string());
        assert!(form.errors().contains(ContactField::Message));
        form.set_text(ContactField::Message, "long enough now".to_string());
        assert!(!form.errors().contains(ContactField::Message));
        assert!(form.errors().contains(ContactField::Name));
    }

    #[test]
    fn one_submission_at_a_time_and_reset_on_success() {
        let mut form = ContactForm::default();
        for field in [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message] {
            form.set_text(field, filled().text(field).to_string());
        }

        assert!(matches!(form.begin_submission(), Ok(Submission::Contact(_))));
        assert_eq!(form.begin_submission(), Err(SubmitBlocked::InFlight));

        form.finish_submission(Ok(Receipt {
            submitted_at: Utc::now(),
        }));
        assert_eq!(form.values(), &ContactValues::default());
        assert!(matches!(form.status(), SubmissionStatus::Succeeded(_)));
    }

    #[test]
    fn failure_keeps_values() {
        let mut form = ContactForm::default();
        for field in [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message] {
            form.set_text(field, filled().text(field).to_string());
        }
        form.begin_submission().expect("valid");
        form.finish_submission(Err(SubmitError::Offline));

        assert_eq!(form.values(), &filled());
        assert!(form.status().failure().is_some());
    }

    #[test]
    fn mark_pending_refuses_while_in_flight() {
        let mut form = ContactForm::default();
        assert!(form.mark_pending());
        assert!(!form.mark_pending());
        assert!(form.status().is_pending());
    }
}
