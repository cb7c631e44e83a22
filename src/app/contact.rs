//! Contact form state machine.
//!
//! Idle -> (submit) -> Sending -> Success | Error; Success auto-resets to
//! Idle after [`SUCCESS_CLEAR_SECS`]. Success clears the fields, Error
//! retains them so the user can retry without retyping. While a dispatch is
//! in flight further submits are rejected.

use chrono::Utc;
use thiserror::Error;

use super::emailjs::EmailPayload;

/// How long the success indicator stays up before auto-clearing.
pub const SUCCESS_CLEAR_SECS: f64 = 10.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("A message is already being sent.")]
    InFlight,
    #[error("Please fill in your name, email and message.")]
    MissingField,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Shallow plausibility check, the desktop stand-in for the browser's
/// `type="email"` validation. The service does its own real validation.
pub fn valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !address.contains(char::is_whitespace)
}

/// Client-computed submission timestamp, UTC.
pub fn sent_date_now() -> String {
    Utc::now().format("%m/%d/%Y, %H:%M").to_string()
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: ContactFields::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Sending
    }

    /// Validate and move into Sending. On success the caller gets the
    /// payload to hand to the dispatch thread; on rejection the status is
    /// left untouched.
    pub fn begin_submit(
        &mut self,
        fields: ContactFields,
        sent_date: String,
    ) -> Result<EmailPayload, SubmitError> {
        if !self.can_submit() {
            return Err(SubmitError::InFlight);
        }
        if fields.name.trim().is_empty()
            || fields.email.trim().is_empty()
            || fields.message.trim().is_empty()
        {
            return Err(SubmitError::MissingField);
        }
        if !valid_email(fields.email.trim()) {
            return Err(SubmitError::InvalidEmail);
        }

        self.fields = fields;
        self.status = SubmissionStatus::Sending;
        Ok(EmailPayload {
            from_name: self.fields.name.trim().to_string(),
            from_email: self.fields.email.trim().to_string(),
            message: self.fields.message.trim().to_string(),
            sent_date,
        })
    }

    /// The dispatch thread reported back. Success clears the fields; failure
    /// keeps them for a manual retry.
    pub fn finish_submit(&mut self, delivered: bool) {
        if self.status != SubmissionStatus::Sending {
            // A stray completion after e.g. a status reset; nothing to do.
            return;
        }
        if delivered {
            self.fields = ContactFields::default();
            self.status = SubmissionStatus::Success;
        } else {
            self.status = SubmissionStatus::Error;
        }
    }

    /// The success auto-clear timer fired. Only Success resets; Error stays
    /// up until the next submit.
    pub fn clear_status(&mut self) {
        if self.status == SubmissionStatus::Success {
            self.status = SubmissionStatus::Idle;
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn test_successful_submission_lifecycle() {
        let mut form = ContactForm::new();
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let payload = form
            .begin_submit(filled(), "08/23/2026, 12:00".to_string())
            .unwrap();
        assert_eq!(form.status(), SubmissionStatus::Sending);
        assert_eq!(payload.from_name, "Ada Lovelace");
        assert_eq!(payload.sent_date, "08/23/2026, 12:00");

        form.finish_submit(true);
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.fields().is_empty());

        form.clear_status();
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_failed_submission_retains_fields() {
        let mut form = ContactForm::new();
        form.begin_submit(filled(), sent_date_now()).unwrap();
        form.finish_submit(false);

        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields(), &filled());

        // Error has no auto-clear
        form.clear_status();
        assert_eq!(form.status(), SubmissionStatus::Error);
    }

    #[test]
    fn test_submit_while_sending_is_rejected() {
        let mut form = ContactForm::new();
        form.begin_submit(filled(), sent_date_now()).unwrap();
        assert!(!form.can_submit());
        assert_eq!(
            form.begin_submit(filled(), sent_date_now()),
            Err(SubmitError::InFlight)
        );
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn test_missing_fields_rejected_without_leaving_idle() {
        let mut form = ContactForm::new();
        let mut fields = filled();
        fields.message = "   ".to_string();
        assert_eq!(
            form.begin_submit(fields, sent_date_now()),
            Err(SubmitError::MissingField)
        );
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_invalid_email_rejected() {
        let mut form = ContactForm::new();
        let mut fields = filled();
        fields.email = "not-an-address".to_string();
        assert_eq!(
            form.begin_submit(fields, sent_date_now()),
            Err(SubmitError::InvalidEmail)
        );
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_retry_after_error_is_allowed() {
        let mut form = ContactForm::new();
        form.begin_submit(filled(), sent_date_now()).unwrap();
        form.finish_submit(false);
        assert!(form.can_submit());
        assert!(form.begin_submit(filled(), sent_date_now()).is_ok());
        assert_eq!(form.status(), SubmissionStatus::Sending);
    }

    #[test]
    fn test_stray_completion_is_ignored() {
        let mut form = ContactForm::new();
        form.finish_submit(true);
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_payload_is_trimmed() {
        let mut form = ContactForm::new();
        let fields = ContactFields {
            name: "  Ada  ".to_string(),
            email: " ada@example.com ".to_string(),
            message: " Hello ".to_string(),
        };
        let payload = form.begin_submit(fields, sent_date_now()).unwrap();
        assert_eq!(payload.from_name, "Ada");
        assert_eq!(payload.from_email, "ada@example.com");
        assert_eq!(payload.message, "Hello");
    }

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@b.co"));
        assert!(valid_email("first.last@sub.domain.org"));
        assert!(!valid_email("plain"));
        assert!(!valid_email("@domain.com"));
        assert!(!valid_email("user@"));
        assert!(!valid_email("user@nodot"));
        assert!(!valid_email("user@.com"));
        assert!(!valid_email("us er@domain.com"));
    }

    #[test]
    fn test_sent_date_shape() {
        let date = sent_date_now();
        // MM/DD/YYYY, HH:MM
        assert_eq!(date.len(), 17);
        assert_eq!(&date[2..3], "/");
        assert_eq!(&date[5..6], "/");
        assert_eq!(&date[10..12], ", ");
        assert_eq!(&date[14..15], ":");
    }
}
