//! Contact form validation.
//!
//! The form is validated locally and never transmitted.

use crate::events::{Effect, Handler, UiEvent};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Submitted contact form fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingField,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactForm {
    /// Check that every field is filled and the email looks like an address
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [&self.name, &self.email, &self.subject, &self.message];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ContactError::MissingField);
        }

        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Success,
}

/// Message shown under the form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl FormMessage {
    pub fn sent() -> Self {
        Self {
            kind: MessageKind::Success,
            text: "Message Sent!".to_string(),
        }
    }

    pub fn error(error: &ContactError) -> Self {
        Self {
            kind: MessageKind::Error,
            text: error.to_string(),
        }
    }
}

/// Validates submissions and hides the confirmation after a delay
#[derive(Debug, Clone)]
pub struct ContactFormHandler {
    hide_after: Duration,
    // Bumped on every shown message so a stale expiry cannot hide a newer one
    generation: u64,
}

impl ContactFormHandler {
    pub fn new(hide_after: Duration) -> Self {
        Self {
            hide_after,
            generation: 0,
        }
    }

    /// Validate a form and return the effects its outcome triggers
    pub fn submit(&mut self, form: &ContactForm) -> Vec<Effect> {
        self.generation += 1;

        match form.validate() {
            Ok(()) => {
                info!(subject = %form.subject.trim(), "Contact form accepted");
                vec![
                    Effect::ShowFormMessage {
                        message: FormMessage::sent(),
                    },
                    Effect::ResetForm,
                    Effect::ScheduleFormMessageExpiry {
                        after: self.hide_after,
                        generation: self.generation,
                    },
                ]
            }
            Err(e) => {
                debug!(error = %e, "Contact form rejected");
                vec![Effect::ShowFormMessage {
                    message: FormMessage::error(&e),
                }]
            }
        }
    }
}

impl Handler for ContactFormHandler {
    fn handle(&mut self, event: &UiEvent) -> Vec<Effect> {
        match event {
            UiEvent::ContactSubmitted(form) => self.submit(form),
            UiEvent::FormMessageExpired { generation } if *generation == self.generation => {
                vec![Effect::HideFormMessage]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Great site".to_string(),
        }
    }

    #[test]
    fn test_validate_requires_all_fields() {
        assert_eq!(ContactForm::default().validate(), Err(ContactError::MissingField));

        let form = ContactForm {
            subject: "   ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingField));
    }

    #[test]
    fn test_validate_email_shape() {
        for email in ["ann", "ann@example", "ann@@example.com", "a nn@example.com", "@example.com"] {
            let form = ContactForm {
                email: email.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{}", email);
        }

        let form = ContactForm {
            email: "  ann.lee@mail.example.co  ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_success_resets_and_schedules_hide() {
        let mut handler = ContactFormHandler::new(Duration::from_millis(5000));
        let effects = handler.handle(&UiEvent::ContactSubmitted(filled()));

        assert_eq!(
            effects,
            vec![
                Effect::ShowFormMessage {
                    message: FormMessage::sent()
                },
                Effect::ResetForm,
                Effect::ScheduleFormMessageExpiry {
                    after: Duration::from_millis(5000),
                    generation: 1
                },
            ]
        );

        assert_eq!(
            handler.handle(&UiEvent::FormMessageExpired { generation: 1 }),
            vec![Effect::HideFormMessage]
        );
    }

    #[test]
    fn test_error_message_does_not_reset() {
        let mut handler = ContactFormHandler::new(Duration::from_millis(5000));
        let effects = handler.handle(&UiEvent::ContactSubmitted(ContactForm::default()));

        assert_eq!(effects.len(), 1);
        assert!(matches!(
            &effects[0],
            Effect::ShowFormMessage { message } if message.kind == MessageKind::Error
                && message.text == "Please fill in all fields."
        ));
    }

    #[test]
    fn test_stale_expiry_is_ignored() {
        let mut handler = ContactFormHandler::new(Duration::from_millis(5000));
        handler.handle(&UiEvent::ContactSubmitted(filled()));
        handler.handle(&UiEvent::ContactSubmitted(ContactForm::default()));

        assert!(handler
            .handle(&UiEvent::FormMessageExpired { generation: 1 })
            .is_empty());
    }
}
