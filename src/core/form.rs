// Contact form validation and the local submission path.

use super::constants::{FORM_INCOMPLETE_MESSAGE, FORM_SENT_MESSAGE};
use std::fmt;
use thiserror::Error;

/// Required fields of the contact form, in validation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// The `name` attribute of the form control.
    #[inline]
    pub fn control_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("required field `{0}` is empty")]
    MissingField(Field),
}

/// Values read from the contact form. Missing controls read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactSubmission {
    /// Build from a lookup keyed by control name (e.g. `FormData::get`).
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut read = |field: Field| lookup(field.control_name()).unwrap_or_default();
        Self {
            name: read(Field::Name),
            email: read(Field::Email),
            phone: read(Field::Phone),
            message: read(Field::Message),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Presence check only: every required value must be non-empty.
    /// Reports the first missing field.
    pub fn validate(&self) -> Result<(), FormError> {
        match Field::ALL.into_iter().find(|f| self.value(*f).is_empty()) {
            Some(field) => Err(FormError::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// Hand-off point for a validated submission.
pub trait Submitter {
    fn submit(&self, submission: &ContactSubmission);
}

/// Keeps the submission in the page: nothing leaves the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalSubmitter;

impl Submitter for LocalSubmitter {
    fn submit(&self, submission: &ContactSubmission) {
        log::info!(
            "[form] accepted submission from {} ({} chars)",
            submission.email,
            submission.message.chars().count()
        );
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Sent,
    Incomplete(FormError),
}

impl FormOutcome {
    pub fn notification(&self) -> &'static str {
        match self {
            FormOutcome::Sent => FORM_SENT_MESSAGE,
            FormOutcome::Incomplete(_) => FORM_INCOMPLETE_MESSAGE,
        }
    }

    /// Only a sent form is cleared; an incomplete one keeps its input.
    #[inline]
    pub fn clears_form(&self) -> bool {
        matches!(self, FormOutcome::Sent)
    }
}

/// Validate and, on success, hand the submission to `submitter`.
pub fn process_submission(
    submission: &ContactSubmission,
    submitter: &impl Submitter,
) -> FormOutcome {
    match submission.validate() {
        Ok(()) => {
            submitter.submit(submission);
            FormOutcome::Sent
        }
        Err(e) => {
            log::info!("[form] rejected: {}", e);
            FormOutcome::Incomplete(e)
        }
    }
}
