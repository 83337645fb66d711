//! Contact form state.
//!
//! DESIGN
//! ======
//! Field edits, the in-flight flag and the status banner live together so the
//! submit button, spinner and banner all render from one signal. Each status
//! change bumps `status_seq`; the delayed "back to idle" reset only applies if
//! no newer status has been shown in the meantime.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactRequest;

/// How long the success banner stays up before the form returns to idle.
pub const STATUS_RESET_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Form control `name`/`id` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Values currently typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success,
    Error(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: FormState,
    pub submitting: bool,
    pub status: SubmitStatus,
    status_seq: u64,
}

impl ContactState {
    /// Mark the form in flight and return the payload to send.
    ///
    /// Returns `None` if a submission is already running.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.status = SubmitStatus::Idle;
        Some(self.form.to_request())
    }

    /// Record the outcome of a submission. Success clears the fields; failure
    /// keeps them so the visitor can retry.
    ///
    /// Returns the status sequence to hand to [`ContactState::reset_status`].
    pub fn finish_submit(&mut self, outcome: Result<(), String>) -> u64 {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.form.clear();
                self.status = SubmitStatus::Success;
            }
            Err(message) => self.status = SubmitStatus::Error(message),
        }
        self.status_seq += 1;
        self.status_seq
    }

    /// Return to idle, unless a newer status replaced the one from `seq`.
    pub fn reset_status(&mut self, seq: u64) {
        if seq == self.status_seq {
            self.status = SubmitStatus::Idle;
        }
    }
}
