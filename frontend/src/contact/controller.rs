//! State of the contact form, kept free of browser calls so the whole
//! submit flow can be driven from tests.
//!
//! ```text
//! Idle --submit(valid)--> Submitting --complete/cancel--> Idle
//! Idle --submit(invalid)--> Idle (errors shown)
//! ```

use fortisecure_shared::{
    ContactInput, ContactSubmission, DeepLink, Field, ValidationErrors, WhatsAppChannel,
};
use log::info;

use crate::components::toast::Notice;
use crate::contact::transport::SubmissionError;

pub const SUCCESS_NOTICE: &str = "Message sent successfully! We will contact you soon.";
pub const FAILURE_NOTICE: &str =
    "Failed to send your message. Please try again or reach us on WhatsApp.";
pub const REJECTED_NOTICE: &str = "Please correct the highlighted fields.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting {
        ticket: SubmissionTicket,
        submission: ContactSubmission,
    },
}

/// Handed to the transport; its result must come back with the same ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub submission: ContactSubmission,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    InFlight,
    Invalid(ValidationErrors),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent { notice: Notice, deep_link: DeepLink },
    Failed { notice: Notice },
    /// The submission was cancelled or superseded.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContactFormController {
    input: ContactInput,
    errors: ValidationErrors,
    phase: Phase,
    // Once a submit has failed validation, edits re-check their field.
    revalidate_on_edit: bool,
    next_ticket: u64,
    channel: WhatsAppChannel,
}

impl ContactFormController {
    pub fn new(channel: WhatsAppChannel) -> Self {
        Self {
            input: ContactInput::default(),
            errors: ValidationErrors::default(),
            phase: Phase::Idle,
            revalidate_on_edit: false,
            next_ticket: 0,
            channel,
        }
    }

    pub fn input(&self) -> &ContactInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting { .. })
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.input.set(field, value);
        if self.revalidate_on_edit {
            match self.input.check_field(field) {
                Ok(()) => {
                    self.errors.remove(field);
                }
                Err(error) => self.errors.insert(field, error),
            }
        }
    }

    pub fn submit(&mut self) -> Result<PendingSubmission, SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }

        let submission = match self.input.validate() {
            Ok(submission) => submission,
            Err(errors) => {
                self.errors = errors.clone();
                self.revalidate_on_edit = true;
                return Err(SubmitRejected::Invalid(errors));
            }
        };

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.errors = ValidationErrors::default();
        self.phase = Phase::Submitting {
            ticket,
            submission: submission.clone(),
        };
        info!("Contact submission {:?} started", ticket);

        Ok(PendingSubmission { ticket, submission })
    }

    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<(), SubmissionError>,
    ) -> SubmissionOutcome {
        let submission = match &self.phase {
            Phase::Submitting {
                ticket: current,
                submission,
            } if *current == ticket => submission.clone(),
            _ => {
                info!("Ignoring completion of stale submission {:?}", ticket);
                return SubmissionOutcome::Ignored;
            }
        };

        match result {
            Ok(()) => {
                let notice = Notice::success(SUCCESS_NOTICE);
                self.input = ContactInput::default();
                self.errors = ValidationErrors::default();
                self.revalidate_on_edit = false;
                self.phase = Phase::Idle;
                SubmissionOutcome::Sent {
                    notice,
                    deep_link: self.channel.submission_link(&submission),
                }
            }
            Err(error) => {
                self.phase = Phase::Idle;
                info!("Contact submission {:?} failed: {}", ticket, error);
                let notice = match error {
                    SubmissionError::Rejected(errors) => {
                        self.errors = errors;
                        self.revalidate_on_edit = true;
                        Notice::error(REJECTED_NOTICE)
                    }
                    _ => Notice::error(FAILURE_NOTICE),
                };
                SubmissionOutcome::Failed { notice }
            }
        }
    }

    /// Abandons the in-flight submission, keeping what was typed.
    pub fn cancel(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.phase = Phase::Idle;
        true
    }

    /// Generic chat link, usable regardless of form state.
    pub fn quick_contact(&self) -> DeepLink {
        self.channel.quick_contact_link()
    }
}
