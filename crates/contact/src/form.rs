use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;

use crate::{ContactRequest, ContactSubmission, Field, ValidationErrors, validate};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The endpoint rejected one or more fields.
    #[error("submission rejected: {0}")]
    Invalid(ValidationErrors),

    #[error("network error: {0}")]
    Network(String),

    /// The endpoint accepted the payload but could not send the email.
    #[error("{0}")]
    Dispatch(String),

    #[error("unexpected response status {0}")]
    UnexpectedStatus(u16),
}

/// Remote send operation used by [`ContactForm`].
#[async_trait]
pub trait ContactTransport: Send + Sync {
    async fn send(&self, request: ContactRequest) -> Result<(), TransportError>;
}

#[async_trait]
impl<T: ContactTransport + ?Sized> ContactTransport for std::sync::Arc<T> {
    async fn send(&self, request: ContactRequest) -> Result<(), TransportError> {
        (**self).send(request).await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed, nothing was sent.
    Invalid(ValidationErrors),
    Sent,
    Failed(TransportError),
    /// Another submit is still in flight, nothing was sent.
    Busy,
}

#[derive(Default)]
struct FormState {
    submission: ContactSubmission,
    errors: ValidationErrors,
    submitted: bool,
    last_error: Option<TransportError>,
}

/// Contact form controller: field state, local validation and a single
/// in-flight send through a [`ContactTransport`].
pub struct ContactForm<T> {
    transport: T,
    state: Mutex<FormState>,
    in_flight: AtomicBool,
}

struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<T: ContactTransport> ContactForm<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: Mutex::new(FormState::default()),
            in_flight: AtomicBool::new(false),
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        // Poisoning only means a panic mid-update; the data stays usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.state().submission.set(field, value);
    }

    pub fn submission(&self) -> ContactSubmission {
        self.state().submission.clone()
    }

    pub fn errors(&self) -> ValidationErrors {
        self.state().errors.clone()
    }

    /// Set after a successful send and never cleared by the form itself.
    pub fn is_submitted(&self) -> bool {
        self.state().submitted
    }

    pub fn last_error(&self) -> Option<TransportError> {
        self.state().last_error.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    #[tracing::instrument(skip_all)]
    pub async fn submit(&self) -> SubmitOutcome {
        if self.in_flight.swap(true, Ordering::AcqRel) {
            tracing::debug!("Contact submission already in flight");
            return SubmitOutcome::Busy;
        }

        let _guard = InFlight(&self.in_flight);

        let submission = {
            let mut state = self.state();

            if let Err(errors) = validate(&state.submission) {
                tracing::debug!(%errors, "Contact form validation failed");
                state.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }

            state.errors.clear();
            state.submission.clone()
        };

        let result = self.transport.send(submission.into()).await;

        let mut state = self.state();

        match result {
            Ok(()) => {
                state.submission = ContactSubmission::default();
                state.submitted = true;
                state.last_error = None;

                SubmitOutcome::Sent
            }
            Err(err) => {
                tracing::warn!(error = %err, "Contact submission failed");

                if let TransportError::Invalid(errors) = &err {
                    state.errors.merge(errors.clone());
                }

                state.last_error = Some(err.clone());

                SubmitOutcome::Failed(err)
            }
        }
    }
}
