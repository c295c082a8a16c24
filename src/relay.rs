use std::sync::Arc;

use async_trait::async_trait;
use portfolio_contact::{ContactRequest, ContactTransport, TransportError, ValidationErrors};
use portfolio_notification::{Mailer, contact::ContactEmail};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("invalid contact request: {0}")]
    Validation(ValidationErrors),

    #[error("failed to send email: {0}")]
    Dispatch(anyhow::Error),
}

/// Validates contact requests and forwards them to the site owner by email.
#[derive(Clone)]
pub struct ContactRelay {
    mailer: Arc<dyn Mailer>,
    to: String,
}

impl ContactRelay {
    pub fn new(mailer: Arc<dyn Mailer>, to: impl Into<String>) -> Self {
        Self {
            mailer,
            to: to.into(),
        }
    }

    /// Returns the message id reported by the mailer, if any.
    #[tracing::instrument(skip_all, fields(from = %request.email))]
    pub async fn relay(&self, request: ContactRequest) -> Result<Option<String>, RelayError> {
        request.check().map_err(RelayError::Validation)?;

        let params = ContactEmail {
            name: &request.name,
            email: &request.email,
            message: &request.message,
        }
        .compose(self.to.as_str())
        .map_err(|err| {
            tracing::error!(error = %err, "Failed to compose contact email");
            RelayError::Dispatch(err)
        })?;

        match self.mailer.send(params).await {
            Ok(result) if result.success => {
                tracing::info!(message_id = ?result.message_id, "Contact message relayed");
                Ok(result.message_id)
            }
            Ok(result) => {
                let error = result.error.unwrap_or_else(|| "unknown error".to_owned());
                tracing::error!(error = %error, "Email send failed");
                Err(RelayError::Dispatch(anyhow::anyhow!(error)))
            }
            Err(err) => {
                tracing::error!(error = %err, "Error sending email");
                Err(RelayError::Dispatch(err))
            }
        }
    }
}

/// In-process transport, used by the plain HTML form route.
#[async_trait]
impl ContactTransport for ContactRelay {
    async fn send(&self, request: ContactRequest) -> Result<(), TransportError> {
        match self.relay(request).await {
            Ok(_) => Ok(()),
            Err(RelayError::Validation(errors)) => Err(TransportError::Invalid(errors)),
            Err(RelayError::Dispatch(_)) => Err(TransportError::Dispatch(
                crate::routes::api::DISPATCH_FAILED.to_owned(),
            )),
        }
    }
}
