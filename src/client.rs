use std::collections::BTreeMap;

use async_trait::async_trait;
use portfolio_contact::{ContactRequest, ContactTransport, TransportError, ValidationErrors};
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: BTreeMap<String, String>,
    #[serde(default)]
    error: Option<String>,
}

/// Sends contact submissions to a running server's `/api/contact`.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/api/contact", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactTransport for HttpTransport {
    async fn send(&self, request: ContactRequest) -> Result<(), TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .json::<ErrorBody>()
            .await
            .unwrap_or_else(|e| {
                tracing::debug!(error = %e, %status, "Unreadable contact error response");
                ErrorBody::default()
            });

        match status {
            StatusCode::BAD_REQUEST if !body.errors.is_empty() => Err(TransportError::Invalid(
                ValidationErrors::from_messages(body.errors),
            )),
            s if s.is_server_error() => Err(TransportError::Dispatch(
                body.error
                    .unwrap_or_else(|| crate::routes::api::DISPATCH_FAILED.to_owned()),
            )),
            s => Err(TransportError::UnexpectedStatus(s.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            HttpTransport::new("http://localhost:3000/").endpoint(),
            "http://localhost:3000/api/contact"
        );
        assert_eq!(
            HttpTransport::new("https://example.com").endpoint(),
            "https://example.com/api/contact"
        );
    }
}
