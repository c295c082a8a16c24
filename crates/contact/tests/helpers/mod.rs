use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_contact::{ContactRequest, ContactTransport, TransportError};
use tokio::sync::Notify;

/// Transport double that records every request and replies with a fixed result.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub requests: Arc<Mutex<Vec<ContactRequest>>>,
    pub reply: Option<TransportError>,
    pub gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            reply: Some(error),
            ..Default::default()
        }
    }

    /// Holds every send until the returned gate is notified.
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let transport = Self {
            gate: Some(gate.clone()),
            ..Default::default()
        };

        (transport, gate)
    }

    pub fn sent(&self) -> Vec<ContactRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactTransport for RecordingTransport {
    async fn send(&self, request: ContactRequest) -> Result<(), TransportError> {
        self.requests.lock().unwrap().push(request);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.reply {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[allow(dead_code)]
pub fn fill<T: ContactTransport>(
    form: &portfolio_contact::ContactForm<T>,
    name: &str,
    email: &str,
    message: &str,
) {
    use portfolio_contact::Field;

    form.update_field(Field::Name, name);
    form.update_field(Field::Email, email);
    form.update_field(Field::Message, message);
}
