use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;
use portfolio::config::{Config, ObservabilityConfig, ServerConfig, SiteConfig};
use portfolio_notification::{EmailConfig, EmailParams, EmailResult, Mailer};
use tower::ServiceExt;

/// What the recording mailer answers with.
#[derive(Clone)]
pub enum Reply {
    Sent(&'static str),
    Failed(&'static str),
    Raise(&'static str),
}

/// Mailer double that records every message it is asked to send.
#[derive(Clone)]
pub struct RecordingMailer {
    pub sent: Arc<Mutex<Vec<EmailParams>>>,
    reply: Reply,
}

#[allow(dead_code)]
impl RecordingMailer {
    pub fn new(reply: Reply) -> Self {
        Self {
            sent: Arc::default(),
            reply,
        }
    }

    pub fn calls(&self) -> Vec<EmailParams> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, params: EmailParams) -> anyhow::Result<EmailResult> {
        self.sent.lock().unwrap().push(params);

        match self.reply {
            Reply::Sent(id) => Ok(EmailResult::sent(id)),
            Reply::Failed(error) => Ok(EmailResult::failed(error)),
            Reply::Raise(error) => Err(anyhow::anyhow!(error)),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        email: EmailConfig {
            contact_address: "owner@example.com".to_string(),
            skip_sending: true,
            ..Default::default()
        },
        observability: ObservabilityConfig::default(),
        site: SiteConfig::default(),
    }
}

pub struct TestApp {
    pub router: Router,
    pub mailer: RecordingMailer,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: impl Into<String>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.into()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(serde_urlencoded::to_string(fields).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

pub fn create_test_app(reply: Reply) -> TestApp {
    let mailer = RecordingMailer::new(reply);
    let router = portfolio::create_app(test_config(), Arc::new(mailer.clone())).unwrap();

    TestApp { router, mailer }
}

#[allow(dead_code)]
pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
