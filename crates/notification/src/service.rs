//! Email notification service using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart, SinglePart, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::{EmailParams, EmailResult, Mailer};

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    /// Fixed destination of contact form messages.
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    /// Log messages instead of handing them to SMTP.
    #[serde(default)]
    pub skip_sending: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
            skip_sending: false,
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_address() -> String {
    "Portfolio <noreply@localhost>".to_string()
}

fn default_contact_address() -> String {
    "owner@localhost".to_string()
}

/// SMTP backed [`Mailer`]
#[derive(Clone)]
pub struct EmailService {
    mailer: SmtpTransport,
    from: String,
    skip_sending: bool,
}

impl EmailService {
    /// Create a new email service from configuration
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );

            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                from = %config.from_address,
                "Email service initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        if config.skip_sending {
            tracing::warn!("Email sending disabled, messages will only be logged");
        }

        Ok(Self {
            mailer,
            from: config.from_address.clone(),
            skip_sending: config.skip_sending,
        })
    }

    fn message_id(&self) -> String {
        let from = self.from.trim_end_matches('>');
        let domain = from
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .filter(|domain| !domain.is_empty())
            .unwrap_or("localhost");

        format!("<{}@{}>", uuid::Uuid::new_v4(), domain)
    }

    fn build_message(&self, params: &EmailParams, message_id: &str) -> anyhow::Result<Message> {
        let from: Mailbox = self.from.parse()?;
        let to: Mailbox = params.to.parse()?;

        let mut builder = Message::builder()
            .from(from)
            .to(to)
            .subject(params.subject.to_owned())
            .message_id(Some(message_id.to_owned()));

        if let Some(reply_to) = &params.reply_to {
            builder = builder.reply_to(reply_to.parse()?);
        }

        let message = match (&params.text_body, &params.html_body) {
            (Some(plain), Some(html)) => {
                builder.multipart(MultiPart::alternative_plain_html(plain.clone(), html.clone()))?
            }
            (None, Some(html)) => builder.singlepart(SinglePart::html(html.clone()))?,
            (Some(plain), None) => builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(plain.clone())?,
            (None, None) => builder
                .header(header::ContentType::TEXT_PLAIN)
                .body(String::new())?,
        };

        Ok(message)
    }
}

#[async_trait]
impl Mailer for EmailService {
    #[tracing::instrument(skip_all, fields(to = %params.to, subject = %params.subject))]
    async fn send(&self, params: EmailParams) -> anyhow::Result<EmailResult> {
        let message_id = self.message_id();
        let message = self.build_message(&params, &message_id)?;

        if self.skip_sending {
            tracing::info!(
                message_id = %message_id,
                text = params.text_body.as_deref().unwrap_or_default(),
                "Skipping SMTP send"
            );

            return Ok(EmailResult::sent(message_id));
        }

        tracing::info!("Sending email");

        let mailer = self.mailer.clone();
        let sent = tokio::task::spawn_blocking(move || mailer.send(&message)).await?;

        match sent {
            Ok(_) => {
                tracing::info!(message_id = %message_id, "Email sent");
                Ok(EmailResult::sent(message_id))
            }
            Err(e) => Ok(EmailResult::failed(e.to_string())),
        }
    }
}
