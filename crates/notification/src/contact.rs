use time::OffsetDateTime;

use crate::{EmailParams, template};

#[derive(askama::Template)]
#[template(path = "contact.html")]
struct ContactHtmlTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    year: i32,
}

#[derive(askama::Template)]
#[template(path = "contact.txt")]
struct ContactPlainTemplate<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Contact form message relayed to the site owner.
#[derive(Debug, Clone, Copy)]
pub struct ContactEmail<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

impl ContactEmail<'_> {
    pub fn subject(&self) -> String {
        format!("Portfolio Contact: Message from {}", self.name)
    }

    /// Builds the message for `to`, replying to the submitter.
    pub fn compose(&self, to: impl Into<String>) -> anyhow::Result<EmailParams> {
        let html = template::render(&ContactHtmlTemplate {
            name: self.name,
            email: self.email,
            message: self.message,
            year: OffsetDateTime::now_utc().year(),
        })?;

        let plain = template::render(&ContactPlainTemplate {
            name: self.name,
            email: self.email,
            message: self.message,
        })?;

        Ok(EmailParams {
            to: to.into(),
            subject: self.subject(),
            html_body: Some(html),
            text_body: Some(plain),
            reply_to: Some(self.email.to_owned()),
            customer_id: None,
        })
    }
}
