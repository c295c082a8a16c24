use axum::{extract::State, response::IntoResponse};
use portfolio_contact::{
    ContactForm, ContactSubmission, ContactTransport, Field, TransportError, ValidationErrors,
};
use time::OffsetDateTime;

use crate::{
    content::{Profile, SECTIONS},
    routes::AppState,
    template::render,
};

/// Contact form as rendered in the page.
#[derive(Default)]
pub struct ContactFormView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub message_error: Option<String>,
    pub submitted: bool,
    pub failure: Option<String>,
}

impl ContactFormView {
    pub fn new(submission: ContactSubmission, errors: &ValidationErrors) -> Self {
        Self {
            name: submission.name,
            email: submission.email,
            message: submission.message,
            name_error: errors.message(Field::Name),
            email_error: errors.message(Field::Email),
            message_error: errors.message(Field::Message),
            ..Default::default()
        }
    }

    pub fn from_form<T: ContactTransport>(form: &ContactForm<T>) -> Self {
        Self {
            submitted: form.is_submitted(),
            // Field rejections already show next to their inputs.
            failure: match form.last_error() {
                Some(TransportError::Invalid(_)) | None => None,
                Some(err) => Some(err.to_string()),
            },
            ..Self::new(form.submission(), &form.errors())
        }
    }
}

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub profile: &'a Profile,
    pub sections: &'a [&'a str],
    pub form: ContactFormView,
    pub year: i32,
}

impl<'a> IndexTemplate<'a> {
    pub fn new(profile: &'a Profile, form: ContactFormView) -> Self {
        Self {
            profile,
            sections: &SECTIONS,
            form,
            year: OffsetDateTime::now_utc().year(),
        }
    }
}

pub async fn page(State(app_state): State<AppState>) -> impl IntoResponse {
    render(IndexTemplate::new(
        &app_state.profile,
        ContactFormView::default(),
    ))
}
