use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use portfolio_contact::{ContactForm, Field, SubmitOutcome, TransportError};
use serde::Deserialize;

use crate::{
    routes::{
        AppState,
        index::{ContactFormView, IndexTemplate},
    },
    template::render_with_status,
};

/// GET /contact - the form lives in the page itself
pub async fn page() -> impl IntoResponse {
    Redirect::to("/#contact")
}

#[derive(Deserialize)]
pub struct ActionInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// POST /contact - plain form submission for browsers without script
#[tracing::instrument(skip_all)]
pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let form = ContactForm::new(app_state.relay.clone());
    form.update_field(Field::Name, input.name);
    form.update_field(Field::Email, input.email);
    form.update_field(Field::Message, input.message);

    let status = match form.submit().await {
        SubmitOutcome::Sent => StatusCode::OK,
        SubmitOutcome::Invalid(_) | SubmitOutcome::Failed(TransportError::Invalid(_)) => {
            StatusCode::BAD_REQUEST
        }
        SubmitOutcome::Failed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        SubmitOutcome::Busy => StatusCode::CONFLICT,
    };

    render_with_status(
        status,
        IndexTemplate::new(&app_state.profile, ContactFormView::from_form(&form)),
    )
}
