use std::sync::Arc;

use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    content::Profile,
    relay::ContactRelay,
    template::{NotFoundTemplate, render_with_status},
};

pub mod api;
mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub relay: ContactRelay,
    pub profile: Arc<Profile>,
}

pub async fn fallback() -> impl IntoResponse {
    render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/api/contact", post(api::contact))
        .nest_service("/static", crate::assets::AssetsService)
        .fallback(fallback)
        .with_state(app_state)
}
