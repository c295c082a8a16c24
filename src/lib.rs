pub mod assets;
pub mod client;
pub mod config;
pub mod content;
pub mod middleware;
pub mod observability;
pub mod relay;
pub mod routes;
pub mod template;

use std::sync::Arc;

use portfolio_notification::Mailer;

pub use routes::AppState;

/// Builds the application state around the given mailer.
///
/// Loads the profile from `site.profile_path` when set, the bundled one otherwise.
pub fn create_state(config: config::Config, mailer: Arc<dyn Mailer>) -> anyhow::Result<AppState> {
    let profile = content::Profile::load(config.site.profile_path.as_deref())?;
    let relay = relay::ContactRelay::new(mailer, config.email.contact_address.as_str());

    Ok(AppState {
        config,
        relay,
        profile: Arc::new(profile),
    })
}

/// Create app router for testing
///
/// Same routes as the server, without the outer middleware stack.
pub fn create_app(config: config::Config, mailer: Arc<dyn Mailer>) -> anyhow::Result<axum::Router> {
    Ok(routes::router(create_state(config, mailer)?))
}
