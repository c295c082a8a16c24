use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub fn to_string<T: askama::Template>(template: &T) -> String {
    match template.render() {
        Ok(html) => html,
        Err(err) => format!("Failed to render template. Error: {err}"),
    }
}

pub fn render<T: askama::Template>(template: T) -> Response {
    render_with_status(StatusCode::OK, template)
}

pub fn render_with_status<T: askama::Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to render template");

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(to_string(&ServerTemplate {
                    message: SERVER_ERROR_MESSAGE,
                })),
            )
                .into_response()
        }
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate<'a> {
    pub message: &'a str,
}
