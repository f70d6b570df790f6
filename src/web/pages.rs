use axum::{
    http::StatusCode,
    response::{Html, Response},
};
use minijinja::context;
use tower_sessions::Session;

use super::{WebError, error_page, templates};

pub async fn index(session: Session) -> Result<Html<String>, WebError> {
    templates::page(&session, "pages/home.html", context! {}).await
}

pub async fn not_found() -> Response {
    error_page(StatusCode::NOT_FOUND)
}
