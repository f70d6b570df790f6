use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;

use super::templates;
use crate::services::{ArtistError, ShowError, VenueError};

#[derive(Debug)]
pub enum WebError {
    NotFound(String),

    ValidationError(String),

    DatabaseError(String),

    InternalError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for WebError {}

impl WebError {
    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::NotFound(format!("{resource} {id} not found"))
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Renders the error page for `status`, falling back to plain text if the
/// template itself cannot be rendered.
pub fn error_page(status: StatusCode) -> Response {
    let template = if status == StatusCode::NOT_FOUND {
        "errors/404.html"
    } else {
        "errors/500.html"
    };

    match templates::render(template, minijinja::context! { status => status.as_u16() }) {
        Ok(html) => (status, html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render {}: {}", template, e);
            (
                status,
                Html(format!(
                    "<h1>{}</h1>",
                    status.canonical_reason().unwrap_or("Error")
                )),
            )
                .into_response()
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound(msg) => tracing::debug!("{}", msg),
            Self::ValidationError(msg) => tracing::warn!("Rejected request: {}", msg),
            Self::DatabaseError(msg) => tracing::error!("Database error: {}", msg),
            Self::InternalError(msg) => tracing::error!("Internal error: {}", msg),
        }

        error_page(self.status())
    }
}

impl From<anyhow::Error> for WebError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<minijinja::Error> for WebError {
    fn from(err: minijinja::Error) -> Self {
        Self::InternalError(format!("Template error: {err:#}"))
    }
}

impl From<tower_sessions::session::Error> for WebError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::InternalError(format!("Session error: {err}"))
    }
}

impl From<VenueError> for WebError {
    fn from(err: VenueError) -> Self {
        match err {
            VenueError::NotFound(id) => Self::not_found("Venue", id),
            VenueError::Validation(msg) => Self::ValidationError(msg),
            VenueError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<ArtistError> for WebError {
    fn from(err: ArtistError) -> Self {
        match err {
            ArtistError::NotFound(id) => Self::not_found("Artist", id),
            ArtistError::Validation(msg) => Self::ValidationError(msg),
            ArtistError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl From<ShowError> for WebError {
    fn from(err: ShowError) -> Self {
        match err {
            ShowError::UnknownVenue(_) | ShowError::UnknownArtist(_) => {
                Self::ValidationError(err.to_string())
            }
            ShowError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        assert_eq!(
            WebError::from(VenueError::NotFound(3)).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(ArtistError::Database("locked".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WebError::from(ShowError::UnknownArtist(9)).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_message_names_resource() {
        let err = WebError::not_found("Venue", 42);
        assert_eq!(err.to_string(), "Not found: Venue 42 not found");
    }
}
