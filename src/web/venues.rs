use axum::{
    extract::{Path, RawForm, State},
    response::{Html, Redirect},
};
use chrono::Utc;
use minijinja::context;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{error, info, warn};

use super::validation::parse_id;
use super::{AppState, WebError, flash, templates};
use crate::forms::{self, FormData, choices};
use crate::services::VenueError;

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let now = Utc::now().naive_utc();
    let areas = state.venues().list_areas(now).await?;
    templates::page(&session, "pages/venues.html", context! { areas => areas }).await
}

pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    session: Session,
    RawForm(body): RawForm,
) -> Result<Html<String>, WebError> {
    let form = FormData::parse(&body);
    let search_term = form.value("search_term").unwrap_or_default().to_string();
    let venues = state.venues().search_venues(&search_term).await?;

    templates::page(
        &session,
        "pages/search_venues.html",
        context! {
            results => context! { count => venues.len(), data => venues },
            search_term => search_term,
        },
    )
    .await
}

pub async fn show_venue(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let id = parse_id("Venue", &id)?;
    let now = Utc::now().naive_utc();
    let venue = state.venues().venue_details(id, now).await?;
    templates::page(&session, "pages/show_venue.html", context! { venue => venue }).await
}

pub async fn new_venue_form(session: Session) -> Result<Html<String>, WebError> {
    templates::page(
        &session,
        "forms/new_venue.html",
        context! { genres => choices::GENRES, states => choices::STATES },
    )
    .await
}

pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    session: Session,
    RawForm(body): RawForm,
) -> Result<Redirect, WebError> {
    let form = FormData::parse(&body);
    let name = form.text("name").unwrap_or_default();

    match forms::venue::validate(&form) {
        Err(errors) => {
            warn!("Rejected venue submission: {}", errors);
            flash::error(
                &session,
                format!("An error occurred. Venue {name} could not be listed. {errors}"),
            )
            .await?;
        }
        Ok(input) => match state.venues().create_venue(input).await {
            Ok(venue) => {
                info!("Listed venue {} ({})", venue.id, venue.name);
                flash::success(
                    &session,
                    format!("Venue {} was successfully listed!", venue.name),
                )
                .await?;
            }
            Err(e) => {
                error!("Failed to list venue {}: {}", name, e);
                flash::error(
                    &session,
                    format!("An error occurred. Venue {name} could not be listed."),
                )
                .await?;
            }
        },
    }

    Ok(Redirect::to("/"))
}

pub async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let id = parse_id("Venue", &id)?;
    let venue = state.venues().get_venue(id).await?;

    templates::page(
        &session,
        "forms/edit_venue.html",
        context! { venue => venue, genres => choices::GENRES, states => choices::STATES },
    )
    .await
}

pub async fn edit_venue(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
    RawForm(body): RawForm,
) -> Result<Redirect, WebError> {
    let id = parse_id("Venue", &id)?;
    let existing = state.venues().get_venue(id).await?;
    let detail_page = format!("/venues/{id}");

    let input = match forms::venue::validate(&FormData::parse(&body)) {
        Ok(input) => input,
        Err(errors) => {
            warn!("Rejected edit of venue {}: {}", id, errors);
            flash::error(
                &session,
                format!("Venue {} could not be updated. {errors}", existing.name),
            )
            .await?;
            return Ok(Redirect::to(&format!("/venues/{id}/edit")));
        }
    };

    match state.venues().update_venue(id, input).await {
        Ok(venue) => {
            info!("Updated venue {} ({})", venue.id, venue.name);
            flash::success(
                &session,
                format!("Venue {} was successfully updated!", venue.name),
            )
            .await?;
        }
        Err(VenueError::NotFound(id)) => return Err(WebError::not_found("Venue", id)),
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            flash::error(
                &session,
                format!(
                    "An error occurred. Venue {} could not be updated.",
                    existing.name
                ),
            )
            .await?;
        }
    }

    Ok(Redirect::to(&detail_page))
}

/// Serves both `DELETE /venues/{id}` and the form-friendly `POST /venues/{id}/delete`.
pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Redirect, WebError> {
    let id = parse_id("Venue", &id)?;

    match state.venues().delete_venue(id).await {
        Ok(venue) => {
            info!("Deleted venue {} ({})", venue.id, venue.name);
            flash::success(
                &session,
                format!("Venue {} was successfully deleted.", venue.name),
            )
            .await?;
            Ok(Redirect::to("/"))
        }
        Err(VenueError::NotFound(id)) => Err(WebError::not_found("Venue", id)),
        Err(e) => {
            error!("Failed to delete venue {}: {}", id, e);
            flash::error(
                &session,
                format!("An error occurred. Venue {id} could not be deleted."),
            )
            .await?;
            Ok(Redirect::to(&format!("/venues/{id}")))
        }
    }
}
