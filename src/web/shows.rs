use axum::{
    extract::{RawForm, State},
    response::{Html, Redirect},
};
use minijinja::context;
use std::sync::Arc;
use tower_sessions::Session;
use tracing::{error, info, warn};

use super::{AppState, WebError, flash, templates};
use crate::forms::{self, FormData};

const FAILURE: &str = "An error occurred. Show could not be listed.";

pub async fn list_shows(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let shows = state.shows().list_shows().await?;
    templates::page(&session, "pages/shows.html", context! { shows => shows }).await
}

pub async fn new_show_form(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let artists = state.artists().list_artists().await?;
    let venues = state.venues().list_venues().await?;

    templates::page(
        &session,
        "forms/new_show.html",
        context! { artists => artists, venues => venues },
    )
    .await
}

pub async fn create_show(
    State(state): State<Arc<AppState>>,
    session: Session,
    RawForm(body): RawForm,
) -> Result<Redirect, WebError> {
    let input = match forms::show::validate(&FormData::parse(&body)) {
        Ok(input) => input,
        Err(errors) => {
            warn!("Rejected show submission: {}", errors);
            flash::error(&session, format!("{FAILURE} {errors}")).await?;
            return Ok(Redirect::to("/"));
        }
    };

    match state.shows().create_show(input).await {
        Ok(show) => {
            info!(
                "Listed show {} ({} at {})",
                show.id, show.artist_name, show.venue_name
            );
            flash::success(&session, "Show was successfully listed!").await?;
        }
        Err(e) if e.is_validation() => {
            warn!("Rejected show submission: {}", e);
            flash::error(&session, format!("{FAILURE} {e}.")).await?;
        }
        Err(e) => {
            error!("Failed to list show: {}", e);
            flash::error(&session, FAILURE).await?;
        }
    }

    Ok(Redirect::to("/"))
}
