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
use crate::services::ArtistError;

pub async fn list_artists(
    State(state): State<Arc<AppState>>,
    session: Session,
) -> Result<Html<String>, WebError> {
    let artists = state.artists().list_artists().await?;
    templates::page(&session, "pages/artists.html", context! { artists => artists }).await
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    session: Session,
    RawForm(body): RawForm,
) -> Result<Html<String>, WebError> {
    let form = FormData::parse(&body);
    let search_term = form.value("search_term").unwrap_or_default().to_string();
    let artists = state.artists().search_artists(&search_term).await?;

    templates::page(
        &session,
        "pages/search_artists.html",
        context! {
            results => context! { count => artists.len(), data => artists },
            search_term => search_term,
        },
    )
    .await
}

pub async fn show_artist(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let id = parse_id("Artist", &id)?;
    let artist = state
        .artists()
        .artist_details(id, Utc::now().naive_utc())
        .await?;
    templates::page(&session, "pages/show_artist.html", context! { artist => artist }).await
}

pub async fn new_artist_form(session: Session) -> Result<Html<String>, WebError> {
    templates::page(
        &session,
        "forms/new_artist.html",
        context! { genres => choices::GENRES, states => choices::STATES },
    )
    .await
}

pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    session: Session,
    RawForm(body): RawForm,
) -> Result<Redirect, WebError> {
    let form = FormData::parse(&body);
    let name = form.text("name").unwrap_or_default();

    let input = match forms::artist::validate(&form) {
        Ok(input) => input,
        Err(errors) => {
            warn!("Rejected artist submission: {}", errors);
            flash::error(
                &session,
                format!("An error occurred. Artist {name} could not be listed. {errors}"),
            )
            .await?;
            return Ok(Redirect::to("/"));
        }
    };

    match state.artists().create_artist(input).await {
        Ok(artist) => {
            info!("Listed artist {} ({})", artist.id, artist.name);
            flash::success(
                &session,
                format!("Artist {} was successfully listed!", artist.name),
            )
            .await?;
        }
        Err(e) => {
            error!("Failed to list artist {}: {}", name, e);
            flash::error(
                &session,
                format!("An error occurred. Artist {name} could not be listed."),
            )
            .await?;
        }
    }

    Ok(Redirect::to("/"))
}

pub async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
) -> Result<Html<String>, WebError> {
    let id = parse_id("Artist", &id)?;
    let artist = state.artists().get_artist(id).await?;

    templates::page(
        &session,
        "forms/edit_artist.html",
        context! { artist => artist, genres => choices::GENRES, states => choices::STATES },
    )
    .await
}

pub async fn edit_artist(
    State(state): State<Arc<AppState>>,
    session: Session,
    Path(id): Path<String>,
    RawForm(body): RawForm,
) -> Result<Redirect, WebError> {
    let id = parse_id("Artist", &id)?;
    let existing = state.artists().get_artist(id).await?;

    let input = match forms::artist::validate(&FormData::parse(&body)) {
        Ok(input) => input,
        Err(errors) => {
            warn!("Rejected edit of artist {}: {}", id, errors);
            flash::error(
                &session,
                format!("Artist {} could not be updated. {errors}", existing.name),
            )
            .await?;
            return Ok(Redirect::to(&format!("/artists/{id}/edit")));
        }
    };

    match state.artists().update_artist(id, input).await {
        Ok(artist) => {
            info!("Updated artist {} ({})", artist.id, artist.name);
            flash::success(
                &session,
                format!("Artist {} was successfully updated!", artist.name),
            )
            .await?;
        }
        Err(ArtistError::NotFound(id)) => return Err(WebError::not_found("Artist", id)),
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            flash::error(
                &session,
                format!(
                    "An error occurred. Artist {} could not be updated.",
                    existing.name
                ),
            )
            .await?;
        }
    }

    Ok(Redirect::to(&format!("/artists/{id}")))
}
