use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::Config;
use crate::services::{ArtistService, ShowService, VenueService};
use crate::state::SharedState;

mod artists;
mod assets;
mod error;
pub mod flash;
mod pages;
mod shows;
pub mod templates;
mod validation;
mod venues;

pub use error::{WebError, error_page};

#[derive(Clone)]
pub struct AppState {
    pub shared: Arc<SharedState>,
}

impl AppState {
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    #[must_use]
    pub fn store(&self) -> &crate::db::Store {
        &self.shared.store
    }

    #[must_use]
    pub fn venues(&self) -> &Arc<dyn VenueService> {
        &self.shared.venue_service
    }

    #[must_use]
    pub fn artists(&self) -> &Arc<dyn ArtistService> {
        &self.shared.artist_service
    }

    #[must_use]
    pub fn shows(&self) -> &Arc<dyn ShowService> {
        &self.shared.show_service
    }
}

#[must_use]
pub fn create_app_state(shared: Arc<SharedState>) -> Arc<AppState> {
    Arc::new(AppState { shared })
}

pub async fn create_app_state_from_config(config: Config) -> anyhow::Result<Arc<AppState>> {
    let shared = Arc::new(SharedState::new(config).await?);
    Ok(create_app_state(shared))
}

pub fn router(state: Arc<AppState>) -> Router {
    let server = &state.config().server;

    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(server.secure_cookies)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            server.session_inactivity_minutes,
        )));

    Router::new()
        .route("/", get(pages::index))
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::new_venue_form).post(venues::create_venue),
        )
        .route(
            "/venues/{id}",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/{id}/edit",
            get(venues::edit_venue_form).post(venues::edit_venue),
        )
        .route("/venues/{id}/delete", post(venues::delete_venue))
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::new_artist_form).post(artists::create_artist),
        )
        .route("/artists/{id}", get(artists::show_artist))
        .route(
            "/artists/{id}/edit",
            get(artists::edit_artist_form).post(artists::edit_artist),
        )
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::new_show_form).post(shows::create_show),
        )
        .route("/static/{*path}", get(assets::serve_asset))
        .fallback(pages::not_found)
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
