//! Domain service for artist listings.

use crate::models::artist::{Artist, ArtistInput};
use crate::models::show::ShowListing;
use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtistError {
    #[error("Artist not found: {0}")]
    NotFound(i32),

    #[error("Invalid artist: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for ArtistError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ArtistError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetails {
    #[serde(flatten)]
    pub artist: Artist,
    pub upcoming_shows: Vec<ShowListing>,
    pub past_shows: Vec<ShowListing>,
    pub upcoming_shows_count: usize,
    pub past_shows_count: usize,
}

#[async_trait::async_trait]
pub trait ArtistService: Send + Sync {
    async fn list_artists(&self) -> Result<Vec<Artist>, ArtistError>;

    /// Case-insensitive substring match on the name. An empty term matches everything.
    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, ArtistError>;

    /// # Errors
    ///
    /// Returns [`ArtistError::NotFound`] if no artist has this id.
    async fn get_artist(&self, id: i32) -> Result<Artist, ArtistError>;

    async fn artist_details(
        &self,
        id: i32,
        now: NaiveDateTime,
    ) -> Result<ArtistDetails, ArtistError>;

    async fn create_artist(&self, input: ArtistInput) -> Result<Artist, ArtistError>;

    /// Replaces every mutable field with the values in `input`.
    async fn update_artist(&self, id: i32, input: ArtistInput) -> Result<Artist, ArtistError>;
}
