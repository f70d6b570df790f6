//! `SeaORM` implementation of the `ArtistService` trait.

use crate::db::Store;
use crate::models::artist::{Artist, ArtistInput};
use crate::models::show::ShowPartition;
use crate::services::artist_service::{ArtistDetails, ArtistError, ArtistService};
use async_trait::async_trait;
use chrono::NaiveDateTime;

pub struct SeaOrmArtistService {
    store: Store,
}

impl SeaOrmArtistService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn check_input(input: &ArtistInput) -> Result<(), ArtistError> {
        if input.name.trim().is_empty() {
            return Err(ArtistError::Validation("name is required".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArtistService for SeaOrmArtistService {
    async fn list_artists(&self) -> Result<Vec<Artist>, ArtistError> {
        Ok(self.store.list_artists().await?)
    }

    async fn search_artists(&self, term: &str) -> Result<Vec<Artist>, ArtistError> {
        Ok(self.store.search_artists(term).await?)
    }

    async fn get_artist(&self, id: i32) -> Result<Artist, ArtistError> {
        self.store
            .get_artist(id)
            .await?
            .ok_or(ArtistError::NotFound(id))
    }

    async fn artist_details(
        &self,
        id: i32,
        now: NaiveDateTime,
    ) -> Result<ArtistDetails, ArtistError> {
        let artist = self.get_artist(id).await?;
        let shows = self.store.list_shows_for_artist(id).await?;
        let ShowPartition { upcoming, past } = ShowPartition::split(shows, now);

        Ok(ArtistDetails {
            artist,
            upcoming_shows_count: upcoming.len(),
            past_shows_count: past.len(),
            upcoming_shows: upcoming,
            past_shows: past,
        })
    }

    async fn create_artist(&self, input: ArtistInput) -> Result<Artist, ArtistError> {
        Self::check_input(&input)?;
        Ok(self.store.add_artist(&input).await?)
    }

    async fn update_artist(&self, id: i32, input: ArtistInput) -> Result<Artist, ArtistError> {
        Self::check_input(&input)?;
        self.store
            .update_artist(id, &input)
            .await?
            .ok_or(ArtistError::NotFound(id))
    }
}
