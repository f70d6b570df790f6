//! `SeaORM` implementation of the `ShowService` trait.

use crate::db::{ShowInsert, Store};
use crate::models::show::{ShowInput, ShowListing};
use crate::services::show_service::{ShowError, ShowService};
use async_trait::async_trait;

pub struct SeaOrmShowService {
    store: Store,
}

impl SeaOrmShowService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ShowService for SeaOrmShowService {
    async fn list_shows(&self) -> Result<Vec<ShowListing>, ShowError> {
        Ok(self.store.list_shows().await?)
    }

    async fn create_show(&self, input: ShowInput) -> Result<ShowListing, ShowError> {
        match self.store.add_show(&input).await? {
            ShowInsert::Created(listing) => Ok(listing),
            ShowInsert::UnknownVenue(id) => Err(ShowError::UnknownVenue(id)),
            ShowInsert::UnknownArtist(id) => Err(ShowError::UnknownArtist(id)),
        }
    }
}
