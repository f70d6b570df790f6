//! Domain service for booking and listing shows.

use crate::models::show::{ShowInput, ShowListing};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowError {
    #[error("Venue {0} does not exist")]
    UnknownVenue(i32),

    #[error("Artist {0} does not exist")]
    UnknownArtist(i32),

    #[error("Database error: {0}")]
    Database(String),
}

impl ShowError {
    /// Whether the submission itself was at fault, as opposed to the store.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::UnknownVenue(_) | Self::UnknownArtist(_))
    }
}

impl From<sea_orm::DbErr> for ShowError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for ShowError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[async_trait::async_trait]
pub trait ShowService: Send + Sync {
    async fn list_shows(&self) -> Result<Vec<ShowListing>, ShowError>;

    /// # Errors
    ///
    /// - Returns [`ShowError::UnknownVenue`] / [`ShowError::UnknownArtist`]
    ///   if a referenced row does not exist
    /// - Returns [`ShowError::Database`] on connection failures
    async fn create_show(&self, input: ShowInput) -> Result<ShowListing, ShowError>;
}
