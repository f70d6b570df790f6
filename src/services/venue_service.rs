//! Domain service for venue listings.

use crate::models::show::ShowListing;
use crate::models::venue::{Venue, VenueArea, VenueInput};
use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VenueError {
    #[error("Venue not found: {0}")]
    NotFound(i32),

    #[error("Invalid venue: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sea_orm::DbErr> for VenueError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for VenueError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// A venue with its shows split around the time of the request.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetails {
    #[serde(flatten)]
    pub venue: Venue,
    pub upcoming_shows: Vec<ShowListing>,
    pub past_shows: Vec<ShowListing>,
    pub upcoming_shows_count: usize,
    pub past_shows_count: usize,
}

#[async_trait::async_trait]
pub trait VenueService: Send + Sync {
    async fn list_venues(&self) -> Result<Vec<Venue>, VenueError>;

    /// Venues grouped by city and state, each with its upcoming show count.
    async fn list_areas(&self, now: NaiveDateTime) -> Result<Vec<VenueArea>, VenueError>;

    /// Case-insensitive substring match on the name. An empty term matches everything.
    async fn search_venues(&self, term: &str) -> Result<Vec<Venue>, VenueError>;

    /// # Errors
    ///
    /// Returns [`VenueError::NotFound`] if no venue has this id.
    async fn get_venue(&self, id: i32) -> Result<Venue, VenueError>;

    async fn venue_details(
        &self,
        id: i32,
        now: NaiveDateTime,
    ) -> Result<VenueDetails, VenueError>;

    async fn create_venue(&self, input: VenueInput) -> Result<Venue, VenueError>;

    /// Replaces every mutable field with the values in `input`.
    async fn update_venue(&self, id: i32, input: VenueInput) -> Result<Venue, VenueError>;

    /// Deletes the venue and every show booked at it.
    async fn delete_venue(&self, id: i32) -> Result<Venue, VenueError>;
}
