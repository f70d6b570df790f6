use std::collections::HashMap;

use crate::entities::{artist, show, venue};
use crate::models::show::{ShowInput, ShowListing};
use anyhow::Result;
use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Set, TransactionTrait,
};
use tracing::{info, warn};

pub struct ShowRepository {
    conn: DatabaseConnection,
}

/// Result of inserting a show whose venue and artist are checked first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowInsert {
    Created(ShowListing),
    UnknownVenue(i32),
    UnknownArtist(i32),
}

impl ShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_listing(model: show::Model, venue: venue::Model, artist: artist::Model) -> ShowListing {
        ShowListing {
            id: model.id,
            venue_id: venue.id,
            venue_name: venue.name,
            venue_image_link: venue.image_link,
            artist_id: artist.id,
            artist_name: artist.name,
            artist_image_link: artist.image_link,
            start_time: model.start_time,
        }
    }

    async fn listings(&self, query: Select<show::Entity>) -> Result<Vec<ShowListing>> {
        let shows = query.all(&self.conn).await?;

        let venues = shows.load_one(venue::Entity, &self.conn).await?;
        let artists = shows.load_one(artist::Entity, &self.conn).await?;

        let mut listings = Vec::with_capacity(shows.len());
        for ((model, venue), artist) in shows.into_iter().zip(venues).zip(artists) {
            match (venue, artist) {
                (Some(venue), Some(artist)) => {
                    listings.push(Self::map_listing(model, venue, artist));
                }
                _ => warn!("Skipping show {} with a dangling reference", model.id),
            }
        }

        Ok(listings)
    }

    pub async fn list_all(&self) -> Result<Vec<ShowListing>> {
        self.listings(show::Entity::find().order_by_asc(show::Column::Id))
            .await
    }

    pub async fn list_for_venue(&self, venue_id: i32) -> Result<Vec<ShowListing>> {
        self.listings(
            show::Entity::find()
                .filter(show::Column::VenueId.eq(venue_id))
                .order_by_asc(show::Column::StartTime),
        )
        .await
    }

    pub async fn list_for_artist(&self, artist_id: i32) -> Result<Vec<ShowListing>> {
        self.listings(
            show::Entity::find()
                .filter(show::Column::ArtistId.eq(artist_id))
                .order_by_asc(show::Column::StartTime),
        )
        .await
    }

    /// Number of shows starting after `now`, keyed by venue id.
    pub async fn upcoming_counts_by_venue(
        &self,
        now: NaiveDateTime,
    ) -> Result<HashMap<i32, usize>> {
        let venue_ids: Vec<i32> = show::Entity::find()
            .select_only()
            .column(show::Column::VenueId)
            .filter(show::Column::StartTime.gt(now))
            .into_tuple()
            .all(&self.conn)
            .await?;

        let mut counts = HashMap::new();
        for venue_id in venue_ids {
            *counts.entry(venue_id).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// Inserts a show after confirming, in the same transaction, that both
    /// the venue and the artist exist.
    pub async fn add(&self, input: &ShowInput) -> Result<ShowInsert> {
        let txn = self.conn.begin().await?;

        let Some(venue) = venue::Entity::find_by_id(input.venue_id).one(&txn).await? else {
            return Ok(ShowInsert::UnknownVenue(input.venue_id));
        };
        let Some(artist) = artist::Entity::find_by_id(input.artist_id).one(&txn).await? else {
            return Ok(ShowInsert::UnknownArtist(input.artist_id));
        };

        let model = show::ActiveModel {
            venue_id: Set(input.venue_id),
            artist_id: Set(input.artist_id),
            start_time: Set(input.start_time),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(
            "Added show {}: artist {} at venue {} on {}",
            model.id, artist.id, venue.id, model.start_time
        );
        Ok(ShowInsert::Created(Self::map_listing(model, venue, artist)))
    }
}
