use crate::models::artist::{Artist, ArtistInput};
use crate::models::show::{ShowInput, ShowListing};
use crate::models::venue::{Venue, VenueInput};
use anyhow::Result;
use chrono::NaiveDateTime;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::show::ShowInsert;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite://").trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn venue_repo(&self) -> repositories::venue::VenueRepository {
        repositories::venue::VenueRepository::new(self.conn.clone())
    }

    fn artist_repo(&self) -> repositories::artist::ArtistRepository {
        repositories::artist::ArtistRepository::new(self.conn.clone())
    }

    fn show_repo(&self) -> repositories::show::ShowRepository {
        repositories::show::ShowRepository::new(self.conn.clone())
    }

    // Venues

    pub async fn list_venues(&self) -> Result<Vec<Venue>> {
        self.venue_repo().list_all().await
    }

    pub async fn search_venues(&self, term: &str) -> Result<Vec<Venue>> {
        self.venue_repo().search_by_name(term).await
    }

    pub async fn get_venue(&self, id: i32) -> Result<Option<Venue>> {
        self.venue_repo().get(id).await
    }

    pub async fn add_venue(&self, input: &VenueInput) -> Result<Venue> {
        self.venue_repo().add(input).await
    }

    pub async fn update_venue(&self, id: i32, input: &VenueInput) -> Result<Option<Venue>> {
        self.venue_repo().update(id, input).await
    }

    pub async fn remove_venue(&self, id: i32) -> Result<Option<Venue>> {
        self.venue_repo().remove(id).await
    }

    // Artists

    pub async fn list_artists(&self) -> Result<Vec<Artist>> {
        self.artist_repo().list_all().await
    }

    pub async fn search_artists(&self, term: &str) -> Result<Vec<Artist>> {
        self.artist_repo().search_by_name(term).await
    }

    pub async fn get_artist(&self, id: i32) -> Result<Option<Artist>> {
        self.artist_repo().get(id).await
    }

    pub async fn add_artist(&self, input: &ArtistInput) -> Result<Artist> {
        self.artist_repo().add(input).await
    }

    pub async fn update_artist(&self, id: i32, input: &ArtistInput) -> Result<Option<Artist>> {
        self.artist_repo().update(id, input).await
    }

    // Shows

    pub async fn list_shows(&self) -> Result<Vec<ShowListing>> {
        self.show_repo().list_all().await
    }

    pub async fn list_shows_for_venue(&self, venue_id: i32) -> Result<Vec<ShowListing>> {
        self.show_repo().list_for_venue(venue_id).await
    }

    pub async fn list_shows_for_artist(&self, artist_id: i32) -> Result<Vec<ShowListing>> {
        self.show_repo().list_for_artist(artist_id).await
    }

    pub async fn upcoming_show_counts_by_venue(
        &self,
        now: NaiveDateTime,
    ) -> Result<HashMap<i32, usize>> {
        self.show_repo().upcoming_counts_by_venue(now).await
    }

    pub async fn add_show(&self, input: &ShowInput) -> Result<ShowInsert> {
        self.show_repo().add(input).await
    }
}
