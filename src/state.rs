use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{
    ArtistService, SeaOrmArtistService, SeaOrmShowService, SeaOrmVenueService, ShowService,
    VenueService,
};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub store: Store,

    pub venue_service: Arc<dyn VenueService>,

    pub artist_service: Arc<dyn ArtistService>,

    pub show_service: Arc<dyn ShowService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        Ok(Self::with_store(config, store))
    }

    #[must_use]
    pub fn with_store(config: Config, store: Store) -> Self {
        let venue_service =
            Arc::new(SeaOrmVenueService::new(store.clone())) as Arc<dyn VenueService>;
        let artist_service =
            Arc::new(SeaOrmArtistService::new(store.clone())) as Arc<dyn ArtistService>;
        let show_service = Arc::new(SeaOrmShowService::new(store.clone())) as Arc<dyn ShowService>;

        Self {
            config: Arc::new(config),
            store,
            venue_service,
            artist_service,
            show_service,
        }
    }
}
