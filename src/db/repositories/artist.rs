use crate::entities::artist;
use crate::models::artist::{Artist, ArtistInput};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use super::{decode_genres, encode_genres, name_contains};

pub struct ArtistRepository {
    conn: DatabaseConnection,
}

impl ArtistRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: artist::Model) -> Artist {
        Artist {
            id: model.id,
            genres: decode_genres(model.genres.as_deref()),
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            image_link: model.image_link,
            website_link: model.website_link,
            facebook_link: model.facebook_link,
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description,
        }
    }

    fn active_model(input: &ArtistInput) -> Result<artist::ActiveModel> {
        Ok(artist::ActiveModel {
            name: Set(input.name.clone()),
            city: Set(input.city.clone()),
            state: Set(input.state.clone()),
            phone: Set(input.phone.clone()),
            genres: Set(Some(encode_genres(&input.genres)?)),
            image_link: Set(input.image_link.clone()),
            website_link: Set(input.website_link.clone()),
            facebook_link: Set(input.facebook_link.clone()),
            seeking_venue: Set(input.seeking_venue),
            seeking_description: Set(input.seeking_description.clone()),
            ..Default::default()
        })
    }

    pub async fn list_all(&self) -> Result<Vec<Artist>> {
        let rows = artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Artist>> {
        let rows = artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|row| name_contains(&row.name, term))
            .map(Self::map_model)
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Artist>> {
        let result = artist::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(result.map(Self::map_model))
    }

    pub async fn add(&self, input: &ArtistInput) -> Result<Artist> {
        let active_model = Self::active_model(input)?;

        let txn = self.conn.begin().await?;
        let model = active_model.insert(&txn).await?;
        txn.commit().await?;

        info!("Added artist {}: {}", model.id, model.name);
        Ok(Self::map_model(model))
    }

    /// Overwrites every mutable column. Returns `None` when the artist does not exist.
    pub async fn update(&self, id: i32, input: &ArtistInput) -> Result<Option<Artist>> {
        let mut active_model = Self::active_model(input)?;
        active_model.id = Set(id);

        let txn = self.conn.begin().await?;
        if artist::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(None);
        }
        let model = active_model.update(&txn).await?;
        txn.commit().await?;

        info!("Updated artist {}", id);
        Ok(Some(Self::map_model(model)))
    }
}
