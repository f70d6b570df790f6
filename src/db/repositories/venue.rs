use crate::entities::{show, venue};
use crate::models::venue::{Venue, VenueInput};
use anyhow::Result;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use super::{decode_genres, encode_genres, name_contains};

pub struct VenueRepository {
    conn: DatabaseConnection,
}

impl VenueRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(model: venue::Model) -> Venue {
        Venue {
            id: model.id,
            genres: decode_genres(model.genres.as_deref()),
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            image_link: model.image_link,
            website_link: model.website_link,
            facebook_link: model.facebook_link,
            looking_for_talent: model.looking_for_talent,
            seeking_description: model.seeking_description,
        }
    }

    /// Sets every mutable column; the id is left for the caller.
    fn active_model(input: &VenueInput) -> Result<venue::ActiveModel> {
        Ok(venue::ActiveModel {
            name: Set(input.name.clone()),
            city: Set(input.city.clone()),
            state: Set(input.state.clone()),
            address: Set(input.address.clone()),
            phone: Set(input.phone.clone()),
            image_link: Set(input.image_link.clone()),
            website_link: Set(input.website_link.clone()),
            facebook_link: Set(input.facebook_link.clone()),
            genres: Set(Some(encode_genres(&input.genres)?)),
            looking_for_talent: Set(input.looking_for_talent),
            seeking_description: Set(input.seeking_description.clone()),
            ..Default::default()
        })
    }

    pub async fn list_all(&self) -> Result<Vec<Venue>> {
        let rows = venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Venue>> {
        let rows = venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .filter(|row| name_contains(&row.name, term))
            .map(Self::map_model)
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Venue>> {
        let result = venue::Entity::find_by_id(id).one(&self.conn).await?;
        Ok(result.map(Self::map_model))
    }

    pub async fn add(&self, input: &VenueInput) -> Result<Venue> {
        let active_model = Self::active_model(input)?;

        let txn = self.conn.begin().await?;
        let model = active_model.insert(&txn).await?;
        txn.commit().await?;

        info!("Added venue {}: {}", model.id, model.name);
        Ok(Self::map_model(model))
    }

    /// Overwrites every mutable column. Returns `None` when the venue does not exist.
    pub async fn update(&self, id: i32, input: &VenueInput) -> Result<Option<Venue>> {
        let mut active_model = Self::active_model(input)?;
        active_model.id = Set(id);

        let txn = self.conn.begin().await?;
        if venue::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Ok(None);
        }
        let model = active_model.update(&txn).await?;
        txn.commit().await?;

        info!("Updated venue {}", id);
        Ok(Some(Self::map_model(model)))
    }

    /// Deletes the venue together with its shows.
    pub async fn remove(&self, id: i32) -> Result<Option<Venue>> {
        let txn = self.conn.begin().await?;

        let Some(model) = venue::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        show::Entity::delete_many()
            .filter(show::Column::VenueId.eq(id))
            .exec(&txn)
            .await?;
        venue::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        info!("Removed venue {}: {}", model.id, model.name);
        Ok(Some(Self::map_model(model)))
    }
}
