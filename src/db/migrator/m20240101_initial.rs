use crate::entities::prelude::*;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Venue)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Artist)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Foreign keys on venue/artist come from the entity relations.
        manager
            .create_table(
                schema
                    .create_table_from_entity(Show)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_show_venue_id")
                    .table(Show)
                    .col(crate::entities::show::Column::VenueId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_show_artist_id")
                    .table(Show)
                    .col(crate::entities::show::Column::ArtistId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Show).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artist).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venue).to_owned())
            .await?;

        Ok(())
    }
}
