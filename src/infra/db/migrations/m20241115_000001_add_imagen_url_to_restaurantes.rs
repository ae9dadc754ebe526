//! Migration: Add a cover image URL to restaurants.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Restaurantes::Table)
                    .add_column(ColumnDef::new(Restaurantes::ImagenUrl).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Restaurantes::Table)
                    .drop_column(Restaurantes::ImagenUrl)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Restaurantes {
    Table,
    ImagenUrl,
}
