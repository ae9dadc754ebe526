//! Migration: Create opinions table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Opiniones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Opiniones::IdOpinion)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Opiniones::Comentario).text().not_null())
                    .col(ColumnDef::new(Opiniones::Calificacion).integer().not_null())
                    .col(ColumnDef::new(Opiniones::IdUsuario).integer().not_null())
                    .col(ColumnDef::new(Opiniones::IdRestaurante).integer().not_null())
                    .col(ColumnDef::new(Opiniones::FechaOpinion).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_opiniones_usuario")
                            .from(Opiniones::Table, Opiniones::IdUsuario)
                            .to(Usuarios::Table, Usuarios::IdUsuario)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_opiniones_restaurante")
                            .from(Opiniones::Table, Opiniones::IdRestaurante)
                            .to(Restaurantes::Table, Restaurantes::IdRestaurante)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Homepage sorts by date, restaurant pages filter by restaurant
        manager
            .create_index(
                Index::create()
                    .name("idx_opiniones_fecha")
                    .table(Opiniones::Table)
                    .col(Opiniones::FechaOpinion)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_opiniones_restaurante")
                    .table(Opiniones::Table)
                    .col(Opiniones::IdRestaurante)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Opiniones::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Opiniones {
    Table,
    IdOpinion,
    Comentario,
    Calificacion,
    IdUsuario,
    IdRestaurante,
    FechaOpinion,
}

#[derive(Iden)]
enum Usuarios {
    Table,
    IdUsuario,
}

#[derive(Iden)]
enum Restaurantes {
    Table,
    IdRestaurante,
}
