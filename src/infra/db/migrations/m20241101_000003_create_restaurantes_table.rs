//! Migration: Create restaurants table.
//!
//! `categoria` is free text; `id_categoria` is informational and carries
//! no foreign key.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurantes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Restaurantes::IdRestaurante)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Restaurantes::Nombre).string_len(150).not_null())
                    .col(ColumnDef::new(Restaurantes::Ubicacion).string_len(255).not_null())
                    .col(ColumnDef::new(Restaurantes::Categoria).string_len(100).not_null())
                    .col(ColumnDef::new(Restaurantes::HorarioApertura).time().not_null())
                    .col(ColumnDef::new(Restaurantes::HorarioCierre).time().not_null())
                    .col(ColumnDef::new(Restaurantes::Descripcion).text().null())
                    .col(ColumnDef::new(Restaurantes::CapacidadMaxima).integer().null())
                    .col(ColumnDef::new(Restaurantes::MapaUrl).text().null())
                    .col(ColumnDef::new(Restaurantes::IdUsuario).integer().null())
                    .col(ColumnDef::new(Restaurantes::IdCategoria).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurantes_usuario")
                            .from(Restaurantes::Table, Restaurantes::IdUsuario)
                            .to(Usuarios::Table, Usuarios::IdUsuario)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurantes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Restaurantes {
    Table,
    IdRestaurante,
    Nombre,
    Ubicacion,
    Categoria,
    HorarioApertura,
    HorarioCierre,
    Descripcion,
    CapacidadMaxima,
    MapaUrl,
    IdUsuario,
    IdCategoria,
}

#[derive(Iden)]
enum Usuarios {
    Table,
    IdUsuario,
}
