//! Migration: Create reservations table.

use sea_orm_migration::prelude::*;

use crate::config::RESERVATION_STATUS_PENDING;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservas::IdReserva)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservas::IdUsuario).integer().not_null())
                    .col(ColumnDef::new(Reservas::IdRestaurante).integer().not_null())
                    .col(ColumnDef::new(Reservas::FechaCreacion).date_time().not_null())
                    .col(ColumnDef::new(Reservas::FechaReserva).date().not_null())
                    .col(ColumnDef::new(Reservas::HoraReserva).time().not_null())
                    .col(ColumnDef::new(Reservas::NumeroPersonas).integer().not_null())
                    .col(
                        ColumnDef::new(Reservas::Estado)
                            .string_len(30)
                            .not_null()
                            .default(RESERVATION_STATUS_PENDING),
                    )
                    .col(ColumnDef::new(Reservas::Comentarios).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservas_usuario")
                            .from(Reservas::Table, Reservas::IdUsuario)
                            .to(Usuarios::Table, Usuarios::IdUsuario)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservas_restaurante")
                            .from(Reservas::Table, Reservas::IdRestaurante)
                            .to(Restaurantes::Table, Restaurantes::IdRestaurante)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservas_usuario")
                    .table(Reservas::Table)
                    .col(Reservas::IdUsuario)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservas::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Reservas {
    Table,
    IdReserva,
    IdUsuario,
    IdRestaurante,
    FechaCreacion,
    FechaReserva,
    HoraReserva,
    NumeroPersonas,
    Estado,
    Comentarios,
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
