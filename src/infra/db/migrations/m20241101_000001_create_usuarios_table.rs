//! Migration: Create users table.

use sea_orm_migration::prelude::*;

use crate::config::ROLE_CLIENT;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Usuarios::IdUsuario)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Nombre).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Usuarios::Email)
                            .string_len(150)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Usuarios::Password).string_len(255).not_null())
                    .col(ColumnDef::new(Usuarios::Telefono).string_len(20).null())
                    .col(
                        ColumnDef::new(Usuarios::Rol)
                            .string_len(20)
                            .not_null()
                            .default(ROLE_CLIENT),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Usuarios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Usuarios {
    Table,
    IdUsuario,
    Nombre,
    Email,
    Password,
    Telefono,
    Rol,
}
