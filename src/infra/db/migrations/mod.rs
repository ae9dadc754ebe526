//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20241101_000001_create_usuarios_table;
mod m20241101_000002_create_categorias_table;
mod m20241101_000003_create_restaurantes_table;
mod m20241101_000004_create_opiniones_table;
mod m20241101_000005_create_reservas_table;
mod m20241115_000001_add_imagen_url_to_restaurantes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241101_000001_create_usuarios_table::Migration),
            Box::new(m20241101_000002_create_categorias_table::Migration),
            Box::new(m20241101_000003_create_restaurantes_table::Migration),
            Box::new(m20241101_000004_create_opiniones_table::Migration),
            Box::new(m20241101_000005_create_reservas_table::Migration),
            Box::new(m20241115_000001_add_imagen_url_to_restaurantes::Migration),
        ]
    }
}
