//! Migrate command - schema management for `RestaurantesReservas`.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the migrate command and print where every migration stands afterwards
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Migrations are never applied implicitly here
    let db = Database::connect_without_migrations(&config).await?;

    let status = apply(&db, args.action).await?;
    let pending = status.iter().filter(|(_, applied)| !applied).count();
    for (name, applied) in &status {
        println!("{:<55} {}", name, if *applied { "applied" } else { "pending" });
    }
    tracing::info!(
        action = ?args.action,
        total = status.len(),
        pending,
        "Migration command finished"
    );

    Ok(())
}

/// Run one migration action and return the resulting per-migration status.
pub async fn apply(db: &Database, action: MigrateAction) -> AppResult<Vec<(String, bool)>> {
    match action {
        MigrateAction::Up => db.run_migrations().await?,
        MigrateAction::Down => db.rollback_migration().await?,
        MigrateAction::Status => {}
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every table in the reservations schema");
            db.fresh_migrations().await?
        }
    }

    Ok(db.migration_status().await?)
}
