// App DB module — ~/.creatorlens/creatorlens.db
// User-global database holding per-user score weight configurations.
// Uses PRAGMA user_version for migration tracking.

pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::constants::{APP_DB_FILENAME, CREATORLENS_FOLDER};
use crate::error::{CreatorLensError, Result};

/// All App DB migrations in order. Each migration is a SQL string.
const APP_MIGRATIONS: &[&str] = &[
    // Migration A1: per-user score weights (JSON blob, wholesale overwrite)
    r#"
    CREATE TABLE IF NOT EXISTS score_weights (
        user_id TEXT PRIMARY KEY NOT NULL,
        weights TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        updated_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
];

/// Get the path to the App DB: ~/.creatorlens/creatorlens.db
pub fn get_app_db_path() -> Result<PathBuf> {
    let base = directories::BaseDirs::new()
        .ok_or_else(|| CreatorLensError::Other("Could not determine home directory".to_string()))?;
    Ok(base.home_dir().join(CREATORLENS_FOLDER).join(APP_DB_FILENAME))
}

/// Open the App DB at its default location, creating the directory and
/// running migrations as needed.
pub fn open_app_db() -> Result<Connection> {
    let db_path = get_app_db_path()?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    open_db(&db_path)
}

/// Open or create a database at the given path: set pragmas, run
/// migrations. Also used by tests against temp paths.
pub fn open_db(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    conn.execute_batch("PRAGMA busy_timeout=5000;")?;

    run_migrations(&conn)?;

    Ok(conn)
}

/// Get current App DB schema version
fn get_schema_version(conn: &Connection) -> Result<u32> {
    let version: u32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(version)
}

/// Run all pending migrations
fn run_migrations(conn: &Connection) -> Result<()> {
    let current_version = get_schema_version(conn)?;
    let target_version = APP_MIGRATIONS.len() as u32;

    if current_version > target_version {
        return Err(CreatorLensError::Other(format!(
            "App DB schema version {} is newer than this build supports (max {}). Please upgrade Creator Lens.",
            current_version, target_version
        )));
    }

    if current_version == target_version {
        return Ok(());
    }

    for (i, migration) in APP_MIGRATIONS.iter().enumerate() {
        let migration_version = (i + 1) as u32;
        if migration_version <= current_version {
            continue;
        }

        conn.execute_batch(migration)?;
        conn.execute_batch(&format!("PRAGMA user_version = {}", migration_version))?;

        log::info!("Applied App DB migration {}", migration_version);
    }

    Ok(())
}
