// Database schema — table creation and migrations.
//
// We use a simple version-based migration approach: a `schema_version` table
// tracks which migrations have run, and each migration is a function that
// executes SQL statements.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet.
///
/// This is idempotent — safe to call on every startup.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        -- Tracks schema version for future migrations
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Service centers in the directory
        CREATE TABLE IF NOT EXISTS centers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL,
            latitude REAL NOT NULL,
            longitude REAL NOT NULL,
            phone TEXT,
            website TEXT,
            services TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- Append-only history of analysis results
        CREATE TABLE IF NOT EXISTS analysis_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            mode TEXT NOT NULL,                -- classification / sentiment / ...
            topic TEXT,                        -- classified topic label
            topic_confidence REAL,             -- 0.0 to 1.0
            sentiment REAL,                    -- -1.0 to 1.0
            risk_label TEXT,                   -- low / moderate / high
            risk_confidence REAL,              -- 0.3 / 0.6 / 0.8
            generated_text TEXT,
            error_json TEXT,                   -- typed ErrorKind, JSON-encoded
            created_at TEXT NOT NULL
        );

        -- Index for the recent-history listing
        CREATE INDEX IF NOT EXISTS idx_history_created
            ON analysis_history(created_at);

        -- Index for per-mode history queries
        CREATE INDEX IF NOT EXISTS idx_history_mode
            ON analysis_history(mode);
        ",
    )
    .context("Failed to create database tables")?;

    // Record initial schema version if not already set
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version) VALUES (?1)",
        [1],
    )?;

    // Migration v2: add fact_check_score column to centers. Stores the
    // risk-scorer confidence for the center's services description,
    // computed when the center is added.
    run_migration(conn, 2, |c| {
        c.execute_batch("ALTER TABLE centers ADD COLUMN fact_check_score REAL;")
    })?;

    Ok(())
}

/// Run a migration if it hasn't been applied yet.
/// The migration function receives the connection and should execute its SQL.
fn run_migration<F>(conn: &Connection, version: i64, migrate: F) -> Result<()>
where
    F: FnOnce(&Connection) -> rusqlite::Result<()>,
{
    let already_applied: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM schema_version WHERE version = ?1",
        [version],
        |row| row.get(0),
    )?;

    if !already_applied {
        migrate(conn).with_context(|| format!("Migration v{version} failed"))?;
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
    }

    Ok(())
}

/// Count the number of tables in the database (useful for init confirmation).
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}
