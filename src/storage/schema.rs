use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    SqlitePool,
};
use tokio::sync::watch;

use super::types::StoreError;

// ============================================================================
// Database
// ============================================================================

/// Handle to the article store and preference area.
///
/// Cheap to clone: clones share the connection pool and the data-version
/// channel that drives live queries. Every committed write bumps the
/// version, which wakes all active [`super::live::ArticleWatcher`]s.
#[derive(Clone)]
pub struct Database {
    pub(crate) pool: SqlitePool,
    pub(crate) data_version: Arc<watch::Sender<u64>>,
}

impl Database {
    /// Open a database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InstanceLocked` if another process has the
    /// database locked (SQLITE_BUSY, SQLITE_LOCKED, SQLITE_CANTOPEN).
    /// Returns `StoreError::Migration` if the schema could not be brought
    /// up to date, and `StoreError::Other` for other database errors.
    pub async fn open(path: &str) -> Result<Self, StoreError> {
        let url = format!("sqlite:{}?mode=rwc", path);

        // busy_timeout=5000: SQLite waits up to 5 seconds for locks to
        // release before returning SQLITE_BUSY. Using pragma() ensures all
        // connections in the pool inherit the setting.
        let options = SqliteConnectOptions::from_str(&url)
            .map_err(StoreError::from_sqlx)?
            .pragma("busy_timeout", "5000");
        // Single logical writer; a small pool covers concurrent readers
        // (live queries refreshing while a write settles).
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await
            .map_err(StoreError::from_sqlx)?;

        let (data_version, _) = watch::channel(0);
        let db = Self {
            pool,
            data_version: Arc::new(data_version),
        };

        db.migrate().await.map_err(|e| {
            // Migration errors could also be lock-related
            let error_string = e.to_string().to_lowercase();
            if error_string.contains("database is locked")
                || error_string.contains("database table is locked")
                || error_string.contains("sqlite_busy")
                || error_string.contains("sqlite_locked")
            {
                StoreError::InstanceLocked
            } else {
                StoreError::Migration(e.to_string())
            }
        })?;

        // One-time carry-over from the legacy comma-joined bookmark set.
        // Runs before any caller sees the store; a no-op when the key is
        // absent (every open after the first).
        db.migrate_legacy_bookmarks()
            .await
            .map_err(|e| StoreError::Migration(e.to_string()))?;

        Ok(db)
    }

    /// Mark the data as changed, waking every active live query.
    ///
    /// Called after each committed write. Watchers re-fetch on wake, so
    /// coalesced bumps still deliver the latest snapshot (last value wins).
    pub(crate) fn bump_data_version(&self) {
        self.data_version.send_modify(|v| *v = v.wrapping_add(1));
    }

    /// Run database migrations atomically within a transaction.
    ///
    /// All schema statements use `IF NOT EXISTS`, so re-running on an
    /// existing database is a no-op. If any step fails the transaction
    /// rolls back, leaving the previous schema intact.
    async fn migrate(&self) -> Result<()> {
        // Per-connection setting, must stay outside the transaction
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&self.pool)
            .await?;

        let mut tx = self.pool.begin().await?;

        // Article records, keyed by caller-supplied id
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS articles (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                category TEXT NOT NULL,
                summary TEXT NOT NULL,
                content TEXT NOT NULL,
                read_time_minutes INTEGER NOT NULL DEFAULT 5,
                bookmarked INTEGER NOT NULL DEFAULT 0,
                image_url TEXT NOT NULL DEFAULT '',
                user_created INTEGER NOT NULL DEFAULT 0
            )
        "#,
        )
        .execute(&mut *tx)
        .await?;

        // Indexes for the two filtered query shapes
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_articles_category ON articles(category)")
            .execute(&mut *tx)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_articles_bookmarked ON articles(bookmarked)")
            .execute(&mut *tx)
            .await?;

        // Key-value preference area: first_launch, recently_viewed, and the
        // legacy bookmarked_ids set (consumed once at open, then deleted)
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (datetime('now'))
            )
        "#,
        )
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }
}
