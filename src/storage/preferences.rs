use anyhow::Result;

use super::schema::Database;

/// One-way first-launch latch.
const KEY_FIRST_LAUNCH: &str = "first_launch";
/// Comma-joined recency list, most-recent-first.
const KEY_RECENTLY_VIEWED: &str = "recently_viewed";
/// Legacy comma-joined bookmark id set; consumed once at open, then deleted.
const KEY_BOOKMARKED_IDS: &str = "bookmarked_ids";

/// Capacity of the recently-viewed list. The sixth-most-recent view falls off.
const RECENTLY_VIEWED_LIMIT: usize = 5;

impl Database {
    // ========================================================================
    // Preference Operations
    // ========================================================================

    /// Get a single preference value by key.
    ///
    /// # Returns
    ///
    /// The preference value if the key exists, or `None` if not set.
    pub async fn preference(&self, key: &str) -> Result<Option<String>> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|(value,)| value))
    }

    /// Set a preference value (UPSERT).
    pub async fn set_preference(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a preference key entirely; no-op if absent.
    pub async fn delete_preference(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM preferences WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ========================================================================
    // First Launch
    // ========================================================================

    /// Whether this is the first launch. Defaults to true until
    /// [`set_first_launch_complete`](Self::set_first_launch_complete) runs.
    pub async fn is_first_launch(&self) -> Result<bool> {
        let value = self.preference(KEY_FIRST_LAUNCH).await?;
        Ok(value.as_deref() != Some("false"))
    }

    /// Latch the first-launch flag off. One-way: nothing resets it.
    pub async fn set_first_launch_complete(&self) -> Result<()> {
        self.set_preference(KEY_FIRST_LAUNCH, "false").await
    }

    // ========================================================================
    // Recently Viewed
    // ========================================================================

    /// Record a view of an article id.
    ///
    /// The id moves (or inserts) to the front of the recency list, which is
    /// then truncated to the five most recent entries. Re-viewing an id
    /// never grows the list.
    pub async fn add_recently_viewed(&self, id: i64) -> Result<()> {
        let mut ids = self.recently_viewed().await?;

        ids.retain(|existing| *existing != id);
        ids.insert(0, id);
        ids.truncate(RECENTLY_VIEWED_LIMIT);

        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.set_preference(KEY_RECENTLY_VIEWED, &joined).await
    }

    /// Recently viewed article ids, most-recent-first.
    ///
    /// Unparsable fragments in the stored list are dropped silently.
    pub async fn recently_viewed(&self) -> Result<Vec<i64>> {
        let stored = self.preference(KEY_RECENTLY_VIEWED).await?;
        let ids = stored
            .as_deref()
            .unwrap_or("")
            .split(',')
            .filter_map(|fragment| fragment.trim().parse().ok())
            .collect();
        Ok(ids)
    }

    /// Forget the recency list entirely.
    pub async fn clear_recently_viewed(&self) -> Result<()> {
        self.delete_preference(KEY_RECENTLY_VIEWED).await
    }

    // ========================================================================
    // Legacy Bookmark Migration
    // ========================================================================

    /// Apply the legacy `bookmarked_ids` preference to the per-article
    /// bookmark column, then delete the key.
    ///
    /// Earlier versions kept bookmarks as a comma-joined id set in the
    /// preference area. The set is never read on any live path; this is the
    /// only consumer. Ids that no longer resolve to an article are ignored.
    pub(crate) async fn migrate_legacy_bookmarks(&self) -> Result<usize> {
        let Some(stored) = self.preference(KEY_BOOKMARKED_IDS).await? else {
            return Ok(0);
        };

        let ids: Vec<i64> = stored
            .split(',')
            .filter_map(|fragment| fragment.trim().parse().ok())
            .collect();

        let mut applied = 0;
        for id in ids {
            let result = sqlx::query("UPDATE articles SET bookmarked = 1 WHERE id = ?")
                .bind(id)
                .execute(&self.pool)
                .await?;
            applied += result.rows_affected() as usize;
        }

        self.delete_preference(KEY_BOOKMARKED_IDS).await?;

        if applied > 0 {
            tracing::debug!(applied, "migrated legacy bookmark ids");
            self.bump_data_version();
        }
        Ok(applied)
    }
}
