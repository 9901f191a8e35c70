use anyhow::Result;

use super::schema::Database;
use super::types::{Article, ArticleQuery};

/// Column list shared by every article query.
const ARTICLE_COLUMNS: &str = "id, title, category, summary, content, \
     read_time_minutes, bookmarked, image_url, user_created";

impl Database {
    // ========================================================================
    // Article Queries
    // ========================================================================

    /// Get a single article by its id.
    ///
    /// Point lookup with no live updates. Absence is a normal outcome, not
    /// an error; callers decide what a missing record means.
    pub async fn article_by_id(&self, id: i64) -> Result<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?");
        let article = sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(article)
    }

    /// Fetch the current snapshot for a query shape, ordered by id descending.
    ///
    /// This is the single read path behind every live query; watchers call
    /// it once per data-version change.
    pub(crate) async fn fetch(&self, query: &ArticleQuery) -> Result<Vec<Article>> {
        let articles = match query {
            ArticleQuery::All => {
                let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id DESC");
                sqlx::query_as::<_, Article>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
            ArticleQuery::Category(category) => {
                let sql = format!(
                    "SELECT {ARTICLE_COLUMNS} FROM articles WHERE category = ? ORDER BY id DESC"
                );
                sqlx::query_as::<_, Article>(&sql)
                    .bind(category)
                    .fetch_all(&self.pool)
                    .await?
            }
            ArticleQuery::Search(needle) => {
                // Naive substring containment over the three text fields,
                // exactly as typed. LIKE wildcards in the needle pass through.
                let pattern = format!("%{}%", needle);
                let sql = format!(
                    "SELECT {ARTICLE_COLUMNS} FROM articles \
                     WHERE title LIKE ?1 OR summary LIKE ?1 OR content LIKE ?1 \
                     ORDER BY id DESC"
                );
                sqlx::query_as::<_, Article>(&sql)
                    .bind(&pattern)
                    .fetch_all(&self.pool)
                    .await?
            }
            ArticleQuery::Bookmarked => {
                let sql = format!(
                    "SELECT {ARTICLE_COLUMNS} FROM articles WHERE bookmarked = 1 ORDER BY id DESC"
                );
                sqlx::query_as::<_, Article>(&sql)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(articles)
    }

    /// Total number of stored articles.
    pub async fn article_count(&self) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    /// Number of stored articles whose category matches exactly.
    pub async fn article_count_by_category(&self, category: &str) -> Result<i64> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles WHERE category = ?")
            .bind(category)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }

    // ========================================================================
    // Article Mutations
    // ========================================================================

    /// Insert an article, fully replacing any existing record with the same
    /// id. No partial-field update: the incoming record wins outright.
    pub async fn upsert_article(&self, article: &Article) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO articles (id, title, category, summary, content,
                                  read_time_minutes, bookmarked, image_url, user_created)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                category = excluded.category,
                summary = excluded.summary,
                content = excluded.content,
                read_time_minutes = excluded.read_time_minutes,
                bookmarked = excluded.bookmarked,
                image_url = excluded.image_url,
                user_created = excluded.user_created
        "#,
        )
        .bind(article.id)
        .bind(&article.title)
        .bind(&article.category)
        .bind(&article.summary)
        .bind(&article.content)
        .bind(article.read_time_minutes)
        .bind(article.bookmarked)
        .bind(&article.image_url)
        .bind(article.user_created)
        .execute(&self.pool)
        .await?;

        self.bump_data_version();
        Ok(())
    }

    /// Insert a batch of articles with the same insert-or-replace semantics,
    /// in one transaction. Live queries see a single version bump.
    pub async fn upsert_articles(&self, articles: &[Article]) -> Result<()> {
        if articles.is_empty() {
            return Ok(());
        }

        let mut tx = self.pool.begin().await?;
        for article in articles {
            sqlx::query(
                r#"
                INSERT INTO articles (id, title, category, summary, content,
                                      read_time_minutes, bookmarked, image_url, user_created)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    category = excluded.category,
                    summary = excluded.summary,
                    content = excluded.content,
                    read_time_minutes = excluded.read_time_minutes,
                    bookmarked = excluded.bookmarked,
                    image_url = excluded.image_url,
                    user_created = excluded.user_created
            "#,
            )
            .bind(article.id)
            .bind(&article.title)
            .bind(&article.category)
            .bind(&article.summary)
            .bind(&article.content)
            .bind(article.read_time_minutes)
            .bind(article.bookmarked)
            .bind(&article.image_url)
            .bind(article.user_created)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        self.bump_data_version();
        Ok(())
    }

    /// Replace an existing record by id. Silently a no-op if the id does not
    /// exist; callers that care must pre-check existence.
    pub async fn update_article(&self, article: &Article) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE articles
            SET title = ?, category = ?, summary = ?, content = ?,
                read_time_minutes = ?, bookmarked = ?, image_url = ?, user_created = ?
            WHERE id = ?
        "#,
        )
        .bind(&article.title)
        .bind(&article.category)
        .bind(&article.summary)
        .bind(&article.content)
        .bind(article.read_time_minutes)
        .bind(article.bookmarked)
        .bind(&article.image_url)
        .bind(article.user_created)
        .bind(article.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            self.bump_data_version();
        }
        Ok(())
    }

    /// Delete a record by id; no-op if absent.
    pub async fn delete_article_by_id(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            self.bump_data_version();
        }
        Ok(())
    }

    /// Set the bookmark flag on an article; no-op if the id is absent.
    pub async fn set_bookmarked(&self, id: i64, bookmarked: bool) -> Result<()> {
        let result = sqlx::query("UPDATE articles SET bookmarked = ? WHERE id = ?")
            .bind(bookmarked)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() > 0 {
            self.bump_data_version();
        }
        Ok(())
    }
}
