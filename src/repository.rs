//! Caller-facing orchestration over the article store and preference area.
//!
//! The repository is the only entry point collaborators use; it never hands
//! out raw storage handles. It owns the rules the store does not enforce:
//! built-in articles accept no update or delete, the bookmark flag is
//! exempt from that gate, blank searches and the `Semua` sentinel mean
//! "no filter", and the recently-viewed projection drops dangling ids.

use anyhow::Result;

use crate::storage::{Article, ArticleQuery, ArticleWatcher, Database, SortType};

/// Synthetic category meaning "no category filter". Shown first in filter
/// chips, never stored on any article.
pub const ALL_CATEGORY: &str = "Semua";

/// The repository. Cheap to clone; clones share the underlying store.
///
/// Construct one per process at startup and pass handles down; there is no
/// hidden global instance.
#[derive(Clone)]
pub struct ArticleRepository {
    db: Database,
    categories: Vec<String>,
}

impl ArticleRepository {
    /// Build a repository over an opened store and the fixed category list.
    pub fn new(db: Database, categories: Vec<String>) -> Self {
        Self { db, categories }
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Look up an article by id. Absence is a normal outcome.
    pub async fn article_by_id(&self, id: i64) -> Result<Option<Article>> {
        self.db.article_by_id(id).await
    }

    /// Insert a new article.
    ///
    /// No existence check: new articles are expected to carry fresh ids, and
    /// an id collision replaces the previous record in full.
    pub async fn insert_article(&self, article: &Article) -> Result<()> {
        self.db.upsert_article(article).await
    }

    /// Replace an existing user-created article.
    ///
    /// Returns `Ok(false)`, with no write performed, when no record exists
    /// under `article.id`, or when the *stored* record is a built-in. The
    /// stored flag decides, so a caller cannot smuggle `user_created = true`
    /// on an id that has no user-created record behind it.
    pub async fn update_article(&self, article: &Article) -> Result<bool> {
        match self.db.article_by_id(article.id).await? {
            Some(existing) if existing.user_created => {
                self.db.update_article(article).await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Delete a user-created article by id.
    ///
    /// Same check-then-act shape as [`update_article`](Self::update_article):
    /// `Ok(false)` and no mutation unless the stored record exists and is
    /// user-created. The check and the delete are two storage calls; the
    /// store is single-writer, so nothing can slip between them.
    pub async fn delete_article(&self, id: i64) -> Result<bool> {
        match self.db.article_by_id(id).await? {
            Some(existing) if existing.user_created => {
                self.db.delete_article_by_id(id).await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Flip an article's bookmark flag.
    ///
    /// Exempt from the user-created gate: built-ins may be bookmarked too.
    /// A silent no-op when the id does not exist.
    pub async fn toggle_bookmark(&self, id: i64) -> Result<()> {
        if let Some(existing) = self.db.article_by_id(id).await? {
            self.db.set_bookmarked(id, !existing.bookmarked).await?;
        }
        Ok(())
    }

    // ========================================================================
    // Live Queries
    // ========================================================================

    /// All articles, newest id first.
    pub fn all_articles(&self) -> ArticleWatcher {
        self.db.watch(ArticleQuery::All)
    }

    /// Bookmarked articles only.
    pub fn bookmarked_articles(&self) -> ArticleWatcher {
        self.db.watch(ArticleQuery::Bookmarked)
    }

    /// Substring search over title, summary, and content.
    ///
    /// A blank query means "no filter" and yields the unfiltered stream.
    pub fn search_articles(&self, query: &str) -> ArticleWatcher {
        if query.trim().is_empty() {
            self.all_articles()
        } else {
            self.db.watch(ArticleQuery::Search(query.to_string()))
        }
    }

    /// Articles in one category; the [`ALL_CATEGORY`] sentinel yields the
    /// unfiltered stream.
    pub fn articles_by_category(&self, category: &str) -> ArticleWatcher {
        if category == ALL_CATEGORY {
            self.all_articles()
        } else {
            self.db.watch(ArticleQuery::Category(category.to_string()))
        }
    }

    /// All articles projected through one of the six total orderings.
    pub fn sorted_articles(&self, sort: SortType) -> ArticleWatcher {
        self.db.watch(ArticleQuery::All).sorted(sort)
    }

    /// The recently-viewed articles, most recent first.
    ///
    /// The recency id list is captured at subscription time; each snapshot
    /// projects it onto the articles that still exist, silently dropping
    /// ids deleted since they were viewed.
    pub async fn recently_viewed_articles(&self) -> Result<ArticleWatcher> {
        let ids = self.db.recently_viewed().await?;
        Ok(self.db.watch(ArticleQuery::All).with_recency(ids))
    }

    /// Record a view. Fire-and-forget relative to article mutations: no
    /// transaction ties this to any other write.
    pub async fn add_recently_viewed(&self, id: i64) -> Result<()> {
        self.db.add_recently_viewed(id).await
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Total number of stored articles.
    pub async fn article_count(&self) -> Result<i64> {
        self.db.article_count().await
    }

    /// Number of articles in a category; [`ALL_CATEGORY`] counts everything.
    pub async fn article_count_by_category(&self, category: &str) -> Result<i64> {
        if category == ALL_CATEGORY {
            self.db.article_count().await
        } else {
            self.db.article_count_by_category(category).await
        }
    }

    // ========================================================================
    // Categories
    // ========================================================================

    /// Filter-chip categories: the sentinel first, then the fixed list in
    /// alphabetical order.
    pub fn all_categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        categories.extend(self.spinner_categories());
        categories
    }

    /// Authoring categories: the fixed list alphabetically, no sentinel.
    pub fn spinner_categories(&self) -> Vec<String> {
        let mut categories = self.categories.clone();
        categories.sort();
        categories
    }

    // ========================================================================
    // First Launch
    // ========================================================================

    /// Whether the store has never been opened by this user before.
    pub async fn is_first_launch(&self) -> Result<bool> {
        self.db.is_first_launch().await
    }

    /// Latch the first-launch flag off.
    pub async fn set_first_launch_complete(&self) -> Result<()> {
        self.db.set_first_launch_complete().await
    }
}

#[cfg(test)]
mod tests {
    use super::{ArticleRepository, ALL_CATEGORY};
    use crate::storage::{Article, Database, SortType};

    async fn test_repo() -> ArticleRepository {
        let db = Database::open(":memory:").await.unwrap();
        ArticleRepository::new(db, default_categories())
    }

    fn default_categories() -> Vec<String> {
        [
            "Sains",
            "Sejarah",
            "Teknologi",
            "Seni",
            "Geografi",
            "Biologi",
            "Pengetahuan Umum",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn builtin_article(id: i64, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            category: "Sains".to_string(),
            summary: format!("Summary for {title}"),
            content: format!("<p>Body of {title}</p>"),
            read_time_minutes: 5,
            bookmarked: false,
            image_url: String::new(),
            user_created: false,
        }
    }

    fn user_article(id: i64, title: &str) -> Article {
        Article {
            user_created: true,
            ..builtin_article(id, title)
        }
    }

    #[tokio::test]
    async fn test_update_builtin_is_denied_and_store_unchanged() {
        let repo = test_repo().await;
        repo.insert_article(&builtin_article(1, "Immutable"))
            .await
            .unwrap();

        let mut attempt = builtin_article(1, "Vandalized");
        attempt.user_created = true; // incoming flag must not matter
        let updated = repo.update_article(&attempt).await.unwrap();

        assert!(!updated);
        let stored = repo.article_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored.title, "Immutable");
        assert!(!stored.user_created);
    }

    #[tokio::test]
    async fn test_update_with_unknown_id_is_denied() {
        let repo = test_repo().await;
        // No record behind id 77, so smuggling user_created=true changes nothing
        let updated = repo.update_article(&user_article(77, "Ghost")).await.unwrap();
        assert!(!updated);
        assert_eq!(repo.article_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_user_article_succeeds_exactly() {
        let repo = test_repo().await;
        repo.insert_article(&user_article(10, "Draft")).await.unwrap();

        let mut replacement = user_article(10, "Final");
        replacement.summary = "Rewritten".to_string();
        replacement.read_time_minutes = 3;
        assert!(repo.update_article(&replacement).await.unwrap());

        let stored = repo.article_by_id(10).await.unwrap().unwrap();
        assert_eq!(stored, replacement);
    }

    #[tokio::test]
    async fn test_delete_gates_on_stored_flag() {
        let repo = test_repo().await;
        repo.insert_article(&builtin_article(1, "Keep")).await.unwrap();
        repo.insert_article(&user_article(2, "Remove")).await.unwrap();

        assert!(!repo.delete_article(1).await.unwrap());
        assert!(repo.delete_article(2).await.unwrap());
        assert!(!repo.delete_article(99).await.unwrap());

        assert!(repo.article_by_id(1).await.unwrap().is_some());
        assert!(repo.article_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_toggle_bookmark_twice_restores_original() {
        let repo = test_repo().await;
        repo.insert_article(&builtin_article(1, "Builtin")).await.unwrap();
        repo.insert_article(&user_article(2, "Mine")).await.unwrap();

        for id in [1, 2] {
            repo.toggle_bookmark(id).await.unwrap();
            assert!(repo.article_by_id(id).await.unwrap().unwrap().bookmarked);

            repo.toggle_bookmark(id).await.unwrap();
            assert!(!repo.article_by_id(id).await.unwrap().unwrap().bookmarked);
        }

        // Unknown id: silent no-op
        repo.toggle_bookmark(42).await.unwrap();
    }

    #[tokio::test]
    async fn test_blank_search_equals_all_articles() {
        let repo = test_repo().await;
        repo.insert_article(&builtin_article(1, "One")).await.unwrap();
        repo.insert_article(&builtin_article(2, "Two")).await.unwrap();

        let all = repo.all_articles().next().await.unwrap();
        let blank = repo.search_articles("   ").next().await.unwrap();
        assert_eq!(all, blank);
    }

    #[tokio::test]
    async fn test_category_sentinel_means_no_filter() {
        let repo = test_repo().await;
        let mut seni = builtin_article(2, "Renaissance");
        seni.category = "Seni".to_string();
        repo.insert_article(&builtin_article(1, "Sel")).await.unwrap();
        repo.insert_article(&seni).await.unwrap();

        let all = repo.articles_by_category(ALL_CATEGORY).next().await.unwrap();
        assert_eq!(all.len(), 2);

        let seni_only = repo.articles_by_category("Seni").next().await.unwrap();
        assert_eq!(seni_only.len(), 1);
        assert_eq!(seni_only[0].title, "Renaissance");
    }

    #[tokio::test]
    async fn test_count_by_category_with_sentinel() {
        let repo = test_repo().await;
        let mut seni = builtin_article(2, "Renaissance");
        seni.category = "Seni".to_string();
        repo.insert_article(&builtin_article(1, "Sel")).await.unwrap();
        repo.insert_article(&seni).await.unwrap();

        assert_eq!(
            repo.article_count_by_category(ALL_CATEGORY).await.unwrap(),
            repo.article_count().await.unwrap()
        );
        assert_eq!(repo.article_count_by_category("Seni").await.unwrap(), 1);
        assert_eq!(repo.article_count_by_category("Biologi").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_category_lists_are_sorted_with_and_without_sentinel() {
        let repo = test_repo().await;

        let spinner = repo.spinner_categories();
        assert_eq!(
            spinner,
            vec![
                "Biologi",
                "Geografi",
                "Pengetahuan Umum",
                "Sains",
                "Sejarah",
                "Seni",
                "Teknologi"
            ]
        );

        let all = repo.all_categories();
        assert_eq!(all[0], ALL_CATEGORY);
        assert_eq!(&all[1..], spinner.as_slice());
    }

    #[tokio::test]
    async fn test_sorted_articles_orderings() {
        let repo = test_repo().await;
        let mut beta = user_article(1, "Beta");
        beta.read_time_minutes = 8;
        let mut alpha = user_article(2, "Alpha");
        alpha.read_time_minutes = 5;
        let mut gamma = user_article(3, "Gamma");
        gamma.read_time_minutes = 6;
        for a in [&beta, &alpha, &gamma] {
            repo.insert_article(a).await.unwrap();
        }

        let titles: Vec<String> = repo
            .sorted_articles(SortType::TitleAsc)
            .next()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);

        let ids: Vec<i64> = repo
            .sorted_articles(SortType::Oldest)
            .next()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let times: Vec<i64> = repo
            .sorted_articles(SortType::ReadTimeDesc)
            .next()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.read_time_minutes)
            .collect();
        assert_eq!(times, vec![8, 6, 5]);
    }

    #[tokio::test]
    async fn test_recently_viewed_projection_drops_deleted() {
        let repo = test_repo().await;
        repo.insert_article(&user_article(1, "First")).await.unwrap();
        repo.insert_article(&user_article(2, "Second")).await.unwrap();
        repo.add_recently_viewed(1).await.unwrap();
        repo.add_recently_viewed(2).await.unwrap();

        assert!(repo.delete_article(1).await.unwrap());

        let recent = repo
            .recently_viewed_articles()
            .await
            .unwrap()
            .next()
            .await
            .unwrap();
        let ids: Vec<i64> = recent.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
