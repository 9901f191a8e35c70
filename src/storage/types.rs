use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Storage-layer errors with user-friendly messages.
///
/// Business-rule rejections (attempting to mutate a built-in article) are
/// *not* errors; the repository reports those as `Ok(false)`. Anything in
/// this enum means the storage layer itself broke.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another instance of the application has locked the database
    #[error("Another instance of pedia appears to be running. Please close it and try again.")]
    InstanceLocked,

    /// Migration failed
    #[error("Database migration failed: {0}")]
    Migration(String),

    /// Generic database error
    #[error("Database error: {0}")]
    Other(#[from] sqlx::Error),
}

impl StoreError {
    /// Check if a sqlx error indicates database locking
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        let error_string = err.to_string().to_lowercase();

        // SQLITE_BUSY (5): database is locked
        // SQLITE_LOCKED (6): database table is locked
        // SQLITE_CANTOPEN (14): unable to open database file
        if error_string.contains("database is locked")
            || error_string.contains("database table is locked")
            || error_string.contains("sqlite_busy")
            || error_string.contains("sqlite_locked")
            || error_string.contains("unable to open database file")
        {
            return StoreError::InstanceLocked;
        }

        StoreError::Other(err)
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A single encyclopedia entry.
///
/// `id` is caller-supplied and doubles as the recency sort key: user-created
/// articles derive their id from the creation timestamp, so "newest" means
/// "highest id". `user_created` is set once at creation and gates whether
/// the repository will accept updates or deletes; `bookmarked` is the only
/// field a caller may change on a built-in article.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub summary: String,
    /// Lightweight HTML-ish markup. Plain-text editors transcode newlines
    /// through [`crate::content`] before storing.
    pub content: String,
    pub read_time_minutes: i64,
    pub bookmarked: bool,
    /// Opaque path to a cover image; empty means "no image". The store never
    /// checks the path for existence.
    pub image_url: String,
    pub user_created: bool,
}

impl Article {
    /// Display color for the article's category.
    ///
    /// Unknown categories fall back to a neutral gray.
    pub fn category_color(&self) -> &'static str {
        match self.category.as_str() {
            "Sains" => "#4CAF50",
            "Teknologi" => "#2196F3",
            "Sejarah" => "#FF9800",
            "Seni" => "#E91E63",
            "Geografi" => "#009688",
            "Biologi" => "#8BC34A",
            "Pengetahuan Umum" => "#9C27B0",
            _ => "#757575",
        }
    }
}

// ============================================================================
// Query Shapes
// ============================================================================

/// The four live query shapes the store knows how to watch.
///
/// Every shape yields articles ordered by id descending. Blank-query and
/// all-category defaulting is the repository's job, not the store's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleQuery {
    /// Every article.
    All,
    /// Exact category match.
    Category(String),
    /// Substring match against title, summary, or content (SQLite `LIKE`,
    /// so ASCII matching is case-insensitive).
    Search(String),
    /// Only articles with the bookmark flag set.
    Bookmarked,
}

/// Total orderings the repository can project over the all-articles stream.
///
/// All six are applied with stable sorts, so ties keep the stream's
/// id-descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortType {
    TitleAsc,
    TitleDesc,
    ReadTimeAsc,
    ReadTimeDesc,
    /// Highest id first. Ids come from creation timestamps, so this
    /// approximates creation order.
    Newest,
    Oldest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_in(category: &str) -> Article {
        Article {
            id: 1,
            title: "Test".to_string(),
            category: category.to_string(),
            summary: "Summary".to_string(),
            content: "<p>Body</p>".to_string(),
            read_time_minutes: 5,
            bookmarked: false,
            image_url: String::new(),
            user_created: false,
        }
    }

    #[test]
    fn test_category_color_known() {
        assert_eq!(article_in("Sains").category_color(), "#4CAF50");
        assert_eq!(article_in("Teknologi").category_color(), "#2196F3");
        assert_eq!(article_in("Pengetahuan Umum").category_color(), "#9C27B0");
    }

    #[test]
    fn test_category_color_unknown_falls_back_to_gray() {
        assert_eq!(article_in("Matematika").category_color(), "#757575");
        assert_eq!(article_in("").category_color(), "#757575");
    }
}
