//! Integration tests for the user-authored article flow: add, edit with
//! plain-text transcoding, delete, and the mutation gate protecting
//! built-in entries.

use pedia::content::{breaks_to_newlines, newlines_to_breaks};
use pedia::repository::ArticleRepository;
use pedia::storage::{Article, Database};
use pretty_assertions::assert_eq;

async fn seeded_repo() -> ArticleRepository {
    let db = Database::open(":memory:").await.unwrap();
    db.seed_if_empty().await.unwrap();
    let categories = ["Sains", "Sejarah", "Teknologi"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    ArticleRepository::new(db, categories)
}

/// What the authoring UI produces: a fresh timestamp-style id, plain-text
/// content encoded to break markers, read time already defaulted.
fn authored(id: i64, title: &str, typed_content: &str) -> Article {
    Article {
        id,
        title: title.to_string(),
        category: "Teknologi".to_string(),
        summary: format!("Summary of {title}"),
        content: newlines_to_breaks(typed_content),
        read_time_minutes: 5,
        bookmarked: false,
        image_url: String::new(),
        user_created: true,
    }
}

#[tokio::test]
async fn test_add_then_read_back_user_article() {
    let repo = seeded_repo().await;
    let article = authored(1_700_000_001, "Catatan Baru", "Baris satu.\nBaris dua.");
    repo.insert_article(&article).await.unwrap();

    let stored = repo.article_by_id(article.id).await.unwrap().unwrap();
    assert_eq!(stored, article);
    assert_eq!(stored.content, "Baris satu.<br>Baris dua.");
}

#[tokio::test]
async fn test_edit_round_trip_is_exact() {
    let repo = seeded_repo().await;
    let typed = "Paragraf pertama.\n\nParagraf kedua.";
    let article = authored(1_700_000_002, "Draf", typed);
    repo.insert_article(&article).await.unwrap();

    // Reload for editing: the plain-text field sees the typed text again
    let stored = repo.article_by_id(article.id).await.unwrap().unwrap();
    let editable = breaks_to_newlines(&stored.content);
    assert_eq!(editable, typed);

    // Save without changes: stored bytes are identical
    let resaved = Article {
        content: newlines_to_breaks(&editable),
        ..stored.clone()
    };
    assert!(repo.update_article(&resaved).await.unwrap());
    let after = repo.article_by_id(article.id).await.unwrap().unwrap();
    assert_eq!(after.content, stored.content);
}

#[tokio::test]
async fn test_update_user_article_reflects_new_values_exactly() {
    let repo = seeded_repo().await;
    let article = authored(1_700_000_003, "Sebelum", "Isi lama.");
    repo.insert_article(&article).await.unwrap();

    let replacement = Article {
        title: "Sesudah".to_string(),
        summary: "Ringkasan baru".to_string(),
        read_time_minutes: 8,
        ..article.clone()
    };
    assert!(repo.update_article(&replacement).await.unwrap());

    let stored = repo.article_by_id(article.id).await.unwrap().unwrap();
    assert_eq!(stored, replacement);
}

#[tokio::test]
async fn test_builtin_articles_reject_update_and_delete() {
    let repo = seeded_repo().await;
    let builtin = repo.article_by_id(1).await.unwrap().unwrap();
    assert!(!builtin.user_created);

    let vandalized = Article {
        title: "Diubah".to_string(),
        user_created: true,
        ..builtin.clone()
    };
    assert!(!repo.update_article(&vandalized).await.unwrap());
    assert!(!repo.delete_article(1).await.unwrap());

    // Store unchanged after both rejections
    let after = repo.article_by_id(1).await.unwrap().unwrap();
    assert_eq!(after, builtin);
}

#[tokio::test]
async fn test_delete_removes_user_article_permanently() {
    let repo = seeded_repo().await;
    let article = authored(1_700_000_004, "Sementara", "Akan dihapus.");
    repo.insert_article(&article).await.unwrap();
    let before = repo.article_count().await.unwrap();

    assert!(repo.delete_article(article.id).await.unwrap());
    assert_eq!(repo.article_count().await.unwrap(), before - 1);
    assert!(repo.article_by_id(article.id).await.unwrap().is_none());

    // Deleting again reports failure, not an error
    assert!(!repo.delete_article(article.id).await.unwrap());
}

#[tokio::test]
async fn test_user_article_appears_first_in_newest_ordering() {
    let repo = seeded_repo().await;
    // Timestamp-derived ids dwarf the seed ids, so a new article leads
    let article = authored(1_700_000_005, "Terbaru", "Isi.");
    repo.insert_article(&article).await.unwrap();

    let all = repo.all_articles().next().await.unwrap();
    assert_eq!(all[0].id, article.id);
}

#[tokio::test]
async fn test_live_listing_sees_add_and_delete() {
    let repo = seeded_repo().await;
    let mut watcher = repo.all_articles();
    let baseline = watcher.next().await.unwrap().len();

    let article = authored(1_700_000_006, "Muncul", "Isi.");
    repo.insert_article(&article).await.unwrap();
    assert_eq!(watcher.next().await.unwrap().len(), baseline + 1);

    repo.delete_article(article.id).await.unwrap();
    assert_eq!(watcher.next().await.unwrap().len(), baseline);
}
