mod articles;
mod live;
mod preferences;
mod schema;
mod seed;
mod types;

pub use live::ArticleWatcher;
pub use schema::Database;
pub use seed::builtin_articles;
pub use types::{Article, ArticleQuery, SortType, StoreError};
