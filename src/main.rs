use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pedia::config::Config;
use pedia::content::{breaks_to_newlines, newlines_to_breaks};
use pedia::repository::{ArticleRepository, ALL_CATEGORY};
use pedia::storage::{Article, ArticleWatcher, Database, SortType, StoreError};
use pedia::util::truncate_to_width;

/// Get the config directory path (~/.config/pedia/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("pedia"))
}

#[derive(Parser, Debug)]
#[command(name = "pedia", about = "Local offline encyclopedia")]
struct Args {
    /// Use an alternate database file
    #[arg(long, value_name = "FILE")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List articles, optionally filtered by category or sorted
    List {
        /// Category name, or "Semua" for everything
        #[arg(long)]
        category: Option<String>,
        /// One of: title-asc, title-desc, read-time-asc, read-time-desc, newest, oldest
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show one article in full and record the view
    Show { id: i64 },
    /// Search titles, summaries, and content for a substring
    Search { query: String },
    /// Add a user-authored article
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        summary: String,
        /// Plain text; newlines are stored as inline break markers
        #[arg(long)]
        content: String,
        /// Estimated reading time in minutes (defaults to 5 if unparsable)
        #[arg(long)]
        read_time: Option<String>,
        /// Path to a cover image, stored opaquely
        #[arg(long)]
        image: Option<String>,
    },
    /// Edit a user-authored article
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        summary: Option<String>,
        /// Plain text; newlines are stored as inline break markers
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        read_time: Option<String>,
        #[arg(long)]
        image: Option<String>,
    },
    /// Delete a user-authored article
    Delete { id: i64 },
    /// Toggle an article's bookmark flag
    Bookmark { id: i64 },
    /// List bookmarked articles
    Bookmarks,
    /// List the five most recently viewed articles
    Recent,
    /// List the category filter chips
    Categories,
    /// Show per-category article counts
    Stats,
}

fn parse_sort(value: &str) -> Result<SortType> {
    match value {
        "title-asc" => Ok(SortType::TitleAsc),
        "title-desc" => Ok(SortType::TitleDesc),
        "read-time-asc" => Ok(SortType::ReadTimeAsc),
        "read-time-desc" => Ok(SortType::ReadTimeDesc),
        "newest" => Ok(SortType::Newest),
        "oldest" => Ok(SortType::Oldest),
        other => anyhow::bail!(
            "Unknown sort '{}'. Expected one of: title-asc, title-desc, read-time-asc, read-time-desc, newest, oldest",
            other
        ),
    }
}

/// Print one snapshot of a live query as an aligned table.
async fn print_listing(mut watcher: ArticleWatcher) -> Result<()> {
    let articles = watcher.next().await?;
    if articles.is_empty() {
        println!("No articles.");
        return Ok(());
    }

    for article in &articles {
        let marker = if article.bookmarked { "*" } else { " " };
        println!(
            "{} {:>12}  {:<44}  {:<16}  {:>2} min",
            marker,
            article.id,
            truncate_to_width(&article.title, 44),
            truncate_to_width(&article.category, 16),
            article.read_time_minutes,
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
    }

    let config = Config::load(&config_dir.join("config.toml"))?;

    let db_path = args
        .db
        .or(config.database_path.clone())
        .unwrap_or_else(|| config_dir.join("pedia.db"));
    let db_path_str = db_path
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Invalid UTF-8 in database path"))?;

    let db = match Database::open(db_path_str).await {
        Ok(db) => db,
        Err(StoreError::InstanceLocked) => {
            eprintln!(
                "Error: Another instance of pedia appears to be running. Please close it and try again."
            );
            std::process::exit(1);
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to open database: {}", e)),
    };

    // Built-in catalog lands exactly once, on the first open of an empty store
    let seeded = db.seed_if_empty().await.context("Failed to seed catalog")?;
    if seeded > 0 {
        tracing::info!(articles = seeded, "initialized built-in catalog");
    }

    let repo = ArticleRepository::new(db, config.categories.clone());

    if repo.is_first_launch().await? {
        println!(
            "Welcome to pedia: {} built-in articles ready to read.",
            repo.article_count().await?
        );
        repo.set_first_launch_complete().await?;
    }

    match args.command {
        Command::List { category, sort } => {
            let watcher = match (category, sort) {
                (Some(category), None) => repo.articles_by_category(&category),
                (None, Some(sort)) => repo.sorted_articles(parse_sort(&sort)?),
                (None, None) => repo.all_articles(),
                (Some(_), Some(_)) => {
                    anyhow::bail!("--category and --sort cannot be combined")
                }
            };
            print_listing(watcher).await?;
        }

        Command::Show { id } => match repo.article_by_id(id).await? {
            Some(article) => {
                println!("{}", article.title);
                println!(
                    "{} ({}) · {} min read{}",
                    article.category,
                    article.category_color(),
                    article.read_time_minutes,
                    if article.bookmarked {
                        " · bookmarked"
                    } else {
                        ""
                    },
                );
                if !article.image_url.is_empty() {
                    println!("image: {}", article.image_url);
                }
                println!();
                println!("{}", article.summary);
                println!();
                println!("{}", breaks_to_newlines(&article.content));

                repo.add_recently_viewed(id).await?;
            }
            None => println!("No article with id {}.", id),
        },

        Command::Search { query } => {
            print_listing(repo.search_articles(&query)).await?;
        }

        Command::Add {
            title,
            category,
            summary,
            content,
            read_time,
            image,
        } => {
            // Ids derive from the creation timestamp, so "newest" ordering
            // by id approximates creation order.
            let id = Utc::now().timestamp();
            let article = Article {
                id,
                title,
                category,
                summary,
                content: newlines_to_breaks(&content),
                read_time_minutes: read_time.and_then(|s| s.trim().parse().ok()).unwrap_or(5),
                bookmarked: false,
                image_url: image.unwrap_or_default(),
                user_created: true,
            };
            repo.insert_article(&article).await?;
            println!("Added article {}.", id);
        }

        Command::Edit {
            id,
            title,
            category,
            summary,
            content,
            read_time,
            image,
        } => match repo.article_by_id(id).await? {
            Some(existing) => {
                let replacement = Article {
                    title: title.unwrap_or(existing.title.clone()),
                    category: category.unwrap_or(existing.category.clone()),
                    summary: summary.unwrap_or(existing.summary.clone()),
                    content: content
                        .map(|c| newlines_to_breaks(&c))
                        .unwrap_or(existing.content.clone()),
                    read_time_minutes: read_time
                        .and_then(|s| s.trim().parse().ok())
                        .unwrap_or(existing.read_time_minutes),
                    image_url: image.unwrap_or(existing.image_url.clone()),
                    ..existing
                };
                if repo.update_article(&replacement).await? {
                    println!("Updated article {}.", id);
                } else {
                    println!("Only articles you created can be edited.");
                }
            }
            None => println!("No article with id {}.", id),
        },

        Command::Delete { id } => {
            if repo.delete_article(id).await? {
                println!("Deleted article {}.", id);
            } else {
                println!("Only articles you created can be deleted.");
            }
        }

        Command::Bookmark { id } => {
            repo.toggle_bookmark(id).await?;
            match repo.article_by_id(id).await? {
                Some(article) if article.bookmarked => {
                    println!("Bookmarked \"{}\".", article.title)
                }
                Some(article) => println!("Removed bookmark from \"{}\".", article.title),
                None => println!("No article with id {}.", id),
            }
        }

        Command::Bookmarks => {
            print_listing(repo.bookmarked_articles()).await?;
        }

        Command::Recent => {
            print_listing(repo.recently_viewed_articles().await?).await?;
        }

        Command::Categories => {
            for category in repo.all_categories() {
                println!("{}", category);
            }
        }

        Command::Stats => {
            for category in repo.all_categories() {
                let count = repo.article_count_by_category(&category).await?;
                let label = if category == ALL_CATEGORY {
                    "Semua (total)"
                } else {
                    category.as_str()
                };
                println!("{:<20} {}", label, count);
            }
        }
    }

    Ok(())
}
