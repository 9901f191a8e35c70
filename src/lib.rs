//! Core library for a single-user local encyclopedia.
//!
//! The crate is organized around three layers:
//!
//! - [`storage`]: durable article records and a small key-value preference
//!   area, both backed by one SQLite file. The store guarantees storage
//!   consistency only; it performs no business validation.
//! - [`repository`]: the sole entry point for callers. Enforces mutation
//!   rights (built-in articles are read-only except for their bookmark
//!   flag), composes search/filter/sort, and projects the recently-viewed
//!   id list onto live article data.
//! - [`content`]: the newline/`<br>` transcoding pair used when stored
//!   markup is edited in a plain-text field.
//!
//! The binary in `src/main.rs` is a reference collaborator: it wires up
//! config, logging, and the repository, and drives every operation from the
//! command line.

pub mod config;
pub mod content;
pub mod repository;
pub mod storage;
pub mod util;
