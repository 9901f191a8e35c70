//! Utility functions shared by the CLI front end.

mod text;

pub use text::{display_width, truncate_to_width};
