pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod models;
pub mod operations;
pub mod search;
pub mod store;
pub mod tags;
pub mod utils;

// Re-export the types most callers need
pub use error::{Result, StashError};
pub use models::{Bookmark, BookmarkKind, BookmarkRef, Collection};
pub use store::JsonStore;
