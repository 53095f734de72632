pub mod bookmark;
pub mod errors;

pub use bookmark::{
    ArticleBookmark, BaseFields, Bookmark, BookmarkKind, BookmarkRef, CodeBookmark, Collection,
    DesignBookmark, Detail, DetailValue, GenericBookmark, Timestamp,
};
