use crate::error::Result;
use crate::models::{Bookmark, BookmarkKind, BookmarkRef, Collection};
use crate::store::JsonStore;

/// Which bookmarks the view screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewFilter {
    /// Every variant, in canonical order
    All,
    /// A single variant
    Kind(BookmarkKind),
}

/// Bookmarks selected by a filter, in display order
pub fn select(collection: &Collection, filter: ViewFilter) -> Vec<BookmarkRef<'_>> {
    match filter {
        ViewFilter::All => collection.iter().collect(),
        ViewFilter::Kind(kind) => collection.iter_kind(kind).collect(),
    }
}

/// Validate, append and persist a new bookmark.
///
/// Invalid bookmarks are rejected before anything changes. If the save
/// fails the bookmark stays in `collection` and the `Save` error is
/// returned, so the caller can report it and keep the session going.
pub fn add_bookmark(
    store: &JsonStore,
    collection: &mut Collection,
    bookmark: Bookmark,
) -> Result<()> {
    bookmark.validate()?;

    let kind = bookmark.kind();
    log::debug!("Adding {} bookmark {}", kind, bookmark.base().url);
    collection.push(bookmark);

    store.save(collection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StashError;
    use crate::models::errors::ValidationError;
    use crate::models::{ArticleBookmark, BaseFields, CodeBookmark, DesignBookmark, Timestamp};
    use chrono::DateTime;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn ts() -> Timestamp {
        DateTime::parse_from_rfc3339("2024-08-01T07:00:00Z").unwrap()
    }

    fn base(url: &str, title: &str) -> BaseFields {
        BaseFields::new(url, title, ts())
    }

    fn populated() -> Collection {
        let mut c = Collection::new();
        c.push(CodeBookmark::new(base("https://c", "c"), "go", "x").into());
        c.push(DesignBookmark::new(base("https://d", "d"), "app", "x", "dark").into());
        c.push(ArticleBookmark::new(base("https://a", "a"), "blog").into());
        c
    }

    #[rstest]
    #[case(ViewFilter::All, vec!["d", "c", "a"])]
    #[case(ViewFilter::Kind(BookmarkKind::Code), vec!["c"])]
    #[case(ViewFilter::Kind(BookmarkKind::Generic), vec![])]
    fn test_select(#[case] filter: ViewFilter, #[case] expected: Vec<&str>) {
        let collection = populated();
        let titles: Vec<&str> = select(&collection, filter)
            .iter()
            .map(|b| b.base().title.as_str())
            .collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_add_bookmark_appends_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("bookmarks.json"));
        let mut collection = populated();

        let bookmark: Bookmark =
            CodeBookmark::new(BaseFields::new("https://new", "new", ts()), "rust", "y").into();
        add_bookmark(&store, &mut collection, bookmark).unwrap();

        assert_eq!(collection.code.len(), 2);
        assert_eq!(collection.code[1].base.title, "new");
        assert_eq!(store.load().unwrap(), collection);
    }

    #[test]
    fn test_add_invalid_bookmark_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bookmarks.json");
        let store = JsonStore::new(&path);
        let mut collection = Collection::new();

        let bookmark: Bookmark = DesignBookmark::new(base("https://d", "d"), "app", "x", "dark")
            .with_repo("")
            .into();
        let err = add_bookmark(&store, &mut collection, bookmark).unwrap_err();

        assert!(matches!(
            err,
            StashError::Validation(ValidationError::MissingRepoUrl(_))
        ));
        assert!(collection.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn test_add_keeps_bookmark_in_memory_when_save_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file").unwrap();
        let store = JsonStore::new(blocker.join("bookmarks.json"));
        let mut collection = Collection::new();

        let bookmark: Bookmark = ArticleBookmark::new(base("https://a", "a"), "blog").into();
        let err = add_bookmark(&store, &mut collection, bookmark).unwrap_err();

        assert!(matches!(err, StashError::Save { .. }));
        assert_eq!(collection.articles.len(), 1);
    }
}
