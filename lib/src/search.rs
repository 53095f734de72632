use crate::models::{BaseFields, BookmarkRef, Collection};
use crate::tags::any_tag_contains;

/// Case-insensitive substring search over url, title, notes and tags.
///
/// Results come in canonical variant order, then insertion order. The empty
/// term matches everything.
pub fn search<'a>(collection: &'a Collection, term: &str) -> Vec<BookmarkRef<'a>> {
    let needle = term.to_lowercase();
    collection
        .iter()
        .filter(|bookmark| matches(bookmark.base(), &needle))
        .collect()
}

/// `needle` must already be lowercased
pub fn matches(base: &BaseFields, needle: &str) -> bool {
    base.url.to_lowercase().contains(needle)
        || base.title.to_lowercase().contains(needle)
        || base
            .notes
            .as_deref()
            .is_some_and(|notes| notes.to_lowercase().contains(needle))
        || any_tag_contains(&base.tags, needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ArticleBookmark, BookmarkKind, CodeBookmark, DesignBookmark, GenericBookmark, Timestamp,
    };
    use chrono::DateTime;
    use rstest::rstest;

    fn ts() -> Timestamp {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z").unwrap()
    }

    fn base(url: &str, title: &str) -> BaseFields {
        BaseFields::new(url, title, ts())
    }

    fn tagged(url: &str, title: &str, tags: &[&str]) -> BaseFields {
        base(url, title).with_tags(tags.iter().map(|t| t.to_string()).collect())
    }

    /// One bookmark per variant carrying the tag "xyz123", plus decoys
    fn crafted_collection() -> Collection {
        let mut c = Collection::new();
        let generic = tagged("https://g.example", "Generic", &["xyz123"]);
        let article = tagged("https://a.example", "Article", &["read", "xyz123"]);
        let code = tagged("https://c.example", "Code", &["xyz123"]);
        let design = tagged("https://d.example", "Design", &["XYZ123"]);
        let decoy = base("https://decoy.example", "Decoy");
        let other_code = base("https://other.example", "Other code");

        c.push(GenericBookmark::new(generic, "misc").into());
        c.push(GenericBookmark::new(decoy, "misc").into());
        c.push(ArticleBookmark::new(article, "blog").into());
        c.push(CodeBookmark::new(code, "rust", "fix").into());
        c.push(DesignBookmark::new(design, "app", "saas", "dark").into());
        c.push(CodeBookmark::new(other_code, "xyz123-lang", "x").into());
        c
    }

    #[test]
    fn test_search_unique_tag_is_case_insensitive() {
        let collection = crafted_collection();
        let results = search(&collection, "XYZ123");

        let kinds: Vec<BookmarkKind> = results.iter().map(|b| b.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                BookmarkKind::Design,
                BookmarkKind::Code,
                BookmarkKind::Article,
                BookmarkKind::Generic
            ]
        );
        let titles: Vec<&str> = results.iter().map(|b| b.base().title.as_str()).collect();
        assert_eq!(titles, vec!["Design", "Code", "Article", "Generic"]);
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let collection = crafted_collection();
        let results = search(&collection, "");

        assert_eq!(results.len(), collection.len());
        for bookmark in collection.iter() {
            assert!(results.contains(&bookmark));
        }
    }

    #[test]
    fn test_no_match_is_empty() {
        let collection = crafted_collection();
        assert!(search(&collection, "nothing-like-this").is_empty());
        assert!(search(&Collection::new(), "").is_empty());
    }

    #[test]
    fn test_variant_fields_are_not_searched() {
        // "xyz123-lang" only appears in the code language
        let collection = crafted_collection();
        let results = search(&collection, "xyz123-lang");
        assert!(results.is_empty());
    }

    #[test]
    fn test_results_keep_insertion_order_within_variant() {
        let mut c = Collection::new();
        for title in ["first rust", "second rust", "third rust"] {
            c.push(GenericBookmark::new(base("https://x", title), "misc").into());
        }
        let titles: Vec<&str> = search(&c, "rust")
            .iter()
            .map(|b| b.base().title.as_str())
            .collect();
        assert_eq!(titles, vec!["first rust", "second rust", "third rust"]);
    }

    #[rstest]
    #[case("example.com/path")] // url
    #[case("handbook")] // title
    #[case("BOOKMARKED")] // notes
    #[case("typog")] // part of a tag
    fn test_matches_each_base_field(#[case] term: &str) {
        let base = BaseFields::new("https://example.com/path", "Design Handbook", ts())
            .with_notes("Bookmarked for later")
            .with_tags(vec!["typography".to_string()]);
        assert!(matches(&base, &term.to_lowercase()));
    }

    #[test]
    fn test_term_spanning_two_tags_does_not_match() {
        let base = tagged("https://x", "t", &["css", "grid"]);
        assert!(!matches(&base, "css, grid"));
        assert!(!matches(&base, "cssgrid"));
    }
}
