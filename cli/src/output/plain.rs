use super::{detail_text, SEPARATOR};
use stashmark::export::ADDED_FORMAT;
use stashmark::models::BookmarkRef;
use stashmark::tags::join_tags;

pub struct PlainBookmark<'a>(pub BookmarkRef<'a>);

impl<'a> PlainBookmark<'a> {
    pub fn to_plain(&self) -> String {
        let base = self.0.base();
        let mut s = format!("\n{}\n", base.title);
        s.push_str(&format!("URL: {}\n", base.url));

        for detail in self.0.details() {
            s.push_str(&format!("{}: {}\n", detail.label, detail_text(detail.value)));
        }

        if let Some(notes) = base.notes() {
            s.push_str(&format!("Notes: {}\n", notes));
        }
        if !base.tags.is_empty() {
            s.push_str(&format!("Tags: {}\n", join_tags(&base.tags)));
        }
        s.push_str(&format!("Added: {}\n", base.created_at.format(ADDED_FORMAT)));
        s.push_str(SEPARATOR);
        s.push('\n');
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use stashmark::models::{ArticleBookmark, BaseFields, DesignBookmark};

    #[test]
    fn test_plain_article() {
        let article = ArticleBookmark::new(
            BaseFields::new(
                "https://blog.dev/a",
                "Async Rust",
                DateTime::parse_from_rfc3339("2024-03-01T14:05:00Z").unwrap(),
            )
            .with_tags(vec!["rust".into(), "async".into()]),
            "blog",
        )
        .with_reading_time(9);

        let text = PlainBookmark(BookmarkRef::Article(&article)).to_plain();
        assert_eq!(
            text,
            "\nAsync Rust\n\
URL: https://blog.dev/a\n\
Reading Time: 9 minutes\n\
Category: blog\n\
Tags: rust, async\n\
Added: 2024-03-01 14:05:00\n\
---------------\n"
        );
    }

    #[test]
    fn test_plain_design_repository_only_when_flagged() {
        let base = BaseFields::new(
            "https://x.design",
            "X",
            DateTime::parse_from_rfc3339("2024-03-01T14:05:00Z").unwrap(),
        );
        let without = DesignBookmark::new(base.clone(), "app", "saas", "dark");
        let with = DesignBookmark::new(base, "app", "saas", "dark").with_repo("https://git/x");

        assert!(!PlainBookmark(BookmarkRef::Design(&without))
            .to_plain()
            .contains("Repository"));
        assert!(PlainBookmark(BookmarkRef::Design(&with))
            .to_plain()
            .contains("Repository: https://git/x\n"));
    }
}
