use crate::input::non_empty;
use crate::models::errors::ValidationError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Creation timestamps keep the offset they were recorded with
pub type Timestamp = DateTime<FixedOffset>;

/// Older stores write `null` instead of `[]` for empty lists
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Hand-edited stores may hold `""` for an absent optional field
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_empty))
}

fn is_blank(value: &Option<String>) -> bool {
    present(value).is_none()
}

/// The value of an optional field, unless it is missing or blank
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

/// Fields shared by every bookmark variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseFields {
    pub url: String,
    pub title: String,
    #[serde(
        default,
        skip_serializing_if = "is_blank",
        deserialize_with = "blank_as_none"
    )]
    pub notes: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_empty"
    )]
    pub tags: Vec<String>,
    pub created_at: Timestamp,
}

impl BaseFields {
    pub fn new(url: impl Into<String>, title: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            notes: None,
            tags: Vec::new(),
            created_at,
        }
    }

    /// Empty notes are stored as absent
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = non_empty(notes.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Notes, if any were written
    pub fn notes(&self) -> Option<&str> {
        present(&self.notes)
    }
}

/// Design inspiration: a site, app or visual reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignBookmark {
    #[serde(flatten)]
    pub base: BaseFields,
    /// website / app / design
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "colors", default)]
    pub color_scheme: String,
    #[serde(default)]
    pub has_repo: bool,
    #[serde(
        default,
        skip_serializing_if = "is_blank",
        deserialize_with = "blank_as_none"
    )]
    pub repo_url: Option<String>,
}

impl DesignBookmark {
    pub fn new(
        base: BaseFields,
        kind: impl Into<String>,
        category: impl Into<String>,
        color_scheme: impl Into<String>,
    ) -> Self {
        Self {
            base,
            kind: kind.into(),
            category: category.into(),
            color_scheme: color_scheme.into(),
            has_repo: false,
            repo_url: None,
        }
    }

    /// Marks the design as having a source repository
    pub fn with_repo(mut self, repo_url: impl Into<String>) -> Self {
        self.has_repo = true;
        self.repo_url = non_empty(repo_url.into());
        self
    }
}

/// Code snippet or Q&A answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBookmark {
    #[serde(flatten)]
    pub base: BaseFields,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub solution: String,
    #[serde(
        default,
        skip_serializing_if = "is_blank",
        deserialize_with = "blank_as_none"
    )]
    pub works_in_version: Option<String>,
}

impl CodeBookmark {
    pub fn new(base: BaseFields, language: impl Into<String>, solution: impl Into<String>) -> Self {
        Self {
            base,
            language: language.into(),
            solution: solution.into(),
            works_in_version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.works_in_version = non_empty(version.into());
        self
    }
}

/// Article, blog post or documentation page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleBookmark {
    #[serde(flatten)]
    pub base: BaseFields,
    #[serde(
        default,
        skip_serializing_if = "is_blank",
        deserialize_with = "blank_as_none"
    )]
    pub author: Option<String>,
    /// Minutes; always written, even when zero
    #[serde(default)]
    pub reading_time: u32,
    #[serde(default)]
    pub category: String,
}

impl ArticleBookmark {
    pub fn new(base: BaseFields, category: impl Into<String>) -> Self {
        Self {
            base,
            author: None,
            reading_time: 0,
            category: category.into(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = non_empty(author.into());
        self
    }

    pub fn with_reading_time(mut self, minutes: u32) -> Self {
        self.reading_time = minutes;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericBookmark {
    #[serde(flatten)]
    pub base: BaseFields,
    #[serde(default)]
    pub category: String,
}

impl GenericBookmark {
    pub fn new(base: BaseFields, category: impl Into<String>) -> Self {
        Self {
            base,
            category: category.into(),
        }
    }
}

/// Variant tag. `ALL` is the canonical order used for iteration, search
/// results and export sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookmarkKind {
    Design,
    Code,
    Article,
    Generic,
}

impl BookmarkKind {
    pub const ALL: [BookmarkKind; 4] = [
        BookmarkKind::Design,
        BookmarkKind::Code,
        BookmarkKind::Article,
        BookmarkKind::Generic,
    ];

    /// Heading used for the export section of this variant
    pub fn section_title(self) -> &'static str {
        match self {
            BookmarkKind::Design => "Design Inspirations",
            BookmarkKind::Code => "Code Solutions",
            BookmarkKind::Article => "Articles",
            BookmarkKind::Generic => "Other Bookmarks",
        }
    }
}

impl fmt::Display for BookmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookmarkKind::Design => "Design Inspiration",
            BookmarkKind::Code => "Code/Stack Overflow",
            BookmarkKind::Article => "Article/Blog",
            BookmarkKind::Generic => "Generic Bookmark",
        };
        f.write_str(name)
    }
}

/// An owned bookmark of any variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bookmark {
    Design(DesignBookmark),
    Code(CodeBookmark),
    Article(ArticleBookmark),
    Generic(GenericBookmark),
}

impl Bookmark {
    pub fn kind(&self) -> BookmarkKind {
        self.borrowed().kind()
    }

    pub fn base(&self) -> &BaseFields {
        self.borrowed().base()
    }

    pub fn borrowed(&self) -> BookmarkRef<'_> {
        match self {
            Bookmark::Design(b) => BookmarkRef::Design(b),
            Bookmark::Code(b) => BookmarkRef::Code(b),
            Bookmark::Article(b) => BookmarkRef::Article(b),
            Bookmark::Generic(b) => BookmarkRef::Generic(b),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.borrowed().validate()
    }
}

impl From<DesignBookmark> for Bookmark {
    fn from(b: DesignBookmark) -> Self {
        Bookmark::Design(b)
    }
}

impl From<CodeBookmark> for Bookmark {
    fn from(b: CodeBookmark) -> Self {
        Bookmark::Code(b)
    }
}

impl From<ArticleBookmark> for Bookmark {
    fn from(b: ArticleBookmark) -> Self {
        Bookmark::Article(b)
    }
}

impl From<GenericBookmark> for Bookmark {
    fn from(b: GenericBookmark) -> Self {
        Bookmark::Generic(b)
    }
}

/// Value half of a variant-specific detail line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailValue<'a> {
    Text(&'a str),
    /// A URL rendered as a link rather than inline text
    Link(&'a str),
    Minutes(u32),
}

/// One labelled, variant-specific field, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detail<'a> {
    pub label: &'static str,
    pub value: DetailValue<'a>,
}

impl<'a> Detail<'a> {
    fn text(label: &'static str, value: &'a str) -> Self {
        Self {
            label,
            value: DetailValue::Text(value),
        }
    }
}

/// A borrowed bookmark of any variant, as yielded by iteration and search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkRef<'a> {
    Design(&'a DesignBookmark),
    Code(&'a CodeBookmark),
    Article(&'a ArticleBookmark),
    Generic(&'a GenericBookmark),
}

impl<'a> BookmarkRef<'a> {
    pub fn kind(&self) -> BookmarkKind {
        match self {
            BookmarkRef::Design(_) => BookmarkKind::Design,
            BookmarkRef::Code(_) => BookmarkKind::Code,
            BookmarkRef::Article(_) => BookmarkKind::Article,
            BookmarkRef::Generic(_) => BookmarkKind::Generic,
        }
    }

    pub fn base(&self) -> &'a BaseFields {
        match self {
            BookmarkRef::Design(b) => &b.base,
            BookmarkRef::Code(b) => &b.base,
            BookmarkRef::Article(b) => &b.base,
            BookmarkRef::Generic(b) => &b.base,
        }
    }

    /// Variant-specific fields in display order. Optional fields are left
    /// out when absent; reading time is always present.
    pub fn details(&self) -> Vec<Detail<'a>> {
        match *self {
            BookmarkRef::Design(b) => {
                let mut details = vec![
                    Detail::text("Type", &b.kind),
                    Detail::text("Category", &b.category),
                    Detail::text("Color Scheme", &b.color_scheme),
                ];
                if b.has_repo {
                    details.push(Detail {
                        label: "Repository",
                        value: DetailValue::Link(b.repo_url.as_deref().unwrap_or_default()),
                    });
                }
                details
            }
            BookmarkRef::Code(b) => {
                let mut details = vec![
                    Detail::text("Language", &b.language),
                    Detail::text("Solution", &b.solution),
                ];
                if let Some(version) = present(&b.works_in_version) {
                    details.push(Detail::text("Version", version));
                }
                details
            }
            BookmarkRef::Article(b) => {
                let mut details = Vec::with_capacity(3);
                if let Some(author) = present(&b.author) {
                    details.push(Detail::text("Author", author));
                }
                details.push(Detail {
                    label: "Reading Time",
                    value: DetailValue::Minutes(b.reading_time),
                });
                details.push(Detail::text("Category", &b.category));
                details
            }
            BookmarkRef::Generic(b) => vec![Detail::text("Category", &b.category)],
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let base = self.base();
        if base.url.trim().is_empty() {
            return Err(ValidationError::EmptyUrl);
        }
        if base.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if let BookmarkRef::Design(design) = self {
            let has_url = design
                .repo_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty());
            if design.has_repo && !has_url {
                return Err(ValidationError::MissingRepoUrl(base.title.clone()));
            }
            if !design.has_repo && design.repo_url.is_some() {
                return Err(ValidationError::UnexpectedRepoUrl(base.title.clone()));
            }
        }
        Ok(())
    }
}

/// Every bookmark, one append-only sequence per variant.
///
/// This is exactly the shape of the store file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub designs: Vec<DesignBookmark>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub code: Vec<CodeBookmark>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub articles: Vec<ArticleBookmark>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub generic: Vec<GenericBookmark>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends to the sequence matching the bookmark's variant
    pub fn push(&mut self, bookmark: Bookmark) {
        match bookmark {
            Bookmark::Design(b) => self.designs.push(b),
            Bookmark::Code(b) => self.code.push(b),
            Bookmark::Article(b) => self.articles.push(b),
            Bookmark::Generic(b) => self.generic.push(b),
        }
    }

    /// Bookmarks of one variant in insertion order
    pub fn iter_kind(&self, kind: BookmarkKind) -> Box<dyn Iterator<Item = BookmarkRef<'_>> + '_> {
        match kind {
            BookmarkKind::Design => Box::new(self.designs.iter().map(BookmarkRef::Design)),
            BookmarkKind::Code => Box::new(self.code.iter().map(BookmarkRef::Code)),
            BookmarkKind::Article => Box::new(self.articles.iter().map(BookmarkRef::Article)),
            BookmarkKind::Generic => Box::new(self.generic.iter().map(BookmarkRef::Generic)),
        }
    }

    /// All bookmarks: Design, Code, Article, Generic, then insertion order
    pub fn iter(&self) -> impl Iterator<Item = BookmarkRef<'_>> + '_ {
        BookmarkKind::ALL
            .into_iter()
            .flat_map(move |kind| self.iter_kind(kind))
    }

    pub fn count(&self, kind: BookmarkKind) -> usize {
        match kind {
            BookmarkKind::Design => self.designs.len(),
            BookmarkKind::Code => self.code.len(),
            BookmarkKind::Article => self.articles.len(),
            BookmarkKind::Generic => self.generic.len(),
        }
    }

    pub fn len(&self) -> usize {
        BookmarkKind::ALL.iter().map(|k| self.count(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
