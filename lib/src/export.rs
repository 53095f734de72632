use crate::clock::Clock;
use crate::error::Result;
use crate::models::{BaseFields, BookmarkKind, BookmarkRef, Collection, DetailValue};
use crate::tags::join_tags;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Format of the `Added` line in exports and the terminal view
pub const ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders the whole collection as one Markdown document, one section per
/// non-empty variant in canonical order
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn render(&self, collection: &Collection) -> String {
        let mut md = String::from("# 📚 Bookmark Collection\n\n");

        for kind in BookmarkKind::ALL {
            if collection.count(kind) == 0 {
                continue;
            }
            if kind != BookmarkKind::Design {
                md.push('\n');
            }
            md.push_str(&format!(
                "## {} {}\n\n",
                section_icon(kind),
                kind.section_title()
            ));
            for bookmark in collection.iter_kind(kind) {
                write_bookmark(&mut md, bookmark);
            }
        }

        md
    }
}

fn section_icon(kind: BookmarkKind) -> &'static str {
    match kind {
        BookmarkKind::Design => "🎨",
        BookmarkKind::Code => "💻",
        BookmarkKind::Article => "📚",
        BookmarkKind::Generic => "🔖",
    }
}

fn write_bookmark(md: &mut String, bookmark: BookmarkRef<'_>) {
    let base = bookmark.base();
    md.push_str(&format!("### [{}]({})\n", base.title, base.url));

    for detail in bookmark.details() {
        let value = match detail.value {
            DetailValue::Text(text) => text.to_string(),
            DetailValue::Link(url) => format!("[Link]({})", url),
            DetailValue::Minutes(minutes) => format!("{} minutes", minutes),
        };
        md.push_str(&format!("- **{}:** {}\n", detail.label, value));
    }

    write_common(md, base);
}

fn write_common(md: &mut String, base: &BaseFields) {
    if let Some(notes) = base.notes() {
        md.push_str(&format!("- **Notes:** {}\n", notes));
    }
    if !base.tags.is_empty() {
        md.push_str(&format!("- **Tags:** {}\n", join_tags(&base.tags)));
    }
    md.push_str(&format!(
        "- **Added:** {}\n\n",
        base.created_at.format(ADDED_FORMAT)
    ));
}

/// `bookmarks_<YYYY-MM-DD>.md`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("bookmarks_{}.md", date.format("%Y-%m-%d"))
}

/// Write the Markdown export into `dir`, named after today's date according
/// to `clock`. A second export on the same day overwrites the first.
pub fn export_to_dir(collection: &Collection, dir: &Path, clock: &dyn Clock) -> Result<PathBuf> {
    let path = dir.join(export_file_name(clock.now().date_naive()));
    let document = MarkdownExporter.render(collection);

    fs::create_dir_all(dir)?;
    fs::write(&path, document)?;
    log::debug!("Exported {} bookmark(s) to {:?}", collection.len(), path);
    Ok(path)
}
