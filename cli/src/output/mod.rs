pub mod colorize;
pub mod plain;

use colorize::{Colorize, ColorizeBookmark};
use plain::PlainBookmark;
use stashmark::models::{BookmarkRef, DetailValue};

pub const SEPARATOR: &str = "---------------";

/// Terminal rendering of one bookmark
pub fn render(bookmark: BookmarkRef<'_>, color: bool) -> String {
    if color {
        ColorizeBookmark(bookmark).to_colored()
    } else {
        PlainBookmark(bookmark).to_plain()
    }
}

fn detail_text(value: DetailValue<'_>) -> String {
    match value {
        DetailValue::Text(text) | DetailValue::Link(text) => text.to_string(),
        DetailValue::Minutes(minutes) => format!("{} minutes", minutes),
    }
}
