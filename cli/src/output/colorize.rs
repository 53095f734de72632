use super::{detail_text, SEPARATOR};
use owo_colors::{AnsiColors, OwoColorize};
use stashmark::export::ADDED_FORMAT;
use stashmark::models::{BookmarkKind, BookmarkRef};
use stashmark::tags::join_tags;

pub trait Colorize {
    fn to_colored(&self) -> String;
}

pub struct ColorizeBookmark<'a>(pub BookmarkRef<'a>);

fn title_color(kind: BookmarkKind) -> AnsiColors {
    match kind {
        BookmarkKind::Design => AnsiColors::Blue,
        BookmarkKind::Code => AnsiColors::Magenta,
        BookmarkKind::Article => AnsiColors::Cyan,
        BookmarkKind::Generic => AnsiColors::Green,
    }
}

fn line(label: &str, value: &str) -> String {
    format!("{} {}\n", format!("{}:", label).yellow(), value)
}

impl<'a> Colorize for ColorizeBookmark<'a> {
    fn to_colored(&self) -> String {
        let base = self.0.base();
        let mut s = format!(
            "\n{}\n",
            base.title.color(title_color(self.0.kind())).bold()
        );
        s.push_str(&line("URL", &base.url));

        for detail in self.0.details() {
            s.push_str(&line(detail.label, &detail_text(detail.value)));
        }

        // Only show notes and tags when present
        if let Some(notes) = base.notes() {
            s.push_str(&line("Notes", notes));
        }
        if !base.tags.is_empty() {
            s.push_str(&format!(
                "{} {}\n",
                "Tags:".yellow(),
                join_tags(&base.tags).blue()
            ));
        }
        s.push_str(&line(
            "Added",
            &base.created_at.format(ADDED_FORMAT).to_string(),
        ));
        s.push_str(&format!("{}\n", SEPARATOR.yellow()));
        s
    }
}
