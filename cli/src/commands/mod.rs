use crate::prompt::Prompt;
use stashmark::clock::Clock;
use stashmark::config::Config;
use stashmark::error::Result;
use stashmark::models::{BookmarkKind, Collection};
use stashmark::store::JsonStore;
use std::io::Write;

/// Everything a menu command may touch. The session's collection is owned by
/// the caller and lent here mutably.
pub struct AppContext<'a> {
    pub store: &'a JsonStore,
    pub config: &'a Config,
    pub collection: &'a mut Collection,
    pub clock: &'a dyn Clock,
    pub out: &'a mut dyn Write,
}

pub mod add;
pub mod export;
pub mod search;
pub mod view;

pub trait StashCommand {
    fn execute(&self, ctx: &mut AppContext, prompt: &mut dyn Prompt) -> Result<()>;
}

/// Main menu commands, dispatched by variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add(add::AddCommand),
    View(view::ViewCommand),
    Search(search::SearchCommand),
    Export(export::ExportCommand),
    Exit,
}

impl MenuCommand {
    /// Main menu entries, in display order
    pub const ENTRIES: [(&'static str, &'static str); 5] = [
        ("1", "Add New Bookmark"),
        ("2", "View Bookmarks"),
        ("3", "Search"),
        ("4", "Export to Markdown"),
        ("5", "Exit"),
    ];

    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Add(add::AddCommand)),
            "2" => Some(Self::View(view::ViewCommand)),
            "3" => Some(Self::Search(search::SearchCommand)),
            "4" => Some(Self::Export(export::ExportCommand)),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn execute(&self, ctx: &mut AppContext, prompt: &mut dyn Prompt) -> Result<()> {
        match self {
            Self::Add(cmd) => cmd.execute(ctx, prompt),
            Self::View(cmd) => cmd.execute(ctx, prompt),
            Self::Search(cmd) => cmd.execute(ctx, prompt),
            Self::Export(cmd) => cmd.execute(ctx, prompt),
            Self::Exit => Ok(()),
        }
    }
}

/// Variant picked by a "1".."4" answer, in canonical order
pub fn kind_for_choice(choice: &str) -> Option<BookmarkKind> {
    let index: usize = choice.trim().parse().ok()?;
    BookmarkKind::ALL.get(index.checked_sub(1)?).copied()
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(MenuCommand::Add(add::AddCommand)))]
    #[case(" 2 ", Some(MenuCommand::View(view::ViewCommand)))]
    #[case("3", Some(MenuCommand::Search(search::SearchCommand)))]
    #[case("4", Some(MenuCommand::Export(export::ExportCommand)))]
    #[case("5", Some(MenuCommand::Exit))]
    #[case("6", None)]
    #[case("", None)]
    #[case("add", None)]
    fn test_from_choice(#[case] choice: &str, #[case] expected: Option<MenuCommand>) {
        assert_eq!(MenuCommand::from_choice(choice), expected);
    }

    #[rstest]
    #[case("1", Some(BookmarkKind::Design))]
    #[case("2", Some(BookmarkKind::Code))]
    #[case("3", Some(BookmarkKind::Article))]
    #[case("4", Some(BookmarkKind::Generic))]
    #[case("0", None)]
    #[case("5", None)]
    #[case("x", None)]
    fn test_kind_for_choice(#[case] choice: &str, #[case] expected: Option<BookmarkKind>) {
        assert_eq!(kind_for_choice(choice), expected);
    }
}
