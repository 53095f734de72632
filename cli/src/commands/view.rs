use super::{kind_for_choice, AppContext, StashCommand};
use crate::output;
use crate::prompt::{ask, Prompt};
use stashmark::error::Result;
use stashmark::models::BookmarkKind;
use stashmark::operations::{select, ViewFilter};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCommand;

fn filter_for_choice(choice: &str) -> Option<ViewFilter> {
    if choice.trim() == "5" {
        return Some(ViewFilter::All);
    }
    kind_for_choice(choice).map(ViewFilter::Kind)
}

impl StashCommand for ViewCommand {
    fn execute(&self, ctx: &mut AppContext, prompt: &mut dyn Prompt) -> Result<()> {
        writeln!(ctx.out, "\n=== View Bookmarks ===\n")?;
        for (i, kind) in BookmarkKind::ALL.iter().enumerate() {
            writeln!(ctx.out, "{}. {}", i + 1, kind.section_title())?;
        }
        writeln!(ctx.out, "5. All")?;
        ctx.out.flush()?;

        let choice = ask(prompt, "\nChoice: ")?;
        let Some(filter) = filter_for_choice(&choice) else {
            writeln!(ctx.out, "Invalid choice")?;
            return Ok(());
        };

        let bookmarks = select(ctx.collection, filter);
        if bookmarks.is_empty() {
            writeln!(ctx.out, "No bookmarks to display.")?;
            return Ok(());
        }
        for bookmark in bookmarks {
            write!(ctx.out, "{}", output::render(bookmark, ctx.config.color))?;
        }
        Ok(())
    }
}
