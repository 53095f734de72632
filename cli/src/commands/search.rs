use super::{AppContext, StashCommand};
use crate::output;
use crate::prompt::{ask, Prompt};
use stashmark::error::Result;
use stashmark::search::search;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCommand;

impl StashCommand for SearchCommand {
    fn execute(&self, ctx: &mut AppContext, prompt: &mut dyn Prompt) -> Result<()> {
        writeln!(ctx.out, "\n=== Search Bookmarks ===")?;
        ctx.out.flush()?;
        let term = ask(prompt, "\nSearch term: ")?;

        let results = search(ctx.collection, &term);
        log::debug!("Search {:?} matched {} bookmark(s)", term, results.len());

        writeln!(ctx.out, "\nSearch Results:")?;
        if results.is_empty() {
            writeln!(ctx.out, "No matches found")?;
            return Ok(());
        }
        for bookmark in results {
            write!(ctx.out, "{}", output::render(bookmark, ctx.config.color))?;
        }
        Ok(())
    }
}
