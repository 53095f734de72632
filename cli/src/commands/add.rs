use super::{kind_for_choice, AppContext, StashCommand};
use crate::prompt::{ask, Prompt};
use stashmark::error::{Result, StashError};
use stashmark::input::{parse_reading_time, parse_yes};
use stashmark::models::{
    ArticleBookmark, BaseFields, Bookmark, BookmarkKind, CodeBookmark, DesignBookmark,
    GenericBookmark,
};
use stashmark::operations;
use stashmark::tags::parse_tags;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddCommand;

impl StashCommand for AddCommand {
    fn execute(&self, ctx: &mut AppContext, prompt: &mut dyn Prompt) -> Result<()> {
        writeln!(ctx.out, "\n=== Add New Bookmark ===\n")?;
        for (i, kind) in BookmarkKind::ALL.iter().enumerate() {
            writeln!(ctx.out, "{}. {}", i + 1, kind)?;
        }
        ctx.out.flush()?;

        let choice = ask(prompt, "\nChoice: ")?;
        let Some(kind) = kind_for_choice(&choice) else {
            writeln!(ctx.out, "Invalid bookmark type '{}', nothing added", choice)?;
            return Ok(());
        };

        writeln!(ctx.out, "\n--- Basic Information ---")?;
        ctx.out.flush()?;
        let url = ask(prompt, "URL: ")?;
        let title = ask(prompt, "Title: ")?;
        let notes = ask(prompt, "Notes (optional): ")?;
        let tags = ask(prompt, "Tags (comma-separated): ")?;

        let base = BaseFields::new(url, title, ctx.clock.now())
            .with_notes(notes)
            .with_tags(parse_tags(&tags));

        let bookmark = read_details(ctx, prompt, kind, base)?;

        match operations::add_bookmark(ctx.store, ctx.collection, bookmark) {
            Ok(()) => {
                writeln!(ctx.out, "\nBookmark saved successfully!")?;
                Ok(())
            }
            Err(e @ StashError::Save { .. }) => {
                log::warn!("{}", e);
                writeln!(
                    ctx.out,
                    "\nWarning: bookmark kept for this session but not written to disk: {}",
                    e
                )?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// Variant-specific prompts
fn read_details(
    ctx: &mut AppContext,
    prompt: &mut dyn Prompt,
    kind: BookmarkKind,
    base: BaseFields,
) -> Result<Bookmark> {
    let bookmark = match kind {
        BookmarkKind::Design => {
            writeln!(ctx.out, "\n--- Design Details ---")?;
            ctx.out.flush()?;
            let design_type = ask(prompt, "Type (website/app/design): ")?;
            let category = ask(prompt, "Category (saas/dashboard/landing): ")?;
            let colors = ask(prompt, "Color scheme (light/dark): ")?;
            let design = DesignBookmark::new(base, design_type, category, colors);
            if parse_yes(&ask(prompt, "Has repository? (y/n): ")?) {
                design.with_repo(ask(prompt, "Repository URL: ")?).into()
            } else {
                design.into()
            }
        }
        BookmarkKind::Code => {
            writeln!(ctx.out, "\n--- Code Details ---")?;
            ctx.out.flush()?;
            let language = ask(prompt, "Programming Language: ")?;
            let solution = ask(prompt, "Solution summary: ")?;
            let version = ask(prompt, "Works in version: ")?;
            CodeBookmark::new(base, language, solution)
                .with_version(version)
                .into()
        }
        BookmarkKind::Article => {
            writeln!(ctx.out, "\n--- Article Details ---")?;
            ctx.out.flush()?;
            let author = ask(prompt, "Author: ")?;
            let reading_time = match parse_reading_time(&ask(prompt, "Reading time (minutes): ")?) {
                Ok(minutes) => minutes,
                Err(e) => {
                    log::warn!("{}", e);
                    writeln!(ctx.out, "Warning: {}; reading time set to 0", e)?;
                    0
                }
            };
            let category = ask(prompt, "Category (tutorial/blog/documentation): ")?;
            ArticleBookmark::new(base, category)
                .with_author(author)
                .with_reading_time(reading_time)
                .into()
        }
        BookmarkKind::Generic => {
            writeln!(ctx.out, "\n--- Category Details ---")?;
            ctx.out.flush()?;
            let category = ask(prompt, "Category: ")?;
            GenericBookmark::new(base, category).into()
        }
    };
    Ok(bookmark)
}
