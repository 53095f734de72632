use super::{AppContext, StashCommand};
use crate::prompt::Prompt;
use stashmark::error::Result;
use stashmark::export::export_to_dir;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportCommand;

impl StashCommand for ExportCommand {
    fn execute(&self, ctx: &mut AppContext, _prompt: &mut dyn Prompt) -> Result<()> {
        let path = export_to_dir(ctx.collection, &ctx.config.export_dir, ctx.clock)?;
        writeln!(ctx.out, "\nSuccessfully exported to {}", path.display())?;
        Ok(())
    }
}
