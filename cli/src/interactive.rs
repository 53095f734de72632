use crate::commands::{AppContext, MenuCommand};
use crate::prompt::Prompt;
use stashmark::error::{Result, StashError};
use stashmark::models::Collection;
use stashmark::store::JsonStore;
use std::io::Write;

/// Load the session's collection, falling back to an empty one when the
/// store file cannot be read or parsed. A corrupt file is copied aside first
/// when the copy can be made.
pub fn open_collection(store: &JsonStore, warn: &mut dyn Write) -> Result<Collection> {
    match store.load() {
        Ok(collection) => Ok(collection),
        Err(e) if e.is_recoverable_load() => {
            log::warn!("{}", e);
            writeln!(warn, "Warning: {}; starting with an empty collection", e)?;
            if matches!(e, StashError::CorruptStore { .. }) {
                match store.backup_corrupt() {
                    Ok(Some(backup)) => writeln!(
                        warn,
                        "Warning: the unreadable file was copied to {}",
                        backup.display()
                    )?,
                    Ok(None) => {}
                    Err(backup_err) => {
                        log::warn!("Could not back up corrupt store: {}", backup_err);
                        writeln!(
                            warn,
                            "Warning: could not copy the unreadable file aside: {}",
                            backup_err
                        )?;
                    }
                }
            }
            Ok(Collection::new())
        }
        Err(e) => Err(e),
    }
}

fn print_menu(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n📚 Bookmark Manager v{}\n", env!("CARGO_PKG_VERSION"))?;
    for (key, label) in MenuCommand::ENTRIES {
        writeln!(out, "{}. {}", key, label)?;
    }
    out.flush()?;
    Ok(())
}

/// Main menu loop. Returns when the user picks Exit or input ends; command
/// failures are reported and the loop continues.
pub fn run(ctx: &mut AppContext, prompt: &mut dyn Prompt) -> Result<()> {
    loop {
        print_menu(ctx.out)?;

        let Some(choice) = prompt.read_line("\nChoose an option: ")? else {
            writeln!(ctx.out, "\nGoodbye!")?;
            break;
        };

        let Some(command) = MenuCommand::from_choice(&choice) else {
            writeln!(ctx.out, "\nInvalid choice, please try again")?;
            continue;
        };

        if command == MenuCommand::Exit {
            writeln!(ctx.out, "\nGoodbye!")?;
            break;
        }

        match command.execute(ctx, prompt) {
            Ok(()) => {}
            Err(StashError::InputClosed) => {
                writeln!(ctx.out, "\nGoodbye!")?;
                break;
            }
            Err(e) => {
                log::error!("{:?} failed: {}", command, e);
                writeln!(ctx.out, "Error: {}", e)?;
            }
        }
    }
    Ok(())
}
