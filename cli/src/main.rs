mod cli;
mod commands;
mod interactive;
mod output;
mod prompt;

use clap::Parser;
use commands::AppContext;
use stashmark::clock::SystemClock;
use stashmark::{config, error::Result, JsonStore};
use std::io;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logger; RUST_LOG still wins over --debug
    let default_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Load configuration
    let mut cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };
    args.apply(&mut cfg);
    log::debug!("Using store {:?}", cfg.store_path);

    let store = JsonStore::new(&cfg.store_path);
    let mut collection = interactive::open_collection(&store, &mut io::stderr())?;

    let mut prompt = prompt::LinePrompt::new(cfg.color)?;
    let mut stdout = io::stdout();
    let mut ctx = AppContext {
        store: &store,
        config: &cfg,
        collection: &mut collection,
        clock: &SystemClock,
        out: &mut stdout,
    };

    interactive::run(&mut ctx, &mut prompt)
}
