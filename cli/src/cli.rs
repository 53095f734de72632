use clap::Parser;
use stashmark::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Bookmark store file (default: ./bookmarks.json or $STASHMARK_FILE)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Optional custom configuration file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory to write Markdown exports into
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Disable color output
    #[arg(long)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Command-line flags take precedence over the config file
    pub fn apply(&self, config: &mut Config) {
        if let Some(file) = &self.file {
            config.store_path = file.clone();
        }
        if let Some(dir) = &self.export_dir {
            config.export_dir = dir.clone();
        }
        if self.nc {
            config.color = false;
        }
    }
}
