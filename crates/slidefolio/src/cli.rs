use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::catalog::SlideId;

#[derive(Parser)]
#[command(name = "slidefolio")]
#[command(author, version, about)]
#[command(long_about = "A gallery and brochure viewer.\n\n\
    Sections of text, image and video slides are shown as cards. Click a card\n\
    to open it full-window and page through the catalog.\n\n\
    Examples:\n  \
    slidefolio                            Launch the built-in brochure (fullscreen)\n  \
    slidefolio --catalog shop.yaml        Launch a catalog file\n  \
    slidefolio --catalog shop.yaml --watch  Reload the catalog when it changes\n  \
    slidefolio catalog shop.yaml          Validate and list a catalog")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// YAML catalog to show instead of the built-in brochure
    #[arg(long, global = false)]
    pub catalog: Option<PathBuf>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Open the slide with this id at start
    #[arg(long, global = false)]
    pub slide: Option<SlideId>,

    /// Reload the catalog file when it changes on disk
    #[arg(long, global = false, requires = "catalog")]
    pub watch: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a catalog and print its sections and slides
    Catalog {
        /// Catalog file (defaults to the built-in brochure)
        file: Option<PathBuf>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. viewer.theme, viewer.settle_ms, viewer.media_base)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Options for launching the viewer window.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub catalog: Option<PathBuf>,
    pub windowed: bool,
    pub slide: Option<SlideId>,
    pub watch: bool,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Catalog { file, json }) => {
                crate::commands::catalog::run(file.as_deref(), json)
            }
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => {
                if let Some(file) = &self.catalog {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                }
                crate::app::run(LaunchOptions {
                    catalog: self.catalog,
                    windowed: self.windowed,
                    slide: self.slide,
                    watch: self.watch,
                })
            }
        }
    }
}
