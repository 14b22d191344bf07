use clap::{Parser, Subcommand, ValueEnum};
use snip::config::StoreBackend;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum BackendArg {
    Json,
    Sqlite,
}

impl From<BackendArg> for StoreBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Json => StoreBackend::Json,
            BackendArg::Sqlite => StoreBackend::Sqlite,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "snip", version)]
#[command(about = "Personal code-snippet manager for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage backend
    #[arg(long, global = true, value_enum)]
    pub backend: Option<BackendArg>,

    /// Path to the snippet store (JSON file or SQLite database)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new snippet
    Add {
        /// Snippet name
        #[arg(short, long)]
        name: String,

        /// Programming language
        #[arg(short, long)]
        language: Option<String>,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,

        /// Snippet content (opens the editor if not provided)
        #[arg(short, long)]
        content: Option<String>,
    },

    /// List all snippets
    #[command(alias = "ls")]
    List,

    /// Search snippets by keyword
    Search {
        /// Search query
        #[arg(short, long)]
        query: String,
    },
}
