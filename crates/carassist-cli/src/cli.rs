use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "carassist")]
#[command(about = "Inspect and edit head unit preferences")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional path to the preference database file
    #[arg(long, global = true, value_name = "PATH")]
    pub db_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every preference
    #[command(alias = "ls")]
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one preference value
    Get {
        /// Persisted key, e.g. mCarNumber
        key: String,
    },
    /// Change one preference value
    Set {
        /// Persisted key, e.g. mCarNumber
        key: String,
        /// New value (bool: true/false/1/0/yes/no/on/off)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Restore every preference to its default
    Reset,
    /// List persisted keys with their kind and default
    Keys,
    /// Export preferences as a JSON object
    Export {
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Import preferences from a JSON object
    Import {
        /// JSON file written by `export`
        path: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
