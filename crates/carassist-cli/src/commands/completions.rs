use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

const BIN_NAME: &str = "carassist";

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Self::Bash,
            CompletionShell::Zsh => Self::Zsh,
            CompletionShell::Fish => Self::Fish,
        }
    }
}

pub fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    let mut command = Cli::command();

    if let Some(path) = output_path {
        let mut file = File::create(path)?;
        generate(Shell::from(shell), &mut command, BIN_NAME, &mut file);
        file.flush()?;
        println!("{}", path.display());
    } else {
        generate(Shell::from(shell), &mut command, BIN_NAME, &mut io::stdout());
    }

    Ok(())
}
