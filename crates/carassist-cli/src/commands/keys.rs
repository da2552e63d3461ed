use crate::commands::common::format_key_lines;
use crate::error::CliError;

pub fn run_keys() -> Result<(), CliError> {
    for line in format_key_lines()? {
        println!("{line}");
    }
    Ok(())
}
