use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, check::check, fix::fix},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with findings, recoverable errors and counts
/// - `Err` if the run cannot start (missing root, invalid exclusion pattern)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Fix(cmd)) => fix(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
