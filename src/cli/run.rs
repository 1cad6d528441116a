use std::process::ExitCode;

use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{check::check, get::get, init::init, locales::locales, page::page},
    exit_status::ExitStatus,
};

/// Main entry point for the pagetext CLI.
///
/// Dispatches to the command handler and maps its outcome to a process exit
/// code. `serve` is handled by the binary before this is called.
pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = run(args)?;
    Ok(status.into())
}

fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Locales(cmd)) => locales(cmd),
        Some(Command::Get(cmd)) => get(cmd),
        Some(Command::Page(cmd)) => page(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Serve) => {
            bail!("Serve command should be handled before run_cli()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
