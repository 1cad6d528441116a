//! Command-line interface layer.
//!
//! - `args`: clap definitions
//! - `commands`: one handler per subcommand
//! - `report`: colored terminal output
//! - `exit_status`: exit code conventions

mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{
    Arguments, CheckCommand, Command, CommonArgs, GetCommand, LocalesCommand, PageCommand,
};
pub use exit_status::ExitStatus;
pub use run::run_cli;
