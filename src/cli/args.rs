//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: write a default `.pagetextrc.json`
//! - `locales`: list supported locales and their catalogs
//! - `get`: resolve flat keys inside a namespace
//! - `page`: resolve a registered page's structured content
//! - `check`: verify page schemas against every locale catalog
//! - `serve`: start the MCP server

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Locales(cmd)) => cmd.common.verbose,
            Some(Command::Get(cmd)) => cmd.common.verbose,
            Some(Command::Page(cmd)) => cmd.common.verbose,
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by commands that read catalogs.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Default locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Catalog subtree the keys are relative to (empty string for the root)
    pub namespace: String,

    /// Keys to resolve, relative to the namespace
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Requested locale (default: the configured default locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PageCommand {
    /// Registered page id, e.g. "home" or "about"
    pub page_id: String,

    /// Requested locale (default: the configured default locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Locales to check (default: all supported locales)
    /// Can be specified multiple times: --locale en --locale de
    #[arg(short, long = "locale")]
    pub locales: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .pagetextrc.json configuration file
    Init,
    /// List supported locales with their catalog files and key counts
    Locales(LocalesCommand),
    /// Resolve keys inside a namespace for a locale
    Get(GetCommand),
    /// Print a page's localized structured content as JSON
    Page(PageCommand),
    /// Check every registered page against every locale catalog
    Check(CheckCommand),
    /// Start MCP server for AI coding agents
    Serve,
}
