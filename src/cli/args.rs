//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report logging calls that have a mechanical fix
//! - `fix`: Rewrite those calls (dry-run unless `--apply`)

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

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
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Fix(cmd)) => cmd.args.common.verbose,
            None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Root directories to lint (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Directory name or glob to skip, in addition to `vendor`
    /// Can be specified multiple times: --exclude testdata --exclude 'gen_*'
    #[arg(long = "exclude", value_name = "NAME")]
    pub excludes: Vec<String>,

    /// Method name prefix to target (replaces the default set)
    /// Can be specified multiple times: --prefix Info --prefix Warn
    #[arg(long = "prefix", value_name = "PREFIX")]
    pub prefixes: Vec<String>,

    /// Call to never rewrite, as `recv.Method` or a bare `Method`, added to
    /// the built-in error constructors (fmt.Errorf, errors.Errorf,
    /// xerrors.Errorf, String). Receivers are matched as written, so an
    /// aliased import such as `pkgerrors.Errorf` must be listed here
    #[arg(long = "exclude-call", value_name = "NAME")]
    pub exclude_calls: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct FixArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub args: FixArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report logging calls whose format string can be simplified
    Check(CheckCommand),
    /// Rewrite logging calls in place (dry-run unless --apply)
    Fix(FixCommand),
}
