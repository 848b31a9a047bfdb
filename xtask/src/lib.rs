//! Workspace maintenance commands (`cargo xtask`).
//!
//! A small CLI layer over shared runtime services. Command modules own workflow policy while
//! [`runtime`] owns configuration loading, workspace file access, and error reporting.

pub mod cli;
pub mod commands;
pub mod runtime;

use crate::cli::TopLevelCommand;
use crate::commands::check::CheckCommand;
use crate::commands::manifest::ManifestCommand;
use crate::commands::tokens::TokensCommand;
use crate::runtime::context::CommandContext;
use crate::runtime::error::XtaskResult;

/// Shared command contract for top-level xtask command families.
///
/// [`XtaskCommand::parse`] is a pure translation from raw CLI arguments into typed options;
/// side effects belong in [`XtaskCommand::run`].
pub trait XtaskCommand {
    /// Typed options produced by CLI parsing for the command family.
    type Options;

    /// Parse command-line arguments into typed options.
    ///
    /// Invalid argument shapes return
    /// [`XtaskError::validation`](crate::runtime::error::XtaskError::validation).
    fn parse(args: &[String]) -> XtaskResult<Self::Options>;

    /// Execute the command family using the shared runtime context.
    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()>;
}

/// Executes the `xtask` binary using the current process arguments.
pub fn execute_from_env() -> XtaskResult<()> {
    let parsed = cli::parse(std::env::args().skip(1).collect())?;
    let ctx = CommandContext::new()?;

    match parsed {
        TopLevelCommand::Manifest(args) => {
            ManifestCommand::run(&ctx, ManifestCommand::parse(&args)?)
        }
        TopLevelCommand::Check(args) => CheckCommand::run(&ctx, CheckCommand::parse(&args)?),
        TopLevelCommand::Tokens(args) => TokensCommand::run(&ctx, TokensCommand::parse(&args)?),
        TopLevelCommand::Help => {
            cli::print_usage();
            Ok(())
        }
    }
}

/// Converts an xtask result into a stable process exit code.
///
/// All command failures map to exit code `1` after printing the formatted error to stderr.
pub fn exit_code(result: XtaskResult<()>) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::ExitCode::from(1)
        }
    }
}
