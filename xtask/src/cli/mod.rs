//! Top-level CLI parsing and help output.

use crate::runtime::error::{XtaskError, XtaskResult};

/// Top-level `xtask` command families.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelCommand {
    Manifest(Vec<String>),
    Check(Vec<String>),
    Tokens(Vec<String>),
    Help,
}

/// Parse raw command-line arguments into a top-level command selection.
pub fn parse(args: Vec<String>) -> XtaskResult<TopLevelCommand> {
    let Some(cmd) = args.first().cloned() else {
        return Ok(TopLevelCommand::Help);
    };

    let rest = args[1..].to_vec();
    match cmd.as_str() {
        "manifest" => Ok(TopLevelCommand::Manifest(rest)),
        "check" => Ok(TopLevelCommand::Check(rest)),
        "tokens" => Ok(TopLevelCommand::Tokens(rest)),
        "help" | "--help" | "-h" => Ok(TopLevelCommand::Help),
        other => Err(XtaskError::validation(format!(
            "unknown xtask command: {other}"
        ))
        .with_hint("run `cargo xtask help`")),
    }
}

/// Takes the value following a `--flag`.
pub(crate) fn flag_value<'a>(
    flag: &str,
    args: &mut impl Iterator<Item = &'a String>,
) -> XtaskResult<&'a str> {
    args.next()
        .map(String::as_str)
        .ok_or_else(|| XtaskError::validation(format!("{flag} expects a value")))
}

/// Print the canonical top-level usage text.
pub fn print_usage() {
    eprintln!(
        "Usage: cargo xtask <command> [args]\n\
         \n\
         Commands:\n\
           manifest [--output <path>] [--stdout] [--compact]\n\
                              Export the design-system manifest as JSON\n\
           check               Verify resolver/manifest parity and the committed manifest\n\
           tokens [--theme light|dark] [--group <name>]\n\
                              Print design-token values for one theme\n\
           help                Show this message\n\
         \n\
         Configuration: tools/design-system.toml\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn empty_args_show_help() {
        assert_eq!(parse(Vec::new()), Ok(TopLevelCommand::Help));
    }

    #[test]
    fn command_keeps_remaining_args() {
        assert_eq!(
            parse(args(&["manifest", "--stdout"])),
            Ok(TopLevelCommand::Manifest(args(&["--stdout"])))
        );
        assert_eq!(parse(args(&["check"])), Ok(TopLevelCommand::Check(Vec::new())));
    }

    #[test]
    fn unknown_command_is_a_validation_error() {
        let err = parse(args(&["deploy"])).expect_err("unknown command");
        assert_eq!(
            err.category,
            crate::runtime::error::XtaskErrorCategory::Validation
        );
        assert!(err.to_string().contains("deploy"));
    }
}
