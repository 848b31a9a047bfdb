//! `cargo xtask tokens`: print token values for one theme.

use design_tokens::{registry, ThemeMode, TokenEntry, TokenGroup};

use crate::cli::flag_value;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

/// `cargo xtask tokens ...`
pub struct TokensCommand;

/// Parsed `cargo xtask tokens` flags.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokensOptions {
    /// Theme whose values are printed.
    pub theme: ThemeMode,
    /// Restrict output to one family.
    pub group: Option<TokenGroup>,
}

impl XtaskCommand for TokensCommand {
    type Options = TokensOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        let mut options = TokensOptions::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--theme" => {
                    let raw = flag_value(arg, &mut args)?;
                    options.theme = raw.parse().map_err(|err| {
                        XtaskError::validation(format!("{err}")).with_operation("tokens")
                    })?;
                }
                "--group" => {
                    let raw = flag_value(arg, &mut args)?;
                    options.group = Some(TokenGroup::from_key(raw).ok_or_else(|| {
                        let known: Vec<_> = TokenGroup::ALL.iter().map(|g| g.key()).collect();
                        XtaskError::validation(format!("unknown token group: {raw}"))
                            .with_hint(format!("expected one of: {}", known.join(", ")))
                    })?);
                }
                other => {
                    return Err(XtaskError::validation(format!(
                        "unknown tokens argument: {other}"
                    ))
                    .with_operation("tokens"))
                }
            }
        }
        Ok(options)
    }

    fn run(_ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        for line in token_lines(&options) {
            println!("{line}");
        }
        Ok(())
    }
}

fn token_lines(options: &TokensOptions) -> Vec<String> {
    let entries: Vec<&TokenEntry> = match options.group {
        Some(group) => registry().group(group).collect(),
        None => registry().entries().iter().collect(),
    };
    let width = entries
        .iter()
        .map(|entry| entry.path.len())
        .max()
        .unwrap_or_default();
    entries
        .into_iter()
        .map(|entry| {
            format!(
                "{:<width$}  {}",
                entry.path,
                entry.value.resolve(&options.theme)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn parses_theme_and_group() {
        assert_eq!(
            TokensCommand::parse(&args(&["--theme", "dark", "--group", "radius"])),
            Ok(TokensOptions {
                theme: ThemeMode::Dark,
                group: Some(TokenGroup::Radius),
            })
        );
        assert!(TokensCommand::parse(&args(&["--theme", "sepia"])).is_err());
        assert!(TokensCommand::parse(&args(&["--group", "z-index"])).is_err());
    }

    #[test]
    fn lines_use_the_selected_theme() {
        let lines = token_lines(&TokensOptions {
            theme: ThemeMode::Dark,
            group: Some(TokenGroup::Color),
        });
        assert_eq!(lines[0], "color.primary      hsl(217 91% 50%)");
        assert!(lines.iter().all(|line| line.starts_with("color.")));
    }
}
