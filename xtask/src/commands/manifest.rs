//! `cargo xtask manifest`: JSON export of the design-system manifest.

use crate::cli::flag_value;
use crate::runtime::config::DesignSystemConfig;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

/// `cargo xtask manifest ...`
pub struct ManifestCommand;

/// Parsed `cargo xtask manifest` flags.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ManifestOptions {
    /// Overrides `[manifest] output`.
    pub output: Option<String>,
    /// Print instead of writing.
    pub stdout: bool,
    /// Force compact JSON.
    pub compact: bool,
    /// Show usage and exit.
    pub help: bool,
}

impl XtaskCommand for ManifestCommand {
    type Options = ManifestOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        let mut options = ManifestOptions::default();
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--output" | "-o" => options.output = Some(flag_value(arg, &mut args)?.to_string()),
                "--stdout" => options.stdout = true,
                "--compact" => options.compact = true,
                "help" | "--help" | "-h" => options.help = true,
                other => {
                    return Err(XtaskError::validation(format!(
                        "unknown manifest argument: {other}"
                    ))
                    .with_operation("manifest"))
                }
            }
        }
        if options.stdout && options.output.is_some() {
            return Err(XtaskError::validation("--stdout and --output are exclusive")
                .with_operation("manifest"));
        }
        Ok(options)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        if options.help {
            print_manifest_usage();
            return Ok(());
        }
        let config = ctx.design_system_config()?;
        let body = render_manifest(&config, options.compact)?;
        if options.stdout {
            println!("{body}");
            return Ok(());
        }

        let output = options
            .output
            .unwrap_or_else(|| config.manifest.output.clone());
        ctx.stage(&format!("Export design-system manifest to {output}"), || {
            crate::commands::check::ensure_consistent()?;
            let path = ctx.write(&output, &body)?;
            eprintln!("    wrote {}", path.display());
            Ok(())
        })
    }
}

/// Serialized manifest as committed to the repository, with a trailing newline.
pub(crate) fn render_manifest(config: &DesignSystemConfig, compact: bool) -> XtaskResult<String> {
    let manifest = monora_ui::manifest();
    let mut body = if config.manifest.pretty && !compact {
        manifest.to_json_pretty()?
    } else {
        manifest.to_json()?
    };
    body.push('\n');
    Ok(body)
}

fn print_manifest_usage() {
    eprintln!(
        "Usage: cargo xtask manifest [--output <path>] [--stdout] [--compact]\n\
         \n\
         Writes the manifest to `[manifest] output` from tools/design-system.toml\n\
         (default: docs/design-system.json) after checking resolver parity.\n"
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
    fn parses_output_override() {
        assert_eq!(
            ManifestCommand::parse(&args(&["--output", "target/m.json", "--compact"])),
            Ok(ManifestOptions {
                output: Some("target/m.json".into()),
                compact: true,
                ..ManifestOptions::default()
            })
        );
    }

    #[test]
    fn rejects_missing_value_and_conflicting_flags() {
        assert!(ManifestCommand::parse(&args(&["--output"])).is_err());
        assert!(ManifestCommand::parse(&args(&["--stdout", "-o", "x.json"])).is_err());
        assert!(ManifestCommand::parse(&args(&["--yaml"])).is_err());
    }

    #[test]
    fn pretty_setting_controls_layout() {
        let mut config = DesignSystemConfig::default();
        let pretty = render_manifest(&config, false).expect("pretty manifest");
        assert!(pretty.starts_with("{\n"));
        assert!(pretty.ends_with("}\n"));

        config.manifest.pretty = false;
        let compact = render_manifest(&config, false).expect("compact manifest");
        assert_eq!(compact.lines().count(), 1);
    }
}
