//! `cargo xtask check`: resolver/manifest parity gate.

use crate::commands::manifest::render_manifest;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

/// `cargo xtask check`
pub struct CheckCommand;

impl XtaskCommand for CheckCommand {
    type Options = ();

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        match args.first().map(String::as_str) {
            None => Ok(()),
            Some(other) => Err(XtaskError::validation(format!(
                "check takes no arguments, got {other}"
            ))
            .with_operation("check")),
        }
    }

    fn run(ctx: &CommandContext, _options: Self::Options) -> XtaskResult<()> {
        ctx.stage("Design system: resolver/manifest parity", ensure_consistent)?;
        ctx.stage("Design system: committed manifest is current", || {
            committed_manifest_is_current(ctx)
        })
    }
}

/// Fails with a consistency error listing every divergence.
pub(crate) fn ensure_consistent() -> XtaskResult<()> {
    match monora_ui::verify_manifest() {
        Ok(()) => Ok(()),
        Err(issues) => {
            for issue in &issues {
                eprintln!("    - {issue}");
            }
            Err(XtaskError::consistency(format!(
                "{} consistency issue(s) between resolver tables and manifest",
                issues.len()
            ))
            .with_operation("verify_manifest"))
        }
    }
}

fn committed_manifest_is_current(ctx: &CommandContext) -> XtaskResult<()> {
    let config = ctx.design_system_config()?;
    let output = config.manifest.output.as_str();
    let Some(committed) = ctx.read_optional(output)? else {
        eprintln!("    no committed manifest at {output}; run `cargo xtask manifest` to create it");
        return Ok(());
    };

    let fresh = render_manifest(&config, false)?;
    if committed.trim_end() == fresh.trim_end() {
        return Ok(());
    }
    Err(XtaskError::consistency("committed manifest is out of date")
        .with_operation("check")
        .with_path(&ctx.root().join(output))
        .with_hint("run `cargo xtask manifest` and commit the result"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::config::DesignSystemConfig;
    use crate::runtime::error::XtaskErrorCategory;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-check-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn generated_tables_are_consistent() {
        assert_eq!(ensure_consistent(), Ok(()));
    }

    #[test]
    fn missing_committed_manifest_is_not_an_error() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        assert_eq!(
            committed_manifest_is_current(&CommandContext::at(&root)),
            Ok(())
        );
        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn stale_committed_manifest_fails() {
        let root = unique_test_root();
        let ctx = CommandContext::at(&root);
        ctx.write("docs/design-system.json", "{}\n").expect("write stale");
        let err = committed_manifest_is_current(&ctx).expect_err("stale manifest");
        assert_eq!(err.category, XtaskErrorCategory::Consistency);

        let fresh = render_manifest(&DesignSystemConfig::default(), false).expect("render");
        ctx.write("docs/design-system.json", &fresh).expect("write fresh");
        assert_eq!(committed_manifest_is_current(&ctx), Ok(()));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn rejects_arguments() {
        assert!(CheckCommand::parse(&["--fix".to_string()]).is_err());
    }
}
