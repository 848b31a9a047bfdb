//! Shared command context passed into command families.

use crate::runtime::config::{ConfigLoader, DesignSystemConfig, DESIGN_SYSTEM_CONFIG};
use crate::runtime::error::{XtaskError, XtaskResult};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Shared execution context for xtask command families.
#[derive(Clone, Debug)]
pub struct CommandContext {
    root: PathBuf,
}

impl CommandContext {
    /// Create a new command context rooted at the current workspace.
    pub fn new() -> XtaskResult<Self> {
        Ok(Self::at(workspace_root()?))
    }

    /// Context rooted at an explicit directory.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Workspace root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads and validates `tools/design-system.toml`, falling back to defaults when absent.
    pub fn design_system_config(&self) -> XtaskResult<DesignSystemConfig> {
        let loader = ConfigLoader::<DesignSystemConfig>::new(&self.root, DESIGN_SYSTEM_CONFIG);
        let config = loader.load_or_default()?;
        config
            .validate()
            .map_err(|err| err.with_path(loader.path()))?;
        Ok(config)
    }

    /// Reads a workspace-relative file, `None` when it does not exist.
    pub fn read_optional(&self, relative: &str) -> XtaskResult<Option<String>> {
        let path = self.root.join(relative);
        match fs::read_to_string(&path) {
            Ok(body) => Ok(Some(body)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(XtaskError::io(format!("failed to read: {err}")).with_path(&path)),
        }
    }

    /// Writes a workspace-relative file, creating parent directories.
    pub fn write(&self, relative: &str, body: &str) -> XtaskResult<PathBuf> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                XtaskError::io(format!("failed to create directory: {err}")).with_path(parent)
            })?;
        }
        fs::write(&path, body)
            .map_err(|err| XtaskError::io(format!("failed to write: {err}")).with_path(&path))?;
        Ok(path)
    }

    /// Runs `action` as a named stage with a timing line.
    pub fn stage<F>(&self, message: &str, action: F) -> XtaskResult<()>
    where
        F: FnOnce() -> XtaskResult<()>,
    {
        eprintln!("\n==> {message}");
        let started = Instant::now();
        let result = action();
        match &result {
            Ok(()) => eprintln!("    done in {:.2?}", started.elapsed()),
            Err(_) => eprintln!("    failed after {:.2?}", started.elapsed()),
        }
        result
    }
}

fn workspace_root() -> XtaskResult<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| XtaskError::io("xtask lives under workspace root"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-context-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn write_creates_parents_and_read_optional_round_trips() {
        let root = unique_test_root();
        let ctx = CommandContext::at(&root);
        assert_eq!(ctx.read_optional("docs/out.json").expect("read"), None);

        ctx.write("docs/out.json", "{}").expect("write");
        assert_eq!(
            ctx.read_optional("docs/out.json").expect("read"),
            Some("{}".to_string())
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn missing_config_uses_defaults() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");
        let config = CommandContext::at(&root)
            .design_system_config()
            .expect("default config");
        assert_eq!(config.manifest.output, "docs/design-system.json");
        assert!(config.manifest.pretty);

        let _ = fs::remove_dir_all(root);
    }
}
