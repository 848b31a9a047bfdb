//! Typed configuration loading helpers.

use crate::runtime::error::{XtaskError, XtaskResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Workspace-relative location of the design-system tooling config.
pub const DESIGN_SYSTEM_CONFIG: &str = "tools/design-system.toml";

/// Generic TOML-backed config loader.
///
/// `ConfigLoader<T>` handles only filesystem access and TOML deserialization. Callers validate
/// the typed value afterwards.
///
/// ```rust
/// # use std::path::Path;
/// # use xtask::runtime::config::{ConfigLoader, DesignSystemConfig};
/// let loader = ConfigLoader::<DesignSystemConfig>::new(Path::new("/workspace"), "tools/design-system.toml");
/// let _ = loader.path();
/// ```
#[derive(Clone, Debug)]
pub struct ConfigLoader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> ConfigLoader<T>
where
    T: DeserializeOwned,
{
    /// Create a loader for the given workspace-relative path.
    pub fn new(root: &Path, relative_path: &str) -> Self {
        Self {
            path: root.join(relative_path),
            _marker: PhantomData,
        }
    }

    /// Load and deserialize the configuration file.
    ///
    /// Missing files, unreadable files, and TOML parse failures are all surfaced as
    /// [`XtaskErrorCategory::Config`](crate::runtime::error::XtaskErrorCategory::Config).
    pub fn load(&self) -> XtaskResult<T> {
        let body = fs::read_to_string(&self.path).map_err(|err| {
            XtaskError::config(format!("failed to read {}: {err}", self.path.display()))
        })?;
        toml::from_str(&body).map_err(|err| {
            XtaskError::config(format!("failed to parse {}: {err}", self.path.display()))
        })
    }

    /// Like [`ConfigLoader::load`], but a missing file yields `T::default()`.
    pub fn load_or_default(&self) -> XtaskResult<T>
    where
        T: Default,
    {
        if self.path.exists() {
            self.load()
        } else {
            Ok(T::default())
        }
    }

    /// Return the config path on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `tools/design-system.toml`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DesignSystemConfig {
    /// Manifest export settings.
    pub manifest: ManifestConfig,
}

/// `[manifest]` table.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Workspace-relative output path of the committed manifest.
    pub output: String,
    /// Pretty-print the JSON export.
    pub pretty: bool,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            output: "docs/design-system.json".to_string(),
            pretty: true,
        }
    }
}

impl DesignSystemConfig {
    /// Semantic checks after deserialization.
    pub fn validate(&self) -> XtaskResult<()> {
        let output = self.manifest.output.trim();
        if output.is_empty() {
            return Err(XtaskError::config("manifest.output must not be empty")
                .with_hint(format!("set `output` under [manifest] in {DESIGN_SYSTEM_CONFIG}")));
        }
        if Path::new(output).is_absolute() {
            return Err(XtaskError::config(format!(
                "manifest.output must be workspace-relative, got {output}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;
    use pretty_assertions::assert_eq;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_root() -> PathBuf {
        std::env::temp_dir().join(format!(
            "xtask-config-test-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn load_reads_design_system_config() {
        let root = unique_test_root();
        fs::create_dir_all(root.join("tools")).expect("create config dir");
        fs::write(
            root.join(DESIGN_SYSTEM_CONFIG),
            "[manifest]\noutput = \"target/manifest.json\"\npretty = false\n",
        )
        .expect("write config");

        let loader = ConfigLoader::<DesignSystemConfig>::new(&root, DESIGN_SYSTEM_CONFIG);
        let loaded = loader.load().expect("load config");
        assert_eq!(
            loaded,
            DesignSystemConfig {
                manifest: ManifestConfig {
                    output: "target/manifest.json".into(),
                    pretty: false,
                },
            }
        );
        assert_eq!(loaded.validate(), Ok(()));

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn missing_file_is_a_config_error_unless_defaults_are_allowed() {
        let root = unique_test_root();
        fs::create_dir_all(&root).expect("create temp root");

        let loader = ConfigLoader::<DesignSystemConfig>::new(&root, DESIGN_SYSTEM_CONFIG);
        let err = loader.load().expect_err("missing config should fail");
        assert_eq!(err.category, XtaskErrorCategory::Config);
        assert!(err.to_string().contains("design-system.toml"));
        assert_eq!(
            loader.load_or_default().expect("default config"),
            DesignSystemConfig::default()
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn unknown_keys_and_invalid_toml_are_config_errors() {
        let root = unique_test_root();
        fs::create_dir_all(root.join("tools")).expect("create config dir");
        let loader = ConfigLoader::<DesignSystemConfig>::new(&root, DESIGN_SYSTEM_CONFIG);

        fs::write(loader.path(), "[manifest]\noutptu = \"x.json\"\n").expect("write typo");
        assert_eq!(
            loader.load().expect_err("unknown key").category,
            XtaskErrorCategory::Config
        );

        fs::write(loader.path(), "[manifest").expect("write broken config");
        assert_eq!(
            loader.load().expect_err("broken toml").category,
            XtaskErrorCategory::Config
        );

        let _ = fs::remove_dir_all(root);
    }

    #[test]
    fn validate_rejects_empty_and_absolute_outputs() {
        let mut config = DesignSystemConfig::default();
        config.manifest.output = "  ".into();
        assert!(config.validate().is_err());
        config.manifest.output = "/tmp/manifest.json".into();
        assert!(config.validate().is_err());
    }
}
