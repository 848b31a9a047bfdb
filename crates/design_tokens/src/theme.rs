//! Theme modes and theme-indexed token values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::TokenError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Active color scheme selected by the markup layer.
pub enum ThemeMode {
    /// Light palette.
    #[default]
    Light,
    /// Dark palette.
    Dark,
}

impl ThemeMode {
    /// Every supported mode, light first.
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    /// Stable identifier used in configuration files and CLI flags.
    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Class the markup layer applies to its root element for class-based dark mode.
    ///
    /// Light mode is the unscoped default, so it contributes no class.
    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "",
            Self::Dark => "dark",
        }
    }

    /// Maps a `prefers-color-scheme: dark` media query result onto a mode.
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ThemeMode {
    type Err = TokenError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(TokenError::InvalidThemeMode(other.to_string())),
        }
    }
}

/// Read-only view of the process-wide theme flag.
///
/// The flag is owned and mutated by the rendering layer. Every call returns a snapshot that is
/// only meaningful for the current render.
pub trait ThemeSource {
    /// Current theme mode.
    fn theme_mode(&self) -> ThemeMode;
}

impl ThemeSource for ThemeMode {
    fn theme_mode(&self) -> ThemeMode {
        *self
    }
}

impl<F> ThemeSource for F
where
    F: Fn() -> ThemeMode,
{
    fn theme_mode(&self) -> ThemeMode {
        self()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// A token value indexed by theme mode.
pub struct ThemedValue {
    /// Value used by the light palette.
    pub light: &'static str,
    /// Value used by the dark palette.
    pub dark: &'static str,
}

impl ThemedValue {
    /// Value that differs between light and dark palettes.
    pub const fn new(light: &'static str, dark: &'static str) -> Self {
        Self { light, dark }
    }

    /// Value shared by both palettes.
    pub const fn uniform(value: &'static str) -> Self {
        Self {
            light: value,
            dark: value,
        }
    }

    /// Value for the given mode.
    pub fn get(self, mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => self.light,
            ThemeMode::Dark => self.dark,
        }
    }

    /// Value for the mode reported by `source` at the time of the call.
    pub fn resolve(self, source: &dyn ThemeSource) -> &'static str {
        self.get(source.theme_mode())
    }

    /// Whether both palettes share the same value.
    pub fn is_uniform(self) -> bool {
        self.light == self.dark
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_mode_parses_known_keys_and_rejects_others() {
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert_eq!(" dark ".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!(
            "sepia".parse::<ThemeMode>(),
            Err(TokenError::InvalidThemeMode("sepia".to_string()))
        );
    }

    #[test]
    fn root_class_only_marks_dark_mode() {
        assert_eq!(ThemeMode::Light.root_class(), "");
        assert_eq!(ThemeMode::Dark.root_class(), "dark");
        assert_eq!(ThemeMode::from_prefers_dark(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_prefers_dark(false), ThemeMode::Light);
    }

    #[test]
    fn closure_theme_source_is_read_on_every_call() {
        let current = Cell::new(ThemeMode::Light);
        let source = || current.get();
        let value = ThemedValue::new("hsl(0 0% 100%)", "hsl(220 13% 8%)");

        assert_eq!(value.resolve(&source), "hsl(0 0% 100%)");
        current.set(ThemeMode::Dark);
        assert_eq!(value.resolve(&source), "hsl(220 13% 8%)");
    }

    #[test]
    fn uniform_values_ignore_theme() {
        let value = ThemedValue::uniform("0.5rem");
        assert!(value.is_uniform());
        assert_eq!(value.get(ThemeMode::Dark), "0.5rem");
    }
}
