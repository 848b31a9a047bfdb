//! Read-only registry of every semantic token and its themed value.

use std::sync::OnceLock;

use serde::Serialize;
use thiserror::Error;

use crate::{
    Animation, ColorRole, FontSize, FontWeight, Heading, Radius, Shadow, Spacing, ThemeSource,
    ThemedValue,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Token lookup errors.
pub enum TokenError {
    /// No token is registered under the requested path.
    #[error("unknown token role `{0}`")]
    UnknownRole(String),
    /// Theme mode text is not `light` or `dark`.
    #[error("invalid theme mode `{0}` (expected `light` or `dark`)")]
    InvalidThemeMode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Token families, used as the first segment of a token path.
pub enum TokenGroup {
    /// Semantic colors.
    Color,
    /// Corner radii.
    Radius,
    /// Elevation shadows.
    Shadow,
    /// Spacing scale.
    Spacing,
    /// Font sizes.
    FontSize,
    /// Font weights.
    FontWeight,
    /// Heading font sizes.
    Heading,
    /// Named animations.
    Animation,
}

impl TokenGroup {
    /// Every family in registry order.
    pub const ALL: [Self; 8] = [
        Self::Color,
        Self::Radius,
        Self::Shadow,
        Self::Spacing,
        Self::FontSize,
        Self::FontWeight,
        Self::Heading,
        Self::Animation,
    ];

    /// Family whose path prefix is `key`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.key() == key)
    }

    /// Path prefix for the group.
    pub fn key(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Radius => "radius",
            Self::Shadow => "shadow",
            Self::Spacing => "spacing",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::Heading => "heading",
            Self::Animation => "animation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One registered token.
pub struct TokenEntry {
    /// Dotted path such as `color.primary` or `radius.md`.
    pub path: String,
    /// Token family.
    pub group: TokenGroup,
    /// Light and dark values.
    pub value: ThemedValue,
    /// Optional usage guidance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    /// CSS custom property the markup layer binds the token to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_var: Option<String>,
}

impl TokenEntry {
    fn new(group: TokenGroup, key: &str, value: ThemedValue) -> Self {
        Self {
            path: format!("{}.{key}", group.key()),
            group,
            value,
            description: None,
            css_var: None,
        }
    }

    fn described(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    fn bound_to(mut self, css_var: String) -> Self {
        self.css_var = Some(css_var);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Ordered collection of every semantic token.
pub struct TokenRegistry {
    entries: Vec<TokenEntry>,
}

/// Process-wide registry, built on first use and immutable afterwards.
pub fn registry() -> &'static TokenRegistry {
    static REGISTRY: OnceLock<TokenRegistry> = OnceLock::new();
    REGISTRY.get_or_init(TokenRegistry::standard)
}

impl TokenRegistry {
    /// Builds the standard Monora palette.
    pub fn standard() -> Self {
        let mut entries = Vec::new();
        entries.extend(ColorRole::ALL.into_iter().map(|role| {
            TokenEntry::new(TokenGroup::Color, role.key(), role.value())
                .described(role.description())
                .bound_to(role.css_var())
        }));
        entries.extend(
            Radius::ALL
                .into_iter()
                .map(|radius| TokenEntry::new(TokenGroup::Radius, radius.key(), radius.value())),
        );
        entries.extend(
            Shadow::ALL
                .into_iter()
                .map(|shadow| TokenEntry::new(TokenGroup::Shadow, shadow.key(), shadow.value())),
        );
        entries.extend(
            Spacing::SCALE
                .into_iter()
                .map(|step| TokenEntry::new(TokenGroup::Spacing, step.key(), step.value())),
        );
        entries.extend(
            FontSize::ALL
                .into_iter()
                .map(|size| TokenEntry::new(TokenGroup::FontSize, size.key(), size.value())),
        );
        entries.extend(FontWeight::ALL.into_iter().map(|weight| {
            TokenEntry::new(TokenGroup::FontWeight, weight.key(), weight.value())
        }));
        entries.extend(Heading::ALL.into_iter().map(|heading| {
            TokenEntry::new(TokenGroup::Heading, heading.key(), heading.size().value())
                .described(heading.usage())
        }));
        entries.extend(Animation::ALL.into_iter().map(|animation| {
            TokenEntry::new(TokenGroup::Animation, animation.key(), animation.value())
                .described(animation.description())
        }));
        Self { entries }
    }

    /// Every token in registry order.
    pub fn entries(&self) -> &[TokenEntry] {
        &self.entries
    }

    /// Tokens belonging to one family.
    pub fn group(&self, group: TokenGroup) -> impl Iterator<Item = &TokenEntry> + '_ {
        self.entries.iter().filter(move |entry| entry.group == group)
    }

    /// Looks up a token by dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnknownRole`] when no token is registered under `path`.
    pub fn lookup(&self, path: &str) -> Result<&TokenEntry, TokenError> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .ok_or_else(|| TokenError::UnknownRole(path.to_string()))
    }

    /// Resolves a token for the theme currently reported by `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::UnknownRole`] when no token is registered under `path`.
    pub fn value(&self, path: &str, theme: &dyn ThemeSource) -> Result<&'static str, TokenError> {
        self.lookup(path).map(|entry| entry.value.resolve(theme))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ThemeMode;

    #[test]
    fn paths_are_unique() {
        let registry = TokenRegistry::standard();
        let mut paths: Vec<_> = registry.entries().iter().map(|entry| &entry.path).collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn value_follows_theme_source() {
        let registry = registry();
        assert_eq!(
            registry.value("color.primary", &ThemeMode::Light),
            Ok("hsl(217 91% 40%)")
        );
        assert_eq!(
            registry.value("color.primary", &ThemeMode::Dark),
            Ok("hsl(217 91% 50%)")
        );
        assert_eq!(
            registry.value("shadow.xl", &ThemeMode::Dark),
            Ok("0 25px 50px -12px rgb(0 0 0 / 0.25)")
        );
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(
            registry().lookup("color.info"),
            Err(TokenError::UnknownRole("color.info".to_string()))
        );
    }

    #[test]
    fn group_filter_returns_only_that_family() {
        let radii: Vec<_> = registry()
            .group(TokenGroup::Radius)
            .map(|entry| entry.path.as_str())
            .collect();
        assert_eq!(radii, vec!["radius.sm", "radius.md", "radius.lg"]);
    }

    #[test]
    fn color_tokens_carry_their_custom_property() {
        let primary = registry().lookup("color.primary").expect("primary is registered");
        assert_eq!(primary.css_var.as_deref(), Some("--color-primary"));
        assert!(registry()
            .group(TokenGroup::Color)
            .all(|entry| entry.css_var.is_some()));
        assert_eq!(registry().lookup("radius.md").map(|entry| entry.css_var.clone()), Ok(None));
    }

    #[test]
    fn every_group_key_parses_back() {
        for group in TokenGroup::ALL {
            assert_eq!(TokenGroup::from_key(group.key()), Some(group));
            assert!(registry().group(group).next().is_some(), "{}", group.key());
        }
        assert_eq!(TokenGroup::from_key("z-index"), None);
    }
}
