//! Semantic color roles.

use serde::Serialize;

use crate::ThemedValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic color roles referenced by component class tokens.
pub enum ColorRole {
    /// Deep blue for primary actions.
    Primary,
    /// Cyan for secondary actions.
    Secondary,
    /// Neon purple for highlights.
    Accent,
    /// Confirmation green.
    Success,
    /// Cautionary amber.
    Warning,
    /// Destructive/error red.
    Destructive,
    /// Page background.
    Background,
    /// Default text.
    Foreground,
    /// Muted surfaces.
    Muted,
    /// Borders and dividers.
    Border,
}

impl ColorRole {
    /// Every color role in registry order.
    pub const ALL: [Self; 10] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Success,
        Self::Warning,
        Self::Destructive,
        Self::Background,
        Self::Foreground,
        Self::Muted,
        Self::Border,
    ];

    /// Stable role identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Destructive => "destructive",
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Muted => "muted",
            Self::Border => "border",
        }
    }

    /// HSL value per theme.
    pub fn value(self) -> ThemedValue {
        match self {
            Self::Primary => ThemedValue::new("hsl(217 91% 40%)", "hsl(217 91% 50%)"),
            Self::Secondary => ThemedValue::new("hsl(190 87% 45%)", "hsl(190 87% 50%)"),
            Self::Accent => ThemedValue::new("hsl(270 100% 55%)", "hsl(270 100% 60%)"),
            Self::Success => ThemedValue::new("hsl(142 71% 45%)", "hsl(142 71% 50%)"),
            Self::Warning => ThemedValue::new("hsl(38 92% 50%)", "hsl(38 92% 55%)"),
            Self::Destructive => ThemedValue::new("hsl(0 84% 60%)", "hsl(0 84% 65%)"),
            Self::Background => ThemedValue::new("hsl(0 0% 100%)", "hsl(220 13% 8%)"),
            Self::Foreground => ThemedValue::new("hsl(220 13% 13%)", "hsl(0 0% 98%)"),
            Self::Muted => ThemedValue::new("hsl(220 13% 91%)", "hsl(220 13% 28%)"),
            Self::Border => ThemedValue::new("hsl(220 13% 91%)", "hsl(220 13% 20%)"),
        }
    }

    /// Usage guidance for documentation.
    pub fn description(self) -> &'static str {
        match self {
            Self::Primary => "Deep blue for primary actions and key interactive elements",
            Self::Secondary => {
                "Cyan/Electric blue for secondary actions and innovation highlighting"
            }
            Self::Accent => "Neon purple for highlights, emphasis, and cutting-edge elements",
            Self::Success => "Green for success messages and positive confirmations",
            Self::Warning => "Amber for warning messages and cautionary alerts",
            Self::Destructive => "Red for destructive actions and error messages",
            Self::Background => "Neutral page background",
            Self::Foreground => "Neutral default text color",
            Self::Muted => "Neutral muted surfaces and secondary text backgrounds",
            Self::Border => "Neutral borders and dividers",
        }
    }

    /// CSS custom property the markup layer binds this role to.
    pub fn css_var(self) -> String {
        format!("--color-{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_role_has_distinct_key_and_css_var() {
        let mut keys: Vec<_> = ColorRole::ALL.iter().map(|role| role.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ColorRole::ALL.len());
        assert_eq!(ColorRole::Destructive.css_var(), "--color-destructive");
    }

    #[test]
    fn brand_roles_shift_between_themes() {
        for role in [ColorRole::Primary, ColorRole::Accent, ColorRole::Destructive] {
            assert!(!role.value().is_uniform(), "{} should differ by theme", role.key());
        }
    }
}
