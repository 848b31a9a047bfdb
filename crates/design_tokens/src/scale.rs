//! Radius, shadow, and spacing scales.

use serde::Serialize;

use crate::ThemedValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Corner radius scale derived from the `--radius` custom property.
pub enum Radius {
    /// Small radius.
    Sm,
    /// Default radius.
    Md,
    /// Large radius.
    Lg,
}

impl Radius {
    /// Every radius step, smallest first.
    pub const ALL: [Self; 3] = [Self::Sm, Self::Md, Self::Lg];

    /// Stable step identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Radius expression, identical across themes.
    pub fn value(self) -> ThemedValue {
        match self {
            Self::Sm => ThemedValue::uniform("calc(var(--radius) - 4px)"),
            Self::Md => ThemedValue::uniform("calc(var(--radius) - 2px)"),
            Self::Lg => ThemedValue::uniform("var(--radius)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Elevation shadow scale.
pub enum Shadow {
    /// Hairline shadow.
    Xs,
    /// Small shadow.
    Sm,
    /// Base shadow.
    Base,
    /// Medium shadow.
    Md,
    /// Large shadow.
    Lg,
    /// Extra large shadow.
    Xl,
}

impl Shadow {
    /// Every shadow step, lowest first.
    pub const ALL: [Self; 6] = [
        Self::Xs,
        Self::Sm,
        Self::Base,
        Self::Md,
        Self::Lg,
        Self::Xl,
    ];

    /// Stable step identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Box-shadow expression, identical across themes.
    pub fn value(self) -> ThemedValue {
        ThemedValue::uniform(match self {
            Self::Xs => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            Self::Sm => "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
            Self::Base => "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
            Self::Md => "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
            Self::Lg => "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
            Self::Xl => "0 25px 50px -12px rgb(0 0 0 / 0.25)",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// One step of the spacing scale, keyed by its utility suffix (`p-4`, `gap-2`, ...).
pub struct Spacing {
    step: &'static str,
    rem: &'static str,
}

impl Spacing {
    /// The full spacing scale.
    pub const SCALE: [Self; 13] = [
        Self::new("0", "0"),
        Self::new("1", "0.25rem"),
        Self::new("2", "0.5rem"),
        Self::new("3", "0.75rem"),
        Self::new("4", "1rem"),
        Self::new("6", "1.5rem"),
        Self::new("8", "2rem"),
        Self::new("10", "2.5rem"),
        Self::new("12", "3rem"),
        Self::new("16", "4rem"),
        Self::new("20", "5rem"),
        Self::new("24", "6rem"),
        Self::new("32", "8rem"),
    ];

    const fn new(step: &'static str, rem: &'static str) -> Self {
        Self { step, rem }
    }

    /// Looks up a step by its utility suffix.
    pub fn step(step: &str) -> Option<Self> {
        Self::SCALE.iter().copied().find(|entry| entry.step == step)
    }

    /// Utility suffix.
    pub fn key(self) -> &'static str {
        self.step
    }

    /// Length in rem, identical across themes.
    pub fn value(self) -> ThemedValue {
        ThemedValue::uniform(self.rem)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn spacing_steps_are_looked_up_by_suffix() {
        assert_eq!(Spacing::step("4").map(|step| step.value().light), Some("1rem"));
        assert_eq!(Spacing::step("5"), None);
    }

    #[test]
    fn radius_scale_is_anchored_on_custom_property() {
        assert_eq!(Radius::Lg.value().light, "var(--radius)");
        assert!(Radius::ALL.iter().all(|radius| radius.value().is_uniform()));
    }
}
