//! Named animations.

use serde::Serialize;

use crate::ThemedValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Named animations exposed as `animate-*` utilities.
pub enum Animation {
    /// 300ms opacity fade.
    FadeIn,
    /// 300ms upward slide with fade.
    SlideUp,
    /// Two second opacity pulse.
    PulseSubtle,
}

impl Animation {
    /// Every animation name.
    pub const ALL: [Self; 3] = [Self::FadeIn, Self::SlideUp, Self::PulseSubtle];

    /// Stable animation identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::SlideUp => "slide-up",
            Self::PulseSubtle => "pulse-subtle",
        }
    }

    /// Animation shorthand, identical across themes.
    pub fn value(self) -> ThemedValue {
        ThemedValue::uniform(match self {
            Self::FadeIn => "fadeIn 0.3s ease-in-out",
            Self::SlideUp => "slideUp 0.3s ease-out",
            Self::PulseSubtle => "pulseSubtle 2s cubic-bezier(0.4, 0, 0.6, 1) infinite",
        })
    }

    /// Short description for documentation.
    pub fn description(self) -> &'static str {
        match self {
            Self::FadeIn => "Fade in animation (300ms)",
            Self::SlideUp => "Slide up animation (300ms)",
            Self::PulseSubtle => "Subtle pulse animation (2s)",
        }
    }
}
