//! Type scale, font weights, and heading hierarchy.

use serde::Serialize;

use crate::ThemedValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Font size steps with paired line heights.
pub enum FontSize {
    /// 0.75rem.
    #[serde(rename = "xs")]
    Xs,
    /// 0.875rem.
    #[serde(rename = "sm")]
    Sm,
    /// 1rem.
    #[serde(rename = "base")]
    Base,
    /// 1.125rem.
    #[serde(rename = "lg")]
    Lg,
    /// 1.25rem.
    #[serde(rename = "xl")]
    Xl,
    /// 1.5rem.
    #[serde(rename = "2xl")]
    Xl2,
    /// 1.875rem.
    #[serde(rename = "3xl")]
    Xl3,
    /// 2.25rem.
    #[serde(rename = "4xl")]
    Xl4,
}

impl FontSize {
    /// Every size step, smallest first.
    pub const ALL: [Self; 8] = [
        Self::Xs,
        Self::Sm,
        Self::Base,
        Self::Lg,
        Self::Xl,
        Self::Xl2,
        Self::Xl3,
        Self::Xl4,
    ];

    /// Stable step identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xl2 => "2xl",
            Self::Xl3 => "3xl",
            Self::Xl4 => "4xl",
        }
    }

    /// Font size, identical across themes.
    pub fn value(self) -> ThemedValue {
        ThemedValue::uniform(self.size_and_line_height().0)
    }

    /// Paired line height.
    pub fn line_height(self) -> &'static str {
        self.size_and_line_height().1
    }

    fn size_and_line_height(self) -> (&'static str, &'static str) {
        match self {
            Self::Xs => ("0.75rem", "1rem"),
            Self::Sm => ("0.875rem", "1.25rem"),
            Self::Base => ("1rem", "1.5rem"),
            Self::Lg => ("1.125rem", "1.75rem"),
            Self::Xl => ("1.25rem", "1.75rem"),
            Self::Xl2 => ("1.5rem", "2rem"),
            Self::Xl3 => ("1.875rem", "2.25rem"),
            Self::Xl4 => ("2.25rem", "2.5rem"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Font weight steps.
pub enum FontWeight {
    /// 300.
    Light,
    /// 400.
    Normal,
    /// 500.
    Medium,
    /// 600.
    Semibold,
    /// 700.
    Bold,
}

impl FontWeight {
    /// Every weight, lightest first.
    pub const ALL: [Self; 5] = [
        Self::Light,
        Self::Normal,
        Self::Medium,
        Self::Semibold,
        Self::Bold,
    ];

    /// Stable weight identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
        }
    }

    /// Numeric weight, identical across themes.
    pub fn value(self) -> ThemedValue {
        ThemedValue::uniform(match self {
            Self::Light => "300",
            Self::Normal => "400",
            Self::Medium => "500",
            Self::Semibold => "600",
            Self::Bold => "700",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Heading hierarchy.
pub enum Heading {
    /// Page titles.
    H1,
    /// Section headings.
    H2,
    /// Subsection headings.
    H3,
    /// Card titles.
    H4,
    /// Tertiary headings.
    H5,
    /// Small headings.
    H6,
}

impl Heading {
    /// Every heading level, outermost first.
    pub const ALL: [Self; 6] = [Self::H1, Self::H2, Self::H3, Self::H4, Self::H5, Self::H6];

    /// Stable level identifier.
    pub fn key(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }

    /// Font size step used by the level.
    pub fn size(self) -> FontSize {
        match self {
            Self::H1 => FontSize::Xl4,
            Self::H2 => FontSize::Xl3,
            Self::H3 => FontSize::Xl2,
            Self::H4 => FontSize::Xl,
            Self::H5 => FontSize::Lg,
            Self::H6 => FontSize::Base,
        }
    }

    /// Font weight used by the level.
    pub fn weight(self) -> FontWeight {
        match self {
            Self::H1 | Self::H2 => FontWeight::Bold,
            _ => FontWeight::Semibold,
        }
    }

    /// Usage guidance for documentation.
    pub fn usage(self) -> &'static str {
        match self {
            Self::H1 => "Main page titles and hero sections",
            Self::H2 => "Section headings",
            Self::H3 => "Subsection headings",
            Self::H4 => "Card titles and secondary headings",
            Self::H5 => "Tertiary headings",
            Self::H6 => "Small headings",
        }
    }
}
