//! Component kind registry: base classes, element tags, dimensions, and state tokens.

use crate::variants::{
    closed_keys, AlertStyle, BadgeGroupStyle, BadgeStyle, ButtonStyle, CardStyle, ClosedKey,
    ContainerStyle, Dimension, DividerOrientation, DividerStyle, FlexStyle, FromRequest,
    GridStyle, InputStyle, Resolve, ResolveRequest, SectionStyle, SelectStyle, StackStyle,
    StateFlag, TextStyle,
};
use crate::UiError;

closed_keys! {
    /// Every component kind the resolver knows about.
    pub enum ComponentKind in "kind" {
        /// Action button.
        Button => "button",
        /// Labeled single-line text field.
        Input => "input",
        /// Labeled choice field.
        Select => "select",
        /// Card surface.
        Card => "card",
        /// Card header region.
        CardHeader => "card-header",
        /// Card title heading.
        CardTitle => "card-title",
        /// Card subtitle.
        CardDescription => "card-description",
        /// Card body region.
        CardContent => "card-content",
        /// Inline status label.
        Badge => "badge",
        /// Status banner.
        Alert => "alert",
        /// Centered max-width wrapper.
        Container => "container",
        /// Responsive grid.
        Grid => "grid",
        /// Flex row or column.
        Flex => "flex",
        /// Vertical flex column.
        Stack => "stack",
        /// Body text.
        Text => "text",
        /// Page section with vertical rhythm.
        Section => "section",
        /// Horizontal or vertical rule.
        Divider => "divider",
        /// Wrapping row of badges.
        BadgeGroup => "badge-group",
    }
}

impl ComponentKind {
    /// Class token emitted before any dimension token. May be empty.
    pub const fn base_class(self) -> &'static str {
        match self {
            Self::Button => "btn",
            Self::Input | Self::Select => "input-base",
            Self::Card => "card",
            Self::CardHeader => "card-header",
            Self::CardTitle => "card-title",
            Self::CardDescription => "card-description",
            Self::CardContent => "card-content",
            Self::Badge => "badge",
            Self::Alert => "alert",
            Self::Flex => "flex",
            Self::Stack => "flex flex-col",
            Self::BadgeGroup => "flex flex-wrap gap-2",
            Self::Container | Self::Grid | Self::Text | Self::Section | Self::Divider => "",
        }
    }

    /// HTML element the shell renders.
    pub const fn element(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Input => "input",
            Self::Select => "select",
            Self::CardTitle => "h2",
            Self::CardDescription | Self::Text => "p",
            Self::Badge => "span",
            Self::Section => "section",
            Self::Card
            | Self::CardHeader
            | Self::CardContent
            | Self::Alert
            | Self::Container
            | Self::Grid
            | Self::Flex
            | Self::Stack
            | Self::Divider
            | Self::BadgeGroup => "div",
        }
    }

    /// Component name as exposed by the view layer.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Button => "Button",
            Self::Input => "Input",
            Self::Select => "Select",
            Self::Card => "Card",
            Self::CardHeader => "CardHeader",
            Self::CardTitle => "CardTitle",
            Self::CardDescription => "CardDescription",
            Self::CardContent => "CardContent",
            Self::Badge => "Badge",
            Self::Alert => "Alert",
            Self::Container => "Container",
            Self::Grid => "Grid",
            Self::Flex => "Flex",
            Self::Stack => "Stack",
            Self::Text => "Text",
            Self::Section => "Section",
            Self::Divider => "Divider",
            Self::BadgeGroup => "BadgeGroup",
        }
    }

    /// Declared dimensions in emission order.
    pub fn dimensions(self) -> &'static [Dimension] {
        match self {
            Self::Button => ButtonStyle::DIMENSIONS,
            Self::Input => InputStyle::DIMENSIONS,
            Self::Select => SelectStyle::DIMENSIONS,
            Self::Card
            | Self::CardHeader
            | Self::CardTitle
            | Self::CardDescription
            | Self::CardContent => CardStyle::DIMENSIONS,
            Self::Badge => BadgeStyle::DIMENSIONS,
            Self::Alert => AlertStyle::DIMENSIONS,
            Self::Container => ContainerStyle::DIMENSIONS,
            Self::Grid => GridStyle::DIMENSIONS,
            Self::Flex => FlexStyle::DIMENSIONS,
            Self::Stack => StackStyle::DIMENSIONS,
            Self::Text => TextStyle::DIMENSIONS,
            Self::Section => SectionStyle::DIMENSIONS,
            Self::Divider => DividerStyle::DIMENSIONS,
            Self::BadgeGroup => BadgeGroupStyle::DIMENSIONS,
        }
    }

    /// Looks up a declared dimension by name.
    pub fn dimension(self, name: &str) -> Option<&'static Dimension> {
        self.dimensions()
            .iter()
            .find(|dimension| dimension.name == name)
    }

    /// Token group added when `flag` is active, or `None` when the kind ignores the flag.
    pub const fn state_token(self, flag: StateFlag) -> Option<&'static str> {
        match (self, flag) {
            (Self::Button, StateFlag::Disabled) => Some("btn-disabled"),
            (Self::Button, StateFlag::FullWidth) => Some("w-full"),
            (Self::Input | Self::Select, StateFlag::HasError) => {
                Some("border-destructive focus-visible:ring-destructive")
            }
            (Self::Text, StateFlag::Truncate) => Some("truncate"),
            _ => None,
        }
    }

    /// ARIA attributes owned by the kind, derived from the selected `(dimension, key)` pairs.
    pub fn aria_attrs(
        self,
        selected: &[(&'static str, &'static str)],
    ) -> Vec<(&'static str, &'static str)> {
        match self {
            Self::Divider => {
                let mut attrs = vec![("role", "separator")];
                if let Some(&(_, orientation)) = selected
                    .iter()
                    .find(|(dimension, _)| *dimension == DividerOrientation::DIMENSION)
                {
                    attrs.push(("aria-orientation", orientation));
                }
                attrs
            }
            _ => Vec::new(),
        }
    }

    pub(crate) fn state_class(self, flag: StateFlag) -> &'static str {
        self.state_token(flag).unwrap_or_default()
    }

    /// State flags this kind declares, in flag declaration order.
    pub fn states(self) -> Vec<StateFlag> {
        StateFlag::ALL
            .iter()
            .copied()
            .filter(|flag| self.state_token(*flag).is_some())
            .collect()
    }

    /// Card regions share one naming scheme and nothing else.
    pub const fn is_card_part(self) -> bool {
        matches!(
            self,
            Self::Card
                | Self::CardHeader
                | Self::CardTitle
                | Self::CardDescription
                | Self::CardContent
        )
    }

    /// Resolves a string-keyed request for this kind.
    ///
    /// # Errors
    ///
    /// - [`UiError::UnknownDimension`] when the request names a dimension the kind lacks.
    /// - [`UiError::UnsupportedState`] for flags outside [`ComponentKind::states`].
    /// - [`UiError::InvalidAttribute`] for keys outside a dimension's declared set.
    pub fn resolve(self, request: &ResolveRequest<'_>) -> Result<String, UiError> {
        request.validate(self)?;
        Ok(match self {
            Self::Button => build::<ButtonStyle>(self, request)?,
            Self::Input => build::<InputStyle>(self, request)?,
            Self::Select => build::<SelectStyle>(self, request)?,
            Self::Card
            | Self::CardHeader
            | Self::CardTitle
            | Self::CardDescription
            | Self::CardContent => build::<CardStyle>(self, request)?,
            Self::Badge => build::<BadgeStyle>(self, request)?,
            Self::Alert => build::<AlertStyle>(self, request)?,
            Self::Container => build::<ContainerStyle>(self, request)?,
            Self::Grid => build::<GridStyle>(self, request)?,
            Self::Flex => build::<FlexStyle>(self, request)?,
            Self::Stack => build::<StackStyle>(self, request)?,
            Self::Text => build::<TextStyle>(self, request)?,
            Self::Section => build::<SectionStyle>(self, request)?,
            Self::Divider => build::<DividerStyle>(self, request)?,
            Self::BadgeGroup => build::<BadgeGroupStyle>(self, request)?,
        })
    }
}

fn build<S>(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<String, UiError>
where
    S: FromRequest + Resolve,
{
    S::from_request(kind, request).map(|style| style.resolve())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn kind_keys_round_trip_through_parse() {
        for kind in ComponentKind::ALL {
            assert_eq!(ComponentKind::parse(kind.key()), Ok(*kind));
        }
        assert!(ComponentKind::parse("Button").is_err());
    }

    #[test]
    fn documented_scenarios_resolve() {
        let cases = [
            ("button", ResolveRequest::new(), "btn btn-primary btn-md"),
            (
                "button",
                ResolveRequest::new()
                    .variant("destructive")
                    .size("lg")
                    .state("full-width")
                    .class("mt-4"),
                "btn btn-destructive btn-lg w-full mt-4",
            ),
            ("badge", ResolveRequest::new().variant("success"), "badge badge-success"),
            (
                "input",
                ResolveRequest::new().state("has-error"),
                "input-base border-destructive focus-visible:ring-destructive",
            ),
            ("grid", ResolveRequest::new().with("cols", "3"), "grid-3"),
            ("stack", ResolveRequest::new().with("gap", "sm"), "flex flex-col gap-2"),
        ];
        for (kind, request, expected) in cases {
            assert_eq!(
                crate::resolve_kind(kind, &request),
                Ok(expected.to_string())
            );
        }
    }

    #[test]
    fn unknown_variant_is_rejected_without_fallback() {
        let err = ComponentKind::Button
            .resolve(&ResolveRequest::new().variant("info"))
            .expect_err("info is an alert type, not a button variant");
        assert_eq!(
            err,
            UiError::InvalidAttribute {
                kind: "button",
                dimension: "variant",
                value: "info".to_string(),
                expected: "primary|secondary|accent|ghost|outline|destructive".to_string(),
            }
        );
    }

    #[test]
    fn badge_has_no_size_dimension() {
        assert_eq!(
            ComponentKind::Badge.resolve(&ResolveRequest::new().size("lg")),
            Err(UiError::UnknownDimension {
                kind: "badge",
                dimension: "size".to_string(),
            })
        );
    }

    #[test]
    fn flags_are_checked_per_kind() {
        assert_eq!(ComponentKind::Button.states(), vec![StateFlag::Disabled, StateFlag::FullWidth]);
        assert_eq!(
            ComponentKind::Badge.resolve(&ResolveRequest::new().state("disabled")),
            Err(UiError::UnsupportedState {
                kind: "badge",
                flag: "disabled".to_string(),
            })
        );
        assert!(ComponentKind::Divider.states().is_empty());
    }

    #[test]
    fn only_divider_owns_aria_attributes() {
        assert_eq!(
            ComponentKind::Divider.aria_attrs(&[("orientation", "horizontal")]),
            vec![("role", "separator"), ("aria-orientation", "horizontal")]
        );
        assert!(ComponentKind::Button.aria_attrs(&[("variant", "primary")]).is_empty());
    }

    #[test]
    fn resolution_is_deterministic() {
        let request = ResolveRequest::new().variant("ghost").state("disabled");
        let first = ComponentKind::Button.resolve(&request);
        assert_eq!(first, ComponentKind::Button.resolve(&request));
    }
}
