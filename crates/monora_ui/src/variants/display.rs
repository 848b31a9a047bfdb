use super::*;
use crate::ClassList;

closed_keys! {
    /// Badge color variants.
    pub enum BadgeVariant in "variant", default Primary {
        /// Primary color.
        Primary => "primary",
        /// Secondary color.
        Secondary => "secondary",
        /// Accent color.
        Accent => "accent",
        /// Success color.
        Success => "success",
        /// Warning color.
        Warning => "warning",
        /// Destructive color.
        Destructive => "destructive",
    }
}

impl ClassTable for BadgeVariant {
    fn class_token(self) -> &'static str {
        match self {
            Self::Primary => "badge-primary",
            Self::Secondary => "badge-secondary",
            Self::Accent => "badge-accent",
            Self::Success => "badge-success",
            Self::Warning => "badge-warning",
            Self::Destructive => "badge-destructive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant badge attributes.
pub struct BadgeStyle {
    /// Color variant.
    pub variant: BadgeVariant,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl BadgeStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] =
        &[Dimension::of::<BadgeVariant>(DimensionRole::Variant)];
}

impl Resolve for BadgeStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Badge
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class())
            .token(self.variant.class_token())
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![(BadgeVariant::DIMENSION, self.variant.key())]
    }
}

impl FromRequest for BadgeStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            variant: request.key(kind)?,
            class: request.caller_class(),
        })
    }
}

closed_keys! {
    /// Alert severity, exposed as the `type` dimension.
    pub enum AlertVariant in "type", default Info {
        /// Informational.
        Info => "info",
        /// Success confirmation.
        Success => "success",
        /// Caution.
        Warning => "warning",
        /// Failure.
        Error => "error",
    }
}

impl ClassTable for AlertVariant {
    fn class_token(self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Success => "alert-success",
            Self::Warning => "alert-warning",
            Self::Error => "alert-error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant alert attributes.
pub struct AlertStyle {
    /// Severity.
    pub variant: AlertVariant,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl AlertStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] =
        &[Dimension::of::<AlertVariant>(DimensionRole::Variant)];
}

impl Resolve for AlertStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Alert
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class())
            .token(self.variant.class_token())
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![(AlertVariant::DIMENSION, self.variant.key())]
    }
}

impl FromRequest for AlertStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            variant: request.key(kind)?,
            class: request.caller_class(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
/// Regions of the composite card.
pub enum CardPart {
    /// Outer card surface.
    #[default]
    Root,
    /// Header region.
    Header,
    /// Title heading.
    Title,
    /// Subtitle paragraph.
    Description,
    /// Body region.
    Content,
}

impl CardPart {
    /// Every region, outermost first.
    pub const ALL: [Self; 5] = [
        Self::Root,
        Self::Header,
        Self::Title,
        Self::Description,
        Self::Content,
    ];

    /// Component kind rendering this region.
    pub fn kind(self) -> ComponentKind {
        match self {
            Self::Root => ComponentKind::Card,
            Self::Header => ComponentKind::CardHeader,
            Self::Title => ComponentKind::CardTitle,
            Self::Description => ComponentKind::CardDescription,
            Self::Content => ComponentKind::CardContent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant attributes of one card region. Regions share no state.
pub struct CardStyle {
    /// Region being rendered.
    pub part: CardPart,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl CardStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] = &[];

    /// Style for `part` with no override.
    pub fn part(part: CardPart) -> Self {
        Self { part, class: None }
    }
}

impl Resolve for CardStyle {
    fn kind(&self) -> ComponentKind {
        self.part.kind()
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class()).finish(self.class.as_deref())
    }
}

impl FromRequest for CardStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        let part = CardPart::ALL
            .into_iter()
            .find(|part| part.kind() == kind)
            .ok_or_else(|| UiError::UnknownKind(kind.key().to_string()))?;
        Ok(Self {
            part,
            class: request.caller_class(),
        })
    }
}

closed_keys! {
    /// Text size step.
    pub enum TextSize in "size", default Base {
        /// Extra small.
        Xs => "xs",
        /// Small.
        Sm => "sm",
        /// Body size.
        Base => "base",
        /// Large.
        Lg => "lg",
        /// Extra large.
        Xl => "xl",
    }
}

impl ClassTable for TextSize {
    fn class_token(self) -> &'static str {
        match self {
            Self::Xs => "text-xs",
            Self::Sm => "text-sm",
            Self::Base => "text-base",
            Self::Lg => "text-lg",
            Self::Xl => "text-xl",
        }
    }
}

closed_keys! {
    /// Text weight.
    pub enum TextWeight in "weight", default Normal {
        /// 300.
        Light => "light",
        /// 400.
        Normal => "normal",
        /// 500.
        Medium => "medium",
        /// 600.
        Semibold => "semibold",
        /// 700.
        Bold => "bold",
    }
}

impl ClassTable for TextWeight {
    fn class_token(self) -> &'static str {
        match self {
            Self::Light => "font-light",
            Self::Normal => "font-normal",
            Self::Medium => "font-medium",
            Self::Semibold => "font-semibold",
            Self::Bold => "font-bold",
        }
    }
}

closed_keys! {
    /// Text color role.
    pub enum TextColor in "color", default Foreground {
        /// Default text.
        Foreground => "foreground",
        /// Muted text.
        Muted => "muted",
        /// Primary color.
        Primary => "primary",
        /// Secondary color.
        Secondary => "secondary",
        /// Accent color.
        Accent => "accent",
        /// Destructive color.
        Destructive => "destructive",
    }
}

impl ClassTable for TextColor {
    fn class_token(self) -> &'static str {
        match self {
            Self::Foreground => "text-foreground",
            Self::Muted => "text-muted-foreground",
            Self::Primary => "text-primary",
            Self::Secondary => "text-secondary",
            Self::Accent => "text-accent",
            Self::Destructive => "text-destructive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant text attributes.
pub struct TextStyle {
    /// Size step.
    pub size: TextSize,
    /// Weight.
    pub weight: TextWeight,
    /// Color role.
    pub color: TextColor,
    /// Clip to one line with an ellipsis.
    pub truncate: bool,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl TextStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] = &[
        Dimension::of::<TextSize>(DimensionRole::Size),
        Dimension::of::<TextWeight>(DimensionRole::Modifier),
        Dimension::of::<TextColor>(DimensionRole::Modifier),
    ];
}

impl Resolve for TextStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Text
    }

    fn resolve(&self) -> String {
        let kind = self.kind();
        ClassList::new(kind.base_class())
            .token(self.size.class_token())
            .token(self.weight.class_token())
            .token(self.color.class_token())
            .token_if(self.truncate, kind.state_class(StateFlag::Truncate))
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (TextSize::DIMENSION, self.size.key()),
            (TextWeight::DIMENSION, self.weight.key()),
            (TextColor::DIMENSION, self.color.key()),
        ]
    }

    fn active_states(&self) -> Vec<StateFlag> {
        if self.truncate {
            vec![StateFlag::Truncate]
        } else {
            Vec::new()
        }
    }
}

impl FromRequest for TextStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            size: request.key(kind)?,
            weight: request.key(kind)?,
            color: request.key(kind)?,
            truncate: request.has_state(StateFlag::Truncate),
            class: request.caller_class(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn badge_has_no_size_dimension() {
        let style = BadgeStyle {
            variant: BadgeVariant::Success,
            class: None,
        };
        assert_eq!(style.resolve(), "badge badge-success");
    }

    #[test]
    fn alert_defaults_to_info() {
        assert_eq!(AlertStyle::default().resolve(), "alert alert-info");
    }

    #[test]
    fn card_regions_resolve_independently() {
        let classes: Vec<_> = CardPart::ALL
            .into_iter()
            .map(|part| CardStyle::part(part).resolve())
            .collect();
        assert_eq!(
            classes,
            vec![
                "card",
                "card-header",
                "card-title",
                "card-description",
                "card-content"
            ]
        );
    }

    #[test]
    fn text_emits_size_weight_color_then_truncate() {
        let style = TextStyle {
            size: TextSize::Sm,
            weight: TextWeight::Semibold,
            color: TextColor::Muted,
            truncate: true,
            class: Some("mb-2".into()),
        };
        assert_eq!(
            style.resolve(),
            "text-sm font-semibold text-muted-foreground truncate mb-2"
        );
    }
}
