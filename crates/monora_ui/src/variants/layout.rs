use super::*;
use crate::ClassList;

closed_keys! {
    /// Container max-width.
    pub enum ContainerSize in "size", default Max {
        /// `max-w-2xl`.
        Sm => "sm",
        /// `max-w-4xl`.
        Md => "md",
        /// `max-w-7xl`.
        Max => "max",
    }
}

impl ClassTable for ContainerSize {
    fn class_token(self) -> &'static str {
        match self {
            Self::Sm => "container-sm",
            Self::Md => "container-md",
            Self::Max => "container-max",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant container attributes.
pub struct ContainerStyle {
    /// Max-width step.
    pub size: ContainerSize,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl ContainerStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] =
        &[Dimension::of::<ContainerSize>(DimensionRole::Size)];
}

impl Resolve for ContainerStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Container
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class())
            .token(self.size.class_token())
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![(ContainerSize::DIMENSION, self.size.key())]
    }
}

impl FromRequest for ContainerStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            size: request.key(kind)?,
            class: request.caller_class(),
        })
    }
}

closed_keys! {
    /// Responsive grid column count.
    pub enum GridCols in "cols", default Auto {
        /// Single column.
        One => "1",
        /// Two columns from `md`.
        Two => "2",
        /// Three columns from `lg`.
        Three => "3",
        /// Four columns from `lg`.
        Four => "4",
        /// Auto-fit columns.
        Auto => "auto",
    }
}

impl ClassTable for GridCols {
    fn class_token(self) -> &'static str {
        match self {
            Self::One => "grid grid-cols-1",
            Self::Two => "grid-2",
            Self::Three => "grid-3",
            Self::Four => "grid-4",
            Self::Auto => "grid-auto",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant grid attributes.
pub struct GridStyle {
    /// Column count.
    pub cols: GridCols,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl GridStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] =
        &[Dimension::of::<GridCols>(DimensionRole::Modifier)];
}

impl Resolve for GridStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Grid
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class())
            .token(self.cols.class_token())
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![(GridCols::DIMENSION, self.cols.key())]
    }
}

impl FromRequest for GridStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            cols: request.key(kind)?,
            class: request.caller_class(),
        })
    }
}

closed_keys! {
    /// Main axis of a flex container.
    pub enum FlexDirection in "direction", default Row {
        /// Horizontal.
        Row => "row",
        /// Vertical.
        Col => "col",
    }
}

impl ClassTable for FlexDirection {
    fn class_token(self) -> &'static str {
        match self {
            Self::Row => "flex-row",
            Self::Col => "flex-col",
        }
    }
}

closed_keys! {
    /// Cross-axis alignment.
    pub enum FlexAlign in "align", default Center {
        /// Start.
        Start => "start",
        /// Center.
        Center => "center",
        /// End.
        End => "end",
        /// Stretch/fill.
        Stretch => "stretch",
    }
}

impl ClassTable for FlexAlign {
    fn class_token(self) -> &'static str {
        match self {
            Self::Start => "items-start",
            Self::Center => "items-center",
            Self::End => "items-end",
            Self::Stretch => "items-stretch",
        }
    }
}

closed_keys! {
    /// Main-axis justification.
    pub enum FlexJustify in "justify", default Start {
        /// Start.
        Start => "start",
        /// Center.
        Center => "center",
        /// End.
        End => "end",
        /// Space between items.
        Between => "between",
        /// Space around items.
        Around => "around",
    }
}

impl ClassTable for FlexJustify {
    fn class_token(self) -> &'static str {
        match self {
            Self::Start => "justify-start",
            Self::Center => "justify-center",
            Self::End => "justify-end",
            Self::Between => "justify-between",
            Self::Around => "justify-around",
        }
    }
}

closed_keys! {
    /// Gap between flex children.
    pub enum Gap in "gap", default Md {
        /// `gap-1`.
        Xs => "xs",
        /// `gap-2`.
        Sm => "sm",
        /// `gap-4`.
        Md => "md",
        /// `gap-6`.
        Lg => "lg",
        /// `gap-8`.
        Xl => "xl",
    }
}

impl ClassTable for Gap {
    fn class_token(self) -> &'static str {
        match self {
            Self::Xs => "gap-1",
            Self::Sm => "gap-2",
            Self::Md => "gap-4",
            Self::Lg => "gap-6",
            Self::Xl => "gap-8",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant flex attributes.
pub struct FlexStyle {
    /// Main axis.
    pub direction: FlexDirection,
    /// Cross-axis alignment.
    pub align: FlexAlign,
    /// Main-axis justification.
    pub justify: FlexJustify,
    /// Gap between children.
    pub gap: Gap,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl FlexStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] = &[
        Dimension::of::<FlexDirection>(DimensionRole::Modifier),
        Dimension::of::<FlexAlign>(DimensionRole::Modifier),
        Dimension::of::<FlexJustify>(DimensionRole::Modifier),
        Dimension::of::<Gap>(DimensionRole::Modifier),
    ];
}

impl Resolve for FlexStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Flex
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class())
            .token(self.direction.class_token())
            .token(self.align.class_token())
            .token(self.justify.class_token())
            .token(self.gap.class_token())
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (FlexDirection::DIMENSION, self.direction.key()),
            (FlexAlign::DIMENSION, self.align.key()),
            (FlexJustify::DIMENSION, self.justify.key()),
            (Gap::DIMENSION, self.gap.key()),
        ]
    }
}

impl FromRequest for FlexStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            direction: request.key(kind)?,
            align: request.key(kind)?,
            justify: request.key(kind)?,
            gap: request.key(kind)?,
            class: request.caller_class(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant stack attributes.
pub struct StackStyle {
    /// Gap between children.
    pub gap: Gap,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl StackStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] =
        &[Dimension::of::<Gap>(DimensionRole::Modifier)];
}

impl Resolve for StackStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Stack
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class())
            .token(self.gap.class_token())
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![(Gap::DIMENSION, self.gap.key())]
    }
}

impl FromRequest for StackStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            gap: request.key(kind)?,
            class: request.caller_class(),
        })
    }
}

closed_keys! {
    /// Section background.
    pub enum SectionVariant in "variant", default Plain {
        /// Page background.
        Plain => "default",
        /// Tinted muted background.
        Muted => "muted",
        /// Tinted primary background.
        Primary => "primary",
    }
}

impl ClassTable for SectionVariant {
    fn class_token(self) -> &'static str {
        match self {
            Self::Plain => "bg-background",
            Self::Muted => "bg-muted/30",
            Self::Primary => "bg-primary/5",
        }
    }
}

closed_keys! {
    /// Section vertical rhythm.
    pub enum SectionSize in "size", default Md {
        /// Compact padding.
        Sm => "sm",
        /// Default padding.
        Md => "md",
        /// Spacious padding.
        Lg => "lg",
    }
}

impl ClassTable for SectionSize {
    fn class_token(self) -> &'static str {
        match self {
            Self::Sm => "section-sm",
            Self::Md => "section",
            Self::Lg => "section-lg",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant section attributes.
pub struct SectionStyle {
    /// Background.
    pub variant: SectionVariant,
    /// Padding step.
    pub size: SectionSize,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl SectionStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] = &[
        Dimension::of::<SectionVariant>(DimensionRole::Variant),
        Dimension::of::<SectionSize>(DimensionRole::Size),
    ];
}

impl Resolve for SectionStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Section
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class())
            .token(self.variant.class_token())
            .token(self.size.class_token())
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (SectionVariant::DIMENSION, self.variant.key()),
            (SectionSize::DIMENSION, self.size.key()),
        ]
    }
}

impl FromRequest for SectionStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            variant: request.key(kind)?,
            size: request.key(kind)?,
            class: request.caller_class(),
        })
    }
}

closed_keys! {
    /// Divider axis.
    pub enum DividerOrientation in "orientation", default Horizontal {
        /// Full-width rule.
        Horizontal => "horizontal",
        /// Full-height rule.
        Vertical => "vertical",
    }
}

impl ClassTable for DividerOrientation {
    fn class_token(self) -> &'static str {
        match self {
            Self::Horizontal => "divider",
            Self::Vertical => "h-full w-px",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant divider attributes.
pub struct DividerStyle {
    /// Axis.
    pub orientation: DividerOrientation,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl DividerStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] =
        &[Dimension::of::<DividerOrientation>(DimensionRole::Modifier)];
}

impl Resolve for DividerStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Divider
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class())
            .token(self.orientation.class_token())
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![(DividerOrientation::DIMENSION, self.orientation.key())]
    }
}

impl FromRequest for DividerStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            orientation: request.key(kind)?,
            class: request.caller_class(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant badge group attributes.
pub struct BadgeGroupStyle {
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl BadgeGroupStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] = &[];
}

impl Resolve for BadgeGroupStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::BadgeGroup
    }

    fn resolve(&self) -> String {
        ClassList::new(self.kind().base_class()).finish(self.class.as_deref())
    }
}

impl FromRequest for BadgeGroupStyle {
    fn from_request(_kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            class: request.caller_class(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn container_has_no_base_token() {
        assert_eq!(ContainerStyle::default().resolve(), "container-max");
    }

    #[test]
    fn single_column_grid_emits_both_classes() {
        let style = GridStyle {
            cols: GridCols::One,
            class: None,
        };
        assert_eq!(style.resolve(), "grid grid-cols-1");
        assert_eq!("auto".parse::<GridCols>(), Ok(GridCols::Auto));
        assert!("5".parse::<GridCols>().is_err());
    }

    #[test]
    fn flex_defaults_match_documented_defaults() {
        assert_eq!(
            FlexStyle::default().resolve(),
            "flex flex-row items-center justify-start gap-4"
        );
    }

    #[test]
    fn stack_is_a_column_flex_with_gap() {
        let style = StackStyle {
            gap: Gap::Lg,
            class: Some("py-4".into()),
        };
        assert_eq!(style.resolve(), "flex flex-col gap-6 py-4");
    }

    #[test]
    fn section_emits_variant_before_size() {
        let style = SectionStyle {
            variant: SectionVariant::Muted,
            size: SectionSize::Lg,
            class: None,
        };
        assert_eq!(style.resolve(), "bg-muted/30 section-lg");
        assert_eq!(SectionVariant::Plain.to_string(), "default");
    }

    #[test]
    fn vertical_divider_is_a_hairline() {
        let style = DividerStyle {
            orientation: DividerOrientation::Vertical,
            class: None,
        };
        assert_eq!(style.resolve(), "h-full w-px");
    }
}
