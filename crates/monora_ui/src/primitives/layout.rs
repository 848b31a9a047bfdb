use super::*;

#[component]
/// Centered max-width wrapper.
pub fn Container(
    #[prop(default = ContainerSize::Max)] size: ContainerSize,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = ContainerStyle {
        size,
        class: layout_class,
    }
    .resolve();

    view! {
        <div
            class=class
            data-ui-kind=ComponentKind::Container.key()
            data-ui-size=size.key()
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Responsive grid.
pub fn Grid(
    #[prop(default = GridCols::Auto)] cols: GridCols,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = GridStyle {
        cols,
        class: layout_class,
    }
    .resolve();

    view! {
        <div
            class=class
            data-ui-kind=ComponentKind::Grid.key()
            data-ui-cols=cols.key()
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Flex row or column.
pub fn Flex(
    #[prop(default = FlexDirection::Row)] direction: FlexDirection,
    #[prop(default = FlexAlign::Center)] align: FlexAlign,
    #[prop(default = FlexJustify::Start)] justify: FlexJustify,
    #[prop(default = Gap::Md)] gap: Gap,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = FlexStyle {
        direction,
        align,
        justify,
        gap,
        class: layout_class,
    }
    .resolve();

    view! {
        <div
            class=class
            data-ui-kind=ComponentKind::Flex.key()
            data-ui-direction=direction.key()
            data-ui-align=align.key()
            data-ui-justify=justify.key()
            data-ui-gap=gap.key()
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Vertical stack.
pub fn Stack(
    #[prop(default = Gap::Md)] gap: Gap,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = StackStyle {
        gap,
        class: layout_class,
    }
    .resolve();

    view! {
        <div
            class=class
            data-ui-kind=ComponentKind::Stack.key()
            data-ui-gap=gap.key()
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Page section.
pub fn Section(
    #[prop(default = SectionVariant::Plain)] variant: SectionVariant,
    #[prop(default = SectionSize::Md)] size: SectionSize,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = SectionStyle {
        variant,
        size,
        class: layout_class,
    }
    .resolve();

    view! {
        <section
            class=class
            data-ui-kind=ComponentKind::Section.key()
            data-ui-variant=variant.key()
            data-ui-size=size.key()
            {..attrs}
        >
            {children()}
        </section>
    }
}

#[component]
/// Horizontal or vertical rule.
pub fn Divider(
    #[prop(default = DividerOrientation::Horizontal)] orientation: DividerOrientation,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
) -> impl IntoView {
    let class = DividerStyle {
        orientation,
        class: layout_class,
    }
    .resolve();

    view! {
        <div
            class=class
            role="separator"
            aria-orientation=orientation.key()
            data-ui-kind=ComponentKind::Divider.key()
            data-ui-orientation=orientation.key()
            {..attrs}
        />
    }
}
