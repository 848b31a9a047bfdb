use super::*;

#[component]
/// Inline status label.
pub fn Badge(
    #[prop(default = BadgeVariant::Primary)] variant: BadgeVariant,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = BadgeStyle {
        variant,
        class: layout_class,
    }
    .resolve();

    view! {
        <span
            class=class
            data-ui-kind=ComponentKind::Badge.key()
            data-ui-variant=variant.key()
            {..attrs}
        >
            {children()}
        </span>
    }
}

#[component]
/// Wrapping row of badges.
pub fn BadgeGroup(
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = BadgeGroupStyle {
        class: layout_class,
    }
    .resolve();

    view! {
        <div class=class data-ui-kind=ComponentKind::BadgeGroup.key() {..attrs}>
            {children()}
        </div>
    }
}

#[component]
/// Status banner with an optional heading.
pub fn Alert(
    #[prop(default = AlertVariant::Info)] variant: AlertVariant,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = AlertStyle {
        variant,
        class: layout_class,
    }
    .resolve();
    let title = title
        .filter(|title| !title.trim().is_empty())
        .map(|title| view! { <h4 class=ALERT_TITLE_CLASS>{title}</h4> });

    view! {
        <div
            class=class
            data-ui-kind=ComponentKind::Alert.key()
            data-ui-type=variant.key()
            {..attrs}
        >
            {title}
            {children()}
        </div>
    }
}

fn card_class(part: CardPart, layout_class: Option<String>) -> String {
    CardStyle {
        part,
        class: layout_class,
    }
    .resolve()
}

#[component]
/// Card surface.
pub fn Card(
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=card_class(CardPart::Root, layout_class)
            data-ui-kind=ComponentKind::Card.key()
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Card header region.
pub fn CardHeader(
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=card_class(CardPart::Header, layout_class)
            data-ui-kind=ComponentKind::CardHeader.key()
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Card title heading.
pub fn CardTitle(
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=card_class(CardPart::Title, layout_class)
            data-ui-kind=ComponentKind::CardTitle.key()
            {..attrs}
        >
            {children()}
        </h2>
    }
}

#[component]
/// Card subtitle.
pub fn CardDescription(
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=card_class(CardPart::Description, layout_class)
            data-ui-kind=ComponentKind::CardDescription.key()
            {..attrs}
        >
            {children()}
        </p>
    }
}

#[component]
/// Card body region.
pub fn CardContent(
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=card_class(CardPart::Content, layout_class)
            data-ui-kind=ComponentKind::CardContent.key()
            {..attrs}
        >
            {children()}
        </div>
    }
}

#[component]
/// Body text.
pub fn Text(
    #[prop(default = TextSize::Base)] size: TextSize,
    #[prop(default = TextWeight::Normal)] weight: TextWeight,
    #[prop(default = TextColor::Foreground)] color: TextColor,
    #[prop(optional)] truncate: bool,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = TextStyle {
        size,
        weight,
        color,
        truncate,
        class: layout_class,
    }
    .resolve();

    view! {
        <p
            class=class
            data-ui-kind=ComponentKind::Text.key()
            data-ui-size=size.key()
            data-ui-weight=weight.key()
            data-ui-color=color.key()
            {..attrs}
        >
            {children()}
        </p>
    }
}
