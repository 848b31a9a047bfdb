//! Leptos components over the resolver.
//!
//! Every component builds its style struct, resolves it, and emits the same `data-ui-*`
//! contract as the framework-agnostic shells. Extra attributes given at the call site
//! (`attr:placeholder="..."`, `attr:aria-label="..."`) are spread onto the root element
//! unchanged.

use leptos::ev::{Event, MouseEvent};
use leptos::logging::{error, warn};
use leptos::*;

use crate::shell::{
    FieldCopy, SelectOption, ALERT_TITLE_CLASS, FIELD_ERROR_CLASS, FIELD_HELPER_CLASS,
    FIELD_LABEL_CLASS, FIELD_WRAPPER_CLASS,
};
use crate::variants::{
    AlertStyle, AlertVariant, BadgeGroupStyle, BadgeStyle, BadgeVariant, ButtonSize, ButtonStyle,
    ButtonVariant, CardPart, CardStyle, ClosedKey, ContainerSize, ContainerStyle,
    DividerOrientation, DividerStyle, FlexAlign, FlexDirection, FlexJustify, FlexStyle, Gap,
    GridCols, GridStyle, InputStyle, Resolve, SectionSize, SectionStyle, SectionVariant,
    SelectStyle, StackStyle, TextColor, TextSize, TextStyle, TextWeight,
};
use crate::{ComponentKind, UiError};

mod controls;
mod data_display;
mod layout;

pub use controls::{Button, Input, Select};
pub use data_display::{
    Alert, Badge, BadgeGroup, Card, CardContent, CardDescription, CardHeader, CardTitle, Text,
};
pub use layout::{Container, Divider, Flex, Grid, Section, Stack};

/// Extra attributes collected by `#[prop(attrs)]`.
pub type ExtraAttrs = Vec<(&'static str, Attribute)>;

/// Label, control, then either the error or the helper text.
fn field_frame(copy: &FieldCopy, control_id: Option<String>, control: View) -> View {
    let label = copy.visible_label().map(|label| {
        let label = label.to_string();
        view! { <label for=control_id class=FIELD_LABEL_CLASS>{label}</label> }
    });
    let message = match copy.visible_error() {
        Some(message) => {
            let message = message.to_string();
            Some(view! { <p class=FIELD_ERROR_CLASS>{message}</p> })
        }
        None => copy.visible_helper().map(|helper| {
            let helper = helper.to_string();
            view! { <p class=FIELD_HELPER_CLASS>{helper}</p> }
        }),
    };

    view! {
        <div class=FIELD_WRAPPER_CLASS>
            {label}
            {control}
            {message}
        </div>
    }
    .into_view()
}

fn warn_if_unlabeled(kind: ComponentKind, control_id: Option<&str>, copy: &FieldCopy) {
    if control_id.is_none() && copy.visible_label().is_none() {
        warn!(
            "{} rendered without a label or id; pass `attr:aria-label` so assistive tech can name it",
            kind.display_name()
        );
    }
}

fn aria_invalid(has_error: bool) -> Option<&'static str> {
    has_error.then_some("true")
}
