use super::*;
use crate::ClassList;

closed_keys! {
    /// Button emphasis variants.
    pub enum ButtonVariant in "variant", default Primary {
        /// Primary emphasized action.
        Primary => "primary",
        /// Secondary action.
        Secondary => "secondary",
        /// Accent/highlight action.
        Accent => "accent",
        /// Borderless quiet action.
        Ghost => "ghost",
        /// Outlined action.
        Outline => "outline",
        /// Destructive action.
        Destructive => "destructive",
    }
}

impl ClassTable for ButtonVariant {
    fn class_token(self) -> &'static str {
        match self {
            Self::Primary => "btn-primary",
            Self::Secondary => "btn-secondary",
            Self::Accent => "btn-accent",
            Self::Ghost => "btn-ghost",
            Self::Outline => "btn-outline",
            Self::Destructive => "btn-destructive",
        }
    }
}

closed_keys! {
    /// Button sizing.
    pub enum ButtonSize in "size", default Md {
        /// Extra small.
        Xs => "xs",
        /// Small.
        Sm => "sm",
        /// Default.
        Md => "md",
        /// Large.
        Lg => "lg",
    }
}

impl ClassTable for ButtonSize {
    fn class_token(self) -> &'static str {
        match self {
            Self::Xs => "btn-xs",
            Self::Sm => "btn-sm",
            Self::Md => "btn-md",
            Self::Lg => "btn-lg",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant button attributes.
pub struct ButtonStyle {
    /// Emphasis variant.
    pub variant: ButtonVariant,
    /// Size.
    pub size: ButtonSize,
    /// Disabled state.
    pub disabled: bool,
    /// Stretch to container width.
    pub full_width: bool,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl ButtonStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] = &[
        Dimension::of::<ButtonVariant>(DimensionRole::Variant),
        Dimension::of::<ButtonSize>(DimensionRole::Size),
    ];
}

impl Resolve for ButtonStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Button
    }

    fn resolve(&self) -> String {
        let kind = self.kind();
        ClassList::new(kind.base_class())
            .token(self.variant.class_token())
            .token(self.size.class_token())
            .token_if(self.disabled, kind.state_class(StateFlag::Disabled))
            .token_if(self.full_width, kind.state_class(StateFlag::FullWidth))
            .finish(self.class.as_deref())
    }

    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            (ButtonVariant::DIMENSION, self.variant.key()),
            (ButtonSize::DIMENSION, self.size.key()),
        ]
    }

    fn active_states(&self) -> Vec<StateFlag> {
        let mut states = Vec::new();
        if self.disabled {
            states.push(StateFlag::Disabled);
        }
        if self.full_width {
            states.push(StateFlag::FullWidth);
        }
        states
    }
}

impl FromRequest for ButtonStyle {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            variant: request.key(kind)?,
            size: request.key(kind)?,
            disabled: request.has_state(StateFlag::Disabled),
            full_width: request.has_state(StateFlag::FullWidth),
            class: request.caller_class(),
        })
    }
}

fn field_class(kind: ComponentKind, has_error: bool, class: Option<&str>) -> String {
    ClassList::new(kind.base_class())
        .token_if(has_error, kind.state_class(StateFlag::HasError))
        .finish(class)
}

fn field_states(has_error: bool) -> Vec<StateFlag> {
    if has_error {
        vec![StateFlag::HasError]
    } else {
        Vec::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant text input attributes.
pub struct InputStyle {
    /// Validation failed.
    pub has_error: bool,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl InputStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] = &[];
}

impl Resolve for InputStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Input
    }

    fn resolve(&self) -> String {
        field_class(self.kind(), self.has_error, self.class.as_deref())
    }

    fn active_states(&self) -> Vec<StateFlag> {
        field_states(self.has_error)
    }
}

impl FromRequest for InputStyle {
    fn from_request(_kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            has_error: request.has_state(StateFlag::HasError),
            class: request.caller_class(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Resolution-relevant select attributes.
pub struct SelectStyle {
    /// Validation failed.
    pub has_error: bool,
    /// Caller override, appended last.
    pub class: Option<String>,
}

impl SelectStyle {
    pub(crate) const DIMENSIONS: &'static [Dimension] = &[];
}

impl Resolve for SelectStyle {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Select
    }

    fn resolve(&self) -> String {
        field_class(self.kind(), self.has_error, self.class.as_deref())
    }

    fn active_states(&self) -> Vec<StateFlag> {
        field_states(self.has_error)
    }
}

impl FromRequest for SelectStyle {
    fn from_request(_kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError> {
        Ok(Self {
            has_error: request.has_state(StateFlag::HasError),
            class: request.caller_class(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_button_resolves_primary_md() {
        assert_eq!(ButtonStyle::default().resolve(), "btn btn-primary btn-md");
    }

    #[test]
    fn full_width_destructive_button_keeps_override_last() {
        let style = ButtonStyle {
            variant: ButtonVariant::Destructive,
            size: ButtonSize::Lg,
            full_width: true,
            class: Some("mt-4".into()),
            ..ButtonStyle::default()
        };
        assert_eq!(style.resolve(), "btn btn-destructive btn-lg w-full mt-4");
    }

    #[test]
    fn state_flags_only_add_their_own_tokens() {
        let base = ButtonStyle {
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Xs,
            ..ButtonStyle::default()
        };
        let flagged = ButtonStyle {
            disabled: true,
            full_width: true,
            ..base.clone()
        };
        assert_eq!(base.resolve(), "btn btn-ghost btn-xs");
        assert_eq!(flagged.resolve(), "btn btn-ghost btn-xs btn-disabled w-full");
        assert_eq!(base.selected_keys(), flagged.selected_keys());
    }

    #[test]
    fn input_error_adds_error_border_tokens() {
        let style = InputStyle {
            has_error: true,
            class: None,
        };
        assert_eq!(
            style.resolve(),
            "input-base border-destructive focus-visible:ring-destructive"
        );
        assert_eq!(InputStyle::default().resolve(), "input-base");
    }

    #[test]
    fn select_shares_the_field_base() {
        let style = SelectStyle {
            has_error: false,
            class: Some("w-48".into()),
        };
        assert_eq!(style.resolve(), "input-base w-48");
    }
}
