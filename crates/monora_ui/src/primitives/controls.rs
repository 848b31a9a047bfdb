use super::*;

#[component]
/// Action button. Classes come from [`ButtonStyle`].
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(attrs)] attrs: ExtraAttrs,
    children: Children,
) -> impl IntoView {
    let class = move || {
        ButtonStyle {
            variant,
            size,
            disabled: disabled.get(),
            full_width,
            class: layout_class.clone(),
        }
        .resolve()
    };

    view! {
        <button
            type="button"
            class=class
            disabled=move || disabled.get()
            data-ui-kind=ComponentKind::Button.key()
            data-ui-variant=variant.key()
            data-ui-size=size.key()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            {..attrs}
        >
            {children()}
        </button>
    }
}

#[component]
/// Labeled single-line text field.
///
/// Without an explicit `id`, the control id is derived from the label (`input-<slug>`) so the
/// label binding is stable across renders.
pub fn Input(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] error: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] on_input: Option<Callback<Event>>,
    #[prop(attrs)] attrs: ExtraAttrs,
) -> impl IntoView {
    let copy = FieldCopy {
        id,
        label,
        error,
        helper_text,
    };
    let control_id = copy.control_id(ComponentKind::Input);
    warn_if_unlabeled(ComponentKind::Input, control_id.as_deref(), &copy);
    let has_error = copy.has_error();
    let class = InputStyle {
        has_error,
        class: layout_class,
    }
    .resolve();

    let control = view! {
        <input
            id=control_id.clone()
            class=class
            aria-invalid=aria_invalid(has_error)
            disabled=move || disabled.get()
            prop:value=move || value.get()
            data-ui-kind=ComponentKind::Input.key()
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
            {..attrs}
        />
    }
    .into_view();

    field_frame(&copy, control_id, control)
}

#[component]
/// Labeled choice field.
///
/// `value` selects the matching option. An empty option list is rejected with
/// [`UiError::MissingOptions`]; the error is logged and handed to the nearest error boundary.
pub fn Select(
    #[prop(into)] options: Vec<SelectOption>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] error: Option<String>,
    #[prop(optional, into)] helper_text: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] on_change: Option<Callback<Event>>,
    #[prop(attrs)] attrs: ExtraAttrs,
) -> impl IntoView {
    let options = match checked_options(options) {
        Ok(options) => options,
        Err(err) => return Err::<View, UiError>(err),
    };

    let copy = FieldCopy {
        id,
        label,
        error,
        helper_text,
    };
    let control_id = copy.control_id(ComponentKind::Select);
    warn_if_unlabeled(ComponentKind::Select, control_id.as_deref(), &copy);
    let has_error = copy.has_error();
    let class = SelectStyle {
        has_error,
        class: layout_class,
    }
    .resolve();

    let control = view! {
        <select
            id=control_id.clone()
            class=class
            aria-invalid=aria_invalid(has_error)
            disabled=move || disabled.get()
            data-ui-kind=ComponentKind::Select.key()
            on:change=move |ev| {
                if let Some(on_change) = on_change.as_ref() {
                    on_change.call(ev);
                }
            }
            {..attrs}
        >
            {options
                .into_iter()
                .map(|option| {
                    let value = value.clone();
                    let option_value = option.value.clone();
                    view! {
                        <option
                            value=option.value
                            prop:selected=move || value.with(|current| *current == option_value)
                        >
                            {option.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
    .into_view();

    Ok::<View, UiError>(field_frame(&copy, control_id, control))
}

fn checked_options(options: Vec<SelectOption>) -> Result<Vec<SelectOption>, UiError> {
    if options.is_empty() {
        let err = UiError::MissingOptions {
            kind: ComponentKind::Select.key(),
        };
        error!("{err}");
        return Err(err);
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[allow(dead_code)]
    fn select_without_options() -> impl IntoView {
        view! { <Select options={Vec::<SelectOption>::new()} label="Plan" /> }
    }

    #[allow(dead_code)]
    fn select_with_initial_value() -> impl IntoView {
        view! {
            <Select
                options=vec![SelectOption::new("free", "Free"), SelectOption::new("pro", "Pro")]
                label="Plan"
                value="pro".to_string()
            />
        }
    }

    #[test]
    fn empty_option_list_is_rejected() {
        assert_eq!(
            checked_options(Vec::new()),
            Err(UiError::MissingOptions { kind: "select" })
        );
    }

    #[test]
    fn non_empty_option_list_passes_unchanged() {
        let options = vec![SelectOption::new("free", "Free")];
        assert_eq!(checked_options(options.clone()), Ok(options));
    }
}
