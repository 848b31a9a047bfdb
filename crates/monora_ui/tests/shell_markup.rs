use monora_ui::{
    render_alert, render_input, render_select, AlertStyle, AlertVariant, ButtonSize, ButtonStyle,
    ButtonVariant, CardPart, CardStyle, ContainerStyle, DividerStyle, FieldCopy, InputStyle,
    MarkupPrimitive, PassThrough, RenderPrimitive, SelectOption, SelectStyle, ShellProps, UiError,
};
use pretty_assertions::assert_eq;

const HTML: MarkupPrimitive = MarkupPrimitive;

#[test]
fn button_shell_emits_contract_then_pass_through() {
    let props = ShellProps::new(ButtonStyle {
        variant: ButtonVariant::Destructive,
        size: ButtonSize::Lg,
        full_width: true,
        class: Some("mt-4".into()),
        ..ButtonStyle::default()
    })
    .attrs(PassThrough::new().with("type", "submit").with("aria-label", "Delete file"));

    assert_eq!(
        props.render(&HTML, vec![HTML.text("Delete")]),
        "<button class=\"btn btn-destructive btn-lg w-full mt-4\" data-ui-kind=\"button\" \
         data-ui-variant=\"destructive\" data-ui-size=\"lg\" type=\"submit\" \
         aria-label=\"Delete file\">Delete</button>"
    );
}

#[test]
fn disabled_button_gets_native_attribute() {
    let html = ShellProps::new(ButtonStyle {
        disabled: true,
        ..ButtonStyle::default()
    })
    .render(&HTML, Vec::new());
    assert_eq!(
        html,
        "<button class=\"btn btn-primary btn-md btn-disabled\" data-ui-kind=\"button\" \
         data-ui-variant=\"primary\" data-ui-size=\"md\" disabled></button>"
    );
}

#[test]
fn input_with_error_hides_helper_and_binds_label() {
    let copy = FieldCopy::labeled("Email")
        .error("Invalid email")
        .helper_text("We never share it");
    let props = ShellProps::new(InputStyle::default())
        .attrs(PassThrough::new().with("placeholder", "your@email.com"));

    assert_eq!(
        render_input(&HTML, &copy, props),
        "<div class=\"flex flex-col gap-1.5\">\
         <label class=\"text-sm font-medium text-foreground\" for=\"input-email\">Email</label>\
         <input class=\"input-base border-destructive focus-visible:ring-destructive\" \
         id=\"input-email\" data-ui-kind=\"input\" aria-invalid=\"true\" \
         placeholder=\"your@email.com\">\
         <p class=\"text-xs text-destructive\">Invalid email</p>\
         </div>"
    );
}

#[test]
fn input_without_label_or_id_has_no_id() {
    let copy = FieldCopy::default().helper_text("Optional");
    assert_eq!(
        render_input(&HTML, &copy, ShellProps::new(InputStyle::default())),
        "<div class=\"flex flex-col gap-1.5\">\
         <input class=\"input-base\" data-ui-kind=\"input\">\
         <p class=\"text-xs text-muted-foreground\">Optional</p>\
         </div>"
    );
}

#[test]
fn repeated_renders_produce_the_same_ids() {
    let copy = FieldCopy::labeled("Shipping address");
    let first = render_input(&HTML, &copy, ShellProps::new(InputStyle::default()));
    let second = render_input(&HTML, &copy, ShellProps::new(InputStyle::default()));
    assert_eq!(first, second);
    assert!(first.contains("id=\"input-shipping-address\""));
}

#[test]
fn select_renders_options_in_order() {
    let copy = FieldCopy::labeled("Plan").id("plan");
    let options = [
        SelectOption::new("free", "Free"),
        SelectOption::new("pro", "Pro & Teams"),
    ];
    let html = render_select(
        &HTML,
        &copy,
        &options,
        None,
        ShellProps::new(SelectStyle::default()),
    )
    .expect("options are present");
    assert_eq!(
        html,
        "<div class=\"flex flex-col gap-1.5\">\
         <label class=\"text-sm font-medium text-foreground\" for=\"plan\">Plan</label>\
         <select class=\"input-base\" id=\"plan\" data-ui-kind=\"select\">\
         <option value=\"free\">Free</option>\
         <option value=\"pro\">Pro &amp; Teams</option>\
         </select>\
         </div>"
    );
}

#[test]
fn select_marks_the_initial_option() {
    let options = [
        SelectOption::new("free", "Free"),
        SelectOption::new("pro", "Pro"),
    ];
    let html = render_select(
        &HTML,
        &FieldCopy::labeled("Plan"),
        &options,
        Some("pro"),
        ShellProps::new(SelectStyle::default()),
    )
    .expect("options are present");
    assert!(html.contains("<option value=\"free\">Free</option>"));
    assert!(html.contains("<option value=\"pro\" selected>Pro</option>"));

    let unmatched = render_select(
        &HTML,
        &FieldCopy::labeled("Plan"),
        &options,
        Some("enterprise"),
        ShellProps::new(SelectStyle::default()),
    )
    .expect("options are present");
    assert!(!unmatched.contains("selected"));
}

#[test]
fn labeled_field_emits_a_single_explicit_id() {
    let html = render_input(
        &HTML,
        &FieldCopy::labeled("Email").id("signup-email"),
        ShellProps::new(InputStyle::default()),
    );
    assert_eq!(html.matches(" id=").count(), 1);
    assert!(html.contains("for=\"signup-email\""));
}

#[test]
fn select_without_options_is_rejected() {
    let err = render_select(
        &HTML,
        &FieldCopy::labeled("Plan"),
        &[],
        None,
        ShellProps::new(SelectStyle::default()),
    )
    .expect_err("empty option list");
    assert_eq!(err, UiError::MissingOptions { kind: "select" });
}

#[test]
fn alert_title_precedes_children() {
    let props = ShellProps::new(AlertStyle {
        variant: AlertVariant::Warning,
        class: None,
    });
    assert_eq!(
        render_alert(&HTML, Some("Heads up"), props, vec![HTML.text("Disk almost full")]),
        "<div class=\"alert alert-warning\" data-ui-kind=\"alert\" data-ui-type=\"warning\">\
         <h4 class=\"font-semibold mb-1\">Heads up</h4>Disk almost full</div>"
    );
}

#[test]
fn card_regions_nest_without_sharing_state() {
    let region = |part, children| ShellProps::new(CardStyle::part(part)).render(&HTML, children);
    let header = region(
        CardPart::Header,
        vec![
            region(CardPart::Title, vec![HTML.text("Usage")]),
            region(CardPart::Description, vec![HTML.text("Last 30 days")]),
        ],
    );
    let card = region(CardPart::Root, vec![header]);
    assert_eq!(
        card,
        "<div class=\"card\" data-ui-kind=\"card\">\
         <div class=\"card-header\" data-ui-kind=\"card-header\">\
         <h2 class=\"card-title\" data-ui-kind=\"card-title\">Usage</h2>\
         <p class=\"card-description\" data-ui-kind=\"card-description\">Last 30 days</p>\
         </div></div>"
    );
}

#[test]
fn layout_shells_without_base_class_start_at_their_dimension() {
    assert_eq!(
        ShellProps::new(ContainerStyle::default()).render(&HTML, Vec::new()),
        "<div class=\"container-max\" data-ui-kind=\"container\" data-ui-size=\"max\"></div>"
    );
    assert_eq!(
        ShellProps::new(DividerStyle::default()).render(&HTML, Vec::new()),
        "<div class=\"divider\" data-ui-kind=\"divider\" data-ui-orientation=\"horizontal\" \
         role=\"separator\" aria-orientation=\"horizontal\"></div>"
    );
}
