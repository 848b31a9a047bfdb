//! Framework-agnostic component shells.
//!
//! A shell pairs a resolved class string with the stable `data-ui-*` contract and the caller's
//! pass-through attributes, then hands the result to a [`RenderPrimitive`]. Shells never look
//! inside the pass-through bag.

use std::borrow::Cow;

use crate::variants::{AlertStyle, ClosedKey, InputStyle, Resolve, SelectStyle, StateFlag};
use crate::{ComponentKind, UiError};

/// Wrapper around labeled fields.
pub const FIELD_WRAPPER_CLASS: &str = "flex flex-col gap-1.5";
/// Field label text.
pub const FIELD_LABEL_CLASS: &str = "text-sm font-medium text-foreground";
/// Field error message.
pub const FIELD_ERROR_CLASS: &str = "text-xs text-destructive";
/// Field helper text, shown only without an error.
pub const FIELD_HELPER_CLASS: &str = "text-xs text-muted-foreground";
/// Optional alert heading.
pub const ALERT_TITLE_CLASS: &str = "font-semibold mb-1";

/// Attribute name, owned or borrowed.
pub type AttrName = Cow<'static, str>;

/// Ordered, opaque `(name, value)` attributes forwarded to the rendered element unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassThrough {
    attrs: Vec<(AttrName, String)>,
}

impl PassThrough {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an attribute. Duplicates are kept in insertion order.
    pub fn with(mut self, name: impl Into<AttrName>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Appends an attribute in place.
    pub fn push(&mut self, name: impl Into<AttrName>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|(name, value)| (name.as_ref(), value.as_str()))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for PassThrough
where
    N: Into<AttrName>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.push(name, value);
        }
        attrs
    }
}

/// Everything a rendering primitive needs to emit one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    /// Element tag.
    pub tag: &'static str,
    /// Resolved class string. Empty means no `class` attribute.
    pub class: String,
    /// Attributes owned by the shell (`id`, `data-ui-*`, native state attributes).
    pub managed: Vec<(AttrName, String)>,
    /// Caller attributes, emitted after the managed ones.
    pub pass_through: PassThrough,
}

impl ElementSpec {
    /// Bare element with a class and nothing else.
    pub fn new(tag: &'static str, class: impl Into<String>) -> Self {
        Self {
            tag,
            class: class.into(),
            managed: Vec::new(),
            pass_through: PassThrough::new(),
        }
    }

    /// Adds a shell-owned attribute.
    pub fn managed(mut self, name: impl Into<AttrName>, value: impl Into<String>) -> Self {
        self.managed.push((name.into(), value.into()));
        self
    }

    /// Looks up an attribute by name, managed attributes first.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.managed
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value.as_str())
            .or_else(|| {
                self.pass_through
                    .iter()
                    .find(|(candidate, _)| *candidate == name)
                    .map(|(_, value)| value)
            })
    }
}

/// Rendering backend the shells are generic over.
pub trait RenderPrimitive {
    /// Rendered node type.
    type Node;

    /// Emits one element with its children.
    fn element(&self, spec: ElementSpec, children: Vec<Self::Node>) -> Self::Node;

    /// Emits a text node.
    fn text(&self, text: &str) -> Self::Node;
}

/// Resolution-relevant style plus the opaque pass-through bag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellProps<S> {
    /// Style resolved into the class string.
    pub style: S,
    /// Attributes forwarded unchanged.
    pub attrs: PassThrough,
}

impl<S: Resolve> ShellProps<S> {
    /// Props with no pass-through attributes.
    pub fn new(style: S) -> Self {
        Self {
            style,
            attrs: PassThrough::new(),
        }
    }

    /// Replaces the pass-through bag.
    pub fn attrs(mut self, attrs: PassThrough) -> Self {
        self.attrs = attrs;
        self
    }

    /// Element description for this render: tag, resolved class, `data-ui-*` contract, and
    /// the ARIA attributes the kind owns.
    pub fn spec(self) -> ElementSpec {
        let kind = self.style.kind();
        let selected = self.style.selected_keys();
        let mut spec = ElementSpec::new(kind.element(), self.style.resolve())
            .managed("data-ui-kind", kind.key());
        for (dimension, key) in &selected {
            spec = spec.managed(format!("data-ui-{dimension}"), *key);
        }
        for (name, value) in kind.aria_attrs(&selected) {
            spec = spec.managed(name, value);
        }
        for flag in self.style.active_states() {
            if flag == StateFlag::Disabled {
                spec = spec.managed("disabled", "");
            }
        }
        spec.pass_through = self.attrs;
        spec
    }

    /// Renders the element with `children`.
    pub fn render<R: RenderPrimitive>(self, renderer: &R, children: Vec<R::Node>) -> R::Node {
        renderer.element(self.spec(), children)
    }
}

/// Copy and identity of a labeled field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCopy {
    /// Explicit element id. Wins over the derived one.
    ///
    /// This is the only id channel for labeled fields: the label's `for` is bound to it, and an
    /// `id` passed through [`PassThrough`] is forwarded as a second attribute, not merged.
    pub id: Option<String>,
    /// Label text.
    pub label: Option<String>,
    /// Error message. Setting it activates the `has-error` flag.
    pub error: Option<String>,
    /// Helper text, suppressed while an error is shown.
    pub helper_text: Option<String>,
}

impl FieldCopy {
    /// Field with a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Sets the explicit id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the error message.
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Sets the helper text.
    pub fn helper_text(mut self, helper_text: impl Into<String>) -> Self {
        self.helper_text = Some(helper_text.into());
        self
    }

    /// Whether the error message is set and non-blank.
    pub fn has_error(&self) -> bool {
        self.visible_error().is_some()
    }

    /// Control id: explicit id, else `<kind>-<slug(label)>`, else none.
    pub fn control_id(&self, kind: ComponentKind) -> Option<String> {
        if let Some(id) = non_blank(self.id.as_deref()) {
            return Some(id.to_string());
        }
        let slug = slugify(non_blank(self.label.as_deref())?);
        if slug.is_empty() {
            return None;
        }
        Some(format!("{}-{slug}", kind.key()))
    }

    /// Label text to display, if any.
    pub fn visible_label(&self) -> Option<&str> {
        non_blank(self.label.as_deref())
    }

    /// Error message to display, if any.
    pub fn visible_error(&self) -> Option<&str> {
        non_blank(self.error.as_deref())
    }

    /// Helper text to display, if any.
    pub fn visible_helper(&self) -> Option<&str> {
        if self.has_error() {
            return None;
        }
        non_blank(self.helper_text.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

/// Lowercase ASCII slug: alphanumerics kept, every other run collapsed to one `-`.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// One `<option>` of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value.
    pub value: String,
    /// Visible label.
    pub label: String,
}

impl SelectOption {
    /// Option with a value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

fn field_frame<R: RenderPrimitive>(
    renderer: &R,
    copy: &FieldCopy,
    id: Option<&str>,
    control: R::Node,
) -> R::Node {
    let mut children = Vec::with_capacity(3);
    if let Some(label) = copy.visible_label() {
        let mut spec = ElementSpec::new("label", FIELD_LABEL_CLASS);
        if let Some(id) = id {
            spec = spec.managed("for", id);
        }
        children.push(renderer.element(spec, vec![renderer.text(label)]));
    }
    children.push(control);
    if let Some(error) = copy.visible_error() {
        children.push(renderer.element(
            ElementSpec::new("p", FIELD_ERROR_CLASS),
            vec![renderer.text(error)],
        ));
    } else if let Some(helper) = copy.visible_helper() {
        children.push(renderer.element(
            ElementSpec::new("p", FIELD_HELPER_CLASS),
            vec![renderer.text(helper)],
        ));
    }
    renderer.element(ElementSpec::new("div", FIELD_WRAPPER_CLASS), children)
}

/// Puts the control id first among the managed attributes. The pass-through bag is left as is.
fn with_id(mut spec: ElementSpec, id: Option<&str>, has_error: bool) -> ElementSpec {
    if let Some(id) = id {
        spec.managed.insert(0, ("id".into(), id.to_string()));
    }
    if has_error {
        spec = spec.managed("aria-invalid", "true");
    }
    spec
}

/// Renders a labeled text input.
pub fn render_input<R: RenderPrimitive>(
    renderer: &R,
    copy: &FieldCopy,
    mut props: ShellProps<InputStyle>,
) -> R::Node {
    props.style.has_error |= copy.has_error();
    let has_error = props.style.has_error;
    let id = copy.control_id(ComponentKind::Input);
    let control = renderer.element(with_id(props.spec(), id.as_deref(), has_error), Vec::new());
    field_frame(renderer, copy, id.as_deref(), control)
}

/// Renders a labeled select. The option whose value equals `selected` carries the `selected`
/// attribute.
///
/// # Errors
///
/// Returns [`UiError::MissingOptions`] when `options` is empty.
pub fn render_select<R: RenderPrimitive>(
    renderer: &R,
    copy: &FieldCopy,
    options: &[SelectOption],
    selected: Option<&str>,
    mut props: ShellProps<SelectStyle>,
) -> Result<R::Node, UiError> {
    if options.is_empty() {
        return Err(UiError::MissingOptions {
            kind: ComponentKind::Select.key(),
        });
    }
    props.style.has_error |= copy.has_error();
    let has_error = props.style.has_error;
    let id = copy.control_id(ComponentKind::Select);
    let items = options
        .iter()
        .map(|option| {
            let mut spec = ElementSpec::new("option", "").managed("value", option.value.clone());
            if selected == Some(option.value.as_str()) {
                spec = spec.managed("selected", "");
            }
            renderer.element(spec, vec![renderer.text(&option.label)])
        })
        .collect();
    let control = renderer.element(with_id(props.spec(), id.as_deref(), has_error), items);
    Ok(field_frame(renderer, copy, id.as_deref(), control))
}

/// Renders an alert with an optional heading before `children`.
pub fn render_alert<R: RenderPrimitive>(
    renderer: &R,
    title: Option<&str>,
    props: ShellProps<AlertStyle>,
    children: Vec<R::Node>,
) -> R::Node {
    let mut content = Vec::with_capacity(children.len() + 1);
    if let Some(title) = non_blank(title) {
        content.push(renderer.element(
            ElementSpec::new("h4", ALERT_TITLE_CLASS),
            vec![renderer.text(title)],
        ));
    }
    content.extend(children);
    props.render(renderer, content)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::variants::{ButtonStyle, ButtonVariant};

    #[test]
    fn slug_collapses_separators_and_lowercases() {
        assert_eq!(slugify("Email Address"), "email-address");
        assert_eq!(slugify("  Full   name (legal) "), "full-name-legal");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn explicit_id_wins_over_label() {
        let copy = FieldCopy::labeled("Email").id("signup-email");
        assert_eq!(
            copy.control_id(ComponentKind::Input),
            Some("signup-email".to_string())
        );
    }

    #[test]
    fn id_is_derived_from_label_per_kind() {
        let copy = FieldCopy::labeled("Country of residence");
        assert_eq!(
            copy.control_id(ComponentKind::Select),
            Some("select-country-of-residence".to_string())
        );
        assert_eq!(FieldCopy::default().control_id(ComponentKind::Input), None);
    }

    #[test]
    fn helper_text_is_hidden_while_an_error_is_shown() {
        let copy = FieldCopy::labeled("Email").helper_text("We never share it");
        assert_eq!(copy.visible_helper(), Some("We never share it"));
        let copy = copy.error("Invalid email");
        assert_eq!(copy.visible_helper(), None);
    }

    #[test]
    fn spec_carries_kind_dimension_and_disabled_contract() {
        let spec = ShellProps::new(ButtonStyle {
            variant: ButtonVariant::Outline,
            disabled: true,
            ..ButtonStyle::default()
        })
        .attrs(PassThrough::new().with("type", "submit"))
        .spec();
        assert_eq!(spec.tag, "button");
        assert_eq!(spec.class, "btn btn-outline btn-md btn-disabled");
        assert_eq!(spec.attr("data-ui-kind"), Some("button"));
        assert_eq!(spec.attr("data-ui-variant"), Some("outline"));
        assert_eq!(spec.attr("data-ui-size"), Some("md"));
        assert_eq!(spec.attr("disabled"), Some(""));
        assert_eq!(spec.attr("type"), Some("submit"));
    }

    #[test]
    fn explicit_field_id_is_the_control_id() {
        let spec = with_id(
            ShellProps::new(InputStyle::default()).spec(),
            FieldCopy::labeled("Email").id("mine").control_id(ComponentKind::Input).as_deref(),
            false,
        );
        let ids: Vec<_> = spec
            .managed
            .iter()
            .filter(|(name, _)| name == "id")
            .map(|(_, value)| value.as_str())
            .collect();
        assert_eq!(ids, vec!["mine"]);
    }

    #[test]
    fn divider_spec_carries_separator_role() {
        let spec = ShellProps::new(crate::variants::DividerStyle {
            orientation: crate::variants::DividerOrientation::Vertical,
            ..Default::default()
        })
        .spec();
        assert_eq!(spec.attr("role"), Some("separator"));
        assert_eq!(spec.attr("aria-orientation"), Some("vertical"));
        assert_eq!(spec.attr("data-ui-orientation"), Some("vertical"));
    }

    #[test]
    fn pass_through_keeps_order_and_duplicates() {
        let attrs: PassThrough = [("data-x", "1"), ("aria-label", "Close"), ("data-x", "2")]
            .into_iter()
            .collect();
        assert_eq!(
            attrs.iter().collect::<Vec<_>>(),
            vec![("data-x", "1"), ("aria-label", "Close"), ("data-x", "2")]
        );
    }
}
