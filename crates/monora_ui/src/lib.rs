//! Monora component styling toolkit.
//!
//! The crate turns a component kind plus a small set of closed style attributes into a
//! deterministic utility-class string, wraps that string in framework-agnostic shells with a
//! stable `data-ui-*` contract, and publishes a consistency manifest generated from the same
//! resolution tables. Leptos components in [`primitives`] sit on top of the resolver.
//!
//! Resolution order is fixed: base class, variant, size, further dimensions, active state
//! flags, then the caller's class verbatim.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class_list;
mod docs;
mod error;
mod kind;
mod manifest;
mod markup;
pub mod primitives;
mod shell;
pub mod variants;

pub use class_list::ClassList;
pub use design_tokens::{ThemeMode, ThemeSource};
pub use error::{InvalidKey, UiError};
pub use kind::ComponentKind;
pub use manifest::{
    describe, manifest, verify_descriptors, verify_manifest, AccessibilityNote,
    ComponentDescriptor, ConsistencyIssue, DarkModeNotes, DesignManifest, DimensionDescriptor,
    DimensionValue, Overview, PropNote, StateDescriptor, UtilityGroup, UtilityNote,
};
pub use markup::MarkupPrimitive;
pub use shell::{
    render_alert, render_input, render_select, slugify, AttrName, ElementSpec, FieldCopy,
    PassThrough, RenderPrimitive, SelectOption, ShellProps, ALERT_TITLE_CLASS,
    FIELD_ERROR_CLASS, FIELD_HELPER_CLASS, FIELD_LABEL_CLASS, FIELD_WRAPPER_CLASS,
};
pub use variants::{
    resolve_kind, AlertStyle, AlertVariant, BadgeGroupStyle, BadgeStyle, BadgeVariant,
    ButtonSize, ButtonStyle, ButtonVariant, CardPart, CardStyle, ClassTable, ClosedKey,
    ContainerSize, ContainerStyle, Dimension, DimensionRole, DividerOrientation, DividerStyle,
    FlexAlign, FlexDirection, FlexJustify, FlexStyle, Gap, GridCols, GridStyle, InputStyle,
    Resolve, ResolveRequest, SectionSize, SectionStyle, SectionVariant, SelectStyle, StackStyle,
    StateFlag, TextColor, TextSize, TextStyle, TextWeight,
};

/// Convenience imports for view code consuming the component set.
pub mod prelude {
    pub use crate::primitives::{
        Alert, Badge, BadgeGroup, Button, Card, CardContent, CardDescription, CardHeader,
        CardTitle, Container, Divider, Flex, Grid, Input, Section, Select, Stack, Text,
    };
    pub use crate::{
        AlertVariant, BadgeVariant, ButtonSize, ButtonVariant, ContainerSize,
        DividerOrientation, FlexAlign, FlexDirection, FlexJustify, Gap, GridCols, SectionSize,
        SectionVariant, SelectOption, TextColor, TextSize, TextWeight, ThemeMode,
    };
}
