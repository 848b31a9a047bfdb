//! Consistency manifest: documentation descriptors generated from the resolver tables.
//!
//! Descriptors are built from the same closed enums the resolver matches on, so the published
//! key sets cannot drift from what [`ComponentKind::resolve`] accepts. [`verify_manifest`] still
//! re-checks every descriptor against the resolver so a broken table fails tests and
//! `cargo xtask check`.

use std::collections::HashSet;

use design_tokens::{registry, ThemeMode, TokenRegistry};
use serde::Serialize;
use thiserror::Error;

use crate::docs;
use crate::variants::{ClosedKey, DimensionRole, ResolveRequest, StateFlag};
use crate::ComponentKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One key of a dimension and the class token group it resolves to.
pub struct DimensionValue {
    /// Key string.
    pub key: &'static str,
    /// Class token group.
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Published shape of one dimension.
pub struct DimensionDescriptor {
    /// Dimension name.
    pub name: &'static str,
    /// Emission role.
    pub role: DimensionRole,
    /// Keys in declaration order.
    pub values: Vec<DimensionValue>,
    /// Key used when the dimension is omitted.
    pub default: &'static str,
}

impl DimensionDescriptor {
    /// Key strings in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.values.iter().map(|value| value.key).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A state flag a kind supports.
pub struct StateDescriptor {
    /// Flag key.
    pub flag: &'static str,
    /// Token group added when active.
    pub class: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Usage note for one component property.
pub struct PropNote {
    /// Property name.
    pub name: &'static str,
    /// What it does and its default.
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Documentation record for one component kind.
pub struct ComponentDescriptor {
    /// Kind key.
    pub kind: &'static str,
    /// View-layer component name.
    pub name: &'static str,
    /// Rendered element tag.
    pub element: &'static str,
    /// Base class token, possibly empty.
    pub base_class: &'static str,
    /// One-line summary.
    pub summary: &'static str,
    /// Dimensions in emission order.
    pub dimensions: Vec<DimensionDescriptor>,
    /// Supported state flags in declaration order.
    pub states: Vec<StateDescriptor>,
    /// Property usage notes.
    pub props: Vec<PropNote>,
    /// Canonical usage example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'static str>,
    /// Sub-region kinds of a composite component.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Manifest header.
pub struct Overview {
    /// Design system name.
    pub title: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Library version.
    pub version: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// How light and dark palettes are selected.
pub struct DarkModeNotes {
    /// Supported modes.
    pub modes: Vec<&'static str>,
    /// Class placed on the document root in dark mode.
    pub root_class: &'static str,
    /// Default detection signal.
    pub detection: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A named utility class.
pub struct UtilityNote {
    /// Class name.
    pub class: &'static str,
    /// What it expands to.
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Related utility classes.
pub struct UtilityGroup {
    /// Group name.
    pub group: &'static str,
    /// Utilities in the group.
    pub utilities: Vec<UtilityNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Accessibility commitment.
pub struct AccessibilityNote {
    /// Topic key.
    pub topic: &'static str,
    /// Commitment text.
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Full documentation export.
pub struct DesignManifest {
    /// Header.
    pub overview: Overview,
    /// Theme switching notes.
    pub dark_mode: DarkModeNotes,
    /// Every component kind in declaration order.
    pub components: Vec<ComponentDescriptor>,
    /// Design-token snapshot.
    pub tokens: &'static TokenRegistry,
    /// Utility classes.
    pub utilities: Vec<UtilityGroup>,
    /// Usage guidance.
    pub best_practices: Vec<&'static str>,
    /// Accessibility commitments.
    pub accessibility: Vec<AccessibilityNote>,
}

impl DesignManifest {
    /// Descriptor for a kind key.
    pub fn component(&self, kind: &str) -> Option<&ComponentDescriptor> {
        self.components
            .iter()
            .find(|descriptor| descriptor.kind == kind)
    }

    /// Pretty-printed JSON export.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Compact JSON export.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Builds the descriptor for one kind from its resolution tables.
pub fn describe(kind: ComponentKind) -> ComponentDescriptor {
    let dimensions = kind
        .dimensions()
        .iter()
        .map(|dimension| DimensionDescriptor {
            name: dimension.name,
            role: dimension.role,
            values: dimension
                .keys()
                .into_iter()
                .map(|key| DimensionValue {
                    key,
                    class: dimension.token(key).unwrap_or_default(),
                })
                .collect(),
            default: dimension.default_key(),
        })
        .collect();
    let states = StateFlag::ALL
        .iter()
        .filter_map(|flag| {
            kind.state_token(*flag).map(|class| StateDescriptor {
                flag: flag.key(),
                class,
            })
        })
        .collect();
    let parts = if kind == ComponentKind::Card {
        ComponentKind::ALL
            .iter()
            .filter(|part| part.is_card_part() && **part != ComponentKind::Card)
            .map(|part| part.key())
            .collect()
    } else {
        Vec::new()
    };
    let docs = docs::kind_docs(kind);

    ComponentDescriptor {
        kind: kind.key(),
        name: kind.display_name(),
        element: kind.element(),
        base_class: kind.base_class(),
        summary: docs.summary,
        dimensions,
        states,
        props: docs
            .props
            .iter()
            .map(|&(name, description)| PropNote { name, description })
            .collect(),
        example: docs.example,
        parts,
    }
}

/// Builds the full documentation export.
pub fn manifest() -> DesignManifest {
    DesignManifest {
        overview: Overview {
            title: docs::TITLE,
            description: docs::DESCRIPTION,
            version: docs::VERSION,
        },
        dark_mode: DarkModeNotes {
            modes: ThemeMode::ALL.iter().map(|mode| mode.key()).collect(),
            root_class: ThemeMode::Dark.root_class(),
            detection: docs::DARK_MODE_DETECTION,
        },
        components: ComponentKind::ALL.iter().copied().map(describe).collect(),
        tokens: registry(),
        utilities: docs::UTILITIES
            .iter()
            .map(|&(group, utilities)| UtilityGroup {
                group,
                utilities: utilities
                    .iter()
                    .map(|&(class, description)| UtilityNote { class, description })
                    .collect(),
            })
            .collect(),
        best_practices: docs::BEST_PRACTICES.to_vec(),
        accessibility: docs::ACCESSIBILITY
            .iter()
            .map(|&(topic, note)| AccessibilityNote { topic, note })
            .collect(),
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A divergence between a published descriptor and the resolver.
pub enum ConsistencyIssue {
    /// Descriptor names a kind the resolver does not know.
    #[error("descriptor `{kind}` does not name a component kind")]
    UnknownKind {
        /// Descriptor kind key.
        kind: String,
    },
    /// Descriptor dimensions differ from the resolver's.
    #[error("{kind}: published dimensions [{published}] differ from resolver dimensions [{resolver}]")]
    DimensionSet {
        /// Kind key.
        kind: String,
        /// Published names, comma-separated.
        published: String,
        /// Resolver names, comma-separated.
        resolver: String,
    },
    /// Published keys differ from the keys the resolver accepts.
    #[error("{kind}.{dimension}: published keys [{published}] differ from accepted keys [{accepted}]")]
    KeySet {
        /// Kind key.
        kind: String,
        /// Dimension name.
        dimension: String,
        /// Published keys, `|`-separated.
        published: String,
        /// Accepted keys, `|`-separated.
        accepted: String,
    },
    /// A key maps to an empty token group.
    #[error("{kind}.{dimension}: key `{key}` has no class token")]
    EmptyToken {
        /// Kind key.
        kind: String,
        /// Dimension name.
        dimension: String,
        /// Offending key.
        key: String,
    },
    /// Two keys of one dimension share a token group.
    #[error("{kind}.{dimension}: token `{class}` is used by more than one key")]
    DuplicateToken {
        /// Kind key.
        kind: String,
        /// Dimension name.
        dimension: String,
        /// Shared token group.
        class: String,
    },
    /// Default key is not in the key set.
    #[error("{kind}.{dimension}: default `{default}` is not a declared key")]
    UndeclaredDefault {
        /// Kind key.
        kind: String,
        /// Dimension name.
        dimension: String,
        /// Published default.
        default: String,
    },
    /// Dimensions are not listed variant, size, then modifiers.
    #[error("{kind}: dimension `{dimension}` is out of emission order")]
    RoleOrder {
        /// Kind key.
        kind: String,
        /// First out-of-order dimension.
        dimension: String,
    },
    /// Resolving a published key does not produce the published token.
    #[error("{kind}: resolving {dimension}={key} yields `{resolved}`, expected token `{class}`")]
    TokenNotApplied {
        /// Kind key.
        kind: String,
        /// Dimension name.
        dimension: String,
        /// Published key.
        key: String,
        /// Published token group.
        class: String,
        /// Actual resolver output.
        resolved: String,
    },
    /// Published state flags differ from the resolver's, or a flag's token is not applied.
    #[error("{kind}: state `{flag}` does not match the resolver ({detail})")]
    State {
        /// Kind key.
        kind: String,
        /// Flag key.
        flag: String,
        /// What diverged.
        detail: String,
    },
}

/// Checks the generated manifest against the resolver.
///
/// # Errors
///
/// Returns every divergence found, not just the first.
pub fn verify_manifest() -> Result<(), Vec<ConsistencyIssue>> {
    verify_descriptors(&manifest().components)
}

/// Checks arbitrary descriptors against the resolver.
///
/// # Errors
///
/// Returns every divergence found, not just the first.
pub fn verify_descriptors(descriptors: &[ComponentDescriptor]) -> Result<(), Vec<ConsistencyIssue>> {
    let mut issues = Vec::new();
    for descriptor in descriptors {
        check_descriptor(descriptor, &mut issues);
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn check_descriptor(descriptor: &ComponentDescriptor, issues: &mut Vec<ConsistencyIssue>) {
    let kind_key = descriptor.kind.to_string();
    let Ok(kind) = ComponentKind::parse(descriptor.kind) else {
        issues.push(ConsistencyIssue::UnknownKind { kind: kind_key });
        return;
    };

    let published: Vec<_> = descriptor.dimensions.iter().map(|d| d.name).collect();
    let resolver: Vec<_> = kind.dimensions().iter().map(|d| d.name).collect();
    if published != resolver {
        issues.push(ConsistencyIssue::DimensionSet {
            kind: kind_key.clone(),
            published: published.join(", "),
            resolver: resolver.join(", "),
        });
    }

    let mut last_role = DimensionRole::Variant;
    for dimension in &descriptor.dimensions {
        if role_rank(dimension.role) < role_rank(last_role) {
            issues.push(ConsistencyIssue::RoleOrder {
                kind: kind_key.clone(),
                dimension: dimension.name.to_string(),
            });
        }
        last_role = dimension.role;
        check_dimension(kind, dimension, issues);
    }

    check_states(kind, descriptor, issues);
}

fn role_rank(role: DimensionRole) -> u8 {
    match role {
        DimensionRole::Variant => 0,
        DimensionRole::Size => 1,
        DimensionRole::Modifier => 2,
    }
}

fn check_dimension(
    kind: ComponentKind,
    dimension: &DimensionDescriptor,
    issues: &mut Vec<ConsistencyIssue>,
) {
    let kind_key = kind.key().to_string();
    let Some(erased) = kind.dimension(dimension.name) else {
        return;
    };

    let published = dimension.keys();
    let accepted = erased.keys();
    if published != accepted {
        issues.push(ConsistencyIssue::KeySet {
            kind: kind_key.clone(),
            dimension: dimension.name.to_string(),
            published: published.join("|"),
            accepted: accepted.join("|"),
        });
    }

    if !published.contains(&dimension.default) {
        issues.push(ConsistencyIssue::UndeclaredDefault {
            kind: kind_key.clone(),
            dimension: dimension.name.to_string(),
            default: dimension.default.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for value in &dimension.values {
        if value.class.trim().is_empty() {
            issues.push(ConsistencyIssue::EmptyToken {
                kind: kind_key.clone(),
                dimension: dimension.name.to_string(),
                key: value.key.to_string(),
            });
            continue;
        }
        if !seen.insert(value.class) {
            issues.push(ConsistencyIssue::DuplicateToken {
                kind: kind_key.clone(),
                dimension: dimension.name.to_string(),
                class: value.class.to_string(),
            });
        }

        let request = ResolveRequest::new().with(dimension.name, value.key);
        let resolved = kind.resolve(&request).unwrap_or_else(|err| err.to_string());
        if !contains_group(&resolved, value.class) {
            issues.push(ConsistencyIssue::TokenNotApplied {
                kind: kind_key.clone(),
                dimension: dimension.name.to_string(),
                key: value.key.to_string(),
                class: value.class.to_string(),
                resolved,
            });
        }
    }
}

fn check_states(
    kind: ComponentKind,
    descriptor: &ComponentDescriptor,
    issues: &mut Vec<ConsistencyIssue>,
) {
    let published: Vec<_> = descriptor.states.iter().map(|state| state.flag).collect();
    let supported: Vec<_> = kind.states().into_iter().map(|flag| flag.key()).collect();
    if published != supported {
        issues.push(ConsistencyIssue::State {
            kind: kind.key().to_string(),
            flag: published.join("|"),
            detail: format!("resolver supports [{}]", supported.join("|")),
        });
    }

    for state in &descriptor.states {
        let request = ResolveRequest::new().state(state.flag);
        match kind.resolve(&request) {
            Ok(resolved) if contains_group(&resolved, state.class) => {}
            Ok(resolved) => issues.push(ConsistencyIssue::State {
                kind: kind.key().to_string(),
                flag: state.flag.to_string(),
                detail: format!("resolved `{resolved}` without `{}`", state.class),
            }),
            Err(err) => issues.push(ConsistencyIssue::State {
                kind: kind.key().to_string(),
                flag: state.flag.to_string(),
                detail: err.to_string(),
            }),
        }
    }
}

fn contains_group(resolved: &str, group: &str) -> bool {
    format!(" {resolved} ").contains(&format!(" {group} "))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_manifest_is_consistent() {
        assert_eq!(verify_manifest(), Ok(()));
    }

    #[test]
    fn button_descriptor_lists_keys_defaults_and_states() {
        let descriptor = describe(ComponentKind::Button);
        assert_eq!(descriptor.element, "button");
        assert_eq!(descriptor.dimensions[0].name, "variant");
        assert_eq!(
            descriptor.dimensions[0].keys(),
            vec!["primary", "secondary", "accent", "ghost", "outline", "destructive"]
        );
        assert_eq!(descriptor.dimensions[1].default, "md");
        assert_eq!(
            descriptor.states,
            vec![
                StateDescriptor {
                    flag: "disabled",
                    class: "btn-disabled",
                },
                StateDescriptor {
                    flag: "full-width",
                    class: "w-full",
                },
            ]
        );
    }

    #[test]
    fn card_lists_its_regions() {
        assert_eq!(
            describe(ComponentKind::Card).parts,
            vec!["card-header", "card-title", "card-description", "card-content"]
        );
        assert!(describe(ComponentKind::CardTitle).parts.is_empty());
    }

    #[test]
    fn tampered_key_set_is_reported() {
        let mut descriptor = describe(ComponentKind::Badge);
        descriptor.dimensions[0].values.push(DimensionValue {
            key: "info",
            class: "badge-info",
        });
        let issues = verify_descriptors(&[descriptor]).expect_err("extra key must diverge");
        assert!(matches!(issues[0], ConsistencyIssue::KeySet { .. }));
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, ConsistencyIssue::TokenNotApplied { key, .. } if key == "info")));
    }

    #[test]
    fn empty_and_duplicate_tokens_are_reported() {
        let mut descriptor = describe(ComponentKind::Alert);
        descriptor.dimensions[0].values[1].class = "";
        descriptor.dimensions[0].values[3].class = "alert-warning";
        let issues = verify_descriptors(&[descriptor]).expect_err("tampered tokens");
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, ConsistencyIssue::EmptyToken { key, .. } if key == "success")));
        assert!(issues.iter().any(
            |issue| matches!(issue, ConsistencyIssue::DuplicateToken { class, .. } if class == "alert-warning")
        ));
    }

    #[test]
    fn undeclared_default_and_role_order_are_reported() {
        let mut descriptor = describe(ComponentKind::Button);
        descriptor.dimensions[1].default = "xl";
        descriptor.dimensions.swap(0, 1);
        let issues = verify_descriptors(&[descriptor]).expect_err("tampered dimensions");
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, ConsistencyIssue::RoleOrder { .. })));
        assert!(issues
            .iter()
            .any(|issue| matches!(issue, ConsistencyIssue::UndeclaredDefault { default, .. } if default == "xl")));
    }

    #[test]
    fn manifest_exports_json_with_tokens_and_docs() {
        let manifest = manifest();
        let json = manifest.to_json_pretty().expect("serialize manifest");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse manifest");
        assert_eq!(value["overview"]["title"], "Monora Design System");
        assert_eq!(value["dark_mode"]["root_class"], "dark");
        assert_eq!(value["components"][0]["kind"], "button");
        assert_eq!(value["components"][0]["dimensions"][0]["role"], "variant");
        assert!(value["tokens"]["entries"].as_array().is_some_and(|e| !e.is_empty()));
        assert_eq!(value["tokens"]["entries"][0]["css_var"], "--color-primary");
        assert_eq!(manifest.components.len(), ComponentKind::ALL.len());
        assert!(manifest.component("grid").is_some());
    }
}
