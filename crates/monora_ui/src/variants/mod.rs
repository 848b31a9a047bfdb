//! Closed attribute dimensions and the per-kind resolution tables.
//!
//! Every dimension (variant, size, gap, ...) is a closed enum declared through
//! [`closed_keys!`]. Each enum implements [`ClassTable`] with an exhaustive `match`, so a key added
//! without a class token does not compile. Style structs pair the selected keys with the state
//! flags and caller override of one render and implement [`Resolve`].

use serde::Serialize;

use crate::{ComponentKind, InvalidKey, UiError};

/// Declares a closed key set: the enum, its key strings, `ALL`, `FromStr`, and `Display`.
macro_rules! closed_keys {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $dimension:literal $(, default $default:ident)? {
            $( $(#[$vmeta:meta])* $variant:ident => $key:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant, )+
        }

        $(
            impl Default for $name {
                fn default() -> Self {
                    Self::$default
                }
            }
        )?

        impl $crate::variants::ClosedKey for $name {
            const DIMENSION: &'static str = $dimension;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key,)+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::InvalidKey;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                <Self as $crate::variants::ClosedKey>::parse(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::variants::ClosedKey::key(*self))
            }
        }
    };
}

pub(crate) use closed_keys;

mod controls;
mod display;
mod layout;

pub use controls::{ButtonSize, ButtonStyle, ButtonVariant, InputStyle, SelectStyle};
pub use display::{
    AlertStyle, AlertVariant, BadgeStyle, BadgeVariant, CardPart, CardStyle, TextColor, TextSize,
    TextStyle, TextWeight,
};
pub use layout::{
    BadgeGroupStyle, ContainerSize, ContainerStyle, DividerOrientation, DividerStyle,
    FlexAlign, FlexDirection, FlexJustify, FlexStyle, Gap, GridCols, GridStyle, SectionSize,
    SectionStyle, SectionVariant, StackStyle,
};

/// A closed, ordered set of string keys.
pub trait ClosedKey: Copy + Eq + 'static {
    /// Dimension name used in requests, errors, and the manifest.
    const DIMENSION: &'static str;
    /// Every declared key in declaration order.
    const ALL: &'static [Self];

    /// Stable key string.
    fn key(self) -> &'static str;

    /// Declared key strings in declaration order.
    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|value| value.key()).collect()
    }

    /// Parses an exact key string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKey`] for anything outside the declared set. There is no fallback.
    fn parse(raw: &str) -> Result<Self, InvalidKey> {
        Self::ALL
            .iter()
            .copied()
            .find(|value| value.key() == raw)
            .ok_or_else(|| InvalidKey {
                dimension: Self::DIMENSION,
                value: raw.to_string(),
                expected: Self::keys().join("|"),
            })
    }
}

/// Resolution table: maps every key of a closed set to exactly one class-token group.
pub trait ClassTable: ClosedKey {
    /// Class token group for this key.
    fn class_token(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
/// Position of a dimension in the fixed emission order.
pub enum DimensionRole {
    /// Variant dimension, emitted right after the base class.
    Variant,
    /// Size dimension, emitted after the variant.
    Size,
    /// Any further dimension, emitted after size in declaration order.
    Modifier,
}

/// Type-erased view of one dimension of a kind.
#[derive(Debug, Clone, Copy)]
pub struct Dimension {
    /// Dimension name.
    pub name: &'static str,
    /// Emission role.
    pub role: DimensionRole,
    keys: fn() -> Vec<&'static str>,
    default_key: fn() -> &'static str,
    token: fn(&str) -> Result<&'static str, InvalidKey>,
}

impl Dimension {
    /// Erases the closed key type `K`.
    pub const fn of<K>(role: DimensionRole) -> Self
    where
        K: ClassTable + Default,
    {
        Self {
            name: K::DIMENSION,
            role,
            keys: K::keys,
            default_key: default_key_of::<K>,
            token: token_of::<K>,
        }
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> Vec<&'static str> {
        (self.keys)()
    }

    /// Key used when a render omits this dimension.
    pub fn default_key(&self) -> &'static str {
        (self.default_key)()
    }

    /// Table lookup by key string.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKey`] when `key` is not declared.
    pub fn token(&self, key: &str) -> Result<&'static str, InvalidKey> {
        (self.token)(key)
    }
}

fn default_key_of<K: ClosedKey + Default>() -> &'static str {
    K::default().key()
}

fn token_of<K: ClassTable>(raw: &str) -> Result<&'static str, InvalidKey> {
    K::parse(raw).map(ClassTable::class_token)
}

closed_keys! {
    /// Boolean modifiers orthogonal to every dimension.
    pub enum StateFlag in "state" {
        /// Non-interactive.
        Disabled => "disabled",
        /// Stretch to the container width.
        FullWidth => "full-width",
        /// Validation failed.
        HasError => "has-error",
        /// Single-line ellipsis.
        Truncate => "truncate",
    }
}

/// A style value that resolves to an ordered class string.
///
/// Implementations emit, in order: the kind's base class, variant, size, further dimensions,
/// active state flags, and the caller override.
pub trait Resolve {
    /// Component kind this style belongs to.
    fn kind(&self) -> ComponentKind;

    /// Composes the class string. Pure and deterministic.
    fn resolve(&self) -> String;

    /// `(dimension, key)` pairs selected by this style, in emission order.
    fn selected_keys(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    /// Active state flags, in declaration order.
    fn active_states(&self) -> Vec<StateFlag> {
        Vec::new()
    }
}

/// Builds a typed style from a string-keyed [`ResolveRequest`].
pub(crate) trait FromRequest: Sized {
    fn from_request(kind: ComponentKind, request: &ResolveRequest<'_>) -> Result<Self, UiError>;
}

/// String-keyed resolution input for tooling and other untyped boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveRequest<'a> {
    values: Vec<(&'a str, &'a str)>,
    states: Vec<&'a str>,
    class: Option<&'a str>,
}

impl<'a> ResolveRequest<'a> {
    /// Empty request: every dimension at its default, no flags, no override.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `key` for `dimension`. A later selection of the same dimension wins.
    pub fn with(mut self, dimension: &'a str, key: &'a str) -> Self {
        self.values.push((dimension, key));
        self
    }

    /// Shorthand for `with("variant", key)`.
    pub fn variant(self, key: &'a str) -> Self {
        self.with("variant", key)
    }

    /// Shorthand for `with("size", key)`.
    pub fn size(self, key: &'a str) -> Self {
        self.with("size", key)
    }

    /// Activates a state flag.
    pub fn state(mut self, flag: &'a str) -> Self {
        self.states.push(flag);
        self
    }

    /// Sets the caller override class.
    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    pub(crate) fn caller_class(&self) -> Option<String> {
        self.class.map(str::to_string)
    }

    pub(crate) fn key<K>(&self, kind: ComponentKind) -> Result<K, UiError>
    where
        K: ClosedKey + Default,
    {
        match self
            .values
            .iter()
            .rev()
            .find(|(dimension, _)| *dimension == K::DIMENSION)
        {
            Some((_, raw)) => K::parse(raw).map_err(|err| err.for_kind(kind.key())),
            None => Ok(K::default()),
        }
    }

    pub(crate) fn has_state(&self, flag: StateFlag) -> bool {
        self.states.iter().any(|raw| *raw == flag.key())
    }

    /// Rejects dimensions and flags the kind does not declare.
    pub(crate) fn validate(&self, kind: ComponentKind) -> Result<(), UiError> {
        let dimensions = kind.dimensions();
        if let Some((dimension, _)) = self
            .values
            .iter()
            .find(|(name, _)| !dimensions.iter().any(|dimension| dimension.name == *name))
        {
            return Err(UiError::UnknownDimension {
                kind: kind.key(),
                dimension: dimension.to_string(),
            });
        }

        let supported = kind.states();
        for raw in &self.states {
            match StateFlag::parse(raw) {
                Ok(flag) if supported.contains(&flag) => {}
                _ => {
                    return Err(UiError::UnsupportedState {
                        kind: kind.key(),
                        flag: raw.to_string(),
                    })
                }
            }
        }
        Ok(())
    }
}

/// Resolves a kind by name from string keys.
///
/// # Errors
///
/// Returns [`UiError::UnknownKind`] for undeclared kinds and whatever
/// [`ComponentKind::resolve`] rejects.
pub fn resolve_kind(kind: &str, request: &ResolveRequest<'_>) -> Result<String, UiError> {
    let kind = ComponentKind::parse(kind).map_err(|err| UiError::UnknownKind(err.value))?;
    kind.resolve(request)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn closed_keys_parse_exact_keys_only() {
        assert_eq!("full-width".parse::<StateFlag>(), Ok(StateFlag::FullWidth));
        let err = "Disabled".parse::<StateFlag>().expect_err("keys are case sensitive");
        assert_eq!(err.dimension, "state");
        assert_eq!(err.expected, "disabled|full-width|has-error|truncate");
    }

    #[test]
    fn display_matches_key() {
        assert_eq!(StateFlag::HasError.to_string(), "has-error");
    }

    #[test]
    fn erased_dimension_reports_keys_default_and_tokens() {
        let dimension = Dimension::of::<ButtonSize>(DimensionRole::Size);
        assert_eq!(dimension.name, "size");
        assert_eq!(dimension.keys(), vec!["xs", "sm", "md", "lg"]);
        assert_eq!(dimension.default_key(), "md");
        assert_eq!(dimension.token("lg"), Ok("btn-lg"));
        assert!(dimension.token("xl").is_err());
    }

    #[test]
    fn later_selection_of_a_dimension_wins() {
        let request = ResolveRequest::new().variant("ghost").variant("outline");
        assert_eq!(
            ComponentKind::Button.resolve(&request),
            Ok("btn btn-outline btn-md".to_string())
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert_eq!(
            resolve_kind("tooltip", &ResolveRequest::new()),
            Err(UiError::UnknownKind("tooltip".to_string()))
        );
    }
}
