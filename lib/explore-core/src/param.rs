//! Query parameter declarations and values.
//!
//! A [`ParamSpec`] is declared once per operation in the endpoint catalog and
//! never changes. A [`ParameterSet`] is built per call and holds only the
//! values that actually go on the wire.

use std::fmt;

use crate::encoding::encode_query_value;

/// Value type of a query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Free text (`select`, `where`, `timezone`, ...).
    Text,
    /// Signed integer (`limit`, `offset`, `epsg`).
    Integer,
    /// Boolean flag (`include_links`, `with_bom`, ...).
    Boolean,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Integer => write!(f, "integer"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// How a parameter value is written into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Canonical form written verbatim.
    Raw,
    /// Percent-encoded.
    Percent,
}

/// Declared default of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamDefault {
    /// Text default; `""` means "absent".
    Text(&'static str),
    /// Integer default.
    Integer(i64),
    /// Boolean default.
    Boolean(bool),
}

impl ParamDefault {
    /// Kind of the parameter this default belongs to.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        match self {
            Self::Text(_) => ParamKind::Text,
            Self::Integer(_) => ParamKind::Integer,
            Self::Boolean(_) => ParamKind::Boolean,
        }
    }
}

/// Declaration of one optional query parameter of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamSpec {
    /// Wire name, unique within an operation.
    pub name: &'static str,
    /// Value that is never sent.
    pub default: ParamDefault,
    /// Encoding rule for the value.
    pub encoding: Encoding,
}

impl ParamSpec {
    /// Text parameter defaulting to the empty string.
    #[must_use]
    pub const fn text(name: &'static str) -> Self {
        Self::text_or(name, "")
    }

    /// Text parameter with an explicit default.
    #[must_use]
    pub const fn text_or(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            default: ParamDefault::Text(default),
            encoding: Encoding::Percent,
        }
    }

    /// Integer parameter.
    #[must_use]
    pub const fn integer(name: &'static str, default: i64) -> Self {
        Self {
            name,
            default: ParamDefault::Integer(default),
            encoding: Encoding::Raw,
        }
    }

    /// Boolean parameter.
    #[must_use]
    pub const fn flag(name: &'static str, default: bool) -> Self {
        Self {
            name,
            default: ParamDefault::Boolean(default),
            encoding: Encoding::Raw,
        }
    }

    /// Kind of this parameter.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        self.default.kind()
    }

    /// Returns `true` if `value` must be left out of the query string:
    /// it equals the declared default, or it is an empty text.
    #[must_use]
    pub fn is_omitted(&self, value: &ParamValue) -> bool {
        match (self.default, value) {
            (_, ParamValue::Text(text)) if text.is_empty() => true,
            (ParamDefault::Text(default), ParamValue::Text(text)) => text == default,
            (ParamDefault::Integer(default), ParamValue::Integer(number)) => *number == default,
            (ParamDefault::Boolean(default), ParamValue::Boolean(flag)) => *flag == default,
            _ => false,
        }
    }
}

/// A concrete parameter value supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Boolean value.
    Boolean(bool),
}

impl ParamValue {
    /// Kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        match self {
            Self::Text(_) => ParamKind::Text,
            Self::Integer(_) => ParamKind::Integer,
            Self::Boolean(_) => ParamKind::Boolean,
        }
    }

    /// Canonical, unencoded string form: base-10 integers, `true`/`false`.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Integer(number) => number.to_string(),
            Self::Boolean(flag) => flag.to_string(),
        }
    }

    /// String form with the given encoding applied.
    #[must_use]
    pub fn encode(&self, encoding: Encoding) -> String {
        match encoding {
            Encoding::Raw => self.render(),
            Encoding::Percent => encode_query_value(&self.render()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// The parameters that survive filtering for one call, in declaration order,
/// each already encoded for the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    entries: Vec<(&'static str, String)>,
}

impl ParameterSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append `value` for `spec` unless it must be omitted.
    ///
    /// Returns `true` if the value was kept.
    pub fn push(&mut self, spec: &ParamSpec, value: &ParamValue) -> bool {
        if spec.is_omitted(value) {
            return false;
        }
        self.entries.push((spec.name, value.encode(spec.encoding)));
        true
    }

    /// Number of parameters on the wire.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no parameter goes on the wire.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Encoded value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(name, encoded value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }

    /// Render as a query string: empty, or `?` followed by `name=value`
    /// pairs joined with `&`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}
