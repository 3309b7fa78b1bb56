//! Semantic field types supported by the record store
//!
//! Supported types:
//! - text: UTF-8 string, stored verbatim
//! - integer: 64-bit signed integer, base-10
//! - real: 64-bit floating point, locale-independent decimal
//! - timestamp: UTC instant, millisecond precision on disk
//! - symbol: one variant of a closed enumeration, stored by its declared name

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// A closed enumeration that can be stored by variant name.
///
/// Implementors provide an exhaustive mapping in both directions:
/// `VARIANTS` lists every variant and `name` maps each one to its
/// serialized form. Unknown names are rejected by `from_name`.
pub trait Symbol: Copy + Sized + 'static {
    /// Type name used in error messages
    const TYPE_NAME: &'static str;

    /// Every variant, in declaration order
    const VARIANTS: &'static [Self];

    /// Serialized name of this variant
    fn name(self) -> &'static str;

    /// Exact, case-sensitive lookup by serialized name
    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.name() == name)
    }
}

/// Semantic type of a declared field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// UTF-8 string
    Text,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Real,
    /// UTC instant
    Timestamp,
    /// Enumerated symbol with its allowed variant names
    Symbol {
        /// Name of the enumeration type
        type_name: &'static str,
        /// Declared variant names
        variants: Vec<&'static str>,
    },
}

impl FieldKind {
    /// Builds the kind for a `Symbol` implementor
    pub fn symbol<S: Symbol>() -> Self {
        FieldKind::Symbol {
            type_name: S::TYPE_NAME,
            variants: S::VARIANTS.iter().map(|v| v.name()).collect(),
        }
    }

    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Integer => "integer",
            FieldKind::Real => "real",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Symbol { .. } => "symbol",
        }
    }

    /// Converts a raw on-disk value into a typed value.
    ///
    /// `raw` is expected to be trimmed already. Text is never rejected.
    pub fn decode(&self, raw: &str) -> Result<FieldValue, DecodeError> {
        match self {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Integer => raw
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|e| DecodeError::new(self, e.to_string())),
            FieldKind::Real => raw
                .parse::<f64>()
                .map(FieldValue::Real)
                .map_err(|e| DecodeError::new(self, e.to_string())),
            FieldKind::Timestamp => DateTime::parse_from_rfc3339(raw)
                .map(|dt| FieldValue::Timestamp(dt.with_timezone(&Utc)))
                .map_err(|e| DecodeError::new(self, e.to_string())),
            FieldKind::Symbol { type_name, variants } => variants
                .iter()
                .find(|v| **v == raw)
                .map(|v| FieldValue::Symbol(*v))
                .ok_or_else(|| {
                    DecodeError::new(
                        self,
                        format!("no {} variant named '{}'", type_name, raw),
                    )
                }),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Symbol { type_name, .. } => write!(f, "symbol({})", type_name),
            other => write!(f, "{}", other.type_name()),
        }
    }
}

/// A typed field value read from or written to a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Real(f64),
    Timestamp(DateTime<Utc>),
    /// Declared variant name
    Symbol(&'static str),
}

impl FieldValue {
    /// Returns the semantic type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Text(_) => "text",
            FieldValue::Integer(_) => "integer",
            FieldValue::Real(_) => "real",
            FieldValue::Timestamp(_) => "timestamp",
            FieldValue::Symbol(_) => "symbol",
        }
    }

    /// Encodes the value in its on-disk text form.
    ///
    /// Reals use the shortest round-trip form and keep a trailing `.0`
    /// when integral, so `350.0` is written as `350.0`.
    pub fn encode(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Real(x) => format!("{:?}", x),
            FieldValue::Timestamp(ts) => ts.to_rfc3339_opts(SecondsFormat::Millis, true),
            FieldValue::Symbol(name) => (*name).to_string(),
        }
    }
}

/// Raw value could not be converted to its field's semantic type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Expected semantic type
    pub expected: String,
    /// Conversion failure reason
    pub reason: String,
}

impl DecodeError {
    fn new(kind: &FieldKind, reason: impl Into<String>) -> Self {
        Self {
            expected: kind.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}: {}", self.expected, self.reason)
    }
}
