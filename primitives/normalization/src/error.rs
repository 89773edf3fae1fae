//! Error taxonomy of the normalization layer.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizationError>;

/// Top-level JSON shape of a value, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The member was not present at all.
    Missing,
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// A JSON number.
    Number,
    /// A JSON string.
    String,
    /// A JSON array.
    Sequence,
    /// A JSON object.
    Mapping,
}

impl Shape {
    /// Shape of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Bool,
            Value::Number(_) => Shape::Number,
            Value::String(_) => Shape::String,
            Value::Array(_) => Shape::Sequence,
            Value::Object(_) => Shape::Mapping,
        }
    }

    /// Shape of an optional member.
    pub fn of_opt(value: Option<&Value>) -> Self { value.map_or(Shape::Missing, Shape::of) }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Missing => "missing",
            Shape::Null => "null",
            Shape::Bool => "boolean",
            Shape::Number => "number",
            Shape::String => "string",
            Shape::Sequence => "sequence",
            Shape::Mapping => "mapping",
        };
        f.write_str(name)
    }
}

/// Semantic type a field is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticType {
    /// Free text; numbers are rendered to their decimal string.
    Text,
    /// Opaque identifier; strings or integers.
    Identifier,
    /// Integer; numeric strings are parsed.
    Integer,
    /// Enumerated integer code (fits in `i32`).
    Code,
    /// Collection of identifiers.
    IdList,
    /// Nested collection of records.
    Nested,
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SemanticType::Text => "text",
            SemanticType::Identifier => "identifier",
            SemanticType::Integer => "integer",
            SemanticType::Code => "code",
            SemanticType::IdList => "identifier list",
            SemanticType::Nested => "nested records",
        };
        f.write_str(name)
    }
}

/// Errors produced while normalizing or reconciling a result.
///
/// Any of these aborts the whole call: no partial result is returned and no
/// caller-owned record is modified.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NormalizationError {
    /// The value's top-level shape is not what the operation expects.
    #[error("shape mismatch in {context}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// What was being decoded (e.g. `"trigger.get result"`, `"triggerids"`).
        context: String,
        /// Human-readable description of the accepted shape(s).
        expected: &'static str,
        /// The shape that was found.
        found: Shape,
    },

    /// A field's raw value cannot be read as its declared semantic type.
    #[error("cannot coerce field `{field}` value {value} to {expected}")]
    FieldCoercion {
        /// Wire name (or path) of the field.
        field: String,
        /// The field's declared type.
        expected: SemanticType,
        /// The offending raw value.
        value: Value,
    },

    /// A mutation reported a different number of identifiers than submitted.
    ///
    /// The remote side effect may have partially happened.
    #[error("expected {expected} identifiers in result, got {actual}")]
    CountMismatch {
        /// Number of records or identifiers submitted.
        expected: usize,
        /// Number of identifiers the server reported.
        actual: usize,
    },
}

impl NormalizationError {
    pub(crate) fn shape(context: impl Into<String>, expected: &'static str, found: Shape) -> Self {
        NormalizationError::ShapeMismatch { context: context.into(), expected, found }
    }

    pub(crate) fn coercion(field: impl Into<String>, expected: SemanticType, value: &Value) -> Self {
        NormalizationError::FieldCoercion { field: field.into(), expected, value: value.clone() }
    }
}

/// Two records in one result share an identifier.
///
/// The API never returns duplicates within one response, so this signals a
/// broken collaborator rather than a recoverable condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("duplicate key {key}")]
pub struct DuplicateKeyError {
    /// The repeated identifier.
    pub key: String,
}
