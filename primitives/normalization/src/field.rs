//! Per-record field tables.
//!
//! Each record type declares one static table of [`FieldDef`]s mapping a
//! wire name to an accessor pair of the field's semantic kind. Decoding and
//! encoding walk that table; fields absent from the table are ignored on
//! input, fields absent from the input keep their `Default` value.

use serde_json::Value;

use crate::error::{Result, SemanticType};

/// Typed accessor pair for one field.
///
/// Plain function pointers, so tables can live in `static`s and be built
/// from non-capturing closures.
pub enum Accessor<T> {
    /// Free text or identifier.
    Text {
        /// Reads the field.
        get: fn(&T) -> &str,
        /// Writes the field.
        set: fn(&mut T, String),
    },
    /// Opaque identifier: a string, or an integer rendered as one.
    Identifier {
        /// Reads the field.
        get: fn(&T) -> &str,
        /// Writes the field.
        set: fn(&mut T, String),
    },
    /// Plain integer.
    Integer {
        /// Reads the field.
        get: fn(&T) -> i64,
        /// Writes the field.
        set: fn(&mut T, i64),
    },
    /// Enumerated code.
    Code {
        /// Reads the raw code.
        get: fn(&T) -> i32,
        /// Writes the raw code.
        set: fn(&mut T, i32),
    },
    /// Identifier collection.
    ///
    /// With `key` set, elements may arrive as objects carrying the
    /// identifier under that member (`[{"groupid": "4"}]`); `wrap` makes
    /// encoding produce that form too, which is how references are passed
    /// on create.
    IdList {
        /// Member name carrying each identifier inside an object element.
        key: Option<&'static str>,
        /// Encode elements as `{key: id}` objects.
        wrap: bool,
        /// Reads the identifiers.
        get: fn(&T) -> &[String],
        /// Writes the identifiers.
        set: fn(&mut T, Vec<String>),
    },
    /// Nested records, decoded and encoded by the owning type.
    Nested {
        /// Encodes the nested records; the flag selects writable-only output.
        encode: fn(&T, bool) -> Value,
        /// Decodes the raw value found at the given field path.
        decode: fn(&mut T, &Value, &str) -> Result<()>,
    },
}

impl<T> Accessor<T> {
    /// Semantic type of the accessor.
    pub fn semantic_type(&self) -> SemanticType {
        match self {
            Accessor::Text { .. } => SemanticType::Text,
            Accessor::Identifier { .. } => SemanticType::Identifier,
            Accessor::Integer { .. } => SemanticType::Integer,
            Accessor::Code { .. } => SemanticType::Code,
            Accessor::IdList { .. } => SemanticType::IdList,
            Accessor::Nested { .. } => SemanticType::Nested,
        }
    }
}

/// One row of a record's field table.
pub struct FieldDef<T> {
    /// Member name on the wire.
    pub wire: &'static str,
    /// Typed accessor.
    pub access: Accessor<T>,
    /// Sent on create; read-only fields are only ever decoded.
    pub writable: bool,
    /// Left out of create payloads while empty.
    pub omit_empty: bool,
}

impl<T> FieldDef<T> {
    const fn new(wire: &'static str, access: Accessor<T>) -> Self {
        Self { wire, access, writable: true, omit_empty: false }
    }

    /// Text field.
    pub const fn text(wire: &'static str, get: fn(&T) -> &str, set: fn(&mut T, String)) -> Self {
        Self::new(wire, Accessor::Text { get, set })
    }

    /// Identifier field. Unlike text, only strings and integers decode.
    pub const fn id(wire: &'static str, get: fn(&T) -> &str, set: fn(&mut T, String)) -> Self {
        Self::new(wire, Accessor::Identifier { get, set })
    }

    /// Integer field.
    pub const fn integer(wire: &'static str, get: fn(&T) -> i64, set: fn(&mut T, i64)) -> Self {
        Self::new(wire, Accessor::Integer { get, set })
    }

    /// Enumerated code field.
    pub const fn code(wire: &'static str, get: fn(&T) -> i32, set: fn(&mut T, i32)) -> Self {
        Self::new(wire, Accessor::Code { get, set })
    }

    /// Identifier collection field, encoded as bare identifiers.
    pub const fn ids(
        wire: &'static str,
        key: Option<&'static str>,
        get: fn(&T) -> &[String],
        set: fn(&mut T, Vec<String>),
    ) -> Self {
        Self::new(wire, Accessor::IdList { key, wrap: false, get, set }).omit_empty()
    }

    /// Identifier collection field, encoded as `[{key: id}]` references.
    pub const fn refs(
        wire: &'static str,
        key: &'static str,
        get: fn(&T) -> &[String],
        set: fn(&mut T, Vec<String>),
    ) -> Self {
        Self::new(wire, Accessor::IdList { key: Some(key), wrap: true, get, set }).omit_empty()
    }

    /// Nested record collection field.
    pub const fn nested(
        wire: &'static str,
        encode: fn(&T, bool) -> Value,
        decode: fn(&mut T, &Value, &str) -> Result<()>,
    ) -> Self {
        Self::new(wire, Accessor::Nested { encode, decode }).omit_empty()
    }

    /// Marks the field read-only.
    pub const fn read_only(self) -> Self {
        Self { wire: self.wire, access: self.access, writable: false, omit_empty: self.omit_empty }
    }

    /// Leaves the field out of create payloads while it is empty.
    pub const fn omit_empty(self) -> Self {
        Self { wire: self.wire, access: self.access, writable: self.writable, omit_empty: true }
    }
}

/// A statically typed mirror of one remote resource kind.
///
/// Records are created by decoding a response; an empty identifier means
/// "not yet persisted".
pub trait Record: Default + Sized + 'static {
    /// Human-readable kind, used in diagnostics (e.g. `"trigger"`).
    const KIND: &'static str;

    /// Wire name of the identifier field (e.g. `"triggerid"`).
    const ID_FIELD: &'static str;

    /// The field table.
    fn fields() -> &'static [FieldDef<Self>];

    /// Identifier, empty when not persisted.
    fn id(&self) -> &str;

    /// Overwrites the identifier.
    fn set_id(&mut self, id: String);

    /// Clears the identifier, marking the record as not persisted.
    fn clear_id(&mut self) { self.set_id(String::new()) }

    /// Returns `true` if the record carries an identifier.
    fn is_persisted(&self) -> bool { !self.id().is_empty() }
}
