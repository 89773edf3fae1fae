#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Response normalization for the Zabbix API.
//!
//! The remote API is loosely typed and not consistent across versions:
//! identifiers and codes arrive as JSON strings or as JSON numbers, and some
//! collections arrive as a sequence in one version and as a mapping in
//! another. This crate turns those raw [`serde_json::Value`] trees into
//! statically typed records and checks mutation results against what was
//! submitted.
//!
//! - [`Record`] / [`FieldDef`]: an explicit per-type field table (wire name,
//!   semantic kind, accessor pair) built once per record type.
//! - [`normalize`] / [`decode_record`] / [`encode_record`]: table-driven
//!   decoding with string/number coercion, and the reverse direction.
//! - [`reconcile`], [`assign_created`], [`clear_deleted`]: cardinality
//!   reconciliation of `*ids` collections returned by `create` and `delete`.
//! - [`Collection`]: the ordered result of a read, convertible to a mapping
//!   keyed by identifier.

mod collection;
mod error;
mod field;
mod normalizer;
mod reconciler;

pub use collection::Collection;
pub use error::{DuplicateKeyError, NormalizationError, Result, SemanticType, Shape};
pub use field::{Accessor, FieldDef, Record};
pub use normalizer::{
    coerce_id, coerce_integer, coerce_text, decode_nested, decode_record, encode_nested,
    encode_record, normalize, Encoding,
};
pub use reconciler::{
    assign_created, clear_deleted, id_collection, reconcile, reconcile_count, IdCollection,
};
