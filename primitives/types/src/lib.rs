#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Domain records of the Zabbix API.
//!
//! Each record is a plain struct plus one static field table (see
//! [`normalization::FieldDef`]) describing its wire names, semantic kinds
//! and which fields are read-only. Decoding, encoding and reconciliation are
//! generic over [`normalization::Record`]; nothing in this crate talks to the
//! network.

/// Enumerated codes, one newtype per semantic domain.
pub mod codes;
/// API version parsing and comparison.
pub mod version;

mod application;
mod host;
mod host_group;
mod host_interface;
mod item;
mod trigger;

pub use application::Application;
pub use codes::*;
pub use host::Host;
pub use host_group::HostGroup;
pub use host_interface::HostInterface;
pub use item::Item;
pub use trigger::{Trigger, TriggerPrototype};
pub use version::{ApiVersion, VersionError};
