//! Resource wrappers.
//!
//! One module per API object. Each binds a record type to its API name
//! through [`Resource`](crate::Resource) and adds the named `Api` methods
//! callers use; all of them delegate to the generic operations in
//! [`crate::api`].

mod application;
mod host;
mod host_group;
mod host_interface;
mod item;
mod trigger;
