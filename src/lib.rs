// SPDX-License-Identifier: CC0-1.0

//! Zabbix umbrella crate.
//!
//! Re-exports the workspace members under one name so applications can
//! depend on a single crate:
//!
//! - [`Api`] and the resource wrappers ([`client`])
//! - domain records and codes ([`types`])
//! - request parameters ([`params`])
//! - the HTTP transport ([`http`]) and the transport contract ([`transport`])
//! - configuration ([`config`]) and logging setup ([`logging`])

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![warn(deprecated_in_future)]
#![doc(test(attr(warn(unused))))]

pub use client::{self, Api, ClientError, ClientResult, Resource};
pub use config::{self, Config, ConfigError};
pub use logging;
pub use normalization::{self, Collection, DuplicateKeyError, NormalizationError};
pub use params::{self, Params};
pub use transport::{self, DynTransport, Transport, TransportError};
pub use types;
pub use zabbix_http as http;
pub use zabbix_http::HttpTransport;

/// Miscellaneous metadata about the crate.
pub mod zabbix_meta {
    /// Version string for the umbrella crate, as reported by Cargo.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Connects to the server described by `config`: builds an
/// [`HttpTransport`], logs in with the configured credentials unless a
/// token is configured, and wraps it in an [`Api`].
pub async fn connect(config: &Config) -> Result<Api, TransportError> {
    let http = HttpTransport::connect(&config.transport).await?;
    Ok(Api::new(std::sync::Arc::new(http)))
}
