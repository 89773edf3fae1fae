#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Typed access to the Zabbix JSON-RPC API.
//!
//! [`Api`] wraps any [`transport::Transport`] and offers, for every
//! supported object, the same four steps: fill in the default `output`
//! selector, call the transport, return transport errors unchanged, and
//! either normalize the result into records (reads) or reconcile the
//! returned identifiers against the submitted records (mutations).
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use client::Api;
//! use params::Params;
//! use zabbix_http::HttpTransport;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let http = HttpTransport::new("http://127.0.0.1/zabbix/api_jsonrpc.php");
//! http.login("Admin", "zabbix").await?;
//! let api = Api::new(Arc::new(http));
//!
//! let triggers = api.triggers_get(&mut Params::new().with("hostids", "10084")).await?;
//! for trigger in &triggers {
//!     println!("{} {}", trigger.priority, trigger.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
mod error;
mod resources;

pub use api::{Api, Resource};
pub use error::{ClientError, ClientResult};
