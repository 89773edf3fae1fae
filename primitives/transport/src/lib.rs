#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `zabbix-transport`: Transport Invoker Contract
//!
//! This crate defines the **transport abstraction** every Zabbix API call
//! goes through. The typed layers above it (parameter model, response
//! normalizer, resource wrappers) only ever see this contract; how the
//! request reaches the server, and how the session token is obtained, is the
//! business of whichever backend implements it.
//!
//! ## Core Concepts
//!
//! ### `Transport` Trait
//! Sends one named remote procedure with its parameters and returns the
//! JSON-RPC `result` member as an untyped [`serde_json::Value`]. Parameters
//! are a JSON value too, so callers can pass either a parameter mapping or a
//! bare sequence of identifiers (the shape `*.delete` methods expect).
//!
//! ### `TransportError`
//! Enumerates the failure classes of a call: HTTP, serialization, a
//! remote-reported [`RpcError`], or a malformed envelope.
//!
//! ### `DynTransport`
//! A type-erased (`Arc<dyn Transport>`) handle so clients and tests can run
//! over any backend without generic parameters.
//!
//! ### `JsonRpcRequest` / `JsonRpcResponse`
//! The JSON-RPC 2.0 envelopes as the Zabbix API frames them, including the
//! non-standard `auth` member carrying the session token.
//!
//! ## Example
//! ```no_run
//! use transport::{DynTransport, TransportError};
//! use serde_json::json;
//!
//! async fn demo(transport: DynTransport) -> Result<(), TransportError> {
//!     let version = transport.call("apiinfo.version", json!({})).await?;
//!     println!("api = {}", version);
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type alias for structured error handling in transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// JSON-RPC protocol version sent with every request.
pub const JSONRPC_VERSION: &str = "2.0";

/// Methods the server accepts without a session token.
pub const UNAUTHENTICATED_METHODS: &[&str] = &["user.login", "apiinfo.version"];

/// Returns `true` if `method` must be sent without the `auth` member.
pub fn is_unauthenticated(method: &str) -> bool { UNAUTHENTICATED_METHODS.contains(&method) }

/// Error object reported by the remote API.
///
/// Zabbix fills all three members; `data` usually holds the detailed reason
/// (e.g. `"No permissions to referred object or it does not exist!"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    /// Remote error code (e.g. `-32602` for invalid params).
    pub code: i64,
    /// Short error message.
    pub message: String,
    /// Detailed error description.
    #[serde(default)]
    pub data: String,
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.code, self.message, self.data)
    }
}

impl std::error::Error for RpcError {}

/// Canonical error type for all transport implementations.
///
/// Each variant corresponds to a distinct communication or parsing
/// failure mode. Layers above the transport propagate these unchanged.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// An HTTP-level failure (connection refused, timeout, or bad status code).
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// Failure to serialize or deserialize a JSON payload.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The remote endpoint returned an explicit JSON-RPC error object.
    #[error("RPC error: {0}")]
    Rpc(RpcError),

    /// The JSON-RPC response was missing the expected `result` field.
    #[error("Missing result field")]
    MissingResult,

    /// The response did not conform to the expected JSON-RPC envelope format.
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// A method requiring a session was called before a token was obtained.
    #[error("Not authenticated: call `{0}` requires a session token")]
    NotAuthenticated(String),

    /// Any other error not covered by the specific variants above.
    #[error("Other error: {0}")]
    Other(String),
}

impl TransportError {
    /// Remote error code, when the failure was reported by the server.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            TransportError::Rpc(err) => Some(err.code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self { TransportError::Serialization(err.to_string()) }
}

impl From<RpcError> for TransportError {
    fn from(err: RpcError) -> Self { TransportError::Rpc(err) }
}

/// The Transport Invoker contract.
///
/// Implementations send one JSON-RPC call and return the value of the
/// response's `"result"` member, or an appropriate [`TransportError`].
/// Session handling, timeouts and any rate limiting belong to the
/// implementation, not to its callers.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Calls the dot-qualified remote procedure `method` (e.g. `"trigger.get"`).
    ///
    /// `params` is sent as the request's `params` member unchanged: usually a
    /// mapping, but a bare sequence of identifiers for `*.delete` methods.
    async fn call(&self, method: &str, params: Value) -> Result<Value>;

    /// Returns the configured endpoint.
    ///
    /// For network transports, this is the API URL. For in-memory
    /// transports, it may be a symbolic name.
    fn endpoint(&self) -> &str;
}

/// Type alias for a shared, dynamically dispatched transport instance.
///
/// ```
/// use transport::DynTransport;
///
/// fn use_transport(t: DynTransport) {
///     println!("Using endpoint: {}", t.endpoint());
/// }
/// ```
pub type DynTransport = Arc<dyn Transport>;

/// JSON-RPC request envelope as the Zabbix API expects it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest<'a> {
    /// Always [`JSONRPC_VERSION`].
    pub jsonrpc: &'static str,
    /// Remote procedure name.
    pub method: &'a str,
    /// Call parameters.
    pub params: &'a Value,
    /// Session token; omitted for unauthenticated methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<&'a str>,
    /// Request identifier echoed back by the server.
    pub id: u64,
}

impl<'a> JsonRpcRequest<'a> {
    /// Builds a request, dropping `auth` for methods that must not carry it.
    pub fn new(method: &'a str, params: &'a Value, auth: Option<&'a str>, id: u64) -> Self {
        let auth = if is_unauthenticated(method) { None } else { auth };
        Self { jsonrpc: JSONRPC_VERSION, method, params, auth, id }
    }
}

/// Minimal structure representing a JSON-RPC response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    /// Protocol version echoed by the server.
    #[serde(default)]
    pub jsonrpc: String,
    /// The value returned by the RPC call, if successful.
    #[serde(default)]
    pub result: Option<Value>,
    /// The error object returned by the server, if any.
    #[serde(default)]
    pub error: Option<RpcError>,
    /// The identifier correlating request and response.
    #[serde(default)]
    pub id: Value,
}

impl JsonRpcResponse {
    /// Converts the envelope into the call outcome.
    ///
    /// An `error` member wins over `result`; an envelope carrying neither is
    /// [`TransportError::MissingResult`].
    pub fn into_result(self) -> Result<Value> {
        if let Some(error) = self.error {
            return Err(TransportError::Rpc(error));
        }
        self.result.ok_or(TransportError::MissingResult)
    }
}

/// Transport configuration for communication backends.
///
/// # Examples
///
/// ```
/// use transport::{AuthConfig, TransportConfig};
///
/// let config = TransportConfig {
///     endpoint: "http://127.0.0.1/zabbix/api_jsonrpc.php".to_string(),
///     auth: Some(AuthConfig {
///         username: Some("Admin".to_string()),
///         password: Some("zabbix".to_string()),
///         token: None,
///     }),
///     timeout_ms: 5_000,
/// };
/// assert!(config.auth.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// API endpoint URL (usually ending in `api_jsonrpc.php`).
    pub endpoint: String,
    /// Authentication settings (optional).
    #[serde(default)]
    pub auth: Option<AuthConfig>,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 { 30_000 }

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost/zabbix/api_jsonrpc.php".to_string(),
            auth: None,
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Authentication configuration for transport connections.
///
/// Either a username/password pair used with `user.login`, or a
/// pre-issued session token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Username for `user.login`.
    #[serde(default)]
    pub username: Option<String>,
    /// Password for `user.login`.
    #[serde(default)]
    pub password: Option<String>,
    /// Pre-issued session token.
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthConfig {
    /// Returns the credentials pair when both halves are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from() {
        let err = serde_json::from_str::<serde_json::Value>("not-json")
            .expect_err("Expected JSON parsing to fail");
        let terr: TransportError = err.into();

        match terr {
            TransportError::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("expected Serialization error variant"),
        }
    }

    #[test]
    fn test_rpc_error_display() {
        let err = RpcError {
            code: -32602,
            message: "Invalid params.".to_string(),
            data: "Incorrect API \"foo\".".to_string(),
        };
        assert_eq!(err.to_string(), "-32602 (Invalid params.): Incorrect API \"foo\".");

        let terr: TransportError = err.into();
        assert_eq!(terr.rpc_code(), Some(-32602));
        assert_eq!(TransportError::MissingResult.rpc_code(), None);
    }

    #[test]
    fn test_request_omits_auth_for_login() {
        let params = json!({"user": "Admin", "password": "zabbix"});
        let req = JsonRpcRequest::new("user.login", &params, Some("token"), 1);
        let body = serde_json::to_value(&req).expect("request serializes");
        assert!(body.get("auth").is_none());
        assert_eq!(body["jsonrpc"], "2.0");
        assert_eq!(body["id"], 1);

        let params = json!({"output": "extend"});
        let req = JsonRpcRequest::new("trigger.get", &params, Some("token"), 2);
        let body = serde_json::to_value(&req).expect("request serializes");
        assert_eq!(body["auth"], "token");
        assert_eq!(body["params"]["output"], "extend");
    }

    #[test]
    fn test_response_into_result() {
        let ok: JsonRpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "result": ["1"], "id": 1}))
                .expect("valid envelope");
        assert_eq!(ok.into_result().expect("result present"), json!(["1"]));

        let failed: JsonRpcResponse = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "error": {"code": -32500, "message": "Application error.", "data": "No permissions."},
            "id": 1
        }))
        .expect("valid envelope");
        match failed.into_result() {
            Err(TransportError::Rpc(err)) => {
                assert_eq!(err.code, -32500);
                assert_eq!(err.data, "No permissions.");
            }
            other => panic!("expected Rpc error, got {:?}", other),
        }

        let empty: JsonRpcResponse =
            serde_json::from_value(json!({"jsonrpc": "2.0", "id": 1})).expect("valid envelope");
        assert!(matches!(empty.into_result(), Err(TransportError::MissingResult)));
    }

    #[test]
    fn test_auth_credentials() {
        let auth = AuthConfig {
            username: Some("Admin".to_string()),
            password: Some("zabbix".to_string()),
            token: None,
        };
        assert_eq!(auth.credentials(), Some(("Admin", "zabbix")));
        assert_eq!(AuthConfig::default().credentials(), None);
    }
}
