#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `zabbix-http`: HTTP Transport Backend
//!
//! This crate provides the concrete HTTP implementation of the
//! [`transport::Transport`] trait used to talk to a Zabbix frontend's
//! `api_jsonrpc.php` endpoint.
//!
//! ## Overview
//!
//! - Implements [`HttpTransport`], a thin wrapper over [`reqwest::Client`]
//! - Wraps every call in a JSON-RPC 2.0 envelope with an increasing `id`
//! - Holds the session token obtained by [`HttpTransport::login`] and sends
//!   it as the envelope's `auth` member
//!
//! ## Example
//! ```no_run
//! use zabbix_http::HttpTransport;
//! use transport::Transport;
//! use serde_json::json;
//!
//! # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
//! let transport = HttpTransport::new("http://127.0.0.1/zabbix/api_jsonrpc.php");
//! transport.login("Admin", "zabbix").await?;
//!
//! let hosts = transport.call("host.get", json!({"output": "extend"})).await?;
//! println!("{:#?}", hosts);
//! # Ok::<(), transport::TransportError>(())
//! # });
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::{json, Value};
use transport::{JsonRpcRequest, JsonRpcResponse, Transport, TransportConfig, TransportError};

/// Content type the Zabbix frontend expects for API calls.
pub const CONTENT_TYPE_JSON_RPC: &str = "application/json-rpc";

/// A concrete implementation of the [`Transport`] trait using HTTP.
///
/// `HttpTransport` performs no result typing: it sends the envelope and
/// returns the `result` member as a [`serde_json::Value`]. Errors at any
/// stage (HTTP, body parsing, RPC) become [`TransportError`] variants.
///
/// Clones share the session token and the request counter.
#[derive(Clone)]
pub struct HttpTransport {
    /// The underlying HTTP client used to perform requests.
    client: reqwest::Client,
    /// The full URL of the API endpoint.
    url: String,
    /// Session token returned by `user.login`.
    token: Arc<RwLock<Option<String>>>,
    /// Next JSON-RPC request id.
    next_id: Arc<AtomicU64>,
}

impl HttpTransport {
    /// Constructs a new `HttpTransport` targeting the provided URL, without
    /// a session.
    ///
    /// # Example
    /// ```
    /// use zabbix_http::HttpTransport;
    /// use transport::Transport;
    ///
    /// let transport = HttpTransport::new("http://127.0.0.1/zabbix/api_jsonrpc.php");
    /// assert_eq!(transport.endpoint(), "http://127.0.0.1/zabbix/api_jsonrpc.php");
    /// assert_eq!(transport.token(), None);
    /// ```
    pub fn new(url: impl Into<String>) -> Self { Self::with_client(reqwest::Client::new(), url.into(), None) }

    /// Constructs a new `HttpTransport` reusing an existing session token.
    pub fn with_token(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url.into(), Some(token.into()))
    }

    /// Constructs a transport from configuration: endpoint, request timeout
    /// and, if present, a pre-issued token.
    ///
    /// Username/password pairs are not used here; see [`HttpTransport::connect`].
    ///
    /// # Errors
    /// Returns `TransportError::Http` if the HTTP client cannot be built.
    pub fn from_config(config: &TransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;
        let token = config.auth.as_ref().and_then(|auth| auth.token.clone());
        Ok(Self::with_client(client, config.endpoint.clone(), token))
    }

    /// Like [`HttpTransport::from_config`], then logs in with the configured
    /// credentials when no token was configured.
    pub async fn connect(config: &TransportConfig) -> Result<Self, TransportError> {
        let transport = Self::from_config(config)?;
        if transport.token().is_none() {
            if let Some((user, password)) = config.auth.as_ref().and_then(|a| a.credentials()) {
                transport.login(user, password).await?;
            }
        }
        Ok(transport)
    }

    fn with_client(client: reqwest::Client, url: String, token: Option<String>) -> Self {
        logging::trace("HTTP", &format!("→ initializing HTTP transport for {}", url));
        Self { client, url, token: Arc::new(RwLock::new(token)), next_id: Arc::new(AtomicU64::new(1)) }
    }

    /// The session token currently held, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Replaces the session token.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    /// Calls `user.login` and keeps the returned session token.
    ///
    /// # Errors
    /// Any [`TransportError`] from the call, or `InvalidFormat` if the
    /// result is not a string.
    pub async fn login(&self, user: &str, password: &str) -> Result<String, TransportError> {
        let result = self.call("user.login", json!({"user": user, "password": password})).await?;
        let token = match result {
            Value::String(token) => token,
            other => return Err(TransportError::InvalidFormat(other.to_string())),
        };
        self.set_token(Some(token.clone()));
        tracing::debug!(endpoint = %self.url, user, "logged in");
        Ok(token)
    }

    /// Calls `user.logout` and forgets the session token.
    ///
    /// # Errors
    /// `NotAuthenticated` if no token is held; otherwise any error of the
    /// call, in which case the token is kept.
    pub async fn logout(&self) -> Result<(), TransportError> {
        if self.token().is_none() {
            return Err(TransportError::NotAuthenticated("user.logout".to_string()));
        }
        self.call("user.logout", json!([])).await?;
        self.set_token(None);
        Ok(())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    /// Sends a single JSON-RPC request and returns its `result` member.
    ///
    /// # Errors
    /// - [`TransportError::Http`] if the request fails or the status is not 2xx
    /// - [`TransportError::Serialization`] if the body is not JSON
    /// - [`TransportError::Rpc`] if the envelope carries an `error` member
    /// - [`TransportError::InvalidFormat`] if it carries neither `result` nor `error`
    async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let token = self.token();
        let request = JsonRpcRequest::new(method, &params, token.as_deref(), id);
        logging::trace("HTTP", &format!("→ POST {} (method: {}, id: {})", self.url, method, id));

        let resp = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON_RPC)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("HTTP Transport - Request failed: {}", e);
                TransportError::Http(e.to_string())
            })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("HTTP Transport - Failed to read body: {}", e);
            TransportError::Serialization(e.to_string())
        })?;

        if !status.is_success() {
            tracing::error!("HTTP Transport - {} returned {}", method, status);
            return Err(TransportError::Http(format!("{} (body: {})", status, text)));
        }

        let envelope: JsonRpcResponse = serde_json::from_str(&text)
            .map_err(|e| TransportError::Serialization(format!("{} (body: {})", e, text)))?;

        if envelope.result.is_none() && envelope.error.is_none() {
            return Err(TransportError::InvalidFormat(text));
        }
        envelope.into_result()
    }

    /// Returns the configured API endpoint URL.
    fn endpoint(&self) -> &str { &self.url }
}

#[cfg(test)]
mod tests {
    use transport::AuthConfig;

    use super::*;

    #[test]
    fn test_new() {
        let url = "http://127.0.0.1/zabbix/api_jsonrpc.php";
        let transport = HttpTransport::new(url);

        assert_eq!(transport.url, url);
        assert!(transport.token().is_none());
        assert_eq!(transport.endpoint(), url);
        assert_eq!(transport.next_id.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_with_token() {
        let url = String::from("http://127.0.0.1/zabbix/api_jsonrpc.php");
        let transport = HttpTransport::with_token(&url, "0424bd59b807674191e7d77572075f33");
        assert_eq!(transport.token().as_deref(), Some("0424bd59b807674191e7d77572075f33"));

        let clone = transport.clone();
        clone.set_token(None);
        assert!(transport.token().is_none(), "clones share the session");
    }

    #[test]
    fn test_from_config() {
        let config = TransportConfig {
            endpoint: "https://monitor.local/api_jsonrpc.php".to_string(),
            auth: Some(AuthConfig { token: Some("abc".to_string()), ..AuthConfig::default() }),
            timeout_ms: 250,
        };
        let transport = HttpTransport::from_config(&config).expect("client builds");
        assert_eq!(transport.endpoint(), "https://monitor.local/api_jsonrpc.php");
        assert_eq!(transport.token().as_deref(), Some("abc"));

        let transport = HttpTransport::from_config(&TransportConfig::default()).expect("client builds");
        assert!(transport.token().is_none());
    }

    #[tokio::test]
    async fn test_call_unreachable() {
        let transport = HttpTransport::new("http://127.0.0.1:9/api_jsonrpc.php");
        let result = transport.call("apiinfo.version", json!({})).await;

        // Should fail with a connection error, not return Ok(Value::Null)
        assert!(matches!(result, Err(TransportError::Http(_))));
        assert_eq!(transport.next_id.load(Ordering::Relaxed), 2);
    }

    #[tokio::test]
    async fn test_logout_requires_session() {
        let transport = HttpTransport::new("http://127.0.0.1:9/api_jsonrpc.php");
        match transport.logout().await {
            Err(TransportError::NotAuthenticated(method)) => assert_eq!(method, "user.logout"),
            other => panic!("Expected NotAuthenticated, got {:?}", other),
        }
    }
}
