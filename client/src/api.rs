//! The API facade and the generic read/create/delete operations every
//! resource wrapper is built from.

use normalization::{
    assign_created, clear_deleted, coerce_text, encode_record, normalize, reconcile_count, Collection,
    Encoding, Record,
};
use params::Params;
use serde_json::Value;
use transport::DynTransport;
use types::ApiVersion;

use crate::error::{ClientError, ClientResult};

/// A record type with a remote API object behind it.
pub trait Resource: Record {
    /// API object name, the prefix of its methods (`"trigger"`).
    const API: &'static str;
    /// Member of mutation results holding the affected identifiers (`"triggerids"`).
    const IDS_KEY: &'static str;

    /// Fully qualified method name, e.g. `trigger.get`.
    fn method(action: &str) -> String { format!("{}.{}", Self::API, action) }
}

/// Entry point to the Zabbix API.
///
/// Holds nothing but the transport; every call is independent and the
/// facade can be cloned and shared across tasks freely.
#[derive(Clone)]
pub struct Api {
    transport: DynTransport,
}

impl Api {
    /// Wraps a transport.
    pub fn new(transport: DynTransport) -> Self { Self { transport } }

    /// The underlying transport.
    pub fn transport(&self) -> &DynTransport { &self.transport }

    /// Raw call: returns the `result` member untouched.
    pub async fn call(&self, method: &str, params: impl Into<Value>) -> ClientResult<Value> {
        tracing::trace!(method, endpoint = self.transport.endpoint(), "dispatch");
        Ok(self.transport.call(method, params.into()).await?)
    }

    /// Server API version string (`apiinfo.version`).
    pub async fn version(&self) -> ClientResult<String> {
        let raw = self.call("apiinfo.version", Params::new()).await?;
        Ok(coerce_text("apiinfo.version", &raw)?)
    }

    /// Server API version, parsed.
    pub async fn api_version(&self) -> ClientResult<ApiVersion> { Ok(ApiVersion::parse(&self.version().await?)?) }

    /// `<api>.get`.
    ///
    /// Sets `output` to `extend` when the caller left it out, so `params`
    /// shows what was actually sent. `output = "count"` answers with a
    /// scalar and fails here with `ShapeMismatch`; use [`Api::call`] for it.
    pub async fn get<R: Resource>(&self, params: &mut Params) -> ClientResult<Collection<R>> {
        params.ensure_output();
        let raw = self.call(&R::method("get"), params.to_value()).await?;
        let records = normalize::<R>(&raw)?;
        tracing::trace!(api = R::API, count = records.len(), "normalized get result");
        Ok(records)
    }

    /// `<api>.get` that must match exactly one record.
    pub async fn get_one<R: Resource>(&self, params: &mut Params) -> ClientResult<R> {
        let records = self.get::<R>(params).await?;
        if records.len() != 1 {
            return Err(ClientError::ExpectedOneResult(records.len()));
        }
        records.into_iter().next().ok_or(ClientError::ExpectedOneResult(0))
    }

    /// `<api>.create`; writes the new identifiers into `records`.
    ///
    /// Identifiers are assigned by position: the server returns them in the
    /// order the records were submitted. That is an API contract this
    /// client relies on and cannot check.
    pub async fn create<R: Resource>(&self, records: &mut [R]) -> ClientResult<()> {
        let payload: Vec<Value> =
            records.iter().map(|r| Value::Object(encode_record(r, Encoding::Writable))).collect();
        let result = self.call(&R::method("create"), payload).await?;
        assign_created(records, &result, R::IDS_KEY)?;
        tracing::debug!(api = R::API, count = records.len(), "created");
        Ok(())
    }

    /// `<api>.delete`; clears the identifiers of `records` on success.
    pub async fn delete<R: Resource>(&self, records: &mut [R]) -> ClientResult<()> {
        let ids: Vec<Value> = records.iter().map(|r| Value::String(r.id().to_string())).collect();
        let result = self.call(&R::method("delete"), ids).await?;
        clear_deleted(records, &result, R::IDS_KEY)?;
        tracing::debug!(api = R::API, count = records.len(), "deleted");
        Ok(())
    }

    /// `<api>.delete` by identifier.
    pub async fn delete_by_ids<R: Resource>(&self, ids: &[String]) -> ClientResult<()> {
        let result = self.call(&R::method("delete"), ids.to_vec()).await?;
        reconcile_count(ids.len(), &result, R::IDS_KEY)?;
        tracing::debug!(api = R::API, count = ids.len(), "deleted");
        Ok(())
    }
}
