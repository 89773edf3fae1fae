use normalization::Collection;
use params::Params;
use serde_json::json;
use types::{Host, HostGroup};

use crate::{Api, ClientResult, Resource};

impl Resource for Host {
    const API: &'static str = "host";
    const IDS_KEY: &'static str = "hostids";
}

impl Api {
    /// `host.get`
    ///
    /// Group identifiers and interfaces are only filled in when requested
    /// with `selectGroups` / `selectInterfaces`.
    pub async fn hosts_get(&self, params: &mut Params) -> ClientResult<Collection<Host>> {
        self.get(params).await
    }

    /// Hosts belonging to any of `groups`.
    pub async fn hosts_get_by_host_groups(&self, groups: &[HostGroup]) -> ClientResult<Collection<Host>> {
        let group_ids: Vec<&str> = groups.iter().map(|g| g.group_id.as_str()).collect();
        self.get(&mut Params::new().with("groupids", group_ids)).await
    }

    /// The host whose technical name is `host`.
    pub async fn host_get_by_host(&self, host: &str) -> ClientResult<Host> {
        self.get_one(&mut Params::new().with("filter", json!({ "host": [host] }))).await
    }

    /// `host.create`
    pub async fn hosts_create(&self, hosts: &mut [Host]) -> ClientResult<()> {
        self.create(hosts).await
    }

    /// `host.delete`
    pub async fn hosts_delete(&self, hosts: &mut [Host]) -> ClientResult<()> {
        self.delete(hosts).await
    }

    /// `host.delete` by identifier.
    pub async fn hosts_delete_by_ids(&self, ids: &[String]) -> ClientResult<()> {
        self.delete_by_ids::<Host>(ids).await
    }
}
