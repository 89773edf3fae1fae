use normalization::Collection;
use params::Params;
use types::HostInterface;

use crate::{Api, ClientResult, Resource};

impl Resource for HostInterface {
    const API: &'static str = "hostinterface";
    const IDS_KEY: &'static str = "interfaceids";
}

impl Api {
    /// `hostinterface.get`
    pub async fn host_interfaces_get(&self, params: &mut Params) -> ClientResult<Collection<HostInterface>> {
        self.get(params).await
    }

    /// Interfaces of the given hosts.
    pub async fn host_interfaces_get_by_host_ids(
        &self,
        host_ids: &[String],
    ) -> ClientResult<Collection<HostInterface>> {
        self.get(&mut Params::new().with("hostids", host_ids)).await
    }

    /// `hostinterface.create`
    pub async fn host_interfaces_create(&self, interfaces: &mut [HostInterface]) -> ClientResult<()> {
        self.create(interfaces).await
    }

    /// `hostinterface.delete`
    pub async fn host_interfaces_delete(&self, interfaces: &mut [HostInterface]) -> ClientResult<()> {
        self.delete(interfaces).await
    }

    /// `hostinterface.delete` by identifier.
    pub async fn host_interfaces_delete_by_ids(&self, ids: &[String]) -> ClientResult<()> {
        self.delete_by_ids::<HostInterface>(ids).await
    }
}
