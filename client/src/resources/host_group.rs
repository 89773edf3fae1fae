use normalization::Collection;
use params::Params;
use types::HostGroup;

use crate::{Api, ClientResult, Resource};

impl Resource for HostGroup {
    const API: &'static str = "hostgroup";
    const IDS_KEY: &'static str = "groupids";
}

impl Api {
    /// `hostgroup.get`
    pub async fn host_groups_get(&self, params: &mut Params) -> ClientResult<Collection<HostGroup>> {
        self.get(params).await
    }

    /// The host group with identifier `id`.
    pub async fn host_group_get_by_id(&self, id: &str) -> ClientResult<HostGroup> {
        self.get_one(&mut Params::new().with("groupids", id)).await
    }

    /// `hostgroup.create`
    pub async fn host_groups_create(&self, groups: &mut [HostGroup]) -> ClientResult<()> {
        self.create(groups).await
    }

    /// `hostgroup.delete`
    pub async fn host_groups_delete(&self, groups: &mut [HostGroup]) -> ClientResult<()> {
        self.delete(groups).await
    }

    /// `hostgroup.delete` by identifier.
    pub async fn host_groups_delete_by_ids(&self, ids: &[String]) -> ClientResult<()> {
        self.delete_by_ids::<HostGroup>(ids).await
    }
}
