use normalization::Collection;
use params::Params;
use types::{Trigger, TriggerPrototype};

use crate::{Api, ClientResult, Resource};

impl Resource for Trigger {
    const API: &'static str = "trigger";
    const IDS_KEY: &'static str = "triggerids";
}

impl Resource for TriggerPrototype {
    const API: &'static str = "trigger";
    const IDS_KEY: &'static str = "triggerids";
}

impl Api {
    /// `trigger.get`
    pub async fn triggers_get(&self, params: &mut Params) -> ClientResult<Collection<Trigger>> {
        self.get(params).await
    }

    /// Triggers of the given hosts.
    pub async fn triggers_get_by_host_ids(&self, host_ids: &[String]) -> ClientResult<Collection<Trigger>> {
        self.get(&mut Params::new().with("hostids", host_ids)).await
    }

    /// `trigger.create`. Only the writable fields of a trigger exist on a
    /// prototype, so nothing read-only can be sent.
    pub async fn triggers_create(&self, triggers: &mut [TriggerPrototype]) -> ClientResult<()> {
        self.create(triggers).await
    }

    /// `trigger.delete`
    pub async fn triggers_delete(&self, triggers: &mut [Trigger]) -> ClientResult<()> {
        self.delete(triggers).await
    }

    /// `trigger.delete` by identifier.
    pub async fn triggers_delete_by_ids(&self, ids: &[String]) -> ClientResult<()> {
        self.delete_by_ids::<Trigger>(ids).await
    }
}
