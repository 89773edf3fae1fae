use normalization::Collection;
use params::Params;
use types::Item;

use crate::{Api, ClientResult, Resource};

impl Resource for Item {
    const API: &'static str = "item";
    const IDS_KEY: &'static str = "itemids";
}

impl Api {
    /// `item.get`
    pub async fn items_get(&self, params: &mut Params) -> ClientResult<Collection<Item>> {
        self.get(params).await
    }

    /// Items of the application `application_id`.
    pub async fn items_get_by_application_id(&self, application_id: &str) -> ClientResult<Collection<Item>> {
        self.get(&mut Params::new().with("applicationids", application_id)).await
    }

    /// `item.create`
    pub async fn items_create(&self, items: &mut [Item]) -> ClientResult<()> {
        self.create(items).await
    }

    /// `item.delete`
    pub async fn items_delete(&self, items: &mut [Item]) -> ClientResult<()> {
        self.delete(items).await
    }

    /// `item.delete` by identifier.
    pub async fn items_delete_by_ids(&self, ids: &[String]) -> ClientResult<()> {
        self.delete_by_ids::<Item>(ids).await
    }
}
