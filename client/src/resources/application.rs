use normalization::Collection;
use params::Params;
use serde_json::json;
use types::Application;

use crate::{Api, ClientResult, Resource};

impl Resource for Application {
    const API: &'static str = "application";
    const IDS_KEY: &'static str = "applicationids";
}

impl Api {
    /// `application.get`
    pub async fn applications_get(&self, params: &mut Params) -> ClientResult<Collection<Application>> {
        self.get(params).await
    }

    /// The application with identifier `id`.
    pub async fn application_get_by_id(&self, id: &str) -> ClientResult<Application> {
        self.get_one(&mut Params::new().with("applicationids", id)).await
    }

    /// The application called `name` on host `host_id`.
    pub async fn application_get_by_host_id_and_name(
        &self,
        host_id: &str,
        name: &str,
    ) -> ClientResult<Application> {
        let mut params = Params::new().with("hostids", host_id).with("filter", json!({ "name": name }));
        self.get_one(&mut params).await
    }

    /// `application.create`
    pub async fn applications_create(&self, applications: &mut [Application]) -> ClientResult<()> {
        self.create(applications).await
    }

    /// `application.delete`
    pub async fn applications_delete(&self, applications: &mut [Application]) -> ClientResult<()> {
        self.delete(applications).await
    }

    /// `application.delete` by identifier.
    pub async fn applications_delete_by_ids(&self, ids: &[String]) -> ClientResult<()> {
        self.delete_by_ids::<Application>(ids).await
    }
}
