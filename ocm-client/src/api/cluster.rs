use crate::{api::Api, Error, Result};
use ocm_core::model::{
    CloudProvider, CloudRegion, Cluster, ClusterStatus, DeleteProtection, ExternalConfiguration, Label,
    MachinePool, Manifest, Syncset, WifConfig, WifConfigStatus,
};

/// Actions and subresources of clusters
impl Api<Cluster> {
    /// Hibernate a cluster
    ///
    /// The cluster moves to `powering_down` and then `hibernating`. Only
    /// supported for some products and cloud providers.
    pub async fn hibernate(&self, id: &str) -> Result<()> {
        let mut req = self
            .request
            .post_subresource("hibernate", id, vec![])
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("hibernate");
        self.client.request_empty(req).await
    }

    /// Resume a hibernating cluster
    pub async fn resume(&self, id: &str) -> Result<()> {
        let mut req = self
            .request
            .post_subresource("resume", id, vec![])
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("resume");
        self.client.request_empty(req).await
    }

    /// Get the detailed status of a cluster
    pub async fn status(&self, id: &str) -> Result<ClusterStatus> {
        let mut req = self
            .request
            .get_subresource("status", id)
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("status");
        self.client.request::<ClusterStatus>(req).await
    }

    /// Get the delete protection of a cluster
    pub async fn delete_protection(&self, id: &str) -> Result<DeleteProtection> {
        let mut req = self
            .request
            .get_subresource("delete_protection", id)
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("delete_protection");
        self.client.request::<DeleteProtection>(req).await
    }

    /// Turn the delete protection of a cluster on or off
    ///
    /// ```no_run
    /// use ocm_client::Api;
    /// use ocm_client::core::model::{Cluster, DeleteProtection};
    /// # async fn wrapper() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client: ocm_client::Client = todo!();
    /// let clusters: Api<Cluster> = Api::all(client);
    /// let protection = DeleteProtection::builder().enabled(true).build()?;
    /// clusters.update_delete_protection("2a6ur5mkutse8nfo1mh2hp3mf1urosd5", &protection).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_delete_protection(&self, id: &str, protection: &DeleteProtection) -> Result<()> {
        let bytes = serde_json::to_vec(protection).map_err(Error::SerdeError)?;
        let mut req = self
            .request
            .update_subresource("delete_protection", id, bytes)
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("update_delete_protection");
        self.client.request_empty(req).await
    }

    /// Get the external configuration of a cluster
    ///
    /// The labels, manifests and syncsets in it are usually links; use the
    /// child Apis to get their content.
    pub async fn external_configuration(&self, id: &str) -> Result<ExternalConfiguration> {
        let mut req = self
            .request
            .get_subresource("external_configuration", id)
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("external_configuration");
        self.client.request::<ExternalConfiguration>(req).await
    }

    /// The machine pools of the cluster `id`
    pub fn machine_pools(&self, id: &str) -> Api<MachinePool> {
        self.children(id)
    }

    /// The manifests of the external configuration of the cluster `id`
    pub fn manifests(&self, id: &str) -> Api<Manifest> {
        self.children(id)
    }

    /// The syncsets of the external configuration of the cluster `id`
    pub fn syncsets(&self, id: &str) -> Api<Syncset> {
        self.children(id)
    }

    /// The labels of the external configuration of the cluster `id`
    pub fn labels(&self, id: &str) -> Api<Label> {
        self.children(id)
    }
}

impl Api<WifConfig> {
    /// Verify a workload identity federation config against GCP
    pub async fn status(&self, id: &str) -> Result<WifConfigStatus> {
        let mut req = self
            .request
            .get_subresource("status", id)
            .map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("status");
        self.client.request::<WifConfigStatus>(req).await
    }
}

impl Api<CloudProvider> {
    /// The regions of the cloud provider `id`
    pub fn regions(&self, id: &str) -> Api<CloudRegion> {
        self.children(id)
    }
}

#[cfg(test)]
mod tests {
    use http::{Method, StatusCode};
    use serde_json::json;

    use crate::{
        api::{testing::*, Api, ListParams},
        Error,
    };
    use ocm_core::model::{
        CloudProvider, Cluster, ClusterConfigurationMode, ClusterState, DeleteProtection, WifConfig,
    };

    const CLUSTERS: &str = "/api/clusters_mgmt/v1/clusters";

    #[tokio::test]
    async fn hibernate_and_resume() {
        let (client, server) = scenario(vec![
            Exchange::new(Method::POST, &format!("{CLUSTERS}/abc/hibernate")).respond_empty(StatusCode::ACCEPTED),
            Exchange::new(Method::POST, &format!("{CLUSTERS}/abc/resume")).respond(
                StatusCode::BAD_REQUEST,
                json!({"kind": "Error", "id": "400", "code": "CLUSTERS-MGMT-400", "reason": "Cluster is not hibernating"}),
            ),
        ]);
        let clusters: Api<Cluster> = Api::all(client);
        clusters.hibernate("abc").await.unwrap();
        match clusters.resume("abc").await {
            Err(Error::Api(ae)) => {
                assert_eq!(ae.status, 400);
                assert_eq!(ae.reason, "Cluster is not hibernating");
            }
            other => panic!("unexpected {other:?}"),
        }
        let seen = server.await.unwrap();
        assert!(seen[0].headers().get(http::header::CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn status() {
        let (client, server) = scenario(vec![Exchange::new(Method::GET, &format!("{CLUSTERS}/abc/status"))
            .respond(
                StatusCode::OK,
                json!({
                    "kind": "ClusterStatus",
                    "id": "abc",
                    "href": "/api/clusters_mgmt/v1/clusters/abc/status",
                    "state": "installing",
                    "description": "Installing cluster",
                    "dns_ready": true,
                    "configuration_mode": "full"
                }),
            )]);
        let clusters: Api<Cluster> = Api::all(client);
        let status = clusters.status("abc").await.unwrap();
        assert_eq!(status.state(), Some(&ClusterState::Installing));
        assert_eq!(status.dns_ready(), Some(&true));
        assert_eq!(status.configuration_mode(), Some(&ClusterConfigurationMode::Full));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn delete_protection() {
        let (client, server) = scenario(vec![
            Exchange::new(Method::GET, &format!("{CLUSTERS}/abc/delete_protection"))
                .respond(StatusCode::OK, json!({"enabled": false})),
            Exchange::new(Method::PATCH, &format!("{CLUSTERS}/abc/delete_protection"))
                .expect_body(json!({"enabled": true}))
                .respond_empty(StatusCode::OK),
        ]);
        let clusters: Api<Cluster> = Api::all(client);
        let protection = clusters.delete_protection("abc").await.unwrap();
        assert_eq!(protection.enabled(), Some(&false));

        let enable = DeleteProtection::builder().enabled(true).build().unwrap();
        clusters.update_delete_protection("abc", &enable).await.unwrap();
        let seen = server.await.unwrap();
        assert_eq!(
            seen[1].headers().get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn external_configuration_and_children() {
        let (client, server) = scenario(vec![
            Exchange::new(Method::GET, &format!("{CLUSTERS}/abc/external_configuration")).respond(
                StatusCode::OK,
                json!({
                    "labels": {"kind": "LabelListLink", "href": "/api/clusters_mgmt/v1/clusters/abc/external_configuration/labels"},
                    "syncsets": {"kind": "SyncsetListLink", "href": "/api/clusters_mgmt/v1/clusters/abc/external_configuration/syncsets"}
                }),
            ),
            Exchange::new(Method::GET, &format!("{CLUSTERS}/abc/external_configuration/labels")).respond(
                StatusCode::OK,
                json!({
                    "kind": "LabelList", "page": 1, "size": 1, "total": 1,
                    "items": [{"kind": "Label", "id": "team", "key": "team", "value": "sre"}]
                }),
            ),
        ]);
        let clusters: Api<Cluster> = Api::all(client);
        let external = clusters.external_configuration("abc").await.unwrap();
        let labels = external.labels().unwrap();
        assert!(labels.link());
        assert!(labels.is_empty());
        assert_eq!(
            labels.href(),
            Some("/api/clusters_mgmt/v1/clusters/abc/external_configuration/labels")
        );
        assert!(external.manifests().is_none());

        let labels = clusters.labels("abc").list(&ListParams::default()).await.unwrap();
        assert_eq!(labels.get(0).and_then(|l| l.value()).map(String::as_str), Some("sre"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn typed_child_paths() {
        let (client, _server) = scenario(vec![]);
        let clusters: Api<Cluster> = Api::all(client.clone());
        assert_eq!(
            clusters.machine_pools("abc").resource_url(),
            "/api/clusters_mgmt/v1/clusters/abc/machine_pools"
        );
        assert_eq!(
            clusters.manifests("abc").resource_url(),
            "/api/clusters_mgmt/v1/clusters/abc/external_configuration/manifests"
        );
        assert_eq!(
            clusters.syncsets("abc").resource_url(),
            "/api/clusters_mgmt/v1/clusters/abc/external_configuration/syncsets"
        );
        let providers: Api<CloudProvider> = Api::all(client);
        assert_eq!(
            providers.regions("gcp").resource_url(),
            "/api/clusters_mgmt/v1/cloud_providers/gcp/regions"
        );
    }

    #[tokio::test]
    async fn wif_config_status() {
        let (client, server) = scenario(vec![Exchange::new(
            Method::GET,
            "/api/clusters_mgmt/v1/gcp/wif_configs/w1/status",
        )
        .respond(
            StatusCode::OK,
            json!({"configured": false, "description": "missing role roles/compute.admin"}),
        )]);
        let wif: Api<WifConfig> = Api::all(client);
        let status = wif.status("w1").await.unwrap();
        assert_eq!(status.configured(), Some(&false));
        server.await.unwrap();
    }
}
