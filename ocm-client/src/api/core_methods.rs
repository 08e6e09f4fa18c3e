use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use crate::{api::Api, Error, Result};
use ocm_core::{object::ObjectList, params::*, ErrorResponse, Resource};

/// Page size used by [`Api::list_all`] when the params leave it unset
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// GET/POST/PATCH/DELETE abstractions
impl<K> Api<K>
where
    K: Resource + Clone + DeserializeOwned + Debug,
{
    /// Get an object of the collection by id
    ///
    /// ```no_run
    /// # use ocm_client::Api;
    /// use ocm_client::core::model::Cluster;
    ///
    /// # async fn wrapper() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client: ocm_client::Client = todo!();
    /// let clusters: Api<Cluster> = Api::all(client);
    /// let c: Cluster = clusters.get("2a6ur5mkutse8nfo1mh2hp3mf1urosd5").await?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// This function assumes that the object is expected to always exist, and returns [`Error`] if it does not.
    /// Consider using [`Api::get_opt`] if you need to handle missing objects.
    pub async fn get(&self, id: &str) -> Result<K> {
        let mut req = self.request.get(id).map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("get");
        self.client.request::<K>(req).await
    }

    /// [Get](`Api::get`) an object if it exists, returns [`None`] if it doesn't exist
    ///
    /// ```no_run
    /// # use ocm_client::Api;
    /// use ocm_client::core::model::Cluster;
    ///
    /// # async fn wrapper() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client: ocm_client::Client = todo!();
    /// let clusters: Api<Cluster> = Api::all(client);
    /// if let Some(cluster) = clusters.get_opt("2a6ur5mkutse8nfo1mh2hp3mf1urosd5").await? {
    ///     // Cluster was found
    /// } else {
    ///     // Cluster was not found
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_opt(&self, id: &str) -> Result<Option<K>> {
        match self.get(id).await {
            Ok(obj) => Ok(Some(obj)),
            Err(Error::Api(ErrorResponse { status: 404, .. })) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Get one page of the collection
    ///
    /// ```no_run
    /// use ocm_client::api::{Api, ListParams};
    /// use ocm_client::core::model::Cluster;
    /// # async fn wrapper() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client: ocm_client::Client = todo!();
    /// let clusters: Api<Cluster> = Api::all(client);
    /// let lp = ListParams::default().size(20).order("creation_timestamp desc");
    /// let page = clusters.list(&lp).await?;
    /// println!("showing {} of {} clusters", page.len(), page.total);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, lp: &ListParams) -> Result<ObjectList<K>> {
        let mut req = self.request.list(lp).map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("list");
        self.client.request::<ObjectList<K>>(req).await
    }

    /// Get one page of the objects matching a search expression
    ///
    /// Shorthand for [`Api::list`] with [`ListParams::search`] set to `query`.
    pub async fn search(&self, query: &str, lp: &ListParams) -> Result<ObjectList<K>> {
        self.list(&lp.clone().search(query)).await
    }

    /// Get every object of the collection, one page at a time
    ///
    /// Starts at `lp.page` (or the first page) and requests pages of `lp.size`
    /// items, or [`DEFAULT_PAGE_SIZE`] when unset. Stops once `total` items were
    /// collected. When the server reports no total, stops at the first page
    /// holding fewer items than requested. An empty page always ends the walk.
    pub async fn list_all(&self, lp: &ListParams) -> Result<Vec<K>> {
        let size = lp.size.unwrap_or(DEFAULT_PAGE_SIZE);
        let mut lp = lp.clone().size(size);
        let mut page = lp.page.unwrap_or(1);
        let mut items = Vec::new();
        loop {
            lp = lp.page(page);
            let chunk = self.list(&lp).await?;
            let received = chunk.len();
            tracing::trace!(page, received, total = chunk.total, "listed page");
            items.extend(chunk.items);
            // Pages may hold fewer items than requested, a reported total decides
            let done = if chunk.total > 0 {
                items.len() >= chunk.total as usize
            } else {
                received < size as usize
            };
            if done || received == 0 {
                return Ok(items);
            }
            page += 1;
        }
    }

    /// Delete an object of the collection
    ///
    /// The server may take a while to actually remove it; a cluster for
    /// instance goes through the `uninstalling` state first. See
    /// `ocm_runtime::wait::delete_and_wait` to wait for it to disappear.
    pub async fn delete(&self, id: &str, dp: &DeleteParams) -> Result<()> {
        let mut req = self.request.delete(id, dp).map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("delete");
        self.client.request_empty(req).await
    }
}

impl<K> Api<K>
where
    K: Resource + Serialize + Clone + DeserializeOwned + Debug,
{
    /// Add an object to the collection
    ///
    /// Returns the object as stored by the server, with its id and href filled in.
    ///
    /// ```no_run
    /// use ocm_client::api::{Api, PostParams};
    /// use ocm_client::core::model::MachinePool;
    /// # async fn wrapper() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client: ocm_client::Client = todo!();
    /// let pools: Api<MachinePool> = Api::within(client, "2a6ur5mkutse8nfo1mh2hp3mf1urosd5");
    /// let pool = MachinePool::builder()
    ///     .id("gpu")
    ///     .instance_type("g4dn.xlarge")
    ///     .replicas(1)
    ///     .build()?;
    /// let created = pools.add(&PostParams::default(), &pool).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add(&self, pp: &PostParams, data: &K) -> Result<K> {
        let bytes = serde_json::to_vec(data).map_err(Error::SerdeError)?;
        let mut req = self.request.create(pp, bytes).map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("add");
        self.client.request::<K>(req).await
    }

    /// Update the attributes of an object
    ///
    /// Only the attributes present in `data` are sent, everything else is left
    /// as it is on the server. Returns the updated object.
    ///
    /// ```no_run
    /// use ocm_client::api::{Api, PatchParams};
    /// use ocm_client::core::model::MachinePool;
    /// # async fn wrapper() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client: ocm_client::Client = todo!();
    /// let pools: Api<MachinePool> = Api::within(client, "2a6ur5mkutse8nfo1mh2hp3mf1urosd5");
    /// let patch = MachinePool::builder().replicas(3).build()?;
    /// pools.update("worker", &PatchParams::default(), &patch).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update(&self, id: &str, pp: &PatchParams, data: &K) -> Result<K> {
        let bytes = serde_json::to_vec(data).map_err(Error::SerdeError)?;
        let mut req = self.request.update(id, pp, bytes).map_err(Error::BuildRequest)?;
        req.extensions_mut().insert("update");
        self.client.request::<K>(req).await
    }
}

#[cfg(test)]
mod tests {
    use http::{Method, StatusCode};
    use serde_json::json;

    use crate::{
        api::{testing::*, Api, DeleteParams, ListParams, PatchParams, PostParams},
        Error,
    };
    use ocm_core::model::{Cluster, ClusterState, MachinePool, Version};

    const CLUSTERS: &str = "/api/clusters_mgmt/v1/clusters";

    fn page(page: u32, total: u32, ids: &[&str]) -> serde_json::Value {
        let items: Vec<_> = ids
            .iter()
            .map(|id| json!({"kind": "Version", "id": id, "href": format!("/api/clusters_mgmt/v1/versions/{id}")}))
            .collect();
        json!({"kind": "VersionList", "page": page, "size": ids.len(), "total": total, "items": items})
    }

    #[tokio::test]
    async fn get_decodes_the_object() {
        let (client, server) = scenario(vec![Exchange::new(Method::GET, &format!("{CLUSTERS}/abc")).respond(
            StatusCode::OK,
            json!({"kind": "Cluster", "id": "abc", "href": "/api/clusters_mgmt/v1/clusters/abc", "name": "mycluster", "state": "ready"}),
        )]);
        let clusters: Api<Cluster> = Api::all(client);
        let cluster = clusters.get("abc").await.unwrap();
        assert_eq!(cluster.id(), Some("abc"));
        assert_eq!(cluster.name().map(String::as_str), Some("mycluster"));
        assert_eq!(cluster.state(), Some(&ClusterState::Ready));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn get_opt_maps_not_found_to_none() {
        let not_found = json!({"kind": "Error", "id": "404", "code": "CLUSTERS-MGMT-404", "reason": "Cluster 'gone' not found"});
        let forbidden = json!({"kind": "Error", "id": "403", "code": "CLUSTERS-MGMT-403", "reason": "Forbidden"});
        let (client, server) = scenario(vec![
            Exchange::new(Method::GET, &format!("{CLUSTERS}/gone")).respond(StatusCode::NOT_FOUND, not_found),
            Exchange::new(Method::GET, &format!("{CLUSTERS}/secret")).respond(StatusCode::FORBIDDEN, forbidden),
        ]);
        let clusters: Api<Cluster> = Api::all(client);
        assert!(clusters.get_opt("gone").await.unwrap().is_none());
        match clusters.get_opt("secret").await {
            Err(Error::Api(ae)) => assert_eq!(ae.status, 403),
            other => panic!("unexpected {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn search_sets_the_query() {
        let (client, server) = scenario(vec![Exchange::new(
            Method::GET,
            "/api/clusters_mgmt/v1/versions?size=2&search=enabled+%3D+%27t%27",
        )
        .respond(StatusCode::OK, page(1, 2, &["openshift-v4.15.1", "openshift-v4.15.2"]))]);
        let versions: Api<Version> = Api::all(client);
        let found = versions
            .search("enabled = 't'", &ListParams::default().size(2))
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found.total, 2);
        assert_eq!(found.get(1).and_then(|v| v.id()), Some("openshift-v4.15.2"));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn list_all_walks_pages_until_a_short_one() {
        let (client, server) = scenario(vec![
            Exchange::new(Method::GET, "/api/clusters_mgmt/v1/versions?page=1&size=2")
                .respond(StatusCode::OK, page(1, 0, &["a", "b"])),
            Exchange::new(Method::GET, "/api/clusters_mgmt/v1/versions?page=2&size=2")
                .respond(StatusCode::OK, page(2, 0, &["c", "d"])),
            Exchange::new(Method::GET, "/api/clusters_mgmt/v1/versions?page=3&size=2")
                .respond(StatusCode::OK, page(3, 0, &["e"])),
        ]);
        let versions: Api<Version> = Api::all(client);
        let all = versions.list_all(&ListParams::default().size(2)).await.unwrap();
        let ids: Vec<_> = all.iter().filter_map(|v| v.id()).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn list_all_stops_at_total() {
        let (client, server) = scenario(vec![
            Exchange::new(Method::GET, "/api/clusters_mgmt/v1/versions?page=1&size=2")
                .respond(StatusCode::OK, page(1, 4, &["a", "b"])),
            Exchange::new(Method::GET, "/api/clusters_mgmt/v1/versions?page=2&size=2")
                .respond(StatusCode::OK, page(2, 4, &["c", "d"])),
        ]);
        let versions: Api<Version> = Api::all(client);
        let all = versions.list_all(&ListParams::default().size(2)).await.unwrap();
        assert_eq!(all.len(), 4);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn list_all_follows_total_when_pages_are_capped() {
        let (client, server) = scenario(vec![
            Exchange::new(Method::GET, "/api/clusters_mgmt/v1/versions?page=1&size=3")
                .respond(StatusCode::OK, page(1, 4, &["a", "b"])),
            Exchange::new(Method::GET, "/api/clusters_mgmt/v1/versions?page=2&size=3")
                .respond(StatusCode::OK, page(2, 4, &["c", "d"])),
        ]);
        let versions: Api<Version> = Api::all(client);
        let all = versions.list_all(&ListParams::default().size(3)).await.unwrap();
        let ids: Vec<_> = all.iter().filter_map(|v| v.id()).collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn list_all_stops_on_an_empty_page() {
        let (client, server) = scenario(vec![
            Exchange::new(Method::GET, "/api/clusters_mgmt/v1/versions?page=1&size=2")
                .respond(StatusCode::OK, page(1, 5, &["a", "b"])),
            Exchange::new(Method::GET, "/api/clusters_mgmt/v1/versions?page=2&size=2")
                .respond(StatusCode::OK, page(2, 5, &[])),
        ]);
        let versions: Api<Version> = Api::all(client);
        let all = versions.list_all(&ListParams::default().size(2)).await.unwrap();
        assert_eq!(all.len(), 2);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn add_and_update_send_present_attributes() {
        let pools_url = format!("{CLUSTERS}/abc/machine_pools");
        let (client, server) = scenario(vec![
            Exchange::new(Method::POST, &format!("{pools_url}?dryRun=true"))
                .expect_body(json!({"kind": "MachinePool", "id": "gpu", "instance_type": "g4dn.xlarge", "replicas": 1}))
                .respond(
                    StatusCode::CREATED,
                    json!({"kind": "MachinePool", "id": "gpu", "href": format!("{pools_url}/gpu"), "instance_type": "g4dn.xlarge", "replicas": 1}),
                ),
            Exchange::new(Method::PATCH, &format!("{pools_url}/gpu"))
                .expect_body(json!({"kind": "MachinePool", "replicas": 3}))
                .respond(
                    StatusCode::OK,
                    json!({"kind": "MachinePool", "id": "gpu", "instance_type": "g4dn.xlarge", "replicas": 3}),
                ),
        ]);
        let pools: Api<MachinePool> = Api::within(client, "abc");
        let pool = MachinePool::builder()
            .id("gpu")
            .instance_type("g4dn.xlarge")
            .replicas(1)
            .build()
            .unwrap();
        let created = pools.add(&PostParams::default().dry_run(), &pool).await.unwrap();
        assert!(created.href().is_some());

        let patch = MachinePool::builder().replicas(3).build().unwrap();
        let updated = pools.update("gpu", &PatchParams::default(), &patch).await.unwrap();
        assert_eq!(updated.replicas(), Some(&3));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn delete_with_best_effort() {
        let (client, server) = scenario(vec![
            Exchange::new(Method::DELETE, &format!("{CLUSTERS}/abc?best_effort=true"))
                .respond_empty(StatusCode::NO_CONTENT),
        ]);
        let clusters: Api<Cluster> = Api::all(client).impersonate("alice@example.com");
        clusters
            .delete("abc", &DeleteParams::default().best_effort())
            .await
            .unwrap();
        let seen = server.await.unwrap();
        assert_eq!(seen[0].headers().get("Impersonate-User").unwrap(), "alice@example.com");
    }
}
