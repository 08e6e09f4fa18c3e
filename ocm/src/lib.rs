//! Ocm is an umbrella-crate for the clusters-management API of the [OpenShift Cluster Manager](https://console.redhat.com/openshift) in Rust.
//!
//! # Overview
//!
//! Ocm contains the typed model of the API, a client, and polling helpers to
//! wait for clusters to change state.
//!
//! The main modules are:
//!
//! - [`client`](crate::client) with the [`Client`](crate::Client) and its layers
//! - [`config`](crate::config) for the connection [`Config`](crate::Config)
//! - [`api`](crate::api) with the generic [`Api`](crate::Api) and the cluster actions
//! - [`runtime`](crate::runtime) with [`await_condition`](crate::runtime::wait::await_condition) and its conditions
//! - [`core`](crate::core) with the [`model`](crate::core::model) types and their builders
//!
//! # Using the Client
//! ```no_run
//! use ocm::{Client, api::{Api, ListParams, PostParams}};
//! use ocm::core::model::{Cluster, CloudRegion, Product, ClusterNodes};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads OCM_TOKEN / OCM_URL, or the file written by `ocm login`
//!     let client = Client::try_default()?;
//!
//!     let clusters: Api<Cluster> = Api::all(client);
//!     for c in clusters.list(&ListParams::default().size(50)).await? {
//!         println!("found cluster {:?} in state {:?}", c.name(), c.state());
//!     }
//!
//!     let spec = Cluster::builder()
//!         .name("mycluster")
//!         .product(Product::builder().id("osd"))
//!         .region(CloudRegion::builder().id("us-east-1"))
//!         .nodes(ClusterNodes::builder().compute(3))
//!         .build()?;
//!     let created = clusters.add(&PostParams::default().dry_run(), &spec).await?;
//!     println!("validated {:?}", created.name());
//!     Ok(())
//! }
//! ```
//!
//! # Waiting for a cluster
//!
//! ```no_run
//! # #[cfg(feature = "runtime")]
//! # async fn wrapper(clusters: ocm::Api<ocm::core::model::Cluster>) -> Result<(), Box<dyn std::error::Error>> {
//! use ocm::core::model::ClusterState;
//! use ocm::runtime::wait::{await_condition, conditions, Condition};
//! use std::time::Duration;
//!
//! let settled = conditions::cluster_ready().or(conditions::cluster_in_state(ClusterState::Error));
//! let wait = await_condition(&clusters, "2a6ur5mkutse8nfo1mh2hp3mf1urosd5", Duration::from_secs(30), settled);
//! let cluster = tokio::time::timeout(Duration::from_secs(3600), wait).await??;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

macro_rules! cfg_client {
    ($($item:item)*) => {
        $(
            #[cfg_attr(docsrs, doc(cfg(feature = "client")))]
            #[cfg(feature = "client")]
            $item
        )*
    }
}
macro_rules! cfg_config {
    ($($item:item)*) => {
        $(
            #[cfg_attr(docsrs, doc(cfg(feature = "config")))]
            #[cfg(feature = "config")]
            $item
        )*
    }
}

macro_rules! cfg_error {
    ($($item:item)*) => {
        $(
            #[cfg_attr(docsrs, doc(cfg(any(feature = "config", feature = "client"))))]
            #[cfg(any(feature = "config", feature = "client"))]
            $item
        )*
    }
}

cfg_client! {
    pub use ocm_client::api;
    pub use ocm_client::client;

    #[doc(inline)]
    pub use api::Api;
    #[doc(inline)]
    pub use client::Client;
}

cfg_config! {
    pub use ocm_client::config;
    #[doc(inline)]
    pub use config::Config;
}

cfg_error! {
    pub use ocm_client::error;
    #[doc(inline)] pub use error::Error;
    /// Convenient alias for `Result<T, Error>`
    pub type Result<T, E = Error> = std::result::Result<T, E>;
}

/// Re-exports from [`ocm-runtime`](ocm_runtime)
#[cfg(feature = "runtime")]
#[cfg_attr(docsrs, doc(cfg(feature = "runtime")))]
#[doc(inline)]
pub use ocm_runtime as runtime;

pub use crate::core::{Buildable, Object, Resource};
/// Re-exports from [`ocm_core`](ocm_core)
#[doc(inline)]
pub use ocm_core as core;

// Tests that need a real account
// Can be run with `OCM_TOKEN=... cargo test -p ocm --lib --features=runtime -- --ignored`
#[cfg(all(test, feature = "client"))]
mod test {
    use crate::{
        api::{Api, ListParams},
        core::model::{Cluster, Version},
        Client,
    };

    #[tokio::test]
    #[ignore = "needs an OCM account"]
    async fn lists_enabled_versions() -> Result<(), Box<dyn std::error::Error>> {
        let client = Client::try_default()?;
        let versions: Api<Version> = Api::all(client);
        let page = versions
            .search("enabled = 't'", &ListParams::default().size(10))
            .await?;
        assert!(!page.is_empty());
        assert!(page.iter().all(|v| v.enabled() == Some(&true)));
        Ok(())
    }

    #[tokio::test]
    #[ignore = "needs an OCM account"]
    async fn missing_cluster_is_none() -> Result<(), Box<dyn std::error::Error>> {
        let client = Client::try_default()?;
        let clusters: Api<Cluster> = Api::all(client);
        assert!(clusters.get_opt("0000000000000000000000000000000").await?.is_none());
        Ok(())
    }

    #[cfg(feature = "runtime")]
    #[tokio::test]
    #[ignore = "needs an OCM account"]
    async fn version_exists() -> Result<(), Box<dyn std::error::Error>> {
        use crate::runtime::wait::{await_condition, conditions};
        use std::time::Duration;

        let client = Client::try_default()?;
        let versions: Api<Version> = Api::all(client);
        let first = versions.list(&ListParams::default().size(1)).await?;
        let id = first.get(0).and_then(|v| v.id()).ok_or("no versions")?.to_string();
        let found = await_condition(&versions, &id, Duration::from_secs(1), conditions::exists()).await?;
        assert!(found.is_some());
        Ok(())
    }
}
