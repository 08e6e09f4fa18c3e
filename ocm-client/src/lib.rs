//! Crate for interacting with the OpenShift Cluster Manager clusters-management API
//!
//! # Example
//!
//! The following example lists the ROSA clusters of the account and adds a
//! machine pool to one of them.
//!
//! ```rust,no_run
//! use ocm_client::api::{Api, ListParams, PostParams};
//! use ocm_client::Client;
//! use ocm_core::model::{Cluster, MachinePool};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads OCM_TOKEN and OCM_URL, or the configuration file of the ocm CLI
//!     let client = Client::try_default()?;
//!
//!     let clusters: Api<Cluster> = Api::all(client);
//!     let lp = ListParams::default().size(100);
//!     for cluster in clusters.search("product.id = 'rosa'", &lp).await? {
//!         println!("found cluster {:?}", cluster.name());
//!     }
//!
//!     let pools = clusters.machine_pools("2a6ur5mkutse8nfo1mh2hp3mf1urosd5");
//!     let pool = MachinePool::builder()
//!         .id("infra")
//!         .instance_type("m5.xlarge")
//!         .replicas(2)
//!         .build()?;
//!     pools.add(&PostParams::default(), &pool).await?;
//!     Ok(())
//! }
//! ```
//!
//! For more details, see:
//!
//! - [`Client`](crate::client) for the extensible OCM client
//! - [`Config`](crate::config) for where the connection settings come from
//! - [`Api`](crate::Api) for the generic api methods available on every collection
#![cfg_attr(docsrs, feature(doc_cfg))]

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

cfg_client! {
    pub mod api;
    pub mod client;

    #[doc(inline)]
    pub use api::Api;
    #[doc(inline)]
    pub use client::Client;
}

cfg_config! {
    pub mod config;
    #[doc(inline)]
    pub use config::Config;
}

pub mod error;
#[doc(inline)]
pub use error::Error;
/// Convenient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub use ocm_core as core;
