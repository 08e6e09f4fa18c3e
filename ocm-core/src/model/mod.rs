//! The clusters-management model catalog
//!
//! Objects ([`Cluster`], [`MachinePool`], ..) carry an identity and may be links.
//! Value records ([`Aws`], [`Network`], ..) are owned by the object they are nested in.
mod aws;
mod cluster;
mod common;
mod external_configuration;
mod gcp;
mod machine_pool;
mod wif_config;

pub use aws::*;
pub use cluster::*;
pub use common::*;
pub use external_configuration::*;
pub use gcp::*;
pub use machine_pool::*;
pub use wif_config::*;
