//! Types and traits for the OpenShift Cluster Manager clusters-management API
//!
//! Every model type is a record of optional attributes: an attribute is present
//! only when it was set on the builder or received from the server, and only
//! present attributes are serialized. Values are immutable and assembled with
//! builders:
//!
//! ```
//! use ocm_core::model::{Aws, Cluster, CloudRegion, Sts};
//!
//! let cluster = Cluster::builder()
//!     .name("mycluster")
//!     .region(CloudRegion::builder().id("us-east-1"))
//!     .aws(Aws::builder().sts(Sts::builder().enabled(true)))
//!     .build()?;
//! assert_eq!(cluster.name().map(String::as_str), Some("mycluster"));
//! assert!(cluster.api().is_none());
//! # Ok::<(), ocm_core::BuildError>(())
//! ```
//!
//! This crate has no I/O; the `ocm-client` crate sends the requests built here.
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

pub mod builder;
pub use builder::{BuildError, Buildable};

pub mod model;

pub mod object;
pub use object::{List, ListBuilder, Object, ObjectList};

pub mod params;

pub mod request;
pub use request::Request;

mod resource;
pub use resource::{collection_path, nested_collection_path, object_path, Resource, Root, API_ROOT};

mod error;
pub use error::ErrorResponse;

/// Convenient alias for `Result<T, Error>`
pub type Result<T, E = request::Error> = std::result::Result<T, E>;
