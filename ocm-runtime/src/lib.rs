//! Runtime helpers for the OpenShift Cluster Manager API
//!
//! The API offers no watch; changes made by the service, like a cluster
//! finishing its installation, are observed by polling the object. The [`wait`]
//! module provides such polling loops and the conditions to stop them.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod wait;

pub use wait::{await_condition, Condition};
