//! Waits for objects to reach desired states
use std::{fmt::Debug, time::Duration};

use ocm_client::{core::Resource, Api};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of [`await_condition`]
#[derive(Debug, Error)]
pub enum Error {
    /// Getting the object failed for another reason than it not existing
    #[error("failed to probe for whether the condition is fulfilled yet: {0}")]
    ProbeFailed(#[source] ocm_client::Error),
}

/// Poll an object every `interval`, and wait for some condition `cond` to return `true`.
///
/// `cond` is passed `Some` if the object is found, otherwise `None`. Returns the
/// object as seen by the matching probe.
///
/// # Caveats
///
/// Keep in mind that the condition is typically fulfilled by the service, which might take a
/// long time. A cluster installation for instance takes upwards of half an hour. `await_condition`
/// does *not* automatically add a timeout. If this is desired, wrap it in [`tokio::time::timeout`].
///
/// # Errors
///
/// Fails on the first failed probe, e.g. when the token expired or the server is unreachable.
///
/// Does *not* fail if the object is not found.
///
/// # Usage
///
/// ```no_run
/// use ocm_client::{Api, core::model::Cluster};
/// use ocm_runtime::wait::{await_condition, conditions};
/// use std::time::Duration;
/// # async fn wrapper() -> Result<(), Box<dyn std::error::Error>> {
/// # let client: ocm_client::Client = todo!();
///
/// let clusters: Api<Cluster> = Api::all(client);
/// // .. add a cluster here ..
/// let ready = await_condition(&clusters, "2a6ur5mkutse8nfo1mh2hp3mf1urosd5", Duration::from_secs(30), conditions::cluster_ready());
/// let _ = tokio::time::timeout(Duration::from_secs(60 * 60), ready).await?;
/// # Ok(())
/// # }
/// ```
pub async fn await_condition<K>(
    api: &Api<K>,
    id: &str,
    interval: Duration,
    cond: impl Condition<K>,
) -> Result<Option<K>, Error>
where
    K: Clone + Debug + DeserializeOwned + Resource,
{
    loop {
        let obj = api.get_opt(id).await.map_err(Error::ProbeFailed)?;
        if cond.matches_object(obj.as_ref()) {
            tracing::debug!(id, "condition met");
            return Ok(obj);
        }
        tracing::trace!(id, found = obj.is_some(), ?interval, "condition not met yet");
        tokio::time::sleep(interval).await;
    }
}

/// A trait for condition functions to be used by [`await_condition`]
///
/// Note that this is auto-implemented for functions of type `fn(Option<&K>) -> bool`.
///
/// # Usage
///
/// ```
/// use ocm_client::core::model::Cluster;
/// use ocm_runtime::wait::Condition;
///
/// fn has_compute_nodes(count: i32) -> impl Condition<Cluster> {
///     move |obj: Option<&Cluster>| {
///         obj.and_then(|c| c.nodes())
///             .and_then(|nodes| nodes.compute())
///             .is_some_and(|compute| *compute == count)
///     }
/// }
/// ```
pub trait Condition<K: ?Sized> {
    /// Whether `obj` satisfies the condition. `None` means the object does not exist.
    fn matches_object(&self, obj: Option<&K>) -> bool;

    /// Returns a `Condition` that holds if `self` does not
    ///
    /// # Usage
    ///
    /// ```rust
    /// # use ocm_runtime::wait::Condition;
    /// let condition: fn(Option<&()>) -> bool = |_| true;
    /// assert!(condition.matches_object(None));
    /// assert!(!condition.not().matches_object(None));
    /// ```
    fn not(self) -> conditions::Not<Self>
    where
        Self: Sized,
    {
        conditions::Not(self)
    }

    /// Returns a `Condition` that holds if `self` and `other` both do
    ///
    /// # Usage
    ///
    /// ```rust
    /// # use ocm_runtime::wait::Condition;
    /// let cond_false: fn(Option<&()>) -> bool = |_| false;
    /// let cond_true: fn(Option<&()>) -> bool = |_| true;
    /// assert!(!cond_false.and(cond_true).matches_object(None));
    /// assert!(cond_true.and(cond_true).matches_object(None));
    /// ```
    fn and<Other: Condition<K>>(self, other: Other) -> conditions::And<Self, Other>
    where
        Self: Sized,
    {
        conditions::And(self, other)
    }

    /// Returns a `Condition` that holds if either `self` or `other` does
    ///
    /// # Usage
    ///
    /// ```rust
    /// # use ocm_runtime::wait::Condition;
    /// let cond_false: fn(Option<&()>) -> bool = |_| false;
    /// let cond_true: fn(Option<&()>) -> bool = |_| true;
    /// assert!(!cond_false.or(cond_false).matches_object(None));
    /// assert!(cond_false.or(cond_true).matches_object(None));
    /// ```
    fn or<Other: Condition<K>>(self, other: Other) -> conditions::Or<Self, Other>
    where
        Self: Sized,
    {
        conditions::Or(self, other)
    }
}

impl<K: ?Sized, F: Fn(Option<&K>) -> bool> Condition<K> for F {
    fn matches_object(&self, obj: Option<&K>) -> bool {
        (self)(obj)
    }
}

/// Common conditions to wait for
pub mod conditions {
    pub use super::Condition;
    use ocm_client::core::model::{Cluster, ClusterState};

    /// An await condition that returns `true` once the object can no longer be found.
    #[must_use]
    pub fn is_deleted<K>() -> impl Condition<K> {
        |obj: Option<&K>| obj.is_none()
    }

    /// An await condition that returns `true` if the object exists.
    ///
    /// NOTE: If waiting for an object to be deleted, prefer [`is_deleted`] for readability.
    #[must_use]
    pub fn exists<K>() -> impl Condition<K> {
        |obj: Option<&K>| obj.is_some()
    }

    /// An await condition for [`Cluster`] that returns `true` once it reports `state`
    #[must_use]
    pub fn cluster_in_state(state: ClusterState) -> impl Condition<Cluster> {
        move |obj: Option<&Cluster>| obj.and_then(Cluster::state) == Some(&state)
    }

    /// An await condition for [`Cluster`] that returns `true` once it is `ready`
    ///
    /// Fails fast in combination with [`cluster_in_state`]: waiting on
    /// `cluster_ready().or(cluster_in_state(ClusterState::Error))` stops on installation failures too.
    #[must_use]
    pub fn cluster_ready() -> impl Condition<Cluster> {
        cluster_in_state(ClusterState::Ready)
    }

    /// See [`Condition::not`]
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Not<A>(pub(super) A);
    impl<A: Condition<K>, K> Condition<K> for Not<A> {
        fn matches_object(&self, obj: Option<&K>) -> bool {
            !self.0.matches_object(obj)
        }
    }

    /// See [`Condition::and`]
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct And<A, B>(pub(super) A, pub(super) B);
    impl<A, B, K> Condition<K> for And<A, B>
    where
        A: Condition<K>,
        B: Condition<K>,
    {
        fn matches_object(&self, obj: Option<&K>) -> bool {
            self.0.matches_object(obj) && self.1.matches_object(obj)
        }
    }

    /// See [`Condition::or`]
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Or<A, B>(pub(super) A, pub(super) B);
    impl<A, B, K> Condition<K> for Or<A, B>
    where
        A: Condition<K>,
        B: Condition<K>,
    {
        fn matches_object(&self, obj: Option<&K>) -> bool {
            self.0.matches_object(obj) || self.1.matches_object(obj)
        }
    }
}

/// Utilities for deleting objects
pub mod delete {
    use super::{await_condition, conditions};
    use ocm_client::{api::DeleteParams, core::Resource, Api};
    use serde::de::DeserializeOwned;
    use std::{fmt::Debug, time::Duration};
    use thiserror::Error;

    /// Failure of [`delete_and_wait`]
    #[derive(Error, Debug)]
    pub enum Error {
        /// The delete call was rejected
        #[error("failed to delete object: {0}")]
        Delete(#[source] ocm_client::Error),
        /// Polling for the object failed
        #[error("failed to wait for object to be deleted: {0}")]
        Await(#[source] super::Error),
    }

    /// Delete an object, and poll every `interval` until the API no longer returns it.
    ///
    /// Clusters stay visible in the `uninstalling` state while their cloud resources
    /// are removed, which can take a while.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the object was unable to be deleted, or if the wait was interrupted.
    pub async fn delete_and_wait<K>(
        api: &Api<K>,
        id: &str,
        delete_params: &DeleteParams,
        interval: Duration,
    ) -> Result<(), Error>
    where
        K: Clone + Debug + DeserializeOwned + Resource,
    {
        api.delete(id, delete_params).await.map_err(Error::Delete)?;
        await_condition(api, id, interval, conditions::is_deleted())
            .await
            .map_err(Error::Await)?;
        Ok(())
    }
}
