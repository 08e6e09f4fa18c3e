//! API helpers for structured interaction with the clusters-management API

mod cluster;
mod core_methods;

// Re-exports from ocm-core
pub use ocm_core::{
    object::{List, Object, ObjectList},
    params::{DeleteParams, ListParams, PatchParams, PostParams},
    request::Request,
    Resource, Root,
};

use crate::Client;

/// The generic Api abstraction
///
/// This abstracts over a [`Request`] and a type `K` so that
/// we get automatic serialization/deserialization on the api calls
/// of the collection `K` is served from.
///
/// Collections directly under the API root are reached with [`Api::all`]:
///
/// ```no_run
/// # use ocm_client::{Api, Client};
/// # let client: Client = todo!();
/// use ocm_client::core::model::Cluster;
/// let clusters: Api<Cluster> = Api::all(client);
/// ```
///
/// Collections owned by an object, like the machine pools of a cluster, are
/// reached through [`Api::within`] or [`Api::children`]:
///
/// ```no_run
/// # use ocm_client::{Api, Client};
/// # let client: Client = todo!();
/// use ocm_client::core::model::{Cluster, MachinePool};
/// let pools: Api<MachinePool> = Api::within(client.clone(), "2a6ur5mkutse8nfo1mh2hp3mf1urosd5");
/// // Same collection
/// let clusters: Api<Cluster> = Api::all(client);
/// let pools: Api<MachinePool> = clusters.children("2a6ur5mkutse8nfo1mh2hp3mf1urosd5");
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "client")))]
#[derive(Clone)]
pub struct Api<K> {
    /// The request builder object with its collection dependent url
    pub(crate) request: Request,
    /// The client to use (from this library)
    pub(crate) client: Client,
    /// Note: Using `iter::Empty` over `PhantomData`, because we never actually keep any
    /// `K` objects, so `Empty` better models our constraints (in particular, `Empty<K>`
    /// is `Send`, even if `K` may not be).
    pub(crate) _phantom: std::iter::Empty<K>,
}

impl<K: Resource> Api<K> {
    /// Api over the collection at `url_path`, relative to the server url
    ///
    /// Escape hatch for collections this crate has no accessor for.
    pub fn from_path(client: Client, url_path: impl Into<String>) -> Self {
        Self {
            client,
            request: Request::new(url_path),
            _phantom: std::iter::empty(),
        }
    }

    /// Api over the collection `C` owned by the object `id` of this collection
    pub fn children<C>(&self, id: &str) -> Api<C>
    where
        C: Resource<Parent = K>,
    {
        let url_path = format!("{}/{}", ocm_core::object_path(&self.request.url_path, id), C::COLLECTION);
        Api {
            client: self.client.clone(),
            request: Request {
                url_path,
                impersonate: self.request.impersonate.clone(),
            },
            _phantom: std::iter::empty(),
        }
    }

    /// Make every call of this Api on behalf of `user`
    ///
    /// Sets the `Impersonate-User` header, which takes precedence over the
    /// impersonation of the [`Config`](crate::Config). Child Apis created afterwards
    /// inherit it.
    #[must_use]
    pub fn impersonate(mut self, user: impl Into<String>) -> Self {
        self.request = self.request.impersonate(user);
        self
    }

    /// Consume self and return the [`Client`]
    pub fn into_client(self) -> Client {
        self.into()
    }

    /// Return a reference to the current collection url path
    pub fn resource_url(&self) -> &str {
        &self.request.url_path
    }
}

impl<K: Resource<Parent = Root>> Api<K> {
    /// A collection served directly under the API root
    pub fn all(client: Client) -> Self {
        Self::from_path(client, ocm_core::collection_path::<K>())
    }
}

impl<K> Api<K>
where
    K: Resource,
    K::Parent: Resource<Parent = Root>,
{
    /// A collection owned by the object `parent_id` of a root collection
    pub fn within(client: Client, parent_id: &str) -> Self {
        Self::from_path(client, ocm_core::nested_collection_path::<K>(parent_id))
    }
}

impl<K> From<Api<K>> for Client {
    fn from(api: Api<K>) -> Self {
        api.client
    }
}
