use crate::object::Object;

/// Path of the clusters-management API, relative to the server URL.
pub const API_ROOT: &str = "/api/clusters_mgmt/v1";

/// An object type served from a collection of the API.
///
/// Collections either sit directly under [`API_ROOT`] (with [`Root`] as parent), or
/// under an object of another resource, like the machine pools of a cluster.
pub trait Resource: Object {
    /// The resource this collection is nested under
    type Parent;

    /// Path of the collection relative to its parent object
    const COLLECTION: &'static str;
}

/// Parent of the collections served directly under [`API_ROOT`].
#[derive(Clone, Copy, Debug)]
pub struct Root;

/// Path of a collection served directly under [`API_ROOT`].
pub fn collection_path<K: Resource<Parent = Root>>() -> String {
    format!("{}/{}", API_ROOT, K::COLLECTION)
}

/// Path of the object `id` of the collection at `collection_path`.
///
/// The id is percent-encoded so it always names a single path segment and
/// cannot add a query or a fragment to the uri.
pub fn object_path(collection_path: &str, id: &str) -> String {
    // byte_serialize writes spaces as `+`, which paths take literally
    let segment = form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{collection_path}/{segment}")
}

/// Path of a collection owned by the object `parent_id` of a root collection.
pub fn nested_collection_path<K>(parent_id: &str) -> String
where
    K: Resource,
    K::Parent: Resource<Parent = Root>,
{
    format!(
        "{}/{}",
        object_path(&collection_path::<K::Parent>(), parent_id),
        K::COLLECTION
    )
}
