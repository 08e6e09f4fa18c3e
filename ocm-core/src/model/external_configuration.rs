use chrono::{DateTime, Utc};

use super::Cluster;
use crate::{List, Resource};

ocm_type! {
    /// Configuration applied to a cluster on top of its installation
    struct ExternalConfiguration / ExternalConfigurationBuilder {
        labels: List<Label> => "labels",
        manifests: List<Manifest> => "manifests",
        syncsets: List<Syncset> => "syncsets",
    }
}

ocm_type! {
    /// A label of a cluster
    object Label("Label") / LabelBuilder {
        key: String => "key",
        value: String => "value",
        /// Internal labels are hidden from the cluster owner.
        internal: bool => "internal",
    }
}

impl Resource for Label {
    type Parent = Cluster;

    const COLLECTION: &'static str = "external_configuration/labels";
}

ocm_type! {
    /// Kubernetes objects applied to a hosted control plane cluster
    object Manifest("Manifest") / ManifestBuilder {
        workloads: Vec<serde_json::Value> => "workloads",
        spec: serde_json::Value => "spec",
        creation_timestamp: DateTime<Utc> => "creation_timestamp",
        updated_timestamp: DateTime<Utc> => "updated_timestamp",
    }
}

impl Resource for Manifest {
    type Parent = Cluster;

    const COLLECTION: &'static str = "external_configuration/manifests";
}

ocm_type! {
    /// Kubernetes objects kept in sync on a classic cluster
    object Syncset("Syncset") / SyncsetBuilder {
        resources: Vec<serde_json::Value> => "resources",
    }
}

impl Resource for Syncset {
    type Parent = Cluster;

    const COLLECTION: &'static str = "external_configuration/syncsets";
}
