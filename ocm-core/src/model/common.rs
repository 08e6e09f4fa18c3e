use chrono::{DateTime, Utc};

use crate::{List, Resource, Root};

ocm_enum! {
    /// Overall state of a cluster
    ClusterState {
        Error => "error",
        Hibernating => "hibernating",
        Installing => "installing",
        Pending => "pending",
        PoweringDown => "powering_down",
        Ready => "ready",
        Resuming => "resuming",
        Uninstalling => "uninstalling",
        Unknown => "unknown",
        Validating => "validating",
        Waiting => "waiting",
    }
}

ocm_enum! {
    /// How the cluster is paid for
    BillingModel {
        Standard => "standard",
        Marketplace => "marketplace",
        MarketplaceAws => "marketplace-aws",
        MarketplaceGcp => "marketplace-gcp",
        MarketplaceRhm => "marketplace-rhm",
        MarketplaceAzure => "marketplace-azure",
    }
}

ocm_enum! {
    /// Whether an endpoint is reachable from the internet
    ListeningMethod {
        External => "external",
        Internal => "internal",
    }
}

ocm_type! {
    /// A quantity with a unit, like `100 GiB`
    struct Value / ValueBuilder {
        unit: String => "unit",
        value: f64 => "value",
    }
}

ocm_type! {
    /// A cloud provider, like `aws` or `gcp`
    object CloudProvider("CloudProvider") / CloudProviderBuilder {
        name: String => "name",
        display_name: String => "display_name",
        regions: List<CloudRegion> => "regions",
    }
}

impl Resource for CloudProvider {
    type Parent = Root;

    const COLLECTION: &'static str = "cloud_providers";
}

ocm_type! {
    /// A region of a cloud provider
    object CloudRegion("CloudRegion") / CloudRegionBuilder {
        name: String => "name",
        display_name: String => "display_name",
        cloud_provider: CloudProvider => "cloud_provider",
        enabled: bool => "enabled",
        ccs_only: bool => "ccs_only",
        govcloud: bool => "govcloud",
        supports_multi_az: bool => "supports_multi_az",
        supports_hypershift: bool => "supports_hypershift",
        kms_location_id: String => "kms_location_id",
        kms_location_name: String => "kms_location_name",
    }
}

impl Resource for CloudRegion {
    type Parent = CloudProvider;

    const COLLECTION: &'static str = "regions";
}

ocm_type! {
    /// An OpenShift version clusters can be installed with or upgraded to
    object Version("Version") / VersionBuilder {
        raw_id: String => "raw_id",
        channel_group: String => "channel_group",
        enabled: bool => "enabled",
        /// Whether new clusters get this version unless told otherwise.
        is_default: bool => "default",
        rosa_enabled: bool => "rosa_enabled",
        hosted_control_plane_enabled: bool => "hosted_control_plane_enabled",
        release_image: String => "release_image",
        available_upgrades: Vec<String> => "available_upgrades",
        end_of_life_timestamp: DateTime<Utc> => "end_of_life_timestamp",
    }
}

impl Resource for Version {
    type Parent = Root;

    const COLLECTION: &'static str = "versions";
}

ocm_type! {
    /// The product a cluster belongs to, like `osd` or `rosa`
    object Product("Product") / ProductBuilder {
        name: String => "name",
    }
}

ocm_type! {
    /// A set of defaults for new clusters
    object Flavour("Flavour") / FlavourBuilder {
        name: String => "name",
        network: crate::model::Network => "network",
    }
}

ocm_type! {
    /// An instance type nodes can run on
    object MachineType("MachineType") / MachineTypeBuilder {
        name: String => "name",
        generic_name: String => "generic_name",
        category: String => "category",
        size: String => "size",
        architecture: String => "architecture",
        ccs_only: bool => "ccs_only",
        cpu: Value => "cpu",
        memory: Value => "memory",
        cloud_provider: CloudProvider => "cloud_provider",
    }
}

impl Resource for MachineType {
    type Parent = Root;

    const COLLECTION: &'static str = "machine_types";
}

ocm_type! {
    /// Customer cloud subscription: the cluster runs in the customer's own cloud account
    object Ccs("CCS") / CcsBuilder {
        enabled: bool => "enabled",
        disable_scp_checks: bool => "disable_scp_checks",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn unknown_enum_values_are_kept() {
        let state: ClusterState = serde_json::from_value(json!("sleeping")).unwrap();
        assert_eq!(state, ClusterState::Other("sleeping".into()));
        assert_eq!(serde_json::to_value(&state).unwrap(), json!("sleeping"));
        assert_eq!(ClusterState::from("powering_down"), ClusterState::PoweringDown);
        assert_eq!(BillingModel::MarketplaceAws.to_string(), "marketplace-aws");
    }

    #[test]
    fn other_holding_a_known_value_round_trips() {
        let spelled_out = ClusterState::Other("ready".into());
        let decoded: ClusterState = serde_json::from_value(serde_json::to_value(&spelled_out).unwrap()).unwrap();
        assert!(matches!(decoded, ClusterState::Ready));
        assert_eq!(decoded, spelled_out);

        let mut seen = std::collections::HashSet::new();
        seen.insert(ClusterState::Ready);
        assert!(seen.contains(&spelled_out));
        assert_ne!(ClusterState::Other("sleeping".into()), ClusterState::Ready);
    }

    #[test]
    fn recursive_provider_and_region() {
        let data = json!({
            "kind": "CloudProvider",
            "id": "aws",
            "display_name": "AWS",
            "regions": {
                "kind": "CloudRegionList",
                "items": [{
                    "kind": "CloudRegion",
                    "id": "us-east-1",
                    "supports_multi_az": true,
                    "cloud_provider": {"kind": "CloudProviderLink", "id": "aws", "href": "/api/clusters_mgmt/v1/cloud_providers/aws"}
                }]
            }
        });
        let provider: CloudProvider = serde_json::from_value(data.clone()).unwrap();
        let region = provider.regions().and_then(|regions| regions.get(0)).unwrap();
        assert_eq!(region.supports_multi_az(), Some(&true));
        assert!(region.cloud_provider().unwrap().link());
        assert_json_eq!(serde_json::to_value(&provider).unwrap(), data);
    }

    #[test]
    fn version_default_flag() {
        let version: Version = serde_json::from_value(json!({
            "kind": "Version",
            "id": "openshift-v4.16.2",
            "raw_id": "4.16.2",
            "default": true,
            "available_upgrades": ["4.16.3", "4.17.0"],
            "end_of_life_timestamp": "2025-12-27T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(version.is_default(), Some(&true));
        assert_eq!(version.available_upgrades().map(Vec::len), Some(2));
        let eol = version.end_of_life_timestamp().unwrap();
        assert_eq!(eol.to_rfc3339(), "2025-12-27T00:00:00+00:00");
    }
}
