use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::{
    Aws, BillingModel, Ccs, CloudProvider, CloudRegion, ClusterState, ExternalConfiguration, Flavour, Gcp,
    GcpEncryptionKey, GcpNetwork, ListeningMethod, MachinePool, MachinePoolAutoscaling, MachineType, Product,
    RootVolume, Value, Version,
};
use crate::{List, Resource, Root};

ocm_enum! {
    /// Who may change the configuration of a cluster
    ClusterConfigurationMode {
        Full => "full",
        ReadOnly => "read_only",
    }
}

ocm_type! {
    /// An OpenShift cluster
    ///
    /// ```
    /// use ocm_core::model::{Cluster, ClusterNodes, CloudRegion, Product};
    ///
    /// let cluster = Cluster::builder()
    ///     .name("mycluster")
    ///     .product(Product::builder().id("rosa"))
    ///     .region(CloudRegion::builder().id("us-east-1"))
    ///     .multi_az(true)
    ///     .nodes(ClusterNodes::builder().compute(3))
    ///     .build()?;
    /// assert_eq!(cluster.kind(), "Cluster");
    /// # Ok::<(), ocm_core::BuildError>(())
    /// ```
    object Cluster("Cluster") / ClusterBuilder {
        name: String => "name",
        domain_prefix: String => "domain_prefix",
        external_id: String => "external_id",
        infra_id: String => "infra_id",
        state: ClusterState => "state",
        status: ClusterStatus => "status",
        product: Product => "product",
        flavour: Flavour => "flavour",
        cloud_provider: CloudProvider => "cloud_provider",
        region: CloudRegion => "region",
        version: Version => "version",
        openshift_version: String => "openshift_version",
        billing_model: BillingModel => "billing_model",
        managed: bool => "managed",
        multi_az: bool => "multi_az",
        multi_arch_enabled: bool => "multi_arch_enabled",
        fips: bool => "fips",
        etcd_encryption: bool => "etcd_encryption",
        disable_user_workload_monitoring: bool => "disable_user_workload_monitoring",
        ccs: Ccs => "ccs",
        aws: Aws => "aws",
        gcp: Gcp => "gcp",
        gcp_network: GcpNetwork => "gcp_network",
        gcp_encryption_key: GcpEncryptionKey => "gcp_encryption_key",
        api: ClusterApi => "api",
        console: ClusterConsole => "console",
        dns: Dns => "dns",
        network: Network => "network",
        nodes: ClusterNodes => "nodes",
        proxy: Proxy => "proxy",
        additional_trust_bundle: String => "additional_trust_bundle",
        hypershift: Hypershift => "hypershift",
        delete_protection: DeleteProtection => "delete_protection",
        external_configuration: ExternalConfiguration => "external_configuration",
        machine_pools: List<MachinePool> => "machine_pools",
        node_drain_grace_period: Value => "node_drain_grace_period",
        storage_quota: Value => "storage_quota",
        load_balancer_quota: i32 => "load_balancer_quota",
        properties: BTreeMap<String, String> => "properties",
        creation_timestamp: DateTime<Utc> => "creation_timestamp",
        expiration_timestamp: DateTime<Utc> => "expiration_timestamp",
    }
}

impl Resource for Cluster {
    type Parent = Root;

    const COLLECTION: &'static str = "clusters";
}

ocm_type! {
    /// Detailed status of a cluster, served at `/clusters/{id}/status`
    object ClusterStatus("ClusterStatus") / ClusterStatusBuilder {
        state: ClusterState => "state",
        description: String => "description",
        dns_ready: bool => "dns_ready",
        oidc_ready: bool => "oidc_ready",
        provision_error_code: String => "provision_error_code",
        provision_error_message: String => "provision_error_message",
        limited_support_reason_count: i32 => "limited_support_reason_count",
        configuration_mode: ClusterConfigurationMode => "configuration_mode",
        current_compute: i32 => "current_compute",
    }
}

ocm_type! {
    /// The Kubernetes API endpoint
    struct ClusterApi / ClusterApiBuilder {
        url: String => "url",
        listening: ListeningMethod => "listening",
    }
}

ocm_type! {
    /// The web console
    struct ClusterConsole / ClusterConsoleBuilder {
        url: String => "url",
    }
}

ocm_type! {
    /// DNS settings
    struct Dns / DnsBuilder {
        base_domain: String => "base_domain",
    }
}

ocm_type! {
    /// Network layout of a cluster
    struct Network / NetworkBuilder {
        /// Network plugin, `OVNKubernetes` for current versions.
        type_: String => "type",
        machine_cidr: String => "machine_cidr",
        pod_cidr: String => "pod_cidr",
        service_cidr: String => "service_cidr",
        host_prefix: i32 => "host_prefix",
    }
}

ocm_type! {
    /// Node counts and types of a cluster
    struct ClusterNodes / ClusterNodesBuilder {
        master: i32 => "master",
        infra: i32 => "infra",
        compute: i32 => "compute",
        master_machine_type: MachineType => "master_machine_type",
        infra_machine_type: MachineType => "infra_machine_type",
        compute_machine_type: MachineType => "compute_machine_type",
        compute_labels: BTreeMap<String, String> => "compute_labels",
        compute_root_volume: RootVolume => "compute_root_volume",
        autoscale_compute: MachinePoolAutoscaling => "autoscale_compute",
        availability_zones: Vec<String> => "availability_zones",
    }
}

ocm_type! {
    /// Cluster-wide egress proxy
    struct Proxy / ProxyBuilder {
        http_proxy: String => "http_proxy",
        https_proxy: String => "https_proxy",
        no_proxy: String => "no_proxy",
    }
}

ocm_type! {
    /// Hosted control plane settings
    struct Hypershift / HypershiftBuilder {
        enabled: bool => "enabled",
    }
}

ocm_type! {
    /// Protection against accidental deletion, served at `/clusters/{id}/delete_protection`
    struct DeleteProtection / DeleteProtectionBuilder {
        enabled: bool => "enabled",
    }
}
