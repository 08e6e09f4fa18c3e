use std::collections::BTreeMap;

use super::Cluster;
use crate::Resource;

ocm_type! {
    /// A set of compute nodes of a cluster sharing an instance type
    object MachinePool("MachinePool") / MachinePoolBuilder {
        instance_type: String => "instance_type",
        replicas: i32 => "replicas",
        autoscaling: MachinePoolAutoscaling => "autoscaling",
        availability_zones: Vec<String> => "availability_zones",
        subnets: Vec<String> => "subnets",
        labels: BTreeMap<String, String> => "labels",
        taints: Vec<Taint> => "taints",
        root_volume: RootVolume => "root_volume",
        security_group_filters: Vec<String> => "security_group_filters",
        aws: AwsMachinePool => "aws",
        gcp: GcpMachinePool => "gcp",
    }
}

impl Resource for MachinePool {
    type Parent = Cluster;

    const COLLECTION: &'static str = "machine_pools";
}

ocm_type! {
    /// Bounds of an autoscaled machine pool
    ///
    /// Set instead of [`replicas`](MachinePool::replicas).
    struct MachinePoolAutoscaling / MachinePoolAutoscalingBuilder {
        min_replicas: i32 => "min_replicas",
        max_replicas: i32 => "max_replicas",
    }
}

ocm_type! {
    /// AWS specific settings of a machine pool
    struct AwsMachinePool / AwsMachinePoolBuilder {
        additional_security_group_ids: Vec<String> => "additional_security_group_ids",
        spot_market_options: AwsSpotMarketOptions => "spot_market_options",
        tags: BTreeMap<String, String> => "tags",
    }
}

ocm_type! {
    /// Use of spot instances
    struct AwsSpotMarketOptions / AwsSpotMarketOptionsBuilder {
        /// Highest hourly price to pay, the on-demand price when absent.
        max_price: f64 => "max_price",
    }
}

ocm_type! {
    /// GCP specific settings of a machine pool
    struct GcpMachinePool / GcpMachinePoolBuilder {
        secure_boot: bool => "secure_boot",
    }
}

ocm_type! {
    /// Root disk of the nodes
    struct RootVolume / RootVolumeBuilder {
        aws: AwsVolume => "aws",
        gcp: GcpVolume => "gcp",
    }
}

ocm_type! {
    /// An EBS volume
    struct AwsVolume / AwsVolumeBuilder {
        /// Size in GiB.
        size: i32 => "size",
    }
}

ocm_type! {
    /// A persistent disk
    struct GcpVolume / GcpVolumeBuilder {
        /// Size in GiB.
        size: i32 => "size",
    }
}

ocm_type! {
    /// A node taint, as in the Kubernetes API
    struct Taint / TaintBuilder {
        key: String => "key",
        value: String => "value",
        effect: String => "effect",
    }
}
