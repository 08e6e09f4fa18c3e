use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::{Resource, Root};

ocm_enum! {
    /// Whether EC2 instances require IMDSv2
    Ec2MetadataHttpTokens {
        Optional => "optional",
        Required => "required",
    }
}

ocm_type! {
    /// AWS settings of a cluster
    struct Aws / AwsBuilder {
        account_id: String => "account_id",
        access_key_id: String => "access_key_id",
        secret_access_key: String => "secret_access_key",
        billing_account_id: String => "billing_account_id",
        kms_key_arn: String => "kms_key_arn",
        sts: Sts => "sts",
        audit_log: AuditLog => "audit_log",
        etcd_encryption: AwsEtcdEncryption => "etcd_encryption",
        private_link: bool => "private_link",
        private_hosted_zone_id: String => "private_hosted_zone_id",
        private_hosted_zone_role_arn: String => "private_hosted_zone_role_arn",
        hcp_internal_communication_hosted_zone_id: String => "hcp_internal_communication_hosted_zone_id",
        vpc_endpoint_role_arn: String => "vpc_endpoint_role_arn",
        subnet_ids: Vec<String> => "subnet_ids",
        additional_allowed_principals: Vec<String> => "additional_allowed_principals",
        ec2_metadata_http_tokens: Ec2MetadataHttpTokens => "ec2_metadata_http_tokens",
        /// User tags applied to every AWS resource of the cluster.
        tags: BTreeMap<String, String> => "tags",
    }
}

ocm_type! {
    /// Security Token Service settings: the cluster assumes roles instead of using static keys
    struct Sts / StsBuilder {
        enabled: bool => "enabled",
        auto_mode: bool => "auto_mode",
        role_arn: String => "role_arn",
        support_role_arn: String => "support_role_arn",
        external_id: String => "external_id",
        oidc_endpoint_url: String => "oidc_endpoint_url",
        oidc_config: OidcConfig => "oidc_config",
        operator_role_prefix: String => "operator_role_prefix",
        permission_boundary: String => "permission_boundary",
        managed_policies: bool => "managed_policies",
        instance_iam_roles: InstanceIamRoles => "instance_iam_roles",
        operator_iam_roles: Vec<OperatorIamRole> => "operator_iam_roles",
    }
}

ocm_type! {
    /// Roles assumed by the nodes
    struct InstanceIamRoles / InstanceIamRolesBuilder {
        master_role_arn: String => "master_role_arn",
        worker_role_arn: String => "worker_role_arn",
    }
}

ocm_type! {
    /// Role assumed by the service account of a cluster operator
    struct OperatorIamRole / OperatorIamRoleBuilder {
        name: String => "name",
        namespace: String => "namespace",
        role_arn: String => "role_arn",
        service_account: String => "service_account",
    }
}

ocm_type! {
    /// Forwarding of the API server audit log to CloudWatch
    struct AuditLog / AuditLogBuilder {
        role_arn: String => "role_arn",
    }
}

ocm_type! {
    /// Encryption of etcd with a customer managed key
    struct AwsEtcdEncryption / AwsEtcdEncryptionBuilder {
        kms_key_arn: String => "kms_key_arn",
    }
}

ocm_type! {
    /// An OIDC provider configuration that STS clusters authenticate operators with
    object OidcConfig("OidcConfig") / OidcConfigBuilder {
        issuer_url: String => "issuer_url",
        managed: bool => "managed",
        reusable: bool => "reusable",
        secret_arn: String => "secret_arn",
        installer_role_arn: String => "installer_role_arn",
        organization_id: String => "organization_id",
        creation_timestamp: DateTime<Utc> => "creation_timestamp",
        last_used_timestamp: DateTime<Utc> => "last_used_timestamp",
        last_update_timestamp: DateTime<Utc> => "last_update_timestamp",
    }
}

impl Resource for OidcConfig {
    type Parent = Root;

    const COLLECTION: &'static str = "oidc_configs";
}
