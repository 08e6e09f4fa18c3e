use crate::{Resource, Root};

ocm_enum! {
    /// How OCM reaches a service account of a workload identity federation config
    WifAccessMethod {
        Impersonate => "impersonate",
        Wif => "wif",
        Vm => "vm",
    }
}

ocm_type! {
    /// Workload identity federation configuration for GCP clusters
    ///
    /// Clusters referencing it authenticate with short-lived tokens instead of service account keys.
    object WifConfig("WifConfig") / WifConfigBuilder {
        display_name: String => "display_name",
        gcp: WifGcp => "gcp",
        wif_templates: Vec<String> => "wif_templates",
    }
}

impl Resource for WifConfig {
    type Parent = Root;

    const COLLECTION: &'static str = "gcp/wif_configs";
}

ocm_type! {
    /// GCP side of a workload identity federation config
    struct WifGcp / WifGcpBuilder {
        project_id: String => "project_id",
        project_number: String => "project_number",
        federated_project_id: String => "federated_project_id",
        federated_project_number: String => "federated_project_number",
        role_prefix: String => "role_prefix",
        impersonator_email: String => "impersonator_email",
        service_accounts: Vec<WifServiceAccount> => "service_accounts",
        workload_identity_pool: WifPool => "workload_identity_pool",
    }
}

ocm_type! {
    /// A service account created for a cluster component
    struct WifServiceAccount / WifServiceAccountBuilder {
        service_account_id: String => "service_account_id",
        osd_role: String => "osd_role",
        access_method: WifAccessMethod => "access_method",
        roles: Vec<WifRole> => "roles",
    }
}

ocm_type! {
    /// An IAM role bound to a service account
    struct WifRole / WifRoleBuilder {
        role_id: String => "role_id",
        predefined: bool => "predefined",
        permissions: Vec<String> => "permissions",
    }
}

ocm_type! {
    /// A workload identity pool
    struct WifPool / WifPoolBuilder {
        pool_id: String => "pool_id",
        identity_provider: WifIdentityProvider => "identity_provider",
    }
}

ocm_type! {
    /// The OIDC identity provider of a workload identity pool
    struct WifIdentityProvider / WifIdentityProviderBuilder {
        identity_provider_id: String => "identity_provider_id",
        issuer_url: String => "issuer_url",
        jwks: String => "jwks",
        allowed_audiences: Vec<String> => "allowed_audiences",
    }
}

ocm_type! {
    /// Result of verifying a workload identity federation config against GCP
    struct WifConfigStatus / WifConfigStatusBuilder {
        configured: bool => "configured",
        description: String => "description",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn wif_config_round_trip() {
        let data = json!({
            "kind": "WifConfig",
            "id": "2b3c",
            "href": "/api/clusters_mgmt/v1/gcp/wif_configs/2b3c",
            "display_name": "prod",
            "gcp": {
                "project_id": "my-project",
                "project_number": "1234567890",
                "role_prefix": "prod",
                "service_accounts": [{
                    "service_account_id": "osd-deployer",
                    "access_method": "impersonate",
                    "roles": [{"role_id": "osd_deployer_v4.17", "predefined": false, "permissions": ["compute.instances.create"]}]
                }],
                "workload_identity_pool": {
                    "pool_id": "prod",
                    "identity_provider": {
                        "identity_provider_id": "oidc",
                        "issuer_url": "https://storage.googleapis.com/prod",
                        "allowed_audiences": ["openshift"]
                    }
                }
            },
            "wif_templates": ["v4.17"]
        });
        let config: WifConfig = serde_json::from_value(data.clone()).unwrap();
        let account = config
            .gcp()
            .and_then(WifGcp::service_accounts)
            .and_then(|accounts| accounts.first())
            .unwrap();
        assert_eq!(account.access_method(), Some(&WifAccessMethod::Impersonate));
        assert_json_eq!(serde_json::to_value(&config).unwrap(), data);
    }

    #[test]
    fn status() {
        let status: WifConfigStatus =
            serde_json::from_value(json!({"configured": false, "description": "missing role"})).unwrap();
        assert_eq!(status.configured(), Some(&false));
    }
}
