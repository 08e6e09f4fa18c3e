ocm_type! {
    /// GCP settings of a cluster
    ///
    /// Either the service account key attributes or [`authentication`](Gcp::authentication) are set.
    struct Gcp / GcpBuilder {
        project_id: String => "project_id",
        type_: String => "type",
        client_id: String => "client_id",
        client_email: String => "client_email",
        private_key_id: String => "private_key_id",
        private_key: String => "private_key",
        auth_uri: String => "auth_uri",
        token_uri: String => "token_uri",
        auth_provider_x509_cert_url: String => "auth_provider_x509_cert_url",
        client_x509_cert_url: String => "client_x509_cert_url",
        authentication: GcpAuthentication => "authentication",
        security: GcpSecurity => "security",
        private_service_connect: GcpPrivateServiceConnect => "private_service_connect",
    }
}

ocm_type! {
    /// Reference to the workload identity federation config a cluster authenticates with
    struct GcpAuthentication / GcpAuthenticationBuilder {
        kind: String => "kind",
        id: String => "id",
        href: String => "href",
    }
}

ocm_type! {
    /// An existing VPC to install the cluster into
    struct GcpNetwork / GcpNetworkBuilder {
        vpc_name: String => "vpc_name",
        vpc_project_id: String => "vpc_project_id",
        compute_subnet: String => "compute_subnet",
        control_plane_subnet: String => "control_plane_subnet",
    }
}

ocm_type! {
    /// Customer managed key for disk encryption
    struct GcpEncryptionKey / GcpEncryptionKeyBuilder {
        key_location: String => "key_location",
        key_ring: String => "key_ring",
        key_name: String => "key_name",
        kms_key_service_account: String => "kms_key_service_account",
    }
}

ocm_type! {
    /// Shielded VM settings
    struct GcpSecurity / GcpSecurityBuilder {
        secure_boot: bool => "secure_boot",
    }
}

ocm_type! {
    /// Private Service Connect settings of private clusters
    struct GcpPrivateServiceConnect / GcpPrivateServiceConnectBuilder {
        service_attachment_subnet: String => "service_attachment_subnet",
    }
}
