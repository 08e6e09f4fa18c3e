use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error response from the API.
///
/// Returned as the body of every response with a status of 400 or above.
#[derive(Error, Deserialize, Serialize, Debug, Clone, Eq, PartialEq)]
#[error("{reason} (status {status}, code {code})")]
pub struct ErrorResponse {
    /// Always `Error`
    #[serde(default)]
    pub kind: String,
    /// Identifier of the error, the status code as a string for most errors
    #[serde(default)]
    pub id: String,
    /// Link to the documentation of the error
    #[serde(default)]
    pub href: String,
    /// Machine readable error code, e.g. `CLUSTERS-MGMT-404`
    #[serde(default)]
    pub code: String,
    /// A human readable description of the error
    #[serde(default)]
    pub reason: String,
    /// Identifier of the failed operation, for support requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    /// Extra data some errors carry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// HTTP status of the response
    ///
    /// Not part of the body; filled in by the client.
    #[serde(skip)]
    pub status: u16,
}

impl ErrorResponse {
    /// An error synthesized from a response whose body is not an error object.
    pub fn from_status(status: u16, text: &str) -> Self {
        Self {
            kind: "Error".into(),
            id: status.to_string(),
            href: String::new(),
            code: String::new(),
            reason: text.to_string(),
            operation_id: None,
            details: None,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND: &str = r#"
    {
      "kind": "Error",
      "id": "404",
      "href": "/api/clusters_mgmt/v1/errors/404",
      "code": "CLUSTERS-MGMT-404",
      "reason": "Cluster '123' not found",
      "operation_id": "7d6b8c1e-2f0b-4c0a-9d49-1b0a3e3b9c11"
    }
    "#;

    #[test]
    fn not_found() {
        let err: ErrorResponse = serde_json::from_str(NOT_FOUND).unwrap();
        assert_eq!(err.code, "CLUSTERS-MGMT-404");
        assert_eq!(err.id, "404");
        assert_eq!(err.status, 0);
        assert_eq!(
            err.operation_id.as_deref(),
            Some("7d6b8c1e-2f0b-4c0a-9d49-1b0a3e3b9c11")
        );
        assert!(err.details.is_none());
    }

    #[test]
    fn display() {
        let mut err: ErrorResponse = serde_json::from_str(NOT_FOUND).unwrap();
        err.status = 404;
        assert_eq!(
            err.to_string(),
            "Cluster '123' not found (status 404, code CLUSTERS-MGMT-404)"
        );
    }

    #[test]
    fn synthesized() {
        let err = ErrorResponse::from_status(502, "Bad Gateway");
        assert_eq!(err.kind, "Error");
        assert_eq!(err.id, "502");
        assert_eq!(err.reason, "Bad Gateway");
    }
}
