//! Error handling in [`ocm_client`][crate]
use std::path::PathBuf;

use thiserror::Error;

pub use ocm_core::ErrorResponse;

/// Possible errors when working with [`ocm_client`][crate]
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a status of 400 or above
    ///
    /// Holds the decoded error body, or one synthesized from the status
    /// when the body could not be decoded.
    #[error("ApiError: {0} ({0:?})")]
    Api(#[source] ErrorResponse),

    /// Hyper error
    #[cfg(feature = "client")]
    #[error("HyperError: {0}")]
    HyperError(#[source] hyper::Error),
    /// Service error
    #[cfg(feature = "client")]
    #[error("ServiceError: {0}")]
    Service(#[source] tower::BoxError),

    /// UTF-8 Error
    #[error("UTF-8 Error: {0}")]
    FromUtf8(#[source] std::string::FromUtf8Error),

    /// Http based error
    #[error("HttpError: {0}")]
    HttpError(#[source] http::Error),

    /// Failed to construct a URI.
    #[error("InvalidUri: {0}")]
    InvalidUri(#[source] http::uri::InvalidUri),

    /// Common error case when requesting parsing into own structs
    #[error("Error deserializing response: {0}")]
    SerdeError(#[source] serde_json::Error),

    /// Failed to build request
    #[error("Failed to build request: {0}")]
    BuildRequest(#[source] ocm_core::request::Error),

    /// Failed to build a value out of a builder
    #[error("Failed to build value: {0}")]
    Build(#[from] ocm_core::BuildError),

    /// Configuration error
    #[error("Error loading configuration: {0}")]
    Config(#[source] ConfigError),

    /// The server URL uses https but no TLS stack is enabled
    #[error("TLS required but no TLS stack selected")]
    TlsRequired,
}

#[derive(Error, Debug)]
// Redundant with the error messages and machine names
#[allow(missing_docs)]
/// Possible errors when loading config
pub enum ConfigError {
    #[error("Failed to infer config.. environment: ({env}), configuration file: ({file})")]
    ConfigInferenceExhausted {
        env: Box<ConfigError>,
        // A broken configuration file is the more likely user error
        #[source]
        file: Box<ConfigError>,
    },

    #[error("{0} is not set")]
    MissingEnv(&'static str),

    #[error("No access token found")]
    MissingToken,

    #[error("Invalid bearer token: {0}")]
    InvalidBearerToken(#[source] http::header::InvalidHeaderValue),

    #[error("Invalid impersonated user: {0}")]
    InvalidImpersonation(#[source] http::header::InvalidHeaderValue),

    #[error("Invalid server url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: http::uri::InvalidUri,
    },

    #[error("Unable to find the path of the ocm configuration file")]
    NoConfigPath,

    #[error("Failed to read '{path:?}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path:?}': {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
