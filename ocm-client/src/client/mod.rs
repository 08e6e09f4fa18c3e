//! A basic API client for the clusters-management API
//!
//! The [`Client`] sends [`http::Request`]s built by [`ocm_core::Request`] through a
//! tower service stack and decodes the JSON answers. Responses with a status of 400
//! or above are turned into [`Error::Api`].
//!
//! Most users go through the typed [`Api`][crate::api::Api] instead.
use futures::future::BoxFuture;
use http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::{buffer::Buffer, util::BoxService, BoxError, Layer, Service, ServiceExt};
use tower_http::map_response_body::MapResponseBodyLayer;

use crate::{error::ErrorResponse, Config, Error, Result};

mod body;
mod builder;
mod config_ext;
pub mod middleware;

pub use body::Body;
pub use builder::{ClientBuilder, DynBody, GenericService};
pub use config_ext::ConfigExt;

/// Client for the OpenShift Cluster Manager API.
///
/// The easiest way to instantiate the client is either by
/// inferring the configuration from the environment using
/// [`Client::try_default`] or with an existing [`Config`]
/// using [`Client::try_from`].
///
/// Cloning is cheap: clones share the same connection pool.
#[cfg_attr(docsrs, doc(cfg(feature = "client")))]
#[derive(Clone)]
pub struct Client {
    // - `Buffer` for cheap clone
    // - `BoxFuture` for dynamic response future type
    inner: Buffer<Request<Body>, BoxFuture<'static, Result<Response<Body>, BoxError>>>,
}

impl Client {
    /// Create a [`Client`] using a custom `Service` stack.
    ///
    /// [`ConfigExt`](crate::client::ConfigExt) provides extensions for
    /// building a custom stack.
    ///
    /// To create with the default stack with a [`Config`], use
    /// [`Client::try_from`].
    ///
    /// # Example
    ///
    /// ```rust
    /// # async fn doc() -> Result<(), Box<dyn std::error::Error>> {
    /// use ocm_client::{client::{Body, ConfigExt}, Client, Config};
    /// use hyper_util::rt::TokioExecutor;
    /// use tower::ServiceBuilder;
    ///
    /// let config = Config::infer()?;
    /// let https = config.rustls_https_connector()?;
    /// let service = ServiceBuilder::new()
    ///     .layer(config.base_uri_layer())
    ///     .option_layer(config.auth_layer()?)
    ///     .layer(config.extra_headers_layer()?)
    ///     .service(hyper_util::client::legacy::Client::builder(TokioExecutor::new()).build::<_, Body>(https));
    /// let client = Client::new(service);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn new<S, B>(service: S) -> Self
    where
        S: Service<Request<Body>, Response = Response<B>> + Send + 'static,
        S::Future: Send + 'static,
        S::Error: Into<BoxError>,
        B: http_body::Body<Data = bytes::Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        // Transform response body to `Body` and use type erased error to avoid type parameters.
        let service = MapResponseBodyLayer::new(Body::wrap_body)
            .layer(service)
            .map_err(|e| e.into());
        Self {
            inner: Buffer::new(BoxService::new(service), 1024),
        }
    }

    /// Create and initialize a [`Client`] using the inferred configuration.
    ///
    /// Will use [`Config::infer`] which reads the `OCM_TOKEN` environment
    /// variable first, and then the configuration file of the `ocm` command line tool.
    ///
    /// If you already have a [`Config`] then use [`Client::try_from`](Self::try_from)
    /// instead.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a Tokio runtime.
    pub fn try_default() -> Result<Self> {
        Self::try_from(Config::infer().map_err(Error::Config)?)
    }

    /// Perform a raw HTTP request against the API and return the raw response back.
    pub async fn send(&self, request: Request<Body>) -> Result<Response<Body>> {
        let mut svc = self.inner.clone();
        let res = svc
            .ready()
            .await
            .map_err(Error::Service)?
            .call(request)
            .await
            .map_err(|err| {
                // Error decorating request
                err.downcast::<Error>()
                    .map(|e| *e)
                    // Error requesting
                    .or_else(|err| err.downcast::<hyper::Error>().map(|err| Error::HyperError(*err)))
                    // Error from another middleware
                    .unwrap_or_else(Error::Service)
            })?;
        Ok(res)
    }

    /// Perform a raw HTTP request against the API and deserialize the response
    /// as JSON to some known type.
    pub async fn request<T>(&self, request: Request<Vec<u8>>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let text = self.request_text(request).await?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!("{}, {:?}", text, e);
            Error::SerdeError(e)
        })
    }

    /// Perform a raw HTTP request against the API and get back the response
    /// as a string
    pub async fn request_text(&self, request: Request<Vec<u8>>) -> Result<String> {
        let res = self.send(request.map(Body::from)).await?;
        let status = res.status();
        let body_bytes = res.into_body().collect().await?.to_bytes();
        let text = String::from_utf8(body_bytes.to_vec()).map_err(Error::FromUtf8)?;
        handle_api_errors(&text, status)?;

        Ok(text)
    }

    /// Perform a raw HTTP request against the API and discard the response body.
    ///
    /// Used for the calls that answer with no content, like deletes and cluster actions.
    pub async fn request_empty(&self, request: Request<Vec<u8>>) -> Result<()> {
        self.request_text(request).await.map(|_| ())
    }
}

/// API error handling
///
/// Either the server returned an explicit error object,
/// or it somehow returned something we couldn't parse as one.
///
/// In either case, present an [`ErrorResponse`] upstream carrying the status of the response.
fn handle_api_errors(text: &str, s: StatusCode) -> Result<()> {
    if s.is_client_error() || s.is_server_error() {
        match serde_json::from_str::<ErrorResponse>(text) {
            Ok(mut errdata) if errdata.kind == "Error" => {
                errdata.status = s.as_u16();
                tracing::debug!("Unsuccessful: {:?}", errdata);
                Err(Error::Api(errdata))
            }
            _ => {
                tracing::warn!("Unsuccessful data error parse: {}", text);
                let ae = ErrorResponse::from_status(s.as_u16(), text);
                tracing::debug!("Unsuccessful: {:?} (reconstruct)", ae);
                Err(Error::Api(ae))
            }
        }
    } else {
        Ok(())
    }
}

impl TryFrom<Config> for Client {
    type Error = Error;

    /// Builds a default [`Client`] from a [`Config`], see [`ClientBuilder`] if more customization is required
    fn try_from(config: Config) -> Result<Self> {
        Ok(ClientBuilder::try_from(config)?.build())
    }
}

#[cfg(test)]
mod tests {
    use super::{handle_api_errors, Body, Client};
    use crate::Error;

    use futures::pin_mut;
    use http::{Request, Response, StatusCode};
    use tower_test::mock;

    #[test]
    fn successful_statuses_pass() {
        assert!(handle_api_errors("{}", StatusCode::OK).is_ok());
        assert!(handle_api_errors("", StatusCode::NO_CONTENT).is_ok());
    }

    #[test]
    fn error_envelope_gets_the_status() {
        let body = r#"{"kind":"Error","id":"404","href":"/api/clusters_mgmt/v1/errors/404","code":"CLUSTERS-MGMT-404","reason":"Cluster 'abc' not found"}"#;
        match handle_api_errors(body, StatusCode::NOT_FOUND) {
            Err(Error::Api(ae)) => {
                assert_eq!(ae.status, 404);
                assert_eq!(ae.code, "CLUSTERS-MGMT-404");
                assert_eq!(ae.reason, "Cluster 'abc' not found");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unparseable_errors_are_synthesized() {
        match handle_api_errors("<html>bad gateway</html>", StatusCode::BAD_GATEWAY) {
            Err(Error::Api(ae)) => {
                assert_eq!(ae.status, 502);
                assert_eq!(ae.id, "502");
                assert_eq!(ae.reason, "<html>bad gateway</html>");
            }
            other => panic!("unexpected {other:?}"),
        }
        // Valid JSON that is not an error object
        match handle_api_errors(r#"{"kind":"Cluster"}"#, StatusCode::INTERNAL_SERVER_ERROR) {
            Err(Error::Api(ae)) => assert_eq!(ae.status, 500),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn request_decodes_json() {
        let (mock_service, handle) = mock::pair::<Request<Body>, Response<Body>>();
        let spawned = tokio::spawn(async move {
            pin_mut!(handle);
            let (request, send) = handle.next_request().await.expect("service not called");
            assert_eq!(request.method(), http::Method::GET);
            assert_eq!(request.uri().to_string(), "/api/clusters_mgmt/v1/versions/openshift-v4.15.2");
            send.send_response(
                Response::builder()
                    .body(Body::from(
                        br#"{"kind":"Version","id":"openshift-v4.15.2","raw_id":"4.15.2"}"#.to_vec(),
                    ))
                    .unwrap(),
            );
        });

        let client = Client::new(mock_service);
        let req = Request::get("/api/clusters_mgmt/v1/versions/openshift-v4.15.2")
            .body(vec![])
            .unwrap();
        let value: serde_json::Value = client.request(req).await.unwrap();
        assert_eq!(value["raw_id"], "4.15.2");
        spawned.await.unwrap();
    }

    #[tokio::test]
    async fn request_empty_surfaces_api_errors() {
        let (mock_service, handle) = mock::pair::<Request<Body>, Response<Body>>();
        let spawned = tokio::spawn(async move {
            pin_mut!(handle);
            let (_request, send) = handle.next_request().await.expect("service not called");
            send.send_response(
                Response::builder()
                    .status(StatusCode::CONFLICT)
                    .body(Body::from(
                        br#"{"kind":"Error","id":"409","code":"CLUSTERS-MGMT-409","reason":"Cluster is not ready","operation_id":"op-1"}"#.to_vec(),
                    ))
                    .unwrap(),
            );
        });

        let client = Client::new(mock_service);
        let req = Request::post("/api/clusters_mgmt/v1/clusters/abc/hibernate")
            .body(vec![])
            .unwrap();
        let err = client.request_empty(req).await.unwrap_err();
        match err {
            Error::Api(ae) => {
                assert_eq!(ae.status, 409);
                assert_eq!(ae.operation_id.as_deref(), Some("op-1"));
            }
            other => panic!("unexpected {other:?}"),
        }
        spawned.await.unwrap();
    }
}
