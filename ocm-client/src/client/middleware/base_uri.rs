//! Make requests relative to the configured server.
use http::{uri, Request};
use tower::{Layer, Service};

/// Layer that applies [`BaseUri`] which makes all requests relative to the URI.
///
/// A path in the base URI is kept in front of the request path, so a gateway
/// serving the API under `https://gateway.example.com/ocm` works unchanged.
#[derive(Debug, Clone)]
pub struct BaseUriLayer {
    base_uri: http::Uri,
}

impl BaseUriLayer {
    /// Set base URI of requests.
    pub fn new(base_uri: http::Uri) -> Self {
        Self { base_uri }
    }
}

impl<S> Layer<S> for BaseUriLayer {
    type Service = BaseUri<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BaseUri {
            base_uri: self.base_uri.clone(),
            inner,
        }
    }
}

/// Middleware that sets base URI so that all requests are relative to it.
#[derive(Debug, Clone)]
pub struct BaseUri<S> {
    base_uri: http::Uri,
    inner: S,
}

impl<S, ReqBody> Service<Request<ReqBody>> for BaseUri<S>
where
    S: Service<Request<ReqBody>>,
{
    type Error = S::Error;
    type Future = S::Future;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut std::task::Context<'_>) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let (mut parts, body) = req.into_parts();
        if let Some(joined) = join(&self.base_uri, parts.uri.path_and_query()) {
            parts.uri = joined;
        }
        self.inner.call(Request::from_parts(parts, body))
    }
}

// Join the server URI with the path and query of a request.
//
// Returns `None` only when the parts do not form a valid URI, in which case
// the request is passed on untouched and fails in the connector.
fn join(base_uri: &http::Uri, req_pandq: Option<&uri::PathAndQuery>) -> Option<http::Uri> {
    let mut builder = uri::Builder::new();
    if let Some(scheme) = base_uri.scheme() {
        builder = builder.scheme(scheme.as_str());
    }
    if let Some(authority) = base_uri.authority() {
        builder = builder.authority(authority.as_str());
    }

    let base_path = base_uri.path().trim_end_matches('/');
    builder = match req_pandq {
        // `PathAndQuery` always starts with a slash
        Some(pandq) => builder.path_and_query(format!("{base_path}{pandq}")),
        None => builder.path_and_query(base_uri.path()),
    };
    builder.build().ok()
}

#[cfg(test)]
mod tests {
    use super::join;

    fn joined(base: &'static str, path: &'static str) -> String {
        let base = http::Uri::from_static(base);
        let path = http::Uri::from_static(path);
        join(&base, path.path_and_query()).unwrap().to_string()
    }

    #[test]
    fn plain_server() {
        assert_eq!(
            joined("https://api.openshift.com", "/api/clusters_mgmt/v1/clusters?size=10"),
            "https://api.openshift.com/api/clusters_mgmt/v1/clusters?size=10"
        );
    }

    #[test]
    fn server_with_a_path_prefix() {
        assert_eq!(
            joined("https://gateway.example.com/ocm/", "/api/clusters_mgmt/v1/clusters"),
            "https://gateway.example.com/ocm/api/clusters_mgmt/v1/clusters"
        );
        assert_eq!(
            joined("http://localhost:8000/ocm", "/api/clusters_mgmt/v1/versions"),
            "http://localhost:8000/ocm/api/clusters_mgmt/v1/versions"
        );
    }
}
