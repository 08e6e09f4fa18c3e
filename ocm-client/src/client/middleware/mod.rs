//! Middleware types returned from `ConfigExt` methods.
use tower::Layer;
use tower_http::auth::{AddAuthorization, AddAuthorizationLayer};

mod base_uri;
mod extra_headers;

pub use base_uri::{BaseUri, BaseUriLayer};
pub use extra_headers::{ExtraHeaders, ExtraHeadersLayer};

/// Layer to set the `Authorization` header to the bearer token of the config.
///
/// The header is marked sensitive so it never shows up in traces.
#[derive(Clone)]
pub struct AuthLayer(pub(crate) AddAuthorizationLayer);

impl<S> Layer<S> for AuthLayer {
    type Service = AddAuthorization<S>;

    fn layer(&self, inner: S) -> Self::Service {
        self.0.layer(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use futures::pin_mut;
    use http::{header::AUTHORIZATION, HeaderValue, Request, Response};
    use tokio_test::assert_ready_ok;
    use tower_test::{mock, mock::Handle};

    use crate::client::Body;

    #[tokio::test(flavor = "current_thread")]
    async fn bearer_token() {
        const TOKEN: &str = "eyJhbGciOiJSUzI1NiJ9.test";
        let layer = AuthLayer(AddAuthorizationLayer::bearer(TOKEN).as_sensitive(true));
        let (mut service, handle): (_, Handle<Request<Body>, Response<Body>>) = mock::spawn_layer(layer);

        let spawned = tokio::spawn(async move {
            pin_mut!(handle);
            let (request, send) = handle.next_request().await.expect("service not called");
            let header = request.headers().get(AUTHORIZATION).unwrap();
            assert_eq!(header, HeaderValue::try_from(format!("Bearer {TOKEN}")).unwrap());
            assert!(header.is_sensitive());
            send.send_response(Response::builder().body(Body::empty()).unwrap());
        });

        assert_ready_ok!(service.poll_ready());
        service
            .call(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        spawned.await.unwrap();
    }
}
