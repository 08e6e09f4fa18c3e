use std::sync::Arc;

use http::{
    header::{HeaderName, USER_AGENT},
    HeaderValue,
};
use hyper_util::client::legacy::connect::HttpConnector;
use secrecy::ExposeSecret;
use tower_http::auth::AddAuthorizationLayer;

use super::middleware::{AuthLayer, BaseUriLayer, ExtraHeadersLayer};
use crate::{error::ConfigError, Config, Error, Result};

/// Extensions to [`Config`](crate::Config) for custom [`Client`](crate::Client).
///
/// See [`Client::new`](crate::Client::new) for an example.
///
/// This trait is sealed and cannot be implemented.
pub trait ConfigExt: private::Sealed {
    /// Layer to set the base URI of requests to the configured server.
    fn base_uri_layer(&self) -> BaseUriLayer;

    /// Optional layer to set up the `Authorization` header when the config has a token.
    fn auth_layer(&self) -> Result<Option<AuthLayer>>;

    /// Layer to add the `User-Agent` header and the configured impersonation.
    fn extra_headers_layer(&self) -> Result<ExtraHeadersLayer>;

    /// Create [`hyper_rustls::HttpsConnector`] trusting the webpki roots.
    ///
    /// Plain `http` urls are still allowed, which is handy against a local server.
    #[cfg_attr(docsrs, doc(cfg(feature = "rustls-tls")))]
    #[cfg(feature = "rustls-tls")]
    fn rustls_https_connector(&self) -> Result<hyper_rustls::HttpsConnector<HttpConnector>>;

    /// Create [`hyper_rustls::HttpsConnector`] wrapping `connector`.
    #[cfg_attr(docsrs, doc(cfg(feature = "rustls-tls")))]
    #[cfg(feature = "rustls-tls")]
    fn rustls_https_connector_with_connector<H>(
        &self,
        connector: H,
    ) -> Result<hyper_rustls::HttpsConnector<H>>;
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Config {}
}

impl ConfigExt for Config {
    fn base_uri_layer(&self) -> BaseUriLayer {
        BaseUriLayer::new(self.url.clone())
    }

    fn auth_layer(&self) -> Result<Option<AuthLayer>> {
        let Some(token) = &self.token else {
            return Ok(None);
        };
        // `bearer` panics on values that are not valid in a header
        HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::Config(ConfigError::InvalidBearerToken(e)))?;
        Ok(Some(AuthLayer(
            AddAuthorizationLayer::bearer(token.expose_secret()).as_sensitive(true),
        )))
    }

    fn extra_headers_layer(&self) -> Result<ExtraHeadersLayer> {
        let mut headers = Vec::new();
        headers.push((
            USER_AGENT,
            HeaderValue::from_str(&self.user_agent)
                .map_err(http::Error::from)
                .map_err(Error::HttpError)?,
        ));
        if let Some(user) = &self.impersonate {
            headers.push((
                HeaderName::from_static("impersonate-user"),
                HeaderValue::from_str(user).map_err(|e| Error::Config(ConfigError::InvalidImpersonation(e)))?,
            ));
        }
        Ok(ExtraHeadersLayer {
            headers: Arc::new(headers),
        })
    }

    #[cfg(feature = "rustls-tls")]
    fn rustls_https_connector(&self) -> Result<hyper_rustls::HttpsConnector<HttpConnector>> {
        let mut connector = HttpConnector::new();
        connector.enforce_http(false);
        self.rustls_https_connector_with_connector(connector)
    }

    #[cfg(feature = "rustls-tls")]
    fn rustls_https_connector_with_connector<H>(
        &self,
        connector: H,
    ) -> Result<hyper_rustls::HttpsConnector<H>> {
        Ok(hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .wrap_connector(connector))
    }
}
