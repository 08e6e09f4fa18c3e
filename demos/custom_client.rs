// Builds a client from individual layers instead of the default stack.
use std::time::Duration;

use http::{Request, Response};
use hyper_util::rt::TokioExecutor;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::Span;

use ocm::{
    api::{Api, ListParams},
    client::{Body, ConfigExt},
    core::model::Version,
    Client, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,custom_client=debug".into()),
        )
        .init();

    let config = Config::infer()?;
    let https = config.rustls_https_connector()?;
    let service = ServiceBuilder::new()
        .layer(config.base_uri_layer())
        .option_layer(config.auth_layer()?)
        .layer(config.extra_headers_layer()?)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    tracing::debug_span!(
                        "HTTP",
                        http.method = %request.method(),
                        http.url = %request.uri(),
                        http.status_code = tracing::field::Empty,
                    )
                })
                .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
                    span.record("http.status_code", response.status().as_u16());
                    tracing::debug!("finished in {}ms", latency.as_millis())
                }),
        )
        .service(hyper_util::client::legacy::Client::builder(TokioExecutor::new()).build(https));
    let client = Client::new(service);

    let versions: Api<Version> = Api::all(client);
    let lp = ListParams::default().size(5).order("id desc");
    for v in versions.search("enabled = 't' and channel_group = 'stable'", &lp).await? {
        tracing::info!("{:?} default={:?}", v.raw_id(), v.is_default());
    }
    Ok(())
}
