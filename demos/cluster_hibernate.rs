// Hibernates the cluster in $CLUSTER_ID, waits for it, then resumes it and waits until it is ready.
use std::time::Duration;

use ocm::{
    api::Api,
    core::model::{Cluster, ClusterState},
    runtime::wait::{await_condition, conditions, Condition},
    Client,
};

const POLL: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ocm_runtime=trace".into()),
        )
        .init();
    let client = Client::try_default()?;
    let id = std::env::var("CLUSTER_ID")?;
    let clusters: Api<Cluster> = Api::all(client);

    clusters.hibernate(&id).await?;
    tracing::info!("Hibernating {}", id);
    let asleep = await_condition(&clusters, &id, POLL, conditions::cluster_in_state(ClusterState::Hibernating));
    tokio::time::timeout(Duration::from_secs(30 * 60), asleep).await??;

    clusters.resume(&id).await?;
    tracing::info!("Resuming {}", id);
    let settled = conditions::cluster_ready().or(conditions::cluster_in_state(ClusterState::Error));
    let cluster = tokio::time::timeout(
        Duration::from_secs(60 * 60),
        await_condition(&clusters, &id, POLL, settled),
    )
    .await??;

    let status = clusters.status(&id).await?;
    tracing::info!(
        "Cluster is {:?}: {}",
        cluster.as_ref().and_then(Cluster::state),
        status.description().map(String::as_str).unwrap_or_default()
    );
    Ok(())
}
