// Adds a machine pool to the cluster in $CLUSTER_ID, scales it and removes it again.
use ocm::{
    api::{Api, DeleteParams, ListParams, PatchParams, PostParams},
    core::model::{Cluster, MachinePool, MachinePoolAutoscaling, Taint},
    Client,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let client = Client::try_default()?;
    let cluster_id = std::env::var("CLUSTER_ID")?;

    let clusters: Api<Cluster> = Api::all(client);
    let pools = clusters.machine_pools(&cluster_id);
    for p in pools.list(&ListParams::default()).await? {
        tracing::info!("found machine pool {:?} with {:?} replicas", p.id(), p.replicas());
    }

    let pool = MachinePool::builder()
        .id("demo")
        .instance_type("m5.xlarge")
        .replicas(2)
        .labels([("team".to_string(), "demo".to_string())].into_iter().collect::<std::collections::BTreeMap<_, _>>())
        .taints(vec![Taint::builder().key("dedicated").value("demo").effect("NoSchedule")])
        .build()?;

    match pools.add(&PostParams::default(), &pool).await {
        Ok(created) => tracing::info!("Created {:?}", created.href()),
        Err(ocm::Error::Api(ae)) if ae.status == 409 => tracing::info!("demo pool already exists"),
        Err(e) => return Err(e.into()),
    }

    let autoscale = MachinePool::builder()
        .autoscaling(MachinePoolAutoscaling::builder().min_replicas(2).max_replicas(4))
        .build()?;
    let updated = pools.update("demo", &PatchParams::default(), &autoscale).await?;
    tracing::info!("Autoscaling: {:?}", updated.autoscaling());

    pools.delete("demo", &DeleteParams::default()).await?;
    tracing::info!("Deleted demo pool");
    Ok(())
}
