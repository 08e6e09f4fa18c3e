// Lists every cluster matching an optional search expression, e.g.
// cargo run --example cluster_list -- "product.id = 'rosa' and state = 'ready'"
use ocm::{
    api::{Api, ListParams},
    core::model::Cluster,
    Client,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let client = Client::try_default()?;

    let mut lp = ListParams::default().size(100).order("name asc");
    if let Some(search) = std::env::args().nth(1) {
        lp = lp.search(search);
    }

    let clusters: Api<Cluster> = Api::all(client);
    let all = clusters.list_all(&lp).await?;
    tracing::info!("found {} clusters", all.len());
    for c in &all {
        println!(
            "{:34} {:30} {:12} {}",
            c.id().unwrap_or_default(),
            c.name().map(String::as_str).unwrap_or_default(),
            c.state().map(|s| s.as_str()).unwrap_or_default(),
            c.openshift_version().map(String::as_str).unwrap_or_default(),
        );
    }
    Ok(())
}
