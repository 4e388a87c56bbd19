use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use kudu_vfs_host::{serve, HostConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cfg = HostConfig::from_env()?;
    let addr = cfg.addr;
    info!(
        "serving {} as {:?} home on {}",
        cfg.root.display(),
        cfg.layout,
        addr
    );
    if cfg.credentials.is_some() {
        info!("basic auth enabled");
    }

    let listener = TcpListener::bind(addr).await?;
    serve(listener, Arc::new(cfg)).await?;

    Ok(())
}
