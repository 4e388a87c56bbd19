use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use kudu_explorer::{config::ExplorerConfig, render_tree, AppServiceSite, FolderNode, SiteClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = ExplorerConfig::from_env()?;

    // Logs go to stderr so the tree on stdout stays clean.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cfg.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let site: Arc<dyn SiteClient> = Arc::new(AppServiceSite::new(
        cfg.site_name.clone(),
        cfg.scm_url.clone(),
        cfg.credentials.clone(),
    ));
    info!(
        "[explorer] browsing {} ({}) from {}",
        site.site_name(),
        cfg.scm_url,
        cfg.root_path
    );

    let root = FolderNode::new(site, cfg.root_label.clone(), cfg.root_path.clone(), None);
    let outline = render_tree(&root, cfg.max_depth)
        .await
        .with_context(|| format!("listing {} failed", cfg.root_path))?;

    print!("{}", outline);
    Ok(())
}
