use anyhow::Context;

use musee_api::config::SiteConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    musee_observability::init();

    let config = SiteConfig::from_env();
    let app = musee_api::app::build_app(&config).context("failed to load site content")?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
