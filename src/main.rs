use anyhow::Context;
use fibonacci_service::server;
use fibonacci_service::utils::{init_logger, load_config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logger();
    let config = load_config();
    tracing::debug!(?config, "configuration loaded");
    server::run(config).await.context("http server failed")?;
    Ok(())
}
