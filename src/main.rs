use anyhow::Context;
use log::info;
use tokio::net::TcpListener;

use loan_approval::{server, ModelArtifact, PredictionService, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = ServiceConfig::from_env();

    let model = ModelArtifact::load(&config.model_path).context("cannot start without a model")?;
    info!(
        "loaded {} model from {}",
        model.kind(),
        config.model_path.display()
    );
    let service = PredictionService::new(model);

    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.listen_addr))?;
    info!("listening at {}", config.listen_addr);

    server::serve(listener, service).await?;
    info!("wrapping up");

    Ok(())
}
