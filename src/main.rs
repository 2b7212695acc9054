use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use therapist_gateway::config::ServerConfig;
use therapist_gateway::gateway::Gateway;
use therapist_gateway::llm::create_provider;
use therapist_gateway::logging;
use therapist_gateway::personas::PersonaRegistry;
use therapist_gateway::routes::configure_routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();
    logging::init(config.debug);

    let model = config.upstream_model().context("invalid ANTHROPIC_MODEL")?;
    let provider = create_provider(model.clone(), config.provider_settings())
        .context("failed to create upstream client")?;

    let registry = PersonaRegistry::builtin();
    let personas = registry.list_all().len();
    let gateway = Arc::new(Gateway::new(registry, provider));
    let cors = config.cors_policy();

    let addr = config
        .socket_addr()
        .with_context(|| format!("invalid bind address {}:{}", config.host, config.port))?;
    info!(%addr, model = model.as_str(), personas, cors = ?cors.origins(), "starting server");

    let routes = configure_routes(gateway, cors);
    warp::serve(routes).run(addr).await;

    Ok(())
}
