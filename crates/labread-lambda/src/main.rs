use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use labread_bedrock::client::build_client_with_region;
use labread_bedrock::narrative::{BedrockNarrator, NarrativeSource};
use labread_interpret::Interpreter;
use labread_lambda::config::ServiceConfig;
use labread_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServiceConfig::from_env()?;
    let catalog = Arc::new(config.load_catalog()?);

    let narrator: Option<Arc<dyn NarrativeSource>> = match &config.narrative_model {
        Some(model_id) => {
            let client = build_client_with_region(&config.region).await;
            tracing::info!(model_id = %model_id, region = %config.region, "narrative generation enabled");
            Some(Arc::new(BedrockNarrator::new(client, model_id.clone())))
        }
        None => None,
    };

    let state = AppState {
        interpreter: Interpreter::new(catalog, config.options.clone()),
        narrator,
        narrative_timeout: config.narrative_timeout,
        max_input_bytes: config.max_input_bytes,
    };

    let app = labread_lambda::app(state);

    match config.local_addr {
        Some(addr) => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "serving locally");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}
