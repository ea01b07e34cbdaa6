use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing::info;

use reco_service::config::Config;
use reco_service::{logging, openapi, startup};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;
    logging::init_tracing(config.log_format);

    info!(
        "Starting {} v{}",
        config.service_name,
        env!("CARGO_PKG_VERSION")
    );
    tracing::debug!(?config, "Configuration loaded");

    if !config.openapi_dump_path.is_empty() {
        if let Err(e) = openapi::write_openapi(&config.openapi_dump_path) {
            tracing::warn!(error = %e, "Failed to write OpenAPI document");
        }
    }

    // Models are fitted before the server binds
    let state = startup::build_state(&config).context("Failed to initialize models")?;
    info!(models = ?state.models, k_recs = state.k_recs, "Models ready");
    let state = web::Data::new(state);

    let bind_addr = config.bind_addr();
    info!(%bind_addr, "HTTP server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(tracing_actix_web::TracingLogger::default())
            .configure(startup::configure)
    })
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind on {bind_addr}"))?
    .run()
    .await
    .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}
