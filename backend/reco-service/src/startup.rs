//! Service bootstrap: model fitting, state assembly and route wiring

use actix_web::web;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::Config;
use crate::error::Result;
use crate::handlers;
use crate::middleware::JwtAuthMiddleware;
use crate::openapi::{ApiDoc, OPENAPI_JSON_PATH};
use crate::security::{JwtKeys, UserDirectory};
use crate::services::{load_interactions, ModelRegistry, PopularRecommender, POPULAR_MODEL};
use crate::state::AppState;

/// Load the interaction log and fit the popularity model on it.
///
/// The raw interactions are dropped once the ranking is computed.
pub fn fit_popular_model(config: &Config) -> Result<PopularRecommender> {
    let mut model = PopularRecommender::new(
        config.popular_max_k,
        config.popular_days,
        config.popular_item_column.as_str(),
        config.popular_dt_column.as_str(),
    );

    let interactions = load_interactions(
        &config.interactions_path,
        model.item_column(),
        model.dt_column(),
    )?;
    model.fit(&interactions);

    info!(
        model = POPULAR_MODEL,
        days = model.days(),
        max_k = model.max_k(),
        "Model fitted"
    );
    Ok(model)
}

/// Build everything the HTTP layer needs. All models are fitted before this
/// returns, so no request can observe an unfit model.
pub fn build_state(config: &Config) -> Result<AppState> {
    let popular = fit_popular_model(config)?;
    let models = ModelRegistry::builder()
        .register(POPULAR_MODEL, popular)
        .build();

    Ok(AppState::new(
        models,
        config.k_recs,
        JwtKeys::from_secret(&config.jwt_secret, config.access_token_expire_minutes),
        UserDirectory::demo()?,
    ))
}

/// Register docs and `/recsys` routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Must precede the /recsys scope, which would otherwise claim these paths
    cfg.service(SwaggerUi::new("/recsys/docs/{_:.*}").url(OPENAPI_JSON_PATH, ApiDoc::openapi()));

    cfg.service(
        web::scope("/recsys")
            .route("/", web::get().to(handlers::redirect_to_docs))
            .route("/login", web::post().to(handlers::login))
            .service(
                web::resource("/users/me/")
                    .wrap(JwtAuthMiddleware)
                    .route(web::get().to(handlers::read_users_me)),
            )
            .service(
                web::resource("/health")
                    .wrap(JwtAuthMiddleware)
                    .route(web::get().to(handlers::health)),
            )
            .service(
                web::resource("/reco/{model_name}/{user_id}")
                    .wrap(JwtAuthMiddleware)
                    .route(web::get().to(handlers::get_reco)),
            ),
    );
}
