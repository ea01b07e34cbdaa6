use actix_web::web;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ErrorResponse, Result};
use crate::middleware::CurrentUser;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub healthcheck: String,
}

/// Liveness probe; deploy pipelines roll back when this is not 200
#[utoipa::path(
    get,
    path = "/recsys/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn health(_current_user: CurrentUser) -> Result<web::Json<HealthResponse>> {
    Ok(web::Json(HealthResponse {
        healthcheck: "Everything OK!".to_string(),
    }))
}
