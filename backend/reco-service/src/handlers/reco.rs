/// Recommendation API Handlers
use actix_web::web;
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::error::{ranker_error, AppError, ErrorResponse, Result};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Ids above this are treated as unknown users
pub const MAX_USER_ID: i64 = 1_000_000_000;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RecoResponse {
    pub user_id: i64,
    /// Item ids in ranked order
    pub items: Vec<i64>,
}

/// Recommendations from `model_name` for `user_id`
///
/// Only the `popular` model is available.
#[utoipa::path(
    get,
    path = "/recsys/reco/{model_name}/{user_id}",
    tag = "Recommendations",
    params(
        ("model_name" = String, Path, description = "Registered model name, e.g. `popular`"),
        ("user_id" = i64, Path, description = "Id of the user waiting for recommendations")
    ),
    responses(
        (status = 200, description = "Ranked items", body = RecoResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown model or user", body = ErrorResponse),
        (status = 503, description = "Model not fitted yet", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_reco(
    state: web::Data<AppState>,
    path: web::Path<(String, i64)>,
    _current_user: CurrentUser,
) -> Result<web::Json<RecoResponse>> {
    let (model_name, user_id) = path.into_inner();
    info!(%model_name, user_id, "Request for recommendations");

    if user_id > MAX_USER_ID {
        return Err(AppError::UserNotFound(user_id));
    }

    let model = state
        .models
        .get(&model_name)
        .ok_or_else(|| AppError::ModelNotFound(model_name.clone()))?;

    let items = model
        .recommend(state.k_recs)
        .map_err(|e| ranker_error(&model_name, e))?;

    Ok(web::Json(RecoResponse { user_id, items }))
}
