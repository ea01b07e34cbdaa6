/// Authentication handlers
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorResponse, Result};
use crate::middleware::CurrentUser;
use crate::security::User;
use crate::state::AppState;

/// OAuth2 password-flow form
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

/// Exchange username/password for a bearer token
#[utoipa::path(
    post,
    path = "/recsys/login",
    tag = "Auth",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued", body = Token),
        (status = 401, description = "Incorrect username or password", body = ErrorResponse)
    )
)]
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse> {
    let user = state
        .users
        .authenticate(&form.username, &form.password)
        .ok_or_else(|| {
            tracing::info!(username = %form.username, "Login rejected");
            AppError::Unauthorized("Incorrect username or password".to_string())
        })?;

    let access_token = state.jwt.create_access_token(&user.username).map_err(|e| {
        AppError::Internal(format!("Failed to issue token: {e}"))
    })?;

    Ok(HttpResponse::Ok().json(Token {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

/// Profile of the token holder
#[utoipa::path(
    get,
    path = "/recsys/users/me/",
    tag = "Auth",
    responses(
        (status = 200, description = "Current user", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 400, description = "Inactive user", body = ErrorResponse)
    ),
    security(("bearer_auth" = []))
)]
pub async fn read_users_me(current_user: CurrentUser) -> Result<web::Json<User>> {
    Ok(web::Json(current_user.0))
}
