/// OpenAPI documentation for the Reco Service
use std::fs;
use std::path::Path;

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::error::{ErrorDetail, ErrorResponse};
use crate::handlers::{HealthResponse, LoginForm, RecoResponse, Token};
use crate::security::User;

pub const DOCS_PATH: &str = "/recsys/docs/";
pub const OPENAPI_JSON_PATH: &str = "/recsys/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Reco Service",
        version = "2023.1.31",
        description = "Recommendation models served over HTTP. Currently only the `popular` model is available."
    ),
    paths(
        crate::handlers::auth::login,
        crate::handlers::auth::read_users_me,
        crate::handlers::health::health,
        crate::handlers::reco::get_reco
    ),
    components(schemas(
        LoginForm,
        Token,
        User,
        HealthResponse,
        RecoResponse,
        ErrorDetail,
        ErrorResponse
    )),
    tags(
        (name = "Auth", description = "Token issue and current user"),
        (name = "Health", description = "Service health checks"),
        (name = "Recommendations", description = "Model recommendations")
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /recsys/login"))
                        .build(),
                ),
            )
        }
    }
}

/// Write the OpenAPI document to `path`, creating parent directories.
pub fn write_openapi(path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = ApiDoc::openapi().to_pretty_json()?;
    fs::write(path, json)?;

    tracing::info!(path = %path.display(), "OpenAPI document written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_all_routes() {
        let doc = ApiDoc::openapi();

        for route in [
            "/recsys/login",
            "/recsys/users/me/",
            "/recsys/health",
            "/recsys/reco/{model_name}/{user_id}",
        ] {
            assert!(doc.paths.paths.contains_key(route), "missing {route}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");

        assert!(components.security_schemes.contains_key("bearer_auth"));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recsys").join("openapi.json");

        write_openapi(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["info"]["title"], "Reco Service");
    }
}
