use actix_web::{http::header, HttpResponse};

use crate::openapi::DOCS_PATH;

/// `/recsys/` lands on the Swagger UI
pub async fn redirect_to_docs() -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, DOCS_PATH))
        .finish()
}
