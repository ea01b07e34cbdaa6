use std::sync::Arc;

use crate::security::{JwtKeys, UserDirectory};
use crate::services::ModelRegistry;

/// Shared, read-only state handed to every worker
#[derive(Clone, Debug)]
pub struct AppState {
    pub models: Arc<ModelRegistry>,
    pub k_recs: usize,
    pub jwt: Arc<JwtKeys>,
    pub users: Arc<UserDirectory>,
}

impl AppState {
    pub fn new(models: ModelRegistry, k_recs: usize, jwt: JwtKeys, users: UserDirectory) -> Self {
        Self {
            models: Arc::new(models),
            k_recs,
            jwt: Arc::new(jwt),
            users: Arc::new(users),
        }
    }
}
