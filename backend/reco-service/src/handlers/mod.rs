pub mod auth;
pub mod docs;
pub mod health;
pub mod reco;

// Re-export handlers for convenience
pub use auth::{login, read_users_me, LoginForm, Token};
pub use docs::redirect_to_docs;
pub use health::{health, HealthResponse};
pub use reco::{get_reco, RecoResponse};
