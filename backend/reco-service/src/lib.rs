//! # Reco Service
//!
//! HTTP service serving recommendations from fitted in-memory models.
//!
//! ## Modules
//! - `services`: models (popularity ranker), interaction loading, model registry
//! - `handlers`: `/recsys` HTTP endpoints
//! - `middleware`: bearer-token authentication
//! - `security`: JWT, password hashing, user directory
//! - `startup`: model fitting and route wiring

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod openapi;
pub mod security;
pub mod services;
pub mod startup;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
