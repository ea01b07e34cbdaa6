/// Configuration management
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,

    /// Number of items returned per recommendation request
    #[serde(default = "default_k_recs")]
    pub k_recs: usize,

    #[serde(default = "default_interactions_path")]
    pub interactions_path: String,
    #[serde(default = "default_popular_days")]
    pub popular_days: u32,
    #[serde(default = "default_popular_max_k")]
    pub popular_max_k: usize,
    #[serde(default = "default_popular_item_column")]
    pub popular_item_column: String,
    #[serde(default = "default_popular_dt_column")]
    pub popular_dt_column: String,

    pub jwt_secret: String,
    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: i64,

    #[serde(default)]
    pub log_format: LogFormat,
    /// Where the OpenAPI document is written at startup; empty disables it
    #[serde(default = "default_openapi_dump_path")]
    pub openapi_dump_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// Keep the secret out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("service_name", &self.service_name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("k_recs", &self.k_recs)
            .field("interactions_path", &self.interactions_path)
            .field("popular_days", &self.popular_days)
            .field("popular_max_k", &self.popular_max_k)
            .field("popular_item_column", &self.popular_item_column)
            .field("popular_dt_column", &self.popular_dt_column)
            .field("jwt_secret", &"<redacted>")
            .field(
                "access_token_expire_minutes",
                &self.access_token_expire_minutes,
            )
            .field("log_format", &self.log_format)
            .field("openapi_dump_path", &self.openapi_dump_path)
            .finish()
    }
}

fn default_service_name() -> String {
    "reco_service".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_k_recs() -> usize {
    10
}

fn default_interactions_path() -> String {
    "./data/interactions.csv".to_string()
}

fn default_popular_days() -> u32 {
    7
}

fn default_popular_max_k() -> usize {
    10
}

fn default_popular_item_column() -> String {
    "item_id".to_string()
}

fn default_popular_dt_column() -> String {
    "last_watch_dt".to_string()
}

fn default_access_token_expire_minutes() -> i64 {
    30
}

fn default_openapi_dump_path() -> String {
    "./recsys/openapi.json".to_string()
}
