pub mod app_config;
pub mod config;

pub use app_config::{
    AppConfig, DEFAULT_ACTOR_ID, DEFAULT_APIFY_BASE_URL, DEFAULT_PORT, SERVICE_NAME,
};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
