use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
        }
    }
}
