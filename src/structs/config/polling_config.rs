use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PollingConfig {
    #[serde(default = "ConfigHelper::default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    #[serde(default = "ConfigHelper::default_max_wait_secs")]
    pub max_wait_secs: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: ConfigHelper::default_poll_interval_secs(),
            max_wait_secs: ConfigHelper::default_max_wait_secs(),
        }
    }
}
