use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BatchConfig {
    #[serde(default = "ConfigHelper::default_delay_between_jobs_secs")]
    pub delay_between_jobs_secs: u64,

    #[serde(default)]
    pub parallel: bool,

    #[serde(default = "ConfigHelper::default_wait_for_completion")]
    pub wait_for_completion: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delay_between_jobs_secs: ConfigHelper::default_delay_between_jobs_secs(),
            parallel: false,
            wait_for_completion: true,
        }
    }
}
