use serde::{Deserialize, Serialize};
use crate::structs::config::batch_config::BatchConfig;
use crate::structs::config::extension_config::ExtensionConfig;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::config::polling_config::PollingConfig;
use crate::structs::config::service_config::ServiceConfig;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,

    #[serde(default)]
    pub polling: PollingConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub extensions: Vec<ExtensionConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            polling: PollingConfig::default(),
            batch: BatchConfig::default(),
            output: OutputConfig::default(),
            extensions: vec![],
        }
    }
}
