use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExtensionConfig {
    pub publisher: String,
    pub name: String,

    #[serde(default = "ConfigHelper::default_enabled")]
    pub enabled: bool,
}

impl ExtensionConfig {
    pub fn extension_id(&self) -> String {
        format!("{}.{}", self.publisher, self.name)
    }
}
