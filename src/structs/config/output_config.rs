use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "ConfigHelper::default_output_dir")]
    pub output_dir: String,

    #[serde(default = "ConfigHelper::default_save_report")]
    pub save_report: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: ConfigHelper::default_output_dir(),
            save_report: true,
        }
    }
}
