use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::{VscanError, VscanResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# vscan multi-extension configuration

[service]
# Base URL of the analysis service
base_url = "https://vscan.dev/api/v1"

# Per-request timeout
request_timeout_secs = 30

[polling]
# How often to ask for the job status
poll_interval_secs = 2

# Give up waiting for a terminal status after this long
max_wait_secs = 300

[batch]
# Pause between submissions in sequential batch mode
delay_between_jobs_secs = 5

# Run all jobs concurrently instead of one after another
parallel = false

# Set to false to submit jobs without waiting for results
wait_for_completion = true

[output]
# Directory for batch report files
output_dir = "./vscan-results"

# Write a JSON report after each batch run
save_report = true

# Extensions to analyze in batch mode
[[extensions]]
publisher = "ms-python"
name = "python"
enabled = true

[[extensions]]
publisher = "dbaeumer"
name = "vscode-eslint"
enabled = true

[[extensions]]
publisher = "esbenp"
name = "prettier-vscode"
enabled = false
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join("vscan/config.toml"))
    }

    /// Load the configuration file, falling back to defaults when none exists.
    pub fn load() -> VscanResult<Config> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                log::debug!("📋 Loading config from: {}", path.display());
                Self::load_from(&path)
            }
            _ => {
                log::debug!("📋 No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> VscanResult<Config> {
        let content = fs::read_to_string(path).map_err(|e| VscanError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| VscanError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;

        Ok(config)
    }

    pub fn create_sample_config() -> VscanResult<PathBuf> {
        let path = Self::config_path().ok_or_else(|| {
            VscanError::system_error("config creation", "could not determine the home directory")
        })?;

        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> VscanResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.service.base_url.trim().is_empty() {
            errors.push("service.base_url must not be empty".to_string());
        } else if !config.service.base_url.starts_with("http://")
            && !config.service.base_url.starts_with("https://")
        {
            errors.push(format!(
                "service.base_url must be an http(s) URL: {}",
                config.service.base_url
            ));
        }

        if config.service.request_timeout_secs == 0 {
            errors.push("service.request_timeout_secs must be greater than zero".to_string());
        }

        if config.polling.poll_interval_secs == 0 {
            errors.push("polling.poll_interval_secs must be greater than zero".to_string());
        }

        if config.polling.max_wait_secs == 0 {
            errors.push("polling.max_wait_secs must be greater than zero".to_string());
        }

        for extension in &config.extensions {
            if extension.publisher.trim().is_empty() {
                errors.push(format!("extension '{}' has an empty publisher", extension.extension_id()));
            }
            if extension.name.trim().is_empty() {
                errors.push(format!("extension '{}' has an empty name", extension.extension_id()));
            }
        }

        let mut ids = std::collections::HashSet::new();
        for extension in &config.extensions {
            if !ids.insert(extension.extension_id()) {
                errors.push(format!("Duplicate extension: {}", extension.extension_id()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
