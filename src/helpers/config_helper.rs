use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_DELAY_BETWEEN_JOBS_SECS, DEFAULT_MAX_WAIT_SECS, DEFAULT_OUTPUT_DIR,
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_poll_interval_secs() -> u64 {
        DEFAULT_POLL_INTERVAL_SECS
    }

    pub fn default_max_wait_secs() -> u64 {
        DEFAULT_MAX_WAIT_SECS
    }

    pub fn default_delay_between_jobs_secs() -> u64 {
        DEFAULT_DELAY_BETWEEN_JOBS_SECS
    }

    pub fn default_wait_for_completion() -> bool {
        true
    }

    pub fn default_enabled() -> bool {
        true
    }

    pub fn default_output_dir() -> String {
        DEFAULT_OUTPUT_DIR.to_string()
    }

    pub fn default_save_report() -> bool {
        true
    }
}
