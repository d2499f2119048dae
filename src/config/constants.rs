use std::time::Duration;
use once_cell::sync::Lazy;

pub const DEFAULT_BASE_URL: &str = "https://vscan.dev/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;
pub const DEFAULT_MAX_WAIT_SECS: u64 = 300;
pub const DEFAULT_DELAY_BETWEEN_JOBS_SECS: u64 = 5;
pub const DEFAULT_OUTPUT_DIR: &str = "./vscan-results";

pub const ANALYZE_ENDPOINT: &str = "analyze";

/// Descriptive client identifier sent as the User-Agent on every request.
pub static CLIENT_IDENTIFIER: Lazy<String> = Lazy::new(|| {
    format!(
        "vscan-cli/{} (vscode extension analysis client)",
        env!("CARGO_PKG_VERSION")
    )
});

pub fn status_endpoint(analysis_id: &str) -> String {
    format!("status/{}", analysis_id)
}

pub fn results_endpoint(analysis_id: &str) -> String {
    format!("results/{}", analysis_id)
}

pub fn timeout_duration(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
