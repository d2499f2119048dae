use vscan_cli::services::analysis_client::AnalysisClient;
use vscan_cli::structs::config::polling_config::PollingConfig;
use vscan_cli::structs::config::service_config::ServiceConfig;

pub fn test_client(base_url: &str, poll_interval_secs: u64, max_wait_secs: u64) -> AnalysisClient {
    let service = ServiceConfig {
        base_url: base_url.to_string(),
        request_timeout_secs: 5,
    };
    let polling = PollingConfig {
        poll_interval_secs,
        max_wait_secs,
    };

    AnalysisClient::new(&service, &polling).expect("failed to build test client")
}

/// Address with nothing listening on it, for connection-refused scenarios.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind probe port");
    let addr = listener.local_addr().expect("failed to read probe address");
    drop(listener);
    format!("http://{}", addr)
}
