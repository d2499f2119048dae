use std::time::Duration;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use crate::config::constants::CLIENT_IDENTIFIER;
use crate::errors::{VscanError, VscanResult};

/// Thin HTTP layer over the analysis service. Every call ends in exactly one of
/// three ways: a decoded 2xx body (decayed to an empty object when the body is
/// not JSON), an `HttpError` preserving a non-2xx body for diagnostics, or a
/// `TransportError` when no response was received at all.
pub struct VscanAdapter {
    client: Client,
    base_url: String,
}

impl VscanAdapter {
    pub fn new(base_url: String, request_timeout: Duration) -> VscanResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(CLIENT_IDENTIFIER.as_str())
            .build()?;

        Ok(Self { client, base_url })
    }

    pub async fn post_json<T>(&self, endpoint: &str, request_body: &T, operation_name: &str) -> VscanResult<Value>
    where
        T: Serialize,
    {
        let url = self.join_url(endpoint);

        let response = match self.client
            .post(&url)
            .header("Accept", "application/json")
            .json(request_body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Network error during {} request: {}", operation_name, e);
                return Err(VscanError::transport_error(operation_name, Some(&url), &e.to_string()));
            }
        };

        self.decode_response(response, &url, operation_name).await
    }

    pub async fn get_json(&self, endpoint: &str, operation_name: &str) -> VscanResult<Value> {
        let url = self.join_url(endpoint);

        let response = match self.client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Network error during {} request: {}", operation_name, e);
                return Err(VscanError::transport_error(operation_name, Some(&url), &e.to_string()));
            }
        };

        self.decode_response(response, &url, operation_name).await
    }

    fn join_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn decode_response(
        &self,
        response: reqwest::Response,
        url: &str,
        operation_name: &str,
    ) -> VscanResult<Value> {
        let status = response.status();

        let raw = match response.text().await {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("❌ Failed to read {} response body: {}", operation_name, e);
                return Err(VscanError::transport_error(operation_name, Some(url), &e.to_string()));
            }
        };

        if status.is_success() {
            // A garbled success body decays to an empty object; the caller
            // decides whether a required field is missing.
            let body = serde_json::from_str(&raw).unwrap_or_else(|e| {
                log::warn!("⚠️ Invalid JSON in {} response, treating as empty: {}", operation_name, e);
                Value::Object(serde_json::Map::new())
            });
            return Ok(body);
        }

        let body = serde_json::from_str(&raw)
            .unwrap_or_else(|_| serde_json::json!({ "error": raw }));

        log::error!(
            "❌ {} request failed with status {}: {}",
            operation_name,
            status,
            body
        );

        Err(VscanError::http_error(operation_name, status.as_u16(), body))
    }
}
