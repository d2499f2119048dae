use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::structs::api::results_response::ResultsResponse;

/// Final payload of a completed analysis. Every field is optional; the service
/// omits sections it did not run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub security_score: Option<u32>,
    pub risk_level: Option<String>,
    pub vulnerability_summary: Option<HashMap<String, u64>>,
}

impl AnalysisResult {
    pub fn from_response(response: ResultsResponse) -> Self {
        let (security_score, risk_level) = match response.security_score {
            Some(score) => (score.score, score.risk_level),
            None => (None, None),
        };

        let vulnerability_summary = response
            .analysis_modules
            .and_then(|modules| modules.dependencies)
            .and_then(|dependencies| dependencies.vulnerabilities)
            .and_then(|vulnerabilities| vulnerabilities.summary);

        Self {
            security_score,
            risk_level,
            vulnerability_summary,
        }
    }
}
