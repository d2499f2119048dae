use serde::Deserialize;

/// Submission acknowledgement. The analysis id is the sole success criterion;
/// extra fields the service may send are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitResponse {
    #[serde(rename = "analysisId", default)]
    pub analysis_id: Option<String>,
}
