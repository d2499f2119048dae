use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub progress: Option<u32>,
}
