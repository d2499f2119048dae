use std::collections::HashMap;
use serde::Deserialize;

/// Results payload, decoded opportunistically: every section is optional and a
/// missing section is not a failure.
#[derive(Debug, Default, Deserialize)]
pub struct ResultsResponse {
    #[serde(rename = "securityScore", default)]
    pub security_score: Option<SecurityScore>,

    #[serde(rename = "analysisModules", default)]
    pub analysis_modules: Option<AnalysisModules>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SecurityScore {
    #[serde(default)]
    pub score: Option<u32>,

    #[serde(rename = "riskLevel", default)]
    pub risk_level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisModules {
    #[serde(default)]
    pub dependencies: Option<DependenciesModule>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DependenciesModule {
    #[serde(default)]
    pub vulnerabilities: Option<VulnerabilityReport>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VulnerabilityReport {
    #[serde(default)]
    pub summary: Option<HashMap<String, u64>>,
}
