use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::workflow_stage::WorkflowStage;
use crate::errors::VscanError;
use crate::structs::analysis_result::AnalysisResult;

/// Aggregated result of one submit → poll → fetch run for a single extension.
/// Keys are camelCase so emitted reports read like the upstream API vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowOutcome {
    pub publisher: String,
    pub name: String,
    pub analysis_id: Option<String>,
    pub status: String,
    pub success: bool,
    pub security_score: Option<u32>,
    pub risk_level: Option<String>,
    pub vulnerability_summary: Option<HashMap<String, u64>>,
    pub failed_stage: Option<String>,
    pub error: Option<String>,
    pub completed_at: DateTime<Utc>,
}

impl WorkflowOutcome {
    pub fn new(publisher: &str, name: &str) -> Self {
        Self {
            publisher: publisher.to_string(),
            name: name.to_string(),
            analysis_id: None,
            status: "pending".to_string(),
            success: false,
            security_score: None,
            risk_level: None,
            vulnerability_summary: None,
            failed_stage: None,
            error: None,
            completed_at: Utc::now(),
        }
    }

    pub fn extension_id(&self) -> String {
        format!("{}.{}", self.publisher, self.name)
    }

    /// Submission-only run: the job was accepted and nothing else was asked for.
    pub fn mark_submitted(&mut self, analysis_id: &str) {
        self.analysis_id = Some(analysis_id.to_string());
        self.status = "submitted".to_string();
        self.success = true;
        self.completed_at = Utc::now();
    }

    pub fn mark_completed(&mut self, result: AnalysisResult) {
        self.status = "completed".to_string();
        self.success = true;
        self.security_score = result.security_score;
        self.risk_level = result.risk_level;
        self.vulnerability_summary = result.vulnerability_summary;
        self.completed_at = Utc::now();
    }

    /// The remote analysis itself reported `failed`. The workflow ran to a
    /// terminal answer, so no stage is tagged.
    pub fn mark_failed_terminal(&mut self) {
        self.status = "failed".to_string();
        self.success = false;
        self.error = Some("remote analysis reported a failed status".to_string());
        self.completed_at = Utc::now();
    }

    pub fn record_failure(&mut self, stage: WorkflowStage, error: &VscanError) {
        self.status = match error {
            VscanError::TimeoutError { .. } => "timeout".to_string(),
            _ => "error".to_string(),
        };
        self.success = false;
        self.failed_stage = Some(stage.to_string());
        self.error = Some(error.to_string());
        self.completed_at = Utc::now();
    }
}
