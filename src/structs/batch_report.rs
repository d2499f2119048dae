use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::structs::workflow_outcome::WorkflowOutcome;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<WorkflowOutcome>,
}

impl BatchReport {
    pub fn new(outcomes: &[WorkflowOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len() - succeeded,
            outcomes: outcomes.to_vec(),
        }
    }
}
