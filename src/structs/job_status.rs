use crate::enums::job_state::JobState;

/// Snapshot of remote progress at one poll instant. Superseded by each
/// subsequent poll; the progress percentage is advisory only.
#[derive(Debug, Clone)]
pub struct JobStatus {
    pub state: JobState,
    pub progress: Option<u32>,
}
