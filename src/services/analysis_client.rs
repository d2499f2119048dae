use std::time::Instant;
use tokio::time::sleep;
use crate::adapters::vscan_adapter::VscanAdapter;
use crate::config::constants::{results_endpoint, sleep_duration_secs, status_endpoint, timeout_duration, ANALYZE_ENDPOINT};
use crate::enums::job_state::JobState;
use crate::enums::workflow_stage::WorkflowStage;
use crate::errors::{VscanError, VscanResult};
use crate::structs::analysis_job::AnalysisJob;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::api::results_response::ResultsResponse;
use crate::structs::api::status_response::StatusResponse;
use crate::structs::api::submit_request::SubmitRequest;
use crate::structs::api::submit_response::SubmitResponse;
use crate::structs::config::polling_config::PollingConfig;
use crate::structs::config::service_config::ServiceConfig;
use crate::structs::job_status::JobStatus;
use crate::structs::workflow_outcome::WorkflowOutcome;

/// Client for the three-step analysis protocol: submit a job, poll its status
/// until a terminal answer or a deadline, fetch the result. No retries at this
/// layer; a caller that wants retry policy builds it on top.
pub struct AnalysisClient {
    adapter: VscanAdapter,
    polling: PollingConfig,
}

impl AnalysisClient {
    pub fn new(service: &ServiceConfig, polling: &PollingConfig) -> VscanResult<Self> {
        let adapter = VscanAdapter::new(
            service.base_url.clone(),
            timeout_duration(service.request_timeout_secs),
        )?;

        Ok(Self {
            adapter,
            polling: polling.clone(),
        })
    }

    /// Submit one (publisher, name) pair. Success is solely the presence of an
    /// analysis id in the payload; a 2xx status alone is not enough.
    pub async fn submit(&self, publisher: &str, name: &str) -> VscanResult<String> {
        if publisher.trim().is_empty() || name.trim().is_empty() {
            return Err(VscanError::validation_error(
                "extension",
                &format!("{}.{}", publisher, name),
                "publisher and name must be non-empty",
                None,
            ));
        }

        let request = SubmitRequest::new(publisher, name);

        let body = match self.adapter.post_json(ANALYZE_ENDPOINT, &request, "analysis submission").await {
            Ok(body) => body,
            Err(VscanError::HttpError { status, body, .. }) => {
                return Err(VscanError::submission_error(
                    publisher,
                    name,
                    &format!("service returned HTTP {}: {}", status, body),
                ));
            }
            Err(other) => return Err(other),
        };

        let payload: SubmitResponse = serde_json::from_value(body).unwrap_or_default();

        match payload.analysis_id {
            Some(analysis_id) => {
                log::debug!("📨 {}.{} accepted as analysis {}", publisher, name, analysis_id);
                Ok(analysis_id)
            }
            None => Err(VscanError::submission_error(
                publisher,
                name,
                "response did not contain an analysisId",
            )),
        }
    }

    /// One status poll. The caller decides whether to poll again.
    pub async fn poll_status(&self, analysis_id: &str) -> VscanResult<JobStatus> {
        let body = match self.adapter.get_json(&status_endpoint(analysis_id), "status poll").await {
            Ok(body) => body,
            Err(VscanError::HttpError { status, body, .. }) => {
                return Err(VscanError::status_error(
                    analysis_id,
                    &format!("service returned HTTP {}: {}", status, body),
                ));
            }
            Err(other) => return Err(other),
        };

        let payload: StatusResponse = serde_json::from_value(body).unwrap_or_default();

        match payload.status {
            Some(raw) => Ok(JobStatus {
                state: JobState::parse(&raw),
                progress: payload.progress,
            }),
            None => Err(VscanError::status_error(
                analysis_id,
                "response did not contain a status field",
            )),
        }
    }

    /// Poll on a fixed interval until the service reports `completed` or
    /// `failed`, or until the wall-clock deadline is reached. Unrecognized
    /// statuses keep looping; a poll failure aborts the wait immediately.
    pub async fn await_completion(
        &self,
        analysis_id: &str,
        poll_interval_secs: u64,
        max_wait_secs: u64,
    ) -> VscanResult<JobState> {
        let started = Instant::now();
        let poll_interval = sleep_duration_secs(poll_interval_secs);
        let max_wait = timeout_duration(max_wait_secs);

        loop {
            let status = self.poll_status(analysis_id).await?;

            if status.state.is_terminal() {
                log::debug!(
                    "🏁 Analysis {} reached terminal status {} after {:.1}s",
                    analysis_id,
                    status.state,
                    started.elapsed().as_secs_f64()
                );
                return Ok(status.state);
            }

            match status.progress {
                Some(progress) => {
                    log::debug!("⏳ Analysis {}: {} ({}%)", analysis_id, status.state, progress)
                }
                None => log::debug!("⏳ Analysis {}: {}", analysis_id, status.state),
            }

            // Refuse to sleep into a guaranteed timeout.
            if started.elapsed() + poll_interval >= max_wait {
                return Err(VscanError::timeout_error(
                    analysis_id,
                    started.elapsed().as_secs(),
                    status.state.as_str(),
                ));
            }

            sleep(poll_interval).await;
        }
    }

    /// Fetch the final payload. Fields are optional; only a non-success HTTP
    /// response is a failure here.
    pub async fn fetch_result(&self, analysis_id: &str) -> VscanResult<AnalysisResult> {
        let body = match self.adapter.get_json(&results_endpoint(analysis_id), "result fetch").await {
            Ok(body) => body,
            Err(VscanError::HttpError { status, body, .. }) => {
                return Err(VscanError::fetch_error(
                    analysis_id,
                    &format!("service returned HTTP {}: {}", status, body),
                ));
            }
            Err(other) => return Err(other),
        };

        let payload: ResultsResponse = serde_json::from_value(body).unwrap_or_default();
        Ok(AnalysisResult::from_response(payload))
    }

    /// Run the whole workflow for one job and fold the answer, or the first
    /// failure tagged with its stage, into a `WorkflowOutcome`.
    pub async fn run_workflow(&self, job: &mut AnalysisJob, wait_for_completion: bool) -> WorkflowOutcome {
        let mut outcome = WorkflowOutcome::new(&job.publisher, &job.extension_name);

        let analysis_id = match self.submit(&job.publisher, &job.extension_name).await {
            Ok(analysis_id) => analysis_id,
            Err(e) => {
                log::error!("❌ Submission failed for {}: {}", job.extension_id(), e);
                outcome.record_failure(WorkflowStage::Submission, &e);
                return outcome;
            }
        };

        if let Err(e) = job.assign_analysis_id(analysis_id.clone()) {
            outcome.record_failure(WorkflowStage::Submission, &e);
            return outcome;
        }

        if !wait_for_completion {
            outcome.mark_submitted(&analysis_id);
            return outcome;
        }

        outcome.analysis_id = Some(analysis_id.clone());

        let terminal = match self
            .await_completion(&analysis_id, self.polling.poll_interval_secs, self.polling.max_wait_secs)
            .await
        {
            Ok(terminal) => terminal,
            Err(e) => {
                log::error!("❌ Polling failed for {}: {}", job.extension_id(), e);
                outcome.record_failure(WorkflowStage::Polling, &e);
                return outcome;
            }
        };

        if terminal == JobState::Failed {
            log::warn!("⚠️ Analysis {} reported a failed status", analysis_id);
            outcome.mark_failed_terminal();
            return outcome;
        }

        match self.fetch_result(&analysis_id).await {
            Ok(result) => outcome.mark_completed(result),
            Err(e) => {
                log::error!("❌ Result fetch failed for {}: {}", job.extension_id(), e);
                outcome.record_failure(WorkflowStage::Fetch, &e);
            }
        }

        outcome
    }
}
