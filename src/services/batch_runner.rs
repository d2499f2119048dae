use std::sync::Arc;
use tokio::time::sleep;
use crate::config::constants::sleep_duration_secs;
use crate::errors::VscanResult;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::analysis_client::AnalysisClient;
use crate::structs::analysis_job::AnalysisJob;
use crate::structs::config::config::Config;
use crate::structs::config::extension_config::ExtensionConfig;
use crate::structs::workflow_outcome::WorkflowOutcome;

/// Drives one workflow per enabled configured extension. Jobs share nothing, so
/// the parallel mode needs no coordination beyond collecting the outcomes.
pub struct BatchRunner {
    config: Arc<Config>,
    client: AnalysisClient,
}

impl BatchRunner {
    pub fn new(config: Arc<Config>) -> VscanResult<Self> {
        let client = AnalysisClient::new(&config.service, &config.polling)?;
        Ok(Self { config, client })
    }

    pub async fn run(&self, wait_for_completion: bool) -> Vec<WorkflowOutcome> {
        let extensions: Vec<ExtensionConfig> = self.config.extensions
            .iter()
            .filter(|extension| extension.enabled)
            .cloned()
            .collect();

        log::info!("🚀 Analyzing {} extensions", extensions.len());

        if self.config.batch.parallel {
            self.run_concurrent(&extensions, wait_for_completion).await
        } else {
            self.run_sequential(&extensions, wait_for_completion).await
        }
    }

    async fn run_sequential(
        &self,
        extensions: &[ExtensionConfig],
        wait_for_completion: bool,
    ) -> Vec<WorkflowOutcome> {
        let delay = self.config.batch.delay_between_jobs_secs;
        let mut outcomes = Vec::new();

        for (index, extension) in extensions.iter().enumerate() {
            let mut logger = AnimatedLogger::new(format!("Analyzing {}", extension.extension_id()));
            logger.start();

            let mut job = AnalysisJob::new(&extension.publisher, &extension.name);
            let outcome = self.client.run_workflow(&mut job, wait_for_completion).await;

            if outcome.success {
                logger.stop(&format!("{}: {}", extension.extension_id(), outcome.status)).await;
            } else {
                let reason = outcome.error.as_deref().unwrap_or("unknown error");
                logger.error(&format!("{}: {}", extension.extension_id(), reason)).await;
            }

            outcomes.push(outcome);

            if index < extensions.len() - 1 && delay > 0 {
                let mut delay_logger = AnimatedLogger::new(
                    format!("Waiting {}s before next submission", delay),
                );
                delay_logger.start();
                for remaining in (1..=delay).rev() {
                    delay_logger.update(&format!("Waiting {}s before next submission", remaining));
                    sleep(sleep_duration_secs(1)).await;
                }
                delay_logger.stop("Resuming batch").await;
            }
        }

        outcomes
    }

    async fn run_concurrent(
        &self,
        extensions: &[ExtensionConfig],
        wait_for_completion: bool,
    ) -> Vec<WorkflowOutcome> {
        let workflows = extensions.iter().map(|extension| async move {
            let mut job = AnalysisJob::new(&extension.publisher, &extension.name);
            let outcome = self.client.run_workflow(&mut job, wait_for_completion).await;

            if outcome.success {
                log::info!("✅ {}: {}", extension.extension_id(), outcome.status);
            } else {
                log::error!(
                    "❌ {}: {}",
                    extension.extension_id(),
                    outcome.error.as_deref().unwrap_or("unknown error")
                );
            }

            outcome
        });

        futures::future::join_all(workflows).await
    }
}
