use std::fs;
use std::path::{Path, PathBuf};
use crate::errors::VscanResult;
use crate::structs::batch_report::BatchReport;
use crate::structs::config::output_config::OutputConfig;
use crate::structs::workflow_outcome::WorkflowOutcome;

pub struct ReportWriter;

impl ReportWriter {
    /// Serialize the batch outcomes into a timestamped JSON report under the
    /// configured output directory.
    pub fn write_batch_report(outcomes: &[WorkflowOutcome], output: &OutputConfig) -> VscanResult<PathBuf> {
        let report = BatchReport::new(outcomes);

        let dir = Path::new(&output.output_dir);
        fs::create_dir_all(dir)?;

        let file_name = format!(
            "vscan-report-{}.json",
            report.generated_at.format("%Y%m%d-%H%M%S")
        );
        let path = dir.join(file_name);

        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&path, json)?;

        log::info!("💾 Saved batch report to {}", path.display());
        Ok(path)
    }

    pub fn print_summary(outcomes: &[WorkflowOutcome]) {
        let succeeded = outcomes.iter().filter(|o| o.success).count();

        log::info!("\n📊 Batch summary: {} total, {} succeeded, {} failed",
            outcomes.len(), succeeded, outcomes.len() - succeeded);

        for outcome in outcomes {
            if outcome.success {
                match outcome.security_score {
                    Some(score) => log::info!(
                        "  ✅ {} - {} (score: {}, risk: {})",
                        outcome.extension_id(),
                        outcome.status,
                        score,
                        outcome.risk_level.as_deref().unwrap_or("unknown")
                    ),
                    None => log::info!("  ✅ {} - {}", outcome.extension_id(), outcome.status),
                }
            } else {
                log::info!(
                    "  ❌ {} - {} ({})",
                    outcome.extension_id(),
                    outcome.status,
                    outcome.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }
}
