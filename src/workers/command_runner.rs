use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{VscanError, VscanResult};
use crate::helpers::extension_ref::ExtensionRef;
use crate::services::analysis_client::AnalysisClient;
use crate::services::batch_runner::BatchRunner;
use crate::services::report_writer::ReportWriter;
use crate::structs::analysis_job::AnalysisJob;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> VscanResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Scan { extension, no_wait } => self.scan_command(extension, no_wait).await,
            Commands::Batch { output, no_wait } => self.batch_command(output, no_wait).await,
            Commands::List => self.list_command().await,
            Commands::Validate => self.validate_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> VscanResult<()> {
        log::info!("🚀 Initializing vscan configuration...");

        match ConfigManager::create_sample_config() {
            Ok(path) => {
                log::info!("✅ Created sample config at: {}", path.display());
                log::info!("📝 Edit the configuration file to add your extensions.");
                log::info!("🔧 Run 'vscan-cli validate' to check your configuration.");
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                return Err(e);
            }
        }

        Ok(())
    }

    async fn scan_command(&self, extension: String, no_wait: bool) -> VscanResult<()> {
        let reference = ExtensionRef::parse(&extension)?;
        let config = self.load_config()?;

        log::info!("🔍 Analyzing extension: {}", reference.extension_id());

        let client = AnalysisClient::new(&config.service, &config.polling)?;
        let mut job = AnalysisJob::new(&reference.publisher, &reference.name);
        let outcome = client.run_workflow(&mut job, !no_wait).await;

        println!("{}", serde_json::to_string_pretty(&outcome)?);

        if outcome.success {
            log::info!("✅ {} finished with status: {}", reference.extension_id(), outcome.status);
            Ok(())
        } else {
            let stage = outcome.failed_stage.as_deref().unwrap_or("analysis");
            let reason = outcome.error.as_deref().unwrap_or("unknown error");
            Err(VscanError::workflow_error(stage, reason))
        }
    }

    async fn batch_command(&self, output: Option<String>, no_wait: bool) -> VscanResult<()> {
        let mut config = self.load_config()?;

        if let Some(output_dir) = output {
            config.output.output_dir = output_dir;
        }

        if config.extensions.iter().filter(|e| e.enabled).count() == 0 {
            return Err(VscanError::config_error(
                "no enabled extensions configured",
                Some("extensions"),
                Some("run 'vscan-cli init' and add [[extensions]] entries"),
            ));
        }

        let wait_for_completion = !no_wait && config.batch.wait_for_completion;
        let config = Arc::new(config);

        let runner = BatchRunner::new(Arc::clone(&config))?;
        let outcomes = runner.run(wait_for_completion).await;

        ReportWriter::print_summary(&outcomes);

        if config.output.save_report {
            ReportWriter::write_batch_report(&outcomes, &config.output)?;
        }

        let failed = outcomes.iter().filter(|o| !o.success).count();
        if failed > 0 {
            log::warn!("⚠️ {} of {} extensions did not finish cleanly", failed, outcomes.len());
        }

        Ok(())
    }

    async fn list_command(&self) -> VscanResult<()> {
        let config = self.load_config()?;

        log::info!("\n📋 Configured Extensions:");
        log::info!("{}", "=".repeat(50));

        if config.extensions.is_empty() {
            log::info!("⚠️ No extensions configured.");
            log::info!("💡 Run 'vscan-cli init' to create a configuration file.");
            return Ok(());
        }

        for (i, extension) in config.extensions.iter().enumerate() {
            let marker = if extension.enabled { "✅" } else { "⏸️" };
            log::info!("{}. {} {}", i + 1, marker, extension.extension_id());
        }

        log::info!("📊 Total extensions: {}", config.extensions.len());
        Ok(())
    }

    async fn validate_command(&self) -> VscanResult<()> {
        log::info!("🔍 Validating vscan configuration...");

        let config = match ConfigManager::load() {
            Ok(config) => {
                log::info!("✅ Configuration file loaded successfully");
                config
            }
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'vscan-cli init' to create a configuration file.");
                return Err(e);
            }
        };

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                log::info!("📊 Found {} configured extensions", config.extensions.len());
                Ok(())
            }
            Err(problems) => {
                log::error!("❌ Configuration problems found:");
                for problem in &problems {
                    log::error!("   - {}", problem);
                }
                Err(VscanError::config_error(
                    &format!("{} validation problems found", problems.len()),
                    None,
                    Some("fix the problems listed above and re-run 'vscan-cli validate'"),
                ))
            }
        }
    }

    fn load_config(&self) -> VscanResult<Config> {
        let config = ConfigManager::load()?;

        if let Err(problems) = ConfigManager::validate_config(&config) {
            for problem in &problems {
                log::error!("   - {}", problem);
            }
            return Err(VscanError::config_error(
                &format!("{} validation problems found", problems.len()),
                None,
                Some("run 'vscan-cli validate' for details"),
            ));
        }

        Ok(config)
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
