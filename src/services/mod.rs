pub mod analysis_client;
pub mod batch_runner;
pub mod report_writer;
