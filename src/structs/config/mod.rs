pub mod batch_config;
pub mod config;
pub mod extension_config;
pub mod output_config;
pub mod polling_config;
pub mod service_config;
