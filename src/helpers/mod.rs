pub mod config_helper;
pub mod extension_ref;
