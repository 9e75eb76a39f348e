//! Configuration loading for the payroll registry service.
//!
//! This module loads the server and logging settings from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use payroll_registry::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap().into_config();
//! println!("Binding {}", config.server.bind_address());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT, LoggingConfig, ServerConfig,
};
