//! Configuration loading for the tip pool service.
//!
//! This module loads listener and logging settings from a YAML file. The
//! tipout rate tables are not configurable and live in
//! [`crate::calculation`].
//!
//! # Example
//!
//! ```no_run
//! use tip_pool_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Binding {}", config.config().bind_address());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SERVICE_CONFIG_FILE};
pub use types::{LoggingSection, ServerSection, ServiceConfig};
